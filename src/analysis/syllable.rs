//! Vowel-group syllable counting.
//!
//! There is no pronunciation dictionary behind this; a syllable starts at
//! every vowel (`a e i o u y`) that does not follow another vowel, and a
//! final `e` on a word longer than two letters is treated as silent.

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Approximate the number of syllables in a word. Never less than 1.
///
/// ```
/// use graded::analysis::syllable::count_syllables;
///
/// assert_eq!(count_syllables("cat"), 1);
/// assert_eq!(count_syllables("table"), 1);
/// assert_eq!(count_syllables("reading"), 2);
/// assert_eq!(count_syllables("--"), 1);
/// ```
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();

    let mut count: usize = 0;
    let mut last_was_vowel = false;
    for c in word.chars() {
        let is_vowel = VOWELS.contains(&c);
        if is_vowel && !last_was_vowel {
            count += 1;
        }
        last_was_vowel = is_vowel;
    }

    // silent e
    if word.chars().count() > 2 && word.ends_with('e') {
        count = count.saturating_sub(1);
    }

    count.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_groups() {
        assert_eq!(count_syllables("the"), 1);
        assert_eq!(count_syllables("mat"), 1);
        assert_eq!(count_syllables("beautiful"), 3);
        assert_eq!(count_syllables("approximately"), 6);
        assert_eq!(count_syllables("rhythm"), 1);
    }

    #[test]
    fn test_silent_e() {
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("complete"), 2);
        // Too short for the silent-e rule.
        assert_eq!(count_syllables("be"), 1);
        // The rule fires even where the 'e' is voiced.
        assert_eq!(count_syllables("recipe"), 2);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(count_syllables("UTILIZE"), count_syllables("utilize"));
    }

    #[test]
    fn test_minimum_of_one() {
        for word in ["", "x", "brr", "123", "--", "e", "the", "ee"] {
            assert!(count_syllables(word) >= 1, "{word:?}");
        }
    }
}
