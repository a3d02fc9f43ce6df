//! Readability scoring.
//!
//! [`TextAnalyzer`] computes the Flesch reading-ease score of a text and maps
//! it onto an estimated CEFR band. The band cut-offs are rough and have never
//! been calibrated against graded corpora.
//!
//! # Examples
//!
//! ```
//! use graded::analysis::readability::TextAnalyzer;
//!
//! let metrics = TextAnalyzer::new().analyze("The cat sat on the mat.");
//! assert_eq!(metrics.avg_words_per_sentence, 6.0);
//! assert_eq!(metrics.avg_syllables_per_word, 1.0);
//! assert_eq!(metrics.cefr_estimate, 1);
//! assert_eq!(metrics.cefr_label(), "A1");
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::word::WordAnalyzer;
use crate::analysis::sentence::SentenceSplitter;
use crate::analysis::syllable::count_syllables;
use crate::level::cefr_label;

/// Lower bounds of the Flesch score for estimates 1 through 5; anything
/// below the last bound is estimate 6.
pub const CEFR_FLESCH_BANDS: [f64; 5] = [80.0, 65.0, 50.0, 40.0, 25.0];

/// Readability figures for one text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityMetrics {
    /// Words per sentence
    pub avg_words_per_sentence: f64,

    /// Syllables per word
    pub avg_syllables_per_word: f64,

    /// Flesch reading ease; higher is easier, not clamped to 0..=100
    pub flesch_score: f64,

    /// Estimated CEFR band 1 (A1) ..= 6 (C2), or 0 when undetermined
    pub cefr_estimate: u8,
}

impl ReadabilityMetrics {
    /// Whether the text had at least one sentence to score.
    pub fn is_determined(&self) -> bool {
        self.cefr_estimate != 0
    }

    /// The estimate as a CEFR label, `?` when undetermined.
    pub fn cefr_label(&self) -> &'static str {
        cefr_label(self.cefr_estimate)
    }
}

/// Flesch reading-ease formula.
pub fn flesch_score(words_per_sentence: f64, syllables_per_word: f64) -> f64 {
    206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word
}

/// Map a Flesch score to a CEFR band 1..=6.
pub fn estimate_cefr(flesch: f64) -> u8 {
    CEFR_FLESCH_BANDS
        .iter()
        .position(|&bound| flesch >= bound)
        .map_or(6, |band| band as u8 + 1)
}

/// Computes [`ReadabilityMetrics`] for arbitrary text.
#[derive(Clone, Debug, Default)]
pub struct TextAnalyzer {
    splitter: SentenceSplitter,
    words: WordAnalyzer,
}

impl TextAnalyzer {
    /// Create a new text analyzer.
    pub fn new() -> Self {
        TextAnalyzer {
            splitter: SentenceSplitter::new(),
            words: WordAnalyzer::new(),
        }
    }

    /// Score a text.
    ///
    /// Only terminated sentences are scored. Text with no `.`, `!` or `?`
    /// yields all-zero metrics with an undetermined estimate.
    pub fn analyze(&self, text: &str) -> ReadabilityMetrics {
        let sentences = self.splitter.split(text);
        if sentences.is_empty() {
            return ReadabilityMetrics::default();
        }

        let mut total_words = 0usize;
        let mut total_syllables = 0usize;
        for sentence in &sentences {
            for token in self.words.analyze(sentence) {
                total_words += 1;
                total_syllables += count_syllables(&token.text);
            }
        }

        let avg_words_per_sentence = total_words as f64 / sentences.len() as f64;
        let avg_syllables_per_word = if total_words > 0 {
            total_syllables as f64 / total_words as f64
        } else {
            0.0
        };
        let flesch = flesch_score(avg_words_per_sentence, avg_syllables_per_word);

        ReadabilityMetrics {
            avg_words_per_sentence,
            avg_syllables_per_word,
            flesch_score: flesch,
            cefr_estimate: estimate_cefr(flesch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_sentence() {
        let metrics = TextAnalyzer::new().analyze("The cat sat on the mat.");
        assert_eq!(metrics.avg_words_per_sentence, 6.0);
        assert_eq!(metrics.avg_syllables_per_word, 1.0);
        assert!((metrics.flesch_score - 116.145).abs() < 1e-9);
        assert_eq!(metrics.cefr_estimate, 1);
    }

    #[test]
    fn test_no_terminator_is_undetermined() {
        let analyzer = TextAnalyzer::new();
        for text in ["", "   ", "no terminator at all", "line one\nline two"] {
            let metrics = analyzer.analyze(text);
            assert_eq!(metrics, ReadabilityMetrics::default());
            assert_eq!(metrics.flesch_score, 0.0);
            assert_eq!(metrics.cefr_estimate, 0);
            assert!(!metrics.is_determined());
            assert_eq!(metrics.cefr_label(), "?");
        }
    }

    #[test]
    fn test_unterminated_tail_is_ignored() {
        let analyzer = TextAnalyzer::new();
        assert_eq!(
            analyzer.analyze("The cat sat on the mat. And then it left forever"),
            analyzer.analyze("The cat sat on the mat.")
        );
    }

    #[test]
    fn test_punctuation_only_sentence() {
        // One sentence with zero words: no division by zero.
        let metrics = TextAnalyzer::new().analyze("...");
        assert_eq!(metrics.avg_words_per_sentence, 0.0);
        assert_eq!(metrics.avg_syllables_per_word, 0.0);
        assert!((metrics.flesch_score - 206.835).abs() < 1e-9);
        assert_eq!(metrics.cefr_estimate, 1);
    }

    #[test]
    fn test_hard_text_scores_higher_band() {
        let analyzer = TextAnalyzer::new();
        let easy = analyzer.analyze("I see a dog. The dog is big. It runs.");
        let hard = analyzer.analyze(
            "Notwithstanding considerable institutional resistance, the administration \
             systematically implemented comprehensive organizational restructuring initiatives.",
        );
        assert!(easy.flesch_score > hard.flesch_score);
        assert!(easy.cefr_estimate < hard.cefr_estimate);
        assert_eq!(hard.cefr_estimate, 6);
        assert_eq!(hard.cefr_label(), "C2");
    }

    #[test]
    fn test_estimate_band_boundaries() {
        assert_eq!(estimate_cefr(120.0), 1);
        assert_eq!(estimate_cefr(80.0), 1);
        assert_eq!(estimate_cefr(79.99), 2);
        assert_eq!(estimate_cefr(65.0), 2);
        assert_eq!(estimate_cefr(64.99), 3);
        assert_eq!(estimate_cefr(50.0), 3);
        assert_eq!(estimate_cefr(49.99), 4);
        assert_eq!(estimate_cefr(40.0), 4);
        assert_eq!(estimate_cefr(39.99), 5);
        assert_eq!(estimate_cefr(25.0), 5);
        assert_eq!(estimate_cefr(24.99), 6);
        assert_eq!(estimate_cefr(-50.0), 6);
    }

    #[test]
    fn test_estimate_is_monotonic() {
        let mut previous = estimate_cefr(200.0);
        let mut score = 200.0;
        while score > -100.0 {
            let estimate = estimate_cefr(score);
            assert!(estimate >= previous, "estimate dropped at {score}");
            previous = estimate;
            score -= 0.5;
        }
    }

    #[test]
    fn test_flesch_formula() {
        assert!((flesch_score(10.0, 1.5) - (206.835 - 10.15 - 126.9)).abs() < 1e-9);
    }
}
