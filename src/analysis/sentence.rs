//! Delimiter-based sentence splitting.
//!
//! A sentence closes at every `.`, `!` or `?`, and the delimiter stays on the
//! sentence it closes. Nothing else is trimmed or normalised, so leading
//! whitespace from the previous sentence boundary is kept.
//!
//! Readability scoring ignores a trailing fragment without a delimiter,
//! while simplification must not drop any input; the two behaviours are
//! selected with [`SentenceSplitter::keep_trailing`].
//!
//! ```
//! use graded::analysis::sentence::SentenceSplitter;
//!
//! let strict = SentenceSplitter::new();
//! assert_eq!(strict.split("One. Two! Three"), vec!["One.", " Two!"]);
//!
//! let lossless = SentenceSplitter::new().keep_trailing(true);
//! assert_eq!(lossless.split("One. Two! Three"), vec!["One.", " Two!", " Three"]);
//! ```

/// Characters that end a sentence.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Whether a character ends a sentence.
pub fn is_terminator(c: char) -> bool {
    SENTENCE_TERMINATORS.contains(&c)
}

/// Splits text into sentences on terminal punctuation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SentenceSplitter {
    keep_trailing: bool,
}

impl SentenceSplitter {
    /// Create a splitter that drops an unterminated trailing fragment.
    pub fn new() -> Self {
        SentenceSplitter {
            keep_trailing: false,
        }
    }

    /// Choose whether an unterminated trailing fragment is emitted.
    pub fn keep_trailing(mut self, keep: bool) -> Self {
        self.keep_trailing = keep;
        self
    }

    /// Split `text` into sentence slices.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for (offset, c) in text.char_indices() {
            if is_terminator(c) {
                let end = offset + c.len_utf8();
                sentences.push(&text[start..end]);
                start = end;
            }
        }

        if self.keep_trailing && start < text.len() {
            sentences.push(&text[start..]);
        }

        sentences
    }
}
