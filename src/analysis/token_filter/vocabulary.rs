//! Vocabulary substitution filter.
//!
//! Replaces each token's word with the simpler synonym from a shared
//! [`Vocabulary`]. Trailing punctuation is peeled off before the lookup and
//! put back afterwards, so `"utilize,"` becomes `"use,"`.

use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::vocabulary::Vocabulary;

use super::Filter;

/// Filter that swaps difficult words for simpler ones.
#[derive(Clone, Debug)]
pub struct VocabularyFilter {
    vocabulary: Arc<Vocabulary>,
}

impl VocabularyFilter {
    /// Create a new vocabulary filter over a shared vocabulary.
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        VocabularyFilter { vocabulary }
    }

    /// Get the vocabulary used by this filter.
    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    /// Substitute a single whitespace-delimited word.
    pub fn substitute(&self, word: &str) -> String {
        let (stem, punct) = split_trailing_punctuation(word);
        let mut out = String::with_capacity(word.len());
        out.push_str(self.vocabulary.get_simpler_word(stem));
        out.push_str(punct);
        out
    }
}

impl Filter for VocabularyFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    return token;
                }
                let replaced = self.substitute(&token.text);
                token.with_text(replaced)
            })
            .collect::<Vec<_>>();

        Box::new(filtered_tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "vocabulary"
    }
}

/// Split a word into its stem and the run of ASCII punctuation at its end.
pub fn split_trailing_punctuation(word: &str) -> (&str, &str) {
    let stem = word.trim_end_matches(|c: char| c.is_ascii_punctuation());
    (stem, &word[stem.len()..])
}
