//! Conjunction-based splitting of long sentences.

use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;

/// Words after which a long sentence may be cut.
pub const SPLIT_CONJUNCTIONS: [&str; 3] = ["and", "but", "because"];

/// Greedy left-to-right splitter for sentences over a word limit.
///
/// A chunk closes right after a conjunction once it holds at least
/// `limit / 2` words. The conjunction stays at the end of the chunk it
/// closes. There is no grammar behind this; a long sentence without a
/// suitable conjunction is returned as a single chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConjunctionSplitter {
    limit: usize,
}

impl ConjunctionSplitter {
    pub fn new(limit: usize) -> Self {
        ConjunctionSplitter { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Split a sentence into chunks.
    ///
    /// Sentences of at most `limit` words come back unchanged as the only
    /// chunk. Longer ones come back as chunks of single-space-joined words.
    pub fn split(&self, sentence: &str) -> Vec<String> {
        let words = WhitespaceTokenizer::words(sentence);
        if words.len() <= self.limit {
            return vec![sentence.to_string()];
        }

        let min_chunk = self.limit / 2;
        let mut chunks = Vec::new();
        let mut chunk: Vec<&str> = Vec::new();
        for word in words {
            chunk.push(word);
            if chunk.len() >= min_chunk && is_split_conjunction(word) {
                chunks.push(chunk.join(" "));
                chunk.clear();
            }
        }
        if !chunk.is_empty() {
            chunks.push(chunk.join(" "));
        }

        chunks
    }
}

fn is_split_conjunction(word: &str) -> bool {
    SPLIT_CONJUNCTIONS
        .iter()
        .any(|c| c.eq_ignore_ascii_case(word))
}
