//! Word analyzer used by readability scoring.
//!
//! Splits on whitespace, removes every non-alphabetic character from each
//! token, and drops tokens left empty. What remains are the words that count
//! towards sentence length and syllable totals.

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::remove_empty::RemoveEmptyFilter;
use crate::analysis::token_filter::strip::StripFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;

/// Analyzer producing the alphabetic words of a text.
#[derive(Clone)]
pub struct WordAnalyzer {
    inner: PipelineAnalyzer,
}

impl WordAnalyzer {
    /// Create a new word analyzer.
    pub fn new() -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(StripFilter::new()))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
            .with_name("word");

        WordAnalyzer { inner: analyzer }
    }
}

impl Default for WordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for WordAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

impl std::fmt::Debug for WordAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_word_analyzer() {
        let analyzer = WordAnalyzer::new();
        let tokens: Vec<Token> = analyzer
            .analyze("It's 5 o'clock -- time (really) to go!")
            .collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Its", "oclock", "time", "really", "to", "go"]);
    }

    #[test]
    fn test_analyzer_name() {
        assert_eq!(WordAnalyzer::new().name(), "word");
    }
}
