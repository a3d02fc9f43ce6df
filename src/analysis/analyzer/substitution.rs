//! Substitution analyzer used by sentence rewriting.
//!
//! Splits on whitespace and runs every token through a
//! [`VocabularyFilter`]. Joining the resulting tokens with single spaces
//! gives the rewritten sentence.

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::vocabulary::VocabularyFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::vocabulary::Vocabulary;

/// Analyzer that swaps difficult words for simpler ones.
#[derive(Clone)]
pub struct SubstitutionAnalyzer {
    inner: PipelineAnalyzer,
}

impl SubstitutionAnalyzer {
    /// Create a substitution analyzer over a shared vocabulary.
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(VocabularyFilter::new(vocabulary)))
            .with_name("substitution");

        SubstitutionAnalyzer { inner: analyzer }
    }

    /// Rewrite a text, joining substituted tokens with single spaces.
    pub fn rewrite(&self, text: &str) -> String {
        self.analyze(text)
            .map(|token| token.text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Analyzer for SubstitutionAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "substitution"
    }
}

impl std::fmt::Debug for SubstitutionAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubstitutionAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
