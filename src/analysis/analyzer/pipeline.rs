//! Pipeline analyzer that combines a tokenizer and filters.
//!
//! The PipelineAnalyzer applies processing in this order:
//! 1. Tokenizer: Splits text into tokens
//! 2. Token Filters: Applied sequentially in the order they were added
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use graded::analysis::analyzer::analyzer::Analyzer;
//! use graded::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use graded::analysis::token_filter::remove_empty::RemoveEmptyFilter;
//! use graded::analysis::token_filter::strip::StripFilter;
//! use graded::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
//!     .add_filter(Arc::new(StripFilter::new()))
//!     .add_filter(Arc::new(RemoveEmptyFilter::new()))
//!     .with_name("letters_only");
//!
//! let tokens: Vec<_> = analyzer.analyze("Hello, 42 world!").collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "Hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        let mut tokens = self.tokenizer.tokenize(text);

        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }

        tokens
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;
    use crate::analysis::token_filter::remove_empty::RemoveEmptyFilter;
    use crate::analysis::token_filter::strip::StripFilter;
    use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;

    #[test]
    fn test_pipeline_analyzer() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(StripFilter::new()))
            .add_filter(Arc::new(RemoveEmptyFilter::new()));

        let tokens: Vec<Token> = analyzer.analyze("(Hello) -- world! 3.5").collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "Hello");
        assert_eq!(tokens[1].text, "world");
    }

    #[test]
    fn test_filter_order_matters() {
        // Removing empties before stripping leaves the stripped-out token stopped but present.
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
            .add_filter(Arc::new(StripFilter::new()));

        let tokens: Vec<Token> = analyzer.analyze("a -- b").collect();
        assert_eq!(tokens.len(), 3);
        assert!(tokens[1].is_stopped());
    }

    #[test]
    fn test_pipeline_names() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(StripFilter::new()));
        assert_eq!(analyzer.name(), "pipeline");

        let debug = format!("{analyzer:?}");
        assert!(debug.contains("pipeline_whitespace"));
        assert!(debug.contains("strip"));

        let debug = format!("{:?}", analyzer.with_name("custom"));
        assert!(debug.contains("\"custom\""));
    }
}
