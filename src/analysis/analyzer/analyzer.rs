//! The analyzer trait.

use crate::analysis::token::TokenStream;

/// Trait for analyzers that convert text into processed tokens.
///
/// # Examples
///
/// ```
/// use graded::analysis::analyzer::analyzer::Analyzer;
/// use graded::analysis::analyzer::word::WordAnalyzer;
///
/// let analyzer = WordAnalyzer::new();
/// let tokens: Vec<_> = analyzer.analyze("The cat -- sat.").collect();
///
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[2].text, "sat");
/// ```
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// This performs the complete analysis pipeline, tokenization followed
    /// by all configured filters.
    fn analyze(&self, text: &str) -> TokenStream;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
