//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of an analysis pipeline: they break raw
//! text into [`Token`](crate::analysis::token::Token)s.
//!
//! # Examples
//!
//! ```
//! use graded::analysis::tokenizer::Tokenizer;
//! use graded::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
///
/// Tokenization cannot fail: any input, including the empty string, yields
/// a (possibly empty) stream.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod whitespace;
