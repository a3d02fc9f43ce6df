//! Token filter implementations for token transformation.
//!
//! Filters receive a stream of tokens and produce a new stream. They can
//! rewrite token text, mark tokens as stopped, or drop them.
//!
//! # Available Filters
//!
//! - [`strip::StripFilter`] - Removes every non-alphabetic character from a token
//! - [`remove_empty::RemoveEmptyFilter`] - Removes empty and stopped tokens
//! - [`vocabulary::VocabularyFilter`] - Replaces difficult words with simpler ones
//!
//! # Examples
//!
//! ```
//! use graded::analysis::token::Token;
//! use graded::analysis::token_filter::Filter;
//! use graded::analysis::token_filter::strip::StripFilter;
//!
//! let filter = StripFilter::new();
//! let tokens = vec![Token::new("don't"), Token::new("stop!")];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! assert_eq!(filtered[0].text, "dont");
//! assert_eq!(filtered[1].text, "stop");
//! ```

use crate::analysis::token::TokenStream;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> TokenStream;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod remove_empty;
pub mod strip;
pub mod vocabulary;
