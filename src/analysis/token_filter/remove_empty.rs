//! Removal of stopped tokens.
//!
//! Last stage of the word pipeline: drops every token an earlier filter
//! stopped or emptied, so only countable words reach readability scoring.
//!
//! ```
//! use graded::analysis::token::Token;
//! use graded::analysis::token_filter::Filter;
//! use graded::analysis::token_filter::remove_empty::RemoveEmptyFilter;
//!
//! let tokens = vec![Token::new("wait"), Token::new("--").stop(), Token::new("what")];
//! let words: Vec<_> = RemoveEmptyFilter::new().filter(Box::new(tokens.into_iter())).collect();
//!
//! assert_eq!(words.len(), 2);
//! assert_eq!(words[1].text, "what");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;

/// Drops stopped and empty tokens.
#[derive(Clone, Copy, Debug, Default)]
pub struct RemoveEmptyFilter;

impl RemoveEmptyFilter {
    pub fn new() -> Self {
        RemoveEmptyFilter
    }
}

impl Filter for RemoveEmptyFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        Box::new(tokens.filter(|token| !token.is_stopped() && !token.is_empty()))
    }

    fn name(&self) -> &'static str {
        "remove_empty"
    }
}
