//! Strip filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;

/// A filter that removes every non-alphabetic character from tokens.
///
/// Tokens that end up empty are marked as stopped rather than dropped, so a
/// [`RemoveEmptyFilter`](super::remove_empty::RemoveEmptyFilter) placed
/// after this one decides what actually leaves the stream.
#[derive(Clone, Debug, Default)]
pub struct StripFilter;

impl StripFilter {
    /// Create a new strip filter.
    pub fn new() -> Self {
        StripFilter
    }
}

impl Filter for StripFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    return token;
                }
                let letters: String = token.text.chars().filter(|c| c.is_alphabetic()).collect();
                if letters.is_empty() {
                    token.with_text(letters).stop()
                } else {
                    token.with_text(letters)
                }
            })
            .collect::<Vec<_>>();

        Box::new(filtered_tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "strip"
    }
}
