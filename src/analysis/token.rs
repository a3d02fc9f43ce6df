//! Tokens flowing through the analysis pipeline.
//!
//! A tokenizer cuts a sentence into [`Token`]s; token filters then rewrite
//! their text or mark them as stopped. A stopped token keeps travelling down
//! the pipeline until a
//! [`RemoveEmptyFilter`](crate::analysis::token_filter::remove_empty::RemoveEmptyFilter)
//! takes it out.
//!
//! ```
//! use graded::analysis::token::Token;
//!
//! let token = Token::new("utilize").with_text("use");
//! assert_eq!(token.to_string(), "use");
//! assert!(!token.is_stopped());
//! ```

use std::fmt;

/// One whitespace-delimited word, possibly rewritten by filters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Current text; filters may replace it
    pub text: String,

    /// Set by filters that want the token gone
    pub stopped: bool,
}

impl Token {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Token {
            text: text.into(),
            stopped: false,
        }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Mark the token for removal.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Swap in new text, keeping the stopped flag.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Boxed iterator of tokens passed between pipeline stages.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
