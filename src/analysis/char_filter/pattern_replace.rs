use regex::Regex;

use super::CharFilter;
use crate::error::{GradedError, Result};

/// Matches a parenthesised span that contains no closing parenthesis.
pub const PARENTHETICAL_PATTERN: &str = r"\([^)]*\)";

/// A char filter that replaces every match of a regex pattern.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern).map_err(|e| GradedError::Anyhow(anyhow::Error::from(e)))?,
            replacement: replacement.to_string(),
        })
    }

    /// A filter that deletes `( ... )` asides without touching the
    /// whitespace around them.
    pub fn parentheticals() -> Self {
        Self {
            pattern: parenthetical_regex().clone(),
            replacement: String::new(),
        }
    }

    /// The pattern this filter replaces.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

fn parenthetical_regex() -> &'static Regex {
    use std::sync::LazyLock;

    static PARENTHETICAL: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(PARENTHETICAL_PATTERN).unwrap_or_else(|e| panic!("invalid built-in pattern: {e}"))
    });
    &PARENTHETICAL
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}
