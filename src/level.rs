//! CEFR proficiency levels.
//!
//! Only the two beginner levels carry vocabulary data and rewrite settings.
//! The full six-band scale appears only as the output of readability
//! estimation (see [`crate::analysis::readability::ReadabilityMetrics`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GradedError, Result};

/// Labels for the estimate bands, indexed by estimate (0 = undetermined).
pub const CEFR_LABELS: [&str; 7] = ["?", "A1", "A2", "B1", "B2", "C1", "C2"];

/// Target proficiency level for simplified output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProficiencyLevel {
    /// Beginner
    #[default]
    A1,
    /// Elementary
    A2,
}

impl ProficiencyLevel {
    /// Maximum number of words a sentence may have before it is split.
    pub fn split_limit(&self) -> usize {
        match self {
            ProficiencyLevel::A1 => 10,
            ProficiencyLevel::A2 => 15,
        }
    }

    /// Whether parenthetical asides are removed at this level.
    pub fn strips_parentheticals(&self) -> bool {
        matches!(self, ProficiencyLevel::A1)
    }

    /// Short human description of the level.
    pub fn description(&self) -> &'static str {
        match self {
            ProficiencyLevel::A1 => "beginner",
            ProficiencyLevel::A2 => "elementary",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProficiencyLevel::A1 => "A1",
            ProficiencyLevel::A2 => "A2",
        }
    }
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProficiencyLevel {
    type Err = GradedError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a1" | "1" => Ok(ProficiencyLevel::A1),
            "a2" | "2" => Ok(ProficiencyLevel::A2),
            other => Err(GradedError::invalid_argument(format!(
                "unknown proficiency level '{other}' (expected a1 or a2)"
            ))),
        }
    }
}

/// Label for a CEFR estimate, `?` for anything outside 1..=6.
pub fn cefr_label(estimate: u8) -> &'static str {
    match estimate {
        1..=6 => CEFR_LABELS[estimate as usize],
        _ => CEFR_LABELS[0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!("a1".parse::<ProficiencyLevel>().unwrap(), ProficiencyLevel::A1);
        assert_eq!("A2".parse::<ProficiencyLevel>().unwrap(), ProficiencyLevel::A2);
        assert_eq!("1".parse::<ProficiencyLevel>().unwrap(), ProficiencyLevel::A1);
        assert_eq!(" 2 ".parse::<ProficiencyLevel>().unwrap(), ProficiencyLevel::A2);
        assert!("b1".parse::<ProficiencyLevel>().is_err());
    }

    #[test]
    fn test_level_settings() {
        assert_eq!(ProficiencyLevel::A1.split_limit(), 10);
        assert_eq!(ProficiencyLevel::A2.split_limit(), 15);
        assert!(ProficiencyLevel::A1.strips_parentheticals());
        assert!(!ProficiencyLevel::A2.strips_parentheticals());
    }

    #[test]
    fn test_cefr_label() {
        assert_eq!(cefr_label(0), "?");
        assert_eq!(cefr_label(1), "A1");
        assert_eq!(cefr_label(4), "B2");
        assert_eq!(cefr_label(6), "C2");
        assert_eq!(cefr_label(7), "?");
    }

    #[test]
    fn test_serde_round_names() {
        let json = serde_json::to_string(&ProficiencyLevel::A2).unwrap();
        assert_eq!(json, "\"A2\"");
        let level: ProficiencyLevel = serde_json::from_str("\"A1\"").unwrap();
        assert_eq!(level, ProficiencyLevel::A1);
    }
}
