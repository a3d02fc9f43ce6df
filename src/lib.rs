//! # Graded
//!
//! Readability scoring and simplification of English reading material for
//! language learners at CEFR levels A1 and A2.
//!
//! ## Features
//!
//! - Flesch reading-ease scoring with a CEFR band estimate
//! - Level-specific vocabulary substitution
//! - Removal of parenthetical asides for beginners
//! - Splitting of long sentences at conjunctions
//! - Token-stream analysis pipeline (tokenizers, filters, analyzers)
//!
//! ## Example
//!
//! ```
//! use graded::analysis::readability::TextAnalyzer;
//! use graded::level::ProficiencyLevel;
//! use graded::simplifier::Simplifier;
//!
//! let text = "We must obtain sufficient assistance.";
//! let article = Simplifier::new(ProficiencyLevel::A1).run(text);
//! assert_eq!(article.simplified, "We must get enough help.");
//!
//! let analyzer = TextAnalyzer::new();
//! let before = analyzer.analyze(text);
//! let after = analyzer.analyze(&article.simplified);
//! assert!(after.flesch_score > before.flesch_score);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod level;
pub mod rewrite;
pub mod simplifier;
pub mod vocabulary;

pub mod prelude {
    pub use crate::analysis::readability::{ReadabilityMetrics, TextAnalyzer};
    pub use crate::config::SimplifierConfig;
    pub use crate::error::{GradedError, Result};
    pub use crate::level::ProficiencyLevel;
    pub use crate::rewrite::SentenceRewriter;
    pub use crate::simplifier::{SimplifiedArticle, Simplifier};
    pub use crate::vocabulary::Vocabulary;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
