//! Sentence-level rewriting toward a target proficiency level.
//!
//! A sentence passes through a fixed, ordered list of text stages and is then
//! split into shorter chunks if it is still too long:
//!
//! ```text
//! sentence → strip parentheticals → swap words → passive voice → split → chunks
//! ```
//!
//! The passive voice stage is an identity transform. It holds its place in
//! the stage list so that the order of stages stays stable once a real
//! passive-to-active conversion exists.

pub mod paren;
pub mod passive;
pub mod rewriter;
pub mod splitter;
pub mod swap;

pub use rewriter::SentenceRewriter;

/// One text-to-text step of the rewrite pipeline.
pub trait RewriteStage: Send + Sync {
    /// Apply this stage to one sentence.
    fn apply(&self, sentence: &str) -> String;

    /// Get the name of this stage (for logging and inspection).
    fn name(&self) -> &'static str;
}
