//! Analyzers that combine a tokenizer with a chain of token filters.
//!
//! - [`pipeline::PipelineAnalyzer`] - Generic tokenizer + filters pipeline
//! - [`word::WordAnalyzer`] - Whitespace words reduced to their letters, as
//!   counted by readability scoring
//! - [`substitution::SubstitutionAnalyzer`] - Whitespace words with difficult
//!   vocabulary swapped out, as used by sentence rewriting

#[allow(clippy::module_inception)]
pub mod analyzer;
pub mod pipeline;
pub mod substitution;
pub mod word;
