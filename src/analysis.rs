//! Text analysis module for Graded.
//!
//! This module provides the building blocks shared by readability scoring and
//! sentence rewriting: tokenization, token filtering, analysis pipelines,
//! character-level filters, sentence splitting, and syllable counting.

pub mod analyzer;
pub mod char_filter;
pub mod readability;
pub mod sentence;
pub mod syllable;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
