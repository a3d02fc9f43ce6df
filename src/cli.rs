//! Command Line Interface for Graded.

pub mod args;
pub mod commands;
pub mod interactive;
pub mod output;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
pub use output::*;
