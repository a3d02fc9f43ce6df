//! Command line argument parsing for Graded CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::level::ProficiencyLevel;

/// Graded - readability scoring and CEFR simplification
#[derive(Parser, Debug, Clone)]
#[command(name = "graded")]
#[command(about = "Estimate reading difficulty and simplify text for A1/A2 learners")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct GradedArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl GradedArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Report readability metrics for a text
    Analyze(AnalyzeArgs),

    /// Rewrite a text for a target level
    Simplify(SimplifyArgs),

    /// Paste articles and simplify them one after another
    Interactive,
}

/// Arguments for analyzing a text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text file to analyze (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,
}

/// Arguments for simplifying a text
#[derive(Parser, Debug, Clone)]
pub struct SimplifyArgs {
    /// Text file to simplify (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Target level (a1 or a2); overrides the config file
    #[arg(short, long, env = "GRADED_LEVEL")]
    pub level: Option<ProficiencyLevel>,

    /// JSON file of extra `word -> simpler word` entries
    #[arg(long, value_name = "VOCABULARY_FILE")]
    pub vocabulary: Option<PathBuf>,

    /// Simplifier configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Show per-sentence progress on stderr
    #[arg(long)]
    pub progress: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
