//! Command implementations for Graded CLI.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::time::Instant;

use log::info;

use crate::analysis::readability::TextAnalyzer;
use crate::cli::args::*;
use crate::cli::interactive::InteractiveSession;
use crate::cli::output::*;
use crate::config::SimplifierConfig;
use crate::error::{GradedError, Result};
use crate::simplifier::Simplifier;

/// Execute a CLI command.
pub fn execute_command(args: GradedArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze_text(analyze_args.clone(), &args),
        Command::Simplify(simplify_args) => simplify_text(simplify_args.clone(), &args),
        Command::Interactive => run_interactive(&args),
    }
}

/// Report readability metrics for a file or stdin.
fn analyze_text(args: AnalyzeArgs, cli_args: &GradedArgs) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    let report = AnalysisReport::new(TextAnalyzer::new().analyze(&text));

    let stdout = io::stdout();
    output_analysis(&mut stdout.lock(), &report, cli_args)
}

/// Simplify a file or stdin for the requested level.
fn simplify_text(args: SimplifyArgs, cli_args: &GradedArgs) -> Result<()> {
    let config = build_config(&args)?;
    let mut simplifier = Simplifier::with_config(&config)?;

    if args.progress {
        simplifier.set_progress(|done, total| {
            eprint!("\r  processing... {done}/{total}");
            if done == total {
                eprintln!();
            }
        });
    }

    let text = read_input(args.input.as_deref())?;

    let start = Instant::now();
    let article = simplifier.run(&text);
    info!("Simplification took {:?}", start.elapsed());

    let analyzer = TextAnalyzer::new();
    let report = SimplificationReport::new(
        &article,
        analyzer.analyze(&article.original),
        analyzer.analyze(&article.simplified),
    );

    let stdout = io::stdout();
    output_simplification(&mut stdout.lock(), &report, cli_args)
}

/// Run the paste-and-simplify loop on stdin/stdout.
fn run_interactive(cli_args: &GradedArgs) -> Result<()> {
    if cli_args.output_format == OutputFormat::Json {
        return Err(GradedError::invalid_argument(
            "Interactive mode only supports human output",
        ));
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = InteractiveSession::new(stdin.lock(), stdout.lock());
    session.run()?;
    Ok(())
}

/// Resolve the simplifier configuration from the command line.
///
/// Starts from `--config` (or the defaults), then applies `--level` and
/// `--vocabulary` on top.
pub fn build_config(args: &SimplifyArgs) -> Result<SimplifierConfig> {
    let mut config = match &args.config {
        Some(path) => SimplifierConfig::load_from_file(path)?,
        None => SimplifierConfig::default(),
    };

    if let Some(level) = args.level {
        config.level = level;
    }
    if let Some(vocabulary) = &args.vocabulary {
        config.vocabulary_file = Some(vocabulary.clone());
    }

    Ok(config)
}

/// Read a whole text from a file, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            GradedError::invalid_argument(format!(
                "Failed to read input file '{}': {}",
                path.display(),
                e
            ))
        }),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;
    use crate::level::ProficiencyLevel;

    fn simplify_args() -> SimplifyArgs {
        SimplifyArgs {
            input: None,
            level: None,
            vocabulary: None,
            config: None,
            progress: false,
        }
    }

    #[test]
    fn test_build_config_defaults() {
        let config = build_config(&simplify_args()).unwrap();
        assert_eq!(config, SimplifierConfig::default());
    }

    #[test]
    fn test_build_config_overrides_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.json");
        fs::write(&config_path, r#"{"level": "A1", "extra_vocabulary": {"vast": "big"}}"#).unwrap();

        let args = SimplifyArgs {
            level: Some(ProficiencyLevel::A2),
            vocabulary: Some(PathBuf::from("words.json")),
            config: Some(config_path),
            ..simplify_args()
        };
        let config = build_config(&args).unwrap();

        assert_eq!(config.level, ProficiencyLevel::A2);
        assert_eq!(config.vocabulary_file, Some(PathBuf::from("words.json")));
        assert_eq!(config.extra_vocabulary.get("vast").map(String::as_str), Some("big"));
    }

    #[test]
    fn test_read_input_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("article.txt");
        fs::write(&path, "The cat sat on the mat.").unwrap();

        assert_eq!(read_input(Some(&path)).unwrap(), "The cat sat on the mat.");
    }

    #[test]
    fn test_read_input_missing_file() {
        let result = read_input(Some(Path::new("/nonexistent/article.txt")));
        assert!(matches!(result, Err(GradedError::InvalidArgument(_))));
    }
}
