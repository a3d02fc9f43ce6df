//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::analysis::readability::ReadabilityMetrics;
use crate::cli::args::{GradedArgs, OutputFormat};
use crate::error::Result;
use crate::level::ProficiencyLevel;
use crate::simplifier::SimplifiedArticle;

/// Result structure for the analyze command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metrics: ReadabilityMetrics,
    pub estimated_level: String,
}

impl AnalysisReport {
    pub fn new(metrics: ReadabilityMetrics) -> Self {
        AnalysisReport {
            estimated_level: metrics.cefr_label().to_string(),
            metrics,
        }
    }
}

/// Result structure for the simplify command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplificationReport {
    pub level: ProficiencyLevel,
    pub original_metrics: AnalysisReport,
    pub simplified_metrics: AnalysisReport,
    pub simplified: String,
}

impl SimplificationReport {
    pub fn new(
        article: &SimplifiedArticle,
        original: ReadabilityMetrics,
        simplified: ReadabilityMetrics,
    ) -> Self {
        SimplificationReport {
            level: article.level,
            original_metrics: AnalysisReport::new(original),
            simplified_metrics: AnalysisReport::new(simplified),
            simplified: article.simplified.clone(),
        }
    }
}

/// Write metrics as the three-line human block.
pub fn write_metrics<W: Write>(out: &mut W, metrics: &ReadabilityMetrics) -> Result<()> {
    writeln!(out, "  flesch score:       {}", metrics.flesch_score.round() as i64)?;
    writeln!(
        out,
        "  avg words/sentence: {}",
        metrics.avg_words_per_sentence.round() as i64
    )?;
    writeln!(out, "  estimated level:    {}", metrics.cefr_label())?;
    writeln!(out)?;
    Ok(())
}

/// Write a result in the format selected on the command line.
pub fn output_analysis<W: Write>(out: &mut W, report: &AnalysisReport, args: &GradedArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                writeln!(out, "metrics:")?;
            }
            write_metrics(out, &report.metrics)
        }
        OutputFormat::Json => output_json(out, report, args),
    }
}

/// Write a simplification report in the format selected on the command line.
pub fn output_simplification<W: Write>(
    out: &mut W,
    report: &SimplificationReport,
    args: &GradedArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                writeln!(out, "original metrics:")?;
                write_metrics(out, &report.original_metrics.metrics)?;
                writeln!(out, "simplified metrics:")?;
                write_metrics(out, &report.simplified_metrics.metrics)?;
                writeln!(out, "[simplified - {}]", report.level)?;
            }
            writeln!(out, "{}", report.simplified)?;
            Ok(())
        }
        OutputFormat::Json => output_json(out, report, args),
    }
}

fn output_json<W: Write, T: Serialize>(out: &mut W, result: &T, args: &GradedArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::analysis::readability::TextAnalyzer;

    fn args(extra: &[&str]) -> GradedArgs {
        let mut argv = vec!["graded"];
        argv.extend_from_slice(extra);
        argv.push("analyze");
        GradedArgs::parse_from(argv)
    }

    #[test]
    fn test_write_metrics() {
        let metrics = TextAnalyzer::new().analyze("The cat sat on the mat.");
        let mut out = Vec::new();
        write_metrics(&mut out, &metrics).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("flesch score:       116"));
        assert!(text.contains("avg words/sentence: 6"));
        assert!(text.contains("estimated level:    A1"));
    }

    #[test]
    fn test_undetermined_metrics_label() {
        let mut out = Vec::new();
        write_metrics(&mut out, &ReadabilityMetrics::default()).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("estimated level:    ?"));
    }

    #[test]
    fn test_output_analysis_json() {
        let report = AnalysisReport::new(TextAnalyzer::new().analyze("I run."));
        let mut out = Vec::new();
        output_analysis(&mut out, &report, &args(&["--format", "json"])).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["estimated_level"], "A1");
        assert_eq!(value["metrics"]["cefr_estimate"], 1);
        assert_eq!(value["metrics"]["avg_words_per_sentence"], 2.0);
    }

    #[test]
    fn test_output_simplification_quiet_prints_text_only() {
        let article = SimplifiedArticle {
            original: "We utilize it.".to_string(),
            simplified: "We use it.".to_string(),
            level: ProficiencyLevel::A1,
        };
        let analyzer = TextAnalyzer::new();
        let report = SimplificationReport::new(
            &article,
            analyzer.analyze(&article.original),
            analyzer.analyze(&article.simplified),
        );

        let mut out = Vec::new();
        output_simplification(&mut out, &report, &args(&["-q"])).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "We use it.\n");
    }
}
