//! Interactive paste-and-simplify session.
//!
//! The session reads an article terminated by a line containing only `END`
//! (or end of input), shows its metrics, asks for a target level, simplifies
//! it with a live progress counter and prints both versions. It repeats until
//! the user answers anything but `y`, or pastes an empty article.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::analysis::readability::TextAnalyzer;
use crate::cli::output::write_metrics;
use crate::error::Result;
use crate::level::ProficiencyLevel;
use crate::simplifier::{SimplifiedArticle, Simplifier};

/// Line that terminates a pasted article.
pub const END_MARKER: &str = "END";

/// A terminal session over any line reader and writer.
pub struct InteractiveSession<R, W> {
    input: R,
    output: W,
    analyzer: TextAnalyzer,
}

impl<R, W> InteractiveSession<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        InteractiveSession {
            input,
            output,
            analyzer: TextAnalyzer::new(),
        }
    }

    /// Run until the user stops or input runs out. Returns the number of
    /// articles simplified.
    pub fn run(&mut self) -> Result<usize> {
        self.banner()?;

        let mut count = 0;
        loop {
            let text = self.read_article()?;
            if text.is_empty() {
                break;
            }

            writeln!(self.output, "\noriginal metrics:")?;
            write_metrics(&mut self.output, &self.analyzer.analyze(&text))?;

            let level = self.pick_level()?;
            let article = self.simplify(&text, level)?;
            count += 1;

            writeln!(self.output, "\nsimplified metrics:")?;
            write_metrics(&mut self.output, &self.analyzer.analyze(&article.simplified))?;
            self.print_result(&article)?;

            write!(self.output, "another? [y/n]: ")?;
            self.output.flush()?;
            let answer = self.read_line()?.unwrap_or_default();
            if !answer.trim_start().starts_with('y') {
                break;
            }
        }

        debug!("Interactive session finished after {count} article(s)");
        Ok(count)
    }

    /// Consume the session and return the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn banner(&mut self) -> Result<()> {
        let out = &mut self.output;
        writeln!(out, "\n--- article simplifier ---")?;
        writeln!(out, "a1 = beginner / a2 = elementary\n")?;
        Ok(())
    }

    /// Read lines until `END` or end of input; each kept line ends in `\n`.
    fn read_article(&mut self) -> Result<String> {
        writeln!(self.output, "paste article, then type {END_MARKER} on a new line:\n")?;
        self.output.flush()?;

        let mut article = String::new();
        while let Some(line) = self.read_line()? {
            if line == END_MARKER {
                break;
            }
            article.push_str(&line);
            article.push('\n');
        }
        Ok(article)
    }

    /// `1` selects A1; any other answer selects A2.
    fn pick_level(&mut self) -> Result<ProficiencyLevel> {
        let out = &mut self.output;
        writeln!(out, "output level:")?;
        writeln!(out, "  1 = A1 ({})", ProficiencyLevel::A1.description())?;
        writeln!(out, "  2 = A2 ({})", ProficiencyLevel::A2.description())?;
        write!(out, "> ")?;
        out.flush()?;

        let choice = self.read_line()?.unwrap_or_default();
        Ok(match choice.trim() {
            "1" => ProficiencyLevel::A1,
            _ => ProficiencyLevel::A2,
        })
    }

    /// Simplify with a live counter. The run always completes; the first
    /// failed progress write is returned afterwards.
    fn simplify(&mut self, text: &str, level: ProficiencyLevel) -> Result<SimplifiedArticle> {
        let simplifier = Simplifier::new(level);
        let out = &mut self.output;
        let mut progress_error: Option<io::Error> = None;

        let article = simplifier.run_with_progress(text, |done, total| {
            if progress_error.is_some() {
                return;
            }
            let written = write!(out, "\r  processing... {done}/{total}").and_then(|()| out.flush());
            if let Err(e) = written {
                debug!("Progress output failed at {done}/{total}: {e}");
                progress_error = Some(e);
            }
        });

        if let Some(e) = progress_error {
            return Err(e.into());
        }
        writeln!(self.output)?;
        Ok(article)
    }

    fn print_result(&mut self, article: &SimplifiedArticle) -> Result<()> {
        let out = &mut self.output;
        write!(out, "\n[original]\n{}", article.original)?;
        writeln!(out, "\n[simplified - {}]\n{}", article.level, article.simplified)?;
        Ok(())
    }

    /// Read one line without its line ending; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
