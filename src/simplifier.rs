//! Whole-document simplification.
//!
//! [`Simplifier`] splits a document into sentences, rewrites each one with a
//! [`SentenceRewriter`], and stitches the resulting fragments back together
//! as tidy sentences. Processing is strictly sequential: fragments keep the
//! order of the sentences they came from, and chunks of a split sentence
//! keep their left-to-right order.
//!
//! # Examples
//!
//! ```
//! use graded::level::ProficiencyLevel;
//! use graded::simplifier::Simplifier;
//!
//! let mut simplifier = Simplifier::new(ProficiencyLevel::A1);
//! let article = simplifier.run("we must utilize the residence (for now) today. however it is small");
//!
//! assert_eq!(article.simplified, "We must use the home today. But it is small.");
//! assert_eq!(article.level, ProficiencyLevel::A1);
//! ```

use std::fmt;
use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::sentence::{SentenceSplitter, is_terminator};
use crate::config::SimplifierConfig;
use crate::error::Result;
use crate::level::ProficiencyLevel;
use crate::rewrite::SentenceRewriter;
use crate::vocabulary::Vocabulary;

/// Progress callback, invoked as `(completed, total)` after each sentence.
pub type ProgressFn = Box<dyn FnMut(usize, usize)>;

/// The result of one simplification run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifiedArticle {
    /// The input text, unchanged
    pub original: String,

    /// The rewritten text
    pub simplified: String,

    /// The level the text was rewritten for
    pub level: ProficiencyLevel,
}

/// Rewrites whole documents for one proficiency level.
pub struct Simplifier {
    level: ProficiencyLevel,
    rewriter: SentenceRewriter,
    splitter: SentenceSplitter,
    progress: Option<ProgressFn>,
}

impl Simplifier {
    /// Create a simplifier using the compiled-in vocabulary for `level`.
    pub fn new(level: ProficiencyLevel) -> Self {
        Self::with_vocabulary(level, Vocabulary::new(level))
    }

    /// Create a simplifier with a prepared vocabulary.
    pub fn with_vocabulary(level: ProficiencyLevel, vocabulary: Vocabulary) -> Self {
        Self::with_rewriter(SentenceRewriter::new(level, Arc::new(vocabulary)))
    }

    /// Create a simplifier from a configuration, loading any supplementary
    /// vocabulary it names and compiling its aside pattern.
    pub fn with_config(config: &SimplifierConfig) -> Result<Self> {
        let vocabulary = config.build_vocabulary()?;
        let asides = config.build_aside_filter()?;
        Ok(Self::with_rewriter(SentenceRewriter::with_aside_filter(
            config.level,
            Arc::new(vocabulary),
            asides,
        )))
    }

    fn with_rewriter(rewriter: SentenceRewriter) -> Self {
        Simplifier {
            level: rewriter.level(),
            rewriter,
            splitter: SentenceSplitter::new().keep_trailing(true),
            progress: None,
        }
    }

    pub fn level(&self) -> ProficiencyLevel {
        self.level
    }

    pub fn rewriter(&self) -> &SentenceRewriter {
        &self.rewriter
    }

    /// Register a progress callback, replacing any previous one.
    ///
    /// The callback runs inline, between one sentence and the next, so slow
    /// work inside it stalls the run.
    pub fn set_progress<F>(&mut self, callback: F)
    where
        F: FnMut(usize, usize) + 'static,
    {
        self.progress = Some(Box::new(callback));
    }

    /// Remove the progress callback.
    pub fn clear_progress(&mut self) {
        self.progress = None;
    }

    /// Split a document into sentences, keeping an unterminated tail.
    pub fn split_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.splitter.split(text)
    }

    /// Join fragments into tidy sentences.
    ///
    /// Each fragment loses its leading whitespace, is skipped if nothing is
    /// left, gets an upper-case first letter and a closing `.` unless it
    /// already ends in `.`, `!` or `?`. Fragments are separated by single
    /// spaces.
    pub fn rejoin<S: AsRef<str>>(fragments: &[S]) -> String {
        let mut sentences: Vec<String> = Vec::with_capacity(fragments.len());
        for fragment in fragments {
            let fragment = fragment.as_ref().trim_start();
            let mut chars = fragment.chars();
            let Some(first) = chars.next() else {
                continue;
            };

            let mut sentence: String = first.to_uppercase().collect();
            sentence.push_str(chars.as_str());
            if !sentence.ends_with(is_terminator) {
                sentence.push('.');
            }
            sentences.push(sentence);
        }
        sentences.join(" ")
    }

    /// Simplify a whole document, reporting to the registered callback.
    pub fn run(&mut self, text: &str) -> SimplifiedArticle {
        let mut progress = self.progress.take();
        let article = self.run_with_progress(text, |done, total| {
            if let Some(callback) = progress.as_mut() {
                callback(done, total);
            }
        });
        self.progress = progress;
        article
    }

    /// Simplify a whole document, reporting to `progress` instead of the
    /// registered callback.
    pub fn run_with_progress<F>(&self, text: &str, mut progress: F) -> SimplifiedArticle
    where
        F: FnMut(usize, usize),
    {
        let sentences = self.split_sentences(text);
        let total = sentences.len();

        let mut fragments: Vec<String> = Vec::new();
        for (index, sentence) in sentences.iter().enumerate() {
            let chunks = self.rewriter.rewrite(sentence);
            debug!("Sentence {}/{} rewritten into {} fragment(s)", index + 1, total, chunks.len());
            fragments.extend(chunks);

            progress(index + 1, total);
        }

        info!(
            "Simplified {} sentence(s) into {} fragment(s) at level {}",
            total,
            fragments.len(),
            self.level
        );

        SimplifiedArticle {
            original: text.to_string(),
            simplified: Self::rejoin(&fragments),
            level: self.level,
        }
    }
}

impl fmt::Debug for Simplifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simplifier")
            .field("level", &self.level)
            .field("rewriter", &self.rewriter)
            .field("progress", &self.progress.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    #[test]
    fn test_split_sentences_keeps_tail() {
        let simplifier = Simplifier::new(ProficiencyLevel::A1);
        assert_eq!(
            simplifier.split_sentences("One. Two? three"),
            vec!["One.", " Two?", " three"]
        );
        assert_eq!(simplifier.split_sentences("no end"), vec!["no end"]);
        assert!(simplifier.split_sentences("").is_empty());
    }

    #[test]
    fn test_rejoin() {
        assert_eq!(
            Simplifier::rejoin(&["hello world", "goodbye"]),
            "Hello world. Goodbye."
        );
        assert_eq!(
            Simplifier::rejoin(&["  wait!", "", "   ", "really?", "ok."]),
            "Wait! Really? Ok."
        );
        assert_eq!(Simplifier::rejoin::<&str>(&[]), "");
    }

    #[test]
    fn test_rejoin_non_ascii_first_letter() {
        assert_eq!(Simplifier::rejoin(&["élan vital"]), "Élan vital.");
    }

    #[test]
    fn test_run_scenario() {
        let mut simplifier = Simplifier::new(ProficiencyLevel::A1);
        let article = simplifier.run(
            "The teacher will utilize new methods and the students will commence their \
             projects and they will terminate early.",
        );
        assert_eq!(
            article.simplified,
            "The teacher will use new methods and. The students will start their projects and. \
             They will end early."
        );
    }

    #[test]
    fn test_run_keeps_original() {
        let text = "Numerous people (in fact, most) previously lived here.\n";
        let article = Simplifier::new(ProficiencyLevel::A2).run(text);
        assert_eq!(article.original, text);
        assert_eq!(article.level, ProficiencyLevel::A2);
        assert_eq!(
            article.simplified,
            "Many people (in fact, most) before lived here."
        );
    }

    #[test]
    fn test_run_empty() {
        let article = Simplifier::new(ProficiencyLevel::A1).run("");
        assert_eq!(article.simplified, "");
    }

    #[test]
    fn test_progress_is_reported_in_order() {
        let mut calls = Vec::new();
        let simplifier = Simplifier::new(ProficiencyLevel::A1);
        simplifier.run_with_progress("One. Two. Three", |done, total| calls.push((done, total)));
        assert_eq!(calls, vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn test_registered_progress_survives_runs() {
        let (tx, rx) = mpsc::channel();
        let mut simplifier = Simplifier::new(ProficiencyLevel::A1);
        simplifier.set_progress(move |done, total| tx.send((done, total)).unwrap());

        simplifier.run("One. Two.");
        simplifier.run("Three.");
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![(1, 2), (2, 2), (1, 1)]);
    }

    #[test]
    fn test_clear_progress() {
        let (tx, rx) = mpsc::channel();
        let mut simplifier = Simplifier::new(ProficiencyLevel::A1);
        simplifier.set_progress(move |done, _| tx.send(done).unwrap());
        simplifier.clear_progress();

        let article = simplifier.run("One. Two.");
        assert!(rx.try_recv().is_err());
        assert_eq!(article, Simplifier::new(ProficiencyLevel::A1).run("One. Two."));
    }

    #[test]
    fn test_with_config() {
        let config = SimplifierConfig::new(ProficiencyLevel::A1).with_entry("vast", "big");
        let mut simplifier = Simplifier::with_config(&config).unwrap();
        assert_eq!(simplifier.run("A vast room.").simplified, "A big room.");
    }

    #[test]
    fn test_with_config_aside_pattern() {
        let config = SimplifierConfig::new(ProficiencyLevel::A1).with_aside_pattern(r"\[[^\]]*\]");
        let mut simplifier = Simplifier::with_config(&config).unwrap();
        assert_eq!(
            simplifier.run("See the map [page 4] (left).").simplified,
            "See the map (left)."
        );
    }

    #[test]
    fn test_with_config_rejects_bad_aside_pattern() {
        let config = SimplifierConfig::new(ProficiencyLevel::A1).with_aside_pattern("(oops");
        assert!(matches!(
            Simplifier::with_config(&config),
            Err(crate::error::GradedError::Anyhow(_))
        ));
    }
}
