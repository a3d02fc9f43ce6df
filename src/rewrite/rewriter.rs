//! The sentence rewriter.

use std::sync::Arc;

use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::level::ProficiencyLevel;
use crate::vocabulary::Vocabulary;

use super::RewriteStage;
use super::paren::ParenStripStage;
use super::passive::PassiveVoiceStage;
use super::splitter::ConjunctionSplitter;
use super::swap::WordSwapStage;

/// Rewrites single sentences for one proficiency level.
///
/// The rewriter holds a shared handle to its vocabulary and never modifies
/// it; after construction it is a read-only transform.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use graded::level::ProficiencyLevel;
/// use graded::rewrite::SentenceRewriter;
/// use graded::vocabulary::Vocabulary;
///
/// let vocabulary = Arc::new(Vocabulary::new(ProficiencyLevel::A1));
/// let rewriter = SentenceRewriter::new(ProficiencyLevel::A1, vocabulary);
///
/// let chunks = rewriter.rewrite("We will commence (at last) the project.");
/// assert_eq!(chunks, vec!["We will start the project."]);
/// ```
#[derive(Clone, Debug)]
pub struct SentenceRewriter {
    level: ProficiencyLevel,
    vocabulary: Arc<Vocabulary>,
    paren: ParenStripStage,
    swap: WordSwapStage,
    passive: PassiveVoiceStage,
    splitter: ConjunctionSplitter,
}

impl SentenceRewriter {
    /// Create a rewriter for `level` backed by a shared vocabulary.
    pub fn new(level: ProficiencyLevel, vocabulary: Arc<Vocabulary>) -> Self {
        Self::with_aside_filter(level, vocabulary, PatternReplaceCharFilter::parentheticals())
    }

    /// Create a rewriter whose aside stage removes matches of `asides`.
    pub fn with_aside_filter(
        level: ProficiencyLevel,
        vocabulary: Arc<Vocabulary>,
        asides: PatternReplaceCharFilter,
    ) -> Self {
        SentenceRewriter {
            level,
            paren: ParenStripStage::new(level, asides),
            swap: WordSwapStage::new(Arc::clone(&vocabulary)),
            passive: PassiveVoiceStage::new(),
            splitter: ConjunctionSplitter::new(level.split_limit()),
            vocabulary,
        }
    }

    pub fn level(&self) -> ProficiencyLevel {
        self.level
    }

    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    /// The text stages in the order [`rewrite`](Self::rewrite) applies them.
    pub fn stages(&self) -> [&dyn RewriteStage; 3] {
        [&self.paren, &self.swap, &self.passive]
    }

    /// Names of the text stages, in order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages().iter().map(|stage| stage.name()).collect()
    }

    /// Remove asides, `( ... )` spans by default (A1 only).
    pub fn strip_parens(&self, sentence: &str) -> String {
        self.paren.apply(sentence)
    }

    /// Substitute difficult words, keeping trailing punctuation.
    pub fn swap_words(&self, sentence: &str) -> String {
        self.swap.apply(sentence)
    }

    /// Passive-to-active conversion; currently returns the input unchanged.
    pub fn fix_passive(&self, sentence: &str) -> String {
        self.passive.apply(sentence)
    }

    /// Split a sentence that exceeds the level's word limit.
    pub fn try_split(&self, sentence: &str) -> Vec<String> {
        self.splitter.split(sentence)
    }

    /// Run every stage in order, then split.
    pub fn rewrite(&self, sentence: &str) -> Vec<String> {
        let rewritten = self
            .stages()
            .iter()
            .fold(sentence.to_string(), |text, stage| stage.apply(&text));
        self.try_split(&rewritten)
    }
}
