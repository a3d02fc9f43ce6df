//! Parenthetical removal stage.

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::level::ProficiencyLevel;

use super::RewriteStage;

/// Deletes asides for levels that strip parentheticals.
///
/// An aside is whatever the stage's filter matches, usually
/// [`PatternReplaceCharFilter::parentheticals`]. The whitespace around a
/// removed span is left as it was; the word swap stage collapses it later.
#[derive(Clone, Debug)]
pub struct ParenStripStage {
    level: ProficiencyLevel,
    filter: PatternReplaceCharFilter,
}

impl ParenStripStage {
    /// A stage removing matches of `filter` when `level` strips asides.
    pub fn new(level: ProficiencyLevel, filter: PatternReplaceCharFilter) -> Self {
        ParenStripStage { level, filter }
    }
}

impl RewriteStage for ParenStripStage {
    fn apply(&self, sentence: &str) -> String {
        if !self.level.strips_parentheticals() {
            return sentence.to_string();
        }
        self.filter.filter(sentence)
    }

    fn name(&self) -> &'static str {
        "strip_parens"
    }
}
