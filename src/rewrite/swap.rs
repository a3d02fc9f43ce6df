//! Word substitution stage.

use std::sync::Arc;

use crate::analysis::analyzer::substitution::SubstitutionAnalyzer;
use crate::vocabulary::Vocabulary;

use super::RewriteStage;

/// Replaces difficult words using the level's vocabulary.
///
/// Tokens are whitespace-delimited and rejoined with single spaces, so runs
/// of whitespace inside the sentence collapse and leading/trailing
/// whitespace disappears.
#[derive(Clone, Debug)]
pub struct WordSwapStage {
    analyzer: SubstitutionAnalyzer,
}

impl WordSwapStage {
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        WordSwapStage {
            analyzer: SubstitutionAnalyzer::new(vocabulary),
        }
    }
}

impl RewriteStage for WordSwapStage {
    fn apply(&self, sentence: &str) -> String {
        self.analyzer.rewrite(sentence)
    }

    fn name(&self) -> &'static str {
        "swap_words"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::ProficiencyLevel;

    #[test]
    fn test_swap() {
        let stage = WordSwapStage::new(Arc::new(Vocabulary::new(ProficiencyLevel::A1)));
        assert_eq!(
            stage.apply(" Additionally, we must obtain sufficient assistance."),
            "also, we must get enough help."
        );
    }

    #[test]
    fn test_level_specific_entries() {
        let a1 = WordSwapStage::new(Arc::new(Vocabulary::new(ProficiencyLevel::A1)));
        let a2 = WordSwapStage::new(Arc::new(Vocabulary::new(ProficiencyLevel::A2)));
        assert_eq!(a1.apply("We construct houses."), "We construct houses.");
        assert_eq!(a2.apply("We construct houses."), "We build houses.");
    }
}
