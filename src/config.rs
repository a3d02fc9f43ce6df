//! Simplifier configuration.
//!
//! A configuration names the target level and, optionally, supplementary
//! vocabulary: a JSON file of `word → simpler word` entries and/or inline
//! entries. It may also replace the regex that marks asides removed at A1.
//! Configurations are plain JSON:
//!
//! ```json
//! {
//!   "level": "A1",
//!   "vocabulary_file": "extra_words.json",
//!   "extra_vocabulary": { "endeavour": "try" },
//!   "aside_pattern": "\\[[^\\]]*\\]"
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::error::{GradedError, Result};
use crate::level::ProficiencyLevel;
use crate::vocabulary::Vocabulary;

/// Settings for one simplification run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplifierConfig {
    /// Target level
    pub level: ProficiencyLevel,

    /// JSON file with supplementary vocabulary entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary_file: Option<PathBuf>,

    /// Inline supplementary vocabulary entries, applied after the file
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra_vocabulary: BTreeMap<String, String>,

    /// Regex for asides removed at A1; `( ... )` spans when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aside_pattern: Option<String>,
}

impl SimplifierConfig {
    /// Configuration for a level with no supplementary vocabulary.
    pub fn new(level: ProficiencyLevel) -> Self {
        SimplifierConfig {
            level,
            ..Default::default()
        }
    }

    /// Set the supplementary vocabulary file.
    pub fn with_vocabulary_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.vocabulary_file = Some(path.into());
        self
    }

    /// Add an inline vocabulary entry.
    pub fn with_entry<K: Into<String>, V: Into<String>>(mut self, word: K, simpler: V) -> Self {
        self.extra_vocabulary.insert(word.into(), simpler.into());
        self
    }

    /// Set the regex for asides removed at A1.
    pub fn with_aside_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.aside_pattern = Some(pattern.into());
        self
    }

    /// Load a configuration from a JSON file.
    ///
    /// A relative `vocabulary_file` is resolved against the directory the
    /// configuration file lives in.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            GradedError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut config: SimplifierConfig = serde_json::from_str(&content).map_err(|e| {
            GradedError::config(format!(
                "Failed to parse config JSON from '{}': {}",
                path.display(),
                e
            ))
        })?;

        if let (Some(file), Some(dir)) = (&config.vocabulary_file, path.parent()) {
            if file.is_relative() {
                config.vocabulary_file = Some(dir.join(file));
            }
        }

        debug!("Loaded config from '{}': {:?}", path.display(), config);
        Ok(config)
    }

    /// Build the frozen vocabulary this configuration describes.
    ///
    /// Entries are layered compiled-in table, then file, then inline.
    pub fn build_vocabulary(&self) -> Result<Vocabulary> {
        let mut entries = match &self.vocabulary_file {
            Some(path) => Vocabulary::read_entries(path)?,
            None => BTreeMap::new(),
        };
        // Inline entries win over file entries with the same key.
        entries.extend(self.extra_vocabulary.clone());

        Ok(Vocabulary::with_entries(self.level, entries))
    }

    /// Compile the filter that removes asides.
    ///
    /// An invalid `aside_pattern` is reported as [`GradedError::Anyhow`]
    /// wrapping the regex error.
    pub fn build_aside_filter(&self) -> Result<PatternReplaceCharFilter> {
        match &self.aside_pattern {
            Some(pattern) => PatternReplaceCharFilter::new(pattern, ""),
            None => Ok(PatternReplaceCharFilter::parentheticals()),
        }
    }
}
