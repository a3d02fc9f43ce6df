//! Level-specific vocabulary for word substitution.
//!
//! A [`Vocabulary`] maps difficult words to simpler synonyms. Each
//! [`ProficiencyLevel`] has a compiled-in table; A2 readers get the A1 table
//! plus a handful of extra entries. Supplementary entries can be merged in
//! from a JSON file at construction time, after which the table is frozen.
//!
//! # Examples
//!
//! ```
//! use graded::level::ProficiencyLevel;
//! use graded::vocabulary::Vocabulary;
//!
//! let vocab = Vocabulary::new(ProficiencyLevel::A1);
//! assert_eq!(vocab.get_simpler_word("Utilize"), "use");
//! assert_eq!(vocab.get_simpler_word("Hello"), "Hello");
//! assert!(!vocab.is_simple("utilize"));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use log::{debug, warn};

use crate::error::{GradedError, Result};
use crate::level::ProficiencyLevel;

/// Base substitutions, available at every level.
const A1_ENTRIES: &[(&str, &str)] = &[
    ("utilize", "use"),
    ("commence", "start"),
    ("terminate", "end"),
    ("residence", "home"),
    ("purchase", "buy"),
    ("inquire", "ask"),
    ("observe", "see"),
    ("obtain", "get"),
    ("assistance", "help"),
    ("demonstrate", "show"),
    ("approximately", "about"),
    ("sufficient", "enough"),
    ("however", "but"),
    ("therefore", "so"),
    ("additionally", "also"),
    ("attempt", "try"),
    ("require", "need"),
];

/// Extra substitutions layered on top of the base table for A2.
const A2_ENTRIES: &[(&str, &str)] = &[
    ("facilitate", "help"),
    ("construct", "build"),
    ("complete", "finish"),
    ("numerous", "many"),
    ("previously", "before"),
];

/// Read-only mapping from a difficult word to a simpler replacement.
///
/// Keys and values are stored lower-cased; lookups lower-case the query.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    level: ProficiencyLevel,
    table: HashMap<String, String>,
}

impl Vocabulary {
    /// Build the compiled-in vocabulary for a level.
    pub fn new(level: ProficiencyLevel) -> Self {
        let mut table = HashMap::new();
        Self::load_entries(&mut table, A1_ENTRIES);
        if level == ProficiencyLevel::A2 {
            Self::load_entries(&mut table, A2_ENTRIES);
        }

        Vocabulary { level, table }
    }

    /// Build the vocabulary for a level and merge supplementary entries.
    ///
    /// Later entries win over earlier ones and over the compiled-in table.
    /// Entries with an empty key or value are skipped.
    pub fn with_entries<I, K, V>(level: ProficiencyLevel, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut vocab = Self::new(level);
        for (word, simpler) in entries {
            let word = word.as_ref().trim().to_lowercase();
            let simpler = simpler.as_ref().trim().to_lowercase();
            if word.is_empty() || simpler.is_empty() {
                warn!("Skipping vocabulary entry with empty word or replacement");
                continue;
            }
            if let Some(previous) = vocab.table.insert(word.clone(), simpler.clone()) {
                if previous != simpler {
                    warn!("Vocabulary entry '{word}' overrides '{previous}' with '{simpler}'");
                }
            }
        }
        vocab
    }

    /// Build the vocabulary for a level and merge entries from a JSON file.
    ///
    /// The file holds a single object mapping words to simpler words:
    ///
    /// ```json
    /// { "endeavour": "try", "commence": "begin" }
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(level: ProficiencyLevel, path: P) -> Result<Self> {
        let entries = Self::read_entries(path)?;
        Ok(Self::with_entries(level, entries))
    }

    /// Read supplementary entries from a JSON file without building a vocabulary.
    pub fn read_entries<P: AsRef<Path>>(path: P) -> Result<BTreeMap<String, String>> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            GradedError::vocabulary(format!(
                "Failed to read vocabulary file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let entries: BTreeMap<String, String> = serde_json::from_str(&content).map_err(|e| {
            GradedError::vocabulary(format!(
                "Failed to parse vocabulary JSON from '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(
            "Read {} vocabulary entries from '{}'",
            entries.len(),
            path.display()
        );
        Ok(entries)
    }

    fn load_entries(table: &mut HashMap<String, String>, entries: &[(&str, &str)]) {
        for (word, simpler) in entries {
            table.insert((*word).to_string(), (*simpler).to_string());
        }
    }

    /// The level this vocabulary was built for.
    pub fn level(&self) -> ProficiencyLevel {
        self.level
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// True when the word is *not* in the difficulty table.
    ///
    /// This only says the word has not been flagged as difficult; it does not
    /// claim the word is known to be simple.
    pub fn is_simple(&self, word: &str) -> bool {
        !self.table.contains_key(&word.to_lowercase())
    }

    /// The simpler replacement for a word, or the word itself (case kept)
    /// when it is not in the table.
    pub fn get_simpler_word<'a>(&'a self, word: &'a str) -> &'a str {
        match self.table.get(&word.to_lowercase()) {
            Some(simpler) => simpler.as_str(),
            None => word,
        }
    }

    /// Iterate over `(word, replacement)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.table.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
