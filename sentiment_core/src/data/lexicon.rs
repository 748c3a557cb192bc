//! Word-level sentiment lexicon and rule-based scorer.
//!
//! The lexicon maps already-lowercased romanized words to integer polarity
//! weights, loaded from a CSV file with `Word,Score` columns. Lookup is a
//! case-sensitive exact match; words that are absent contribute weight 0
//! (open-world scoring). There is intentionally no stemming, partial
//! matching or negation handling.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::error::{SentimentError, SentimentResult};

/// One row of the lexicon CSV.
#[derive(Debug, Deserialize)]
struct LexiconRecord {
    #[serde(rename = "Word")]
    word: String,
    #[serde(rename = "Score")]
    score: i32,
}

/// Mapping from word to polarity weight.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    weights: HashMap<String, i32>,
}

impl Lexicon {
    /// Load the lexicon from a `Word,Score` CSV file.
    pub fn load_from_csv<P: AsRef<Path>>(path: P) -> SentimentResult<Self> {
        let path_display = path.as_ref().display().to_string();
        let file = File::open(&path).map_err(|err| SentimentError::DataSource {
            path: path_display.clone(),
            details: err.to_string(),
        })?;

        let mut reader = csv::Reader::from_reader(file);
        let mut weights = HashMap::new();
        for record in reader.deserialize() {
            let record: LexiconRecord = record.map_err(|err| SentimentError::DataSource {
                path: path_display.clone(),
                details: err.to_string(),
            })?;
            weights.insert(record.word, record.score);
        }

        Ok(Self { weights })
    }

    /// Build a lexicon from in-memory entries, mostly for tests and demos.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        let weights = entries
            .into_iter()
            .map(|(word, score)| (word.into(), score))
            .collect();
        Self { weights }
    }

    /// Polarity weight for a word; unknown words weigh 0.
    pub fn weight(&self, word: &str) -> i32 {
        self.weights.get(word).copied().unwrap_or(0)
    }

    /// Whether the word is present in the lexicon.
    pub fn contains(&self, word: &str) -> bool {
        self.weights.contains_key(word)
    }

    /// Number of lexicon entries.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check if the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum lexicon weights over a cleaned sentence's whitespace tokens.
    ///
    /// Order-independent pure summation; blank input scores 0.
    pub fn score(&self, cleaned_sentence: &str) -> i32 {
        cleaned_sentence
            .split_whitespace()
            .map(|word| self.weight(word))
            .sum()
    }
}
