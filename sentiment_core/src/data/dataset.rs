//! Sentiment classes and training data.
//!
//! `SentimentClass` is the fixed 7-point scale every pipeline stage speaks;
//! `SentenceDataset` loads the raw training sentences from CSV, and
//! `TrainingExample` is the per-sentence record the trainer consumes.

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SentimentError, SentimentResult};

/// 7 sentiment classes on the fixed -3..=3 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(i8)]
pub enum SentimentClass {
    MostNegative = -3,
    MoreNegative = -2,
    Negative = -1,
    Neutral = 0,
    Positive = 1,
    MorePositive = 2,
    MostPositive = 3,
}

impl SentimentClass {
    /// Integer value of this class on the -3..=3 scale.
    pub fn value(self) -> i8 {
        self as i8
    }

    /// Get the class for an integer value in -3..=3.
    pub fn from_value(value: i8) -> Option<Self> {
        match value {
            -3 => Some(SentimentClass::MostNegative),
            -2 => Some(SentimentClass::MoreNegative),
            -1 => Some(SentimentClass::Negative),
            0 => Some(SentimentClass::Neutral),
            1 => Some(SentimentClass::Positive),
            2 => Some(SentimentClass::MorePositive),
            3 => Some(SentimentClass::MostPositive),
            _ => None,
        }
    }

    /// Human-readable label for this class.
    pub fn label(self) -> &'static str {
        match self {
            SentimentClass::MostNegative => "Most Negative",
            SentimentClass::MoreNegative => "More Negative",
            SentimentClass::Negative => "Negative",
            SentimentClass::Neutral => "Neutral",
            SentimentClass::Positive => "Positive",
            SentimentClass::MorePositive => "More Positive",
            SentimentClass::MostPositive => "Most Positive",
        }
    }

    /// Total number of sentiment classes.
    pub fn num_classes() -> usize {
        7
    }

    /// All classes in ascending order.
    pub fn all() -> [SentimentClass; 7] {
        [
            SentimentClass::MostNegative,
            SentimentClass::MoreNegative,
            SentimentClass::Negative,
            SentimentClass::Neutral,
            SentimentClass::Positive,
            SentimentClass::MorePositive,
            SentimentClass::MostPositive,
        ]
    }
}

/// One fully processed training sentence.
///
/// Built once per training run and discarded after the trainer consumes it;
/// nothing here is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingExample {
    /// Original sentence as read from the data source.
    pub raw: String,
    /// Normalized sentence (lowercased ASCII letters and single spaces).
    pub cleaned: String,
    /// Raw lexicon score.
    pub raw_score: i32,
    /// Batch min-max normalized score in [-3, 3].
    pub normalized_score: f64,
    /// Calibrated class label.
    pub label: SentimentClass,
}

/// One row of the training data CSV.
#[derive(Debug, Deserialize)]
struct SentenceRecord {
    #[serde(rename = "Sentence")]
    sentence: String,
}

/// Raw training sentences, in source order.
#[derive(Debug, Clone, Default)]
pub struct SentenceDataset {
    pub sentences: Vec<String>,
}

impl SentenceDataset {
    /// Load sentences from a CSV file with a `Sentence` column.
    pub fn load_from_csv<P: AsRef<Path>>(path: P) -> SentimentResult<Self> {
        let path_display = path.as_ref().display().to_string();
        let file = File::open(&path).map_err(|err| SentimentError::DataSource {
            path: path_display.clone(),
            details: err.to_string(),
        })?;

        let mut reader = csv::Reader::from_reader(file);
        let mut sentences = Vec::new();
        for record in reader.deserialize() {
            let record: SentenceRecord = record.map_err(|err| SentimentError::DataSource {
                path: path_display.clone(),
                details: err.to_string(),
            })?;
            sentences.push(record.sentence);
        }

        Ok(Self { sentences })
    }

    /// Wrap in-memory sentences, mostly for tests and demos.
    pub fn from_sentences(sentences: Vec<String>) -> Self {
        Self { sentences }
    }

    /// Number of sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_values_round_trip() {
        for class in SentimentClass::all() {
            assert_eq!(SentimentClass::from_value(class.value()), Some(class));
        }
        assert_eq!(SentimentClass::from_value(4), None);
        assert_eq!(SentimentClass::from_value(-4), None);
    }

    #[test]
    fn test_class_labels() {
        assert_eq!(SentimentClass::MostNegative.label(), "Most Negative");
        assert_eq!(SentimentClass::Neutral.label(), "Neutral");
        assert_eq!(SentimentClass::MostPositive.label(), "Most Positive");
    }

    #[test]
    fn test_all_is_ascending() {
        let values: Vec<i8> = SentimentClass::all().iter().map(|c| c.value()).collect();
        assert_eq!(values, vec![-3, -2, -1, 0, 1, 2, 3]);
        assert_eq!(SentimentClass::all().len(), SentimentClass::num_classes());
    }

    #[test]
    fn test_missing_file_is_data_source_error() {
        let err = SentenceDataset::load_from_csv("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, SentimentError::DataSource { .. }));
    }
}
