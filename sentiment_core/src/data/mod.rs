//! Lexicon and training data loading.

pub mod dataset;
pub mod lexicon;

pub use dataset::{SentenceDataset, SentimentClass, TrainingExample};
pub use lexicon::Lexicon;
