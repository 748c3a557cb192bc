//! # Marathi Sentiment Core
//!
//! Sentence and paragraph level sentiment analysis for short, informally
//! romanized (transliterated Marathi) text.
//!
//! Training labels are derived from a word-level sentiment lexicon: each
//! sentence's lexicon score is min-max normalized over the batch into
//! [-3, 3] and bucketed into a 7-point scale, then a linear SVM is fit over
//! a bag-of-words representation of the cleaned sentences. Inference
//! normalizes the input, vectorizes it against the training vocabulary and
//! predicts one of the seven classes.
//!
//! ## Quick Start
//!
//! ```rust
//! use marathi_sentiment_core::{Lexicon, SentimentAnalyzer, TrainingConfig};
//!
//! let lexicon = Lexicon::from_entries([("khush", 2), ("sad", -2)]);
//! let sentences = vec![
//!     "mi khup khush aahe".to_string(),
//!     "aaj khush vatat aahe".to_string(),
//!     "to khush disat hota".to_string(),
//!     "ti khush hoti".to_string(),
//!     "amhi sagle khush aahot".to_string(),
//!     "mi aaj sad aahe".to_string(),
//!     "tyala sad vatla".to_string(),
//!     "to sad disat hota".to_string(),
//!     "ti sad hoti".to_string(),
//!     "amhi sagle sad aahot".to_string(),
//! ];
//!
//! let mut analyzer = SentimentAnalyzer::new(lexicon, sentences, TrainingConfig::default());
//! let report = analyzer.train().expect("training data is well formed");
//! assert!(analyzer.is_trained());
//! assert!((0.0..=1.0).contains(&report.accuracy));
//!
//! let result = analyzer.analyze_sentence("mi khup khush aahe").unwrap();
//! println!("{} -> {} [{}]", result.text, result.label, result.score);
//! ```
//!
//! ## Core Modules
//!
//! - [`text`] - deterministic cleaning and sentence segmentation
//! - [`data`] - lexicon and training data loading
//! - [`learner`] - calibration, vectorization and the linear SVM
//! - [`analyzer`] - the trained inference service
//! - [`config`] - TOML configuration
//! - [`logging`] - JSON line-delimited run logging

pub mod analyzer;
pub mod config;
pub mod data;
pub mod error;
pub mod learner;
pub mod logging;
pub mod text;

pub use analyzer::{
    AnalysisResult, ParagraphResult, SentimentAnalyzer, EMPTY_SENTENCE_PLACEHOLDER,
};
pub use config::{AnalyzerConfig, ConfigError};
pub use data::{Lexicon, SentenceDataset, SentimentClass, TrainingExample};
pub use error::{SentimentError, SentimentResult};
pub use learner::{
    build_examples, bucket, calibrate, normalize_batch, train_pipeline, CountVectorizer,
    LinearSvm, SvmConfig, TrainingConfig, TrainingReport,
};
pub use text::{normalize, split_sentences};
