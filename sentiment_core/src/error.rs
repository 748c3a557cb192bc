//! Error types for the sentiment pipeline.
//!
//! Data and training failures are fatal at initialization time and leave the
//! analyzer untrained; inference failures are rejected per call. No retry
//! logic lives in this crate.

use std::fmt;

/// Result type alias for sentiment pipeline operations.
pub type SentimentResult<T> = Result<T, SentimentError>;

/// Error kinds surfaced by the pipeline.
#[derive(Debug)]
pub enum SentimentError {
    /// Lexicon or training data file absent or unreadable.
    DataSource { path: String, details: String },

    /// Inference was attempted before a successful training run.
    ModelNotTrained { operation: String },

    /// Training data is empty or spans fewer than two classes.
    TrainingDegenerate { classes: usize, examples: usize },

    /// Caller-supplied input that a transport layer should reject outright.
    InvalidInput { reason: String },
}

impl fmt::Display for SentimentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentError::DataSource { path, details } => {
                write!(f, "Failed to read data source {path}: {details}")
            }
            SentimentError::ModelNotTrained { operation } => {
                write!(f, "Model not trained; call train() before {operation}")
            }
            SentimentError::TrainingDegenerate { classes, examples } => write!(
                f,
                "Degenerate training data: {examples} example(s) spanning {classes} class(es); at least two classes are required",
            ),
            SentimentError::InvalidInput { reason } => write!(f, "Invalid input: {reason}"),
        }
    }
}

impl std::error::Error for SentimentError {}
