//! Batch calibration of raw lexicon scores into training labels.
//!
//! Calibration is a training-time-only operation over the whole batch: the
//! min and max come from the batch, not from any fixed scale. Raw scores are
//! min-max rescaled to [-3, 3] and then bucketed into the 7 classes by fixed
//! thresholds, inclusive on the lower side of each bucket.

use crate::data::SentimentClass;

/// Min-max normalize a batch of raw scores to [-3, 3].
///
/// When every score in the batch is equal the rescale is undefined; the whole
/// batch collapses to -3.0. That degenerate-batch rule is part of the
/// contract and is preserved as-is.
pub fn normalize_batch(raw_scores: &[i32]) -> Vec<f64> {
    let (min, max) = match (raw_scores.iter().min(), raw_scores.iter().max()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => return Vec::new(),
    };

    if max == min {
        return vec![-3.0; raw_scores.len()];
    }

    let min = min as f64;
    let max = max as f64;
    raw_scores
        .iter()
        .map(|&s| (s as f64 - min) / (max - min) * 6.0 - 3.0)
        .collect()
}

/// Bucket a normalized score into one of the 7 classes.
///
/// Ties on a threshold go to the lower bucket: exactly -2.5 is Most Negative,
/// exactly 0.5 is Neutral.
pub fn bucket(normalized: f64) -> SentimentClass {
    if normalized <= -2.5 {
        SentimentClass::MostNegative
    } else if normalized <= -1.5 {
        SentimentClass::MoreNegative
    } else if normalized <= -0.5 {
        SentimentClass::Negative
    } else if normalized <= 0.5 {
        SentimentClass::Neutral
    } else if normalized <= 1.5 {
        SentimentClass::Positive
    } else if normalized <= 2.5 {
        SentimentClass::MorePositive
    } else {
        SentimentClass::MostPositive
    }
}

/// Calibrate a batch of raw scores into class labels.
pub fn calibrate(raw_scores: &[i32]) -> Vec<SentimentClass> {
    normalize_batch(raw_scores).into_iter().map(bucket).collect()
}
