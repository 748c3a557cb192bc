//! End-to-end training pipeline.
//!
//! Raw sentences are cleaned, scored against the lexicon, calibrated into
//! 7-way labels over the whole batch, vectorized, split 80/20 with a fixed
//! seed, and fed to the linear SVM. The held-out partition yields the
//! reported accuracy. Reproducibility is a hard requirement: the same seed
//! and the same input data always produce the same split and the same model.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::data::{Lexicon, SentimentClass, TrainingExample};
use crate::error::{SentimentError, SentimentResult};
use crate::learner::calibrate::{bucket, normalize_batch};
use crate::learner::svm::{LinearSvm, SvmConfig};
use crate::learner::vectorizer::CountVectorizer;
use crate::text::normalize;

/// Configuration for one training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Fraction of examples used for fitting; the rest is held out.
    pub train_ratio: f64,
    /// Seed for the train/test shuffle.
    pub seed: u64,
    /// SVM hyperparameters.
    pub svm: SvmConfig,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            train_ratio: 0.8,
            seed: 42,
            svm: SvmConfig::default(),
        }
    }
}

/// Summary of a completed training run.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingReport {
    /// Total number of training examples.
    pub examples: usize,
    /// Vocabulary size of the fitted vectorizer.
    pub vocabulary_size: usize,
    /// Distinct classes observed across the full batch.
    pub num_classes: usize,
    /// Size of the fitting partition.
    pub train_size: usize,
    /// Size of the held-out partition.
    pub test_size: usize,
    /// Exact-match fraction on the held-out partition, in [0, 1].
    pub accuracy: f64,
}

/// Clean, score and calibrate raw sentences into training examples.
///
/// Calibration is batch-level: the min and max raw scores come from this
/// whole set of sentences.
pub fn build_examples(lexicon: &Lexicon, sentences: &[String]) -> Vec<TrainingExample> {
    let cleaned: Vec<String> = sentences.iter().map(|s| normalize(s)).collect();
    let raw_scores: Vec<i32> = cleaned.iter().map(|c| lexicon.score(c)).collect();
    let normalized = normalize_batch(&raw_scores);

    sentences
        .iter()
        .zip(cleaned)
        .zip(raw_scores.iter().zip(normalized))
        .map(|((raw, cleaned), (&raw_score, normalized_score))| TrainingExample {
            raw: raw.clone(),
            cleaned,
            raw_score,
            normalized_score,
            label: bucket(normalized_score),
        })
        .collect()
}

/// Fraction of exact label matches over a set of feature rows.
fn compute_accuracy(model: &LinearSvm, features: &Array2<f64>, labels: &[SentimentClass]) -> f64 {
    if labels.is_empty() {
        return 0.0;
    }

    let correct = labels
        .iter()
        .enumerate()
        .filter(|&(i, &label)| model.predict(features.row(i)) == label)
        .count();

    correct as f64 / labels.len() as f64
}

/// Copy the selected rows of a document-term matrix into a new matrix.
fn select_rows(features: &Array2<f64>, indices: &[usize]) -> Array2<f64> {
    let mut selected = Array2::zeros((indices.len(), features.ncols()));
    for (row, &idx) in indices.iter().enumerate() {
        selected.row_mut(row).assign(&features.row(idx));
    }
    selected
}

/// Run the full training pipeline.
///
/// Returns the fitted vectorizer, the fitted model and the run report.
/// Empty data or a train partition with fewer than two distinct classes is a
/// fatal `TrainingDegenerate` error; no model is produced in that case.
pub fn train_pipeline(
    lexicon: &Lexicon,
    sentences: &[String],
    config: &TrainingConfig,
) -> SentimentResult<(CountVectorizer, LinearSvm, TrainingReport)> {
    if sentences.is_empty() {
        return Err(SentimentError::TrainingDegenerate {
            classes: 0,
            examples: 0,
        });
    }

    let examples = build_examples(lexicon, sentences);
    let cleaned: Vec<String> = examples.iter().map(|e| e.cleaned.clone()).collect();
    let labels: Vec<SentimentClass> = examples.iter().map(|e| e.label).collect();

    let mut distinct = labels.clone();
    distinct.sort();
    distinct.dedup();

    // The vectorizer sees the full corpus; only the classifier is split.
    let mut vectorizer = CountVectorizer::new();
    let features = vectorizer.fit_transform(&cleaned);

    let mut indices: Vec<usize> = (0..examples.len()).collect();
    let mut rng = StdRng::seed_from_u64(config.seed);
    indices.shuffle(&mut rng);

    let train_size = (examples.len() as f64 * config.train_ratio) as usize;
    let (train_idx, test_idx) = indices.split_at(train_size);

    let train_features = select_rows(&features, train_idx);
    let train_labels: Vec<SentimentClass> = train_idx.iter().map(|&i| labels[i]).collect();
    let test_features = select_rows(&features, test_idx);
    let test_labels: Vec<SentimentClass> = test_idx.iter().map(|&i| labels[i]).collect();

    let model = LinearSvm::fit(&train_features, &train_labels, &config.svm)?;
    let accuracy = compute_accuracy(&model, &test_features, &test_labels);

    let report = TrainingReport {
        examples: examples.len(),
        vocabulary_size: vectorizer.n_terms(),
        num_classes: distinct.len(),
        train_size: train_labels.len(),
        test_size: test_labels.len(),
        accuracy,
    };

    Ok((vectorizer, model, report))
}
