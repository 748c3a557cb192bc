//! Multi-class linear support-vector classifier.
//!
//! One-vs-rest linear SVM trained with stochastic subgradient descent on the
//! L2-regularized hinge loss. The per-epoch sample order is shuffled with a
//! seeded `StdRng`, so a fixed seed and fixed input always produce the same
//! weights. Prediction is the argmax over the per-class decision values.

use ndarray::{Array1, Array2, ArrayView1};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::data::SentimentClass;
use crate::error::{SentimentError, SentimentResult};

/// Hyperparameters for SVM training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SvmConfig {
    /// Number of passes over the training partition.
    pub epochs: usize,
    /// SGD step size.
    pub learning_rate: f64,
    /// L2 regularization strength.
    pub lambda: f64,
    /// Random seed for the per-epoch sample shuffle.
    pub seed: u64,
}

impl Default for SvmConfig {
    fn default() -> Self {
        Self {
            epochs: 200,
            learning_rate: 0.01,
            lambda: 1e-4,
            seed: 42,
        }
    }
}

/// Fitted one-vs-rest linear SVM.
#[derive(Debug, Clone)]
pub struct LinearSvm {
    /// Classes present in the training data, ascending.
    classes: Vec<SentimentClass>,
    /// One weight row per class: [n_classes, n_features].
    weights: Array2<f64>,
    /// One bias per class.
    bias: Array1<f64>,
}

impl LinearSvm {
    /// Fit the classifier on a feature matrix and its labels.
    ///
    /// Fails with `TrainingDegenerate` when the data is empty or spans fewer
    /// than two distinct classes; a single-class fit would produce a model
    /// that answers everything with that class.
    pub fn fit(
        features: &Array2<f64>,
        labels: &[SentimentClass],
        config: &SvmConfig,
    ) -> SentimentResult<Self> {
        assert_eq!(features.nrows(), labels.len(), "feature/label row mismatch");

        let mut classes: Vec<SentimentClass> = labels.to_vec();
        classes.sort();
        classes.dedup();

        if labels.is_empty() || classes.len() < 2 {
            return Err(SentimentError::TrainingDegenerate {
                classes: classes.len(),
                examples: labels.len(),
            });
        }

        let n_features = features.ncols();
        let mut weights = Array2::zeros((classes.len(), n_features));
        let mut bias = Array1::zeros(classes.len());

        let lr = config.learning_rate;
        let decay = 1.0 - lr * config.lambda;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut order: Vec<usize> = (0..labels.len()).collect();

        for _ in 0..config.epochs {
            order.shuffle(&mut rng);

            for &i in &order {
                let x = features.row(i);
                let label = labels[i];

                for (c, &class) in classes.iter().enumerate() {
                    let y = if label == class { 1.0 } else { -1.0 };
                    let margin = y * (weights.row(c).dot(&x) + bias[c]);

                    let mut row = weights.row_mut(c);
                    row.mapv_inplace(|w| w * decay);
                    if margin < 1.0 {
                        row.scaled_add(lr * y, &x);
                        bias[c] += lr * y;
                    }
                }
            }
        }

        Ok(Self {
            classes,
            weights,
            bias,
        })
    }

    /// Per-class decision values for one feature vector.
    pub fn decision(&self, features: ArrayView1<f64>) -> Array1<f64> {
        self.weights.dot(&features) + &self.bias
    }

    /// Predict the class with the highest decision value.
    pub fn predict(&self, features: ArrayView1<f64>) -> SentimentClass {
        let decision = self.decision(features);
        let mut best = 0;
        for (c, &value) in decision.iter().enumerate() {
            if value > decision[best] {
                best = c;
            }
        }
        self.classes[best]
    }

    /// Classes the model can emit, ascending.
    pub fn classes(&self) -> &[SentimentClass] {
        &self.classes
    }
}
