//! Offline learning pipeline: calibration, vectorization and the linear SVM.

pub mod calibrate;
pub mod svm;
pub mod training;
pub mod vectorizer;

pub use calibrate::{bucket, calibrate, normalize_batch};
pub use svm::{LinearSvm, SvmConfig};
pub use training::{build_examples, train_pipeline, TrainingConfig, TrainingReport};
pub use vectorizer::CountVectorizer;
