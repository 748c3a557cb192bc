//! Analyzer configuration via TOML files.
//!
//! Parsed through a raw serde struct and validated field by field; every
//! setting has a default matching the reference pipeline (seed 42, 80/20
//! split), so an empty file is a valid configuration.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::learner::svm::SvmConfig;
use crate::learner::training::TrainingConfig;

/// Errors raised while loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "I/O error while reading config: {err}"),
            ConfigError::Parse(msg) => write!(f, "Failed to parse config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    analyzer: Option<RawAnalyzer>,
    svm: Option<RawSvm>,
}

#[derive(Debug, Default, Deserialize)]
struct RawAnalyzer {
    lexicon_path: Option<String>,
    data_path: Option<String>,
    seed: Option<u64>,
    train_ratio: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSvm {
    epochs: Option<usize>,
    learning_rate: Option<f64>,
    lambda: Option<f64>,
}

/// Full analyzer configuration.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzerConfig {
    /// Path to the `Word,Score` lexicon CSV.
    pub lexicon_path: String,
    /// Path to the training data CSV with a `Sentence` column.
    pub data_path: String,
    /// Seed for every shuffle in the pipeline.
    pub seed: u64,
    /// Fraction of examples used for fitting.
    pub train_ratio: f64,
    /// SVM passes over the training partition.
    pub epochs: usize,
    /// SVM SGD step size.
    pub learning_rate: f64,
    /// SVM L2 regularization strength.
    pub lambda: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        let svm = SvmConfig::default();
        Self {
            lexicon_path: "data/senti_words.csv".to_string(),
            data_path: "data/sentences.csv".to_string(),
            seed: 42,
            train_ratio: 0.8,
            epochs: svm.epochs,
            learning_rate: svm.learning_rate,
            lambda: svm.lambda,
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig =
            toml::from_str(toml_str).map_err(|err| ConfigError::Parse(err.to_string()))?;

        let defaults = Self::default();
        let analyzer = raw.analyzer.unwrap_or_default();
        let svm = raw.svm.unwrap_or_default();

        let config = Self {
            lexicon_path: analyzer.lexicon_path.unwrap_or(defaults.lexicon_path),
            data_path: analyzer.data_path.unwrap_or(defaults.data_path),
            seed: analyzer.seed.unwrap_or(defaults.seed),
            train_ratio: analyzer.train_ratio.unwrap_or(defaults.train_ratio),
            epochs: svm.epochs.unwrap_or(defaults.epochs),
            learning_rate: svm.learning_rate.unwrap_or(defaults.learning_rate),
            lambda: svm.lambda.unwrap_or(defaults.lambda),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.train_ratio.is_finite() || self.train_ratio <= 0.0 || self.train_ratio >= 1.0 {
            return Err(ConfigError::Parse(
                "analyzer.train_ratio must be strictly between 0 and 1".into(),
            ));
        }
        if self.epochs == 0 {
            return Err(ConfigError::Parse("svm.epochs must be non-zero".into()));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ConfigError::Parse(
                "svm.learning_rate must be positive".into(),
            ));
        }
        if !self.lambda.is_finite() || self.lambda < 0.0 {
            return Err(ConfigError::Parse(
                "svm.lambda must be non-negative".into(),
            ));
        }
        Ok(())
    }

    /// The training configuration this analyzer configuration describes.
    pub fn training(&self) -> TrainingConfig {
        TrainingConfig {
            train_ratio: self.train_ratio,
            seed: self.seed,
            svm: SvmConfig {
                epochs: self.epochs,
                learning_rate: self.learning_rate,
                lambda: self.lambda,
                seed: self.seed,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config = AnalyzerConfig::from_toml_str("").unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.train_ratio, 0.8);
        assert_eq!(config.lexicon_path, "data/senti_words.csv");
    }

    #[test]
    fn test_parses_sections() {
        let config = AnalyzerConfig::from_toml_str(
            r#"
[analyzer]
lexicon_path = "lex.csv"
seed = 7
train_ratio = 0.75

[svm]
epochs = 50
learning_rate = 0.05
"#,
        )
        .unwrap();

        assert_eq!(config.lexicon_path, "lex.csv");
        assert_eq!(config.seed, 7);
        assert_eq!(config.train_ratio, 0.75);
        assert_eq!(config.epochs, 50);
        assert_eq!(config.learning_rate, 0.05);
        assert_eq!(config.lambda, 1e-4);
    }

    #[test]
    fn test_rejects_invalid_ratio() {
        for toml_str in [
            "[analyzer]\ntrain_ratio = 0.0",
            "[analyzer]\ntrain_ratio = 1.0",
            "[analyzer]\ntrain_ratio = -0.2",
        ] {
            assert!(matches!(
                AnalyzerConfig::from_toml_str(toml_str),
                Err(ConfigError::Parse(_))
            ));
        }
    }

    #[test]
    fn test_rejects_zero_epochs() {
        let result = AnalyzerConfig::from_toml_str("[svm]\nepochs = 0");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let result = AnalyzerConfig::from_toml_str("not toml at all =");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_training_carries_seed_into_svm() {
        let config = AnalyzerConfig::from_toml_str("[analyzer]\nseed = 9").unwrap();
        let training = config.training();
        assert_eq!(training.seed, 9);
        assert_eq!(training.svm.seed, 9);
    }
}
