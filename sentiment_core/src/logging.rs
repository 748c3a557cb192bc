//! JSON line-delimited run logging.
//!
//! Appends one JSON object per event under `logs/`, so training runs and
//! analysis calls can be inspected or tailed without any log infrastructure.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::learner::training::TrainingReport;

fn log_dir() -> io::Result<()> {
    fs::create_dir_all("logs")
}

fn append_json_line<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    serde_json::to_writer(&mut file, value)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    file.write_all(b"\n")
}

fn timestamp_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// One completed training run.
#[derive(Debug, Serialize)]
pub struct TrainingLogEntry {
    pub timestamp_ms: u128,
    pub examples: usize,
    pub vocabulary_size: usize,
    pub num_classes: usize,
    pub train_size: usize,
    pub test_size: usize,
    pub accuracy: f64,
}

impl TrainingLogEntry {
    pub fn from_report(report: &TrainingReport) -> Self {
        Self {
            timestamp_ms: timestamp_ms(),
            examples: report.examples,
            vocabulary_size: report.vocabulary_size,
            num_classes: report.num_classes,
            train_size: report.train_size,
            test_size: report.test_size,
            accuracy: report.accuracy,
        }
    }
}

/// Append a training run to `logs/training.jsonl`.
pub fn log_training_run(report: &TrainingReport) -> io::Result<()> {
    log_dir()?;
    append_json_line("logs/training.jsonl", &TrainingLogEntry::from_report(report))
}

/// One analysis call.
#[derive(Debug, Serialize)]
pub struct AnalysisLogEntry {
    pub timestamp_ms: u128,
    /// "sentence" or "paragraph".
    pub kind: String,
    pub score: f64,
    pub label: String,
}

/// Append an analysis call to `logs/analysis.jsonl`.
pub fn log_analysis(kind: &str, score: f64, label: &str) -> io::Result<()> {
    log_dir()?;
    let entry = AnalysisLogEntry {
        timestamp_ms: timestamp_ms(),
        kind: kind.to_string(),
        score,
        label: label.to_string(),
    };
    append_json_line("logs/analysis.jsonl", &entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_training_entry_mirrors_report() {
        let report = TrainingReport {
            examples: 30,
            vocabulary_size: 80,
            num_classes: 7,
            train_size: 24,
            test_size: 6,
            accuracy: 0.5,
        };

        let entry = TrainingLogEntry::from_report(&report);
        assert_eq!(entry.examples, 30);
        assert_eq!(entry.accuracy, 0.5);

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"vocabulary_size\":80"));
    }
}
