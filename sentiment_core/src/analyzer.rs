//! Sentence and paragraph level sentiment inference.
//!
//! `SentimentAnalyzer` owns the lexicon, the raw training sentences and,
//! after a successful `train` call, the fitted vectorizer/model pair. The
//! trained artifacts are never mutated after training, so a shared reference
//! (e.g. `Arc<SentimentAnalyzer>`) can serve concurrent callers without
//! locking.

use serde::Serialize;

use crate::config::AnalyzerConfig;
use crate::data::{Lexicon, SentenceDataset, SentimentClass};
use crate::error::{SentimentError, SentimentResult};
use crate::learner::svm::LinearSvm;
use crate::learner::training::{train_pipeline, TrainingConfig, TrainingReport};
use crate::learner::vectorizer::CountVectorizer;
use crate::text::{normalize, split_sentences};

/// Cleaned-text placeholder returned for blank or fully-stripped input.
/// This is an intentional sentinel value, not an error.
pub const EMPTY_SENTENCE_PLACEHOLDER: &str = "Empty or invalid sentence";

/// Result of analyzing one sentence.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// Original input text.
    pub text: String,
    /// Predicted class on the -3..=3 scale.
    pub score: i8,
    /// Human-readable label for the predicted class.
    pub label: &'static str,
    /// Normalized text the prediction was made on, or the empty-input placeholder.
    pub cleaned: String,
}

/// Result of analyzing a paragraph.
#[derive(Debug, Clone, Serialize)]
pub struct ParagraphResult {
    /// Original input text.
    pub text: String,
    /// Arithmetic mean of the per-sentence class scores, unrounded.
    pub average_score: f64,
    /// Label for the rounded mean.
    pub average_label: &'static str,
    /// Per-sentence "<Label> [<score>]" summaries, in original order.
    pub sentence_details: Vec<String>,
}

/// Lexicon-seeded SVM sentiment analyzer.
pub struct SentimentAnalyzer {
    lexicon: Lexicon,
    sentences: Vec<String>,
    config: TrainingConfig,
    vectorizer: Option<CountVectorizer>,
    model: Option<LinearSvm>,
    report: Option<TrainingReport>,
}

impl SentimentAnalyzer {
    /// Build an untrained analyzer from in-memory data.
    pub fn new(lexicon: Lexicon, sentences: Vec<String>, config: TrainingConfig) -> Self {
        Self {
            lexicon,
            sentences,
            config,
            vectorizer: None,
            model: None,
            report: None,
        }
    }

    /// Build an untrained analyzer by loading the configured CSV sources.
    ///
    /// A missing or unreadable file is fatal here; the caller is expected to
    /// treat that as a permanently unavailable analyzer, not to retry.
    pub fn from_config(config: &AnalyzerConfig) -> SentimentResult<Self> {
        let lexicon = Lexicon::load_from_csv(&config.lexicon_path)?;
        let dataset = SentenceDataset::load_from_csv(&config.data_path)?;
        Ok(Self::new(lexicon, dataset.sentences, config.training()))
    }

    /// Run the training pipeline once, storing the fitted artifacts.
    ///
    /// Blocks until complete. Degenerate data leaves the analyzer untrained
    /// and returns the error instead of a meaningless model.
    pub fn train(&mut self) -> SentimentResult<TrainingReport> {
        let (vectorizer, model, report) =
            train_pipeline(&self.lexicon, &self.sentences, &self.config)?;

        self.vectorizer = Some(vectorizer);
        self.model = Some(model);
        self.report = Some(report.clone());
        Ok(report)
    }

    /// Availability flag: both vectorizer and model are present.
    pub fn is_trained(&self) -> bool {
        self.vectorizer.is_some() && self.model.is_some()
    }

    /// Held-out accuracy of the last training run, if trained.
    pub fn accuracy(&self) -> Option<f64> {
        self.report.as_ref().map(|r| r.accuracy)
    }

    /// Report of the last training run, if trained.
    pub fn report(&self) -> Option<&TrainingReport> {
        self.report.as_ref()
    }

    /// The lexicon this analyzer scores with.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn trained_parts(&self, operation: &str) -> SentimentResult<(&CountVectorizer, &LinearSvm)> {
        match (self.vectorizer.as_ref(), self.model.as_ref()) {
            (Some(vectorizer), Some(model)) => Ok((vectorizer, model)),
            _ => Err(SentimentError::ModelNotTrained {
                operation: operation.to_string(),
            }),
        }
    }

    /// Predict the sentiment class of a single sentence.
    ///
    /// Input that normalizes to an empty string short-circuits to Neutral
    /// with the [`EMPTY_SENTENCE_PLACEHOLDER`] as cleaned text; the
    /// vectorizer is not consulted in that case. Tokens outside the training
    /// vocabulary contribute no features.
    pub fn analyze_sentence(&self, text: &str) -> SentimentResult<AnalysisResult> {
        let (vectorizer, model) = self.trained_parts("analyze_sentence")?;

        let cleaned = normalize(text);
        if cleaned.is_empty() {
            return Ok(AnalysisResult {
                text: text.to_string(),
                score: SentimentClass::Neutral.value(),
                label: SentimentClass::Neutral.label(),
                cleaned: EMPTY_SENTENCE_PLACEHOLDER.to_string(),
            });
        }

        let features = vectorizer.transform(&cleaned);
        let class = model.predict(features.view());

        Ok(AnalysisResult {
            text: text.to_string(),
            score: class.value(),
            label: class.label(),
            cleaned,
        })
    }

    /// Predict the sentiment of a paragraph sentence by sentence.
    ///
    /// The paragraph is segmented on terminal punctuation, each sentence is
    /// analyzed independently in order, and the average score is the
    /// unrounded mean of the per-sentence class values. The average label is
    /// the class of the rounded mean (half away from zero). Blank input or a
    /// paragraph that yields no sentences returns the Neutral defaults.
    pub fn analyze_paragraph(&self, text: &str) -> SentimentResult<ParagraphResult> {
        self.trained_parts("analyze_paragraph")?;

        if text.trim().is_empty() {
            return Ok(Self::neutral_paragraph(text));
        }

        let sentences = split_sentences(text);
        if sentences.is_empty() {
            return Ok(Self::neutral_paragraph(text));
        }

        let mut scores = Vec::with_capacity(sentences.len());
        let mut sentence_details = Vec::with_capacity(sentences.len());
        for sentence in &sentences {
            let result = self.analyze_sentence(sentence)?;
            scores.push(result.score as f64);
            sentence_details.push(format!("{} [{}]", result.label, result.score));
        }

        let average_score = scores.iter().sum::<f64>() / scores.len() as f64;
        let average_label = SentimentClass::from_value(average_score.round() as i8)
            .unwrap_or(SentimentClass::Neutral)
            .label();

        Ok(ParagraphResult {
            text: text.to_string(),
            average_score,
            average_label,
            sentence_details,
        })
    }

    fn neutral_paragraph(text: &str) -> ParagraphResult {
        ParagraphResult {
            text: text.to_string(),
            average_score: 0.0,
            average_label: SentimentClass::Neutral.label(),
            sentence_details: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trained_analyzer() -> SentimentAnalyzer {
        let lexicon = Lexicon::from_entries([("khush", 2), ("sad", -2)]);
        let sentences = vec![
            "mi khup khush aahe".to_string(),
            "aaj khush vatat aahe".to_string(),
            "to khush disat hota".to_string(),
            "ti khush hoti".to_string(),
            "amhi sagle khush aahot".to_string(),
            "mi aaj sad aahe".to_string(),
            "tyala sad vatla".to_string(),
            "to sad disat hota".to_string(),
            "ti sad hoti".to_string(),
            "amhi sagle sad aahot".to_string(),
        ];
        let mut analyzer = SentimentAnalyzer::new(lexicon, sentences, TrainingConfig::default());
        analyzer.train().unwrap();
        analyzer
    }

    #[test]
    fn test_untrained_analyzer_rejects_inference() {
        let analyzer = SentimentAnalyzer::new(
            Lexicon::from_entries([("khush", 2)]),
            vec!["mi khush aahe".to_string()],
            TrainingConfig::default(),
        );

        assert!(!analyzer.is_trained());
        assert!(matches!(
            analyzer.analyze_sentence("mi khush aahe").unwrap_err(),
            SentimentError::ModelNotTrained { .. }
        ));
        assert!(matches!(
            analyzer.analyze_paragraph("mi khush aahe.").unwrap_err(),
            SentimentError::ModelNotTrained { .. }
        ));
    }

    #[test]
    fn test_train_sets_availability() {
        let analyzer = trained_analyzer();
        assert!(analyzer.is_trained());
        let accuracy = analyzer.accuracy().unwrap();
        assert!((0.0..=1.0).contains(&accuracy));
    }

    #[test]
    fn test_empty_sentence_short_circuits() {
        let analyzer = trained_analyzer();
        let result = analyzer.analyze_sentence("").unwrap();
        assert_eq!(result.score, 0);
        assert_eq!(result.label, "Neutral");
        assert_eq!(result.cleaned, EMPTY_SENTENCE_PLACEHOLDER);

        // Input that strips to nothing takes the same path.
        let result = analyzer.analyze_sentence("123 ?! ९९").unwrap();
        assert_eq!(result.cleaned, EMPTY_SENTENCE_PLACEHOLDER);
    }

    #[test]
    fn test_sentence_analysis_reports_cleaned_text() {
        let analyzer = trained_analyzer();
        let result = analyzer.analyze_sentence("Mi khup KHUSH aahe!").unwrap();
        assert_eq!(result.cleaned, "mi khup khush aahe");
        assert_eq!(
            result.label,
            SentimentClass::from_value(result.score).unwrap().label()
        );
    }

    #[test]
    fn test_blank_paragraph_returns_neutral_defaults() {
        let analyzer = trained_analyzer();
        for text in ["", "   \t"] {
            let result = analyzer.analyze_paragraph(text).unwrap();
            assert_eq!(result.average_score, 0.0);
            assert_eq!(result.average_label, "Neutral");
            assert!(result.sentence_details.is_empty());
        }
    }

    #[test]
    fn test_paragraph_aggregates_sentences_in_order() {
        let analyzer = trained_analyzer();
        let result = analyzer
            .analyze_paragraph("mi khup khush aahe. mi aaj sad aahe.")
            .unwrap();

        assert_eq!(result.sentence_details.len(), 2);

        let first = analyzer.analyze_sentence("mi khup khush aahe.").unwrap();
        let second = analyzer.analyze_sentence("mi aaj sad aahe.").unwrap();
        let expected_mean = (first.score as f64 + second.score as f64) / 2.0;
        assert!((result.average_score - expected_mean).abs() < 1e-12);

        assert_eq!(
            result.sentence_details[0],
            format!("{} [{}]", first.label, first.score)
        );
        assert_eq!(
            result.average_label,
            SentimentClass::from_value(result.average_score.round() as i8)
                .unwrap()
                .label()
        );
    }
}
