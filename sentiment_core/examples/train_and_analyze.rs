//! Train the analyzer on the bundled sample data and analyze some text.
//!
//! Run from the `sentiment_core` directory so the relative data paths in
//! the sample config resolve:
//!
//! ```sh
//! cargo run --example train_and_analyze
//! ```

use anyhow::{Context, Result};
use marathi_sentiment_core::{logging, AnalyzerConfig, SentimentAnalyzer};

fn main() -> Result<()> {
    println!("Transliterated Marathi Sentiment Analyzer");
    println!("=========================================\n");

    let config = AnalyzerConfig::load_from_file("config/analyzer.toml")
        .unwrap_or_else(|_| AnalyzerConfig::default());

    println!("Configuration:");
    println!("  Lexicon:       {}", config.lexicon_path);
    println!("  Training data: {}", config.data_path);
    println!("  Seed:          {}", config.seed);
    println!("  Train ratio:   {}", config.train_ratio);
    println!();

    println!("Training model...");
    let mut analyzer =
        SentimentAnalyzer::from_config(&config).context("Failed to load data sources")?;
    let report = analyzer.train().context("Training failed")?;
    logging::log_training_run(&report)?;

    println!(
        "  {} examples, {} vocabulary terms, {} classes",
        report.examples, report.vocabulary_size, report.num_classes
    );
    println!(
        "  Model trained successfully! Accuracy: {:.2}\n",
        report.accuracy
    );

    let sample_text = "mi khup khush aahe";
    let result = analyzer.analyze_sentence(sample_text)?;
    logging::log_analysis("sentence", result.score as f64, result.label)?;

    println!("Sentence analysis:");
    println!("  Text:      {}", result.text);
    println!("  Cleaned:   {}", result.cleaned);
    println!("  Sentiment: {} (score {})\n", result.label, result.score);

    let sample_paragraph = "mi khup khush aahe. pan aaj thoda sad aahe.";
    let paragraph = analyzer.analyze_paragraph(sample_paragraph)?;
    logging::log_analysis("paragraph", paragraph.average_score, paragraph.average_label)?;

    println!("Paragraph analysis:");
    println!("  Text:    {}", paragraph.text);
    println!(
        "  Overall: {} (score {:.2})",
        paragraph.average_label, paragraph.average_score
    );
    for detail in &paragraph.sentence_details {
        println!("    - {}", detail);
    }

    Ok(())
}
