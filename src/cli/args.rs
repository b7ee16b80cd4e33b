//! Command line argument parsing for the tweet-sentiment CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{ClassifierConfig, Smoothing};
use crate::error::Result;

/// tweet-sentiment - Naive Bayes sentiment classification for short texts
#[derive(Parser, Debug, Clone)]
#[command(name = "tweet-sentiment")]
#[command(about = "Train a Naive Bayes sentiment classifier and label test documents")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(allow_negative_numbers = true)]
#[command(long_about = None)]
pub struct SentimentArgs {
    /// Training data (CSV: label,airline,text)
    #[arg(value_name = "TRAINING")]
    pub training: PathBuf,

    /// Test documents, one per line
    #[arg(value_name = "TESTING")]
    pub testing: PathBuf,

    /// Smoothing parameter for words unseen in a class (non-negative)
    #[arg(value_name = "LAMBDA")]
    pub smoothing: Smoothing,

    /// Number of most predictive features to list per class
    #[arg(short = 'n', long = "top", default_value = "10", env = "TWEET_SENTIMENT_TOP")]
    pub top: usize,

    /// Print the smoothed log probability of every vocabulary word
    #[arg(short = 'p', long)]
    pub probabilities: bool,

    /// Skip the most predictive feature lists
    #[arg(long)]
    pub no_features: bool,

    /// Count training records in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl SentimentArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Build and validate the classifier configuration.
    pub fn classifier_config(&self) -> Result<ClassifierConfig> {
        let config = ClassifierConfig::new(self.smoothing)
            .with_top_features(self.top)
            .with_parallel(self.parallel);
        config.validate()?;
        Ok(config)
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated, human-readable output
    Human,
    /// JSON output
    Json,
}
