//! # tweet-sentiment
//!
//! A multinomial Naive Bayes classifier that labels short texts, such as
//! airline tweets, as positive or negative.
//!
//! ## Features
//!
//! - Whitespace tokenization that keeps text exactly as written
//! - Per-class word counts with an immutable trained model
//! - Base-10 log probabilities with additive smoothing of unseen words
//! - Most-predictive feature ranking
//! - Optional parallel training with rayon
//! - A CLI with human-readable and JSON output

pub mod analysis;
pub mod classification;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;

pub mod prelude {
    pub use crate::classification::{
        Class, Classification, FeatureRanker, NaiveBayesClassifier, NaiveBayesModel,
        SentimentClassifier, TrainingRecord, train,
    };
    pub use crate::config::{ClassifierConfig, Smoothing};
    pub use crate::error::{Result, SentimentError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
