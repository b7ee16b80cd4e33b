//! Error types for the tweet-sentiment library.
//!
//! All errors are represented by the [`SentimentError`] enum. Malformed
//! training records are not errors: the dataset reader drops them and keeps
//! going. Everything that reaches this enum is meant to be surfaced to the
//! caller.
//!
//! # Examples
//!
//! ```
//! use tweet_sentiment::error::{Result, SentimentError};
//!
//! fn parse_lambda(raw: &str) -> Result<f64> {
//!     raw.parse::<f64>()
//!         .map_err(|_| SentimentError::invalid_config(format!("not a number: {raw}")))
//! }
//!
//! assert!(parse_lambda("abc").is_err());
//! ```

use std::io;

use thiserror::Error;

use crate::classification::Class;

/// The main error type for tweet-sentiment operations.
#[derive(Error, Debug)]
pub enum SentimentError {
    /// I/O errors (unreadable training or testing source, output failures)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid configuration (smoothing parameter, ranking size)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A class saw no documents or no counted words during training,
    /// so its prior or its per-word probabilities would divide by zero.
    #[error("Empty class: {class} has {documents} documents and {words} counted words")]
    EmptyClass {
        class: Class,
        documents: u64,
        words: u64,
    },

    /// More ranked features were requested than the vocabulary provides.
    #[error(
        "Insufficient features: requested top {requested}, but only {available} words are ranked"
    )]
    InsufficientFeatures { requested: usize, available: usize },

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SentimentError.
pub type Result<T> = std::result::Result<T, SentimentError>;

impl SentimentError {
    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SentimentError::InvalidConfig(msg.into())
    }

    /// Create a new empty class error.
    pub fn empty_class(class: Class, documents: u64, words: u64) -> Self {
        SentimentError::EmptyClass {
            class,
            documents,
            words,
        }
    }

    /// Create a new insufficient features error.
    pub fn insufficient_features(requested: usize, available: usize) -> Self {
        SentimentError::InsufficientFeatures {
            requested,
            available,
        }
    }
}
