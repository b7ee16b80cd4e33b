//! Classifier configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentimentError};

/// The smoothing parameter (lambda) used for words unseen in a class.
///
/// Always a finite, non-negative number. Zero is allowed and makes unseen
/// words score `-inf` in that class.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Smoothing(f64);

impl Smoothing {
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(SentimentError::invalid_config(format!(
                "smoothing parameter must be a finite number, got {value}"
            )));
        }
        if value < 0.0 {
            return Err(SentimentError::invalid_config(format!(
                "smoothing parameter must be non-negative, got {value}"
            )));
        }
        Ok(Smoothing(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Smoothing {
    fn default() -> Self {
        Smoothing(1.0)
    }
}

impl TryFrom<f64> for Smoothing {
    type Error = SentimentError;

    fn try_from(value: f64) -> Result<Self> {
        Smoothing::new(value)
    }
}

impl From<Smoothing> for f64 {
    fn from(smoothing: Smoothing) -> Self {
        smoothing.0
    }
}

impl FromStr for Smoothing {
    type Err = SentimentError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim().parse::<f64>().map_err(|_| {
            SentimentError::invalid_config(format!("smoothing parameter is not a number: {s:?}"))
        })?;
        Smoothing::new(value)
    }
}

impl fmt::Display for Smoothing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Configuration for training and reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Smoothing parameter for words unseen in a class.
    pub smoothing: Smoothing,
    /// Size of each most-predictive feature list.
    pub top_features: usize,
    /// Count training records on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            smoothing: Smoothing::default(),
            top_features: 10,
            parallel: false,
        }
    }
}

impl ClassifierConfig {
    pub fn new(smoothing: Smoothing) -> Self {
        Self {
            smoothing,
            ..Default::default()
        }
    }

    pub fn with_top_features(mut self, top_features: usize) -> Self {
        self.top_features = top_features;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.top_features == 0 {
            return Err(SentimentError::invalid_config(
                "top_features must be at least 1",
            ));
        }
        Ok(())
    }
}
