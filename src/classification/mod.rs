//! Multinomial Naive Bayes sentiment classification.
//!
//! Training and scoring are split across two types so that a model can never
//! be modified once it is used:
//!
//! - `CountStoreBuilder`: mutable per-class word counts and vocabulary
//! - `NaiveBayesModel`: the frozen counts with class priors and smoothed
//!   log10 word probabilities
//! - `NaiveBayesClassifier`: scores documents against a model
//! - `FeatureRanker`: ranks the vocabulary by how strongly each word
//!   separates the classes
//!
//! # Example
//!
//! ```rust
//! use tweet_sentiment::classification::{
//!     self, Airline, Class, SentimentClassifier, TrainingRecord,
//! };
//! use tweet_sentiment::config::ClassifierConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let records = vec![
//!     TrainingRecord::new(Class::Positive, Airline::Delta, "@Delta great crew"),
//!     TrainingRecord::new(Class::Negative, Airline::United, "@united delayed delayed again"),
//! ];
//!
//! let classifier = classification::train(&records, &ClassifierConfig::default())?;
//! let result = classifier.predict("delayed flight")?;
//! assert_eq!(result.label, Class::Negative);
//! # Ok(())
//! # }
//! ```

mod classifier;
mod count_store;
mod document;
mod model;
mod ranker;
mod training;
mod types;

// Public exports
pub use classifier::{Classification, ClassifiedLine, NaiveBayesClassifier, SentimentClassifier};
pub use count_store::{ClassCounts, CountStoreBuilder};
pub use document::Document;
pub use model::NaiveBayesModel;
pub use ranker::{FeatureRanker, RankedFeature, TopFeatures};
pub use training::{train, train_with_tokenizer};
pub use types::{Airline, Class, Label, RecordError, TrainingRecord};
