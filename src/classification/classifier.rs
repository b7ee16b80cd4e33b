//! Scoring and classification of unseen documents.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::document::Document;
use super::model::NaiveBayesModel;
use super::types::Class;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::Result;

/// Sentiment classifier trait.
///
/// Implementations take raw text and return the winning class with its
/// score.
pub trait SentimentClassifier: Send + Sync {
    /// Predict the class for a piece of text.
    fn predict(&self, text: &str) -> Result<Classification>;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}

/// The outcome of classifying one document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Winning class.
    pub label: Class,
    /// Log10 score of the winning class.
    pub score: f64,
}

/// A classified input line, kept together with its original text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    pub label: Class,
    pub score: f64,
    pub line: String,
}

/// Multinomial Naive Bayes classifier over a trained model.
pub struct NaiveBayesClassifier {
    model: NaiveBayesModel,
    tokenizer: Arc<dyn Tokenizer>,
}

impl std::fmt::Debug for NaiveBayesClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NaiveBayesClassifier")
            .field("vocabulary_size", &self.model.vocabulary_size())
            .field("smoothing", &self.model.smoothing())
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

impl NaiveBayesClassifier {
    /// Create a classifier that splits input on whitespace.
    pub fn new(model: NaiveBayesModel) -> Self {
        Self::with_tokenizer(model, Arc::new(WhitespaceTokenizer::new()))
    }

    pub fn with_tokenizer(model: NaiveBayesModel, tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self { model, tokenizer }
    }

    pub fn model(&self) -> &NaiveBayesModel {
        &self.model
    }

    /// Log10 likelihood of `document` under `class`.
    ///
    /// Tokens outside the vocabulary contribute nothing. Every token counts,
    /// including the first.
    pub fn score(&self, document: &Document, class: Class) -> f64 {
        document
            .tokens()
            .iter()
            .filter(|token| self.model.contains(token))
            .fold(self.model.class_prior(class), |score, token| {
                score + self.model.log_prob(token, class)
            })
    }

    /// Pick the class with the higher score.
    ///
    /// Negative wins only with a strictly greater score; ties go to positive.
    pub fn classify(&self, document: &Document) -> Classification {
        let positive = self.score(document, Class::Positive);
        let negative = self.score(document, Class::Negative);

        if negative > positive {
            Classification {
                label: Class::Negative,
                score: negative,
            }
        } else {
            Classification {
                label: Class::Positive,
                score: positive,
            }
        }
    }

    /// Classify every line, preserving input order.
    pub fn classify_all<I, S>(&self, lines: I) -> Result<Vec<ClassifiedLine>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        lines
            .into_iter()
            .map(|line| {
                let line = line.into();
                let Classification { label, score } = self.predict(&line)?;
                Ok(ClassifiedLine { label, score, line })
            })
            .collect()
    }
}

impl SentimentClassifier for NaiveBayesClassifier {
    fn predict(&self, text: &str) -> Result<Classification> {
        let document = Document::with_tokenizer(text, self.tokenizer.as_ref())?;
        Ok(self.classify(&document))
    }

    fn name(&self) -> &str {
        "naive_bayes"
    }
}
