//! Most predictive features of a trained model.
//!
//! Each word is scored with `log_prob(word, positive) / log_prob(word, negative)`.
//! Both operands are (non-positive) log probabilities, so a small ratio means
//! the word is relatively likelier under the positive class. The lowest
//! ratios are reported as the most predictive positive features and the
//! highest ones, highest first, as the most predictive negative features.

use log::warn;
use serde::{Deserialize, Serialize};

use super::model::NaiveBayesModel;
use super::types::Class;
use crate::error::{Result, SentimentError};

/// A vocabulary word with its discriminative score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedFeature {
    pub word: String,
    pub score: f64,
}

/// The two most-predictive feature lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopFeatures {
    /// Lowest ratios first.
    pub positive: Vec<RankedFeature>,
    /// Highest ratios first.
    pub negative: Vec<RankedFeature>,
}

/// Ranks the vocabulary of a trained model.
#[derive(Debug, Clone, Copy)]
pub struct FeatureRanker<'a> {
    model: &'a NaiveBayesModel,
}

impl<'a> FeatureRanker<'a> {
    pub fn new(model: &'a NaiveBayesModel) -> Self {
        Self { model }
    }

    /// All rankable words, sorted ascending by score.
    ///
    /// A word is rankable when both class probability maps hold an entry for
    /// it and the ratio is a number. The ratio is `0 / 0` when the word has
    /// probability one under both classes, either as the only word counted
    /// in a class or through smoothing with `lambda` equal to the class word
    /// total; such words are left out with a warning and can be listed with
    /// [`FeatureRanker::unranked`]. Equal scores are ordered by word.
    pub fn rank(&self) -> Vec<RankedFeature> {
        let (mut ranked, unranked) = self.score_vocabulary();
        if !unranked.is_empty() {
            warn!(
                "{} of {} vocabulary words have an undefined ratio and are not ranked: {:?}",
                unranked.len(),
                ranked.len() + unranked.len(),
                unranked
            );
        }

        ranked.sort_by(|a, b| a.score.total_cmp(&b.score).then_with(|| a.word.cmp(&b.word)));
        ranked
    }

    /// Vocabulary words left out of [`FeatureRanker::rank`], sorted.
    pub fn unranked(&self) -> Vec<String> {
        self.score_vocabulary().1
    }

    fn score_vocabulary(&self) -> (Vec<RankedFeature>, Vec<String>) {
        let positive = self.model.probabilities(Class::Positive);
        let negative = self.model.probabilities(Class::Negative);

        let mut ranked = Vec::with_capacity(positive.len());
        let mut unranked = Vec::new();
        for (word, pos) in &positive {
            let Some(neg) = negative.get(word) else {
                continue;
            };
            let score = pos / neg;
            if score.is_nan() {
                unranked.push(word.to_string());
            } else {
                ranked.push(RankedFeature {
                    word: word.to_string(),
                    score,
                });
            }
        }
        (ranked, unranked)
    }

    /// The `n` most predictive words of each class.
    ///
    /// Fails when fewer than `n` words can be ranked.
    pub fn top_features(&self, n: usize) -> Result<TopFeatures> {
        let ranked = self.rank();
        if n > ranked.len() {
            return Err(SentimentError::insufficient_features(n, ranked.len()));
        }

        Ok(TopFeatures {
            positive: ranked[..n].to_vec(),
            negative: ranked.iter().rev().take(n).cloned().collect(),
        })
    }
}
