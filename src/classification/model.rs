//! Trained Naive Bayes model and its probability estimates.
//!
//! All probabilities are base-10 logarithms. A word seen `k > 0` times in a
//! class with `n` counted words has `log10(k / n)`. A word never seen in the
//! class has `log10(lambda / n)`; smoothing is not applied to seen words and
//! the denominator is not adjusted for vocabulary size. With `lambda = 0`
//! the unseen branch yields `-inf`.

use std::collections::BTreeMap;

use ahash::AHashSet;

use super::count_store::ClassCounts;
use super::types::Class;
use crate::config::Smoothing;

/// Immutable counts plus class priors, produced by
/// [`CountStoreBuilder::finish`](super::count_store::CountStoreBuilder::finish).
///
/// Both classes are guaranteed to have at least one document and at least
/// one counted word.
#[derive(Debug, Clone)]
pub struct NaiveBayesModel {
    positive: ClassCounts,
    negative: ClassCounts,
    vocabulary: AHashSet<String>,
    smoothing: Smoothing,
    positive_prior: f64,
    negative_prior: f64,
}

impl NaiveBayesModel {
    pub(crate) fn new(
        positive: ClassCounts,
        negative: ClassCounts,
        vocabulary: AHashSet<String>,
        smoothing: Smoothing,
    ) -> Self {
        let positive_docs = positive.documents() as f64;
        let negative_docs = negative.documents() as f64;
        let total_docs = positive_docs + negative_docs;

        Self {
            positive_prior: (positive_docs / total_docs).log10(),
            negative_prior: (negative_docs / total_docs).log10(),
            positive,
            negative,
            vocabulary,
            smoothing,
        }
    }

    /// Log10 prior of `class`: its share of the training documents.
    pub fn class_prior(&self, class: Class) -> f64 {
        match class {
            Class::Positive => self.positive_prior,
            Class::Negative => self.negative_prior,
        }
    }

    /// Smoothed log10 probability of `word` given `class`.
    pub fn log_prob(&self, word: &str, class: Class) -> f64 {
        let counts = self.counts(class);
        let total = counts.total_words() as f64;
        match counts.count(word) {
            0 => (self.smoothing.value() / total).log10(),
            count => (count as f64 / total).log10(),
        }
    }

    /// `log_prob` for every vocabulary word, keyed and ordered by word.
    pub fn probabilities(&self, class: Class) -> BTreeMap<&str, f64> {
        self.vocabulary
            .iter()
            .map(|word| (word.as_str(), self.log_prob(word, class)))
            .collect()
    }

    /// Whether `word` was seen in any training document of either class.
    pub fn contains(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }

    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.vocabulary.iter().map(String::as_str)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn counts(&self, class: Class) -> &ClassCounts {
        match class {
            Class::Positive => &self.positive,
            Class::Negative => &self.negative,
        }
    }

    pub fn smoothing(&self) -> Smoothing {
        self.smoothing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::count_store::CountStoreBuilder;
    use crate::classification::document::Document;

    const EPSILON: f64 = 1e-12;

    fn train(records: &[(Class, &str)], lambda: f64) -> NaiveBayesModel {
        let mut builder = CountStoreBuilder::new();
        for (class, text) in records {
            builder.record(*class, &Document::new(text));
        }
        builder.finish(Smoothing::new(lambda).unwrap()).unwrap()
    }

    #[test]
    fn test_seen_word_probability() {
        let model = train(
            &[(Class::Positive, "x good good"), (Class::Negative, "x bad")],
            1.0,
        );

        assert_eq!(model.log_prob("good", Class::Positive), 0.0);
        assert_eq!(model.log_prob("bad", Class::Negative), 0.0);
    }

    #[test]
    fn test_unseen_word_uses_smoothing() {
        let model = train(
            &[(Class::Positive, "x good good"), (Class::Negative, "x bad")],
            1.0,
        );

        let expected = (1.0f64 / 2.0).log10();
        assert!((model.log_prob("bad", Class::Positive) - expected).abs() < EPSILON);
        assert!((model.log_prob("bad", Class::Positive) + 0.30103).abs() < 1e-5);
    }

    #[test]
    fn test_smoothing_scales_unseen_words() {
        let model = train(
            &[
                (Class::Positive, "@a nice crew nice seat"),
                (Class::Negative, "@b delayed again"),
            ],
            0.5,
        );

        let expected = (0.5f64 / 4.0).log10();
        assert!((model.log_prob("delayed", Class::Positive) - expected).abs() < EPSILON);
        let expected = (2.0f64 / 4.0).log10();
        assert!((model.log_prob("nice", Class::Positive) - expected).abs() < EPSILON);
    }

    #[test]
    fn test_zero_smoothing_yields_negative_infinity() {
        let model = train(
            &[(Class::Positive, "x good good"), (Class::Negative, "x bad")],
            0.0,
        );

        let prob = model.log_prob("bad", Class::Positive);
        assert!(prob.is_infinite() && prob.is_sign_negative());
    }

    #[test]
    fn test_priors_sum_to_one() {
        let model = train(
            &[
                (Class::Positive, "x good"),
                (Class::Positive, "x great"),
                (Class::Negative, "x bad"),
            ],
            1.0,
        );

        let total = 10f64.powf(model.class_prior(Class::Positive))
            + 10f64.powf(model.class_prior(Class::Negative));
        assert!((total - 1.0).abs() < EPSILON);
        assert!((model.class_prior(Class::Positive) - (2.0f64 / 3.0).log10()).abs() < EPSILON);
    }

    #[test]
    fn test_probabilities_cover_full_vocabulary() {
        let model = train(
            &[(Class::Positive, "x good good"), (Class::Negative, "x bad")],
            1.0,
        );

        for class in Class::ALL {
            let probabilities = model.probabilities(class);
            assert_eq!(probabilities.len(), model.vocabulary_size());
            for (word, prob) in probabilities {
                assert_eq!(prob, model.log_prob(word, class));
            }
        }
    }

    #[test]
    fn test_vocabulary_lookup() {
        let model = train(
            &[(Class::Positive, "x good good"), (Class::Negative, "x bad")],
            1.0,
        );

        assert!(model.contains("good"));
        assert!(!model.contains("x"));
        let mut words: Vec<_> = model.vocabulary().collect();
        words.sort();
        assert_eq!(words, vec!["bad", "good"]);
    }
}
