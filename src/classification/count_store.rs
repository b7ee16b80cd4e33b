//! Word and document counts accumulated during training.
//!
//! [`CountStoreBuilder`] is the only mutable stage of the classifier. It is
//! consumed by [`CountStoreBuilder::finish`], which validates the counts and
//! freezes them into a [`NaiveBayesModel`]; there is no way back.

use ahash::{AHashMap, AHashSet};
use rayon::prelude::*;

use super::document::Document;
use super::model::NaiveBayesModel;
use super::types::{Class, TrainingRecord};
use crate::analysis::tokenizer::Tokenizer;
use crate::config::Smoothing;
use crate::error::{Result, SentimentError};

/// Counts for a single class.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassCounts {
    /// word -> occurrences in documents of this class.
    words: AHashMap<String, u64>,
    /// Documents seen.
    documents: u64,
    /// Sum of all values in `words`.
    total_words: u64,
}

impl ClassCounts {
    /// Occurrences of `word`; zero when never seen.
    pub fn count(&self, word: &str) -> u64 {
        self.words.get(word).copied().unwrap_or(0)
    }

    pub fn documents(&self) -> u64 {
        self.documents
    }

    pub fn total_words(&self) -> u64 {
        self.total_words
    }

    /// Number of distinct words seen in this class.
    pub fn distinct_words(&self) -> usize {
        self.words.len()
    }

    pub fn words(&self) -> impl Iterator<Item = (&str, u64)> {
        self.words.iter().map(|(word, count)| (word.as_str(), *count))
    }

    fn record(&mut self, tokens: &[String]) {
        self.documents += 1;
        for token in tokens {
            *self.words.entry(token.clone()).or_insert(0) += 1;
        }
        self.total_words += tokens.len() as u64;
    }

    fn merge(&mut self, other: ClassCounts) {
        self.documents += other.documents;
        self.total_words += other.total_words;
        for (word, count) in other.words {
            *self.words.entry(word).or_insert(0) += count;
        }
    }
}

/// Mutable count store used while training.
#[derive(Debug, Clone, Default)]
pub struct CountStoreBuilder {
    positive: ClassCounts,
    negative: ClassCounts,
    vocabulary: AHashSet<String>,
}

impl CountStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count all tokens in parallel, one partial store per rayon job, and
    /// merge the partial stores by summation.
    pub fn from_records_parallel(
        records: &[TrainingRecord],
        tokenizer: &dyn Tokenizer,
    ) -> Result<Self> {
        records
            .par_iter()
            .try_fold(CountStoreBuilder::new, |mut builder, record| {
                builder.record_text(record.class, &record.text, tokenizer)?;
                Ok::<_, SentimentError>(builder)
            })
            .try_reduce(CountStoreBuilder::new, |left, right| Ok(left.merge(right)))
    }

    /// Count all tokens on the calling thread.
    pub fn from_records(records: &[TrainingRecord], tokenizer: &dyn Tokenizer) -> Result<Self> {
        let mut builder = CountStoreBuilder::new();
        for record in records {
            builder.record_text(record.class, &record.text, tokenizer)?;
        }
        Ok(builder)
    }

    /// Tokenize `text` and record it as one document of `class`.
    pub fn record_text(
        &mut self,
        class: Class,
        text: &str,
        tokenizer: &dyn Tokenizer,
    ) -> Result<()> {
        let document = Document::with_tokenizer(text, tokenizer)?;
        self.record(class, &document);
        Ok(())
    }

    /// Record one training document.
    ///
    /// Only [`Document::content_tokens`] are counted. Each of them, including
    /// empty ones, is counted once per occurrence and added to the vocabulary.
    pub fn record(&mut self, class: Class, document: &Document) {
        let content = document.content_tokens();
        for token in content {
            if !self.vocabulary.contains(token) {
                self.vocabulary.insert(token.clone());
            }
        }
        self.counts_mut(class).record(content);
    }

    /// Fold another builder's counts into this one.
    pub fn merge(mut self, other: CountStoreBuilder) -> Self {
        self.positive.merge(other.positive);
        self.negative.merge(other.negative);
        self.vocabulary.extend(other.vocabulary);
        self
    }

    pub fn counts(&self, class: Class) -> &ClassCounts {
        match class {
            Class::Positive => &self.positive,
            Class::Negative => &self.negative,
        }
    }

    fn counts_mut(&mut self, class: Class) -> &mut ClassCounts {
        match class {
            Class::Positive => &mut self.positive,
            Class::Negative => &mut self.negative,
        }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }

    /// Freeze the counts into a trained model.
    ///
    /// Fails when either class has no documents or no counted words, since
    /// its prior or its word probabilities would divide by zero.
    pub fn finish(self, smoothing: Smoothing) -> Result<NaiveBayesModel> {
        for class in Class::ALL {
            let counts = self.counts(class);
            if counts.documents() == 0 || counts.total_words() == 0 {
                return Err(SentimentError::empty_class(
                    class,
                    counts.documents(),
                    counts.total_words(),
                ));
            }
        }

        Ok(NaiveBayesModel::new(
            self.positive,
            self.negative,
            self.vocabulary,
            smoothing,
        ))
    }
}
