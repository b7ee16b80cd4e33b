//! Training entry points.

use std::sync::Arc;

use log::info;

use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::classification::classifier::NaiveBayesClassifier;
use crate::classification::count_store::CountStoreBuilder;
use crate::classification::types::{Class, TrainingRecord};
use crate::config::ClassifierConfig;
use crate::error::Result;

/// Train a whitespace-tokenizing classifier from parsed records.
pub fn train(
    records: &[TrainingRecord],
    config: &ClassifierConfig,
) -> Result<NaiveBayesClassifier> {
    train_with_tokenizer(records, config, Arc::new(WhitespaceTokenizer::new()))
}

/// Train a classifier that uses `tokenizer` both for counting and for
/// classifying.
pub fn train_with_tokenizer(
    records: &[TrainingRecord],
    config: &ClassifierConfig,
    tokenizer: Arc<dyn Tokenizer>,
) -> Result<NaiveBayesClassifier> {
    config.validate()?;

    let builder = if config.parallel {
        CountStoreBuilder::from_records_parallel(records, tokenizer.as_ref())?
    } else {
        CountStoreBuilder::from_records(records, tokenizer.as_ref())?
    };

    let model = builder.finish(config.smoothing)?;
    for class in Class::ALL {
        let counts = model.counts(class);
        info!(
            "Trained {class}: {} documents, {} words ({} distinct)",
            counts.documents(),
            counts.total_words(),
            counts.distinct_words()
        );
    }
    info!(
        "Vocabulary: {} words, smoothing {}",
        model.vocabulary_size(),
        model.smoothing()
    );

    Ok(NaiveBayesClassifier::with_tokenizer(model, tokenizer))
}
