//! Command implementations for the tweet-sentiment CLI.

use std::io::{self, Write};
use std::time::Instant;

use log::info;

use crate::classification::{self, Class, FeatureRanker, NaiveBayesModel};
use crate::cli::args::SentimentArgs;
use crate::cli::output::{ClassificationReport, TrainingSummary, WordProbability, output_report};
use crate::dataset;
use crate::error::{Result, SentimentError};

/// A finished report and the feature ranking failure, if ranking failed.
///
/// Classification results are complete even when ranking fails; the report
/// then carries no top features.
#[derive(Debug)]
pub struct RunOutcome {
    pub report: ClassificationReport,
    pub ranking_error: Option<SentimentError>,
}

impl RunOutcome {
    /// The report, or the ranking failure.
    pub fn into_result(self) -> Result<ClassificationReport> {
        match self.ranking_error {
            Some(error) => Err(error),
            None => Ok(self.report),
        }
    }
}

/// Execute the CLI and write the report to stdout.
///
/// The report is written before a ranking failure is returned.
pub fn execute_command(args: SentimentArgs) -> Result<()> {
    let outcome = run(&args)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    output_report(&mut out, &outcome.report, &args)?;
    out.flush()?;
    match outcome.ranking_error {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

/// Train on the training file, classify the testing file, and build the
/// report without printing it.
///
/// Loading, training and classification failures are returned as errors.
/// A ranking failure is kept in the outcome next to the finished report.
pub fn run(args: &SentimentArgs) -> Result<RunOutcome> {
    let config = args.classifier_config()?;

    let start_time = Instant::now();
    let training = dataset::load_training_data(&args.training)?;
    let classifier = classification::train(&training.records, &config)?;
    info!("Training took {} ms", start_time.elapsed().as_millis());

    let lines = dataset::load_test_data(&args.testing)?;
    let results = classifier.classify_all(lines)?;

    let model = classifier.model();
    let probabilities = args.probabilities.then(|| word_probabilities(model));
    let (top_features, ranking_error) = if args.no_features {
        (None, None)
    } else {
        match FeatureRanker::new(model).top_features(config.top_features) {
            Ok(top) => (Some(top), None),
            Err(error) => (None, Some(error)),
        }
    };

    Ok(RunOutcome {
        report: ClassificationReport {
            training: TrainingSummary::from_model(model, training.skipped),
            results,
            probabilities,
            top_features,
        },
        ranking_error,
    })
}

/// Every vocabulary word under each class, positive class first.
fn word_probabilities(model: &NaiveBayesModel) -> Vec<WordProbability> {
    Class::ALL
        .into_iter()
        .flat_map(move |class| {
            model
                .probabilities(class)
                .into_iter()
                .map(move |(word, log_prob)| WordProbability {
                    word: word.to_string(),
                    class,
                    log_prob,
                })
        })
        .collect()
}
