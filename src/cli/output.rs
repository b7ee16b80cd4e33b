//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SentimentArgs};
use crate::classification::{Class, ClassifiedLine, NaiveBayesModel, TopFeatures};
use crate::error::Result;

/// Counts gathered while training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    pub positive_documents: u64,
    pub negative_documents: u64,
    pub positive_words: u64,
    pub negative_words: u64,
    pub vocabulary_size: usize,
    pub skipped_records: usize,
    pub smoothing: f64,
}

impl TrainingSummary {
    pub fn from_model(model: &NaiveBayesModel, skipped_records: usize) -> Self {
        let positive = model.counts(Class::Positive);
        let negative = model.counts(Class::Negative);
        Self {
            positive_documents: positive.documents(),
            negative_documents: negative.documents(),
            positive_words: positive.total_words(),
            negative_words: negative.total_words(),
            vocabulary_size: model.vocabulary_size(),
            skipped_records,
            smoothing: model.smoothing().value(),
        }
    }
}

/// Smoothed log probability of one vocabulary word under one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordProbability {
    pub word: String,
    pub class: Class,
    pub log_prob: f64,
}

/// Everything one run of the CLI produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub training: TrainingSummary,
    pub results: Vec<ClassifiedLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probabilities: Option<Vec<WordProbability>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_features: Option<TopFeatures>,
}

/// Output a report in the format selected on the command line.
pub fn output_report<W: Write>(
    out: &mut W,
    report: &ClassificationReport,
    args: &SentimentArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(out, report, args),
        OutputFormat::Json => output_json(out, report, args),
    }
}

/// Output in human-readable format.
fn output_human<W: Write>(
    out: &mut W,
    report: &ClassificationReport,
    args: &SentimentArgs,
) -> Result<()> {
    if args.verbosity() > 1 {
        let training = &report.training;
        writeln!(
            out,
            "Trained on {} positive and {} negative documents ({} skipped), {} vocabulary words",
            training.positive_documents,
            training.negative_documents,
            training.skipped_records,
            training.vocabulary_size
        )?;
    }

    for result in &report.results {
        writeln!(out, "{}\t{}\t{}", result.label, result.score, result.line)?;
    }

    if let Some(probabilities) = &report.probabilities {
        for entry in probabilities {
            writeln!(out, "p({}|{}) = {}", entry.word, entry.class, entry.log_prob)?;
        }
    }

    if let Some(top) = &report.top_features {
        writeln!(out, "Top {} most predictive: positive", top.positive.len())?;
        for feature in &top.positive {
            writeln!(out, "{}\t{}", feature.word, feature.score)?;
        }
        writeln!(out, "Top {} most predictive: negative", top.negative.len())?;
        for feature in &top.negative {
            writeln!(out, "{}\t{}", feature.word, feature.score)?;
        }
    }

    Ok(())
}

/// Output in JSON format.
///
/// Infinite scores (possible with a zero smoothing parameter) have no JSON
/// representation and are written as `null`.
fn output_json<W: Write>(
    out: &mut W,
    report: &ClassificationReport,
    args: &SentimentArgs,
) -> Result<()> {
    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, report)?;
    } else {
        serde_json::to_writer(&mut *out, report)?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::classification::RankedFeature;

    fn args(extra: &[&str]) -> SentimentArgs {
        SentimentArgs::parse_from(
            ["tweet-sentiment", "train.csv", "test.txt", "1"]
                .into_iter()
                .chain(extra.iter().copied()),
        )
    }

    fn report() -> ClassificationReport {
        ClassificationReport {
            training: TrainingSummary {
                positive_documents: 1,
                negative_documents: 1,
                positive_words: 2,
                negative_words: 1,
                vocabulary_size: 2,
                skipped_records: 0,
                smoothing: 1.0,
            },
            results: vec![ClassifiedLine {
                label: Class::Negative,
                score: -0.5,
                line: "so  late".to_string(),
            }],
            probabilities: Some(vec![WordProbability {
                word: "good".to_string(),
                class: Class::Positive,
                log_prob: 0.0,
            }]),
            top_features: Some(TopFeatures {
                positive: vec![RankedFeature {
                    word: "good".to_string(),
                    score: 0.25,
                }],
                negative: vec![RankedFeature {
                    word: "bad".to_string(),
                    score: 4.0,
                }],
            }),
        }
    }

    #[test]
    fn test_human_output() {
        let mut out = Vec::new();
        output_report(&mut out, &report(), &args(&[])).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "negative\t-0.5\tso  late",
                "p(good|positive) = 0",
                "Top 1 most predictive: positive",
                "good\t0.25",
                "Top 1 most predictive: negative",
                "bad\t4",
            ]
        );
    }

    #[test]
    fn test_verbose_human_output_includes_summary() {
        let mut out = Vec::new();
        output_report(&mut out, &report(), &args(&["-vv"])).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Trained on 1 positive and 1 negative documents"));
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        output_report(&mut out, &report(), &args(&["-f", "json"])).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["results"][0]["label"], "negative");
        assert_eq!(value["results"][0]["line"], "so  late");
        assert_eq!(value["top_features"]["negative"][0]["word"], "bad");
        assert_eq!(value["training"]["vocabulary_size"], 2);
    }

    #[test]
    fn test_json_output_omits_missing_sections() {
        let mut report = report();
        report.probabilities = None;
        report.top_features = None;

        let mut out = Vec::new();
        output_report(&mut out, &report, &args(&["-f", "json", "--pretty"])).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(value.get("probabilities").is_none());
        assert!(value.get("top_features").is_none());
    }
}
