//! Common types for sentiment classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentiment label as it appears in the training data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Positive,
    Negative,
    Neutral,
}

impl Label {
    /// The trainable class for this label, `None` for neutral.
    pub fn class(self) -> Option<Class> {
        match self {
            Label::Positive => Some(Class::Positive),
            Label::Negative => Some(Class::Negative),
            Label::Neutral => None,
        }
    }
}

impl FromStr for Label {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Label::Positive),
            "negative" => Ok(Label::Negative),
            "neutral" => Ok(Label::Neutral),
            other => Err(RecordError::UnknownLabel(other.to_string())),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Positive => write!(f, "positive"),
            Label::Negative => write!(f, "negative"),
            Label::Neutral => write!(f, "neutral"),
        }
    }
}

/// One of the two classes the model discriminates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Class {
    Positive,
    Negative,
}

impl Class {
    /// Both classes, positive first.
    pub const ALL: [Class; 2] = [Class::Positive, Class::Negative];
}

impl From<Class> for Label {
    fn from(class: Class) -> Self {
        match class {
            Class::Positive => Label::Positive,
            Class::Negative => Label::Negative,
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Label::from(*self).fmt(f)
    }
}

/// Airline a training tweet is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Airline {
    VirginAmerica,
    United,
    Southwest,
    Delta,
    UsAirways,
}

impl FromStr for Airline {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Virgin America" => Ok(Airline::VirginAmerica),
            "United" => Ok(Airline::United),
            "Southwest" => Ok(Airline::Southwest),
            "Delta" => Ok(Airline::Delta),
            "US Airways" => Ok(Airline::UsAirways),
            other => Err(RecordError::UnknownCategory(other.to_string())),
        }
    }
}

impl fmt::Display for Airline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Airline::VirginAmerica => "Virgin America",
            Airline::United => "United",
            Airline::Southwest => "Southwest",
            Airline::Delta => "Delta",
            Airline::UsAirways => "US Airways",
        };
        f.write_str(name)
    }
}

/// A parsed training record. Neutral records never become one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRecord {
    /// Sentiment class.
    pub class: Class,
    /// Airline the text is about.
    pub airline: Airline,
    /// Raw text payload.
    pub text: String,
}

impl TrainingRecord {
    pub fn new<S: Into<String>>(class: Class, airline: Airline, text: S) -> Self {
        Self {
            class,
            airline,
            text: text.into(),
        }
    }
}

/// Why a training line was dropped.
///
/// These never abort a training run; the reader logs them and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected at least 3 fields, found {0}")]
    TooFewFields(usize),

    #[error("unknown label: {0:?}")]
    UnknownLabel(String),

    #[error("unknown category: {0:?}")]
    UnknownCategory(String),

    #[error("neutral records are not trained on")]
    Neutral,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parsing() {
        assert_eq!("positive".parse::<Label>(), Ok(Label::Positive));
        assert_eq!("negative".parse::<Label>(), Ok(Label::Negative));
        assert_eq!("neutral".parse::<Label>(), Ok(Label::Neutral));
        assert_eq!(
            "Positive".parse::<Label>(),
            Err(RecordError::UnknownLabel("Positive".to_string()))
        );
        assert!("airline_sentiment".parse::<Label>().is_err());
    }

    #[test]
    fn test_label_class() {
        assert_eq!(Label::Positive.class(), Some(Class::Positive));
        assert_eq!(Label::Negative.class(), Some(Class::Negative));
        assert_eq!(Label::Neutral.class(), None);
    }

    #[test]
    fn test_airline_parsing() {
        assert_eq!("Virgin America".parse::<Airline>(), Ok(Airline::VirginAmerica));
        assert_eq!("US Airways".parse::<Airline>(), Ok(Airline::UsAirways));
        assert_eq!(
            "American".parse::<Airline>(),
            Err(RecordError::UnknownCategory("American".to_string()))
        );
        assert_eq!(Airline::Southwest.to_string(), "Southwest");
    }

    #[test]
    fn test_class_display() {
        assert_eq!(Class::Positive.to_string(), "positive");
        assert_eq!(Class::Negative.to_string(), "negative");
    }
}
