//! Readers for training and testing data.
//!
//! Training data is the airline-sentiment CSV layout: `label,airline,text...`.
//! Lines are split on every comma with no quoting rules, and the text is all
//! fields after the second one joined back together *without* separators,
//! so `"a, b"` in the text becomes `"a b"`. Lines that cannot be used are
//! dropped and counted, never fatal.
//!
//! Testing data is one raw document per line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::classification::{Airline, Label, RecordError, TrainingRecord};
use crate::error::Result;

/// Parsed training records plus the number of lines that were dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingSet {
    pub records: Vec<TrainingRecord>,
    pub skipped: usize,
}

/// Parse one training line.
pub fn parse_record(line: &str) -> std::result::Result<TrainingRecord, RecordError> {
    let mut fields: Vec<&str> = line.split(',').collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    if fields.len() < 3 {
        return Err(RecordError::TooFewFields(fields.len()));
    }

    let label: Label = fields[0].parse()?;
    let airline: Airline = fields[1].parse()?;
    let class = label.class().ok_or(RecordError::Neutral)?;
    let text = fields[2..].concat();

    Ok(TrainingRecord::new(class, airline, text))
}

/// Read training records from any buffered source.
pub fn read_training_records<R: BufRead>(reader: R) -> Result<TrainingSet> {
    let mut set = TrainingSet::default();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_record(&line) {
            Ok(record) => set.records.push(record),
            Err(e) => {
                debug!("Skipping training line {}: {}", line_num + 1, e);
                set.skipped += 1;
            }
        }
    }

    Ok(set)
}

/// Load training records from a CSV file.
pub fn load_training_data<P: AsRef<Path>>(path: P) -> Result<TrainingSet> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let set = read_training_records(BufReader::new(file))?;
    info!(
        "Loaded {} training records from {} ({} lines skipped)",
        set.records.len(),
        path.display(),
        set.skipped
    );
    Ok(set)
}

/// Read test documents, one per line.
pub fn read_test_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    Ok(reader.lines().collect::<std::io::Result<Vec<_>>>()?)
}

/// Load test documents from a file.
pub fn load_test_data<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let lines = read_test_lines(BufReader::new(File::open(path)?))?;
    info!("Loaded {} test lines from {}", lines.len(), path.display());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::Class;

    #[test]
    fn test_parse_record() {
        let record = parse_record("positive,Delta,@Delta thanks for the upgrade").unwrap();
        assert_eq!(record.class, Class::Positive);
        assert_eq!(record.airline, Airline::Delta);
        assert_eq!(record.text, "@Delta thanks for the upgrade");
    }

    #[test]
    fn test_parse_record_concatenates_text_fields() {
        let record = parse_record("negative,United,@united late, again, and again").unwrap();
        assert_eq!(record.text, "@united late again and again");
    }

    #[test]
    fn test_parse_record_drops_trailing_empty_fields() {
        assert_eq!(
            parse_record("negative,United,,"),
            Err(RecordError::TooFewFields(2))
        );
        let record = parse_record("negative,United,,text,").unwrap();
        assert_eq!(record.text, "text");
    }

    #[test]
    fn test_parse_record_rejections() {
        assert_eq!(parse_record(""), Err(RecordError::TooFewFields(0)));
        assert_eq!(
            parse_record("positive,Delta"),
            Err(RecordError::TooFewFields(2))
        );
        assert_eq!(
            parse_record("airline_sentiment,airline,text"),
            Err(RecordError::UnknownLabel("airline_sentiment".to_string()))
        );
        assert_eq!(
            parse_record("positive,American,@AmericanAir thanks"),
            Err(RecordError::UnknownCategory("American".to_string()))
        );
        assert_eq!(
            parse_record("neutral,Delta,@Delta what time is it"),
            Err(RecordError::Neutral)
        );
    }

    #[test]
    fn test_read_training_records_counts_skipped_lines() {
        let data = "airline_sentiment,airline,text\n\
                    positive,Virgin America,@VirginAmerica love it\n\
                    neutral,Delta,@Delta ok\n\
                    negative,US Airways,@USAirways delayed\r\n\
                    garbage\n";

        let set = read_training_records(data.as_bytes()).unwrap();
        assert_eq!(set.records.len(), 2);
        assert_eq!(set.skipped, 3);
        assert_eq!(set.records[1].text, "@USAirways delayed");
    }

    #[test]
    fn test_read_test_lines() {
        let lines = read_test_lines("first line\n\nthird  line\n".as_bytes()).unwrap();
        assert_eq!(lines, vec!["first line", "", "third  line"]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_training_data("/nonexistent/training.csv").is_err());
        assert!(load_test_data("/nonexistent/testing.txt").is_err());
    }
}
