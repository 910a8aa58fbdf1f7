use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One decoded line of history.jsonl.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryRecord {
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_session_id")]
    pub session_id: String,
    #[serde(
        rename = "ts",
        deserialize_with = "crate::parsers::deserializers::deserialize_timestamp"
    )]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub text: String,
}

/// Result of parsing a history file: the valid records plus a count of
/// skipped lines for diagnostics.
#[derive(Debug, Default)]
pub struct ParsedHistory {
    pub records: Vec<HistoryRecord>,
    pub skipped: usize,
}

/// Parse a history.jsonl file into individual records.
///
/// Lines that fail to decode as JSON, or that decode but lack a valid
/// `session_id` or `ts`, are logged to stderr and skipped; they never abort
/// the run. Only failing to open or read the file itself is an error.
pub fn parse_history_file(path: &Path) -> Result<ParsedHistory> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open history file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut parsed = ParsedHistory::default();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read line from history file")?;

        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<HistoryRecord>(&line) {
            Ok(record) => parsed.records.push(record),
            Err(e) => {
                eprintln!("Warning: Failed to parse line {} in history file: {}", line_num + 1, e);
                parsed.skipped += 1;
            }
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_history(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_valid_lines() {
        let file = write_history(
            "{\"session_id\":\"a\",\"ts\":100,\"text\":\"hi\"}\n\
             {\"session_id\":\"b\",\"ts\":50,\"text\":\"yo\"}\n",
        );
        let parsed = parse_history_file(file.path()).unwrap();
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.skipped, 0);
    }

    #[test]
    fn test_malformed_lines_are_skipped_not_fatal() {
        let file = write_history(
            "{\"session_id\":\"a\",\"ts\":100,\"text\":\"hi\"}\n\
             not json\n\
             {\"ts\":200,\"text\":\"no session id\"}\n\
             {\"session_id\":\"b\",\"ts\":50,\"text\":\"yo\"}\n",
        );
        let parsed = parse_history_file(file.path()).unwrap();
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.skipped, 2);
    }

    #[test]
    fn test_blank_lines_are_ignored_and_not_counted() {
        let file = write_history("\n\n{\"session_id\":\"a\",\"ts\":100,\"text\":\"hi\"}\n\n");
        let parsed = parse_history_file(file.path()).unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.skipped, 0);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = parse_history_file(Path::new("/nonexistent/history.jsonl"));
        assert!(result.is_err());
    }
}
