//! Dataset acquisition and line-level parsing
//!
//! The input resource is newline-delimited JSON, one raw record per line,
//! named either by a filesystem path or an http(s) URL. The whole resource
//! is read in one bulk operation before any parsing starts. A fetch or read
//! failure is fatal; a single malformed line is dropped and counted, and the
//! load only fails when every line was unparseable.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::{BoardError, Result};
use crate::record::{RawRecord, RunRecord};

/// Normalized records plus parse diagnostics for one load
#[derive(Debug)]
pub struct Dataset {
    pub records: Vec<RunRecord>,
    /// Non-blank lines that failed to parse and were skipped
    pub dropped: usize,
}

impl Dataset {
    pub fn parsed(&self) -> usize {
        self.records.len()
    }
}

/// Load the dataset named by `input`: an http(s) URL is fetched with a
/// single bulk GET, anything else is treated as a filesystem path.
pub fn load(input: &str) -> Result<Dataset> {
    let text = if is_url(input) {
        fetch(input)?
    } else {
        read_file(Path::new(input))?
    };
    let dataset = parse(&text, input)?;
    if dataset.dropped > 0 {
        tracing::warn!(
            source = input,
            dropped = dataset.dropped,
            parsed = dataset.parsed(),
            "skipped unparseable lines"
        );
    }
    Ok(dataset)
}

/// Split the payload into lines and parse each one independently
pub fn parse(text: &str, source: &str) -> Result<Dataset> {
    let mut records = Vec::new();
    let mut dropped = 0usize;
    let mut seen = 0usize;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        seen += 1;
        match serde_json::from_str::<RawRecord>(line) {
            Ok(raw) => records.push(RunRecord::from_raw(raw)),
            Err(err) => {
                dropped += 1;
                tracing::debug!(error = %err, line = seen, "dropping malformed line");
            }
        }
    }

    if seen > 0 && records.is_empty() {
        return Err(BoardError::NoRecords {
            src: source.to_string(),
            lines: seen,
        });
    }

    Ok(Dataset { records, dropped })
}

fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(BoardError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

fn fetch(url: &str) -> Result<String> {
    match ureq::get(url).call() {
        Ok(response) => {
            let mut body = String::new();
            response
                .into_reader()
                .read_to_string(&mut body)
                .map_err(|e| BoardError::Fetch {
                    url: url.to_string(),
                    reason: e.to_string(),
                })?;
            Ok(body)
        }
        Err(ureq::Error::Status(code, _)) => Err(BoardError::HttpStatus {
            url: url.to_string(),
            status: code,
        }),
        Err(ureq::Error::Transport(e)) => Err(BoardError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Outcome;
    use std::io::Write;

    #[test]
    fn test_parse_valid_lines() {
        let text = concat!(
            r#"{"llmConfig":{"model":"a"},"name":"t1","result":"success"}"#,
            "\n",
            r#"{"llmConfig":{"model":"a"},"name":"t1","result":"fail"}"#,
            "\n",
        );
        let dataset = parse(text, "test").unwrap();
        assert_eq!(dataset.parsed(), 2);
        assert_eq!(dataset.dropped, 0);
        assert_eq!(dataset.records[0].outcome, Outcome::Success);
        assert_eq!(dataset.records[1].outcome, Outcome::Fail);
    }

    #[test]
    fn test_parse_drops_malformed_lines() {
        let text = concat!(
            r#"{"name":"t1","result":"success"}"#,
            "\n",
            "{not json at all\n",
            r#"{"name":"t2","result":"fail"}"#,
            "\n",
        );
        let dataset = parse(text, "test").unwrap();
        assert_eq!(dataset.parsed(), 2);
        assert_eq!(dataset.dropped, 1);
        assert_eq!(dataset.records[1].task, "t2");
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let text = "\n\n{\"name\":\"t1\"}\n\n";
        let dataset = parse(text, "test").unwrap();
        assert_eq!(dataset.parsed(), 1);
        assert_eq!(dataset.dropped, 0);
    }

    #[test]
    fn test_parse_empty_payload_is_empty_dataset() {
        let dataset = parse("", "test").unwrap();
        assert_eq!(dataset.parsed(), 0);
        assert_eq!(dataset.dropped, 0);
    }

    #[test]
    fn test_parse_totally_unparseable_payload_fails() {
        let err = parse("garbage\nmore garbage\n", "test").unwrap_err();
        match err {
            BoardError::NoRecords { src: source, lines } => {
                assert_eq!(source, "test");
                assert_eq!(lines, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"llmConfig":{{"model":"m"}},"name":"t","result":"success"}}"#)
            .unwrap();

        let dataset = load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(dataset.parsed(), 1);
        assert_eq!(dataset.records[0].model, "m");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load("/nonexistent/results.jsonl").unwrap_err();
        assert!(matches!(err, BoardError::InputNotFound { .. }));
    }
}
