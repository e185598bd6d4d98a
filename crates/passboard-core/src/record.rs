//! Run record types and input normalization
//!
//! Raw benchmark records arrive as heterogeneous JSON objects, one per line.
//! Normalization maps each of them onto a fully-defaulted [`RunRecord`] so
//! that downstream aggregation never has to reason about missing fields.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bucket label for records missing a model or task identifier
pub const UNKNOWN: &str = "Unknown";

/// One raw result record as it appears on a line of the input resource.
///
/// Every field is optional; unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    /// Model configuration block, carries the model identifier
    #[serde(rename = "llmConfig")]
    pub llm_config: Option<LlmConfig>,
    /// Task identifier
    pub name: Option<String>,
    /// Outcome string, e.g. "success" or "fail"
    pub result: Option<String>,
    /// Failure detail entries, first non-empty message is surfaced
    #[serde(default)]
    pub failures: Vec<FailureEntry>,
}

/// The `llmConfig` block of a raw record
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    pub model: Option<String>,
}

/// One entry of a raw record's `failures` array
#[derive(Debug, Clone, Deserialize)]
pub struct FailureEntry {
    pub message: Option<String>,
}

/// Outcome of a single run, collapsed to exactly success or fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Fail,
}

impl Outcome {
    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }

    /// Single-letter cell used in task breakdowns
    pub fn cell(self) -> char {
        match self {
            Outcome::Success => 'S',
            Outcome::Fail => 'F',
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => write!(f, "success"),
            Outcome::Fail => write!(f, "fail"),
        }
    }
}

/// One normalized evaluation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    /// Model identifier ("Unknown" when absent)
    pub model: String,
    /// Task identifier ("Unknown" when absent)
    pub task: String,
    /// Collapsed run outcome
    pub outcome: Outcome,
    /// First non-empty failure message, trimmed; only set for failed runs
    pub message: Option<String>,
}

impl RunRecord {
    /// Normalize one raw record.
    ///
    /// Missing model/task identifiers fall back to "Unknown" so partial
    /// records still contribute to aggregates under a visible bucket. The
    /// outcome comparison is case-insensitive and anything other than
    /// "success" (including an absent result) counts as a failure.
    pub fn from_raw(raw: RawRecord) -> Self {
        let outcome = match raw.result.as_deref() {
            Some(r) if r.eq_ignore_ascii_case("success") => Outcome::Success,
            _ => Outcome::Fail,
        };

        let message = match outcome {
            Outcome::Fail => raw
                .failures
                .iter()
                .filter_map(|f| f.message.as_deref())
                .find(|m| !m.is_empty())
                .map(|m| m.trim().to_string()),
            Outcome::Success => None,
        };

        RunRecord {
            model: raw
                .llm_config
                .and_then(|c| c.model)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            task: raw
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            outcome,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> RunRecord {
        RunRecord::from_raw(serde_json::from_str::<RawRecord>(line).unwrap())
    }

    #[test]
    fn test_full_record() {
        let rec = parse(r#"{"llmConfig":{"model":"gpt-x"},"name":"t1","result":"success"}"#);
        assert_eq!(rec.model, "gpt-x");
        assert_eq!(rec.task, "t1");
        assert_eq!(rec.outcome, Outcome::Success);
        assert_eq!(rec.message, None);
    }

    #[test]
    fn test_missing_fields_default_to_unknown() {
        let rec = parse(r#"{}"#);
        assert_eq!(rec.model, UNKNOWN);
        assert_eq!(rec.task, UNKNOWN);
        assert_eq!(rec.outcome, Outcome::Fail);
        assert_eq!(rec.message, None);
    }

    #[test]
    fn test_empty_strings_default_to_unknown() {
        let rec = parse(r#"{"llmConfig":{"model":""},"name":"","result":"fail"}"#);
        assert_eq!(rec.model, UNKNOWN);
        assert_eq!(rec.task, UNKNOWN);
    }

    #[test]
    fn test_result_is_case_insensitive() {
        let rec = parse(r#"{"name":"t1","result":"SUCCESS"}"#);
        assert_eq!(rec.outcome, Outcome::Success);
    }

    #[test]
    fn test_nonstandard_result_collapses_to_fail() {
        let rec = parse(r#"{"name":"t1","result":"error"}"#);
        assert_eq!(rec.outcome, Outcome::Fail);
    }

    #[test]
    fn test_failure_message_trimmed() {
        let rec = parse(
            r#"{"name":"t1","result":"fail","failures":[{"message":"  assertion failed  "}]}"#,
        );
        assert_eq!(rec.message.as_deref(), Some("assertion failed"));
    }

    #[test]
    fn test_first_non_empty_failure_message_wins() {
        let rec = parse(
            r#"{"name":"t1","result":"fail","failures":[{},{"message":""},{"message":"timeout"},{"message":"second"}]}"#,
        );
        assert_eq!(rec.message.as_deref(), Some("timeout"));
    }

    #[test]
    fn test_successful_run_never_carries_message() {
        let rec = parse(
            r#"{"name":"t1","result":"success","failures":[{"message":"stale detail"}]}"#,
        );
        assert_eq!(rec.message, None);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let rec = parse(
            r#"{"llmConfig":{"model":"m","temperature":0.2},"name":"t","result":"success","durationMs":812}"#,
        );
        assert_eq!(rec.model, "m");
        assert_eq!(rec.outcome, Outcome::Success);
    }
}
