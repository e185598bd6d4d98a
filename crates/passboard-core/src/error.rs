//! Error types and exit codes for passboard
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing results file, failed fetch, unknown model/task)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the passboard binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing input, failed fetch, unknown id (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during passboard operations
#[derive(Error, Debug)]
pub enum BoardError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("results file not found: {path:?}")]
    InputNotFound { path: PathBuf },

    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("failed to fetch {url}: HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("no parseable records in {src} ({lines} lines, all dropped)")]
    NoRecords { src: String, lines: usize },

    #[error("model not found: {id}")]
    ModelNotFound { id: String },

    #[error("task not found: {name}")]
    TaskNotFound { name: String },

    #[error("invalid config in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl BoardError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            BoardError::UnknownFormat(_) | BoardError::UsageError(_) => ExitCode::Usage,

            BoardError::InputNotFound { .. }
            | BoardError::Fetch { .. }
            | BoardError::HttpStatus { .. }
            | BoardError::NoRecords { .. }
            | BoardError::ModelNotFound { .. }
            | BoardError::TaskNotFound { .. }
            | BoardError::InvalidConfig { .. } => ExitCode::Data,

            BoardError::Io(_)
            | BoardError::Json(_)
            | BoardError::Toml(_)
            | BoardError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier used in the JSON error envelope
    fn error_type(&self) -> &'static str {
        match self {
            BoardError::UnknownFormat(_) => "unknown_format",
            BoardError::UsageError(_) => "usage_error",
            BoardError::InputNotFound { .. } => "input_not_found",
            BoardError::Fetch { .. } => "fetch_failed",
            BoardError::HttpStatus { .. } => "http_status",
            BoardError::NoRecords { .. } => "no_records",
            BoardError::ModelNotFound { .. } => "model_not_found",
            BoardError::TaskNotFound { .. } => "task_not_found",
            BoardError::InvalidConfig { .. } => "invalid_config",
            BoardError::Io(_) => "io_error",
            BoardError::Json(_) => "json_error",
            BoardError::Toml(_) => "toml_error",
            BoardError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for passboard operations
pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            BoardError::UnknownFormat("yaml".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            BoardError::ModelNotFound { id: "gpt-x".into() }.exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            BoardError::InputNotFound {
                path: PathBuf::from("missing.jsonl")
            }
            .exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            BoardError::Other("boom".into()).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_json_envelope() {
        let err = BoardError::TaskNotFound { name: "t1".into() };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "task_not_found");
        assert_eq!(json["error"]["message"], "task not found: t1");
    }

    #[test]
    fn test_display_messages() {
        let err = BoardError::HttpStatus {
            url: "http://example.com/r.jsonl".into(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "failed to fetch http://example.com/r.jsonl: HTTP 404"
        );
    }
}
