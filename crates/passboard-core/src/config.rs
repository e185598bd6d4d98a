//! Classification configuration
//!
//! Model kinds are derived from the model identifier via a small keyword
//! table: the first case-insensitive substring match wins, everything else
//! falls back to "Open Source". The built-in table can be extended through a
//! `passboard.toml` file with a `[keywords]` section.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};

/// Kind label for models matching no keyword
pub const DEFAULT_KIND: &str = "Open Source";

/// Classification config, loadable from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Lower-cased substring -> kind label
    #[serde(default)]
    pub keywords: BTreeMap<String, String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        let mut keywords = BTreeMap::new();
        keywords.insert("gemini".to_string(), "Proprietary".to_string());
        BoardConfig { keywords }
    }
}

impl BoardConfig {
    /// Load configuration from a file, merged over the built-in defaults.
    /// User entries win on key collision.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| BoardError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let user: BoardConfig =
            toml::from_str(&content).map_err(|e| BoardError::InvalidConfig {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let mut merged = BoardConfig::default();
        merged.keywords.extend(user.keywords);
        Ok(merged)
    }

    /// Classify a model identifier via case-insensitive substring match
    pub fn model_kind(&self, id: &str) -> &str {
        let lower = id.to_lowercase();
        for (keyword, kind) in &self.keywords {
            if lower.contains(keyword.to_lowercase().as_str()) {
                return kind;
            }
        }
        DEFAULT_KIND
    }
}
