use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AirDbError, Result};

/// Runtime settings, read from an optional JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirDbConfig {
    /// SQLite database file
    pub db_path: PathBuf,
    /// Create any missing table when the database is opened
    pub bootstrap_schema: bool,
    /// Require OperatedBy pairs to reference an existing flight and pilot
    pub strict_assignment_refs: bool,
    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for AirDbConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("AirDB.db"),
            bootstrap_schema: true,
            strict_assignment_refs: false,
            log_level: "warn".to_string(),
        }
    }
}

impl AirDbConfig {
    /// Loads settings; a missing or blank file yields the defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| AirDbError::Config(format!("Failed to read config file: {e}")))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(&content)
            .map_err(|e| AirDbError::Config(format!("Malformed config JSON: {e}")))
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)
            .map_err(|e| AirDbError::Config(format!("Failed to serialize config as JSON: {e}")))?;
        fs::write(path, payload)
            .map_err(|e| AirDbError::Config(format!("Failed to write config file: {e}")))
    }
}
