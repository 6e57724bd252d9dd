//! User settings for Pocket Ledger
//!
//! Preferences stored as JSON next to the ledger: where the ledger file
//! lives, how amounts are labelled, and how chatty logging is.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;

/// User settings for Pocket Ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of this file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Label printed after amounts, e.g. "EUR"
    #[serde(default)]
    pub currency_label: String,

    /// Ledger CSV location; relative paths resolve against the base directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_file: Option<PathBuf>,

    /// Whether adds and deletes are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Default log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_audit_enabled() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_label: String::new(),
            ledger_file: None,
            audit_enabled: default_audit_enabled(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Where the ledger CSV lives, honouring an explicit override first
    pub fn ledger_path(&self, paths: &LedgerPaths, override_path: Option<PathBuf>) -> PathBuf {
        if let Some(path) = override_path {
            return path;
        }

        match &self.ledger_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => paths.base_dir().join(path),
            None => paths.ledger_file(),
        }
    }
}
