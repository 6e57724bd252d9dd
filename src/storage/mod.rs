//! Storage layer for Pocket Ledger
//!
//! Provides the CSV-backed ledger store with atomic writes and a forgiving
//! loader, plus the audit log that records every mutation made through the
//! application.

pub mod csv_file;
pub mod ledger;

pub use csv_file::{read_ledger_rows, write_ledger_atomic, LEDGER_HEADERS};
pub use ledger::{LedgerStore, LoadReport, SkipReason, SkippedRow};

use std::path::PathBuf;

use tracing::warn;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{LedgerPaths, Settings};
use crate::error::LedgerError;
use crate::models::{Catalog, Transaction, TransactionId};

/// Ledger store plus the audit log that shadows it
pub struct Storage {
    pub ledger: LedgerStore,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Open the ledger described by `paths` and `settings`
    ///
    /// `ledger_override` takes precedence over the configured ledger file.
    /// Only directory creation can fail here; ledger read problems are
    /// absorbed by [`LedgerStore::open`].
    pub fn new(
        paths: &LedgerPaths,
        settings: &Settings,
        ledger_override: Option<PathBuf>,
    ) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        let ledger_path = settings.ledger_path(paths, ledger_override);
        let ledger = LedgerStore::open(ledger_path, Catalog::default());
        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self { ledger, audit })
    }

    /// Wrap an already opened ledger
    pub fn with_ledger(ledger: LedgerStore, audit: Option<AuditLogger>) -> Self {
        Self { ledger, audit }
    }

    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record an added transaction; failures are logged, not returned
    pub fn log_create(&self, id: TransactionId, transaction: &Transaction) {
        self.write_audit(AuditEntry::create(id, transaction));
    }

    /// Record a deleted transaction; failures are logged, not returned
    pub fn log_delete(&self, id: TransactionId, transaction: &Transaction) {
        self.write_audit(AuditEntry::delete(id, transaction));
    }

    fn write_audit(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                warn!(error = %e, entity = %entry.entity_id, "failed to write audit entry");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().join("ledger"));
        let storage = Storage::new(&paths, &Settings::default(), None).unwrap();

        assert!(paths.ledger_file().exists());
        assert!(storage.ledger.is_empty());
        assert!(storage.audit().is_some());
    }

    #[test]
    fn test_override_path() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let custom = temp_dir.path().join("custom.csv");

        let storage = Storage::new(&paths, &Settings::default(), Some(custom.clone())).unwrap();
        assert_eq!(storage.ledger.path(), custom.as_path());
        assert!(custom.exists());
        assert!(!paths.ledger_file().exists());
    }

    #[test]
    fn test_audit_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            audit_enabled: false,
            ..Settings::default()
        };

        let storage = Storage::new(&paths, &settings, None).unwrap();
        let txn = Transaction::new(Money::from_cents(100), Category::income("Salary"), "2025-01-01");
        storage.log_create(TransactionId::new(1), &txn);

        assert!(storage.audit().is_none());
        assert!(!paths.audit_log().exists());
    }
}
