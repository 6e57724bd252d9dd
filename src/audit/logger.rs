//! Append-only audit log
//!
//! One JSON object per line, flushed after every write. Reading is
//! forgiving: damaged lines are skipped, like damaged ledger rows.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{LedgerError, LedgerResult};

use super::entry::AuditEntry;

/// Handles writing audit entries to the audit log file
///
/// The log file uses a line-delimited JSON format (JSONL) where each line
/// is a complete JSON object representing one audit entry.
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry as one JSON line and flush it
    pub fn log(&self, entry: &AuditEntry) -> LedgerResult<()> {
        if let Some(parent) = self.log_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    LedgerError::Io(format!("Failed to create audit log directory: {}", e))
                })?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| LedgerError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| LedgerError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| LedgerError::Io(format!("Failed to write audit entry: {}", e)))?;

        file.flush()
            .map_err(|e| LedgerError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// Read all audit entries from the log file, oldest first
    pub fn read_all(&self) -> LedgerResult<Vec<AuditEntry>> {
        let mut entries = Vec::new();
        self.scan(|entry| entries.push(entry))?;
        Ok(entries)
    }

    /// Read the most recent `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> LedgerResult<Vec<AuditEntry>> {
        let mut window = VecDeque::with_capacity(count.min(1024));
        self.scan(|entry| {
            if window.len() == count {
                window.pop_front();
            }
            if count > 0 {
                window.push_back(entry);
            }
        })?;
        Ok(window.into())
    }

    /// Number of readable entries in the log
    pub fn entry_count(&self) -> LedgerResult<usize> {
        let mut count = 0;
        self.scan(|_| count += 1)?;
        Ok(count)
    }

    /// Feed every readable entry to `visit` in file order
    ///
    /// Blank lines are ignored. Lines that do not parse are skipped with a
    /// warning, so one damaged line never hides the rest of the history.
    fn scan(&self, mut visit: impl FnMut(AuditEntry)) -> LedgerResult<()> {
        if !self.log_path.exists() {
            return Ok(());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| LedgerError::Io(format!("Failed to open audit log: {}", e)))?;

        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                LedgerError::Io(format!("Failed to read audit log line {}: {}", index + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<AuditEntry>(&line) {
                Ok(entry) => visit(entry),
                Err(e) => warn!(line = index + 1, error = %e, "skipping unreadable audit entry"),
            }
        }

        Ok(())
    }

    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::Operation;
    use crate::models::{Category, Money, Transaction, TransactionId};
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path);
        (logger, temp_dir)
    }

    fn salary(cents: i64) -> Transaction {
        Transaction::new(Money::from_cents(cents), Category::income("Salary"), "2025-01-01")
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();

        logger
            .log(&AuditEntry::create(TransactionId::new(1), &salary(100)))
            .unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_id, "txn-1");
    }

    #[test]
    fn test_multiple_entries() {
        let (logger, _temp) = create_test_logger();

        for i in 0..5 {
            let entry = AuditEntry::create(TransactionId::new(i), &salary(100 * i as i64));
            logger.log(&entry).unwrap();
        }

        assert_eq!(logger.entry_count().unwrap(), 5);
        assert_eq!(logger.read_all().unwrap().len(), 5);
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();

        for i in 0..10 {
            let entry = AuditEntry::create(TransactionId::new(i), &salary(100));
            logger.log(&entry).unwrap();
        }

        let recent = logger.read_recent(3).unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].entity_id, "txn-7");
        assert_eq!(recent[1].entity_id, "txn-8");
        assert_eq!(recent[2].entity_id, "txn-9");
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();

        assert!(!logger.exists());
        assert_eq!(logger.entry_count().unwrap(), 0);
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_delete_entry_logged() {
        let (logger, _temp) = create_test_logger();

        logger
            .log(&AuditEntry::delete(TransactionId::new(2), &salary(500)))
            .unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries[0].operation, Operation::Delete);
        assert!(entries[0].before.is_some());
        assert!(entries[0].after.is_none());
    }

    #[test]
    fn test_creates_missing_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("nested").join("audit.log"));

        logger
            .log(&AuditEntry::create(TransactionId::new(1), &salary(100)))
            .unwrap();
        assert!(logger.exists());
    }

    #[test]
    fn test_damaged_line_is_skipped() {
        let (logger, temp) = create_test_logger();

        logger
            .log(&AuditEntry::create(TransactionId::new(1), &salary(100)))
            .unwrap();
        let mut file = OpenOptions::new()
            .append(true)
            .open(temp.path().join("audit.log"))
            .unwrap();
        writeln!(file, "{{not json").unwrap();
        writeln!(file).unwrap();
        logger
            .log(&AuditEntry::delete(TransactionId::new(1), &salary(100)))
            .unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].operation, Operation::Delete);
        assert_eq!(logger.entry_count().unwrap(), 2);
        assert_eq!(logger.read_recent(1).unwrap()[0].operation, Operation::Delete);
    }

    #[test]
    fn test_read_recent_zero() {
        let (logger, _temp) = create_test_logger();
        logger
            .log(&AuditEntry::create(TransactionId::new(1), &salary(100)))
            .unwrap();
        assert!(logger.read_recent(0).unwrap().is_empty());
    }

    #[test]
    fn test_survives_restart() {
        let (logger, temp) = create_test_logger();

        logger
            .log(&AuditEntry::create(TransactionId::new(1), &salary(100)))
            .unwrap();

        let logger2 = AuditLogger::new(temp.path().join("audit.log"));
        assert_eq!(logger2.read_all().unwrap().len(), 1);
    }
}
