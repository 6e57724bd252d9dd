//! Audit logging system for Pocket Ledger
//!
//! Records every transaction added or deleted through the application in an
//! append-only log, one JSON object per line, alongside a snapshot of the
//! transaction involved.
//!
//! # Example
//!
//! ```rust,ignore
//! use pocket_ledger::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let id = store.add_transaction(txn.clone())?;
//! logger.log(&AuditEntry::create(id, &txn))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
