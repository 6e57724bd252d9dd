//! Service layer for Pocket Ledger
//!
//! The service layer provides business logic on top of the storage layer:
//! input validation for new transactions, audited adds and deletes, and the
//! read-only reports the presentation layer displays.

pub mod report;
pub mod transaction;

pub use report::{format_signed, RegisterRow, ReportService, SummaryLine, TransactionFilter};
pub use transaction::{build_transaction, TransactionInput, TransactionService, DATE_FORMAT};
