//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger data for the command line,
//! mostly as tables.

pub mod category;
pub mod report;
pub mod transaction;

pub use category::format_catalog;
pub use report::{format_balance, format_summary, truncate};
pub use transaction::{format_transaction_details, format_transaction_register};
