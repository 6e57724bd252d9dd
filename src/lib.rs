//! Pocket Ledger - a personal income and expense tracker
//!
//! Transactions live in a CSV file that is rewritten in full after every
//! change. Each transaction belongs to one category from a fixed catalog,
//! and the category decides whether it counts as income or as an expense.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, categories, the catalog and transactions
//! - `storage`: The CSV-backed ledger store
//! - `services`: Input validation, audited mutations and reports
//! - `audit`: Audit logging of adds and deletes
//! - `cli`, `display`: Command handlers and their table output
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,no_run
//! use pocket_ledger::models::Catalog;
//! use pocket_ledger::services::{build_transaction, TransactionInput};
//! use pocket_ledger::storage::LedgerStore;
//!
//! let catalog = Catalog::default();
//! let mut ledger = LedgerStore::open("transactions.csv", catalog.clone());
//!
//! let input = TransactionInput::new("40", "Groceries", "2025-01-02");
//! ledger.add_transaction(build_transaction(&catalog, &input)?)?;
//! println!("balance: {}", ledger.balance());
//! # Ok::<(), pocket_ledger::LedgerError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{LedgerError, LedgerResult};
