//! Core data models for Pocket Ledger
//!
//! This module contains the data structures that represent the ledger
//! domain: money amounts, categories, the category catalog and transactions.

pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use category::{Catalog, Category, CategoryKind, CategoryValidationError};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{LedgerEntry, Transaction};
