//! Transaction model
//!
//! A transaction is a positive amount booked against a category on a date.
//! Whether it adds to or subtracts from the balance is decided by the
//! category's kind, never by the sign of the amount.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{Category, CategoryKind};
use super::ids::TransactionId;
use super::money::Money;

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Amount, expected to be positive
    pub amount: Money,

    /// Category the amount is booked against
    pub category: Category,

    /// ISO date ("YYYY-MM-DD"), kept as entered
    pub date: String,

    /// Free text
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// Create a new transaction with an empty description
    pub fn new(amount: Money, category: Category, date: impl Into<String>) -> Self {
        Self {
            amount,
            category,
            date: date.into(),
            description: String::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn kind(&self) -> CategoryKind {
        self.category.kind
    }

    pub fn is_income(&self) -> bool {
        self.category.is_income()
    }

    /// Amount with the sign of its category kind applied
    pub fn signed_amount(&self) -> Money {
        Money::from_cents(self.amount.cents() * self.kind().sign())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date, self.category.name, self.amount, self.category.kind
        )?;
        if !self.description.is_empty() {
            write!(f, " - {}", self.description)?;
        }
        Ok(())
    }
}

/// A transaction together with the id the store assigned to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: TransactionId,
    pub transaction: Transaction,
}
