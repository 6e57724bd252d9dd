//! Audit entry data structures
//!
//! Defines the structure of audit log entries: which operation ran, on which
//! transaction, and a snapshot of the transaction itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Transaction, TransactionId};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Transaction was added
    Create,
    /// Transaction was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Id of the affected transaction, e.g. "txn-3"
    pub entity_id: String,

    /// Category name of the affected transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// The transaction before the operation (deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// The transaction after the operation (creates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Entry for a newly added transaction
    pub fn create(id: TransactionId, transaction: &Transaction) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_id: id.to_string(),
            entity_name: Some(transaction.category.name.clone()),
            before: None,
            after: serde_json::to_value(transaction).ok(),
        }
    }

    /// Entry for a removed transaction
    pub fn delete(id: TransactionId, transaction: &Transaction) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            entity_id: id.to_string(),
            entity_name: Some(transaction.category.name.clone()),
            before: serde_json::to_value(transaction).ok(),
            after: None,
        }
    }

    /// The transaction snapshot carried by this entry
    pub fn snapshot(&self) -> Option<Transaction> {
        self.after
            .as_ref()
            .or(self.before.as_ref())
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(txn) = self.snapshot() {
            output.push_str(&format!("\n  {}", txn));
        }

        output
    }
}
