//! Reporting service
//!
//! Read-only views over the ledger: the balance, the per-category summary
//! ranked the way the analytics panel shows it, and filtered register rows.

use std::cmp::Ordering;

use crate::models::{CategoryKind, LedgerEntry, Money};
use crate::storage::Storage;

/// One line of the category summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub category: String,
    /// Positive for income, negative for expenses
    pub total: Money,
}

/// Filters for the register listing
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Only this category
    pub category: Option<String>,
    /// Only this kind
    pub kind: Option<CategoryKind>,
    /// Keep at most this many rows, counting from the newest
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn kind(mut self, kind: CategoryKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, entry: &LedgerEntry) -> bool {
        let txn = &entry.transaction;
        self.category
            .as_deref()
            .map_or(true, |name| txn.category.name == name)
            && self.kind.map_or(true, |kind| txn.category.kind == kind)
    }
}

/// A ledger entry together with its current position
#[derive(Debug, Clone, Copy)]
pub struct RegisterRow<'a> {
    pub index: usize,
    pub entry: &'a LedgerEntry,
}

/// Service for read-only ledger reports
pub struct ReportService<'a> {
    storage: &'a Storage,
}

impl<'a> ReportService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn balance(&self) -> Money {
        self.storage.ledger.balance()
    }

    /// Category totals, largest absolute amount first, ties by name descending
    pub fn ranked_summary(&self) -> Vec<SummaryLine> {
        let mut lines: Vec<SummaryLine> = self
            .storage
            .ledger
            .category_summary()
            .into_iter()
            .map(|(category, total)| SummaryLine { category, total })
            .collect();
        lines.sort_by(rank);
        lines
    }

    /// Entries in ledger order, keeping their positions
    pub fn register(&self, filter: &TransactionFilter) -> Vec<RegisterRow<'a>> {
        let rows: Vec<RegisterRow<'a>> = self
            .storage
            .ledger
            .entries()
            .iter()
            .enumerate()
            .filter(|(_, entry)| filter.matches(entry))
            .map(|(index, entry)| RegisterRow { index, entry })
            .collect();

        match filter.limit {
            Some(limit) if rows.len() > limit => rows[rows.len() - limit..].to_vec(),
            _ => rows,
        }
    }
}

fn rank(a: &SummaryLine, b: &SummaryLine) -> Ordering {
    b.total
        .abs()
        .cmp(&a.total.abs())
        .then_with(|| b.category.cmp(&a.category))
}

/// Render an amount with an explicit sign: "+120.00", "-40.00"
pub fn format_signed(amount: Money) -> String {
    if amount.is_negative() {
        amount.to_string()
    } else {
        format!("+{}", amount)
    }
}
