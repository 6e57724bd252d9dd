//! Ledger store backed by the CSV file
//!
//! Holds the transaction sequence in memory and rewrites the whole file after
//! every mutation. Loading is forgiving: bad rows are skipped, and a file that
//! cannot be read at all yields an empty ledger instead of an error.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::LedgerResult;
use crate::models::{Catalog, Category, LedgerEntry, Money, Transaction, TransactionId};

use super::csv_file::{read_ledger_rows, write_ledger_atomic, RawRow};

/// Why a row was left out while loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Category name is not in the catalog
    UnknownCategory(String),
    /// Amount field is empty
    MissingAmount,
    /// Amount field is not a decimal number
    InvalidAmount(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCategory(name) => write!(f, "unknown category '{}'", name),
            Self::MissingAmount => write!(f, "missing amount"),
            Self::InvalidAmount(raw) => write!(f, "invalid amount '{}'", raw),
        }
    }
}

/// A row that was skipped during load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the file
    pub line: u64,
    pub reason: SkipReason,
}

/// Outcome of loading the ledger file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows turned into transactions
    pub loaded: usize,
    /// Rows left out, in file order
    pub skipped: Vec<SkippedRow>,
    /// The file did not exist and was created empty
    pub created: bool,
    /// The file could not be read; the ledger started empty
    pub fallback: Option<String>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.fallback.is_none()
    }
}

/// In-memory ledger synchronized to a CSV file
#[derive(Debug)]
pub struct LedgerStore {
    path: PathBuf,
    catalog: Catalog,
    entries: Vec<LedgerEntry>,
    next_id: TransactionId,
    last_load: LoadReport,
}

impl LedgerStore {
    /// Open the ledger at `path`, creating it if missing
    ///
    /// Never fails: read problems are absorbed and described in
    /// [`LedgerStore::load_report`].
    pub fn open(path: impl Into<PathBuf>, catalog: Catalog) -> Self {
        let mut store = Self {
            path: path.into(),
            catalog,
            entries: Vec::new(),
            next_id: TransactionId::new(1),
            last_load: LoadReport::default(),
        };
        store.reload();
        store
    }

    /// Discard in-memory state and load the file again
    pub fn reload(&mut self) -> &LoadReport {
        self.last_load = self.hydrate();
        &self.last_load
    }

    /// What happened during the most recent load
    pub fn load_report(&self) -> &LoadReport {
        &self.last_load
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Exact, case-sensitive catalog lookup
    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.catalog.by_name(name)
    }

    /// Append a transaction and rewrite the file
    ///
    /// The transaction is not checked against the catalog; rows with unknown
    /// categories only disappear on the next load. If the write fails the
    /// entry stays in memory and the error is returned.
    pub fn add_transaction(&mut self, transaction: Transaction) -> LedgerResult<TransactionId> {
        let id = self.allocate_id();
        info!(%id, category = %transaction.category.name, amount = %transaction.amount, "adding transaction");
        self.entries.push(LedgerEntry { id, transaction });
        self.persist()?;
        Ok(id)
    }

    /// Remove the transaction at `index` and rewrite the file
    ///
    /// An out-of-range index is a no-op: nothing is removed or written and
    /// `Ok(None)` is returned.
    pub fn delete_transaction(&mut self, index: usize) -> LedgerResult<Option<Transaction>> {
        if index >= self.entries.len() {
            debug!(index, len = self.entries.len(), "delete index out of range, ignoring");
            return Ok(None);
        }

        let entry = self.entries.remove(index);
        info!(id = %entry.id, index, "deleted transaction");
        self.persist()?;
        Ok(Some(entry.transaction))
    }

    /// Remove the transaction with the given id and rewrite the file
    pub fn delete_by_id(&mut self, id: TransactionId) -> LedgerResult<Option<Transaction>> {
        match self.index_of(id) {
            Some(index) => self.delete_transaction(index),
            None => {
                debug!(%id, "delete id not found, ignoring");
                Ok(None)
            }
        }
    }

    /// Transactions in insertion order
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter().map(|e| &e.transaction)
    }

    /// Entries (id + transaction) in insertion order
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&LedgerEntry> {
        self.entries.get(index)
    }

    pub fn index_of(&self, id: TransactionId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total income minus total expenses
    pub fn balance(&self) -> Money {
        self.transactions().map(Transaction::signed_amount).sum()
    }

    /// Signed totals per category name; unused categories are absent
    pub fn category_summary(&self) -> BTreeMap<String, Money> {
        let mut grouped: BTreeMap<&str, Vec<Money>> = BTreeMap::new();
        for txn in self.transactions() {
            grouped
                .entry(txn.category.name.as_str())
                .or_default()
                .push(txn.signed_amount());
        }
        grouped
            .into_iter()
            .map(|(name, amounts)| (name.to_string(), amounts.into_iter().sum()))
            .collect()
    }

    /// Rewrite the whole file from the in-memory sequence
    pub fn persist(&self) -> LedgerResult<()> {
        write_ledger_atomic(&self.path, self.transactions())?;
        debug!(path = %self.path.display(), rows = self.entries.len(), "ledger written");
        Ok(())
    }

    fn allocate_id(&mut self) -> TransactionId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }

    fn hydrate(&mut self) -> LoadReport {
        self.entries.clear();
        let mut report = LoadReport::default();

        if !self.path.exists() {
            report.created = true;
            if let Err(e) = self.persist() {
                warn!(path = %self.path.display(), error = %e, "could not create ledger file");
            }
            return report;
        }

        let rows = match read_ledger_rows(&self.path) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ledger file unreadable, starting empty");
                report.fallback = Some(e.to_string());
                return report;
            }
        };

        for raw in rows {
            match self.parse_row(&raw) {
                Ok(transaction) => {
                    let id = self.allocate_id();
                    self.entries.push(LedgerEntry { id, transaction });
                }
                Err(reason) => {
                    warn!(line = raw.line, reason = %reason, "skipping ledger row");
                    report.skipped.push(SkippedRow {
                        line: raw.line,
                        reason,
                    });
                }
            }
        }

        report.loaded = self.entries.len();
        debug!(loaded = report.loaded, skipped = report.skipped.len(), "ledger loaded");
        report
    }

    fn parse_row(&self, raw: &RawRow) -> Result<Transaction, SkipReason> {
        let name = raw.category.trim();
        let category = self
            .catalog
            .by_name(name)
            .cloned()
            .ok_or_else(|| SkipReason::UnknownCategory(name.to_string()))?;

        let amount_str = raw.amount.trim();
        if amount_str.is_empty() {
            return Err(SkipReason::MissingAmount);
        }
        let amount = Money::parse(amount_str)
            .map_err(|_| SkipReason::InvalidAmount(amount_str.to_string()))?;

        Ok(Transaction::new(amount, category, raw.date.trim())
            .with_description(raw.description.trim()))
    }
}
