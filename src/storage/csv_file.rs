//! Ledger file I/O with atomic writes
//!
//! The ledger lives in a single UTF-8 CSV file with a fixed header. Writes go
//! to a sibling temp file which is then renamed over the target, so a crash
//! mid-write never leaves a half-written ledger behind.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

/// Header row of the ledger file, in column order
pub const LEDGER_HEADERS: [&str; 5] = ["Amount", "Category", "Type", "Date", "Description"];

/// One data row as read from the file, fields untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line number of the record in the file
    pub line: u64,
    pub amount: String,
    pub category: String,
    pub kind: String,
    pub date: String,
    pub description: String,
}

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy, Default)]
struct ColumnIndex {
    amount: Option<usize>,
    category: Option<usize>,
    kind: Option<usize>,
    date: Option<usize>,
    description: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        Self {
            amount: find(LEDGER_HEADERS[0]),
            category: find(LEDGER_HEADERS[1]),
            kind: find(LEDGER_HEADERS[2]),
            date: find(LEDGER_HEADERS[3]),
            description: find(LEDGER_HEADERS[4]),
        }
    }
}

/// Write every transaction to `path`, replacing its previous content
pub fn write_ledger_atomic<'a, P, I>(path: P, transactions: I) -> LedgerResult<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a Transaction>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                LedgerError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| LedgerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::Writer::from_writer(BufWriter::new(file));
    writer
        .write_record(LEDGER_HEADERS)
        .map_err(|e| LedgerError::Storage(format!("Failed to write header: {}", e)))?;

    for txn in transactions {
        writer
            .write_record([
                txn.amount.to_string().as_str(),
                txn.category.name.as_str(),
                txn.category.kind.label(),
                txn.date.as_str(),
                txn.description.as_str(),
            ])
            .map_err(|e| LedgerError::Storage(format!("Failed to write row: {}", e)))?;
    }

    let mut buffered = writer
        .into_inner()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))?;

    buffered
        .flush()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))?;

    buffered
        .get_ref()
        .sync_all()
        .map_err(|e| LedgerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LedgerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Read the data rows of a ledger file
///
/// Any decoding failure (the file cannot be opened, a record is not valid
/// UTF-8, the framing is broken) fails the whole read. Rows that decode but
/// hold bad values are left for the caller to skip.
pub fn read_ledger_rows<P: AsRef<Path>>(path: P) -> LedgerResult<Vec<RawRow>> {
    let path = path.as_ref();

    let file = File::open(path)
        .map_err(|e| LedgerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(file);

    let columns = ColumnIndex::from_headers(reader.headers()?);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = |index: Option<usize>| {
            index
                .and_then(|i| record.get(i))
                .unwrap_or_default()
                .to_string()
        };
        rows.push(RawRow {
            line: record.position().map(|p| p.line()).unwrap_or_default(),
            amount: field(columns.amount),
            category: field(columns.category),
            kind: field(columns.kind),
            date: field(columns.date),
            description: field(columns.description),
        });
    }

    Ok(rows)
}
