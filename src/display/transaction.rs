//! Transaction display formatting
//!
//! Renders register rows as a table for terminal output.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{LedgerEntry, TransactionId};
use crate::services::RegisterRow;

use super::report::truncate;

const DESCRIPTION_WIDTH: usize = 40;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "ID")]
    id: TransactionId,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Type")]
    kind: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&RegisterRow<'_>> for TransactionRow {
    fn from(row: &RegisterRow<'_>) -> Self {
        let txn = &row.entry.transaction;
        Self {
            index: row.index,
            id: row.entry.id,
            date: txn.date.clone(),
            category: txn.category.name.clone(),
            kind: txn.category.kind.label(),
            amount: txn.amount.to_string(),
            description: truncate(&txn.description, DESCRIPTION_WIDTH),
        }
    }
}

/// Format register rows as a table
pub fn format_transaction_register(rows: &[RegisterRow<'_>]) -> String {
    if rows.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut table = Table::new(rows.iter().map(TransactionRow::from));
    table.with(Style::psql());
    table.modify(Columns::single(5), Alignment::right());

    format!("{}\n", table)
}

/// Format a single entry for confirmation messages
pub fn format_transaction_details(entry: &LedgerEntry) -> String {
    let txn = &entry.transaction;
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", entry.id));
    output.push_str(&format!("Date:        {}\n", txn.date));
    output.push_str(&format!("Category:    {} ({})\n", txn.category.name, txn.category.kind));
    output.push_str(&format!("Amount:      {}\n", txn.amount));

    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    output
}
