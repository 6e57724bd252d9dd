//! Transaction CLI commands
//!
//! Implements the add, list and delete commands.

use chrono::Local;
use clap::Subcommand;

use crate::display::transaction::{format_transaction_details, format_transaction_register};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{CategoryKind, LedgerEntry};
use crate::services::{
    ReportService, TransactionFilter, TransactionInput, TransactionService, DATE_FORMAT,
};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Amount, always positive (e.g., "1200.50" or "12,50")
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Category name, see `pocket categories`
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(short = 'm', long = "description")]
        description: Option<String>,
    },

    /// List transactions
    #[command(alias = "ls")]
    List {
        /// Show only the newest N transactions
        #[arg(short, long)]
        limit: Option<usize>,
        /// Filter by category name
        #[arg(short = 'C', long)]
        category: Option<String>,
        /// Filter by type (income or expense)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },

    /// Delete a transaction by its position in `pocket list`
    #[command(alias = "rm")]
    Delete {
        /// 0-based position
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &mut Storage,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    match cmd {
        TransactionCommands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let date = date.unwrap_or_else(|| Local::now().format(DATE_FORMAT).to_string());
            let input = TransactionInput::new(amount, category, date)
                .with_description(description.unwrap_or_default());

            let (id, transaction) = TransactionService::new(storage).create(&input)?;

            println!("Added transaction:");
            print!(
                "{}",
                format_transaction_details(&LedgerEntry { id, transaction })
            );
        }

        TransactionCommands::List {
            limit,
            category,
            kind,
        } => {
            let mut filter = TransactionFilter::new();

            if let Some(name) = category {
                if storage.ledger.category_by_name(&name).is_none() {
                    return Err(LedgerError::category_not_found(name));
                }
                filter = filter.category(name);
            }

            if let Some(kind) = kind {
                filter = filter.kind(parse_kind(&kind)?);
            }

            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }

            let rows = ReportService::new(storage).register(&filter);
            print!("{}", format_transaction_register(&rows));

            if !rows.is_empty() {
                println!(
                    "\nShowing {} of {} transactions",
                    rows.len(),
                    storage.ledger.len()
                );
            }
        }

        TransactionCommands::Delete { index } => {
            let removed = match usize::try_from(index) {
                Ok(index) => TransactionService::new(storage).delete_at(index)?,
                Err(_) => None,
            };

            match removed {
                Some(txn) => {
                    println!("Deleted transaction at position {}:", index);
                    println!("  {}", txn);
                }
                None => {
                    println!(
                        "No transaction at position {} ({} in ledger). Nothing deleted.",
                        index,
                        storage.ledger.len()
                    );
                }
            }
        }
    }

    Ok(())
}

fn parse_kind(s: &str) -> LedgerResult<CategoryKind> {
    match s.trim().to_lowercase().as_str() {
        "income" | "in" => Ok(CategoryKind::Income),
        "expense" | "out" => Ok(CategoryKind::Expense),
        _ => Err(LedgerError::Validation(format!(
            "Invalid type: '{}'. Use income or expense",
            s
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!(parse_kind("Income").unwrap(), CategoryKind::Income);
        assert_eq!(parse_kind(" expense ").unwrap(), CategoryKind::Expense);
        assert!(parse_kind("transfer").unwrap_err().is_validation());
    }
}
