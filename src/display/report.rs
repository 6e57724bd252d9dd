//! Report formatting utilities for terminal output
//!
//! Formats the balance line and the per-category summary.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::Money;
use crate::services::{format_signed, SummaryLine};

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Total")]
    total: String,
}

/// Format the balance line, e.g. "Current balance: +120.00 EUR"
pub fn format_balance(balance: Money, currency_label: &str) -> String {
    let amount = format_signed(balance);
    if currency_label.is_empty() {
        format!("Current balance: {}", amount)
    } else {
        format!("Current balance: {} {}", amount, currency_label)
    }
}

/// Format the ranked category summary as a table
pub fn format_summary(lines: &[SummaryLine]) -> String {
    if lines.is_empty() {
        return "No transactions yet.\n".to_string();
    }

    let rows = lines.iter().map(|line| SummaryRow {
        category: line.category.clone(),
        total: format_signed(line.total),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.modify(Columns::single(1), Alignment::right());

    format!("{}\n", table)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_balance() {
        assert_eq!(format_balance(Money::from_cents(12000), ""), "Current balance: +120.00");
        assert_eq!(
            format_balance(Money::from_cents(-550), "EUR"),
            "Current balance: -5.50 EUR"
        );
    }

    #[test]
    fn test_format_summary() {
        let lines = vec![
            SummaryLine {
                category: "Salary".into(),
                total: Money::from_cents(20000),
            },
            SummaryLine {
                category: "Groceries".into(),
                total: Money::from_cents(-4000),
            },
        ];

        let output = format_summary(&lines);
        assert!(output.contains("Salary"));
        assert!(output.contains("+200.00"));
        assert!(output.contains("-40.00"));
        assert!(output.find("Salary").unwrap() < output.find("Groceries").unwrap());
    }

    #[test]
    fn test_format_summary_empty() {
        assert_eq!(format_summary(&[]), "No transactions yet.\n");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long description", 9), "a long...");
        assert_eq!(truncate("Продукты на неделю", 11), "Продукты...");
        assert_eq!(truncate("abcdef", 2), "..");
    }
}
