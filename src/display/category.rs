//! Category display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Catalog;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Type")]
    kind: &'static str,
}

/// Format the catalog in display order
pub fn format_catalog(catalog: &Catalog) -> String {
    let rows = catalog.iter().map(|c| CategoryRow {
        name: c.name.clone(),
        kind: c.kind.label(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());

    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_catalog() {
        let output = format_catalog(&Catalog::default());
        assert!(output.contains("Salary"));
        assert!(output.contains("Entertainment"));
        assert!(output.contains("Income"));
        assert!(output.contains("Expense"));
        assert!(output.find("Salary").unwrap() < output.find("Transport").unwrap());
    }
}
