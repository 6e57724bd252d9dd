//! Category CLI commands

use crate::display::category::format_catalog;
use crate::error::LedgerResult;
use crate::storage::Storage;

/// Print the category catalog
pub fn handle_categories_command(storage: &Storage) -> LedgerResult<()> {
    print!("{}", format_catalog(storage.ledger.catalog()));
    Ok(())
}
