//! Audit log CLI commands

use crate::error::LedgerResult;
use crate::storage::Storage;

/// Print the most recent `count` audit entries, oldest first
pub fn handle_audit_command(storage: &Storage, count: usize) -> LedgerResult<()> {
    let Some(logger) = storage.audit() else {
        println!("Audit logging is disabled (set \"audit_enabled\": true in config.json).");
        return Ok(());
    };

    let entries = logger.read_recent(count)?;
    if entries.is_empty() {
        println!("No audit entries yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    println!(
        "\nShowing {} of {} entries from {}",
        entries.len(),
        logger.entry_count()?,
        logger.path().display()
    );

    Ok(())
}
