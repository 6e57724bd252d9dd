//! CLI commands for reports
//!
//! Balance and per-category summary.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::report::{format_balance, format_summary};
use crate::error::LedgerResult;
use crate::services::ReportService;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show the current balance (income minus expenses)
    Balance,

    /// Show totals per category, largest first
    #[command(alias = "analytics")]
    Summary,
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    let service = ReportService::new(storage);

    match cmd {
        ReportCommands::Balance => {
            println!("{}", format_balance(service.balance(), &settings.currency_label));
        }
        ReportCommands::Summary => {
            print!("{}", format_summary(&service.ranked_summary()));
        }
    }

    Ok(())
}
