use std::io::stderr;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use pocket_ledger::cli::{
    handle_audit_command, handle_categories_command, handle_report_command,
    handle_transaction_command, ReportCommands, TransactionCommands,
};
use pocket_ledger::config::{LedgerPaths, Settings};
use pocket_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "pocket",
    version,
    about = "Personal income and expense tracker",
    long_about = "Pocket Ledger records income and expenses in a plain CSV file \
                  and shows the running balance and per-category totals, from \
                  the command line or an interactive terminal UI."
)]
struct Cli {
    /// Ledger CSV file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH", env = "POCKET_LEDGER_FILE")]
    file: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// List the known categories
    Categories,

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config {
        /// Write config.json with the current settings if it does not exist
        #[arg(long)]
        init: bool,
    },

    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let level = if matches!(cli.command, Some(Commands::Tui)) {
        LevelFilter::ERROR
    } else {
        match cli.verbose {
            0 => parse_log_level(&settings.log_level),
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };
    setup_logging(level);

    let mut storage = Storage::new(&paths, &settings, cli.file)?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&mut storage, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &settings, cmd)?,
        Some(Commands::Categories) => handle_categories_command(&storage)?,
        Some(Commands::Audit { count }) => handle_audit_command(&storage, count)?,
        Some(Commands::Config { init }) => {
            if init && !paths.settings_file().exists() {
                settings.save(&paths)?;
                println!("Wrote {}", paths.settings_file().display());
                println!();
            }
            println!("Pocket Ledger Configuration");
            println!("===========================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", storage.ledger.path().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency label: {}", display_or_none(&settings.currency_label));
            println!("  Audit enabled:  {}", settings.audit_enabled);
            println!("  Log level:      {}", settings.log_level);
        }
        Some(Commands::Tui) => pocket_ledger::tui::run_tui(&mut storage, &settings)?,
        None => {
            println!("Pocket Ledger - income and expense tracker");
            println!();
            println!("Run 'pocket --help' for usage information.");
            println!("Run 'pocket tui' to launch the interactive interface.");
        }
    }

    Ok(())
}

fn display_or_none(value: &str) -> &str {
    if value.is_empty() {
        "(none)"
    } else {
        value
    }
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.trim().to_lowercase().as_str() {
        "off" => LevelFilter::OFF,
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'warn'", level);
            LevelFilter::WARN
        }
    }
}

fn setup_logging(level: LevelFilter) {
    // stdout carries command output, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry().with(terminal_log).init();
}
