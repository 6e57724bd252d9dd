//! Terminal User Interface module
//!
//! An interactive view of the ledger built on ratatui: the balance, the
//! register, the category summary, and dialogs for adding and deleting
//! transactions.

pub mod app;
pub mod dialogs;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
