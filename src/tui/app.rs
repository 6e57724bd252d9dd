//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use crate::config::Settings;
use crate::models::{LedgerEntry, TransactionId};
use crate::services::TransactionService;
use crate::storage::{LoadReport, Storage};

use super::dialogs::transaction::TransactionFormState;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddTransaction,
    ConfirmDelete(TransactionId),
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a mut Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the register
    pub selected_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Transaction form state
    pub transaction_form: TransactionFormState,
}

impl<'a> App<'a> {
    pub fn new(storage: &'a mut Storage, settings: &'a Settings) -> Self {
        let status_message = load_message(storage.ledger.load_report());
        let mut app = Self {
            storage,
            settings,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            status_message,
            transaction_form: TransactionFormState::new(),
        };
        app.select_last();
        app
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        if dialog == ActiveDialog::AddTransaction {
            self.transaction_form = TransactionFormState::new();
        }
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn transaction_count(&self) -> usize {
        self.storage.ledger.len()
    }

    pub fn selected_entry(&self) -> Option<&LedgerEntry> {
        self.storage.ledger.get(self.selected_index)
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.transaction_count() {
            self.selected_index += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    /// Select the newest transaction
    pub fn select_last(&mut self) {
        self.selected_index = self.transaction_count().saturating_sub(1);
    }

    /// Keep the selection inside the register after it shrinks
    pub fn clamp_selection(&mut self) {
        let max = self.transaction_count().saturating_sub(1);
        self.selected_index = self.selected_index.min(max);
    }

    /// Ask for confirmation before deleting the selected row
    pub fn request_delete(&mut self) {
        match self.selected_entry().map(|entry| entry.id) {
            Some(id) => self.open_dialog(ActiveDialog::ConfirmDelete(id)),
            None => self.set_status("Nothing to delete"),
        }
    }

    /// Delete a transaction the user confirmed
    pub fn delete_confirmed(&mut self, id: TransactionId) {
        let result = TransactionService::new(self.storage).delete(id);
        match result {
            Ok(txn) => {
                self.clamp_selection();
                self.set_status(format!(
                    "Deleted {}: {} {}",
                    id, txn.category.name, txn.amount
                ));
            }
            Err(e) => self.set_status(format!("Delete failed: {}", e)),
        }
    }

    /// Re-read the ledger file, discarding in-memory state
    pub fn reload(&mut self) {
        let report = self.storage.ledger.reload().clone();
        self.clamp_selection();
        let message = load_message(&report)
            .unwrap_or_else(|| format!("Reloaded {} transactions", report.loaded));
        self.set_status(message);
    }
}

/// Status line for a load that needs the user's attention
fn load_message(report: &LoadReport) -> Option<String> {
    if let Some(reason) = &report.fallback {
        return Some(format!("Could not read ledger ({}); started empty", reason));
    }
    if !report.skipped.is_empty() {
        return Some(format!(
            "Loaded {} transactions, skipped {} unreadable rows",
            report.loaded,
            report.skipped.len()
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Catalog, Money, Transaction};
    use crate::storage::LedgerStore;
    use std::fs;
    use tempfile::TempDir;

    fn storage_with(count: usize) -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger =
            LedgerStore::open(temp_dir.path().join("transactions.csv"), Catalog::default());
        for i in 0..count {
            let category = ledger.category_by_name("Groceries").unwrap().clone();
            ledger
                .add_transaction(Transaction::new(
                    Money::from_cents(100 * (i as i64 + 1)),
                    category,
                    "2025-01-01",
                ))
                .unwrap();
        }
        (temp_dir, Storage::with_ledger(ledger, None))
    }

    #[test]
    fn test_new_selects_newest() {
        let (_temp, mut storage) = storage_with(3);
        let settings = Settings::default();
        let app = App::new(&mut storage, &settings);
        assert_eq!(app.selected_index, 2);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_navigation_bounds() {
        let (_temp, mut storage) = storage_with(2);
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);

        app.move_down();
        assert_eq!(app.selected_index, 1);
        app.move_up();
        app.move_up();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_delete_flow() {
        let (_temp, mut storage) = storage_with(2);
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);

        app.request_delete();
        let id = match app.active_dialog {
            ActiveDialog::ConfirmDelete(id) => id,
            other => panic!("unexpected dialog {:?}", other),
        };

        app.close_dialog();
        app.delete_confirmed(id);

        assert_eq!(app.transaction_count(), 1);
        assert_eq!(app.selected_index, 0);
        assert!(app.status_message.as_deref().unwrap().starts_with("Deleted"));
    }

    #[test]
    fn test_request_delete_on_empty_ledger() {
        let (_temp, mut storage) = storage_with(0);
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);

        app.request_delete();
        assert!(!app.has_dialog());
        assert_eq!(app.status_message.as_deref(), Some("Nothing to delete"));
    }

    #[test]
    fn test_reload_picks_up_external_changes() {
        let (temp, mut storage) = storage_with(3);
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);

        fs::write(
            temp.path().join("transactions.csv"),
            "Amount,Category,Type,Date,Description\n5.00,Salary,Income,2025-02-01,\n1.00,Rent,Expense,2025-02-01,\n",
        )
        .unwrap();

        app.reload();
        assert_eq!(app.transaction_count(), 1);
        assert_eq!(app.selected_index, 0);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Loaded 1 transactions, skipped 1 unreadable rows")
        );
    }
}
