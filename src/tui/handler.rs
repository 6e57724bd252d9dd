//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog or to the register.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) | Event::Tick => Ok(()),
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    match app.active_dialog {
        ActiveDialog::None => handle_normal_key(app, key),
        ActiveDialog::AddTransaction => super::dialogs::transaction::handle_key(app, key),
        ActiveDialog::ConfirmDelete(id) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.close_dialog();
                app.delete_confirmed(id);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.close_dialog();
                app.set_status("Delete cancelled");
            }
            _ => {}
        },
    }

    Ok(())
}

fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),

        KeyCode::Char('a') | KeyCode::Char('n') => {
            app.clear_status();
            app.open_dialog(ActiveDialog::AddTransaction);
        }
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        KeyCode::Char('r') => app.reload(),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::Catalog;
    use crate::storage::{LedgerStore, Storage};
    use tempfile::TempDir;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_event(app, key(KeyCode::Char(c))).unwrap();
        }
    }

    fn empty_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let ledger =
            LedgerStore::open(temp_dir.path().join("transactions.csv"), Catalog::default());
        (temp_dir, Storage::with_ledger(ledger, None))
    }

    #[test]
    fn test_quit() {
        let (_temp, mut storage) = empty_storage();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);

        handle_event(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_add_through_form() {
        let (_temp, mut storage) = empty_storage();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);

        handle_event(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::AddTransaction);

        type_text(&mut app, "12,50");
        handle_event(&mut app, key(KeyCode::Tab)).unwrap();
        // Salary -> Investments -> Groceries
        handle_event(&mut app, key(KeyCode::Right)).unwrap();
        handle_event(&mut app, key(KeyCode::Right)).unwrap();
        handle_event(&mut app, key(KeyCode::Tab)).unwrap();
        for _ in 0..10 {
            handle_event(&mut app, key(KeyCode::Backspace)).unwrap();
        }
        type_text(&mut app, "2025-01-02");
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();

        assert!(!app.has_dialog());
        assert_eq!(app.transaction_count(), 1);
        let txn = &app.selected_entry().unwrap().transaction;
        assert_eq!(txn.category.name, "Groceries");
        assert_eq!(txn.amount.cents(), 1250);
        assert_eq!(txn.date, "2025-01-02");
    }

    #[test]
    fn test_invalid_form_stays_open() {
        let (_temp, mut storage) = empty_storage();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);

        handle_event(&mut app, key(KeyCode::Char('a'))).unwrap();
        type_text(&mut app, "abc");
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.active_dialog, ActiveDialog::AddTransaction);
        assert!(app
            .transaction_form
            .error_message
            .as_deref()
            .unwrap()
            .contains("Invalid amount"));
        assert_eq!(app.transaction_count(), 0);

        // Typing clears the error
        handle_event(&mut app, key(KeyCode::Backspace)).unwrap();
        assert!(app.transaction_form.error_message.is_none());

        handle_event(&mut app, key(KeyCode::Esc)).unwrap();
        assert!(!app.has_dialog());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let (_temp, mut storage) = empty_storage();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);

        handle_event(&mut app, key(KeyCode::Char('a'))).unwrap();
        type_text(&mut app, "5");
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.transaction_count(), 1);

        handle_event(&mut app, key(KeyCode::Char('d'))).unwrap();
        handle_event(&mut app, key(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.transaction_count(), 1);

        handle_event(&mut app, key(KeyCode::Char('d'))).unwrap();
        handle_event(&mut app, key(KeyCode::Char('y'))).unwrap();
        assert_eq!(app.transaction_count(), 0);
        assert!(!app.has_dialog());
    }
}
