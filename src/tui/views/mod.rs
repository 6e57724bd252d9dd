//! TUI Views module
//!
//! The balance header, the register, the category summary panel and the
//! status bar, plus whichever dialog is open on top of them.

pub mod header;
pub mod register;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    header::render(frame, app, layout.header);
    register::render(frame, app, layout.register);
    summary::render(frame, app, layout.summary);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::AddTransaction => dialogs::transaction::render(frame, app),
        ActiveDialog::ConfirmDelete(id) => {
            let prompt = app
                .storage
                .ledger
                .index_of(id)
                .and_then(|index| app.storage.ledger.get(index))
                .map(dialogs::confirm::delete_prompt)
                .unwrap_or_else(|| format!("Delete {}?", id));
            dialogs::confirm::render(frame, &prompt);
        }
    }
}
