//! Add-transaction dialog
//!
//! Modal form with Amount, Category, Date and Description fields. The
//! category is picked by cycling through the catalog rather than typed.
//! Validation failures stay in the form so the user can correct them.

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::error::LedgerError;
use crate::models::Catalog;
use crate::services::{TransactionInput, TransactionService, DATE_FORMAT};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the transaction form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionField {
    #[default]
    Amount,
    Category,
    Date,
    Description,
}

impl TransactionField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Amount => Self::Category,
            Self::Category => Self::Date,
            Self::Date => Self::Description,
            Self::Description => Self::Amount,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Amount => Self::Description,
            Self::Category => Self::Amount,
            Self::Date => Self::Category,
            Self::Description => Self::Date,
        }
    }
}

/// State for the transaction form dialog
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    pub focused_field: TransactionField,
    pub amount_input: TextInput,
    /// Position of the chosen category in the catalog
    pub category_index: usize,
    pub date_input: TextInput,
    pub description_input: TextInput,
    pub error_message: Option<String>,
}

impl Default for TransactionFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionFormState {
    /// Empty form with today's date and the first category
    pub fn new() -> Self {
        let today = Local::now().format(DATE_FORMAT).to_string();
        let mut state = Self {
            focused_field: TransactionField::Amount,
            amount_input: TextInput::new().label("Amount").placeholder("e.g. 1200.50"),
            category_index: 0,
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD")
                .content(today),
            description_input: TextInput::new()
                .label("Description")
                .placeholder("optional"),
            error_message: None,
        };
        state.set_focus(TransactionField::Amount);
        state
    }

    pub fn set_focus(&mut self, field: TransactionField) {
        self.focused_field = field;
        self.amount_input.focused = field == TransactionField::Amount;
        self.date_input.focused = field == TransactionField::Date;
        self.description_input.focused = field == TransactionField::Description;
    }

    pub fn next_field(&mut self) {
        self.set_focus(self.focused_field.next());
    }

    pub fn prev_field(&mut self) {
        self.set_focus(self.focused_field.prev());
    }

    /// The text input behind the focused field; the category has none
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            TransactionField::Amount => Some(&mut self.amount_input),
            TransactionField::Category => None,
            TransactionField::Date => Some(&mut self.date_input),
            TransactionField::Description => Some(&mut self.description_input),
        }
    }

    /// Step through a catalog of `len` categories, wrapping at both ends
    pub fn cycle_category(&mut self, len: usize, forward: bool) {
        if len == 0 {
            return;
        }
        self.category_index = if forward {
            (self.category_index + 1) % len
        } else {
            (self.category_index + len - 1) % len
        };
    }

    /// Raw input for validation by the transaction service
    pub fn to_input(&self, catalog: &Catalog) -> TransactionInput {
        let category = catalog
            .get(self.category_index)
            .map(|c| c.name.clone())
            .unwrap_or_default();

        TransactionInput::new(self.amount_input.value(), category, self.date_input.value())
            .with_description(self.description_input.value())
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

/// Render the transaction dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(64, 12, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Transaction ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Category
            Constraint::Length(1), // Date
            Constraint::Length(1), // Description
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.transaction_form;

    frame.render_widget(form.amount_input.clone(), chunks[0]);
    render_category_field(frame, app, chunks[1]);
    frame.render_widget(form.date_input.clone(), chunks[2]);
    frame.render_widget(form.description_input.clone(), chunks[3]);

    if let Some(error) = &form.error_message {
        let error = Paragraph::new(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        )))
        .wrap(ratatui::widgets::Wrap { trim: true });
        frame.render_widget(error, chunks[5]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Category  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[6]);
}

fn render_category_field(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.transaction_form;
    let focused = form.focused_field == TransactionField::Category;

    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let value_style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let (name, kind) = app
        .storage
        .ledger
        .catalog()
        .get(form.category_index)
        .map(|c| (c.name.as_str(), c.kind.label()))
        .unwrap_or(("-", ""));

    let line = Line::from(vec![
        Span::styled(format!("{:>12}: ", "Category"), label_style),
        Span::styled(format!("< {} >", name), value_style),
        Span::styled(format!(" {}", kind), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Handle key input for the transaction dialog
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let catalog_len = app.storage.ledger.catalog().len();
    let form = &mut app.transaction_form;

    match key.code {
        KeyCode::Esc => app.close_dialog(),

        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab => form.next_field(),
        KeyCode::BackTab => form.prev_field(),

        KeyCode::Enter => {
            if let Err(e) = save_transaction(app) {
                app.transaction_form.set_error(e);
            }
        }

        KeyCode::Left | KeyCode::Up if form.focused_field == TransactionField::Category => {
            form.cycle_category(catalog_len, false);
        }
        KeyCode::Right | KeyCode::Down if form.focused_field == TransactionField::Category => {
            form.cycle_category(catalog_len, true);
        }

        KeyCode::Left => {
            if let Some(input) = form.focused_input() {
                input.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(input) = form.focused_input() {
                input.move_right();
            }
        }
        KeyCode::Home => {
            if let Some(input) = form.focused_input() {
                input.move_start();
            }
        }
        KeyCode::End => {
            if let Some(input) = form.focused_input() {
                input.move_end();
            }
        }

        KeyCode::Backspace => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.backspace();
            }
        }
        KeyCode::Delete => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.delete();
            }
        }

        KeyCode::Char(c) => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.insert(c);
            }
        }

        _ => {}
    }
}

/// Validate and add the transaction, closing the dialog on success
fn save_transaction(app: &mut App) -> Result<(), String> {
    let input = app.transaction_form.to_input(app.storage.ledger.catalog());

    let (id, txn) = TransactionService::new(app.storage)
        .create(&input)
        .map_err(|e| match e {
            LedgerError::Validation(msg) => msg,
            other => other.to_string(),
        })?;

    app.close_dialog();
    app.select_last();
    app.set_status(format!(
        "Added {}: {} {} ({})",
        id, txn.category.name, txn.amount, txn.category.kind
    ));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cycle() {
        let mut form = TransactionFormState::new();
        assert_eq!(form.focused_field, TransactionField::Amount);
        assert!(form.amount_input.focused);

        form.next_field();
        assert_eq!(form.focused_field, TransactionField::Category);
        assert!(form.focused_input().is_none());

        form.next_field();
        form.next_field();
        form.next_field();
        assert_eq!(form.focused_field, TransactionField::Amount);

        form.prev_field();
        assert_eq!(form.focused_field, TransactionField::Description);
        assert!(form.description_input.focused);
        assert!(!form.amount_input.focused);
    }

    #[test]
    fn test_category_cycle_wraps() {
        let mut form = TransactionFormState::new();
        form.cycle_category(5, false);
        assert_eq!(form.category_index, 4);
        form.cycle_category(5, true);
        assert_eq!(form.category_index, 0);
        form.cycle_category(0, true);
        assert_eq!(form.category_index, 0);
    }

    #[test]
    fn test_date_prefilled() {
        let form = TransactionFormState::new();
        let today = Local::now().format(DATE_FORMAT).to_string();
        assert_eq!(form.date_input.value(), today);
    }

    #[test]
    fn test_to_input() {
        let catalog = Catalog::default();
        let mut form = TransactionFormState::new();
        form.amount_input = TextInput::new().content("40");
        form.date_input = TextInput::new().content("2025-01-02");
        form.description_input = TextInput::new().content("market");
        form.category_index = catalog.position("Groceries").unwrap();

        let input = form.to_input(&catalog);
        assert_eq!(
            input,
            TransactionInput::new("40", "Groceries", "2025-01-02").with_description("market")
        );
    }
}
