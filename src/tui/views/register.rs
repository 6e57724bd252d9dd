//! Transaction register view
//!
//! All transactions in ledger order; the selected row is the target of `d`.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::truncate;
use crate::models::CategoryKind;
use crate::tui::app::App;

/// Render the transaction register
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let ledger = &app.storage.ledger;
    let block = Block::default()
        .title(format!(" Transactions ({}) ", ledger.len()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if ledger.is_empty() {
        let text = Paragraph::new("No transactions. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(4),  // Position
        Constraint::Length(11), // Date
        Constraint::Length(14), // Category
        Constraint::Length(12), // Amount
        Constraint::Min(10),    // Description
    ];

    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Date"),
        Cell::from("Category"),
        Cell::from("Amount"),
        Cell::from("Description"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .height(1);

    let rows: Vec<Row> = ledger
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let txn = &entry.transaction;
            let (amount, amount_color) = match txn.category.kind {
                CategoryKind::Income => (format!("+{}", txn.amount), Color::Green),
                CategoryKind::Expense => (format!("-{}", txn.amount), Color::Red),
            };

            Row::new(vec![
                Cell::from(index.to_string()),
                Cell::from(txn.date.clone()),
                Cell::from(truncate(&txn.category.name, 14)),
                Cell::from(amount).style(Style::default().fg(amount_color)),
                Cell::from(truncate(&txn.description, 40)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}
