//! Category summary panel
//!
//! Per-category totals, largest first, signed by kind.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::display::truncate;
use crate::services::{format_signed, ReportService};
use crate::tui::app::App;

/// Render the summary panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" By category ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = ReportService::new(app.storage).ranked_summary();
    if lines.is_empty() {
        let text = Paragraph::new("Nothing yet")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let rows: Vec<Row> = lines
        .iter()
        .map(|line| {
            let color = if line.total.is_negative() {
                Color::Red
            } else {
                Color::Green
            };
            Row::new(vec![
                Cell::from(truncate(&line.category, 16)),
                Cell::from(format_signed(line.total)).style(Style::default().fg(color)),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Min(10), Constraint::Length(12)]).block(block);
    frame.render_widget(table, area);
}
