//! Balance header

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::services::{format_signed, ReportService};
use crate::tui::app::App;

/// Render the balance header
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let balance = ReportService::new(app.storage).balance();
    let balance_color = if balance.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let mut spans = vec![
        Span::styled("Balance: ", Style::default().fg(Color::White)),
        Span::styled(
            format_signed(balance),
            Style::default()
                .fg(balance_color)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if !app.settings.currency_label.is_empty() {
        spans.push(Span::raw(format!(" {}", app.settings.currency_label)));
    }

    let block = Block::default()
        .title(" Pocket Ledger ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
