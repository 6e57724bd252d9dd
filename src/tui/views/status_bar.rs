//! Status bar view
//!
//! Shows the last status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

const HINTS: &str = " a:Add  d:Delete  j/k:Move  r:Reload  q:Quit ";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let message = app.status_message.as_deref().unwrap_or("");
    let message = format!(" {}", message);

    let used = message.chars().count() + HINTS.chars().count();
    let padding = " ".repeat((area.width as usize).saturating_sub(used).max(1));

    let line = Line::from(vec![
        Span::styled(message, Style::default().fg(Color::Yellow)),
        Span::raw(padding),
        Span::styled(HINTS, Style::default().fg(Color::White)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
