use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Screen};

/// Render the status row (bottom of screen): a save-failure notice
/// takes priority, otherwise the key hints for the current screen.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = if let Some(ref notice) = app.notice {
        Line::from(Span::styled(
            format!(" {}", notice),
            Style::default().fg(app.theme.red).bg(bg),
        ))
    } else if app.show_key_hints {
        let hints = match app.screen {
            Screen::Selection => " j/k move  enter open  ? help  q quit",
            Screen::Project(_) => " j/k move  space toggle  esc back  ? help  q quit",
        };
        Line::from(Span::styled(hints, Style::default().fg(app.theme.dim).bg(bg)))
    } else {
        Line::from(Span::styled(" ".repeat(width), Style::default().bg(bg)))
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
