use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, Screen};

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(50, 60, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    match app.screen {
        Screen::Selection => {
            add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move cursor", key_style, desc_style);
            add_binding(&mut lines, " Enter/l", "Open project", key_style, desc_style);
            add_binding(&mut lines, " g/G", "Jump to top/bottom", key_style, desc_style);
            add_binding(&mut lines, " q", "Quit", key_style, desc_style);
        }
        Screen::Project(_) => {
            add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move cursor", key_style, desc_style);
            add_binding(&mut lines, " Space/Enter", "Toggle task", key_style, desc_style);
            add_binding(&mut lines, " Esc/h", "Back to projects", key_style, desc_style);
            add_binding(&mut lines, " g/G", "Jump to top/bottom", key_style, desc_style);
            add_binding(&mut lines, " q", "Quit", key_style, desc_style);
        }
    }

    lines.push(Line::from(""));
    add_binding(&mut lines, " ?", "Close this help", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, overlay_area);
}

fn add_binding(lines: &mut Vec<Line>, key: &str, desc: &str, key_style: Style, desc_style: Style) {
    lines.push(Line::from(vec![
        Span::styled(format!("{:<14}", key), key_style),
        Span::styled(desc.to_string(), desc_style),
    ]));
}

/// Helper to create a centered rect using a percentage of the available area
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
