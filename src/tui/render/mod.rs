pub mod help_overlay;
pub mod project_view;
pub mod selection_view;
pub mod status_row;
#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Screen};

/// Main render function — dispatches to the current screen
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: content area | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    // Clone the screen tag to avoid a borrow conflict with &mut App
    let screen = app.screen.clone();
    match screen {
        Screen::Selection => selection_view::render_selection_view(frame, app, chunks[0]),
        Screen::Project(_) => project_view::render_project_view(frame, app, chunks[0]),
    }

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }

    status_row::render_status_row(frame, app, chunks[1]);
}
