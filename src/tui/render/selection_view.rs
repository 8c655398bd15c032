use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::ops::view::ProjectSummary;
use crate::tui::app::App;

/// Render the selection screen: every project with its progress
pub fn render_selection_view(frame: &mut Frame, app: &App, area: Rect) {
    let summaries = app.summaries();
    let name_width = summaries
        .iter()
        .map(|s| UnicodeWidthStr::width(s.name.as_str()))
        .max()
        .unwrap_or(0);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        " Projects",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.background)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    for (i, summary) in summaries.iter().enumerate() {
        let is_cursor = i == app.selection_cursor;
        lines.push(render_project_line(
            app, summary, name_width, is_cursor, area.width,
        ));
    }

    if summaries.is_empty() {
        lines.push(Line::from(Span::styled(
            " No projects",
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        )));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

fn render_project_line<'a>(
    app: &'a App,
    summary: &ProjectSummary,
    name_width: usize,
    is_cursor: bool,
    width: u16,
) -> Line<'a> {
    let bg = if is_cursor {
        app.theme.highlight
    } else {
        app.theme.background
    };

    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled("  ", Style::default().bg(bg)));

    // Color swatch from the project's catalog color
    spans.push(Span::styled(
        "\u{25A0} ", // ■
        Style::default()
            .fg(app.theme.project_color(&summary.color))
            .bg(bg),
    ));

    let pad = name_width.saturating_sub(UnicodeWidthStr::width(summary.name.as_str()));
    spans.push(Span::styled(
        format!("{}{}", summary.name, " ".repeat(pad)),
        Style::default().fg(app.theme.text_bright).bg(bg),
    ));

    spans.push(Span::styled(
        format!("  {}/{}", summary.completed, summary.total),
        Style::default().fg(app.theme.text).bg(bg),
    ));

    let percent_color = if summary.percent == 100 {
        app.theme.green
    } else {
        app.theme.dim
    };
    spans.push(Span::styled(
        format!("  {:>3}%", summary.percent),
        Style::default().fg(percent_color).bg(bg),
    ));

    // Pad to full width for the cursor bar
    if is_cursor {
        let content_width: usize = spans
            .iter()
            .map(|s| UnicodeWidthStr::width(s.content.as_ref()))
            .sum();
        let w = width as usize;
        if content_width < w {
            spans.push(Span::styled(
                " ".repeat(w - content_width),
                Style::default().bg(bg),
            ));
        }
    }

    Line::from(spans)
}
