use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::ops::view::{SharedRow, TaskRow};
use crate::tui::app::App;
use crate::tui::theme::Theme;
use crate::tui::wrap::wrap_text;

/// Left gutter for task rows: two spaces, checkbox, one space
const GUTTER: usize = 7;

/// Render the detail screen for the selected project: phase groups,
/// shared tasks, and overall progress. Adjusts the app's scroll offset
/// to keep the cursor row visible.
pub fn render_project_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(detail) = app.current_detail() else {
        return;
    };
    let theme = app.theme.clone();
    let width = area.width as usize;
    let label_width = width.saturating_sub(GUTTER).max(20);

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut cursor_line = 0usize;
    let mut row_idx = 0usize;

    // Header: swatch, name, progress
    lines.push(Line::from(vec![
        Span::styled(
            " \u{25A0} ",
            Style::default()
                .fg(theme.project_color(&detail.color))
                .bg(theme.background),
        ),
        Span::styled(
            detail.name.clone(),
            Style::default()
                .fg(theme.text_bright)
                .bg(theme.background)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}/{} \u{00B7} {}%", detail.completed, detail.total, detail.percent),
            Style::default().fg(theme.dim).bg(theme.background),
        ),
    ]));
    lines.push(Line::from(""));

    for group in &detail.phases {
        if let Some(label) = &group.label {
            lines.push(Line::from(Span::styled(
                format!(" {}", label),
                Style::default()
                    .fg(theme.text_bright)
                    .bg(theme.background)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        for row in &group.rows {
            let is_cursor = row_idx == app.detail_cursor;
            if is_cursor {
                cursor_line = lines.len();
            }
            push_task_row(&mut lines, &theme, row, label_width, width, is_cursor);
            row_idx += 1;
        }
        lines.push(Line::from(""));
    }

    if !detail.shared.is_empty() {
        lines.push(Line::from(Span::styled(
            " Shared Tasks",
            Style::default()
                .fg(theme.text_bright)
                .bg(theme.background)
                .add_modifier(Modifier::BOLD),
        )));
        for row in &detail.shared {
            let is_cursor = row_idx == app.detail_cursor;
            if is_cursor {
                cursor_line = lines.len();
            }
            push_shared_row(&mut lines, &theme, row, label_width, width, is_cursor);
            row_idx += 1;
        }
    }

    // Keep the cursor row visible
    let height = area.height as usize;
    if height > 0 {
        if cursor_line < app.detail_scroll {
            app.detail_scroll = cursor_line;
        } else if cursor_line + 1 > app.detail_scroll + height {
            app.detail_scroll = cursor_line + 1 - height;
        }
    }
    let visible: Vec<Line> = lines
        .into_iter()
        .skip(app.detail_scroll)
        .take(height)
        .collect();

    let paragraph = Paragraph::new(visible).style(Style::default().bg(theme.background));
    frame.render_widget(paragraph, area);
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

fn label_style(theme: &Theme, checked: bool, bg: ratatui::style::Color) -> Style {
    if checked {
        Style::default()
            .fg(theme.dim)
            .bg(bg)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(theme.text).bg(bg)
    }
}

fn push_task_row(
    lines: &mut Vec<Line<'static>>,
    theme: &Theme,
    row: &TaskRow,
    label_width: usize,
    full_width: usize,
    is_cursor: bool,
) {
    let bg = if is_cursor {
        theme.highlight
    } else {
        theme.background
    };
    let style = label_style(theme, row.checked, bg);
    // Reserve room on the last line for the day annotation
    let annotation = row.day.map(|d| format!(" \u{00B7} day {}", d));
    let reserve = annotation
        .as_deref()
        .map(UnicodeWidthStr::width)
        .unwrap_or(0);
    let wrapped = wrap_text(&row.label, label_width.saturating_sub(reserve).max(10));
    let last = wrapped.len() - 1;

    for (i, text) in wrapped.into_iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        if i == 0 {
            spans.push(Span::styled(
                format!("  {} ", checkbox(row.checked)),
                Style::default().fg(theme.text_bright).bg(bg),
            ));
        } else {
            spans.push(Span::styled(" ".repeat(GUTTER - 1), Style::default().bg(bg)));
        }
        spans.push(Span::styled(text, style));

        if i == last
            && let Some(ref annotation) = annotation
        {
            spans.push(Span::styled(
                annotation.clone(),
                Style::default().fg(theme.dim).bg(bg),
            ));
        }

        pad_line(&mut spans, bg, full_width, is_cursor);
        lines.push(Line::from(spans));
    }
}

fn push_shared_row(
    lines: &mut Vec<Line<'static>>,
    theme: &Theme,
    row: &SharedRow,
    label_width: usize,
    full_width: usize,
    is_cursor: bool,
) {
    let bg = if is_cursor {
        theme.highlight
    } else {
        theme.background
    };
    let style = label_style(theme, row.checked, bg);
    let wrapped = wrap_text(&row.label, label_width);

    for (i, text) in wrapped.into_iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        if i == 0 {
            spans.push(Span::styled(
                format!("  {} ", checkbox(row.checked)),
                Style::default().fg(theme.text_bright).bg(bg),
            ));
        } else {
            spans.push(Span::styled(" ".repeat(GUTTER - 1), Style::default().bg(bg)));
        }
        spans.push(Span::styled(text, style));
        pad_line(&mut spans, bg, full_width, is_cursor);
        lines.push(Line::from(spans));
    }

    // Which projects this task applies to
    let mut spans = vec![Span::styled(
        format!("{}for: {}", " ".repeat(GUTTER - 1), row.projects.join(", ")),
        Style::default().fg(theme.dim).bg(bg),
    )];
    pad_line(&mut spans, bg, full_width, is_cursor);
    lines.push(Line::from(spans));
}

/// Pad the cursor bar out to the full width
fn pad_line(
    spans: &mut Vec<Span<'static>>,
    bg: ratatui::style::Color,
    full_width: usize,
    is_cursor: bool,
) {
    if !is_cursor {
        return;
    }
    let content_width: usize = spans
        .iter()
        .map(|s| UnicodeWidthStr::width(s.content.as_ref()))
        .sum();
    if content_width < full_width {
        spans.push(Span::styled(
            " ".repeat(full_width - content_width),
            Style::default().bg(bg),
        ));
    }
}
