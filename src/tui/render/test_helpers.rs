use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use tempfile::TempDir;

use crate::io::store::Store;
use crate::model::{Catalog, PlannerConfig, Project, SharedTask, Task};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// A small two-project catalog mirroring the ops tests: p1 with phases
/// A/A/B (t2 carries a day number), an empty project, one shared task.
pub fn scenario_catalog() -> Catalog {
    Catalog::new(
        vec![
            Project {
                key: "p1".into(),
                name: "First".into(),
                color: "#FB4196".into(),
                tasks: vec![
                    Task::new("t1", "task one").with_phase("A"),
                    Task::new("t2", "task two").with_phase("A").with_day(2),
                    Task::new("t3", "task three").with_phase("B"),
                ],
            },
            Project {
                key: "empty".into(),
                name: "Empty".into(),
                color: "#444444".into(),
                tasks: vec![],
            },
        ],
        vec![SharedTask::new("s1", "shared task", &["p1", "empty"])],
    )
}

/// An App over the scenario catalog with a fresh temp store. The
/// TempDir must stay alive for the duration of the test.
pub fn scenario_app() -> (App, TempDir) {
    let tmp = TempDir::new().unwrap();
    let store = Store::load(tmp.path());
    let app = App::new(scenario_catalog(), store, &PlannerConfig::default());
    (app, tmp)
}
