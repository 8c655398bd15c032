use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io;
use crate::io::store::{self, Store, StoreError};
use crate::model::{Catalog, PlannerConfig};
use crate::ops::view::{self, ProjectDetail, ProjectSummary};

use super::input;
use super::render;
use super::theme::Theme;

/// Which screen is currently displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Project selection overview
    Selection,
    /// Detail view for one project (catalog key)
    Project(String),
}

/// Main application state. Owns the store; all mutation goes through
/// the action methods below, which persist write-through and surface
/// save failures as a status-row notice.
pub struct App {
    pub catalog: Catalog,
    pub store: Store,
    pub theme: Theme,
    pub show_key_hints: bool,
    pub screen: Screen,
    pub should_quit: bool,
    pub show_help: bool,
    /// Cursor on the selection screen
    pub selection_cursor: usize,
    /// Cursor into the detail screen's toggleable rows
    pub detail_cursor: usize,
    /// First visible content line of the detail screen
    pub detail_scroll: usize,
    /// Transient message shown in the status row (e.g. a failed save)
    pub notice: Option<String>,
}

impl App {
    pub fn new(catalog: Catalog, store: Store, config: &PlannerConfig) -> Self {
        // Resume on the persisted project if it still exists; a stale
        // key falls back to the selection screen.
        let screen = match store.current_project() {
            Some(key) if catalog.contains(key) => Screen::Project(key.to_string()),
            _ => Screen::Selection,
        };

        let selection_cursor = match &screen {
            Screen::Project(key) => catalog
                .projects()
                .position(|p| &p.key == key)
                .unwrap_or(0),
            Screen::Selection => 0,
        };

        App {
            catalog,
            store,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            screen,
            should_quit: false,
            show_help: false,
            selection_cursor,
            detail_cursor: 0,
            detail_scroll: 0,
            notice: None,
        }
    }

    /// Selection-screen rows, recomputed from current state
    pub fn summaries(&self) -> Vec<ProjectSummary> {
        view::project_summaries(&self.catalog, &self.store)
    }

    /// Detail view-model for the current project screen
    pub fn current_detail(&self) -> Option<ProjectDetail> {
        match &self.screen {
            Screen::Project(key) => view::project_detail(&self.catalog, &self.store, key),
            Screen::Selection => None,
        }
    }

    pub fn project_count(&self) -> usize {
        self.catalog.projects().count()
    }

    /// Number of toggleable rows on the current detail screen
    pub fn detail_row_count(&self) -> usize {
        self.current_detail()
            .map(|d| d.toggle_ids().len())
            .unwrap_or(0)
    }

    /// Selection → Project on the cursor row; persists the selection
    pub fn open_selected(&mut self) {
        let Some(key) = self
            .catalog
            .projects()
            .nth(self.selection_cursor)
            .map(|p| p.key.clone())
        else {
            return;
        };
        if let Err(e) = self.store.select_project(Some(&key)) {
            self.note_save_error(&e);
        }
        self.screen = Screen::Project(key);
        self.detail_cursor = 0;
        self.detail_scroll = 0;
    }

    /// Project → Selection; persists the cleared selection
    pub fn go_back(&mut self) {
        if let Screen::Project(key) = &self.screen {
            let key = key.clone();
            self.selection_cursor = self
                .catalog
                .projects()
                .position(|p| p.key == key)
                .unwrap_or(0);
        }
        if let Err(e) = self.store.select_project(None) {
            self.note_save_error(&e);
        }
        self.screen = Screen::Selection;
    }

    /// Toggle the task under the detail cursor; persists write-through.
    /// The next draw recomputes counts and groupings in place.
    pub fn toggle_under_cursor(&mut self) {
        let Some(detail) = self.current_detail() else {
            return;
        };
        let Some(id) = detail.toggle_ids().get(self.detail_cursor).map(|s| s.to_string())
        else {
            return;
        };
        if let Err(e) = self.store.toggle(&id) {
            self.note_save_error(&e);
        }
    }

    fn note_save_error(&mut self, e: &StoreError) {
        // The in-memory change already happened; the user just needs to
        // know it may not survive a reload.
        self.notice = Some(format!("save failed: {}", e));
    }
}

/// Run the TUI application
pub fn run(dir_override: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = match dir_override {
        Some(p) => p.to_path_buf(),
        None => store::default_dir(),
    };
    let config = config_io::read_config(&dir)?;
    let store = Store::load(&dir);
    let mut app = App::new(Catalog::builtin(), store, &config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
