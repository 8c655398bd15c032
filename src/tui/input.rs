use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Screen};

/// Handle a key event for the current screen
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Help overlay intercepts everything until dismissed
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    // Any keypress clears a stale save-failure notice
    app.notice = None;

    match app.screen {
        Screen::Selection => handle_selection(app, key),
        Screen::Project(_) => handle_project(app, key),
    }
}

fn handle_selection(app: &mut App, key: KeyEvent) {
    let last = app.project_count().saturating_sub(1);
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.selection_cursor < last {
                app.selection_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.selection_cursor = app.selection_cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => app.selection_cursor = 0,
        KeyCode::Char('G') => app.selection_cursor = last,
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => app.open_selected(),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

fn handle_project(app: &mut App, key: KeyEvent) {
    let last = app.detail_row_count().saturating_sub(1);
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.detail_cursor < last {
                app.detail_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.detail_cursor = app.detail_cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => app.detail_cursor = 0,
        KeyCode::Char('G') => app.detail_cursor = last,
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_under_cursor(),
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Left => app.go_back(),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::Store;
    use crate::model::{Catalog, PlannerConfig};
    use crossterm::event::KeyModifiers;
    use tempfile::TempDir;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn builtin_app(tmp: &TempDir) -> App {
        let store = Store::load(tmp.path());
        App::new(Catalog::builtin(), store, &PlannerConfig::default())
    }

    #[test]
    fn selection_cursor_stays_in_bounds() {
        let tmp = TempDir::new().unwrap();
        let mut app = builtin_app(&tmp);
        let last = app.project_count() - 1;

        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.selection_cursor, 0);
        for _ in 0..20 {
            press(&mut app, KeyCode::Char('j'));
        }
        assert_eq!(app.selection_cursor, last);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.selection_cursor, 0);
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.selection_cursor, last);
    }

    #[test]
    fn enter_opens_and_esc_goes_back() {
        let tmp = TempDir::new().unwrap();
        let mut app = builtin_app(&tmp);

        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.screen, Screen::Project(_)));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Selection);
        assert!(!app.should_quit);
    }

    #[test]
    fn space_toggles_the_cursor_row() {
        let tmp = TempDir::new().unwrap();
        let mut app = builtin_app(&tmp);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char(' '));
        let detail = app.current_detail().unwrap();
        assert_eq!(detail.completed, 1);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.current_detail().unwrap().completed, 0);
    }

    #[test]
    fn help_overlay_swallows_keys() {
        let tmp = TempDir::new().unwrap();
        let mut app = builtin_app(&tmp);

        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('j'));
        assert!(app.show_help);
        assert_eq!(app.selection_cursor, 0);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn q_quits_from_either_screen() {
        let tmp = TempDir::new().unwrap();
        let mut app = builtin_app(&tmp);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
