use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_reports_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.report_scroll_down(),
        KeyCode::Up | KeyCode::Char('k') => app.report_scroll_up(),
        KeyCode::Home | KeyCode::Char('g') => app.report_scroll = 0,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => app.navigate_to(View::Projects),
        _ => {}
    }
}
