use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_welcome_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('o') | KeyCode::Char('O') => app.request_open(),
        KeyCode::Char('n') | KeyCode::Char('N') => app.request_new_document(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}
