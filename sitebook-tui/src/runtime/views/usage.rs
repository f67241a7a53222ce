use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

use super::form::edit_active_form;

pub(super) fn handle_usage_key(key: KeyEvent, app: &mut App) {
    let records_focused = app.usage.as_ref().is_some_and(|u| u.records_focused);
    match key.code {
        KeyCode::Esc => app.close_usage(),
        KeyCode::F(2) => app.usage_toggle_focus(),
        _ if records_focused => match key.code {
            KeyCode::Down | KeyCode::Char('j') => app.usage_record_next(),
            KeyCode::Up | KeyCode::Char('k') => app.usage_record_previous(),
            KeyCode::Tab => app.usage_toggle_focus(),
            KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('d') => {
                app.request_delete_selected_usage()
            }
            _ => {}
        },
        KeyCode::Enter => app.submit_usage_form(),
        _ => {
            if edit_active_form(key, app) {
                app.sync_usage_employee();
            }
        }
    }
}
