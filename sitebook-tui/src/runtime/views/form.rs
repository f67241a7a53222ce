use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Editing keys shared by every form. Returns whether the key was consumed.
pub(super) fn edit_active_form(key: KeyEvent, app: &mut App) -> bool {
    let Some(form) = app.active_form_mut() else {
        return false;
    };
    match key.code {
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_previous(),
        KeyCode::Left => form.move_horizontal(true),
        KeyCode::Right => form.move_horizontal(false),
        KeyCode::Home => form.cursor_home_end(true),
        KeyCode::End => form.cursor_home_end(false),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.clear_focused()
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => form.input_char(c),
        _ => return false,
    }
    true
}

pub(super) fn handle_project_form_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => app.submit_project_form(),
        KeyCode::Esc => {
            if app.current_view == View::EditProject {
                app.cancel_project_form();
            } else {
                app.navigate_to(View::Projects);
            }
        }
        _ => {
            edit_active_form(key, app);
        }
    }
}
