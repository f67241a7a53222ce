use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::ActionTx;
use super::enqueue_prompt_result;

pub(super) fn handle_alert_key(key: KeyEvent, app: &mut App) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.dismiss_alert();
    }
}

pub(super) fn handle_confirm_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_yes(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.confirm_no(),
        _ => {}
    }
}

pub(super) fn handle_prompt_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Enter => {
            if let Some(result) = app.submit_path_prompt() {
                enqueue_prompt_result(action_tx, result);
            }
            return;
        }
        KeyCode::Esc => {
            app.cancel_path_prompt();
            return;
        }
        _ => {}
    }
    let Some(prompt) = app.path_prompt.as_mut() else {
        return;
    };
    let input = &mut prompt.input;
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => input.clear(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        _ => {}
    }
}
