use crate::app::{App, PromptResult, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action_queue::{Action, ActionTx};

mod employees;
mod form;
mod overlays;
mod projects;
mod reports;
mod usage;
mod welcome;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

fn enqueue_prompt_result(action_tx: &ActionTx, result: PromptResult) {
    let action = match result {
        PromptResult::Open(path) => Action::Open(path),
        PromptResult::SaveAs(path) => Action::SaveAs(path),
    };
    enqueue_action(action_tx, action);
}

/// Route a key press: overlays first, then global shortcuts, then the current view.
pub(super) fn handle_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if app.alert.is_some() {
        overlays::handle_alert_key(key, app);
        return;
    }
    if app.confirm.is_some() {
        overlays::handle_confirm_key(key, app);
        return;
    }
    if app.path_prompt.is_some() {
        overlays::handle_prompt_key(key, app, action_tx);
        return;
    }
    if handle_global_key(key, app, action_tx) {
        return;
    }
    match app.current_view {
        View::Welcome => welcome::handle_welcome_key(key, app),
        View::Projects => projects::handle_projects_key(key, app),
        View::AddProject | View::EditProject => form::handle_project_form_key(key, app),
        View::Usage => usage::handle_usage_key(key, app),
        View::Employees => employees::handle_employees_key(key, app),
        View::Reports => reports::handle_reports_key(key, app),
    }
}

/// Ctrl shortcuts available from every view. Returns whether the key was consumed.
fn handle_global_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) -> bool {
    if !key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }
    let KeyCode::Char(c) = key.code else {
        return false;
    };
    match c.to_ascii_lowercase() {
        'q' | 'c' => app.request_quit(),
        'o' => app.request_open(),
        'n' => app.request_new_document(),
        's' => enqueue_action(action_tx, Action::Save),
        'w' => {
            if app.can_save() {
                app.open_path_prompt(crate::app::PromptPurpose::SaveAs);
            }
        }
        'l' => app.navigate_to(View::Projects),
        'a' => app.navigate_to(View::AddProject),
        'e' => app.navigate_to(View::Employees),
        'r' => app.navigate_to(View::Reports),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{ConfirmAction, PromptPurpose};
    use crate::config::SitebookConfig;
    use std::path::PathBuf;

    use super::super::action_queue::channel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, tx: &ActionTx, text: &str) {
        for c in text.chars() {
            handle_key(key(KeyCode::Char(c)), app, tx);
        }
    }

    fn test_app() -> App {
        let mut app = App::new(&SitebookConfig::default());
        app.start_new_document();
        app.clear_status();
        app
    }

    #[test]
    fn ctrl_s_queues_save() {
        let mut app = test_app();
        let (tx, mut rx) = channel();
        handle_key(ctrl('s'), &mut app, &tx);
        assert_eq!(rx.try_recv().ok(), Some(Action::Save));
    }

    #[test]
    fn open_prompt_queues_open_with_typed_path() {
        let mut app = App::new(&SitebookConfig::default());
        let (tx, mut rx) = channel();
        handle_key(key(KeyCode::Char('o')), &mut app, &tx);
        assert_eq!(
            app.path_prompt.as_ref().map(|p| p.purpose),
            Some(PromptPurpose::Open)
        );
        type_text(&mut app, &tx, "data.json");
        handle_key(key(KeyCode::Enter), &mut app, &tx);
        assert_eq!(
            rx.try_recv().ok(),
            Some(Action::Open(PathBuf::from("data.json")))
        );
        assert!(app.path_prompt.is_none());
    }

    #[test]
    fn escape_cancels_prompt_silently() {
        let mut app = test_app();
        let (tx, mut rx) = channel();
        handle_key(ctrl('w'), &mut app, &tx);
        assert!(app.path_prompt.is_some());
        handle_key(key(KeyCode::Esc), &mut app, &tx);
        assert!(app.path_prompt.is_none());
        assert!(app.alert.is_none());
        assert!(app.status_message.is_none());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn alert_swallows_keys_until_dismissed() {
        let mut app = test_app();
        let (tx, mut rx) = channel();
        app.show_alert("boom".to_string());
        handle_key(ctrl('s'), &mut app, &tx);
        assert!(rx.try_recv().is_err());
        assert!(app.alert.is_some());
        handle_key(key(KeyCode::Enter), &mut app, &tx);
        assert!(app.alert.is_none());
    }

    #[test]
    fn quit_with_unsaved_changes_asks_first() {
        let mut app = test_app();
        let (tx, _rx) = channel();
        handle_key(ctrl('q'), &mut app, &tx);
        assert!(app.running);
        assert_eq!(
            app.confirm.as_ref().map(|c| c.action.clone()),
            Some(ConfirmAction::DiscardAndQuit)
        );
        handle_key(key(KeyCode::Char('y')), &mut app, &tx);
        assert!(!app.running);
    }

    #[test]
    fn add_project_through_keys() {
        let mut app = test_app();
        let (tx, _rx) = channel();
        handle_key(ctrl('a'), &mut app, &tx);
        assert_eq!(app.current_view, View::AddProject);
        type_text(&mut app, &tx, "P9");
        handle_key(key(KeyCode::Tab), &mut app, &tx);
        handle_key(key(KeyCode::Tab), &mut app, &tx);
        type_text(&mut app, &tx, "Ring road");
        handle_key(key(KeyCode::Enter), &mut app, &tx);

        assert_eq!(app.current_view, View::Projects);
        let project = &app.session.projects()[0];
        assert_eq!(project.project_id, "P9");
        assert_eq!(project.project_name, "Ring road");
    }

    #[test]
    fn typing_q_in_a_form_does_not_quit() {
        let mut app = test_app();
        let (tx, _rx) = channel();
        handle_key(ctrl('a'), &mut app, &tx);
        type_text(&mut app, &tx, "q");
        assert!(app.running);
        assert!(app.confirm.is_none());
        assert_eq!(app.project_form.as_ref().unwrap().form.value("projectId"), "q");
    }
}
