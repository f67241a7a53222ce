use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent};

use super::form::edit_active_form;

pub(super) fn handle_employees_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::F(2) => app.roster_toggle_focus(),
        _ if app.roster.list_focused => match key.code {
            KeyCode::Down | KeyCode::Char('j') => app.roster_next(),
            KeyCode::Up | KeyCode::Char('k') => app.roster_previous(),
            KeyCode::Tab => app.roster_toggle_focus(),
            KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('d') => {
                app.request_delete_selected_employee()
            }
            KeyCode::Esc => app.navigate_to(View::Projects),
            _ => {}
        },
        KeyCode::Enter => app.submit_employee_form(),
        KeyCode::Esc => app.navigate_to(View::Projects),
        _ => {
            edit_active_form(key, app);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SitebookConfig;
    use crossterm::event::KeyModifiers;
    use sitebook::Employee;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App {
        let mut app = App::new(&SitebookConfig::default());
        app.start_new_document();
        app.navigate_to(View::Employees);
        app
    }

    #[test]
    fn add_then_delete_employee() {
        let mut app = test_app();
        for c in "E1".chars() {
            handle_employees_key(key(KeyCode::Char(c)), &mut app);
        }
        handle_employees_key(key(KeyCode::Tab), &mut app);
        for c in "Lin".chars() {
            handle_employees_key(key(KeyCode::Char(c)), &mut app);
        }
        handle_employees_key(key(KeyCode::Enter), &mut app);
        assert_eq!(app.session.employees(), &[Employee::new("E1", "Lin")]);
        assert_eq!(app.roster.form.form.value("id"), "");

        handle_employees_key(key(KeyCode::F(2)), &mut app);
        handle_employees_key(key(KeyCode::Char('d')), &mut app);
        app.confirm_yes();
        assert!(app.session.employees().is_empty());
        assert!(!app.roster.list_focused);
    }

    #[test]
    fn missing_name_is_reported_inline() {
        let mut app = test_app();
        handle_employees_key(key(KeyCode::Char('E')), &mut app);
        handle_employees_key(key(KeyCode::Enter), &mut app);
        assert_eq!(app.roster.form.form.error.as_deref(), Some("Name is required"));
        assert!(app.session.employees().is_empty());
    }
}
