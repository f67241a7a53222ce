use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn handle_projects_key(key: KeyEvent, app: &mut App) {
    if app.list_focused {
        handle_list_key(key, app);
    } else {
        handle_search_key(key, app);
    }
}

fn handle_list_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.project_select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.project_select_previous(),
        KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('E') => app.begin_edit_selected(),
        KeyCode::Char('u') | KeyCode::Char('U') => app.open_usage_for_selected(),
        KeyCode::Char('a') | KeyCode::Char('A') => app.navigate_to(View::AddProject),
        KeyCode::Char('/') | KeyCode::Tab => app.toggle_list_focus(),
        KeyCode::Esc if !app.search_input.value.is_empty() => app.search_input_clear(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.request_quit(),
        _ => {}
    }
}

fn handle_search_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter | KeyCode::Tab | KeyCode::Down => app.toggle_list_focus(),
        KeyCode::Esc => {
            if app.search_input.value.is_empty() {
                app.toggle_list_focus();
            } else {
                app.search_input_clear();
            }
        }
        KeyCode::Backspace => app.search_input_backspace(),
        KeyCode::Left => app.search_input.move_left(),
        KeyCode::Right => app.search_input.move_right(),
        KeyCode::Home => app.search_input.home(),
        KeyCode::End => app.search_input.end(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input_clear()
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input_char(c)
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SitebookConfig;
    use sitebook::persistence::{DocumentShape, FileHandle, LoadedDocument};
    use sitebook::{Project, ProjectDocument};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App {
        let mut app = App::new(&SitebookConfig::default());
        app.apply_loaded(LoadedDocument {
            handle: FileHandle::new("/tmp/p.json", true),
            document: ProjectDocument {
                projects: vec![
                    Project::new("A-100", "Harbour cable"),
                    Project::new("B-200", "Mountain relay"),
                ],
                ..Default::default()
            },
            shape: DocumentShape::Composite,
        });
        app
    }

    #[test]
    fn slash_focuses_search_and_typing_filters() {
        let mut app = test_app();
        handle_projects_key(key(KeyCode::Char('/')), &mut app);
        assert!(!app.list_focused);
        for c in "relay".chars() {
            handle_projects_key(key(KeyCode::Char(c)), &mut app);
        }
        assert_eq!(app.filtered_projects, vec![1]);
        handle_projects_key(key(KeyCode::Enter), &mut app);
        assert!(app.list_focused);
        handle_projects_key(key(KeyCode::Enter), &mut app);
        assert_eq!(app.current_view, View::EditProject);
        let form = app.project_form.as_ref().unwrap();
        assert_eq!(form.form.value("projectId"), "B-200");
    }

    #[test]
    fn u_opens_usage_for_selected_project() {
        let mut app = test_app();
        handle_projects_key(key(KeyCode::Char('j')), &mut app);
        handle_projects_key(key(KeyCode::Char('u')), &mut app);
        assert_eq!(app.current_view, View::Usage);
        assert_eq!(app.usage_project().unwrap().project_id, "B-200");
    }

    #[test]
    fn escape_in_search_clears_then_leaves() {
        let mut app = test_app();
        app.toggle_list_focus();
        handle_projects_key(key(KeyCode::Char('x')), &mut app);
        handle_projects_key(key(KeyCode::Esc), &mut app);
        assert_eq!(app.search_input.value, "");
        assert!(!app.list_focused);
        handle_projects_key(key(KeyCode::Esc), &mut app);
        assert!(app.list_focused);
    }
}
