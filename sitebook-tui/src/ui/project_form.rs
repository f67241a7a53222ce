use super::utils::{centered_rect, controls};
use super::widgets::render_form;
use super::*;

const FORM_CONTROLS: &[(&str, &str)] = &[
    ("Tab/↑↓", "Field"),
    ("←→", "Cursor/Option"),
    ("Ctrl+U", "Clear field"),
    ("Enter", "Save"),
    ("Esc", "Cancel"),
];

pub fn render_add_project(frame: &mut Frame, app: &App, body: Rect) {
    let Some(form) = &app.project_form else {
        return;
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(body);

    render_form(frame, chunks[0], &form.form, "Add project", true);
    frame.render_widget(controls(FORM_CONTROLS), chunks[1]);
}

/// Edit form drawn as a modal over the project list.
pub fn render_edit_modal(frame: &mut Frame, app: &App) {
    let Some(form) = &app.project_form else {
        return;
    };
    let area = centered_rect(90, 34, frame.area());
    frame.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let title = format!("Edit project {}", form.form.value("projectId"));
    render_form(frame, chunks[0], &form.form, &title, true);
    frame.render_widget(controls(FORM_CONTROLS), chunks[1]);
}
