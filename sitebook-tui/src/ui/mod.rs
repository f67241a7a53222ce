use crate::app::{App, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

mod dialogs;
mod employees_view;
mod project_form;
mod project_list;
mod reports_view;
mod usage_view;
pub(super) mod utils;
pub(super) mod widgets;
mod welcome_view;

pub fn render(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, root[0], app);

    let body = root[1];
    match app.current_view {
        View::Welcome => welcome_view::render_welcome_view(frame, body),
        View::Projects => project_list::render_project_list(frame, app, body),
        View::AddProject => project_form::render_add_project(frame, app, body),
        View::EditProject => {
            project_list::render_project_list(frame, app, body);
            project_form::render_edit_modal(frame, app);
        }
        View::Usage => {
            project_list::render_project_list(frame, app, body);
            usage_view::render_usage_modal(frame, app);
        }
        View::Employees => employees_view::render_employees_view(frame, app, body),
        View::Reports => reports_view::render_reports_view(frame, app, body),
    }

    render_status_line(frame, root[2], app);

    // Overlays, in stacking order
    if app.path_prompt.is_some() {
        dialogs::render_path_prompt(frame, app);
    }
    if app.confirm.is_some() {
        dialogs::render_confirm_dialog(frame, app);
    }
    if app.alert.is_some() {
        dialogs::render_alert(frame, app);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let tab = |label: &'static str, key: &'static str, view: View| {
        let active = app.current_view == view
            || (view == View::Projects
                && matches!(app.current_view, View::EditProject | View::Usage));
        let style = if !app.has_document {
            Style::default().fg(Color::DarkGray)
        } else if active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        vec![
            Span::styled(key, Style::default().fg(Color::DarkGray)),
            Span::styled(label, style),
            Span::raw("  "),
        ]
    };

    let title_style = if app.has_unsaved_changes() {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let mut spans = vec![
        Span::styled(
            " sitebook ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(app.document_title(), title_style),
        Span::raw("   "),
    ];
    spans.extend(tab("Projects", "^L ", View::Projects));
    spans.extend(tab("Add", "^A ", View::AddProject));
    spans.extend(tab("Employees", "^E ", View::Employees));
    spans.extend(tab("Reports", "^R ", View::Reports));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status_message {
        Some(message) => Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Green),
        )),
        None => Line::from(vec![
            Span::styled(" ^O", Style::default().fg(Color::Yellow)),
            Span::raw(" Open  "),
            Span::styled("^N", Style::default().fg(Color::Yellow)),
            Span::raw(" New  "),
            Span::styled("^S", Style::default().fg(Color::Yellow)),
            Span::raw(" Save  "),
            Span::styled("^W", Style::default().fg(Color::Yellow)),
            Span::raw(" Save as  "),
            Span::styled("^Q", Style::default().fg(Color::Yellow)),
            Span::raw(" Quit"),
        ]),
    };
    frame.render_widget(Paragraph::new(line), area);
}
