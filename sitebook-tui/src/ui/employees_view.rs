use super::utils::{border_style, controls, scroll_offset};
use super::widgets::render_form;
use super::*;

pub fn render_employees_view(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(body);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[0]);

    let form_area = Rect {
        height: columns[0].height.min(7),
        ..columns[0]
    };
    render_form(
        frame,
        form_area,
        &app.roster.form.form,
        "Add employee",
        !app.roster.list_focused,
    );

    let employees = app.session.employees();
    let height = columns[1].height.saturating_sub(2) as usize;
    let start = scroll_offset(app.roster.selected, height);
    let items: Vec<ListItem> = employees
        .iter()
        .enumerate()
        .skip(start)
        .take(height)
        .map(|(i, employee)| {
            let style = if app.roster.list_focused && i == app.roster.selected {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<12}", employee.id),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(employee.name.clone(), style),
            ]))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(app.roster.list_focused))
            .title(format!(" Employees ({}) ", employees.len()))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(list, columns[1]);

    let bindings: &[(&str, &str)] = if app.roster.list_focused {
        &[
            ("↑↓/j/k", "Navigate"),
            ("d/Del", "Delete"),
            ("F2/Tab", "Back to form"),
            ("Esc", "Projects"),
        ]
    } else {
        &[
            ("Tab", "Field"),
            ("Enter", "Add"),
            ("F2", "List"),
            ("Esc", "Projects"),
        ]
    };
    frame.render_widget(controls(bindings), chunks[1]);
}
