use super::utils::{border_style, centered_rect, controls, scroll_offset};
use super::widgets::{ledger_header, ledger_row, render_form};
use super::*;
use sitebook::ledger::{ledger_lines, AllowanceCategory};
use sitebook::UsageRecord;

/// Usage modal: ledger on top, entry form and existing records side by side below.
pub fn render_usage_modal(frame: &mut Frame, app: &App) {
    let (Some(panel), Some(project)) = (&app.usage, app.usage_project()) else {
        return;
    };
    let area = centered_rect(120, 36, frame.area());
    frame.render_widget(Clear, area);

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(
            " Usage · {} {} ",
            project.project_id,
            project.display_name()
        ));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Ledger
            Constraint::Min(0),    // Form + records
            Constraint::Length(3), // Controls
        ])
        .split(inner);

    let records = app.usage_records();
    let mut ledger = vec![ledger_header()];
    ledger.extend(
        ledger_lines(project, app.session.usage_records())
            .iter()
            .map(ledger_row),
    );
    let ledger = Paragraph::new(ledger).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Remaining allowance ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(ledger, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);

    render_form(
        frame,
        columns[0],
        &panel.form.form,
        "New entry",
        !panel.records_focused,
    );
    render_records(
        frame,
        columns[1],
        &records,
        panel.selected_record,
        panel.records_focused,
    );

    let bindings: &[(&str, &str)] = if panel.records_focused {
        &[
            ("↑↓/j/k", "Navigate"),
            ("d/Del", "Delete"),
            ("F2/Tab", "Back to form"),
            ("Esc", "Close"),
        ]
    } else {
        &[
            ("Tab/↑↓", "Field"),
            ("Enter", "Record"),
            ("F2", "Records"),
            ("Esc", "Close"),
        ]
    };
    frame.render_widget(controls(bindings), rows[2]);
}

fn render_records(
    frame: &mut Frame,
    area: Rect,
    records: &[&UsageRecord],
    selected: usize,
    focused: bool,
) {
    let height = area.height.saturating_sub(2) as usize;
    let start = scroll_offset(selected, height);
    let items: Vec<ListItem> = records
        .iter()
        .enumerate()
        .skip(start)
        .take(height)
        .map(|(i, record)| {
            let style = if focused && i == selected {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            let who = match (record.employee_id.is_empty(), record.employee_name.is_empty()) {
                (true, true) => "-".to_string(),
                (false, true) => record.employee_id.clone(),
                (true, false) => record.employee_name.clone(),
                (false, false) => format!("{} {}", record.employee_id, record.employee_name),
            };
            let spent: Vec<String> = AllowanceCategory::all()
                .filter_map(|c| {
                    let value = c.spent(record).value();
                    (value != 0.0)
                        .then(|| format!("{} {}", c.short_label(), sitebook::format_amount(value)))
                })
                .collect();
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<11}", record.date), style),
                Span::styled(format!("{who:<14}"), Style::default().fg(Color::Cyan)),
                Span::styled(spent.join(", "), Style::default().fg(Color::Magenta)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(focused))
            .title(format!(" Records ({}) ", records.len()))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(list, area);
}
