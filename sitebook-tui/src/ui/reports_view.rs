use super::utils::controls;
use super::widgets::{ledger_header, ledger_row};
use super::*;
use sitebook::ledger::{ledger_lines, overdrawn_projects};

/// Every project's ledger, overdrawn projects summarised first.
pub fn render_reports_view(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(body);

    let projects = app.session.projects();
    let records = app.session.usage_records();
    let shortfalls = overdrawn_projects(projects, records);

    let mut lines = Vec::new();
    if shortfalls.is_empty() {
        lines.push(Line::from(Span::styled(
            "No project is over budget.",
            Style::default().fg(Color::Green),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            format!("⚠ {} project(s) over budget", shortfalls.len()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        for shortfall in &shortfalls {
            let detail: Vec<String> = shortfall
                .categories
                .iter()
                .map(|(c, v)| format!("{} {}", c.short_label(), sitebook::format_amount(*v)))
                .collect();
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<12}", shortfall.project.project_id),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(detail.join(", "), Style::default().fg(Color::Red)),
            ]));
        }
    }

    for project in projects {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                project.project_id.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                project.display_name().to_string(),
                Style::default().fg(Color::White),
            ),
        ]));
        lines.push(ledger_header());
        lines.extend(ledger_lines(project, records).iter().map(ledger_row));
    }

    let scroll = u16::try_from(app.report_scroll).unwrap_or(u16::MAX);
    let paragraph = Paragraph::new(lines).scroll((scroll, 0)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" Reports ({} projects) ", projects.len()))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(paragraph, chunks[0]);

    frame.render_widget(
        controls(&[("↑↓/j/k", "Scroll"), ("g", "Top"), ("Esc", "Projects")]),
        chunks[1],
    );
}
