use super::utils::{border_style, controls, scroll_offset};
use super::*;

pub fn render_project_list(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Min(0),    // Project list + details
            Constraint::Length(3), // Controls
        ])
        .split(body);

    render_search_box(frame, app, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);
    render_list(frame, app, columns[0]);
    render_details(frame, app, columns[1]);

    let bindings: &[(&str, &str)] = if app.list_focused {
        &[
            ("↑↓/j/k", "Navigate"),
            ("Enter/e", "Edit"),
            ("u", "Usage"),
            ("a", "Add"),
            ("/", "Search"),
        ]
    } else {
        &[
            ("Type", "Filter"),
            ("Enter/Tab", "Focus list"),
            ("Ctrl+U", "Clear"),
            ("Esc", "Clear/Back"),
        ]
    };
    frame.render_widget(controls(bindings), chunks[2]);
}

fn render_search_box(frame: &mut Frame, app: &App, area: Rect) {
    let search_text = if app.search_input.value.is_empty() {
        if app.list_focused {
            "Press / to search...".to_string()
        } else {
            "█".to_string()
        }
    } else if app.list_focused {
        app.search_input.value.clone()
    } else {
        let (before, after) = app.search_input.split_at_cursor();
        format!("{}█{}", before, after)
    };
    let search_box = Paragraph::new(search_text)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(!app.list_focused))
                .title(" Search ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(search_box, area);
}

fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let projects = app.session.projects();
    let height = area.height.saturating_sub(2) as usize;
    let start = scroll_offset(app.project_index, height);

    let items: Vec<ListItem> = app
        .filtered_projects
        .iter()
        .enumerate()
        .skip(start)
        .take(height)
        .filter_map(|(i, &idx)| {
            let project = projects.get(idx)?;
            let selected = i == app.project_index;
            let overdrawn = app.session.remaining_for(project).is_overdrawn();
            let style = if selected {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            let mut spans = vec![
                Span::styled(
                    format!("{:<12}", project.project_id),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(project.display_name().to_string(), style),
            ];
            if !project.status.is_empty() {
                spans.push(Span::styled(
                    format!("  [{}]", project.status),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            if overdrawn {
                spans.push(Span::styled("  ⚠", Style::default().fg(Color::Red)));
            }
            Some(ListItem::new(Line::from(spans)))
        })
        .collect();

    // Show count: filtered / total
    let title = if app.search_input.value.is_empty() {
        format!(" Projects ({}) ", projects.len())
    } else {
        format!(
            " Projects ({}/{}) ",
            app.filtered_projects.len(),
            projects.len()
        )
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(app.list_focused))
            .title(title)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(list, area);
}

fn render_details(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Details ")
        .padding(Padding::horizontal(1));

    let Some(project) = app.selected_project() else {
        let empty = if app.session.projects().is_empty() {
            "No projects yet. Press a to add one."
        } else {
            "No match."
        };
        let paragraph = Paragraph::new(Span::styled(empty, Style::default().fg(Color::DarkGray)))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    };

    let field = |label: &'static str, value: &str| {
        Line::from(vec![
            Span::styled(format!("{label:<13}"), Style::default().fg(Color::DarkGray)),
            Span::styled(value.to_string(), Style::default().fg(Color::White)),
        ])
    };
    let mut lines = vec![
        Line::from(Span::styled(
            project.display_name().to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        field("Project ID", &project.project_id),
        field("Contract", &project.contract_id),
        field("Status", &project.status),
        field("Contractor", &project.contractor),
        field("In charge", &project.in_charge),
        field("Location", &project.location),
        field(
            "Period",
            &format!("{} – {}", project.start_date, project.end_date),
        ),
        Line::from(""),
        Line::from(Span::styled(
            "Remaining",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::UNDERLINED),
        )),
    ];
    for (category, remaining) in app.session.remaining_for(project).iter() {
        let style = if remaining < 0.0 {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<13}", category.short_label()),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(sitebook::format_amount(remaining), style),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
