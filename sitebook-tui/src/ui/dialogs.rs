use super::utils::centered_rect;
use super::*;
use crate::app::PromptPurpose;

pub fn render_path_prompt(frame: &mut Frame, app: &App) {
    let Some(prompt) = &app.path_prompt else {
        return;
    };
    let title = match prompt.purpose {
        PromptPurpose::Open => " Open file ",
        PromptPurpose::SaveAs => " Save as ",
    };
    let area = centered_rect(80, 7, frame.area());
    frame.render_widget(Clear, area);

    let (before, after) = prompt.input.split_at_cursor();
    let text = vec![
        Line::from(Span::styled(
            format!("{before}█{after}"),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(": Confirm  "),
            Span::styled("Ctrl+U", Style::default().fg(Color::Yellow)),
            Span::raw(": Clear  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(": Cancel"),
        ]),
    ];
    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(Span::styled(title, Style::default().fg(Color::Yellow)))
            .padding(Padding::new(2, 2, 1, 0)),
    );
    frame.render_widget(paragraph, area);
}

pub fn render_confirm_dialog(frame: &mut Frame, app: &App) {
    let Some(dialog) = &app.confirm else {
        return;
    };
    let area = centered_rect(60, 9, frame.area());
    frame.render_widget(Clear, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            dialog.message.clone(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y] Yes", Style::default().fg(Color::Red)),
            Span::raw("    "),
            Span::styled("[n] No", Style::default().fg(Color::White)),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", dialog.title))
                .padding(Padding::horizontal(1)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

pub fn render_alert(frame: &mut Frame, app: &App) {
    let Some(message) = &app.alert else {
        return;
    };
    let area = centered_rect(70, 11, frame.area());
    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = message
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::White))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(": OK"),
    ]));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(Span::styled(" Error ", Style::default().fg(Color::Red)))
                .padding(Padding::new(2, 2, 1, 0)),
        );
    frame.render_widget(paragraph, area);
}
