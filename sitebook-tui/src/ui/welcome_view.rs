use super::*;

pub fn render_welcome_view(frame: &mut Frame, body: Rect) {
    let area = utils::centered_rect(56, 12, body);
    let key = Style::default().fg(Color::Yellow);
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Construction project records",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[o]", key),
            Span::raw(" Open a project file"),
        ]),
        Line::from(vec![
            Span::styled("[n]", key),
            Span::raw(" Start a new file"),
        ]),
        Line::from(vec![Span::styled("[q]", key), Span::raw(" Quit")]),
        Line::from(""),
        Line::from(Span::styled(
            "Changes stay in memory until you save (Ctrl+S).",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" sitebook ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(paragraph, area);
}
