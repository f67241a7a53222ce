use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

/// Helper function to create a centered rectangle
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((r.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((r.height.saturating_sub(height)) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((r.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((r.width.saturating_sub(width)) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Bordered "Controls" box listing key bindings as (key, description) pairs.
pub fn controls<'a>(bindings: &[(&'a str, &'a str)]) -> Paragraph<'a> {
    let mut spans = Vec::with_capacity(bindings.len() * 2);
    for (i, (key, description)) in bindings.iter().enumerate() {
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        let sep = if i + 1 == bindings.len() { "" } else { "  " };
        spans.push(Span::raw(format!(": {description}{sep}")));
    }
    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " Controls ",
                    Style::default().fg(Color::DarkGray),
                ))
                .padding(Padding::horizontal(1)),
        )
}

/// First row to draw so that `selected` stays inside a window of `height` rows.
pub fn scroll_offset(selected: usize, height: usize) -> usize {
    if height == 0 || selected < height {
        0
    } else {
        selected + 1 - height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_clamped_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        let popup = centered_rect(60, 20, area);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 10);

        let popup = centered_rect(20, 4, area);
        assert_eq!((popup.x, popup.y, popup.width, popup.height), (10, 3, 20, 4));
    }

    #[test]
    fn scroll_keeps_selection_visible() {
        assert_eq!(scroll_offset(0, 5), 0);
        assert_eq!(scroll_offset(4, 5), 0);
        assert_eq!(scroll_offset(5, 5), 1);
        assert_eq!(scroll_offset(12, 5), 8);
        assert_eq!(scroll_offset(3, 0), 0);
    }
}
