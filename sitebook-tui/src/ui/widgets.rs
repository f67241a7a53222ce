use super::utils::scroll_offset;
use super::*;
use crate::app::{FieldKind, Form, FormField};
use sitebook::format_amount;
use sitebook::ledger::{AllowanceUnit, LedgerLine};

const LABEL_WIDTH: usize = 24;

fn field_value_spans(field: &FormField, focused: bool) -> Vec<Span<'static>> {
    if field.locked {
        return vec![Span::styled(
            format!("{}  (locked)", field.input.value),
            Style::default().fg(Color::DarkGray),
        )];
    }
    match &field.kind {
        FieldKind::Choice(_) => {
            let style = if focused {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let arrows = Style::default().fg(if focused {
                Color::Yellow
            } else {
                Color::DarkGray
            });
            vec![
                Span::styled("◀ ", arrows),
                Span::styled(field.input.value.clone(), style),
                Span::styled(" ▶", arrows),
            ]
        }
        _ if focused => {
            let (before, after) = field.input.split_at_cursor();
            vec![Span::styled(
                format!("{before}█{after}"),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )]
        }
        FieldKind::Date if field.input.value.is_empty() => vec![Span::styled(
            "YYYY-MM-DD",
            Style::default().fg(Color::DarkGray),
        )],
        _ => vec![Span::styled(
            field.input.value.clone(),
            Style::default().fg(Color::White),
        )],
    }
}

fn field_line(field: &FormField, focused: bool, active: bool) -> Line<'static> {
    let marker = if field.required { "*" } else { " " };
    let label_style = if focused && active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    let mut spans = vec![
        Span::styled(
            format!("{:<width$}", format!("{}{}", field.label, marker), width = LABEL_WIDTH),
            label_style,
        ),
        Span::raw(" "),
    ];
    spans.extend(field_value_spans(field, focused && active));
    Line::from(spans)
}

/// Draw a form inside a bordered block, scrolled so the focused field is visible.
/// `active` is false when keyboard focus is elsewhere on the screen.
pub fn render_form(frame: &mut Frame, area: Rect, form: &Form, title: &str, active: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(super::utils::border_style(active))
        .title(format!(" {title} "))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let error_rows = if form.error.is_some() { 2 } else { 0 };
    let visible = (inner.height as usize).saturating_sub(error_rows);
    let start = scroll_offset(form.focused, visible);

    let mut lines: Vec<Line> = form
        .fields
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .map(|(i, field)| field_line(field, i == form.focused, active))
        .collect();

    if let Some(err) = &form.error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

pub fn unit_suffix(unit: AllowanceUnit) -> &'static str {
    match unit {
        AllowanceUnit::Nights => "nights",
        AllowanceUnit::Hours => "h",
    }
}

/// One ledger row: label, budgeted, spent, remaining. Overdrawn rows are red with a
/// warning mark.
pub fn ledger_row(line: &LedgerLine) -> Line<'static> {
    let overdrawn = line.is_overdrawn();
    let (mark, remaining_style) = if overdrawn {
        (
            "⚠ ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default().fg(Color::Green))
    };
    Line::from(vec![
        Span::styled(mark, remaining_style),
        Span::styled(
            format!("{:<30}", line.category.label()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("{:>10}", format_amount(line.budgeted)),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("{:>10}", format_amount(line.spent)),
            Style::default().fg(Color::Magenta),
        ),
        Span::styled(format!("{:>10}", format_amount(line.remaining)), remaining_style),
        Span::styled(
            format!(" {}", unit_suffix(line.category.unit())),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

pub fn ledger_header() -> Line<'static> {
    Line::from(Span::styled(
        format!(
            "  {:<30}{:>10}{:>10}{:>10}",
            "Allowance", "Budget", "Spent", "Remaining"
        ),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::UNDERLINED),
    ))
}
