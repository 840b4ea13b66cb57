//! Field rendering utilities for forms

use crate::state::{Field, FieldValue};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a form field from the state layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &Field, is_active: bool) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if !field.is_valid() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let line = match &field.value {
        FieldValue::Bool(b) => Line::from(Span::styled(
            if *b { "[x] On" } else { "[ ] Off" }.to_string(),
            value_style,
        )),
        FieldValue::Choice { .. } => {
            let shown = field.display_value();
            let shown = if shown.is_empty() && !is_active {
                "(none)".to_string()
            } else {
                shown
            };
            Line::from(vec![
                Span::styled("◂ ", Style::default().fg(Color::DarkGray)),
                Span::styled(shown, value_style),
                Span::styled(" ▸", Style::default().fg(Color::DarkGray)),
            ])
        }
        FieldValue::Text(_) | FieldValue::Date(_) => {
            let shown = field.display_value();
            let shown = if shown.is_empty() && !is_active {
                "(empty)".to_string()
            } else {
                shown
            };
            let cursor = if is_active { "▌" } else { "" };
            Line::from(vec![
                Span::styled(shown, value_style),
                Span::styled(cursor, Style::default().fg(Color::Cyan)),
            ])
        }
    };

    let marker = if field.required { "*" } else { "" };
    let block = Block::default()
        .title(format!(" {}{} ", field.label, marker))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
