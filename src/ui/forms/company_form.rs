//! Company-details form page

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::FormNavigation;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Height of one rendered field (bordered single-line input)
const FIELD_HEIGHT: u16 = 3;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(0)])
        .split(area);

    draw_group_list(frame, chunks[0], app);
    draw_active_group(frame, chunks[1], app);
}

/// Section list on the left, with per-group validity markers
fn draw_group_list(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.company_form;
    let active_group = form.active_group_label();

    let items: Vec<ListItem> = form
        .schema()
        .groups()
        .iter()
        .map(|group| {
            let is_active = active_group == Some(group.label.as_str());
            let group_valid = group.fields.iter().all(|f| f.is_valid());

            let marker = if group_valid {
                Span::styled("✓ ", Style::default().fg(Color::Green))
            } else {
                Span::styled("✗ ", Style::default().fg(Color::Red))
            };
            let style = if is_active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![marker, Span::styled(&group.label, style)]))
        })
        .collect();

    let valid = form.is_valid();
    let title = if valid {
        " Sections (ready) "
    } else {
        " Sections "
    };

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, area);
}

/// Fields of the group the cursor is in, windowed around the active field
fn draw_active_group(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.company_form;
    let Some(group) = form.schema().group_of_leaf(form.active_field()) else {
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", group.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Index of the active leaf within its group
    let active_in_group = (0..form.active_field())
        .rev()
        .take_while(|i| {
            form.schema()
                .group_of_leaf(*i)
                .is_some_and(|g| g.name == group.name)
        })
        .count();

    let visible = (inner.height / FIELD_HEIGHT).max(1) as usize;
    let first = active_in_group.saturating_sub(visible.saturating_sub(1));

    let mut y = inner.y;
    for (idx, field) in group.fields.iter().enumerate().skip(first).take(visible) {
        let slot = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: FIELD_HEIGHT,
        };
        draw_field(frame, slot, field, idx == active_in_group);
        y += FIELD_HEIGHT;
    }

    // The partnership sub-section only exists while the toggle is on
    if group.name == "partnerships" {
        let note = if form.partnering_with_agency() {
            Span::styled(
                "Partnership details apply to this agreement.",
                Style::default().fg(Color::Gray),
            )
        } else {
            Span::styled(
                "Toggle on to include partnership details.",
                Style::default().fg(Color::DarkGray),
            )
        };
        if y < inner.y + inner.height {
            let slot = Rect {
                x: inner.x + 1,
                y,
                width: inner.width.saturating_sub(1),
                height: 1,
            };
            frame.render_widget(Paragraph::new(Line::from(note)), slot);
        }
    }
}
