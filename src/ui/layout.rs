//! Layout components (sidebar, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Split the screen into header, sidebar and main content; the bottom
/// line is reserved for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // Sidebar
            Constraint::Min(0),     // Main content
        ])
        .split(v_chunks[1]);

    (v_chunks[0], body_chunks[0], body_chunks[1])
}

/// Draw the sidebar from the route-link list
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .state
        .sidebar
        .items()
        .iter()
        .enumerate()
        .map(|(idx, link)| {
            let prefix = if link.selected { "▸ " } else { "  " };
            let style = if link.selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::raw(prefix),
                Span::styled(format!("{} ", idx + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(link.label, style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Views ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(list, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::styled(
            format!(" {msg} "),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw("| "));
    }

    if app.show_hints {
        spans.push(Span::styled(
            get_view_hints(&app.state.current_view),
            Style::default().fg(Color::Gray),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " q:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Hero => " h/l:links  Enter:open  1-5:view".to_string(),
        View::Fashion => " 1-5:view  Esc:back".to_string(),
        View::YoungFavourite => " h/l:cards  1-5:view  Esc:back".to_string(),
        View::CompanyDetails => format!(
            " Tab:next  Space:toggle  ←/→:options  {SUBMIT_SHORTCUT}:submit  Esc:back"
        ),
        View::Navigation => " j/k:items  Enter:select  a/b:card actions  Esc:back".to_string(),
    }
}
