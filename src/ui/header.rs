//! Parameterized page header.
//!
//! One component renders the shared identity/breadcrumb/title banner for
//! every view (the original carried several near-duplicate headers).

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let header = &app.state.header;

    let mut crumb_spans = vec![Span::styled(
        header.app_name,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    crumb_spans.push(Span::raw("  "));
    for (idx, crumb) in header.breadcrumbs.iter().enumerate() {
        if idx > 0 {
            crumb_spans.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
        }
        crumb_spans.push(Span::styled(*crumb, Style::default().fg(Color::Gray)));
    }

    let title_line = Line::from(vec![
        Span::styled(header.page_title, Style::default().fg(Color::Gray)),
        Span::raw(" "),
        Span::styled(
            header.client_name,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  —  "),
        Span::styled(
            app.state.current_view.title(),
            Style::default().fg(Color::Cyan),
        ),
    ]);

    let user_line = Line::from(vec![Span::styled(
        format!("{} ●", header.user_name),
        Style::default().fg(Color::Gray),
    )])
    .right_aligned();

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(Paragraph::new(Line::from(crumb_spans)), Rect { height: 1, ..inner });
    if inner.height > 1 {
        frame.render_widget(
            Paragraph::new(title_line),
            Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            },
        );
    }
    if inner.height > 2 {
        frame.render_widget(
            Paragraph::new(user_line),
            Rect {
                y: inner.y + 2,
                height: 1,
                ..inner
            },
        );
    }
}
