//! Hero landing page: nav links and brand logo strip

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Nav links
            Constraint::Min(0),    // Banner
            Constraint::Length(3), // Brand logos
        ])
        .split(area);

    draw_nav_links(frame, chunks[0], app);
    draw_banner(frame, chunks[1]);
    draw_brand_logos(frame, chunks[2], app);
}

fn draw_nav_links(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];
    for link in app.state.hero_nav.items() {
        let style = if link.selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(link.label, style));
        spans.push(Span::raw("   "));
    }

    let links = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(links, area);
}

fn draw_banner(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "ULTIMATE",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "SALE",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("NEW COLLECTION", Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(Span::styled(
            "[ SHOP NOW ]",
            Style::default().fg(Color::Black).bg(Color::Cyan),
        )),
    ];

    let banner = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(banner, area);
}

fn draw_brand_logos(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];
    for logo in &app.state.brand_logos {
        spans.push(Span::styled(logo.alt, Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw("    "));
    }

    let strip = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(strip, area);
}
