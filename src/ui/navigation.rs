//! Navigation demo page: selectable item list and a demo card

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(0)])
        .split(area);

    draw_item_list(frame, chunks[0], app);
    draw_demo_card(frame, chunks[1], app);
}

fn draw_item_list(frame: &mut Frame, area: Rect, app: &App) {
    let header = &app.state.demo_list_header;
    let mut items: Vec<ListItem> = vec![
        ListItem::new(Line::from(vec![
            Span::styled(
                format!(" {} {}", header.icon, header.label),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ])),
        ListItem::new(Line::from(Span::styled(
            format!("   {}", header.subtitle),
            Style::default().fg(Color::DarkGray),
        ))),
        ListItem::new(Line::from("")),
    ];

    for item in app.state.nav_demo.items() {
        let (prefix, style) = if item.selected {
            (
                "▸ ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
                    .bg(Color::DarkGray),
            )
        } else {
            ("  ", Style::default())
        };
        items.push(ListItem::new(Line::from(vec![
            Span::raw(prefix),
            Span::styled(format!("{} {}", item.icon, item.label), style),
        ])));
    }

    let list = List::new(items).block(
        Block::default()
            .title(" Navigation ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(list, area);
}

fn draw_demo_card(frame: &mut Frame, area: Rect, app: &App) {
    let card = &app.state.demo_card;

    let mut action_spans = vec![Span::raw(" ")];
    for (idx, action) in card.actions.iter().enumerate() {
        let hotkey = if idx == 0 { "a" } else { "b" };
        action_spans.push(Span::styled(
            format!("[{}:{}]", hotkey, action.label),
            Style::default().fg(Color::Cyan),
        ));
        action_spans.push(Span::raw("  "));
    }

    let body = Paragraph::new(vec![
        Line::from(Span::styled(
            card.title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(card.subtitle, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(Span::styled(card.content, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(action_spans),
    ])
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .title(" Card ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(body, area);
}
