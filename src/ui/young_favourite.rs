//! Young-favourite page: card carousel, product grid, download links

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
            Constraint::Length(6), // Carousel
            Constraint::Min(0),    // Product grid
            Constraint::Length(3), // Download links
        ])
        .split(area);

    draw_carousel(frame, chunks[0], app);
    draw_product_grid(frame, chunks[1], app);
    draw_download_links(frame, chunks[2], app);
}

fn draw_carousel(frame: &mut Frame, area: Rect, app: &App) {
    let cards = app.state.favourites.items();
    if cards.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = cards
        .iter()
        .map(|_| Constraint::Ratio(1, cards.len() as u32))
        .collect();
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, slot) in cards.iter().zip(slots.iter()) {
        let border = if card.selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let body = Paragraph::new(vec![
            Line::from(Span::styled(
                card.title,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(card.subtitle, Style::default().fg(Color::Cyan))),
            Line::from(Span::styled(card.alt, Style::default().fg(Color::DarkGray))),
        ])
        .block(
            Block::default()
                .title(" Young's Favourite ")
                .borders(Borders::ALL)
                .border_style(border),
        );
        frame.render_widget(body, *slot);
    }
}

fn draw_product_grid(frame: &mut Frame, area: Rect, app: &App) {
    let products = &app.state.products;
    if products.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = products
        .iter()
        .map(|_| Constraint::Ratio(1, products.len() as u32))
        .collect();
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (product, slot) in products.iter().zip(slots.iter()) {
        let card = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                product.title,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(product.price, Style::default().fg(Color::Cyan))),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(card, *slot);
    }
}

fn draw_download_links(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        "Download the app:  ",
        Style::default().fg(Color::Gray),
    )];
    for link in &app.state.downloads {
        spans.push(Span::styled(
            format!("[{}]", link.alt),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::raw("  "));
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
