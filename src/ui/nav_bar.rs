//! Bottom navigation bar: previous/next affordances, position counter,
//! and key hints.

use crate::deck::Deck;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, deck: &Deck) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (index, total) = deck.position();
    let counter = if total == 0 {
        "0 / 0".to_string()
    } else {
        format!("{} / {}", index + 1, total)
    };

    let nav_style = if deck.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };

    let bar = Line::from(vec![
        Span::styled("← Previous", nav_style),
        Span::raw("     "),
        Span::styled(counter, Style::default().fg(Color::Cyan)),
        Span::raw("     "),
        Span::styled("Next →", nav_style),
    ]);
    if inner.height > 0 {
        frame.render_widget(
            Paragraph::new(bar).alignment(Alignment::Center),
            Rect { height: 1, ..inner },
        );
    }

    let hints = Paragraph::new("←/→ navigate · 1-9 select badge · Esc clear · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    if inner.height > 1 {
        frame.render_widget(
            hints,
            Rect {
                y: inner.y + 2.min(inner.height - 1),
                height: 1,
                ..inner
            },
        );
    }
}
