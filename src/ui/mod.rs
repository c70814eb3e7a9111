//! Terminal presentation. Tightly coupled to ratatui; only the binary uses
//! this module tree.

pub mod card_scene;
pub mod details_view;
pub mod nav_bar;

use crate::card::CardState;
use crate::deck::Deck;
use crate::profiles::types::BadgeMap;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Top-level frame layout: the card fills the screen with the navigation
/// bar pinned to the bottom.
pub fn draw(frame: &mut Frame, deck: &Deck, card: &CardState, badges: &BadgeMap) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(frame.size());

    match deck.current() {
        Some(profile) => card_scene::draw(frame, chunks[0], profile, card, badges),
        None => {
            // Load failure degrades to an empty deck, never a crash.
            let placeholder = Paragraph::new("No profiles loaded")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(placeholder, chunks[0]);
        }
    }

    nav_bar::draw(frame, chunks[1], deck);
}
