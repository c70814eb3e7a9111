//! Integration test: circular deck navigation
//!
//! `next` and `previous` wrap around the profile sequence in both
//! directions and refuse to move (rather than wrap a zero-length range)
//! when the deck is empty.

use vitrine::deck::Deck;
use vitrine::profiles::load;
use vitrine::profiles::types::{AppData, Profile};

fn three_profile_deck() -> Deck {
    let data = load();
    assert_eq!(data.profile_count(), 3, "embedded dataset expected");
    Deck::from_app_data(&data)
}

#[test]
fn next_wraps_from_last_to_first() {
    let mut deck = three_profile_deck();
    deck.next();
    deck.next();
    assert_eq!(deck.position(), (2, 3));

    deck.next();
    assert_eq!(deck.position(), (0, 3));
    assert_eq!(deck.current().map(|p| p.id.as_str()), Some("1"));
}

#[test]
fn previous_wraps_from_first_to_last() {
    let mut deck = three_profile_deck();
    assert_eq!(deck.position(), (0, 3));

    deck.previous();
    assert_eq!(deck.position(), (2, 3));
    assert_eq!(deck.current().map(|p| p.id.as_str()), Some("3"));
}

#[test]
fn full_cycle_returns_to_the_start() {
    let mut deck = three_profile_deck();
    let start = deck.current().map(|p| p.id.clone());
    for _ in 0..deck.len() {
        deck.next();
    }
    assert_eq!(deck.current().map(|p| p.id.clone()), start);
}

#[test]
fn empty_deck_refuses_navigation() {
    let mut deck = Deck::new(Vec::<Profile>::new());
    assert!(deck.is_empty());
    assert!(deck.current().is_none());

    // No-ops, no panic, no wrap over a zero-length range.
    deck.next();
    deck.previous();
    assert_eq!(deck.position(), (0, 0));
    assert!(deck.current().is_none());
}

#[test]
fn fallback_app_data_builds_an_empty_deck() {
    let deck = Deck::from_app_data(&AppData::fallback());
    assert!(deck.is_empty());
}
