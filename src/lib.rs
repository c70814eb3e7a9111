//! Vitrine — a terminal deck of profile cards.
//!
//! Domain logic (profile data, badge geometry, card and deck state) lives
//! here so the integration tests can exercise it; the binary adds the
//! terminal loop on top.

pub mod build_info;
pub mod card;
pub mod deck;
pub mod grades;
pub mod layout;
pub mod profiles;

// Presentation is kept separate from domain state; only the binary draws.
pub mod ui;
