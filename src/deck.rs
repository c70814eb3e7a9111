//! The deck: an index over the loaded profiles with circular navigation.

use crate::profiles::types::{AppData, Profile};

/// Navigable sequence of profile cards. The index wraps in both directions;
/// navigation on an empty deck is a no-op rather than a wrap over a
/// zero-length range.
pub struct Deck {
    profiles: Vec<Profile>,
    index: usize,
}

impl Deck {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Deck { profiles, index: 0 }
    }

    /// Builds the deck from loaded app data.
    pub fn from_app_data(data: &AppData) -> Self {
        Deck::new(data.profiles.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Profile currently shown, if the deck has any.
    pub fn current(&self) -> Option<&Profile> {
        self.profiles.get(self.index)
    }

    /// Zero-based index plus total, for the "2 / 3" counter.
    pub fn position(&self) -> (usize, usize) {
        (self.index, self.profiles.len())
    }

    /// Advances to the next profile, wrapping from the last back to the
    /// first. No-op when empty.
    pub fn next(&mut self) {
        if self.profiles.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.profiles.len();
    }

    /// Steps back to the previous profile, wrapping from the first to the
    /// last. No-op when empty.
    pub fn previous(&mut self) {
        if self.profiles.is_empty() {
            return;
        }
        self.index = if self.index == 0 {
            self.profiles.len() - 1
        } else {
            self.index - 1
        };
    }
}
