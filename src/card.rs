//! Per-card transient state: which achievement is selected, the in-flight
//! grade fetch, and the auto-clearing status message.
//!
//! Everything here is driven cooperatively from the event loop: selection
//! and navigation happen on key events, and [`CardState::tick`] is called
//! each loop iteration to harvest a finished fetch and expire the status
//! message. A monotonically increasing request token decides whether a
//! completed fetch may still be applied, so a superseded fetch can never
//! overwrite newer state no matter when its thread finishes.

use crate::grades::{spawn_fetch, GradeFetchError, GradeFetchResult, GradeFetcher};
use crate::profiles::types::{AchievementType, Profile};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

/// How long a status message stays visible after it is displayed.
pub const STATUS_TTL: Duration = Duration::from_secs(3);

struct PendingFetch {
    token: u64,
    kind: AchievementType,
    handle: JoinHandle<Result<GradeFetchResult, GradeFetchError>>,
}

/// Transient state for the card currently on screen. One instance is reused
/// across profiles; rebinding to a different profile resets it.
pub struct CardState {
    profile_id: Option<String>,
    selected: Option<usize>,
    status: Option<String>,
    clear_at: Option<Instant>,
    /// Token of the most recent selection. Only a fetch carrying this exact
    /// token may set the status message.
    fetch_token: u64,
    pending: Option<PendingFetch>,
}

impl CardState {
    pub fn new() -> Self {
        CardState {
            profile_id: None,
            selected: None,
            status: None,
            clear_at: None,
            fetch_token: 0,
            pending: None,
        }
    }

    /// Index of the selected achievement within the bound profile's
    /// achievement sequence, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Currently visible status message, if any.
    pub fn status_message(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// True while a fetch is outstanding for the current selection.
    pub fn fetch_in_flight(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|p| p.token == self.fetch_token)
    }

    /// Token of the most recent selection. Test seam for exercising the
    /// out-of-order guard without threads.
    pub fn current_token(&self) -> u64 {
        self.fetch_token
    }

    /// Binds the card to `profile`. A change of profile identity clears the
    /// selection, the status message, its timer, and any pending fetch.
    pub fn bind(&mut self, profile: &Profile) {
        if self.profile_id.as_deref() == Some(profile.id.as_str()) {
            return;
        }
        self.profile_id = Some(profile.id.clone());
        self.reset_transient();
    }

    /// Clears selection and message without unbinding the profile.
    pub fn clear_selection(&mut self) {
        self.reset_transient();
    }

    fn reset_transient(&mut self) {
        self.selected = None;
        self.status = None;
        self.clear_at = None;
        // Invalidate any in-flight fetch; its result will fail the token
        // check. Dropping the handle detaches the thread.
        self.fetch_token += 1;
        self.pending = None;
    }

    /// Selects the achievement at `index` in `profile`'s sequence and starts
    /// its grade fetch. Re-selecting replaces the outstanding fetch and the
    /// pending auto-clear rather than stacking them.
    pub fn select(&mut self, index: usize, profile: &Profile, fetcher: Arc<dyn GradeFetcher>) {
        let Some(achievement) = profile.achievements.get(index) else {
            return;
        };

        self.selected = Some(index);
        self.status = None;
        self.clear_at = None;
        self.fetch_token += 1;

        let kind = achievement.name;
        tracing::debug!(%kind, profile = %profile.id, token = self.fetch_token, "selection");
        self.pending = Some(PendingFetch {
            token: self.fetch_token,
            kind,
            handle: spawn_fetch(fetcher, kind, profile.id.clone()),
        });
    }

    /// Drives timers and fetch completion. Called once per event-loop
    /// iteration with the current time.
    pub fn tick(&mut self, now: Instant) {
        if self.pending.as_ref().is_some_and(|p| p.handle.is_finished()) {
            let pending = self.pending.take().unwrap();
            // A panicked fetch thread counts as a failed fetch.
            let outcome = pending.handle.join().unwrap_or_else(|_| {
                Err(GradeFetchError {
                    kind: pending.kind,
                    reason: "fetch thread panicked".to_string(),
                })
            });
            self.apply_fetch_result(pending.token, pending.kind, outcome, now);
        }

        if self.clear_at.is_some_and(|deadline| now >= deadline) {
            self.status = None;
            self.clear_at = None;
        }
    }

    /// Applies a completed fetch. Results carrying a stale token are
    /// discarded; a live result sets the status message (the fetch's own
    /// message, or the fixed fallback on failure) and arms the auto-clear
    /// deadline from the moment the message is displayed.
    pub fn apply_fetch_result(
        &mut self,
        token: u64,
        kind: AchievementType,
        outcome: Result<GradeFetchResult, GradeFetchError>,
        now: Instant,
    ) {
        if token != self.fetch_token {
            tracing::debug!(%kind, token, current = self.fetch_token, "discarding stale fetch");
            return;
        }

        let message = match outcome {
            Ok(result) => {
                tracing::debug!(%kind, grade = result.grade, "grade fetched");
                result.message
            }
            Err(err) => {
                tracing::warn!(%kind, %err, "grade fetch failed");
                format!("Error fetching {} grade", kind)
            }
        };

        self.status = Some(message);
        self.clear_at = Some(now + STATUS_TTL);
    }
}

impl Default for CardState {
    fn default() -> Self {
        Self::new()
    }
}
