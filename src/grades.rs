//! Grade-fetch collaborator.
//!
//! The card never talks to a grade source directly; it goes through the
//! [`GradeFetcher`] trait so tests can substitute failing or instant
//! implementations. Fetches run on a spawned thread whose handle the card
//! polls from the event loop, keeping the UI thread free.

use crate::profiles::types::{AchievementType, GradeFetchingMethod};
use std::collections::HashMap;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use thiserror::Error;

/// Result of one grade fetch: the numeric grade plus a human-readable
/// status line for the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeFetchResult {
    pub grade: u8,
    pub message: String,
}

/// A failed fetch. Never crosses the card boundary; the card substitutes
/// its fixed-format fallback message instead.
#[derive(Debug, Clone, Error)]
#[error("grade fetch for {kind} failed: {reason}")]
pub struct GradeFetchError {
    pub kind: AchievementType,
    pub reason: String,
}

/// One logical grade source per achievement type, keyed by name.
pub trait GradeFetcher: Send + Sync {
    fn fetch(&self, kind: AchievementType, profile_id: &str)
        -> Result<GradeFetchResult, GradeFetchError>;
}

/// Canned demo grades. Deterministic per achievement type, with an optional
/// simulated latency so the asynchronous path is visible in the UI.
pub struct StubGradeFetcher {
    latency: Duration,
    /// Declared method name per type, from the document's
    /// `grade_fetching_methods` descriptors. Trace-only.
    methods: HashMap<AchievementType, String>,
}

impl StubGradeFetcher {
    pub fn new() -> Self {
        StubGradeFetcher {
            latency: Duration::from_millis(400),
            methods: HashMap::new(),
        }
    }

    /// No simulated latency; used by tests.
    pub fn immediate() -> Self {
        StubGradeFetcher {
            latency: Duration::ZERO,
            methods: HashMap::new(),
        }
    }

    /// Records the document's declared method descriptors for tracing.
    pub fn with_methods(mut self, methods: &[GradeFetchingMethod]) -> Self {
        for m in methods {
            self.methods.insert(m.name, m.method.clone());
        }
        self
    }

    fn canned(kind: AchievementType) -> GradeFetchResult {
        let (grade, message) = match kind {
            AchievementType::Economy => (7, "Fetching data from Kualung University"),
            AchievementType::Sports => (8, "Fetching evaluation criteria from Tutulum College"),
            AchievementType::Gardening => {
                (6, "Fetching horticulture data from the Green Thumb Institute")
            }
            AchievementType::Marketing => {
                (9, "Fetching campaign metrics from the Digital Marketing Academy")
            }
            AchievementType::Arts => {
                (7, "Fetching portfolio review from the Creative Arts University")
            }
        };
        GradeFetchResult {
            grade,
            message: message.to_string(),
        }
    }
}

impl Default for StubGradeFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl GradeFetcher for StubGradeFetcher {
    fn fetch(
        &self,
        kind: AchievementType,
        profile_id: &str,
    ) -> Result<GradeFetchResult, GradeFetchError> {
        let method = self
            .methods
            .get(&kind)
            .map(String::as_str)
            .unwrap_or("builtin");
        tracing::debug!(%kind, profile_id, method, "fetching grade");

        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
        Ok(Self::canned(kind))
    }
}

/// Runs one fetch on a background thread. The caller polls the handle with
/// [`JoinHandle::is_finished`] and joins once it completes; dropping the
/// handle instead detaches the thread and discards its result.
pub fn spawn_fetch(
    fetcher: Arc<dyn GradeFetcher>,
    kind: AchievementType,
    profile_id: String,
) -> JoinHandle<Result<GradeFetchResult, GradeFetchError>> {
    thread::spawn(move || fetcher.fetch(kind, &profile_id))
}
