//! Deadline-token debouncing for live query edits.
//!
//! Rapid keystrokes must collapse into a single filter run. The engine owns
//! no timer thread; instead each edit records the pending query with a
//! deadline, the host arms a timer for that deadline, and the resulting tick
//! is checked against the recorded deadline. A newer edit replaces the
//! pending query and pushes the deadline out, so ticks armed for the older
//! deadline arrive stale and do nothing. Last write wins.

use std::time::{Duration, Instant};

/// Quiescence window between the last edit and the filter run.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(150);

#[derive(Debug, Clone)]
struct Pending {
    query: String,
    deadline: Instant,
}

/// Tracks the pending query edit and its deadline.
///
/// All methods take explicit time points, so tests drive time with plain
/// `Instant` arithmetic instead of sleeping.
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    pending: Option<Pending>,
}

impl Debouncer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an edited query, replacing any pending one.
    ///
    /// Returns the new deadline the host should arm a timer for.
    pub fn submit(&mut self, query: String, at: Instant) -> Instant {
        let deadline = at + DEBOUNCE_WINDOW;
        self.pending = Some(Pending { query, deadline });
        deadline
    }

    /// Releases the pending query if the deadline has passed.
    ///
    /// A tick earlier than the current deadline is stale (a newer edit moved
    /// the deadline) and returns `None`, leaving the pending query in place.
    pub fn fire(&mut self, at: Instant) -> Option<String> {
        match &self.pending {
            Some(pending) if at >= pending.deadline => self.pending.take().map(|p| p.query),
            _ => None,
        }
    }

    /// Takes the pending query immediately, regardless of its deadline.
    ///
    /// Used by the immediate lane: mutations and resets apply the freshest
    /// query without waiting out the window.
    pub fn take(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.query)
    }

    /// Drops the pending query without applying it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether an edit is waiting for its deadline.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
