//! Search filter: a pure derivation of the board for a text query.
//!
//! Filtering never mutates the canonical columns; it produces a new sequence
//! with each column's tasks narrowed to case-insensitive substring matches.
//! Columns with no matching tasks stay in the result with empty task lists.

use crate::types::Column;
use std::time::{Duration, Instant};

/// Default settle delay for search input
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Filter columns to tasks whose content contains `term` (case-insensitive).
/// An empty or whitespace-only term returns the columns unchanged.
pub fn filter_columns(columns: &[Column], term: &str) -> Vec<Column> {
    let term = term.trim();
    if term.is_empty() {
        return columns.to_vec();
    }
    let needle = term.to_lowercase();

    columns
        .iter()
        .map(|column| {
            let mut filtered = column.clone();
            filtered
                .tasks
                .retain(|task| task.content.to_lowercase().contains(&needle));
            filtered
        })
        .collect()
}

/// A value that only settles after a quiet period.
///
/// Each [`Debounced::update`] restarts the timer; [`Debounced::settled_at`]
/// yields the value once `delay` has elapsed since the last update. Purely a
/// value holder - it owns no timers and is restartable from any state.
#[derive(Debug, Clone)]
pub struct Debounced<T> {
    delay: Duration,
    value: Option<T>,
    updated_at: Option<Instant>,
}

impl<T> Debounced<T> {
    /// Create with the given settle delay
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            value: None,
            updated_at: None,
        }
    }

    /// The configured settle delay
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a new value, restarting the quiet period
    pub fn update(&mut self, value: T) {
        self.update_at(value, Instant::now());
    }

    /// Record a new value with an explicit timestamp
    pub fn update_at(&mut self, value: T, now: Instant) {
        self.value = Some(value);
        self.updated_at = Some(now);
    }

    /// The value, if the quiet period has elapsed
    pub fn settled(&self) -> Option<&T> {
        self.settled_at(Instant::now())
    }

    /// The value, if the quiet period had elapsed as of `now`
    pub fn settled_at(&self, now: Instant) -> Option<&T> {
        match (&self.value, self.updated_at) {
            (Some(value), Some(updated_at)) if now.duration_since(updated_at) >= self.delay => {
                Some(value)
            }
            _ => None,
        }
    }
}

impl<T> Default for Debounced<T> {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEBOUNCE)
    }
}
