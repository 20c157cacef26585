//! The interaction ledger.
//!
//! Aggregates raw (user, item) observations into per-user counts. The
//! ledger is the empirical signal of the scoring pipeline: how often each
//! user actually selected each item.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A single historical selection event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Observation {
    pub user: String,
    pub item: String,
}

impl Observation {
    pub fn new(user: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            item: item.into(),
        }
    }
}

/// Aggregated observation counts, keyed by user and then item.
///
/// Absent entries read as zero; there is no way to record a negative count.
/// Like the catalog, a ledger is built once and treated as a read-only
/// snapshot while scoring requests are in flight.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    counts: AHashMap<String, AHashMap<String, u64>>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregate a stream of observations into a ledger.
    pub fn from_observations<I>(observations: I) -> Self
    where
        I: IntoIterator<Item = Observation>,
    {
        let mut ledger = Self::new();
        for obs in observations {
            ledger.record(obs.user, obs.item);
        }
        ledger
    }

    /// Record one selection of `item` by `user`.
    pub fn record(&mut self, user: impl Into<String>, item: impl Into<String>) {
        *self
            .counts
            .entry(user.into())
            .or_default()
            .entry(item.into())
            .or_insert(0) += 1;
    }

    /// Observation count for a (user, item) pair; zero when unrecorded.
    pub fn count(&self, user: &str, item: &str) -> u64 {
        self.counts
            .get(user)
            .and_then(|items| items.get(item))
            .copied()
            .unwrap_or(0)
    }

    /// The user's highest observation count across all items.
    ///
    /// Zero when the user has no recorded observations.
    pub fn user_max(&self, user: &str) -> u64 {
        self.counts
            .get(user)
            .map(|items| items.values().copied().max().unwrap_or(0))
            .unwrap_or(0)
    }

    /// True when the user has at least one recorded observation.
    pub fn has_history(&self, user: &str) -> bool {
        self.counts
            .get(user)
            .is_some_and(|items| !items.is_empty())
    }

    /// Total number of recorded observations across all users.
    pub fn total_observations(&self) -> u64 {
        self.counts
            .values()
            .flat_map(|items| items.values())
            .sum()
    }
}
