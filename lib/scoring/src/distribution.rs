//! Per-user probability distributions over the item catalog.

use ahash::AHashMap;
use serde::Serialize;
use std::cmp::Ordering;

/// A probability mass over the full item catalog for one user.
///
/// Probabilities are in [0, 1] and sum to 1.0 (within floating-point
/// tolerance). Built by [`Recommender::distribution`](crate::Recommender::distribution);
/// the raw combined scores it is derived from are not probabilities
/// themselves.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Distribution {
    probs: AHashMap<String, f64>,
}

impl Distribution {
    /// Normalize raw non-negative scores into a distribution.
    ///
    /// When every raw score is zero the distribution falls back to uniform:
    /// an uninformative user still receives a well-formed distribution
    /// instead of an all-zero one. Callers guarantee `scores` is non-empty.
    pub(crate) fn from_raw_scores(scores: AHashMap<String, f64>) -> Self {
        debug_assert!(!scores.is_empty());

        let total: f64 = scores.values().sum();
        let probs = if total == 0.0 {
            let uniform = 1.0 / scores.len() as f64;
            scores.into_iter().map(|(item, _)| (item, uniform)).collect()
        } else {
            scores
                .into_iter()
                .map(|(item, score)| (item, score / total))
                .collect()
        };

        Self { probs }
    }

    /// Probability assigned to an item; zero for items outside the catalog.
    pub fn probability(&self, item: &str) -> f64 {
        self.probs.get(item).copied().unwrap_or(0.0)
    }

    /// Number of items the distribution covers (the full catalog).
    pub fn len(&self) -> usize {
        self.probs.len()
    }

    /// True when the distribution covers no items.
    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    /// Iterate over (item, probability) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.probs.iter().map(|(item, p)| (item.as_str(), *p))
    }

    /// The `k` highest-probability items, sorted.
    ///
    /// Ordering is deterministic: probability descending, with ties broken
    /// by item id ascending. The same snapshot therefore always produces
    /// the same ranking, and `top(k1)` is a prefix of `top(k2)` for
    /// `k1 < k2`. `k == 0` yields an empty vector; `k` beyond the catalog
    /// size yields the full sorted distribution.
    pub fn top(&self, k: usize) -> Vec<(String, f64)> {
        let mut ranked: Vec<(String, f64)> = self
            .probs
            .iter()
            .map(|(item, p)| (item.clone(), *p))
            .collect();

        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        ranked.truncate(k);

        ranked
    }
}
