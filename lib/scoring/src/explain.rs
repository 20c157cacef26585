//! Explainability for recommendation results.
//!
//! Output structures that break a recommendation down into its component
//! signals, so hosts can show why an item ranked where it did.

use crate::affinity::affinity;
use crate::history::history;
use crate::recommend::Recommender;
use recx_core::{Catalog, Ledger, Result};
use serde::Serialize;

/// A recommendation with its per-signal breakdown.
///
/// `affinity` and `history` are the unweighted signal values in [0, 1];
/// `combined` is their weighted sum (a raw score, not a probability) and
/// `probability` the item's final share of the user's distribution.
#[derive(Debug, Clone, Serialize)]
pub struct ExplainedRecommendation {
    /// Item id.
    pub item: String,
    /// Final probability assigned by the distribution.
    pub probability: f64,
    /// Declared-preference overlap signal.
    pub affinity: f64,
    /// Interaction-history signal.
    pub history: f64,
    /// Weighted raw score the probability was derived from.
    pub combined: f64,
}

impl Recommender {
    /// The top `k` recommendations for a user, each with its signal
    /// breakdown.
    ///
    /// Same ordering and error contract as [`top_k`](Recommender::top_k).
    pub fn explain(
        &self,
        catalog: &Catalog,
        ledger: &Ledger,
        user: &str,
        k: usize,
    ) -> Result<Vec<ExplainedRecommendation>> {
        let ranked = self.top_k(catalog, ledger, user, k)?;

        Ok(ranked
            .into_iter()
            .map(|(item, probability)| {
                let affinity = affinity(catalog, user, &item);
                let history = history(ledger, user, &item);
                ExplainedRecommendation {
                    probability,
                    affinity,
                    history,
                    combined: self.weights().affinity * affinity
                        + self.weights().history * history,
                    item,
                }
            })
            .collect())
    }
}
