//! The recommendation engine.
//!
//! Blends the affinity and history signals into raw scores, normalizes
//! them into per-user probability distributions, and ranks the result.

use crate::affinity::affinity;
use crate::distribution::Distribution;
use crate::history::history;
use crate::weights::Weights;
use ahash::AHashMap;
use recx_core::{Catalog, Error, Ledger, Result};

/// Recommendation engine holding a validated signal weighting.
///
/// Construction rejects invalid weights, so every scoring method on an
/// engine in hand observes non-negative, finite weights. All methods are
/// pure functions over the catalog and ledger snapshots they are handed:
/// repeated calls with the same snapshots return identical results.
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: Weights,
}

impl Recommender {
    /// Create an engine with the given weights.
    ///
    /// Fails with [`Error::InvalidConfiguration`] when either weight is
    /// negative or non-finite.
    pub fn new(weights: Weights) -> Result<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// Create an engine with the default weighting (0.6 affinity, 0.4 history).
    pub fn with_defaults() -> Self {
        Self {
            weights: Weights::default(),
        }
    }

    /// The engine's signal weighting.
    pub fn weights(&self) -> Weights {
        self.weights
    }

    /// Raw combined score for one (user, item) pair.
    ///
    /// `weights.affinity * affinity + weights.history * history`. This is a
    /// non-negative score, NOT a probability: it is only comparable across
    /// items after [`distribution`](Self::distribution) rescales it.
    pub fn combined(&self, catalog: &Catalog, ledger: &Ledger, user: &str, item: &str) -> f64 {
        self.weights.affinity * affinity(catalog, user, item)
            + self.weights.history * history(ledger, user, item)
    }

    /// Probability distribution over the full item catalog for one user.
    ///
    /// Every catalog item is scored, including items the user never
    /// interacted with. When all raw scores are zero (no preference
    /// overlap anywhere and no history) the result is uniform, so an
    /// uninformative user still gets a valid distribution.
    ///
    /// Fails with [`Error::EmptyCatalog`] when the catalog holds no items;
    /// no distribution can be formed over an empty set.
    pub fn distribution(
        &self,
        catalog: &Catalog,
        ledger: &Ledger,
        user: &str,
    ) -> Result<Distribution> {
        if catalog.item_count() == 0 {
            return Err(Error::EmptyCatalog);
        }

        let scores: AHashMap<String, f64> = catalog
            .items()
            .map(|item| (item.to_string(), self.combined(catalog, ledger, user, item)))
            .collect();

        Ok(Distribution::from_raw_scores(scores))
    }

    /// The `k` highest-probability items for a user, sorted.
    ///
    /// Ordering is probability descending with ties broken by item id
    /// ascending; see [`Distribution::top`]. Returns
    /// `min(k, catalog.item_count())` entries.
    pub fn top_k(
        &self,
        catalog: &Catalog,
        ledger: &Ledger,
        user: &str,
        k: usize,
    ) -> Result<Vec<(String, f64)>> {
        Ok(self.distribution(catalog, ledger, user)?.top(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recx_core::{Observation, TagSet};

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_user("u1", TagSet::from_tags(["spicy", "fried", "rice_based"]));
        catalog.add_user("u2", TagSet::from_tags(["healthy", "vegan"]));
        catalog.add_user("u3", TagSet::from_tags(["mild", "fried", "rice_based"]));
        catalog.add_item("omelet", TagSet::from_tags(["mild", "fried", "rice_based"]));
        catalog.add_item("pad_kra_pao", TagSet::from_tags(["spicy", "fried", "rice_based"]));
        catalog.add_item("salad", TagSet::from_tags(["healthy", "vegan"]));
        catalog.add_item("fried_chicken", TagSet::from_tags(["fried"]));
        catalog
    }

    fn sample_ledger() -> Ledger {
        Ledger::from_observations(vec![
            Observation::new("u1", "pad_kra_pao"),
            Observation::new("u1", "pad_kra_pao"),
            Observation::new("u1", "omelet"),
            Observation::new("u2", "salad"),
            Observation::new("u2", "salad"),
            Observation::new("u2", "omelet"),
            Observation::new("u3", "omelet"),
            Observation::new("u3", "fried_chicken"),
            Observation::new("u3", "fried_chicken"),
        ])
    }

    #[test]
    fn test_new_rejects_negative_weights() {
        assert!(matches!(
            Recommender::new(Weights::new(-0.5, 0.4)),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_combined_is_weighted_sum() {
        let catalog = sample_catalog();
        let ledger = sample_ledger();
        let recommender = Recommender::with_defaults();

        // u2/salad: full preference overlap and the user's max count.
        let score = recommender.combined(&catalog, &ledger, "u2", "salad");
        assert!((score - 1.0).abs() < 1e-12);

        // u2/omelet: no overlap, count 1 of max 2.
        let score = recommender.combined(&catalog, &ledger, "u2", "omelet");
        assert!((score - 0.4 * 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_distribution_sums_to_one() {
        let catalog = sample_catalog();
        let ledger = sample_ledger();
        let recommender = Recommender::with_defaults();

        for user in ["u1", "u2", "u3", "stranger"] {
            let dist = recommender.distribution(&catalog, &ledger, user).unwrap();
            assert_eq!(dist.len(), 4);
            let total: f64 = dist.iter().map(|(_, p)| p).sum();
            assert!((total - 1.0).abs() < 1e-9, "{user}: sum {total}");
        }
    }

    #[test]
    fn test_distribution_covers_items_without_history() {
        let catalog = sample_catalog();
        let ledger = sample_ledger();
        let recommender = Recommender::with_defaults();

        // u1 never ordered salad or fried_chicken; both still get mass
        // assigned (possibly zero) in the distribution.
        let dist = recommender.distribution(&catalog, &ledger, "u1").unwrap();
        assert_eq!(dist.len(), catalog.item_count());
        assert!(dist.probability("fried_chicken") > 0.0);
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        let catalog = Catalog::new();
        let ledger = Ledger::new();
        let recommender = Recommender::with_defaults();

        assert_eq!(
            recommender.distribution(&catalog, &ledger, "u1"),
            Err(Error::EmptyCatalog)
        );
        assert!(recommender.top_k(&catalog, &ledger, "u1", 3).is_err());
    }

    #[test]
    fn test_uninformative_user_gets_uniform_distribution() {
        let mut catalog = sample_catalog();
        catalog.add_user("u4", TagSet::new());
        let ledger = sample_ledger();
        let recommender = Recommender::with_defaults();

        let dist = recommender.distribution(&catalog, &ledger, "u4").unwrap();
        for (item, p) in dist.iter() {
            assert_eq!(p, 0.25, "expected uniform mass for {item}");
        }
    }

    #[test]
    fn test_unknown_user_gets_uniform_distribution() {
        let catalog = sample_catalog();
        let ledger = sample_ledger();
        let recommender = Recommender::with_defaults();

        let dist = recommender
            .distribution(&catalog, &ledger, "stranger")
            .unwrap();
        for (_, p) in dist.iter() {
            assert_eq!(p, 0.25);
        }
    }

    #[test]
    fn test_salad_ranks_first_for_u2() {
        let catalog = sample_catalog();
        let ledger = sample_ledger();
        let recommender = Recommender::with_defaults();

        let top = recommender.top_k(&catalog, &ledger, "u2", 3).unwrap();
        assert_eq!(top[0].0, "salad");
    }

    #[test]
    fn test_top_k_length() {
        let catalog = sample_catalog();
        let ledger = sample_ledger();
        let recommender = Recommender::with_defaults();

        assert_eq!(recommender.top_k(&catalog, &ledger, "u1", 0).unwrap().len(), 0);
        assert_eq!(recommender.top_k(&catalog, &ledger, "u1", 2).unwrap().len(), 2);
        assert_eq!(recommender.top_k(&catalog, &ledger, "u1", 99).unwrap().len(), 4);
    }

    #[test]
    fn test_idempotent_over_same_snapshot() {
        let catalog = sample_catalog();
        let ledger = sample_ledger();
        let recommender = Recommender::with_defaults();

        let first = recommender.top_k(&catalog, &ledger, "u3", 4).unwrap();
        let second = recommender.top_k(&catalog, &ledger, "u3", 4).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_weights_yield_uniform() {
        let catalog = sample_catalog();
        let ledger = sample_ledger();
        let recommender = Recommender::new(Weights::new(0.0, 0.0)).unwrap();

        let dist = recommender.distribution(&catalog, &ledger, "u2").unwrap();
        for (_, p) in dist.iter() {
            assert_eq!(p, 0.25);
        }
    }

    #[test]
    fn test_weight_scale_does_not_change_distribution() {
        // Only the ratio between the weights matters once normalized.
        let catalog = sample_catalog();
        let ledger = sample_ledger();
        let small = Recommender::new(Weights::new(0.6, 0.4)).unwrap();
        let large = Recommender::new(Weights::new(6.0, 4.0)).unwrap();

        let a = small.distribution(&catalog, &ledger, "u1").unwrap();
        let b = large.distribution(&catalog, &ledger, "u1").unwrap();
        for (item, p) in a.iter() {
            assert!((p - b.probability(item)).abs() < 1e-9);
        }
    }
}
