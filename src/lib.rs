//! # recx
//!
//! A fast, in-memory recommendation engine.
//!
//! recx scores every item in a catalog for a user by blending two signals:
//! how well the item's property tags cover the user's declared preference
//! tags (affinity), and how often the user actually selected the item
//! relative to their own favorite (history). Raw scores are normalized into
//! a probability distribution and ranked deterministically.
//!
//! ## Quick Start
//!
//! ```rust
//! use recx::prelude::*;
//!
//! // Describe users and items
//! let mut catalog = Catalog::new();
//! catalog.add_user("u2", TagSet::from_tags(["healthy", "vegan"]));
//! catalog.add_item("salad", TagSet::from_tags(["healthy", "vegan"]));
//! catalog.add_item("omelet", TagSet::from_tags(["mild", "fried", "rice_based"]));
//!
//! // Aggregate interaction history
//! let ledger = Ledger::from_observations(vec![
//!     Observation::new("u2", "salad"),
//!     Observation::new("u2", "salad"),
//!     Observation::new("u2", "omelet"),
//! ]);
//!
//! // Score and rank
//! let recommender = Recommender::new(Weights::default()).unwrap();
//! let top = recommender.top_k(&catalog, &ledger, "u2", 2).unwrap();
//! assert_eq!(top[0].0, "salad");
//! ```
//!
//! ## Crate Structure
//!
//! recx is composed of two library crates:
//!
//! - [`recx-core`](https://docs.rs/recx-core) - Data model (TagSet, Catalog, Observation, Ledger) and error taxonomy
//! - [`recx-scoring`](https://docs.rs/recx-scoring) - Scoring pipeline (affinity, history, Recommender, Distribution, explain)
//!
//! ## Features
//!
//! - **Two-signal scoring**: declared preferences blended with empirical history
//! - **Valid distributions**: probabilities over the full catalog, summing to 1
//! - **Deterministic ranking**: fixed tie-break, reproducible across runs
//! - **Graceful degradation**: unknown users/items score zero, never error
//! - **Explainability**: per-signal breakdown for every recommendation

// Re-export core types
pub use recx_core::{Catalog, Error, Ledger, Observation, Result, TagSet};

// Re-export the scoring pipeline
pub use recx_scoring::{
    affinity, history, Distribution, ExplainedRecommendation, Recommender, Weights,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        affinity, history, Catalog, Distribution, Error, ExplainedRecommendation, Ledger,
        Observation, Recommender, Result, TagSet, Weights,
    };
}
