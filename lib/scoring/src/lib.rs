//! # recx Scoring
//!
//! The scoring pipeline for the recx recommendation engine.
//!
//! Two independent signals are computed per (user, item) pair, blended into
//! a single raw score, normalized into a per-user probability distribution,
//! and ranked deterministically:
//!
//! ```text
//! Catalog ──> affinity ──┐
//!                        ├──> combined ──> Distribution ──> Top-K
//! Ledger  ──> history ───┘     (weighted      (sums to 1)    (sorted,
//!                               sum)                          tie-broken)
//! ```
//!
//! ## Signals
//!
//! - **Affinity** ([`affinity`]): how much of the user's declared
//!   preference tag set the item's properties cover.
//! - **History** ([`history`]): the user's observation count for the item,
//!   normalized by that user's own maximum count.
//!
//! Both are pure functions over immutable [`Catalog`](recx_core::Catalog)
//! and [`Ledger`](recx_core::Ledger) snapshots and return values in [0, 1].
//!
//! ## Example
//!
//! ```rust
//! use recx_core::{Catalog, Ledger, TagSet};
//! use recx_scoring::{Recommender, Weights};
//!
//! let mut catalog = Catalog::new();
//! catalog.add_user("u2", TagSet::from_tags(["healthy", "vegan"]));
//! catalog.add_item("salad", TagSet::from_tags(["healthy", "vegan"]));
//! catalog.add_item("fried_chicken", TagSet::from_tags(["fried"]));
//!
//! let mut ledger = Ledger::new();
//! ledger.record("u2", "salad");
//!
//! let recommender = Recommender::new(Weights::default()).unwrap();
//! let top = recommender.top_k(&catalog, &ledger, "u2", 1).unwrap();
//! assert_eq!(top[0].0, "salad");
//! ```

pub mod affinity;
pub mod distribution;
pub mod explain;
pub mod history;
pub mod recommend;
pub mod weights;

pub use affinity::affinity;
pub use distribution::Distribution;
pub use explain::ExplainedRecommendation;
pub use history::history;
pub use recommend::Recommender;
pub use weights::Weights;
