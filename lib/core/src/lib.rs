//! # recx Core
//!
//! Core library for the recx recommendation engine.
//!
//! This crate provides the fundamental data structures:
//!
//! - [`TagSet`] - Unordered set of descriptive string labels
//! - [`Catalog`] - Users and items with their associated tag sets
//! - [`Observation`] - A single historical (user, item) selection event
//! - [`Ledger`] - Aggregated observation counts per (user, item) pair
//!
//! ## Example
//!
//! ```rust
//! use recx_core::{Catalog, Ledger, TagSet};
//!
//! // Build a catalog
//! let mut catalog = Catalog::new();
//! catalog.add_user("u2", TagSet::from_tags(["healthy", "vegan"]));
//! catalog.add_item("salad", TagSet::from_tags(["healthy", "vegan"]));
//!
//! // Record interaction history
//! let mut ledger = Ledger::new();
//! ledger.record("u2", "salad");
//! ledger.record("u2", "salad");
//!
//! assert_eq!(ledger.count("u2", "salad"), 2);
//! assert!(catalog.preferences("u2").is_some());
//! ```
//!
//! Both structures are built once from host input and treated as read-only
//! snapshots during scoring. Hosts that apply updates swap in a new snapshot
//! between scoring requests rather than mutating in place.

pub mod catalog;
pub mod error;
pub mod ledger;
pub mod tags;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use ledger::{Ledger, Observation};
pub use tags::TagSet;
