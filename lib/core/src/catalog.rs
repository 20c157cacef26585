//! The preference catalog.
//!
//! Maps users to their declared preference tags and items to their property
//! tags. The catalog is constructed once from host input and read-only
//! during scoring; hosts apply updates by swapping in a new catalog between
//! scoring requests.

use crate::tags::TagSet;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Static mapping of users and items to their descriptive tag sets.
///
/// Lookups of unknown users or items return `None` rather than failing:
/// the scoring layer treats absent entities as having an empty tag set, so
/// an id never seen before degrades to a zero score instead of an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    users: AHashMap<String, TagSet>,
    items: AHashMap<String, TagSet>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user with their declared preference tags.
    ///
    /// Re-registering an id replaces the previous tag set.
    pub fn add_user(&mut self, id: impl Into<String>, preferences: TagSet) {
        self.users.insert(id.into(), preferences);
    }

    /// Register an item with its property tags.
    ///
    /// Re-registering an id replaces the previous tag set.
    pub fn add_item(&mut self, id: impl Into<String>, properties: TagSet) {
        self.items.insert(id.into(), properties);
    }

    /// Declared preference tags for a user, `None` if the user is unknown.
    pub fn preferences(&self, user: &str) -> Option<&TagSet> {
        self.users.get(user)
    }

    /// Property tags for an item, `None` if the item is unknown.
    pub fn properties(&self, item: &str) -> Option<&TagSet> {
        self.items.get(item)
    }

    /// Iterate over all user ids, in arbitrary order.
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }

    /// Iterate over all item ids, in arbitrary order.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// Number of registered users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of registered items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
