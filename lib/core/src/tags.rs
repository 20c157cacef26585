//! Tag sets for users and items.
//!
//! A [`TagSet`] is an unordered collection of string labels with set
//! semantics: duplicates collapse, and the only comparison the scoring
//! pipeline performs on tag sets is intersection size.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// An unordered set of descriptive string labels.
///
/// Attached to users (declared preferences) and items (properties).
/// Insertion order is irrelevant and duplicate labels collapse.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct TagSet(AHashSet<String>);

impl TagSet {
    /// Create an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tag set from anything yielding string-likes.
    ///
    /// ```rust
    /// use recx_core::TagSet;
    ///
    /// let tags = TagSet::from_tags(["spicy", "fried", "spicy"]);
    /// assert_eq!(tags.len(), 2);
    /// ```
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tags.into_iter().map(Into::into).collect())
    }

    /// Add a single tag. Returns `true` if the tag was not already present.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        self.0.insert(tag.into())
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the set holds no tags.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Membership test.
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    /// Number of tags present in both sets.
    ///
    /// Iterates the smaller set and probes the larger one.
    pub fn intersection_count(&self, other: &TagSet) -> usize {
        let (small, large) = if self.len() <= other.len() {
            (&self.0, &other.0)
        } else {
            (&other.0, &self.0)
        };
        small.iter().filter(|tag| large.contains(*tag)).count()
    }

    /// Iterate over the tags in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_tags(iter)
    }
}
