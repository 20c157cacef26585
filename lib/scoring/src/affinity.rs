//! Declared-preference affinity scoring.

use recx_core::Catalog;

/// Fraction of the user's declared preferences that the item satisfies.
///
/// Returns `|preferences(user) ∩ properties(item)| / |preferences(user)|`,
/// always in [0, 1]. The score is 1.0 exactly when the item's properties
/// cover every one of the user's preference tags (and the user has at
/// least one).
///
/// The normalization is intentionally asymmetric: it divides by the size
/// of the user's preference set, not by the union of both sets. An item
/// carrying extra tags the user never asked for is not penalized for them.
/// Replacing this with a symmetric Jaccard similarity would change ranking
/// outcomes and is pinned against by tests.
///
/// Unknown users, unknown items, and users with an empty preference set all
/// score 0.0; none of these are errors.
pub fn affinity(catalog: &Catalog, user: &str, item: &str) -> f64 {
    let prefs = match catalog.preferences(user) {
        Some(prefs) if !prefs.is_empty() => prefs,
        // Unknown user or empty preference set: no declared signal to match.
        _ => return 0.0,
    };
    let props = match catalog.properties(item) {
        Some(props) => props,
        // Unknown item: reads as an empty property set.
        None => return 0.0,
    };

    prefs.intersection_count(props) as f64 / prefs.len() as f64
}
