//! Interaction-history scoring.

use recx_core::Ledger;

/// The user's observation count for the item, normalized by that user's
/// own maximum count across all items.
///
/// Always in [0, 1]: the user's most-selected item scores exactly 1.0 and
/// items the user never selected score 0.0. A user with no recorded
/// observations at all scores 0.0 for every item.
pub fn history(ledger: &Ledger, user: &str, item: &str) -> f64 {
    let max = ledger.user_max(user);
    // No observations for this user (also guards the division below).
    if max == 0 {
        return 0.0;
    }

    ledger.count(user, item) as f64 / max as f64
}
