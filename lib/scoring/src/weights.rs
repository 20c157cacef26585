//! Signal weights for the combined score.

use recx_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Weighting of the two scoring signals.
///
/// The weights need not sum to 1: the distribution step rescales raw scores
/// by their total, so only the ratio between the two weights affects the
/// final probabilities. They must however be non-negative and finite.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Weights {
    /// Weight on the declared-preference affinity signal.
    #[serde(default = "default_affinity")]
    pub affinity: f64,

    /// Weight on the interaction-history signal.
    #[serde(default = "default_history")]
    pub history: f64,
}

fn default_affinity() -> f64 {
    0.6
}

fn default_history() -> f64 {
    0.4
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            affinity: default_affinity(),
            history: default_history(),
        }
    }
}

impl Weights {
    /// Create a weight pair.
    pub fn new(affinity: f64, history: f64) -> Self {
        Self { affinity, history }
    }

    /// Validate the weights.
    ///
    /// Rejects negative or non-finite values. A zero weight is allowed and
    /// simply mutes that signal.
    pub fn validate(&self) -> Result<()> {
        if !self.affinity.is_finite() || self.affinity < 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "affinity weight must be non-negative and finite, got {}",
                self.affinity
            )));
        }
        if !self.history.is_finite() || self.history < 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "history weight must be non-negative and finite, got {}",
                self.history
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let weights = Weights::default();
        assert_eq!(weights.affinity, 0.6);
        assert_eq!(weights.history, 0.4);
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn test_negative_weight_rejected() {
        let weights = Weights::new(-0.1, 0.4);
        assert!(matches!(
            weights.validate(),
            Err(Error::InvalidConfiguration(_))
        ));

        let weights = Weights::new(0.6, -1.0);
        assert!(matches!(
            weights.validate(),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        assert!(Weights::new(f64::NAN, 0.4).validate().is_err());
        assert!(Weights::new(0.6, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_zero_weights_allowed() {
        assert!(Weights::new(0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_weights_need_not_sum_to_one() {
        assert!(Weights::new(3.0, 2.0).validate().is_ok());
    }

    #[test]
    fn test_serde_defaults_fill_missing_fields() {
        let weights: Weights = serde_json::from_str("{}").unwrap();
        assert_eq!(weights, Weights::default());

        let weights: Weights = serde_json::from_str(r#"{"affinity": 0.9}"#).unwrap();
        assert_eq!(weights.affinity, 0.9);
        assert_eq!(weights.history, 0.4);
    }
}
