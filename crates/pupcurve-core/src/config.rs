//! Predictor configuration.
//!
//! All knobs are deployment-level: a [`PredictorConfig`] is chosen when the
//! predictor is constructed and applies to every request it serves. Nothing
//! here changes per request.

use serde::{Deserialize, Serialize};

/// How far the covariate grid extends.
///
/// Picked once per deployment, never per request. The two observed
/// behaviors for the upper bound:
/// - `Fixed`: constant display range; ages beyond it are a scaling error.
/// - `Adaptive`: round the current age up to the next multiple of 100, so
///   the current age is always on-grid at the cost of variable width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum GridPolicy {
    Fixed { upper_weeks: u32 },
    Adaptive,
}

impl Default for GridPolicy {
    fn default() -> Self {
        GridPolicy::Fixed { upper_weeks: 100 }
    }
}

impl GridPolicy {
    /// Upper grid bound for a given current age.
    pub fn upper_weeks(&self, current_age_weeks: u32) -> u32 {
        match *self {
            GridPolicy::Fixed { upper_weeks } => upper_weeks,
            GridPolicy::Adaptive => current_age_weeks.div_ceil(100).max(1) * 100,
        }
    }
}

/// Bounds for the three anomaly checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnomalyThresholds {
    /// Scaling factor below this fires `WeightDiscrepancy`.
    #[serde(default = "default_discrepancy_low")]
    pub discrepancy_low: f32,
    /// Scaling factor above this fires `WeightDiscrepancy`.
    #[serde(default = "default_discrepancy_high")]
    pub discrepancy_high: f32,
    /// Local growth rate below this (lbs/week) fires `UnrealisticRate`.
    #[serde(default = "default_rate_min")]
    pub rate_min: f32,
    /// Local growth rate above this (lbs/week) fires `UnrealisticRate`.
    #[serde(default = "default_rate_max")]
    pub rate_max: f32,
}

fn default_discrepancy_low() -> f32 {
    0.5
}

fn default_discrepancy_high() -> f32 {
    1.5
}

fn default_rate_min() -> f32 {
    -1.0
}

fn default_rate_max() -> f32 {
    10.0
}

impl Default for AnomalyThresholds {
    fn default() -> Self {
        Self {
            discrepancy_low: default_discrepancy_low(),
            discrepancy_high: default_discrepancy_high(),
            rate_min: default_rate_min(),
            rate_max: default_rate_max(),
        }
    }
}

impl AnomalyThresholds {
    /// Check the bounds are ordered; misordered thresholds would make every
    /// request fire (or never fire) a warning.
    pub fn validate(&self) -> Result<(), String> {
        if self.discrepancy_low >= self.discrepancy_high {
            return Err(format!(
                "discrepancy bounds misordered: {} >= {}",
                self.discrepancy_low, self.discrepancy_high
            ));
        }
        if self.discrepancy_low <= 0.0 {
            return Err(format!(
                "discrepancy_low must be positive, got {}",
                self.discrepancy_low
            ));
        }
        if self.rate_min >= self.rate_max {
            return Err(format!(
                "rate bounds misordered: {} >= {}",
                self.rate_min, self.rate_max
            ));
        }
        Ok(())
    }
}

/// Deployment-level predictor configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PredictorConfig {
    #[serde(default)]
    pub grid_policy: GridPolicy,
    /// Let breed levels absent from the registry through to the oracle.
    /// Oracle output may be unstable for them.
    #[serde(default)]
    pub allow_unseen_breeds: bool,
    #[serde(default)]
    pub thresholds: AnomalyThresholds,
}

impl PredictorConfig {
    pub fn validate(&self) -> Result<(), String> {
        if let GridPolicy::Fixed { upper_weeks } = self.grid_policy {
            if upper_weeks < 1 {
                return Err("fixed grid upper bound must be at least 1 week".to_string());
            }
        }
        self.thresholds.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_observed_constants() {
        let config = PredictorConfig::default();
        assert_eq!(config.grid_policy, GridPolicy::Fixed { upper_weeks: 100 });
        assert!(!config.allow_unseen_breeds);
        assert_eq!(config.thresholds.discrepancy_low, 0.5);
        assert_eq!(config.thresholds.discrepancy_high, 1.5);
        assert_eq!(config.thresholds.rate_min, -1.0);
        assert_eq!(config.thresholds.rate_max, 10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn adaptive_upper_rounds_up_to_hundred() {
        let policy = GridPolicy::Adaptive;
        assert_eq!(policy.upper_weeks(1), 100);
        assert_eq!(policy.upper_weeks(100), 100);
        assert_eq!(policy.upper_weeks(101), 200);
        assert_eq!(policy.upper_weeks(250), 300);
    }

    #[test]
    fn misordered_thresholds_rejected() {
        let thresholds = AnomalyThresholds {
            discrepancy_low: 2.0,
            discrepancy_high: 1.5,
            ..AnomalyThresholds::default()
        };
        assert!(thresholds.validate().is_err());
    }
}
