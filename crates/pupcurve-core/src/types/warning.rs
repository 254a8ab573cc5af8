//! Heuristic sanity warnings.
//!
//! Warnings are advisory: they always accompany a valid adjusted curve,
//! never block or alter it, and are recomputed from scratch on every
//! request. Each variant carries the evidence that fired it so the surface
//! can render a useful banner.

use serde::{Deserialize, Serialize};

/// One fired sanity check, with evidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GrowthWarning {
    /// OLS slope of point estimate vs age is negative over the whole curve.
    NegativeTrend { slope: f32 },
    /// Scaling factor outside the plausible band: the reported weight is
    /// far from the population-typical prediction at that age.
    WeightDiscrepancy { scaling_factor: f32 },
    /// A local week-over-week growth rate outside physical bounds.
    UnrealisticRate { age_weeks: u32, rate_lbs_per_week: f32 },
}

impl GrowthWarning {
    pub fn kind(&self) -> WarningKind {
        match self {
            GrowthWarning::NegativeTrend { .. } => WarningKind::NegativeTrend,
            GrowthWarning::WeightDiscrepancy { .. } => WarningKind::WeightDiscrepancy,
            GrowthWarning::UnrealisticRate { .. } => WarningKind::UnrealisticRate,
        }
    }

    /// Banner text for the surface.
    pub fn message(&self) -> String {
        match self {
            GrowthWarning::NegativeTrend { slope } => format!(
                "Predicted weight trends downward with age (slope {slope:.3} lbs/week); \
                 the model may not fit this dog well."
            ),
            GrowthWarning::WeightDiscrepancy { scaling_factor } => format!(
                "Current weight differs from the typical prediction for this breed, sex, \
                 and age by more than 50% (scaling factor {scaling_factor:.2})."
            ),
            GrowthWarning::UnrealisticRate {
                age_weeks,
                rate_lbs_per_week,
            } => format!(
                "Unrealistic growth rate of {rate_lbs_per_week:.2} lbs/week \
                 near age {age_weeks} weeks."
            ),
        }
    }
}

/// The kind of a warning, for set-membership queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    NegativeTrend,
    WeightDiscrepancy,
    UnrealisticRate,
}

/// Zero or more warnings from one prediction request.
///
/// At most one warning per kind: the checks are independent and each
/// reports once.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WarningSet {
    warnings: Vec<GrowthWarning>,
}

impl WarningSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a warning, ignoring duplicates of a kind already present.
    pub fn push(&mut self, warning: GrowthWarning) {
        if !self.contains(warning.kind()) {
            self.warnings.push(warning);
        }
    }

    pub fn contains(&self, kind: WarningKind) -> bool {
        self.warnings.iter().any(|w| w.kind() == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GrowthWarning> {
        self.warnings.iter()
    }
}
