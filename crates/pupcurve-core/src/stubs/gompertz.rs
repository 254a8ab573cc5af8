//! Deterministic Gompertz-curve stub oracle.
//!
//! Stands in for the real fitted model with an analytic sigmoid growth
//! curve: `w(t) = adult_weight * exp(-b * exp(-k * t))`, adult weight taken
//! from the breed registry, a sex multiplier, and a fixed-fraction
//! prediction band. Same inputs always produce the same output.

use async_trait::async_trait;

use crate::error::OracleError;
use crate::traits::GrowthOracle;
use crate::types::{BreedRegistry, CovariateGrid, PredictionTriple, RawPrediction, Sex};

/// Adult weight assumed for breeds the registry does not know.
const UNSEEN_BREED_ADULT_LBS: f32 = 40.0;

/// Displacement constant; birth weight is `adult * exp(-b)` ≈ 1.8% of adult.
const GOMPERTZ_B: f32 = 4.0;

/// Analytic stub implementing [`GrowthOracle`].
///
/// # Example
///
/// ```
/// use pupcurve_core::stubs::GompertzOracle;
/// use pupcurve_core::traits::GrowthOracle;
/// use pupcurve_core::types::{CovariateGrid, Sex};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let oracle = GompertzOracle::new();
/// let grid = CovariateGrid::from_upper("Labrador Retriever", Sex::Male, 100);
/// let raw = oracle.predict_weights(&grid).await.unwrap();
/// assert_eq!(raw.len(), grid.len());
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct GompertzOracle {
    registry: BreedRegistry,
    /// Half-width of the prediction band as a fraction of the point estimate.
    band_fraction: f32,
}

impl Default for GompertzOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl GompertzOracle {
    pub fn new() -> Self {
        Self {
            registry: BreedRegistry::new(),
            band_fraction: 0.12,
        }
    }

    /// Create with a custom band half-width fraction.
    pub fn with_band_fraction(band_fraction: f32) -> Self {
        Self {
            band_fraction,
            ..Self::new()
        }
    }

    /// Adult weight for a breed/sex combination. Unknown breeds fall back
    /// to a medium-dog default (the "unseen level" mode).
    fn adult_weight(&self, breed: &str, sex: Sex) -> f32 {
        let base = self
            .registry
            .get(breed)
            .map(|spec| spec.adult_weight_lbs)
            .unwrap_or(UNSEEN_BREED_ADULT_LBS);
        match sex {
            Sex::Male => base,
            Sex::Female => base * 0.85,
        }
    }

    /// Growth-rate constant; smaller breeds mature faster.
    fn rate_constant(adult_weight_lbs: f32) -> f32 {
        if adult_weight_lbs < 20.0 {
            0.12
        } else if adult_weight_lbs <= 80.0 {
            0.085
        } else {
            0.065
        }
    }

    fn point_estimate(&self, adult_weight_lbs: f32, age_weeks: u32) -> f32 {
        let k = Self::rate_constant(adult_weight_lbs);
        adult_weight_lbs * (-GOMPERTZ_B * (-k * age_weeks as f32).exp()).exp()
    }
}

#[async_trait]
impl GrowthOracle for GompertzOracle {
    async fn predict_weights(&self, grid: &CovariateGrid) -> Result<RawPrediction, OracleError> {
        if grid.is_empty() {
            return Err(OracleError::PredictFailed {
                reason: "empty covariate grid".to_string(),
            });
        }

        let adult = self.adult_weight(&grid.breed, grid.sex);
        let triples = grid
            .ages()
            .iter()
            .map(|&age| {
                let point = self.point_estimate(adult, age);
                let half_width = (point * self.band_fraction).max(0.5);
                PredictionTriple::new(point, point - half_width, point + half_width)
            })
            .collect();

        Ok(RawPrediction::new(triples))
    }

    fn model_id(&self) -> &str {
        "gompertz-stub-v1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn output_is_parallel_to_grid() {
        let oracle = GompertzOracle::new();
        let grid = CovariateGrid::from_upper("Beagle", Sex::Female, 100);
        let raw = oracle.predict_weights(&grid).await.unwrap();
        assert_eq!(raw.len(), 101);
    }

    #[tokio::test]
    async fn curve_is_monotonically_increasing() {
        let oracle = GompertzOracle::new();
        let grid = CovariateGrid::from_upper("German Shepherd", Sex::Male, 100);
        let raw = oracle.predict_weights(&grid).await.unwrap();
        for pair in raw.triples().windows(2) {
            assert!(pair[1].point > pair[0].point);
        }
    }

    #[tokio::test]
    async fn approaches_adult_weight() {
        let oracle = GompertzOracle::new();
        let grid = CovariateGrid::from_upper("Labrador Retriever", Sex::Male, 200);
        let raw = oracle.predict_weights(&grid).await.unwrap();
        let last = raw.triples().last().unwrap().point;
        assert!((last - 75.0).abs() < 1.0, "got {last}");
    }

    #[tokio::test]
    async fn unseen_breed_uses_fallback_adult_weight() {
        let oracle = GompertzOracle::new();
        let grid = CovariateGrid::from_upper("Direwolf", Sex::Male, 200);
        let raw = oracle.predict_weights(&grid).await.unwrap();
        let last = raw.triples().last().unwrap().point;
        assert!((last - UNSEEN_BREED_ADULT_LBS).abs() < 1.0, "got {last}");
    }

    #[tokio::test]
    async fn band_brackets_the_point() {
        let oracle = GompertzOracle::new();
        let grid = CovariateGrid::from_upper("Pug", Sex::Female, 60);
        let raw = oracle.predict_weights(&grid).await.unwrap();
        for triple in raw.triples() {
            assert!(triple.low < triple.point);
            assert!(triple.high > triple.point);
        }
    }

    #[tokio::test]
    async fn deterministic_across_calls() {
        let oracle = GompertzOracle::new();
        let grid = CovariateGrid::from_upper("Boxer", Sex::Male, 100);
        let a = oracle.predict_weights(&grid).await.unwrap();
        let b = oracle.predict_weights(&grid).await.unwrap();
        assert_eq!(a, b);
    }
}
