//! The prediction pipeline.
//!
//! One synchronous request/response cycle per user action: validate the
//! query, build the covariate grid, ask the oracle, scale and floor the
//! raw curve, run the anomaly checks, assemble the chart spec. Every stage
//! is pure; the only shared state is the read-only oracle.

mod anomaly;
mod chart;
mod grid;
mod scaling;

pub use anomaly::check_curve;
pub use chart::build_chart;
pub use grid::build_grid;
pub use scaling::{scale_and_floor, ScaledOutput};

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::PredictorConfig;
use crate::error::Result;
use crate::traits::GrowthOracle;
use crate::types::{AdjustedCurve, BreedRegistry, ChartSpec, Query, ValidQuery, WarningSet};

/// Everything the surface needs to answer one prediction request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResponse {
    /// Log-correlation id; not part of the deterministic payload.
    pub request_id: Uuid,
    pub query: ValidQuery,
    pub model_id: String,
    pub scaling_factor: f32,
    /// Population-typical (unscaled) weight at the current age.
    pub typical_weight_lbs: f32,
    pub adjusted_curve: AdjustedCurve,
    pub warnings: WarningSet,
    pub chart: ChartSpec,
}

/// The pipeline orchestrator: a fitted oracle plus deployment config.
///
/// Construct once, share freely; [`predict`](Self::predict) is safe to call
/// from concurrent sessions because nothing mutates after construction.
pub struct GrowthPredictor {
    oracle: Arc<dyn GrowthOracle>,
    config: PredictorConfig,
    registry: BreedRegistry,
}

impl GrowthPredictor {
    pub fn new(oracle: Arc<dyn GrowthOracle>, config: PredictorConfig) -> Self {
        Self {
            oracle,
            config,
            registry: BreedRegistry::new(),
        }
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Run the full pipeline for one query.
    ///
    /// Validation failures surface before the oracle is invoked; oracle and
    /// scaling failures abort the request with no partial curve and no
    /// retry. Warnings never block: a response always carries a valid
    /// adjusted curve.
    pub async fn predict(&self, query: &Query) -> Result<PredictionResponse> {
        let request_id = Uuid::new_v4();

        let valid = query.validate(&self.registry, self.config.allow_unseen_breeds)?;
        if !valid.breed_is_known {
            warn!(
                %request_id,
                breed = %valid.breed,
                "unseen breed level passed through; oracle output may be unstable"
            );
        }

        let grid = build_grid(&valid, self.config.grid_policy);
        let raw = self.oracle.predict_weights(&grid).await?;
        let scaled = scale_and_floor(&valid, &grid, &raw)?;
        let warnings = check_curve(&scaled.curve, scaled.scaling_factor, &self.config.thresholds);
        let chart = build_chart(&valid, &scaled.curve, scaled.typical_weight_lbs);

        info!(
            %request_id,
            breed = %valid.breed,
            sex = %valid.sex,
            age_weeks = valid.age_weeks,
            scaling_factor = scaled.scaling_factor,
            warning_count = warnings.len(),
            "prediction complete"
        );
        for warning in warnings.iter() {
            warn!(%request_id, "{}", warning.message());
        }

        Ok(PredictionResponse {
            request_id,
            query: valid,
            model_id: self.oracle.model_id().to_string(),
            scaling_factor: scaled.scaling_factor,
            typical_weight_lbs: scaled.typical_weight_lbs,
            adjusted_curve: scaled.curve,
            warnings,
            chart,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stubs::GompertzOracle;
    use crate::types::{AgeInput, Sex};

    fn predictor() -> GrowthPredictor {
        GrowthPredictor::new(Arc::new(GompertzOracle::new()), PredictorConfig::default())
    }

    fn lab_query(age_weeks: u32, weight: f32) -> Query {
        Query {
            breed: "Labrador Retriever".to_string(),
            sex: Sex::Male,
            age: AgeInput::Weeks(age_weeks),
            current_weight_lbs: weight,
        }
    }

    #[tokio::test]
    async fn curve_passes_through_current_weight() {
        let response = predictor().predict(&lab_query(60, 85.0)).await.unwrap();
        let at_reference = response.adjusted_curve.point_at(60).unwrap();
        assert!((at_reference - 85.0).abs() < 1e-3);
    }

    #[tokio::test]
    async fn validation_failure_short_circuits() {
        let mut query = lab_query(60, 85.0);
        query.current_weight_lbs = -3.0;
        let err = predictor().predict(&query).await.unwrap_err();
        assert!(err.is_user_recoverable());
    }

    #[tokio::test]
    async fn response_chart_spans_the_grid() {
        let response = predictor().predict(&lab_query(60, 85.0)).await.unwrap();
        assert_eq!(response.chart.points.len(), 101);
        assert_eq!(response.chart.marker.age_weeks, 60);
        assert_eq!(response.model_id, "gompertz-stub-v1");
    }

    #[tokio::test]
    async fn unseen_breed_rejected_unless_configured() {
        let mut query = lab_query(60, 45.0);
        query.breed = "Direwolf".to_string();

        assert!(predictor().predict(&query).await.is_err());

        let permissive = GrowthPredictor::new(
            Arc::new(GompertzOracle::new()),
            PredictorConfig {
                allow_unseen_breeds: true,
                ..PredictorConfig::default()
            },
        );
        let response = permissive.predict(&query).await.unwrap();
        assert!(!response.query.breed_is_known);
    }
}
