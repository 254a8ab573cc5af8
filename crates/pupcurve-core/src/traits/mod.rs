//! The fitted growth model's trait boundary.
//!
//! Everything statistical lives behind [`GrowthOracle`]: model
//! specification, sampling, and posterior-predictive inference are the
//! oracle's business. The pipeline only consumes its `(point, low, high)`
//! triples. Implementations:
//! - [`crate::stubs::GompertzOracle`]: deterministic analytic stub
//! - A real fitted-model binding, loaded once at process start

use async_trait::async_trait;

use crate::error::OracleError;
use crate::types::{CovariateGrid, RawPrediction};

/// A fitted growth model answering batch weight predictions.
///
/// The oracle is loaded once and shared read-only (`Arc<dyn GrowthOracle>`);
/// it must never mutate after load, so it is safe across concurrent
/// sessions. Calls are deterministic for a fixed fitted model, which is why
/// the pipeline never retries a failed prediction.
///
/// # Unseen levels
///
/// Implementations must tolerate breed/sex values absent from their
/// training data ("allow unseen group" mode). Point estimates for unseen
/// levels may be unstable or degenerate; the pipeline's scaling guard and
/// anomaly checks are the downstream defense.
#[async_trait]
pub trait GrowthOracle: Send + Sync {
    /// Predict `(point, low, high)` weight triples, one per grid age, in
    /// grid order. The result must be parallel to the grid; the scaling
    /// stage rejects mismatched lengths.
    async fn predict_weights(&self, grid: &CovariateGrid) -> Result<RawPrediction, OracleError>;

    /// Identifier of the fitted model, for logs and chart footers.
    fn model_id(&self) -> &str;
}
