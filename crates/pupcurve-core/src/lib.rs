//! Pupcurve Core Library
//!
//! Predicts an individual dog's weight trajectory from breed, sex, current
//! age, and current weight by post-processing the output of an externally
//! fitted growth model (the [`GrowthOracle`]).
//!
//! # Architecture
//!
//! This crate defines:
//! - Domain types (`Query`, `CovariateGrid`, `RawPrediction`, `AdjustedCurve`, ...)
//! - The [`GrowthOracle`] trait boundary plus a deterministic stub implementation
//! - The prediction pipeline (grid construction, scaling & clipping, anomaly
//!   checks, chart-spec assembly)
//! - Error types and result aliases
//! - Configuration structures
//!
//! # Pipeline
//!
//! Data flows strictly one way per request:
//!
//! ```text
//! Query -> validate -> CovariateGrid -> oracle -> RawPrediction
//!       -> scale & floor -> AdjustedCurve -> anomaly checks -> ChartSpec
//! ```
//!
//! Every request-scope value is created fresh per call and discarded with
//! the response. The oracle is loaded once and shared read-only; the
//! pipeline itself is pure (same inputs, same outputs) and side-effect-free.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use pupcurve_core::config::PredictorConfig;
//! use pupcurve_core::pipeline::GrowthPredictor;
//! use pupcurve_core::stubs::GompertzOracle;
//! use pupcurve_core::types::{AgeInput, Query, Sex};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let predictor = GrowthPredictor::new(
//!     Arc::new(GompertzOracle::new()),
//!     PredictorConfig::default(),
//! );
//! let query = Query {
//!     breed: "Labrador Retriever".to_string(),
//!     sex: Sex::Male,
//!     age: AgeInput::Weeks(60),
//!     current_weight_lbs: 72.0,
//! };
//! let response = predictor.predict(&query).await.unwrap();
//! assert!(!response.adjusted_curve.is_empty());
//! # });
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod stubs;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use config::{AnomalyThresholds, GridPolicy, PredictorConfig};
pub use error::{PupCurveError, Result};
pub use pipeline::{GrowthPredictor, PredictionResponse};
pub use traits::GrowthOracle;
