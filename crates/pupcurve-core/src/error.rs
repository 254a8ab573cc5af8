//! Error types for pupcurve-core.
//!
//! The taxonomy separates three failure classes with different handling:
//!
//! - [`QueryError`]: rejected before the oracle is ever invoked; the caller
//!   fixes the input locally.
//! - [`ScalingError`]: the oracle answered but its output cannot be aligned
//!   to the reported current weight; the request aborts with no curve.
//! - [`OracleError`]: the oracle itself failed; distinct from scaling
//!   failures so the surface can say so.
//!
//! Advisory warnings ([`crate::types::GrowthWarning`]) are NOT errors: they
//! always accompany a valid curve and never block output.
//!
//! No automatic retry anywhere: the oracle is deterministic for a fixed
//! fitted model, so retrying an unchanged request cannot help.

use thiserror::Error;

/// Result alias for pupcurve-core operations.
pub type Result<T> = std::result::Result<T, PupCurveError>;

/// Top-level unified error type for the prediction pipeline.
///
/// # Examples
///
/// ```
/// use pupcurve_core::error::{PupCurveError, QueryError};
///
/// let err = PupCurveError::from(QueryError::NonPositiveWeight { weight_lbs: 0.0 });
/// assert!(err.is_user_recoverable());
/// ```
#[derive(Debug, Error)]
pub enum PupCurveError {
    /// Invalid query field; surfaced before the pipeline runs.
    #[error("Invalid query: {0}")]
    Query(#[from] QueryError),

    /// Scaling stage failure; no adjusted curve is produced.
    #[error("Scaling error: {0}")]
    Scaling(#[from] ScalingError),

    /// Oracle failure; no adjusted curve is produced.
    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),
}

impl PupCurveError {
    /// Whether the error is resolvable by the user correcting their input.
    ///
    /// Query errors are; oracle and scaling failures concern the fitted
    /// model or its output and need operator attention instead.
    pub fn is_user_recoverable(&self) -> bool {
        matches!(self, Self::Query(_))
    }
}

/// Validation failures for a [`crate::types::Query`].
///
/// All variants are caught by `Query::validate` before any oracle call.
#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    /// Current weight must be strictly positive.
    #[error("current weight must be positive, got {weight_lbs} lbs")]
    NonPositiveWeight { weight_lbs: f32 },

    /// Resolved current age must be at least one week.
    #[error("current age must be at least 1 week, got {age_weeks}")]
    AgeTooYoung { age_weeks: u32 },

    /// Birthdate input resolves to a negative elapsed time.
    #[error("birthdate {birthdate} lies in the future")]
    AgeInFuture { birthdate: chrono::NaiveDate },

    /// Breed name is empty or whitespace.
    #[error("breed must not be empty")]
    EmptyBreed,

    /// Breed not in the registry and unseen levels are not allowed.
    #[error("unknown breed '{breed}' (unseen breeds are disabled)")]
    UnknownBreed { breed: String },
}

/// Failures in the scaling & clipping stage.
#[derive(Debug, Error, PartialEq)]
pub enum ScalingError {
    /// The reference point estimate at the current age is zero or
    /// non-finite, so the scaling factor is undefined.
    #[error(
        "cannot scale: zero or non-finite reference prediction \
         ({point_estimate}) at age {age_weeks} weeks"
    )]
    DegenerateReference { age_weeks: u32, point_estimate: f32 },

    /// Current age falls outside the covariate grid (possible under the
    /// fixed-upper-bound grid policy).
    #[error("current age {age_weeks} weeks is outside the grid 0..={upper_weeks}")]
    ReferenceAgeOutsideGrid { age_weeks: u32, upper_weeks: u32 },

    /// The oracle returned an empty prediction.
    #[error("oracle returned an empty prediction")]
    EmptyPrediction,

    /// The oracle's output is not parallel to the covariate grid.
    #[error("oracle returned {got} triples for a grid of {expected} ages")]
    LengthMismatch { expected: usize, got: usize },
}

/// Failures raised by a [`crate::traits::GrowthOracle`] implementation.
#[derive(Debug, Error, PartialEq)]
pub enum OracleError {
    /// The fitted model could not be reached or loaded.
    #[error("growth model unavailable: {reason}")]
    Unavailable { reason: String },

    /// The model rejected the covariate grid or failed mid-prediction.
    #[error("prediction failed: {reason}")]
    PredictFailed { reason: String },
}
