//! Scaling & clipping stage.
//!
//! Aligns the population curve to the individual: every raw triple is
//! multiplied by `current_weight / point_at(current_age)` so the adjusted
//! curve passes through the reported current weight, then each component
//! is floored at zero.
//!
//! Clipping policy: floor-in-place only. The sequence keeps its length, so
//! age N remains row N for the anomaly checker and the chart's x-axis.

use tracing::debug;

use crate::error::ScalingError;
use crate::types::{AdjustedCurve, AdjustedPoint, CovariateGrid, RawPrediction, ValidQuery};

/// Output of the scaling stage: the individualized curve plus the factor
/// and the unscaled reference point it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledOutput {
    pub curve: AdjustedCurve,
    pub scaling_factor: f32,
    /// Population-typical (unscaled) point estimate at the current age.
    pub typical_weight_lbs: f32,
}

/// Scale the raw prediction through the reported current weight and floor
/// negative values.
///
/// # Errors
///
/// - [`ScalingError::EmptyPrediction`] / [`ScalingError::LengthMismatch`]
///   when the oracle output is not parallel to the grid.
/// - [`ScalingError::ReferenceAgeOutsideGrid`] when the current age is not
///   on the grid (possible under the fixed-bound policy).
/// - [`ScalingError::DegenerateReference`] when the reference point
///   estimate is zero or non-finite; no non-finite factor ever propagates.
pub fn scale_and_floor(
    query: &ValidQuery,
    grid: &CovariateGrid,
    raw: &RawPrediction,
) -> Result<ScaledOutput, ScalingError> {
    if raw.is_empty() {
        return Err(ScalingError::EmptyPrediction);
    }
    if raw.len() != grid.len() {
        return Err(ScalingError::LengthMismatch {
            expected: grid.len(),
            got: raw.len(),
        });
    }

    // Grid runs 0..=upper with every integer, so age N is row N.
    let reference_index =
        grid.index_of_age(query.age_weeks)
            .ok_or(ScalingError::ReferenceAgeOutsideGrid {
                age_weeks: query.age_weeks,
                upper_weeks: grid.upper_weeks(),
            })?;
    let reference = raw
        .get(reference_index)
        .ok_or(ScalingError::ReferenceAgeOutsideGrid {
            age_weeks: query.age_weeks,
            upper_weeks: grid.upper_weeks(),
        })?;

    if reference.point == 0.0 || !reference.point.is_finite() {
        return Err(ScalingError::DegenerateReference {
            age_weeks: query.age_weeks,
            point_estimate: reference.point,
        });
    }

    let scaling_factor = query.current_weight_lbs / reference.point;
    debug!(
        scaling_factor,
        reference_point = reference.point,
        age_weeks = query.age_weeks,
        "scaling raw prediction"
    );

    let points = grid
        .ages()
        .iter()
        .zip(raw.triples())
        .map(|(&age_weeks, triple)| {
            let scaled = triple.scaled(scaling_factor).floored();
            AdjustedPoint {
                age_weeks,
                point: scaled.point,
                low: scaled.low,
                high: scaled.high,
            }
        })
        .collect();

    Ok(ScaledOutput {
        curve: AdjustedCurve::new(points),
        scaling_factor,
        typical_weight_lbs: reference.point,
    })
}
