//! Presentation stage: chart-spec assembly.
//!
//! Builds the renderer-facing data contract from the adjusted curve and the
//! query. Rendering mechanics belong to the charting front end.

use crate::types::{
    AdjustedCurve, ChartMetadata, ChartPoint, ChartSpec, CurrentMarker, ReferenceLines, ValidQuery,
};

/// Assemble the chart specification: band + center line across age, the
/// current-state marker, dashed reference lines through it, and static
/// tooltip metadata including the population-typical weight at the
/// current age.
pub fn build_chart(
    query: &ValidQuery,
    curve: &AdjustedCurve,
    typical_weight_lbs: f32,
) -> ChartSpec {
    let points = curve
        .points()
        .iter()
        .map(|p| ChartPoint {
            age_weeks: p.age_weeks,
            point_lbs: p.point,
            low_lbs: p.low,
            high_lbs: p.high,
        })
        .collect();

    ChartSpec {
        points,
        marker: CurrentMarker {
            age_weeks: query.age_weeks,
            weight_lbs: query.current_weight_lbs,
        },
        reference_lines: ReferenceLines {
            vertical_age_weeks: query.age_weeks,
            horizontal_weight_lbs: query.current_weight_lbs,
        },
        metadata: ChartMetadata {
            breed: query.breed.clone(),
            sex: query.sex,
            current_age_weeks: query.age_weeks,
            current_weight_lbs: query.current_weight_lbs,
            typical_weight_lbs,
        },
    }
}
