//! Chart data contract for the presentation layer.
//!
//! The core does not render; it hands a [`ChartSpec`] to whatever charting
//! front end is in use. The spec carries everything a renderer needs: the
//! shaded interval band under the center line, the highlighted
//! current-state marker with dashed reference lines through it, and a
//! per-point tooltip payload plus static query metadata.

use serde::{Deserialize, Serialize};

use crate::types::Sex;

/// One renderable point: center line value plus band edges, and the
/// tooltip payload for hover. Ordered by age.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub age_weeks: u32,
    /// Center line (point estimate).
    pub point_lbs: f32,
    /// Lower edge of the shaded 95% band.
    pub low_lbs: f32,
    /// Upper edge of the shaded 95% band.
    pub high_lbs: f32,
}

/// The highlighted marker at the dog's reported current state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentMarker {
    pub age_weeks: u32,
    pub weight_lbs: f32,
}

/// Dashed reference lines through the current-state marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLines {
    /// Vertical line at the current age.
    pub vertical_age_weeks: u32,
    /// Horizontal line at the current weight.
    pub horizontal_weight_lbs: f32,
}

/// Static query metadata repeated in every tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartMetadata {
    pub breed: String,
    pub sex: Sex,
    pub current_age_weeks: u32,
    pub current_weight_lbs: f32,
    /// Population-typical (unscaled) predicted weight at the current age.
    pub typical_weight_lbs: f32,
}

/// Complete chart specification handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Band + line + tooltip data, ordered by age.
    pub points: Vec<ChartPoint>,
    pub marker: CurrentMarker,
    pub reference_lines: ReferenceLines,
    pub metadata: ChartMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_spec_serializes_round_trip() {
        let spec = ChartSpec {
            points: vec![ChartPoint {
                age_weeks: 10,
                point_lbs: 20.0,
                low_lbs: 17.0,
                high_lbs: 23.0,
            }],
            marker: CurrentMarker {
                age_weeks: 10,
                weight_lbs: 21.0,
            },
            reference_lines: ReferenceLines {
                vertical_age_weeks: 10,
                horizontal_weight_lbs: 21.0,
            },
            metadata: ChartMetadata {
                breed: "Pug".to_string(),
                sex: Sex::Female,
                current_age_weeks: 10,
                current_weight_lbs: 21.0,
                typical_weight_lbs: 20.0,
            },
        };

        let json = serde_json::to_string(&spec).unwrap();
        let back: ChartSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }
}
