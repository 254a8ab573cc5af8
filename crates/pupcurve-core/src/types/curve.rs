//! Covariate grid and prediction curve types.

use serde::{Deserialize, Serialize};

use crate::types::Sex;

/// Ordered sequence of ages submitted to the oracle, with the query's
/// fixed breed/sex.
///
/// Invariant: ages run `0..=upper` in steps of one week, so the row for
/// age N is always index N.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CovariateGrid {
    ages: Vec<u32>,
    pub breed: String,
    pub sex: Sex,
}

impl CovariateGrid {
    /// Build the grid `0..=upper_weeks` for a fixed breed/sex.
    pub fn from_upper(breed: impl Into<String>, sex: Sex, upper_weeks: u32) -> Self {
        Self {
            ages: (0..=upper_weeks).collect(),
            breed: breed.into(),
            sex,
        }
    }

    pub fn ages(&self) -> &[u32] {
        &self.ages
    }

    pub fn len(&self) -> usize {
        self.ages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ages.is_empty()
    }

    pub fn upper_weeks(&self) -> u32 {
        *self.ages.last().unwrap_or(&0)
    }

    /// Row index for an age, if the age is on the grid.
    pub fn index_of_age(&self, age_weeks: u32) -> Option<usize> {
        if age_weeks <= self.upper_weeks() {
            Some(age_weeks as usize)
        } else {
            None
        }
    }
}

/// One (point estimate, 95% interval low, 95% interval high) triple in lbs.
///
/// The oracle guarantees nothing about sign or ordering, especially for
/// unseen breed levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionTriple {
    pub point: f32,
    pub low: f32,
    pub high: f32,
}

impl PredictionTriple {
    pub fn new(point: f32, low: f32, high: f32) -> Self {
        Self { point, low, high }
    }

    /// Multiply all three components uniformly, preserving the band's
    /// relative width.
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            point: self.point * factor,
            low: self.low * factor,
            high: self.high * factor,
        }
    }

    /// Floor each component independently at zero.
    pub fn floored(self) -> Self {
        Self {
            point: self.point.max(0.0),
            low: self.low.max(0.0),
            high: self.high.max(0.0),
        }
    }
}

/// Oracle output: one triple per grid age, in grid order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPrediction {
    triples: Vec<PredictionTriple>,
}

impl RawPrediction {
    pub fn new(triples: Vec<PredictionTriple>) -> Self {
        Self { triples }
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PredictionTriple> {
        self.triples.get(index)
    }

    pub fn triples(&self) -> &[PredictionTriple] {
        &self.triples
    }
}

/// One row of the rescaled, floored curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustedPoint {
    pub age_weeks: u32,
    pub point: f32,
    pub low: f32,
    pub high: f32,
}

/// The individualized curve: raw triples scaled through the reported
/// current weight, then floored at zero.
///
/// Same length as the covariate grid (the floor policy never drops rows),
/// so age N is still row N.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustedCurve {
    points: Vec<AdjustedPoint>,
}

impl AdjustedCurve {
    pub fn new(points: Vec<AdjustedPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[AdjustedPoint] {
        &self.points
    }

    /// Point estimate at an exact age, if on the curve.
    pub fn point_at(&self, age_weeks: u32) -> Option<f32> {
        self.points
            .iter()
            .find(|p| p.age_weeks == age_weeks)
            .map(|p| p.point)
    }
}
