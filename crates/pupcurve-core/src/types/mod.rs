//! Domain types for the prediction pipeline.
//!
//! Everything here is request-scoped and immutable once constructed: a
//! [`Query`] goes in, and the grid, raw prediction, adjusted curve,
//! warnings, and chart spec derived from it are discarded with the
//! response.

mod breed;
mod chart;
mod curve;
mod query;
mod warning;

pub use breed::{BreedRegistry, BreedSpec};
pub use chart::{ChartMetadata, ChartPoint, ChartSpec, CurrentMarker, ReferenceLines};
pub use curve::{AdjustedCurve, AdjustedPoint, CovariateGrid, PredictionTriple, RawPrediction};
pub use query::{AgeInput, Query, Sex, ValidQuery};
pub use warning::{GrowthWarning, WarningKind, WarningSet};
