//! CLI command implementations.

pub mod breeds;
pub mod predict;
