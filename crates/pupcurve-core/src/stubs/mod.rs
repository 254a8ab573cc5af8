//! Stub implementations of the oracle boundary.
//!
//! Deterministic, dependency-free stand-ins for the real fitted model,
//! used by tests and the CLI demo mode.

mod gompertz;

pub use gompertz::GompertzOracle;
