//! CLI exit code handling.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Invalid query - fix the input and resubmit
//! - 2: Pipeline failure - degenerate scaling or oracle failure

use std::process::ExitCode;

use pupcurve_core::error::PupCurveError;

/// Exit codes for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CliExitCode {
    /// Success.
    Success = 0,
    /// Invalid query; the user can correct their input.
    InvalidQuery = 1,
    /// Scaling or oracle failure; not resolvable by editing the input.
    PipelineFailure = 2,
}

impl From<CliExitCode> for ExitCode {
    fn from(code: CliExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

impl From<&PupCurveError> for CliExitCode {
    fn from(err: &PupCurveError) -> Self {
        if err.is_user_recoverable() {
            CliExitCode::InvalidQuery
        } else {
            CliExitCode::PipelineFailure
        }
    }
}
