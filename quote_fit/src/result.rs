//! Result type alias shared across the workspace.
//!
//! Defaults the error type to [`FitError`], so functions can simply return `Result<T>`.
use crate::error::FitError;

/// Workspace-wide `Result` alias with `FitError` as the default error.
pub type Result<T, E = FitError> = std::result::Result<T, E>;
