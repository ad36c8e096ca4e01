//! Error types for environment resolution.

use thiserror::Error;

/// Errors raised while resolving the runtime environment.
///
/// Both variants surface at bootstrap, before any network client is
/// constructed, so a broken deployment fails loudly instead of producing
/// clients pointed at a silently-defaulted endpoint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentError {
    /// No browser window/location exists (non-browser execution context).
    #[error("Browser location context unavailable")]
    ContextUnavailable,

    /// The page location carries an explicit port that is not a valid TCP port.
    #[error("Invalid explicit port: {0:?}")]
    InvalidPort(String),
}

/// Result type alias for environment operations.
pub type EnvResult<T> = Result<T, EnvironmentError>;
