//! Shared error type across tally crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Unified error type used by core and server.
///
/// Counter endpoints never surface errors to clients (malformed input falls
/// back to defaults, failed renders yield an empty body), so these variants
/// only travel the startup and logging paths.
#[derive(Debug, Error)]
pub enum TallyError {
    /// Configuration could not be read or parsed.
    #[error("config: {0}")]
    Config(String),
    /// Config schema version is not supported.
    #[error("unsupported config version")]
    UnsupportedVersion,
    /// Template load or render failure.
    #[error("template: {0}")]
    Template(String),
    /// Internal error.
    #[error("internal: {0}")]
    Internal(String),
}
