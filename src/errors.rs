//! Unified error types for the marketplace client.
//!
//! Transport and parse failures never surface here directly - the mediator
//! folds them into its uniform response shape. What callers see as `Error`
//! is configuration trouble, input validation, a rejection returned by the
//! backend, or a row that could not be decoded.

use thiserror::Error;

/// All failure modes surfaced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// A required environment variable is missing or unreadable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Caller-supplied input failed validation before any request was sent
    #[error("{message}")]
    Validation {
        /// Message suitable for showing to the user verbatim
        message: String,
    },

    /// The backend answered with `success: false`, or its reply could not be
    /// read; the message is the backend's own text when it provided one
    #[error("{message}")]
    Backend {
        /// Message suitable for showing to the user verbatim
        message: String,
    },

    /// A sheet row was structurally unusable (missing identity columns)
    #[error("Malformed row: {message}")]
    Row {
        /// Which column was missing or unreadable
        message: String,
    },
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
