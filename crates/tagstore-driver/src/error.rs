//! # Driver Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Bad env var / flag ──► ConfigError ──┐                                 │
//! │  Bad script line ─────► DriverError::Parse { line, .. }                 │
//! │  Store contract ──────► CoreError ────┼──► DriverError ──► stderr       │
//! │  Read / write failure ─► io::Error ───┘                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use tagstore_core::CoreError;

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
}

/// Errors raised while running a command script.
#[derive(Debug, Error)]
pub enum DriverError {
    /// A script line could not be parsed.
    #[error("Line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// The store rejected a command.
    #[error("Line {line}: {source}")]
    Store {
        line: usize,
        #[source]
        source: CoreError,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DriverError {
    /// Creates a Parse error for a given line.
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        DriverError::Parse {
            line,
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results with DriverError.
pub type DriverResult<T> = Result<T, DriverError>;
