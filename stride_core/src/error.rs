//! Error types for the stride_core library.

use crate::types::{RUNNING_LABEL, WALKING_LABEL};
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for stride_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Record has the wrong number of comma-separated fields
    #[error("invalid data format: expected {expected} values, got {actual}, data: {data:?}")]
    Format {
        expected: usize,
        actual: usize,
        data: String,
    },

    /// A field could not be parsed as a number or a duration
    #[error("failed to parse {field} from {value:?}: {reason}")]
    Parse {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// Activity label is not one of the known tokens
    #[error(
        "unknown activity type: expected {:?} or {:?}, got {0:?}",
        WALKING_LABEL,
        RUNNING_LABEL
    )]
    UnknownActivity(String),

    /// Duration is zero or negative at computation time
    #[error("duration must be greater than zero")]
    InvalidDuration,

    /// Body metrics or other numeric inputs are out of range
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build a parse error for the named record field
    pub(crate) fn parse(field: &'static str, value: &str, reason: impl ToString) -> Self {
        Error::Parse {
            field,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
