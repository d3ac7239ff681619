//! Error types for rendering inputs

use thiserror::Error;

/// Errors raised while validating render inputs or configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid input: `{field}` is missing or empty")]
    InvalidInput { field: String },

    #[error("Invalid date format `{format}`: {reason}")]
    InvalidDateFormat { format: String, reason: String },
}

impl Error {
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Error::InvalidInput {
            field: field.into(),
        }
    }
}
