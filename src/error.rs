//! Error types.
//!
//! Template expansion never fails: unterminated braces and unknown placeholder
//! keys expand to the empty string. Everything that can fail lives here.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("No url defined for alias: {0}")]
    UndefinedAlias(String),

    #[error("Invalid export type: {0}")]
    InvalidExportType(String),

    #[error("Invalid disposition: {0}")]
    InvalidDisposition(String),

    #[error("Storage operation failed: {0}")]
    Storage(String),

    #[error("Stored alias map is malformed: {0}")]
    MalformedStorage(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Rejected alias store writes. The store is left untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("alias must not be empty")]
    EmptyAlias,

    #[error("template must not be empty")]
    EmptyTemplate,
}
