//! Error types for TEMPUS

use thiserror::Error;

/// Raised when a date string cannot be parsed into an instant.
///
/// Formatting has no error path: any `EpochSeconds` renders to a
/// well-formed string. Parsing is the only partial operation, so this
/// is the only error the core carries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty date string")]
    EmptyInput,

    #[error("unrecognized date string: {0:?}")]
    Unrecognized(String),
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
