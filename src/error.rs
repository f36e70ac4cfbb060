//! Error types for ABN lookups.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Every failure can be classified programmatically through [`ErrorKind`].

use crate::domain::ValidationError;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Closed classification of every way a validation or lookup can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// ABN is not exactly eleven characters long
    WrongLength,
    /// ABN contains a non-digit character
    InvalidFormat,
    /// Weighted checksum is not divisible by 89
    InvalidChecksum,
    /// The registry rejected the number as not being a valid ABN
    #[serde(rename = "InvalidABN")]
    InvalidAbn,
    /// The registry holds no record for the ABN
    RecordNotFound,
    /// The registry returned a page of an unrecognised shape
    UnknownResponse,
    /// The HTTP request could not be performed
    TransportError,
    /// The registry answered with a status other than 200
    UnexpectedStatus,
    /// The response body could not be parsed as HTML
    ParseError,
}

impl ErrorKind {
    /// Stable name of the kind, suitable for machine-readable output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WrongLength => "WrongLength",
            Self::InvalidFormat => "InvalidFormat",
            Self::InvalidChecksum => "InvalidChecksum",
            Self::InvalidAbn => "InvalidABN",
            Self::RecordNotFound => "RecordNotFound",
            Self::UnknownResponse => "UnknownResponse",
            Self::TransportError => "TransportError",
            Self::UnexpectedStatus => "UnexpectedStatus",
            Self::ParseError => "ParseError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur when fetching an ABN from the registry.
#[derive(Error, Debug)]
pub enum AbnLookupError {
    /// Local validation rejected the ABN before any request was made
    #[error("preliminary validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Registry considers the number invalid
    #[error("invalid abn format")]
    InvalidAbn,

    /// Registry has no matching record
    #[error("record not found")]
    RecordNotFound,

    /// Registry page did not match any recognised shape
    #[error("unknown response from ABR")]
    UnknownResponse,

    /// HTTP request failed
    #[error("couldn't perform request: {0}")]
    Transport(String),

    /// Registry returned a non-200 status code
    #[error("invalid response code; expected 200 OK but got {status} {status_text}")]
    UnexpectedStatus { status: u16, status_text: String },

    /// Response body could not be parsed
    #[error("couldn't parse response: {0}")]
    Parse(String),
}

impl AbnLookupError {
    /// Classify this error.
    ///
    /// Validation failures report the underlying validation kind, so callers can tell a
    /// bad checksum apart from a registry-side rejection.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(e) => e.kind(),
            Self::InvalidAbn => ErrorKind::InvalidAbn,
            Self::RecordNotFound => ErrorKind::RecordNotFound,
            Self::UnknownResponse => ErrorKind::UnknownResponse,
            Self::Transport(_) => ErrorKind::TransportError,
            Self::UnexpectedStatus { .. } => ErrorKind::UnexpectedStatus,
            Self::Parse(_) => ErrorKind::ParseError,
        }
    }

    /// Whether the error was raised before the registry was contacted.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AbnLookupError
pub type AbnResult<T> = Result<T, AbnLookupError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
