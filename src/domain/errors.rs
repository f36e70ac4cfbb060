//! Domain validation errors.

use crate::error::ErrorKind;
use std::fmt;

/// Errors that can occur while validating an ABN locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// The ABN is not exactly eleven characters long.
    WrongLength,

    /// The ABN contains something other than ASCII digits.
    InvalidFormat,

    /// The weighted digit sum is not divisible by 89.
    InvalidChecksum,
}

impl ValidationError {
    /// The lookup error kind this validation failure corresponds to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::WrongLength => ErrorKind::WrongLength,
            Self::InvalidFormat => ErrorKind::InvalidFormat,
            Self::InvalidChecksum => ErrorKind::InvalidChecksum,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength => write!(f, "abn should be eleven digits"),
            Self::InvalidFormat => write!(f, "abn should only be numbers"),
            Self::InvalidChecksum => write!(f, "invalid checksum"),
        }
    }
}

impl std::error::Error for ValidationError {}
