//! Domain value objects and validation.
//!
//! This module contains the ABN checksum validator and the [`Abn`] value object,
//! which can only be constructed from a number that passes validation.

pub mod abn;
pub mod errors;

pub use abn::{validate, Abn, ABN_LENGTH};
pub use errors::ValidationError;
