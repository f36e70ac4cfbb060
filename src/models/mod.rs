//! Data models for registry lookups.
//!
//! This module contains the record returned by a successful ABN lookup.

pub mod lookup_result;

pub use lookup_result::LookupResult;
