//! ABN Lookup - validation and legal name lookup for Australian Business Numbers.
//!
//! This library checks ABNs against their checksum and retrieves the registered
//! legal name for a valid ABN from the public ABN Lookup registry, scraping it out
//! of the registry's HTML details page.
//!
//! # Architecture
//!
//! - **domain**: Checksum validation and the `Abn` value object (no I/O)
//! - **client**: Registry client, transport seam, and page classification
//! - **models**: The `LookupResult` record
//! - **error**: Error types and the `ErrorKind` taxonomy
//! - **config**: Registry URL and timeout configuration
//! - **server**: MCP protocol server exposing validation and lookup tools
//!
//! # Example
//!
//! ```
//! use abn_lookup::{validate, ErrorKind};
//!
//! assert!(validate("51824753556").is_ok());
//! assert_eq!(validate("87007382031").unwrap_err().kind(), ErrorKind::InvalidChecksum);
//! ```

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod server;

pub use client::{AsyncRegistryClient, AsyncRegistryClientImpl, RegistryClient, Transport};
pub use config::Config;
pub use domain::{validate, Abn, ValidationError};
pub use error::{AbnLookupError, AbnResult, ConfigError, ErrorKind};
pub use models::LookupResult;
pub use server::AbnMcpServer;

/// Fetch the registered legal name for `abn` from the public registry.
///
/// Validates first and makes no request if validation fails. Uses a client built
/// from `Config::default()`; construct a [`RegistryClient`] to change the registry
/// URL, timeout, or transport.
pub fn fetch(abn: &str) -> AbnResult<LookupResult> {
    RegistryClient::default().fetch(abn)
}

/// Check that `abn` is registered, without returning its details.
pub fn lookup(abn: &str) -> AbnResult<()> {
    RegistryClient::default().lookup(abn)
}
