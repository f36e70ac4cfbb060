//! HTTP client for the ABN Lookup registry.
//!
//! This module provides a synchronous client that can be used from async contexts
//! via `tokio::task::spawn_blocking` (see [`AsyncRegistryClientImpl`]). Every fetch
//! validates the ABN locally first and only then issues a single GET for the
//! registry's details page, which is classified by [`RegistryPage`].

mod async_wrapper;
pub mod page;
pub mod transport;

pub use async_wrapper::{AsyncRegistryClient, AsyncRegistryClientImpl};
pub use page::RegistryPage;
pub use transport::{HttpResponse, Transport, UreqTransport};

use crate::config::Config;
use crate::domain::validate;
use crate::error::{AbnLookupError, AbnResult};
use crate::models::LookupResult;
use std::sync::Arc;
use std::time::Duration;

/// Client for the ABN Lookup registry.
///
/// Holds no mutable state; clones share the underlying transport.
#[derive(Clone)]
pub struct RegistryClient {
    /// Base URL for the registry
    base_url: String,

    /// Transport used for the single GET per lookup
    transport: Arc<dyn Transport>,
}

impl RegistryClient {
    /// Create a RegistryClient from configuration.
    pub fn new(config: &Config) -> Self {
        let transport = UreqTransport::new(Duration::from_secs(config.request_timeout));

        Self {
            base_url: config.registry_url.clone(),
            transport: Arc::new(transport),
        }
    }

    /// Create a RegistryClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            transport: Arc::new(UreqTransport::new(Duration::from_secs(10))),
        }
    }

    /// Create a RegistryClient that sends its requests through `transport`.
    pub fn with_transport(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    /// Build the details page URL for an ABN.
    fn build_url(&self, abn: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{}/ABN/View?abn={}", base, urlencoding::encode(abn))
    }

    /// Validate `abn`, fetch its registry page, and extract the legal name.
    ///
    /// # Errors
    ///
    /// - `AbnLookupError::Validation` if the ABN fails local validation; no request is made
    /// - `AbnLookupError::Transport` if the request could not be performed
    /// - `AbnLookupError::UnexpectedStatus` if the registry answers with anything but 200
    /// - `AbnLookupError::Parse` if the body is empty
    /// - `AbnLookupError::RecordNotFound`, `InvalidAbn` or `UnknownResponse` depending on the page
    pub fn fetch(&self, abn: &str) -> AbnResult<LookupResult> {
        validate(abn)?;

        let url = self.build_url(abn);
        tracing::debug!("GET {}", url);

        let response = self
            .transport
            .get(&url)
            .inspect_err(|e| tracing::debug!("GET {} - Error: {}", url, e))?;

        if response.status != 200 {
            tracing::debug!("GET {} - Unexpected status {}", url, response.status);
            return Err(AbnLookupError::UnexpectedStatus {
                status: response.status,
                status_text: response.status_text,
            });
        }

        let page = RegistryPage::from_body(&response.body)?;
        if page == RegistryPage::Unknown {
            tracing::warn!("Unrecognised registry page for ABN {}", abn);
        } else {
            tracing::debug!("Registry page for ABN {} classified as {:?}", abn, page);
        }

        let name = page.into_legal_name()?;
        Ok(LookupResult::new(abn, name))
    }

    /// Check that `abn` is registered, discarding the looked-up details.
    pub fn lookup(&self, abn: &str) -> AbnResult<()> {
        self.fetch(abn).map(|_| ())
    }
}

impl Default for RegistryClient {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
