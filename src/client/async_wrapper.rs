//! Async wrapper around the synchronous RegistryClient.
//!
//! This module provides an async interface to the synchronous RegistryClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::RegistryClient;
use crate::error::{AbnLookupError, AbnResult};
use crate::models::LookupResult;
use async_trait::async_trait;
use std::sync::Arc;

/// Async wrapper trait for registry lookups.
#[async_trait]
pub trait AsyncRegistryClient: Send + Sync {
    async fn fetch(&self, abn: &str) -> AbnResult<LookupResult>;
    async fn lookup(&self, abn: &str) -> AbnResult<()>;
}

/// Async wrapper around synchronous RegistryClient.
///
/// Uses `tokio::task::spawn_blocking` to run the blocking HTTP
/// request on a dedicated thread pool.
#[derive(Clone)]
pub struct AsyncRegistryClientImpl {
    client: Arc<RegistryClient>,
}

impl AsyncRegistryClientImpl {
    pub fn new(client: RegistryClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncRegistryClient for AsyncRegistryClientImpl {
    async fn fetch(&self, abn: &str) -> AbnResult<LookupResult> {
        let client = self.client.clone();
        let abn = abn.to_string();

        tokio::task::spawn_blocking(move || client.fetch(&abn))
            .await
            .map_err(|e| AbnLookupError::Transport(format!("Task join error: {}", e)))?
    }

    async fn lookup(&self, abn: &str) -> AbnResult<()> {
        self.fetch(abn).await.map(|_| ())
    }
}
