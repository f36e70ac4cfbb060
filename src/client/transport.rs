//! HTTP transport seam for registry requests.
//!
//! The registry client only ever needs "GET this URL, give me status and body".
//! Keeping that behind a trait lets tests substitute a recording transport.

use crate::error::{AbnLookupError, AbnResult};
use std::time::Duration;

/// A fully read HTTP response.
///
/// The body has already been drained from the connection, so holding one of
/// these never keeps a socket open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,

    /// Reason phrase accompanying the status
    pub status_text: String,

    /// Response body decoded as text
    pub body: String,
}

impl HttpResponse {
    /// Build a `200 OK` response with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            status_text: "OK".to_string(),
            body: body.into(),
        }
    }
}

/// Performs a single blocking GET request.
pub trait Transport: Send + Sync {
    /// Fetch `url`.
    ///
    /// Non-2xx answers are returned as responses, not errors; only a failure to
    /// complete the exchange is an `AbnLookupError::Transport`.
    fn get(&self, url: &str) -> AbnResult<HttpResponse>;
}

/// Transport backed by a `ureq` agent.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Create a transport whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self { agent }
    }

    /// Drain a ureq response into an owned `HttpResponse`.
    fn read(response: ureq::Response) -> AbnResult<HttpResponse> {
        let status = response.status();
        let status_text = response.status_text().to_string();
        let body = response
            .into_string()
            .map_err(|e| AbnLookupError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str) -> AbnResult<HttpResponse> {
        match self.agent.get(url).call() {
            Ok(response) => Self::read(response),
            // ureq reports 4xx/5xx as errors; the caller decides what a status means
            Err(ureq::Error::Status(_, response)) => Self::read(response),
            Err(ureq::Error::Transport(transport)) => {
                Err(AbnLookupError::Transport(transport.to_string()))
            }
        }
    }
}
