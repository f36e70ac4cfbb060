use abn_lookup::client::{HttpResponse, Transport};
use abn_lookup::error::{AbnLookupError, AbnResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock transport for testing.
///
/// Serves canned responses keyed by URL and records every request it receives.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<HashMap<String, HttpResponse>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_response(&self, url: &str, response: HttpResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    pub fn add_page(&self, url: &str, body: &str) {
        self.add_response(url, HttpResponse::ok(body));
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn reset(&self) {
        self.requests.lock().unwrap().clear();
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &str) -> AbnResult<HttpResponse> {
        self.requests.lock().unwrap().push(url.to_string());

        let responses = self.responses.lock().unwrap();
        responses
            .get(url)
            .cloned()
            .ok_or_else(|| AbnLookupError::Transport(format!("no mock response for {}", url)))
    }
}
