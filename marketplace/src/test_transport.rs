use crate::error::SyncError;
use crate::transport::{ApiRequest, ApiResponse, Transport};
use reqwest::{Method, StatusCode};
use std::sync::{Arc, Mutex};

/// In-memory `Transport` for unit tests: answers from stubbed rules and
/// records every request in dispatch order. Clones share state, so a test
/// can keep one handle while the client under test owns another.
#[derive(Clone)]
pub struct TestTransport {
    state: Arc<Mutex<State>>,
}

#[derive(Default)]
struct State {
    rules: Vec<StubRule>,
    requests: Vec<ApiRequest>,
}

struct StubRule {
    method: Method,
    path: String,
    status: StatusCode,
    body: String,
}

impl TestTransport {
    pub fn new() -> TestTransport {
        TestTransport {
            state: Arc::new(Mutex::new(State::default())),
        }
    }

    /// Register a canned response for requests whose URL contains `path`.
    /// Later stubs win, so a test can override an earlier rule.
    pub fn stub(&self, method: Method, path: &str, status: StatusCode, body: &str) {
        let mut state = self.state.lock().expect("test transport state poisoned");
        state.rules.push(StubRule {
            method,
            path: path.to_string(),
            status,
            body: body.to_string(),
        });
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        let state = self.state.lock().expect("test transport state poisoned");
        state.requests.clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<ApiRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.url.contains(path))
            .collect()
    }
}

impl Transport for TestTransport {
    fn dispatch(&self, request: ApiRequest) -> Result<ApiResponse, SyncError> {
        let mut state = self.state.lock().map_err(|_| SyncError::ConcurrencyError)?;
        let response = state
            .rules
            .iter()
            .rev()
            .find(|rule| rule.method == request.method && request.url.contains(&rule.path))
            .map(|rule| ApiResponse {
                status: rule.status,
                body: rule.body.clone(),
            })
            .unwrap_or_else(|| ApiResponse {
                status: StatusCode::NOT_FOUND,
                body: format!("no stub registered for {} {}", request.method, request.url),
            });
        state.requests.push(request);
        Ok(response)
    }

    fn box_clone(&self) -> Box<dyn Transport + Send + Sync> {
        Box::new(self.clone())
    }
}
