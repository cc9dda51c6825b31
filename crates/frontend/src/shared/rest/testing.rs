//! Scripted transport for store and workflow tests.

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use super::{ApiError, HttpMethod, HttpRequest, HttpResponse, HttpTransport, RestApi};
use crate::system::auth::storage::MemoryTokens;

pub const TEST_BASE: &str = "http://wallet.test/api/v1";

type Scripted = Result<HttpResponse, ApiError>;

/// Answers requests from per-route queues and records every call.
///
/// The last queued answer of a route is repeated once the queue drains.
#[derive(Default)]
pub struct MockTransport {
    routes: RefCell<HashMap<(HttpMethod, String), VecDeque<Scripted>>>,
    calls: RefCell<Vec<HttpRequest>>,
    tokens: Rc<MemoryTokens>,
}

impl MockTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn tokens(&self) -> Rc<MemoryTokens> {
        self.tokens.clone()
    }

    pub fn respond(&self, method: HttpMethod, path: &str, status: u16, body: serde_json::Value) {
        self.respond_raw(method, path, status, &body.to_string());
    }

    pub fn respond_raw(&self, method: HttpMethod, path: &str, status: u16, body: &str) {
        self.push(
            method,
            path,
            Ok(HttpResponse {
                status,
                body: body.to_string(),
            }),
        );
    }

    pub fn fail(&self, method: HttpMethod, path: &str, error: ApiError) {
        self.push(method, path, Err(error));
    }

    pub fn calls(&self) -> Vec<HttpRequest> {
        self.calls.borrow().clone()
    }

    pub fn calls_to(&self, method: HttpMethod, path: &str) -> Vec<HttpRequest> {
        let url = format!("{}{}", TEST_BASE, path);
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.method == method && call.url == url)
            .cloned()
            .collect()
    }

    fn push(&self, method: HttpMethod, path: &str, answer: Scripted) {
        self.routes
            .borrow_mut()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(answer);
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.calls.borrow_mut().push(request.clone());

        let path = request
            .url
            .strip_prefix(TEST_BASE)
            .unwrap_or(&request.url)
            .to_string();
        let mut routes = self.routes.borrow_mut();
        let queue = routes
            .get_mut(&(request.method, path.clone()))
            .ok_or_else(|| ApiError::Network(format!("no scripted answer for {}", path)))?;
        let answer = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };
        answer.unwrap_or_else(|| Err(ApiError::Network(format!("no scripted answer for {}", path))))
    }
}

/// `RestApi` over `mock` with the test base URL
pub fn rest_api(mock: &Rc<MockTransport>) -> RestApi {
    RestApi::new(TEST_BASE, mock.clone(), mock.tokens())
}
