//! Scripted transport shared by unit tests

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::gateway::{ApiRequest, Gateway, RawResponse, Transport};
use crate::session::SessionStore;

/// Mock transport: replays queued responses and records every request
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<RawResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_json(self, status: u16, body: Value) -> Self {
        self.push(Ok(json_response(status, &body)));
        self
    }

    pub fn respond_raw(self, response: RawResponse) -> Self {
        self.push(Ok(response));
        self
    }

    pub fn fail_transport(self, msg: &str) -> Self {
        self.push(Err(Error::transport(msg)));
        self
    }

    fn push(&self, response: Result<RawResponse>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::transport("no scripted response")))
    }
}

pub fn json_response(status: u16, body: &Value) -> RawResponse {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    RawResponse::new(status, headers, serde_json::to_vec(body).unwrap())
}

pub fn test_config() -> ApiConfig {
    ApiConfig::default().with_base_url("http://api.test/api")
}

/// Gateway over an in-memory session and the given mock
pub fn mock_gateway(transport: MockTransport) -> (Gateway, Arc<MockTransport>, SessionStore) {
    let transport = Arc::new(transport);
    let session = SessionStore::in_memory();
    let gateway = Gateway::with_transport(test_config(), session.clone(), transport.clone());
    (gateway, transport, session)
}
