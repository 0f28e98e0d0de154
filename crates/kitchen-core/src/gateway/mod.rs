//! Request gateway - the only component that performs network I/O
//!
//! Every verb follows the same path:
//! 1. base URL + endpoint (+ encoded query for GET)
//! 2. `Content-Type: application/json`, plus `Authorization: Bearer <token>`
//!    when the session store holds a token
//! 3. one call through the [`Transport`]
//! 4. [`normalize`] the response into JSON, a raw response, or an error
//!
//! No retries, no queuing: concurrent calls are independent.

pub mod response;
pub mod transport;


use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::session::SessionStore;

pub use response::{normalize, status_message, ApiResponse, RawResponse};
pub use transport::{ApiRequest, ReqwestTransport, Transport};

/// Empty query parameter list for plain GETs
pub const NO_PARAMS: [(&str, &str); 0] = [];

/// Builds, sends and normalizes every API call
#[derive(Clone)]
pub struct Gateway {
    config: ApiConfig,
    session: SessionStore,
    transport: Arc<dyn Transport>,
}

impl Gateway {
    /// Gateway over a `reqwest` transport honouring `config.timeout`
    pub fn new(config: ApiConfig, session: SessionStore) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(Self::with_transport(config, session, Arc::new(transport)))
    }

    pub fn with_transport(
        config: ApiConfig,
        session: SessionStore,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            config,
            session,
            transport,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// GET with query parameters appended in iteration order
    pub async fn get<I, K, V>(&self, endpoint: &str, params: I) -> Result<ApiResponse>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: ToString,
    {
        let params: Vec<(String, String)> = params
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.to_string()))
            .collect();
        let request = self.build_request(Method::GET, endpoint, &params, None)?;
        self.execute(request).await
    }

    pub async fn post<B>(&self, endpoint: &str, body: &B) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(body)?;
        let request = self.build_request(Method::POST, endpoint, &[], Some(body))?;
        self.execute(request).await
    }

    /// POST with an empty JSON object as the body
    pub async fn post_empty(&self, endpoint: &str) -> Result<ApiResponse> {
        self.post(endpoint, &serde_json::json!({})).await
    }

    pub async fn put<B>(&self, endpoint: &str, body: &B) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(body)?;
        let request = self.build_request(Method::PUT, endpoint, &[], Some(body))?;
        self.execute(request).await
    }

    /// PUT with an empty JSON object as the body
    pub async fn put_empty(&self, endpoint: &str) -> Result<ApiResponse> {
        self.put(endpoint, &serde_json::json!({})).await
    }

    pub async fn delete(&self, endpoint: &str) -> Result<ApiResponse> {
        let request = self.build_request(Method::DELETE, endpoint, &[], None)?;
        self.execute(request).await
    }

    /// Resolve the URL and headers for a call without sending it
    pub fn build_request(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(String, String)],
        body: Option<Vec<u8>>,
    ) -> Result<ApiRequest> {
        let url = self.resolve_url(endpoint, params)?;
        Ok(ApiRequest {
            method,
            url,
            headers: self.headers(),
            body,
        })
    }

    fn resolve_url(&self, endpoint: &str, params: &[(String, String)]) -> Result<Url> {
        let target = self.config.url_for(endpoint);
        let mut url = Url::parse(&target)
            .map_err(|e| Error::config(format!("Invalid request URL '{}': {}", target, e)))?;

        if !params.is_empty() {
            let mut query = url.query_pairs_mut();
            for (key, value) in params {
                query.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// JSON content type always; bearer authorization when a token is stored
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.session.get_token() {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => {
                    log::warn!("[gateway] Stored token is not a valid header value, omitting it");
                }
            }
        }

        headers
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let method = request.method.clone();
        let url = request.url.clone();
        log::debug!("[gateway] {} {}", method, url);

        let result = match self.transport.send(request).await {
            Ok(raw) => {
                log::debug!("[gateway] {} {} -> HTTP {}", method, url, raw.status);
                normalize(raw)
            }
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            log::warn!("[gateway] {} request failed: {}", method, e);
        }

        result
    }
}
