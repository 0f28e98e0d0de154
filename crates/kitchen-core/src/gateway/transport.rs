//! Network transport behind the gateway
//!
//! The gateway never talks to `reqwest` directly; it hands a fully built
//! [`ApiRequest`] to a [`Transport`]. Tests substitute scripted transports.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, Url};

use super::response::RawResponse;
use crate::error::{Error, Result};

/// A request ready to go on the wire
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    /// JSON-encoded body, for POST and PUT
    pub body: Option<Vec<u8>>,
}

/// Performs the raw HTTP exchange
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and buffer the full response
    ///
    /// Failures to obtain a response are [`Error::Transport`]; any HTTP status,
    /// including 4xx/5xx, is a successful exchange at this level.
    async fn send(&self, request: ApiRequest) -> Result<RawResponse>;
}

/// `reqwest`-backed transport with a per-request deadline
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(RawResponse::new(status, headers, body.to_vec()))
    }
}
