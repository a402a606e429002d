//! HTTP transport abstraction.
//!
//! The pipeline talks to the network only through [`Transport`] (blocking)
//! and [`AsyncTransport`] (cooperative). The reqwest-backed implementations
//! are the defaults; tests substitute recording transports so request
//! shaping and error classification can be checked without a network.

use crate::config::ClientConfig;
use crate::request::{HttpResponse, PreparedRequest};
use async_trait::async_trait;
use finbrain_types::{FinBrainError, Result};
use reqwest::header::{HeaderMap, RETRY_AFTER};
use std::time::Duration;

/// Blocking HTTP transport.
pub trait Transport: Send + Sync {
    /// Send the request and return the raw response.
    ///
    /// Only failures that prevent a response (connect, timeout, body read)
    /// are errors; non-success statuses are returned as responses.
    fn execute(&self, request: &PreparedRequest) -> Result<HttpResponse>;
}

/// Non-blocking HTTP transport.
#[async_trait]
pub trait AsyncTransport: Send + Sync {
    /// Send the request and return the raw response.
    ///
    /// Dropping the returned future aborts the request.
    async fn execute(&self, request: &PreparedRequest) -> Result<HttpResponse>;
}

/// Async transport backed by [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport using the timeout and user agent of `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .build()
            .map_err(FinBrainError::transport)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl AsyncTransport for ReqwestTransport {
    async fn execute(&self, request: &PreparedRequest) -> Result<HttpResponse> {
        let response = self
            .client
            .request(request.method().into(), request.url())
            .query(&request.query_pairs())
            .timeout(request.timeout())
            .send()
            .await
            .map_err(FinBrainError::transport)?;

        let status = response.status().as_u16();
        let retry_after = retry_after(response.headers());
        let body = response.text().await.map_err(FinBrainError::transport)?;

        Ok(HttpResponse::new(status, body).with_retry_after(retry_after))
    }
}

/// Blocking transport backed by [`reqwest::blocking::Client`].
///
/// Like every reqwest blocking client it must not be created or dropped
/// inside an async runtime; use [`ReqwestTransport`] there.
#[derive(Debug, Clone)]
pub struct BlockingReqwestTransport {
    client: reqwest::blocking::Client,
}

impl BlockingReqwestTransport {
    /// Build a transport using the timeout and user agent of `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .build()
            .map_err(FinBrainError::transport)?;
        Ok(Self { client })
    }
}

impl Transport for BlockingReqwestTransport {
    fn execute(&self, request: &PreparedRequest) -> Result<HttpResponse> {
        let response = self
            .client
            .request(request.method().into(), request.url())
            .query(&request.query_pairs())
            .timeout(request.timeout())
            .send()
            .map_err(FinBrainError::transport)?;

        let status = response.status().as_u16();
        let retry_after = retry_after(response.headers());
        let body = response.text().map_err(FinBrainError::transport)?;

        Ok(HttpResponse::new(status, body).with_retry_after(retry_after))
    }
}

/// `Retry-After` given in seconds. HTTP-date values are ignored.
fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}
