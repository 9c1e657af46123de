//! HTTP client abstraction for the catalog API
//!
//! This module provides a trait-based HTTP client that can be easily mocked
//! for testing. Responses are returned raw (status + body) so callers can
//! implement their own status handling, such as the 401 retry.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::HeaderMap;

/// Trait for making HTTP requests
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Makes a GET request and returns the raw response
    ///
    /// An `Err` means no HTTP response was produced at all (a transport
    /// failure); HTTP-level errors come back as an `HttpResponse` with a
    /// non-2xx status.
    async fn get_response(&self, url: &str, headers: &HeaderMap) -> Result<HttpResponse>;
}

/// Response from an HTTP request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Returns true if status is in 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns true if status is 401
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Canonical reason phrase for the status code
    pub fn status_text(&self) -> &'static str {
        reqwest::StatusCode::from_u16(self.status)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or("Unknown error occurred")
    }
}

/// Production HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new reqwest-based HTTP client
    ///
    /// Deadlines are enforced by the callers, so the underlying client has
    /// no timeout of its own.
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get_response(&self, url: &str, headers: &HeaderMap) -> Result<HttpResponse> {
        let response = self
            .inner
            .get(url)
            .headers(headers.clone())
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        Ok(HttpResponse { status, body })
    }
}
