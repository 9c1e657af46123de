//! Bearer token cache for the catalog API
//!
//! The token is ephemeral: fetched on demand from the auth endpoint, held in
//! process memory, and never written to disk. At most one token is cached at
//! a time.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::HeaderMap;
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::api::http::HttpClient;

/// Errors from fetching the bearer token
///
/// All of these are terminal for the call that hit them; the fetch pipeline
/// decides whether to try again at a higher level.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The auth endpoint answered with a non-2xx status
    #[error("failed to fetch auth token: {status} {status_text}")]
    Fetch { status: u16, status_text: String },

    /// The auth request exceeded its deadline
    #[error("auth token request timed out")]
    Timeout,

    /// The response body was missing the token field
    #[error("auth token missing from response")]
    MalformedResponse,

    /// The auth request failed without producing an HTTP response
    #[error("network error while fetching auth token")]
    Network(#[source] anyhow::Error),
}

impl AuthError {
    /// Numeric status for error rendering, matching the outer taxonomy
    pub fn status(&self) -> u16 {
        match self {
            AuthError::Fetch { status, .. } => *status,
            AuthError::Timeout => 408,
            AuthError::MalformedResponse => 500,
            AuthError::Network(_) => 0,
        }
    }
}

#[derive(Deserialize)]
struct AuthTokenResponse {
    #[serde(default)]
    token: Option<String>,
}

/// In-memory cache holding at most one bearer token
///
/// `get_token` returns the cached token or fetches a fresh one from the
/// auth endpoint. Concurrent first calls may race and fetch twice; the last
/// writer wins, which is acceptable at this call volume.
pub struct TokenCache<H: HttpClient> {
    http: H,
    token_url: String,
    timeout: Duration,
    token: Arc<RwLock<Option<String>>>,
}

impl<H: HttpClient> TokenCache<H> {
    /// Creates an empty cache fetching from `{base_url}/auth/token`
    pub fn new(http: H, base_url: &str, timeout: Duration) -> Self {
        Self {
            http,
            token_url: format!("{base_url}/auth/token"),
            timeout,
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the cached token, fetching a fresh one if none is held
    pub async fn get_token(&self) -> Result<String, AuthError> {
        if let Some(token) = self.token.read().await.clone() {
            return Ok(token);
        }

        let token = self.fetch_token().await?;
        *self.token.write().await = Some(token.clone());
        tracing::debug!("Fetched fresh auth token");
        Ok(token)
    }

    /// Unconditionally drops the cached token. Idempotent.
    pub async fn clear_token(&self) {
        *self.token.write().await = None;
    }

    async fn fetch_token(&self) -> Result<String, AuthError> {
        let mut headers = HeaderMap::new();
        headers.insert("Content-Type", "application/json".parse().unwrap());

        let request = self.http.get_response(&self.token_url, &headers);
        let response = match tokio::time::timeout(self.timeout, request).await {
            Err(_) => return Err(AuthError::Timeout),
            Ok(Err(source)) => return Err(AuthError::Network(source)),
            Ok(Ok(response)) => response,
        };

        if !response.is_success() {
            return Err(AuthError::Fetch {
                status: response.status,
                status_text: response.status_text().to_string(),
            });
        }

        let body: AuthTokenResponse =
            serde_json::from_str(&response.body).map_err(|_| AuthError::MalformedResponse)?;

        match body.token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(AuthError::MalformedResponse),
        }
    }
}

/// Test-only helpers for inspecting and seeding the cache
#[cfg(test)]
impl<H: HttpClient> TokenCache<H> {
    pub(crate) async fn seed_token(&self, token: &str) {
        *self.token.write().await = Some(token.to_string());
    }

    pub(crate) async fn cached_token(&self) -> Option<String> {
        self.token.read().await.clone()
    }
}
