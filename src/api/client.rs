use std::time::Duration;

use reqwest::header::HeaderMap;

use super::error::ApiError;
use super::http::{HttpClient, HttpResponse, ReqwestClient};
use super::types::{Genre, Movie, MovieQuery, Page};
use crate::auth::TokenCache;
use crate::config::Config;

/// Client for the movie catalog API
///
/// Generic over the HTTP client implementation for testability. Every call
/// is authenticated: a bearer token is fetched on demand through the token
/// cache, and a 401 response clears the cache and retries the request once
/// with a fresh token.
pub struct CatalogClient<H: HttpClient = ReqwestClient> {
    http: H,
    tokens: TokenCache<H>,
    base_url: String,
    timeout: Duration,
    default_page: u32,
    default_limit: u32,
}

impl CatalogClient<ReqwestClient> {
    /// Creates a new catalog client with the default HTTP implementation
    pub fn new(config: &Config) -> Self {
        let http = ReqwestClient::new();
        Self {
            tokens: TokenCache::new(http.clone(), &config.base_url, config.timeout()),
            http,
            base_url: config.base_url.clone(),
            timeout: config.timeout(),
            default_page: config.default_page,
            default_limit: config.default_limit,
        }
    }
}

impl<H: HttpClient> CatalogClient<H> {
    /// Drops the cached bearer token, forcing a fresh auth fetch on the
    /// next request
    pub async fn clear_auth(&self) {
        self.tokens.clear_token().await;
    }

    /// Builds the headers for an authenticated request
    fn build_headers(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Authorization",
            format!("Bearer {token}").parse().unwrap(),
        );
        headers.insert("Content-Type", "application/json".parse().unwrap());
        headers
    }

    /// Makes an authenticated GET request against the catalog API
    ///
    /// Runs at most two attempts: a 401 on the first clears the cached
    /// token and the request repeats with a freshly fetched one; a 401 on
    /// the second surfaces to the caller. Timeouts and network failures are
    /// never retried, since they are not token-related.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut retry = true;

        loop {
            let token = self.tokens.get_token().await?;
            let headers = Self::build_headers(&token);

            let request = self.http.get_response(&url, &headers);
            let response = match tokio::time::timeout(self.timeout, request).await {
                Err(_) => {
                    return Err(ApiError::Timeout {
                        endpoint: endpoint.to_string(),
                    })
                }
                Ok(Err(source)) => {
                    return Err(ApiError::Network {
                        endpoint: endpoint.to_string(),
                        source,
                    })
                }
                Ok(Ok(response)) => response,
            };

            if response.is_unauthorized() && retry {
                tracing::info!("Got 401 from {}, refreshing auth token and retrying", endpoint);
                self.tokens.clear_token().await;
                retry = false;
                continue;
            }

            if !response.is_success() {
                return Err(ApiError::Upstream {
                    status: response.status,
                    message: parse_error_message(&response),
                    endpoint: endpoint.to_string(),
                });
            }

            return serde_json::from_str(&response.body).map_err(|err| ApiError::Unexpected {
                endpoint: endpoint.to_string(),
                message: err.to_string(),
            });
        }
    }
}

/// Extracts a human-readable message from an error response body
///
/// Tries the JSON `message` and `error` fields, falling back to the
/// canonical status text.
fn parse_error_message(response: &HttpResponse) -> String {
    if let Ok(body) = serde_json::from_str::<serde_json::Value>(&response.body) {
        for key in ["message", "error"] {
            if let Some(message) = body.get(key).and_then(serde_json::Value::as_str) {
                return message.to_string();
            }
        }
    }
    response.status_text().to_string()
}

/// Ordered query-string builder
///
/// Preserves insertion order, drops unset values, and percent-encodes the
/// rest.
#[derive(Debug, Default)]
struct QueryString {
    pairs: Vec<(&'static str, String)>,
}

impl QueryString {
    fn push<T: ToString>(&mut self, key: &'static str, value: Option<T>) {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
    }

    /// Renders `?a=1&b=2`, or an empty string when nothing was pushed
    fn render(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let joined = self
            .pairs
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{joined}")
    }
}

// Movie catalog methods
impl<H: HttpClient> CatalogClient<H> {
    /// Gets a page of movies, optionally searched by title and filtered by
    /// genre
    pub async fn get_movies(&self, query: &MovieQuery) -> Result<Page<Movie>, ApiError> {
        let mut params = QueryString::default();
        params.push("search", query.search.as_deref());
        params.push("genre", query.genre.as_deref());
        params.push("page", Some(query.page.unwrap_or(self.default_page)));
        params.push("limit", Some(query.limit.unwrap_or(self.default_limit)));

        self.get_json(&format!("/movies{}", params.render())).await
    }

    /// Gets a single movie by id
    ///
    /// An unknown id surfaces as an upstream error with the service's
    /// status.
    pub async fn get_movie(&self, id: &str) -> Result<Movie, ApiError> {
        self.get_json(&format!("/movies/{id}")).await
    }
}

// Genre methods
impl<H: HttpClient> CatalogClient<H> {
    /// Gets the movie genres, each carrying a partial embedded movie list
    pub async fn get_genres(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Page<Genre>, ApiError> {
        let mut params = QueryString::default();
        params.push("page", page);
        params.push("limit", limit);

        self.get_json(&format!("/genres/movies{}", params.render()))
            .await
    }
}

/// Test-only constructor for dependency injection
#[cfg(test)]
impl<H: HttpClient + Clone> CatalogClient<H> {
    /// Creates a new catalog client with a custom HTTP implementation
    pub fn with_http_client(config: &Config, http: H) -> Self {
        Self {
            tokens: TokenCache::new(http.clone(), &config.base_url, config.timeout()),
            http,
            base_url: config.base_url.clone(),
            timeout: config.timeout(),
            default_page: config.default_page,
            default_limit: config.default_limit,
        }
    }
}
