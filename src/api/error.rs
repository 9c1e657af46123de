use crate::auth::AuthError;

/// Classified failure from a catalog API call
///
/// Every failed request is returned to the caller as one of these variants;
/// nothing is silently swallowed. Callers are expected to render a retry
/// affordance on any of them.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request deadline elapsed before a response arrived
    #[error("request to {endpoint} timed out")]
    Timeout { endpoint: String },

    /// The request failed without producing an HTTP response
    #[error("network error - please check your connection")]
    Network {
        endpoint: String,
        #[source]
        source: anyhow::Error,
    },

    /// The service answered with a non-2xx status
    #[error("{message}")]
    Upstream {
        status: u16,
        message: String,
        endpoint: String,
    },

    /// A 2xx response whose body did not match the expected shape
    #[error("unexpected response from {endpoint}: {message}")]
    Unexpected { endpoint: String, message: String },

    /// Fetching the bearer token itself failed
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl ApiError {
    /// Numeric status for error rendering
    ///
    /// 408 for timeouts, 0 for network failures with no HTTP response, the
    /// upstream status for HTTP errors, 500 when unclassified.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Timeout { .. } => 408,
            ApiError::Network { .. } => 0,
            ApiError::Upstream { status, .. } => *status,
            ApiError::Unexpected { .. } => 500,
            ApiError::Auth(err) => err.status(),
        }
    }
}
