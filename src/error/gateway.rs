//! Errors raised by the remote data gateway.

use thiserror::Error;

use crate::traits::HttpError;

/// Failure of a single gateway operation.
///
/// Every variant records the operation that failed (`"list_users"`,
/// `"delete_post"`, ...) so the status bar and the log can say what broke.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The request never produced a response (connect failure, timeout, bad URL).
    #[error("{operation}: {source}")]
    Network {
        operation: &'static str,
        #[source]
        source: HttpError,
    },

    /// The response body was not the JSON we expected.
    #[error("{operation}: failed to decode response: {message}")]
    Decode {
        operation: &'static str,
        message: String,
    },

    /// The server answered 404.
    #[error("{operation}: not found ({url})")]
    NotFound { operation: &'static str, url: String },

    /// Any other non-2xx answer.
    #[error("{operation}: HTTP {status}: {message}")]
    Status {
        operation: &'static str,
        status: u16,
        message: String,
    },
}

impl GatewayError {
    /// Name of the operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            GatewayError::Network { operation, .. }
            | GatewayError::Decode { operation, .. }
            | GatewayError::NotFound { operation, .. }
            | GatewayError::Status { operation, .. } => operation,
        }
    }

    /// Check if this error is likely transient and can be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            GatewayError::Network { source, .. } => !matches!(source, HttpError::InvalidUrl(_)),
            GatewayError::Status { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            GatewayError::Decode { .. } | GatewayError::NotFound { .. } => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Network { source, .. } => match source {
                HttpError::Timeout(_) => {
                    "The server took too long to answer. Press r to try again.".to_string()
                }
                HttpError::InvalidUrl(_) => {
                    "The configured API URL is invalid. Check --base-url.".to_string()
                }
                _ => "Unable to reach the server. Check your internet connection.".to_string(),
            },
            GatewayError::Decode { .. } => {
                "Received an unexpected response from the server.".to_string()
            }
            GatewayError::NotFound { .. } => "The requested item no longer exists.".to_string(),
            GatewayError::Status { status, .. } => match *status {
                500..=599 => "The server is experiencing issues. Please try again later.".to_string(),
                _ => format!("The server rejected the request (HTTP {}).", status),
            },
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            GatewayError::Network { source, .. } => match source {
                HttpError::Timeout(_) => "E_NET_TIMEOUT",
                HttpError::ConnectionFailed(_) => "E_NET_CONN",
                HttpError::InvalidUrl(_) => "E_NET_URL",
                HttpError::Other(_) => "E_NET_OTHER",
            },
            GatewayError::Decode { .. } => "E_DECODE",
            GatewayError::NotFound { .. } => "E_NOT_FOUND",
            GatewayError::Status { .. } => "E_HTTP_STATUS",
        }
    }
}
