//! Error Types

use thiserror::Error;

/// Result type alias for pay page operations
pub type Result<T> = std::result::Result<T, PayError>;

/// Errors surfaced by the pay page API calls
#[derive(Error, Debug)]
pub enum PayError {
    /// Backend answered with a non-2xx status
    #[error("Request failed with status {status}")]
    Http { status: u16 },

    /// Request never reached the backend (connectivity, CORS, aborted)
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not the expected JSON shape
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl PayError {
    /// Check if retrying the same request could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            PayError::Network(_) => true,
            PayError::Http { status } => *status >= 500,
            PayError::Decode(_) => false,
        }
    }

    /// User-facing message; never leaks status codes or body detail
    pub fn user_message(&self) -> &'static str {
        match self {
            PayError::Http { .. } | PayError::Decode(_) => {
                "The payment service returned an error. Please try again."
            }
            PayError::Network(_) => "Could not reach the payment service. Please try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_carries_status() {
        let err = PayError::Http { status: 404 };
        assert_eq!(err.to_string(), "Request failed with status 404");
        assert!(!err.is_retryable());
        assert!(PayError::Http { status: 503 }.is_retryable());
    }

    #[test]
    fn test_user_message_is_generic() {
        let err = PayError::Decode("missing field `checkoutUrl`".into());
        assert!(!err.user_message().contains("checkoutUrl"));
    }
}
