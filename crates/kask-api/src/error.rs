//! Error types for the Kask API client.

use thiserror::Error;

/// Kask API errors.
///
/// Only the tap and keg calls produce these. Artwork failures are logged and
/// dropped by [`crate::KaskClient::fetch_image`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("{url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Body was not the JSON shape we expected
    #[error("Could not decode {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Client could not be constructed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Create a decode error for the given response context.
    pub fn decode(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            context: context.into(),
            source,
        }
    }

    /// Check if this error is a network-related error.
    pub fn is_network_error(&self) -> bool {
        match self {
            ApiError::Http(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            ApiError::Status { status, .. } => status.is_server_error(),
            _ => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn friendly_message(&self) -> String {
        match self {
            ApiError::Http(e) if e.is_timeout() => {
                "The Kask API did not answer in time. Check your connection.".to_string()
            }
            ApiError::Http(e) if e.is_connect() => {
                "Could not reach the Kask API. Check the URL and your network.".to_string()
            }
            ApiError::Status { status, .. } if status.as_u16() == 404 => {
                "The Kask API URL looks wrong (404). Check --kask-url.".to_string()
            }
            ApiError::Decode { context, .. } => {
                format!("The Kask API sent an unexpected {context} response.")
            }
            _ => self.to_string(),
        }
    }
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error() -> ApiError {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        ApiError::decode("tap list", source)
    }

    #[test]
    fn test_decode_error_message() {
        let err = decode_error();
        assert!(err.to_string().starts_with("Could not decode tap list"));
        assert!(!err.is_network_error());
        assert!(err.friendly_message().contains("tap list"));
    }

    #[test]
    fn test_status_error_classification() {
        let not_found = ApiError::Status {
            url: "http://kask/beers/taps".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert!(!not_found.is_network_error());
        assert!(not_found.friendly_message().contains("404"));

        let unavailable = ApiError::Status {
            url: "http://kask/beers/taps".to_string(),
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
        };
        assert!(unavailable.is_network_error());
        assert!(unavailable.to_string().contains("503"));
    }

    #[test]
    fn test_fallback_message_has_no_prefix() {
        let err = ApiError::Config("boom".to_string());
        assert_eq!(err.friendly_message(), "Configuration error: boom");
    }
}
