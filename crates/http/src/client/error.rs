//! Client error types

use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Server answered with a non-success status
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    /// Transport failure before a response arrived
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body is not the expected JSON
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        Self::Http {
            status: status.as_u16(),
            message,
        }
    }

    /// Status code for [`ClientError::Http`]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short text for the in-page error panel
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { status, .. } => format!("HTTP error! status: {status}"),
            Self::Network(_) => "Network error, check your connection".to_string(),
            Self::Decode(_) => "Received an unexpected response".to_string(),
            Self::Configuration(message) => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        let err = ClientError::from_status(reqwest::StatusCode::NOT_FOUND, "missing".to_string());
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.user_message(), "HTTP error! status: 404");
        assert_eq!(err.to_string(), "HTTP error 404: missing");
    }

    #[test]
    fn test_status_only_for_http_errors() {
        let err = ClientError::Configuration("bad url".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.user_message(), "bad url");
    }
}
