//! Common error types for the session and catalog core

use thiserror::Error;

/// Standard result type for auth operations
pub type AuthResult<T> = std::result::Result<T, AuthError>;

/// Failures surfaced by the auth session manager
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Refresh token expired")]
    RefreshExpired,

    #[error("Invalid refresh token")]
    RefreshInvalid,

    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Whether this failure should silently end the session
    pub fn is_refresh_failure(&self) -> bool {
        matches!(self, Self::RefreshExpired | Self::RefreshInvalid)
    }
}

/// Failures from the durable key-value backing store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Storage is not available")]
    Unavailable,

    #[error("Failed to write {key}: {message}")]
    Write { key: String, message: String },
}

impl StorageError {
    /// Create a write error
    pub fn write(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Write {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Errors loading application configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}

impl ConfigError {
    /// Create an invalid config error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}
