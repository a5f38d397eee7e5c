//! Error types for the Schematics SDK
//!
//! This module defines the error hierarchy for the entire SDK.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use crate::http::RawResponse;
use thiserror::Error;

/// The main error type for the Schematics SDK
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Construction Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Invalid service URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Authentication error: {message}")]
    Auth { message: String },

    #[error("Unrecognized authentication type: {auth_type}")]
    UnsupportedAuthType { auth_type: String },

    // ============================================================================
    // Validation Errors
    // ============================================================================
    #[error("Missing required parameter: {field}")]
    Validation { field: String },

    #[error("service URL missing: set a non-empty service URL before making requests")]
    ServiceUrlMissing,

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("context deadline exceeded")]
    DeadlineExceeded,

    #[error("context cancelled")]
    Cancelled,

    // ============================================================================
    // Remote Errors
    // ============================================================================
    #[error("HTTP {status}: {message}")]
    Service {
        status: u16,
        message: String,
        response: Box<RawResponse>,
    },

    // ============================================================================
    // Serialization Errors
    // ============================================================================
    #[error("Failed to decode response body: {source}")]
    Deserialize {
        #[source]
        source: serde_json::Error,
        response: Box<RawResponse>,
    },

    #[error("Failed to encode request body: {0}")]
    JsonEncode(#[source] serde_json::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create a missing required parameter error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
        }
    }

    /// The raw HTTP response attached to remote and decoding errors
    pub fn response(&self) -> Option<&RawResponse> {
        match self {
            Error::Service { response, .. } | Error::Deserialize { response, .. } => {
                Some(response)
            }
            _ => None,
        }
    }

    /// HTTP status code, when the error came from a server response
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Service { status, .. } => Some(*status),
            Error::Deserialize { response, .. } => Some(response.status_code),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(e) => e.is_timeout() || e.is_connect(),
            Error::Service { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
pub(crate) fn is_retryable_status(status: u16) -> bool {
    status == 429 || (status >= 500 && status != 501)
}

/// Result type alias for the Schematics SDK
pub type Result<T> = std::result::Result<T, Error>;
