//! Error types for the Stacksmith client and CLI

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for Stacksmith operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

impl Error {
    /// The application-level error envelope, if this error carries one.
    pub fn api_body(&self) -> Option<&ApiErrorBody> {
        match self {
            Error::Api(ApiError::Response { body, .. }) => Some(body),
            _ => None,
        }
    }
}

/// Error envelope returned by the Stacksmith API: `{"status": "...", "error": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorBody {
    /// Status reported by the API (e.g. "404")
    pub status: String,

    /// Human readable message
    #[serde(rename = "error")]
    pub message: String,
}

impl ApiErrorBody {
    /// True when neither the status nor the message carry anything.
    pub fn is_empty(&self) -> bool {
        self.status.is_empty() && self.message.is_empty()
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a readable response.
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with its error envelope.
    #[error("stacksmith: {} {}", .body.status, .body.message)]
    Response { code: u16, body: ApiErrorBody },

    /// Non-success status without a recognizable error envelope.
    #[error("Unexpected status code {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// The request could not be encoded.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("API key not configured. Run `stacksmith init` or pass --api-key.")]
    MissingApiKey,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network(format!("Failed to connect to API: {}", err))
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `stacksmith init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("API key not configured. Run `stacksmith init` to set up your API key.")]
    MissingApiKey,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
