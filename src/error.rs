// src/error.rs
use reqwest::StatusCode;

/// Failure of a single round trip against the backend.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Non-2xx response. Displays as the raw response body.
    #[error("{body}")]
    Status { status: StatusCode, body: String },

    /// Connection, DNS or body read failure.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// 2xx response whose body does not match the expected shape.
    #[error("invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RequestError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            RequestError::Transport(e) => e.status(),
            RequestError::Decode(_) => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid API_BASE '{value}': {source}")]
    InvalidBaseUrl {
        value: String,
        source: url::ParseError,
    },

    #[error("API_BASE must be an http(s) URL, got '{0}'")]
    UnsupportedScheme(String),
}
