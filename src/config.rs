// src/config.rs
use std::env;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
}

impl ClientConfig {
    /// Reads `API_BASE` once. Unset or empty falls back to the local backend.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = env::var("API_BASE").unwrap_or_default();
        Self::from_base(&raw)
    }

    pub fn from_base(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self { api_base: DEFAULT_API_BASE.to_string() });
        }

        let parsed = url::Url::parse(trimmed).map_err(|source| ConfigError::InvalidBaseUrl {
            value: trimmed.to_string(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(trimmed.to_string()));
        }

        // Paths are appended verbatim, so keep the prefix free of a trailing slash.
        Ok(Self { api_base: trimmed.trim_end_matches('/').to_string() })
    }
}
