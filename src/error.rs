//! Error types for the STALCRAFT client
//!
//! Every public operation returns `Result<T, Error>`. Callers can tell
//! transport failures, undecodable bodies, malformed rate-limit signals,
//! structured API errors and cancellation apart by matching on the variant.

use crate::http::RateLimitSignal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// The main error type for the client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Serialize(serde_json::Error),

    // ============================================================================
    // Request Errors
    // ============================================================================
    #[error("Sending request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Decoding {target}: {source}")]
    Decode {
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed rate limit header {header}: {message}")]
    Protocol { header: String, message: String },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("{0}")]
    RateLimited(RateLimitSignal),

    #[error("Request cancelled")]
    Cancelled,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a protocol error for a bad rate limit header
    pub fn protocol(header: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Protocol {
            header: header.into(),
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(target: &'static str, source: serde_json::Error) -> Self {
        Self::Decode { target, source }
    }

    /// Check if this error is a rate limit signal
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::RateLimited(_))
    }

    /// Check if the request was cancelled by the caller
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }

    /// HTTP status carried by an API error, if any
    pub fn api_status(&self) -> Option<u16> {
        match self {
            Error::Api(e) => Some(e.status),
            _ => None,
        }
    }
}

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, Error>;

/// Structured error body returned by the API for non-200, non-429 responses
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub title: String,
    pub status: u16,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub details: HashMap<String, Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<HashMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (status {})", self.title, self.status)?;
        if !self.details.is_empty() {
            let details = serde_json::to_string(&self.details).map_err(|_| fmt::Error)?;
            write!(f, ": {details}")?;
        }
        Ok(())
    }
}
