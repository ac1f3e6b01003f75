use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum NewsError {
    #[error("Network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for NewsError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            NewsError::Timeout
        } else if let Some(status) = e.status() {
            NewsError::HttpStatus {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown status").to_string(),
            }
        } else if e.is_decode() {
            NewsError::MalformedPayload(e.to_string())
        } else {
            NewsError::NetworkUnreachable(e.to_string())
        }
    }
}

impl From<serde_json::Error> for NewsError {
    fn from(e: serde_json::Error) -> Self {
        NewsError::MalformedPayload(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NewsError>;
