// src/error.rs

//! Unified error handling for the sheetpost application.

use std::fmt;

use thiserror::Error;

/// Result type alias for sheetpost operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A single source request failed before a response was read
    #[error("Transport error for {url}: {message}")]
    Transport { url: String, message: String },

    /// Requested post does not exist in the published view
    #[error("Post not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a transport error with the requested URL as context.
    pub fn transport(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create a not-found error for a post slug.
    pub fn not_found(slug: impl Into<String>) -> Self {
        Self::NotFound(slug.into())
    }
}
