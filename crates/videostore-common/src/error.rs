//! Error types for the video store
//!
//! Provides a unified error type and domain-specific error variants

use thiserror::Error;

/// Result type alias using VideoStoreError
pub type Result<T> = std::result::Result<T, VideoStoreError>;

/// Unified error type for video store operations
#[derive(Debug, Error)]
pub enum VideoStoreError {
    // Construction errors
    #[error("Rental error: {0}")]
    Rental(#[from] RentalError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Rejected movie or rental construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RentalError {
    #[error("Movie title must not be empty")]
    EmptyTitle,

    #[error("Rental of '{title}' must last at least {minimum} day(s)")]
    ZeroDays { title: String, minimum: u32 },

    #[error("Unknown movie category: {0}")]
    UnknownCategory(String),
}

/// Invalid billing configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Negative {field} for {category}: {value}")]
    NegativeRate {
        category: String,
        field: &'static str,
        value: String,
    },

    #[error("{field} for {category} can exceed the maximum rental charge of {maximum}")]
    RateTooLarge {
        category: String,
        field: &'static str,
        maximum: String,
    },

    #[error("Failed to load configuration: {0}")]
    Source(String),
}

impl From<serde_json::Error> for VideoStoreError {
    fn from(err: serde_json::Error) -> Self {
        VideoStoreError::Serialization(err.to_string())
    }
}
