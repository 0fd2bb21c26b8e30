//! Error types for the QueryForge pipeline
//!
//! Provides:
//! - Distinct error types for each failure mode in the pipeline
//! - Machine-readable error codes for client handling
//! - A retryability predicate consumed by the bounded-retry driver
//!
//! Note that an empty retrieval result is deliberately *not* an error: fusion
//! reports it as an explicit result state so the synthesis stage can still
//! invoke the model with a "no context" instruction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Error codes for machine-readable error identification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Retrieval errors (4xxx)
    RetrievalUnavailable,

    // Language model errors (6xxx)
    Throttled,
    RetryExhausted,
    ModelError,

    // Internal errors (9xxx)
    InternalError,
    ConfigurationError,
    SerializationError,
}

impl ErrorCode {
    /// Get the numeric code for this error
    pub fn as_code(&self) -> u16 {
        match self {
            // Retrieval (4xxx)
            ErrorCode::RetrievalUnavailable => 4001,

            // Language model (6xxx)
            ErrorCode::Throttled => 6001,
            ErrorCode::RetryExhausted => 6002,
            ErrorCode::ModelError => 6003,

            // Internal (9xxx)
            ErrorCode::InternalError => 9001,
            ErrorCode::ConfigurationError => 9002,
            ErrorCode::SerializationError => 9003,
        }
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Retrieval errors
    #[error("Vector store unavailable: {message}")]
    RetrievalUnavailable { message: String },

    // Language model errors
    #[error("Language model throttled: {message}")]
    Throttled { message: String },

    #[error("Retry budget exhausted after {attempts} attempts")]
    RetryExhausted { attempts: u32 },

    #[error("Language model error: {message}")]
    Model { message: String },

    // Internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Generic
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Get the error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::RetrievalUnavailable { .. } => ErrorCode::RetrievalUnavailable,
            AppError::Throttled { .. } => ErrorCode::Throttled,
            AppError::RetryExhausted { .. } => ErrorCode::RetryExhausted,
            AppError::Model { .. } => ErrorCode::ModelError,
            AppError::Internal { .. } => ErrorCode::InternalError,
            AppError::Configuration { .. } => ErrorCode::ConfigurationError,
            AppError::Serialization(_) => ErrorCode::SerializationError,
            AppError::Other(_) => ErrorCode::InternalError,
        }
    }

    /// Whether the bounded-retry driver may retry this error.
    ///
    /// Only transient throttling from the language model is retryable; store
    /// failures and all other model failures surface immediately.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Throttled { .. })
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Configuration {
            message: err.to_string(),
        }
    }
}
