//! QueryForge Common Library
//!
//! Shared code for the QueryForge pipeline crates including:
//! - Error types and handling
//! - Configuration management
//! - Telemetry initialization
//! - Query understanding (analysis, expansion, reformulation, generation)
//! - Metrics registration

pub mod config;
pub mod errors;
pub mod metrics;
pub mod query;
pub mod telemetry;

// Re-export commonly used types
pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::query::{QueryAnalysis, QueryIntent, SearchQuerySet};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Literal fallback phrase the language model is instructed to emit when the
/// supplied context cannot answer the question. Callers pattern-match on this
/// exact string, so it must never change without coordination.
pub const FALLBACK_PHRASE: &str = "I don't have enough information to answer that.";
