//! Language model collaborator contract
//!
//! The pipeline treats the language model as an opaque external service:
//! `invoke` takes a prompt and yields text. Rate limiting surfaces as
//! `AppError::Throttled` (retryable); every other failure is
//! `AppError::Model` (terminal).

mod http;

pub use http::HttpLanguageModel;

use queryforge_common::errors::Result;

/// Contract the synthesis stage requires from a language model
#[async_trait::async_trait]
pub trait LanguageModel: Send + Sync {
    /// Generate a completion for the prompt
    async fn invoke(&self, prompt: &str) -> Result<String>;
}
