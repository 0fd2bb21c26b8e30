//! QueryForge Context Engine
//!
//! The intelligence layer tying the pipeline together:
//! - Language model collaborator contract and HTTP adapter
//! - Bounded-retry driver for throttled model calls
//! - Context-grounded answer synthesis
//! - End-to-end question answering facade

pub mod llm;
pub mod pipeline;
pub mod retry;
pub mod synthesizer;

pub use llm::{HttpLanguageModel, LanguageModel};
pub use pipeline::{QaPipeline, QueryInsight};
pub use retry::{retry_with_backoff, RetryPolicy};
pub use synthesizer::AnswerSynthesizer;
