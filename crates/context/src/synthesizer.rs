//! Answer Synthesizer - context-grounded answer generation
//!
//! Builds a prompt that constrains the model to the fused retrieval context,
//! with a literal fallback phrase for insufficient context, and invokes the
//! language model through the bounded-retry driver.

use std::sync::Arc;

use queryforge_common::errors::Result;
use queryforge_common::FALLBACK_PHRASE;
use queryforge_search::RetrievalResult;
use tracing::debug;

use crate::llm::LanguageModel;
use crate::retry::{retry_with_backoff, RetryPolicy};

/// Synthesizer producing grounded answers from fused context
pub struct AnswerSynthesizer {
    model: Arc<dyn LanguageModel>,
    policy: RetryPolicy,
}

impl AnswerSynthesizer {
    /// Create a new synthesizer
    pub fn new(model: Arc<dyn LanguageModel>, policy: RetryPolicy) -> Self {
        Self { model, policy }
    }

    /// Synthesize an answer for `query` from the retrieved context.
    ///
    /// Empty context never short-circuits: the model is still invoked with an
    /// explicit no-context instruction so the fallback phrase comes from the
    /// model, keeping the caller-facing contract uniform.
    pub async fn synthesize(&self, query: &str, context: &RetrievalResult) -> Result<String> {
        let prompt = self.build_prompt(query, context);

        debug!(
            query,
            context_documents = context.len(),
            "invoking language model"
        );

        let answer = retry_with_backoff(self.policy, || self.model.invoke(&prompt)).await?;

        Ok(answer.trim().to_string())
    }

    /// Build the grounded prompt
    fn build_prompt(&self, query: &str, context: &RetrievalResult) -> String {
        if context.is_empty() {
            return format!(
                "No relevant context was retrieved for this question.\n\n\
                 Answer this question: {query}\n\n\
                 Since no context is available, say \"{FALLBACK_PHRASE}\""
            );
        }

        let context_block = context
            .iter()
            .map(|d| d.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            "Based on this context:\n\
             ---\n\
             {context_block}\n\
             ---\n\n\
             Answer this question: {query}\n\n\
             Answer using only the information in the context. \
             If the context doesn't contain relevant information, say \"{FALLBACK_PHRASE}\""
        )
    }
}
