//! HTTP chat-completions adapter for the language model contract
//!
//! Speaks the OpenAI-compatible chat API. Throttling (HTTP 429) maps to the
//! retryable error class; everything else is terminal.

use queryforge_common::config::LlmConfig;
use queryforge_common::errors::{AppError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::LanguageModel;

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// Language model backed by an OpenAI-compatible HTTP endpoint
pub struct HttpLanguageModel {
    config: LlmConfig,
    client: reqwest::Client,
}

impl HttpLanguageModel {
    /// Create a new HTTP language model client
    pub fn new(config: LlmConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Internal {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { config, client })
    }
}

#[async_trait::async_trait]
impl LanguageModel for HttpLanguageModel {
    async fn invoke(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let mut builder = self.client.post(&self.config.endpoint).json(&request);
        if let Some(api_key) = &self.config.api_key {
            builder = builder.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = builder.send().await.map_err(|e| AppError::Model {
            message: format!("Model request failed: {}", e),
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Throttled {
                message: format!("Model rate limited: {}", body),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Model {
                message: format!("Model API error {}: {}", status, body),
            });
        }

        let chat_response: ChatResponse =
            response.json().await.map_err(|e| AppError::Model {
                message: format!("Failed to parse model response: {}", e),
            })?;

        debug!(model = %self.config.model, "model invocation succeeded");

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AppError::Model {
                message: "Empty response from model".to_string(),
            })
    }
}
