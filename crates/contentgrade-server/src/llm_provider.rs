//! Completion provider seam and the OpenAI chat-completions client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::LlmConfig;

/// Message used when the provider answers without a first choice.
pub const INVALID_RESPONSE_MESSAGE: &str = "Invalid response from OpenAI";

/// Typed failures from a completion provider.
///
/// The display text is returned to callers as the error `details`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider could not be reached or refused the request.
    #[error("{0}")]
    Unavailable(String),

    /// The provider answered, but not with a usable completion.
    #[error("{0}")]
    MalformedResponse(String),
}

/// Turns a prompt into the model's free-text reply.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, api_key: &str, prompt: &str) -> Result<String, ProviderError>;
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    temperature: f64,
}

impl OpenAiProvider {
    pub fn new(client: reqwest::Client, llm: &LlmConfig) -> Self {
        OpenAiProvider {
            client,
            endpoint: llm.completions_endpoint(),
            model: llm.model.clone(),
            temperature: llm.temperature,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, api_key: &str, prompt: &str) -> Result<String, ProviderError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|err| ProviderError::Unavailable(format!("provider request failed: {}", err)))?;

        let status = response.status();
        let body_text = response.text().await.map_err(|err| {
            ProviderError::Unavailable(format!("provider response read failed: {}", err))
        })?;

        if !status.is_success() {
            tracing::warn!(%status, body = %body_text, "completion API returned an error status");
            return Err(ProviderError::Unavailable(format!("provider request failed ({})", status)));
        }

        parse_completion(&body_text)
    }
}

/// Pulls `choices[0].message.content` out of a completion response body.
///
/// The content is returned untrimmed; leading whitespace on the first line
/// matters to bullet detection.
pub fn parse_completion(body_text: &str) -> Result<String, ProviderError> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body_text).map_err(|err| {
        ProviderError::MalformedResponse(format!("provider response parse failed: {}", err))
    })?;

    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::MalformedResponse(INVALID_RESPONSE_MESSAGE.to_string()))?;

    choice.message.content.ok_or_else(|| {
        ProviderError::MalformedResponse("provider response missing assistant content".to_string())
    })
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoice {
    message: ChatCompletionMessage,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionMessage {
    content: Option<String>,
}
