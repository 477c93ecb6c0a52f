//! Anthropic Messages API adapter.
//!
//! Sends requests to `POST {base_url}/v1/messages`. The Messages API takes the
//! system instruction as a top-level field, so system-role messages are pulled
//! out of the conversation and joined.

use super::http::{build_client, post_json};
use async_trait::async_trait;
use memcat_application::{ClientError, LanguageModelClient};
use memcat_domain::{LlmConfig, Message, Role};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
pub(crate) struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    messages: Vec<AnthropicMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

/// Anthropic Claude client.
pub struct AnthropicClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    config: LlmConfig,
}

impl AnthropicClient {
    /// The Anthropic API version header value.
    const API_VERSION: &'static str = "2023-06-01";

    pub fn new(
        api_key: SecretString,
        base_url: impl Into<String>,
        config: LlmConfig,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            client: build_client(timeout)?,
            api_key,
            base_url: base_url.into(),
            config,
        })
    }

    fn url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }

    pub(crate) fn build_request<'a>(&'a self, messages: &'a [Message]) -> MessagesRequest<'a> {
        let system: Vec<&str> = messages
            .iter()
            .filter(|m| m.role == Role::System)
            .map(|m| m.content.as_str())
            .collect();

        MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            system: (!system.is_empty()).then(|| system.join("\n\n")),
            messages: messages
                .iter()
                .filter(|m| m.role != Role::System)
                .map(|m| AnthropicMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            temperature: self.config.temperature,
        }
    }

    pub(crate) fn extract_text(response: MessagesResponse) -> Result<String, ClientError> {
        if response.content.is_empty() {
            return Err(ClientError::EmptyResponse);
        }
        Ok(response
            .content
            .into_iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text),
                ContentBlock::Other => None,
            })
            .collect::<Vec<_>>()
            .join(""))
    }
}

#[async_trait]
impl LanguageModelClient for AnthropicClient {
    fn provider(&self) -> &str {
        "anthropic"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn generate(&self, messages: &[Message]) -> Result<String, ClientError> {
        let body = self.build_request(messages);
        let request = self
            .client
            .post(self.url())
            .header("x-api-key", self.api_key.expose_secret())
            .header("anthropic-version", Self::API_VERSION);

        let response: MessagesResponse = post_json(request, &body).await?;
        Self::extract_text(response)
    }
}
