//! Google Gemini `generateContent` adapter.
//!
//! Sends requests to `POST {base_url}/v1beta/models/{model}:generateContent`
//! with the key in the `x-goog-api-key` header. System messages become
//! `systemInstruction` and the assistant role is called `model`.

use super::http::{build_client, post_json};
use async_trait::async_trait;
use memcat_application::{ClientError, LanguageModelClient};
use memcat_domain::{LlmConfig, Message, Role};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

/// Gemini client.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    config: LlmConfig,
}

impl GeminiClient {
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
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.config.model
        )
    }

    pub(crate) fn build_request<'a>(&self, messages: &'a [Message]) -> GenerateContentRequest<'a> {
        let system_parts: Vec<Part<'a>> = messages
            .iter()
            .filter(|m| m.role == Role::System)
            .map(|m| Part { text: &m.content })
            .collect();

        let contents = messages
            .iter()
            .filter(|m| m.role != Role::System)
            .map(|m| Content {
                role: Some(match m.role {
                    Role::Assistant => "model",
                    _ => "user",
                }),
                parts: vec![Part { text: &m.content }],
            })
            .collect();

        GenerateContentRequest {
            system_instruction: (!system_parts.is_empty()).then_some(Content {
                role: None,
                parts: system_parts,
            }),
            contents,
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_tokens,
            },
        }
    }

    pub(crate) fn extract_text(response: GenerateContentResponse) -> Result<String, ClientError> {
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or(ClientError::EmptyResponse)?;

        Ok(candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default())
    }
}

#[async_trait]
impl LanguageModelClient for GeminiClient {
    fn provider(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn generate(&self, messages: &[Message]) -> Result<String, ClientError> {
        let body = self.build_request(messages);
        let request = self
            .client
            .post(self.url())
            .header("x-goog-api-key", self.api_key.expose_secret());

        let response: GenerateContentResponse = post_json(request, &body).await?;
        Self::extract_text(response)
    }
}
