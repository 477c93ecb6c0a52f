//! OpenAI chat completions adapter.
//!
//! Sends requests to `POST {base_url}/v1/chat/completions`. Works with any
//! server that speaks the same protocol (vLLM, Ollama, LiteLLM, ...) by
//! overriding `providers.openai.base_url`.

use super::http::{build_client, post_json};
use async_trait::async_trait;
use memcat_application::{ClientError, LanguageModelClient};
use memcat_domain::{LlmConfig, Message};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// OpenAI-compatible chat completions client.
///
/// The API key is only exposed while building the `Authorization` header.
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    config: LlmConfig,
}

impl OpenAiClient {
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
        format!("{}/v1/chat/completions", self.base_url)
    }

    pub(crate) fn build_request<'a>(&'a self, messages: &'a [Message]) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            messages: messages
                .iter()
                .map(|m| ChatMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }

    pub(crate) fn extract_text(response: ChatResponse) -> Result<String, ClientError> {
        response
            .choices
            .into_iter()
            .next()
            .ok_or(ClientError::EmptyResponse)
            .map(|choice| choice.message.content.unwrap_or_default())
    }
}

#[async_trait]
impl LanguageModelClient for OpenAiClient {
    fn provider(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn generate(&self, messages: &[Message]) -> Result<String, ClientError> {
        let body = self.build_request(messages);
        let request = self
            .client
            .post(self.url())
            .bearer_auth(self.api_key.expose_secret());

        let response: ChatResponse = post_json(request, &body).await?;
        Self::extract_text(response)
    }
}

#[cfg(test)]
mod tests {
    use crate::providers::http::test_server::serve_once;
    use super::*;
    use serde_json::json;

    fn client() -> OpenAiClient {
        OpenAiClient::new(
            SecretString::from("sk-test".to_string()),
            "http://localhost:9999",
            LlmConfig::new("gpt-4o-mini", 0.0, 2000),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_request_body_shape() {
        let client = client();
        let messages = vec![Message::system("categorize"), Message::user("Booked a dentist visit")];
        let body = serde_json::to_value(client.build_request(&messages)).unwrap();

        assert_eq!(
            body,
            json!({
                "model": "gpt-4o-mini",
                "messages": [
                    {"role": "system", "content": "categorize"},
                    {"role": "user", "content": "Booked a dentist visit"}
                ],
                "temperature": 0.0,
                "max_tokens": 2000
            })
        );
        assert_eq!(client.url(), "http://localhost:9999/v1/chat/completions");
    }

    #[test]
    fn test_extract_first_choice() {
        let response: ChatResponse = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "{\"categories\": [\"Health\"]}"}}
            ]
        }))
        .unwrap();
        assert_eq!(
            OpenAiClient::extract_text(response).unwrap(),
            r#"{"categories": ["Health"]}"#
        );
    }

    #[test]
    fn test_extract_without_choices() {
        let response: ChatResponse = serde_json::from_value(json!({"choices": []})).unwrap();
        assert_eq!(
            OpenAiClient::extract_text(response),
            Err(ClientError::EmptyResponse)
        );
    }

    #[test]
    fn test_null_content_is_empty_text() {
        let response: ChatResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        }))
        .unwrap();
        assert_eq!(OpenAiClient::extract_text(response).unwrap(), "");
    }

    #[tokio::test]
    async fn test_generate_against_local_server() {
        let reply = r#"{"choices": [{"message": {"role": "assistant", "content": "Health, Travel"}}]}"#;
        let (base_url, server) = serve_once("200 OK", "application/json", reply).await;
        let client = OpenAiClient::new(
            SecretString::from("sk-test".to_string()),
            base_url,
            LlmConfig::new("gpt-4o-mini", 0.0, 2000),
            Duration::from_secs(5),
        )
        .unwrap();

        let text = client
            .generate(&[Message::system("categorize"), Message::user("Flu shot")])
            .await
            .unwrap();

        assert_eq!(text, "Health, Travel");
        let request = server.await.unwrap().to_lowercase();
        assert!(request.starts_with("post /v1/chat/completions http/1.1"));
        assert!(request.contains("authorization: bearer sk-test"));
    }
}
