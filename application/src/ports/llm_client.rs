//! Language model client port
//!
//! Defines the interface for sending a conversation to an LLM provider and
//! getting plain text back.

use async_trait::async_trait;
use memcat_domain::Message;
use thiserror::Error;

/// Errors that can occur while talking to a language model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Client for a single configured model
///
/// Model identifier, temperature and token limit are fixed when the client is
/// built. Implementations (adapters) live in the infrastructure layer and must
/// be safe to share between tasks.
#[async_trait]
pub trait LanguageModelClient: Send + Sync {
    /// Provider name used in logs (e.g. `"gemini"`)
    fn provider(&self) -> &str;

    /// Model identifier this client sends requests to
    fn model(&self) -> &str;

    /// Send the conversation and return the model's text reply
    async fn generate(&self, messages: &[Message]) -> Result<String, ClientError>;
}
