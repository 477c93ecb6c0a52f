//! LLM provider adapters and the factory that builds them.
//!
//! Every adapter implements [`LanguageModelClient`]. Callers never name a
//! concrete adapter; they go through [`LlmClientFactory`] with a provider
//! name and an [`LlmConfig`].

pub mod anthropic;
pub mod credentials;
pub mod gemini;
mod http;
pub mod openai;

use anthropic::AnthropicClient;
use credentials::resolve_api_key;
use gemini::GeminiClient;
use memcat_application::{ClientError, LanguageModelClient};
use memcat_domain::{DomainError, LlmConfig, ProviderConfig, ProviderKind};
use openai::OpenAiClient;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors raised while building a client
#[derive(Error, Debug)]
pub enum FactoryError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Builds [`LanguageModelClient`]s from explicit configuration.
pub struct LlmClientFactory {
    providers: ProviderConfig,
    timeout: Duration,
}

impl LlmClientFactory {
    pub fn new(providers: ProviderConfig) -> Self {
        Self {
            providers,
            timeout: Duration::from_secs(60),
        }
    }

    /// Per-request HTTP timeout for built clients.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a client for the provider called `provider_name`.
    pub fn create(
        &self,
        provider_name: &str,
        config: LlmConfig,
    ) -> Result<Arc<dyn LanguageModelClient>, FactoryError> {
        let kind: ProviderKind = provider_name.parse()?;
        self.create_for(kind, config)
    }

    /// Build a client for `kind`.
    ///
    /// Fails when the config is invalid or no API key can be found.
    pub fn create_for(
        &self,
        kind: ProviderKind,
        config: LlmConfig,
    ) -> Result<Arc<dyn LanguageModelClient>, FactoryError> {
        config.validate()?;

        let endpoint = self.providers.endpoint(kind);
        let api_key = resolve_api_key(endpoint)?;
        let base_url = endpoint.base_url.clone();

        debug!(
            "Creating {} client for model {} at {}",
            kind, config.model, base_url
        );

        let client: Arc<dyn LanguageModelClient> = match kind {
            ProviderKind::OpenAi => {
                Arc::new(OpenAiClient::new(api_key, base_url, config, self.timeout)?)
            }
            ProviderKind::Anthropic => {
                Arc::new(AnthropicClient::new(api_key, base_url, config, self.timeout)?)
            }
            ProviderKind::Gemini => {
                Arc::new(GeminiClient::new(api_key, base_url, config, self.timeout)?)
            }
        };
        Ok(client)
    }
}
