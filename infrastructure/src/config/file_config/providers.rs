//! Provider configuration from TOML (`[providers]` section)

use memcat_domain::{ProviderConfig, ProviderEndpoint, ProviderKind};
use serde::{Deserialize, Serialize};

/// Endpoint overrides for one provider. Unset fields fall back to the
/// provider's defaults (see [`ProviderEndpoint::default_for`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Environment variable name for the API key.
    pub api_key_env: Option<String>,
    /// Direct API key (prefer `api_key_env`).
    pub api_key: Option<String>,
    /// Base URL, e.g. for a proxy or an OpenAI-compatible server.
    pub base_url: Option<String>,
}

impl FileProviderConfig {
    fn to_endpoint(&self, kind: ProviderKind) -> ProviderEndpoint {
        let defaults = ProviderEndpoint::default_for(kind);
        ProviderEndpoint {
            api_key_env: self.api_key_env.clone().unwrap_or(defaults.api_key_env),
            api_key: self.api_key.clone(),
            base_url: self
                .base_url
                .as_deref()
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
        }
    }
}

/// # Example
///
/// ```toml
/// [providers.openai]
/// api_key_env = "OPENAI_API_KEY"
/// base_url = "http://localhost:11434"   # any OpenAI-compatible server
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    pub openai: FileProviderConfig,
    pub anthropic: FileProviderConfig,
    pub gemini: FileProviderConfig,
}

impl FileProvidersConfig {
    pub fn to_provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            openai: self.openai.to_endpoint(ProviderKind::OpenAi),
            anthropic: self.anthropic.to_endpoint(ProviderKind::Anthropic),
            gemini: self.gemini.to_endpoint(ProviderKind::Gemini),
        }
    }
}
