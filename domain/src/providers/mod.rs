//! Provider configuration types (provider-neutral, serde-free).
//!
//! These types define the shape of provider settings without depending
//! on any serialization format (TOML, JSON, etc.).

use crate::core::error::DomainError;
use std::fmt;
use std::str::FromStr;

/// Supported LLM backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProviderKind {
    /// OpenAI chat completions (and compatible servers).
    OpenAi,
    /// Anthropic Messages API.
    Anthropic,
    /// Google Gemini `generateContent`.
    #[default]
    Gemini,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::Gemini => "gemini",
        }
    }

    pub fn all() -> [ProviderKind; 3] {
        [
            ProviderKind::OpenAi,
            ProviderKind::Anthropic,
            ProviderKind::Gemini,
        ]
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "anthropic" | "claude" => Ok(ProviderKind::Anthropic),
            "gemini" | "google" => Ok(ProviderKind::Gemini),
            _ => Err(DomainError::UnknownProvider(s.to_string())),
        }
    }
}

/// Top-level provider configuration.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// OpenAI API settings.
    pub openai: ProviderEndpoint,
    /// Anthropic API settings.
    pub anthropic: ProviderEndpoint,
    /// Gemini API settings.
    pub gemini: ProviderEndpoint,
}

impl ProviderConfig {
    /// Endpoint settings for the given provider.
    pub fn endpoint(&self, kind: ProviderKind) -> &ProviderEndpoint {
        match kind {
            ProviderKind::OpenAi => &self.openai,
            ProviderKind::Anthropic => &self.anthropic,
            ProviderKind::Gemini => &self.gemini,
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            openai: ProviderEndpoint::default_for(ProviderKind::OpenAi),
            anthropic: ProviderEndpoint::default_for(ProviderKind::Anthropic),
            gemini: ProviderEndpoint::default_for(ProviderKind::Gemini),
        }
    }
}

/// Connection settings for a single provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEndpoint {
    /// Environment variable name for the API key.
    pub api_key_env: String,
    /// Direct API key (prefer `api_key_env`).
    pub api_key: Option<String>,
    /// Base URL for the provider API.
    pub base_url: String,
}

impl ProviderEndpoint {
    pub fn default_for(kind: ProviderKind) -> Self {
        let (api_key_env, base_url) = match kind {
            ProviderKind::OpenAi => ("OPENAI_API_KEY", "https://api.openai.com"),
            ProviderKind::Anthropic => ("ANTHROPIC_API_KEY", "https://api.anthropic.com"),
            ProviderKind::Gemini => (
                "GEMINI_API_KEY",
                "https://generativelanguage.googleapis.com",
            ),
        };
        Self {
            api_key_env: api_key_env.to_string(),
            api_key: None,
            base_url: base_url.to_string(),
        }
    }
}
