//! LLM request configuration.
//!
//! [`LlmConfig`] is a static value object: a client is built from it once
//! and the settings do not change for the client's lifetime.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Model identifier and sampling settings for categorization calls.
///
/// # Example
///
/// ```
/// use memcat_domain::LlmConfig;
///
/// let config = LlmConfig::default()
///     .with_model("gpt-4o-mini")
///     .with_temperature(0.2);
///
/// assert_eq!(config.model, "gpt-4o-mini");
/// assert_eq!(config.max_tokens, 2000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Provider-specific model identifier.
    pub model: String,
    /// Sampling temperature (0 = deterministic).
    pub temperature: f32,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".to_string(),
            temperature: 0.0,
            max_tokens: 2000,
        }
    }
}

impl LlmConfig {
    pub fn new(model: impl Into<String>, temperature: f32, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            temperature,
            max_tokens,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Reject values no provider accepts.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.model.trim().is_empty() {
            return Err(DomainError::InvalidLlmConfig(
                "model cannot be empty".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(DomainError::InvalidLlmConfig(format!(
                "temperature {} is outside 0.0..=2.0",
                self.temperature
            )));
        }
        if self.max_tokens == 0 {
            return Err(DomainError::InvalidLlmConfig(
                "max_tokens must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
