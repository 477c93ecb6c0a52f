//! Model selection from TOML (`[llm]` section)

use memcat_domain::{ConfigIssue, ConfigIssueCode, LlmConfig, ProviderKind};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Provider and model settings
///
/// # Example
///
/// ```toml
/// [llm]
/// provider = "gemini"          # gemini | openai | anthropic
/// model = "gemini-2.0-flash"
/// temperature = 0.0
/// max_tokens = 2000
/// timeout_secs = 60            # per HTTP request
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLlmConfig {
    pub provider: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for FileLlmConfig {
    fn default() -> Self {
        let defaults = LlmConfig::default();
        Self {
            provider: ProviderKind::default().to_string(),
            model: defaults.model,
            temperature: defaults.temperature,
            max_tokens: defaults.max_tokens,
            timeout_secs: 60,
        }
    }
}

impl FileLlmConfig {
    /// Parse the provider name, collecting an issue when it is unknown.
    pub fn parse_provider(&self) -> (Option<ProviderKind>, Vec<ConfigIssue>) {
        match self.provider.parse::<ProviderKind>() {
            Ok(kind) => (Some(kind), Vec::new()),
            Err(_) => (
                None,
                vec![ConfigIssue::error(
                    ConfigIssueCode::UnknownProvider {
                        value: self.provider.clone(),
                    },
                    format!(
                        "llm.provider: unknown provider '{}' (expected one of: openai, anthropic, gemini)",
                        self.provider
                    ),
                )],
            ),
        }
    }

    pub fn to_llm_config(&self) -> LlmConfig {
        LlmConfig::new(self.model.clone(), self.temperature, self.max_tokens)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.parse_provider().1;

        if self.model.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyModelName,
                "llm.model: model name cannot be empty",
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::TemperatureOutOfRange,
                format!(
                    "llm.temperature: {} is outside 0.0..=2.0",
                    self.temperature
                ),
            ));
        }
        if self.max_tokens == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroMaxTokens,
                "llm.max_tokens: must be greater than zero",
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_domain_defaults() {
        let config = FileLlmConfig::default();
        assert_eq!(config.to_llm_config(), LlmConfig::default());
        assert_eq!(config.parse_provider().0, Some(ProviderKind::Gemini));
    }

    #[test]
    fn test_unknown_provider_issue() {
        let config = FileLlmConfig {
            provider: "mistral".to_string(),
            ..Default::default()
        };
        let (kind, issues) = config.parse_provider();
        assert!(kind.is_none());
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::UnknownProvider {
                value: "mistral".to_string()
            }
        );
    }

    #[test]
    fn test_out_of_range_values() {
        let config = FileLlmConfig {
            temperature: 2.5,
            max_tokens: 0,
            ..Default::default()
        };
        let codes: Vec<_> = config.validate().into_iter().map(|i| i.code).collect();
        assert_eq!(
            codes,
            vec![
                ConfigIssueCode::TemperatureOutOfRange,
                ConfigIssueCode::ZeroMaxTokens
            ]
        );
    }
}
