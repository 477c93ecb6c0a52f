//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("Invalid retry policy: {0}")]
    InvalidRetryPolicy(String),

    #[error("Invalid LLM config: {0}")]
    InvalidLlmConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_provider_display() {
        let error = DomainError::UnknownProvider("ollama".to_string());
        assert_eq!(error.to_string(), "Unknown provider: ollama");
    }
}
