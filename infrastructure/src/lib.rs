//! Infrastructure layer for memory-categorizer
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, FileConfig, FileLlmConfig, FileOutputConfig, FilePromptConfig,
    FileProviderConfig, FileProvidersConfig, FileRetryConfig,
};
pub use providers::{
    FactoryError, LlmClientFactory,
    anthropic::AnthropicClient,
    credentials::{load_env_file, resolve_api_key},
    gemini::GeminiClient,
    openai::OpenAiClient,
};
