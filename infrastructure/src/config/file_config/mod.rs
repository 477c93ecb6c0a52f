//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain types on demand.

mod llm;
mod output;
mod prompt;
mod providers;
mod retry;

pub use llm::FileLlmConfig;
pub use output::FileOutputConfig;
pub use prompt::FilePromptConfig;
pub use providers::{FileProviderConfig, FileProvidersConfig};
pub use retry::FileRetryConfig;

use memcat_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Provider and model settings
    pub llm: FileLlmConfig,
    /// Retry/backoff settings
    pub retry: FileRetryConfig,
    /// System prompt override
    pub prompt: FilePromptConfig,
    /// Per-provider endpoints and credentials
    pub providers: FileProvidersConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Provider name and model settings
    /// 2. Retry values
    /// 3. Prompt source conflicts
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.llm.validate());
        issues.extend(self.retry.validate());
        issues.extend(self.prompt.validate());
        issues
    }
}
