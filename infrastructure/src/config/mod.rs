//! Configuration file loading for memory-categorizer
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `MEMCAT_*` environment variables (`MEMCAT_LLM__MODEL=...`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./memcat.toml` or `./.memcat.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/memcat/config.toml`
//! 5. Default values
//!
//! CLI flags are applied on top by the binary.

mod error;
mod file_config;
mod loader;

pub use error::ConfigError;
pub use file_config::{
    FileConfig, FileLlmConfig, FileOutputConfig, FilePromptConfig, FileProviderConfig,
    FileProvidersConfig, FileRetryConfig,
};
pub use loader::ConfigLoader;
