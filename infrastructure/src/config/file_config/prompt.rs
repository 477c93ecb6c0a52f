//! System prompt override from TOML (`[prompt]` section)

use crate::config::ConfigError;
use memcat_domain::{CategorizationPrompt, ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the categorization instruction comes from.
///
/// With neither field set the built-in [`CategorizationPrompt::system`] is used.
/// When both are set, `system` wins and a warning is reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePromptConfig {
    /// Inline instruction text
    pub system: Option<String>,
    /// Path to a file holding the instruction text
    pub system_file: Option<PathBuf>,
}

impl FilePromptConfig {
    /// Resolve the instruction text, reading `system_file` if needed.
    pub fn resolve(&self) -> Result<String, ConfigError> {
        if let Some(text) = &self.system {
            return Ok(text.clone());
        }
        if let Some(path) = &self.system_file {
            return std::fs::read_to_string(path).map_err(|source| ConfigError::PromptFile {
                path: path.clone(),
                source,
            });
        }
        Ok(CategorizationPrompt::system().to_string())
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        if self.system.is_some() && self.system_file.is_some() {
            return vec![ConfigIssue::warning(
                ConfigIssueCode::ConflictingPrompt,
                "prompt: both 'system' and 'system_file' are set; using 'system'",
            )];
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_uses_builtin_prompt() {
        let prompt = FilePromptConfig::default().resolve().unwrap();
        assert_eq!(prompt, CategorizationPrompt::system());
    }

    #[test]
    fn test_reads_prompt_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Only answer with JSON.").unwrap();

        let config = FilePromptConfig {
            system: None,
            system_file: Some(file.path().to_path_buf()),
        };
        assert_eq!(config.resolve().unwrap(), "Only answer with JSON.");
    }

    #[test]
    fn test_missing_prompt_file_errors() {
        let config = FilePromptConfig {
            system: None,
            system_file: Some(PathBuf::from("/nonexistent/memcat/prompt.txt")),
        };
        assert!(matches!(
            config.resolve(),
            Err(ConfigError::PromptFile { .. })
        ));
    }

    #[test]
    fn test_inline_wins_with_warning() {
        let config = FilePromptConfig {
            system: Some("inline".to_string()),
            system_file: Some(PathBuf::from("/nonexistent")),
        };
        assert_eq!(config.resolve().unwrap(), "inline");
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
    }
}
