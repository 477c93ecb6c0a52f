//! Retry configuration from TOML (`[retry]` section)

use memcat_domain::{ConfigIssue, ConfigIssueCode, DomainError, RetryPolicy};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Retry/backoff settings, in seconds
///
/// # Example
///
/// ```toml
/// [retry]
/// max_attempts = 3
/// multiplier = 1.0
/// min_delay_secs = 4.0
/// max_delay_secs = 15.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRetryConfig {
    pub max_attempts: u32,
    pub multiplier: f64,
    pub min_delay_secs: f64,
    pub max_delay_secs: f64,
}

impl Default for FileRetryConfig {
    fn default() -> Self {
        let defaults = RetryPolicy::default();
        Self {
            max_attempts: defaults.max_attempts,
            multiplier: defaults.multiplier,
            min_delay_secs: defaults.min_delay.as_secs_f64(),
            max_delay_secs: defaults.max_delay.as_secs_f64(),
        }
    }
}

impl FileRetryConfig {
    /// Convert to a validated [`RetryPolicy`].
    pub fn to_retry_policy(&self) -> Result<RetryPolicy, DomainError> {
        let min_delay = secs_to_duration("min_delay_secs", self.min_delay_secs)?;
        let max_delay = secs_to_duration("max_delay_secs", self.max_delay_secs)?;
        RetryPolicy::new(self.max_attempts, self.multiplier, min_delay, max_delay)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        match self.to_retry_policy() {
            Ok(_) => Vec::new(),
            Err(e) => vec![ConfigIssue::error(
                ConfigIssueCode::InvalidRetry {
                    field: "retry".to_string(),
                },
                format!("retry: {}", e),
            )],
        }
    }
}

// Duration::from_secs_f64 panics on negative or non-finite input.
fn secs_to_duration(field: &str, secs: f64) -> Result<Duration, DomainError> {
    Duration::try_from_secs_f64(secs)
        .map_err(|_| DomainError::InvalidRetryPolicy(format!("{} must be >= 0, got {}", field, secs)))
}
