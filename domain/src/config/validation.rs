//! Structured configuration issues.
//!
//! Config loaders collect every problem they find instead of failing on the
//! first one, so the CLI can print warnings and only abort on errors.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// Provider name is not one of the supported backends.
    UnknownProvider { value: String },
    /// Model identifier is empty.
    EmptyModelName,
    /// Temperature outside `0.0..=2.0`.
    TemperatureOutOfRange,
    /// `max_tokens` is zero.
    ZeroMaxTokens,
    /// Retry settings cannot form a valid policy.
    InvalidRetry { field: String },
    /// Both `prompt.system` and `prompt.system_file` are set.
    ConflictingPrompt,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
