//! Progress notification port
//!
//! Defines the interface for observing a categorization call attempt by attempt.

use crate::ports::llm_client::ClientError;
use memcat_domain::MemoryCategories;
use std::time::Duration;

/// Callback for progress updates during categorization
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, etc.)
pub trait CategorizationProgress: Send + Sync {
    /// Called before every attempt (`attempt` is 1-based)
    fn on_attempt_start(&self, _attempt: u32, _max_attempts: u32) {}

    /// Called after a failed attempt.
    ///
    /// `retry_in` is `None` when no attempts are left and the error is about to
    /// be returned to the caller.
    fn on_attempt_failed(
        &self,
        _attempt: u32,
        _max_attempts: u32,
        _error: &ClientError,
        _retry_in: Option<Duration>,
    ) {
    }

    /// Called once with the final normalized result
    fn on_categorized(&self, _categories: &MemoryCategories) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl CategorizationProgress for NoProgress {}
