//! Categorize Memory use case.
//!
//! Asks the configured model for topical labels of a piece of memory text:
//! 1. Build the system + user conversation ([`CategorizationPrompt::messages`])
//! 2. Call [`LanguageModelClient::generate`]
//! 3. Parse the reply ([`parse_category_response`]): JSON first, comma split otherwise
//! 4. Return the normalized [`MemoryCategories`]
//!
//! The whole sequence is retried under a [`RetryPolicy`]. Every failure kind
//! is retried the same way and the caller only ever sees the final list or the
//! last error, unchanged.

use crate::ports::llm_client::{ClientError, LanguageModelClient};
use crate::ports::progress::{CategorizationProgress, NoProgress};
use memcat_domain::util::log_preview;
use memcat_domain::{CategorizationPrompt, MemoryCategories, RetryPolicy, parse_category_response};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Error returned once all attempts are exhausted.
///
/// This is the error raised by the last attempt, passed through verbatim.
pub type CategorizationError = ClientError;

/// Use case for categorizing a memory.
///
/// Holds only shared, immutable collaborators, so one instance can serve
/// concurrent callers as long as the client itself can.
#[derive(Clone)]
pub struct CategorizeMemoryUseCase {
    client: Arc<dyn LanguageModelClient>,
    system_prompt: String,
    retry: RetryPolicy,
    progress: Arc<dyn CategorizationProgress>,
}

impl CategorizeMemoryUseCase {
    /// Create with the built-in prompt and the default retry policy.
    pub fn new(client: Arc<dyn LanguageModelClient>) -> Self {
        Self {
            client,
            system_prompt: CategorizationPrompt::system().to_string(),
            retry: RetryPolicy::default(),
            progress: Arc::new(NoProgress),
        }
    }

    /// Replace the system instruction.
    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    /// Replace the retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Create with a progress observer.
    pub fn with_progress(mut self, progress: Arc<dyn CategorizationProgress>) -> Self {
        self.progress = progress;
        self
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Categorize `memory`, retrying on failure.
    ///
    /// The input is not validated; empty text is sent as-is.
    pub async fn execute(&self, memory: &str) -> Result<MemoryCategories, CategorizationError> {
        let max_attempts = self.retry.max_attempts.max(1);
        info!(
            "Categorizing memory with {}/{}: {}",
            self.client.provider(),
            self.client.model(),
            log_preview(memory, 80)
        );

        let mut attempt = 1;
        loop {
            self.progress.on_attempt_start(attempt, max_attempts);

            match self.attempt(memory).await {
                Ok(categories) => {
                    info!(
                        "Categorized memory on attempt {}/{}: [{}]",
                        attempt,
                        max_attempts,
                        categories.as_slice().join(", ")
                    );
                    self.progress.on_categorized(&categories);
                    return Ok(categories);
                }
                Err(e) => {
                    error!(
                        "Failed to get categories (attempt {}/{}): {}",
                        attempt, max_attempts, e
                    );

                    if attempt >= max_attempts {
                        self.progress
                            .on_attempt_failed(attempt, max_attempts, &e, None);
                        return Err(e);
                    }

                    let delay = self.retry.delay_after(attempt);
                    self.progress
                        .on_attempt_failed(attempt, max_attempts, &e, Some(delay));
                    debug!("Retrying categorization in {:?}", delay);
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    /// One pass of prompt → model call → parse.
    async fn attempt(&self, memory: &str) -> Result<MemoryCategories, ClientError> {
        let messages = CategorizationPrompt::messages(&self.system_prompt, memory);
        let raw = self.client.generate(&messages).await?;
        debug!("Raw categorization reply: {}", log_preview(&raw, 200));
        Ok(MemoryCategories::new(parse_category_response(&raw)))
    }
}
