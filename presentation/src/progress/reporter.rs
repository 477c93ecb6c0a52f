//! Progress reporting for categorization calls

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use memcat_application::{CategorizationProgress, ClientError};
use memcat_domain::MemoryCategories;
use std::sync::Mutex;
use std::time::Duration;

/// Spinner on stderr while the model call runs; failed attempts are printed
/// above it.
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn attempt_label(attempt: u32, max_attempts: u32) -> String {
        if max_attempts > 1 {
            format!("attempt {}/{}", attempt, max_attempts)
        } else {
            String::new()
        }
    }

    fn failure_line(
        attempt: u32,
        max_attempts: u32,
        error: &ClientError,
        retry_in: Option<Duration>,
    ) -> String {
        match retry_in {
            Some(delay) => format!(
                "{} attempt {}/{} failed: {} (retrying in {:.1}s)",
                "!".yellow().bold(),
                attempt,
                max_attempts,
                error,
                delay.as_secs_f64()
            ),
            None => format!(
                "{} attempt {}/{} failed: {}",
                "x".red().bold(),
                attempt,
                max_attempts,
                error
            ),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CategorizationProgress for ProgressReporter {
    fn on_attempt_start(&self, attempt: u32, max_attempts: u32) {
        let Ok(mut slot) = self.spinner.lock() else {
            return;
        };
        let pb = slot.get_or_insert_with(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb.set_prefix("Categorizing");
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        });
        pb.set_message(Self::attempt_label(attempt, max_attempts));
    }

    fn on_attempt_failed(
        &self,
        attempt: u32,
        max_attempts: u32,
        error: &ClientError,
        retry_in: Option<Duration>,
    ) {
        let line = Self::failure_line(attempt, max_attempts, error, retry_in);
        let Ok(mut slot) = self.spinner.lock() else {
            return;
        };
        match slot.as_ref() {
            Some(pb) => pb.println(line),
            None => eprintln!("{}", line),
        }
        if retry_in.is_none()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }

    fn on_categorized(&self, categories: &MemoryCategories) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
            if categories.is_empty() {
                eprintln!("{} model returned no categories", "!".yellow().bold());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_label() {
        assert_eq!(ProgressReporter::attempt_label(2, 3), "attempt 2/3");
        assert_eq!(ProgressReporter::attempt_label(1, 1), "");
    }

    #[test]
    fn test_failure_line_mentions_retry() {
        colored::control::set_override(false);
        let line = ProgressReporter::failure_line(
            1,
            3,
            &ClientError::Timeout,
            Some(Duration::from_secs(4)),
        );
        assert_eq!(line, "! attempt 1/3 failed: Timeout (retrying in 4.0s)");

        let last = ProgressReporter::failure_line(3, 3, &ClientError::Timeout, None);
        assert_eq!(last, "x attempt 3/3 failed: Timeout");
    }

    #[test]
    fn test_full_cycle_does_not_panic() {
        let reporter = ProgressReporter::new();
        reporter.on_attempt_start(1, 2);
        reporter.on_attempt_failed(1, 2, &ClientError::EmptyResponse, Some(Duration::ZERO));
        reporter.on_attempt_start(2, 2);
        reporter.on_categorized(&MemoryCategories::new(vec!["news".to_string()]));
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
