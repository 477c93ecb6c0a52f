//! Retry policy for categorization calls.
//!
//! The whole categorization pipeline (prompt → model call → parse) is retried
//! as a unit. Waits grow exponentially between attempts:
//!
//! ```text
//! wait(n) = clamp(multiplier * 2^(n-1), min_delay, max_delay)   // n = 1, 2, ...
//! ```
//!
//! With the defaults (3 attempts, multiplier 1, min 4s, max 15s) the waits
//! before the second and third attempt are both 4s.

use crate::core::error::DomainError;
use std::time::Duration;

/// Bounded retry with exponential backoff.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    /// Scale factor in seconds for the exponential term.
    pub multiplier: f64,
    /// Floor for every wait.
    pub min_delay: Duration,
    /// Ceiling for every wait.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            multiplier: 1.0,
            min_delay: Duration::from_secs(4),
            max_delay: Duration::from_secs(15),
        }
    }
}

impl RetryPolicy {
    /// Build a validated policy.
    pub fn new(
        max_attempts: u32,
        multiplier: f64,
        min_delay: Duration,
        max_delay: Duration,
    ) -> Result<Self, DomainError> {
        let policy = Self {
            max_attempts,
            multiplier,
            min_delay,
            max_delay,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Policy that retries without waiting. Useful for tests and batch tools
    /// that do their own pacing.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            multiplier: 0.0,
            min_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.max_attempts == 0 {
            return Err(DomainError::InvalidRetryPolicy(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        if !self.multiplier.is_finite() || self.multiplier < 0.0 {
            return Err(DomainError::InvalidRetryPolicy(format!(
                "multiplier must be a non-negative number, got {}",
                self.multiplier
            )));
        }
        if self.min_delay > self.max_delay {
            return Err(DomainError::InvalidRetryPolicy(format!(
                "min_delay ({:?}) exceeds max_delay ({:?})",
                self.min_delay, self.max_delay
            )));
        }
        Ok(())
    }

    /// Whether another attempt is allowed after `attempt` (1-based) failed.
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }

    /// Wait before the retry that follows failed attempt `attempt` (1-based).
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(62) as i32;
        let raw = self.multiplier * 2f64.powi(exponent);
        let min = self.min_delay.as_secs_f64();
        let max = self.max_delay.as_secs_f64();
        if !raw.is_finite() || raw >= max {
            return self.max_delay;
        }
        if raw <= min {
            return self.min_delay;
        }
        Duration::from_secs_f64(raw)
    }

    /// Every wait this policy can produce, in order.
    pub fn schedule(&self) -> Vec<Duration> {
        (1..self.max_attempts).map(|n| self.delay_after(n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert!(policy.validate().is_ok());
        assert_eq!(
            policy.schedule(),
            vec![Duration::from_secs(4), Duration::from_secs(4)]
        );
    }

    #[test]
    fn test_delay_grows_then_caps() {
        let policy = RetryPolicy {
            max_attempts: 8,
            ..RetryPolicy::default()
        };
        let secs: Vec<u64> = policy.schedule().iter().map(Duration::as_secs).collect();
        // 1, 2, 4 -> floor 4; 8; 16, 32, 64 -> cap 15
        assert_eq!(secs, vec![4, 4, 4, 8, 15, 15, 15]);
    }

    #[test]
    fn test_multiplier_scales_delay() {
        let policy = RetryPolicy::new(4, 3.0, Duration::ZERO, Duration::from_secs(60)).unwrap();
        assert_eq!(
            policy.schedule(),
            vec![
                Duration::from_secs(3),
                Duration::from_secs(6),
                Duration::from_secs(12)
            ]
        );
    }

    #[test]
    fn test_huge_attempt_numbers_cap() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_after(u32::MAX), Duration::from_secs(15));
    }

    #[test]
    fn test_should_retry() {
        let policy = RetryPolicy::default();
        assert!(policy.should_retry(1));
        assert!(policy.should_retry(2));
        assert!(!policy.should_retry(3));
    }

    #[test]
    fn test_immediate_has_no_waits() {
        let policy = RetryPolicy::immediate(3);
        assert!(policy.validate().is_ok());
        assert_eq!(policy.schedule(), vec![Duration::ZERO, Duration::ZERO]);
    }

    #[test]
    fn test_single_attempt_has_empty_schedule() {
        assert!(RetryPolicy::immediate(1).schedule().is_empty());
    }

    #[test]
    fn test_invalid_policies() {
        assert!(RetryPolicy::new(0, 1.0, Duration::ZERO, Duration::ZERO).is_err());
        assert!(RetryPolicy::new(3, -1.0, Duration::ZERO, Duration::ZERO).is_err());
        assert!(RetryPolicy::new(3, f64::NAN, Duration::ZERO, Duration::ZERO).is_err());
        assert!(
            RetryPolicy::new(3, 1.0, Duration::from_secs(10), Duration::from_secs(5)).is_err()
        );
    }
}
