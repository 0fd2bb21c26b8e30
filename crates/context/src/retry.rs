//! Bounded-retry driver for throttled model calls
//!
//! Separates "what can be retried" (the error's retryability class) from
//! "how many times and how long to wait" (the policy), so the backoff policy
//! is unit-testable without a network call.
//!
//! The wait is a plain `tokio::time::sleep`: it suspends only the calling
//! task, and dropping the future (caller disconnect) aborts the loop without
//! completing the remaining attempts.

use std::future::Future;
use std::time::Duration;

use metrics::counter;
use queryforge_common::errors::{AppError, Result};
use queryforge_common::metrics::METRICS_PREFIX;
use tracing::warn;

use queryforge_common::config::RetryConfig;

/// Bounded exponential-backoff policy
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total invocation attempts (initial call + retries)
    pub max_attempts: u32,

    /// Delay before the first retry, doubled after each subsequent retry
    pub initial_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_secs(2),
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            initial_delay: Duration::from_secs(config.initial_backoff_secs),
        }
    }
}

/// Drive an async operation with bounded exponential backoff.
///
/// Only errors whose `is_retryable()` holds are retried; any other error
/// propagates immediately. When the retry budget is exhausted the last
/// throttling error is reported as `RetryExhausted`.
pub async fn retry_with_backoff<T, F, Fut>(policy: RetryPolicy, mut op: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut delay = policy.initial_delay;

    for attempt in 1..=policy.max_attempts {
        counter!(format!("{}_llm_invocations_total", METRICS_PREFIX)).increment(1);

        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && attempt < policy.max_attempts => {
                warn!(
                    attempt,
                    max_attempts = policy.max_attempts,
                    delay_secs = delay.as_secs(),
                    error = %err,
                    "throttled, backing off before retry"
                );
                counter!(format!("{}_llm_retries_total", METRICS_PREFIX)).increment(1);

                tokio::time::sleep(delay).await;
                delay *= 2;
            }
            Err(err) if err.is_retryable() => {
                return Err(AppError::RetryExhausted {
                    attempts: policy.max_attempts,
                });
            }
            Err(err) => return Err(err),
        }
    }

    // max_attempts >= 1 makes the loop return before reaching here
    Err(AppError::RetryExhausted {
        attempts: policy.max_attempts,
    })
}
