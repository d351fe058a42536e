//! Bounded retry with exponential backoff
//!
//! Retries throttled invocations only. The delay before attempt n+1 is
//! `2^n + 1` seconds (2s, 3s, 5s), which bounds worst-case latency per
//! model with the default three attempts.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::error::InvokeError;

/// Configuration for retry behavior
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first
    pub max_attempts: u32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self { max_attempts: 3 }
    }
}

/// Backoff before attempt `attempt + 1` (0-indexed)
pub fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_secs(2u64.pow(attempt) + 1)
}

/// Execute an async operation with throttle-aware retries
///
/// Any non-throttle failure, or a throttle on the final attempt, is
/// returned to the caller immediately; the caller translates it into a
/// fallback response. The backoff sleep suspends the task without
/// blocking sibling model invocations.
pub async fn with_backoff<F, Fut, T>(config: &RetryConfig, operation: F) -> Result<T, InvokeError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, InvokeError>>,
{
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) if e.is_retryable() && attempt + 1 < config.max_attempts => {
                let delay = backoff_delay(attempt);
                warn!(
                    attempt = attempt + 1,
                    max_attempts = config.max_attempts,
                    delay_s = delay.as_secs(),
                    "retrying after throttle: {}",
                    e
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
