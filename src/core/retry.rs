//! Bounded retry with linear backoff
//!
//! The wait after failed attempt `n` is `n * base_delay`. There is no cap and
//! no jitter; the worst case is bounded by the attempt count alone.

use crate::config::RetryConfig;
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// Retry policy for a fallible async operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
}

impl RetryPolicy {
    /// Create a policy; `max_attempts` is raised to 1 if zero
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    pub fn from_config(config: &RetryConfig) -> Self {
        Self::new(config.max_attempts, Duration::from_millis(config.base_delay_ms))
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay before the attempt following failed attempt `attempt` (1-based)
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay * attempt
    }

    /// Run `operation` until it succeeds or attempts run out
    ///
    /// `operation` receives the 1-based attempt number. The error of the last
    /// attempt is returned.
    pub async fn run<T, E, F, Fut>(&self, operation: F) -> Result<T, E>
    where
        E: Display,
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.run_with_sleep(tokio::time::sleep, operation).await
    }

    /// Same as [`run`](Self::run) with an injectable sleep
    pub async fn run_with_sleep<T, E, F, Fut, S, SFut>(
        &self,
        mut sleep: S,
        mut operation: F,
    ) -> Result<T, E>
    where
        E: Display,
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        S: FnMut(Duration) -> SFut,
        SFut: Future<Output = ()>,
    {
        let mut attempt = 1;

        loop {
            match operation(attempt).await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::warn!(
                        attempt = attempt,
                        max_attempts = self.max_attempts,
                        error = %e,
                        "Attempt failed"
                    );

                    if attempt >= self.max_attempts {
                        return Err(e);
                    }

                    let delay = self.delay_after(attempt);
                    crate::log_retry_attempt!(attempt + 1, self.max_attempts, delay);
                    sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&RetryConfig::default())
    }
}
