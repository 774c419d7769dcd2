//! Resilient call executor.
//!
//! Wraps one asynchronous unit of work and re-runs it with exponential
//! backoff while it keeps failing with a rate-limit error. Any other failure
//! is returned on first occurrence.

use crate::config::RetryPolicy;
use crate::ports::campaign_api::RemoteError;
use crate::ports::log_sink::GatewayContext;
use smartlead_domain::core::logging::LogLevel;
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use tracing::debug;

/// Failures that know whether another attempt may succeed.
pub trait Retryable {
    fn is_retryable(&self) -> bool;
}

impl Retryable for RemoteError {
    fn is_retryable(&self) -> bool {
        self.is_rate_limited()
    }
}

/// Retry-with-backoff wrapper shared by every tool invocation.
#[derive(Debug, Clone)]
pub struct RetryExecutor {
    policy: RetryPolicy,
    context: Arc<GatewayContext>,
}

impl RetryExecutor {
    pub fn new(policy: RetryPolicy, context: Arc<GatewayContext>) -> Self {
        Self { policy, context }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Run `op` until it succeeds, fails with a non-retryable error, or
    /// `max_attempts` is reached. The last failure is returned unchanged.
    ///
    /// `label` names the operation in retry log entries.
    pub async fn run<T, E, F, Fut>(&self, label: &str, mut op: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Retryable + Display,
    {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(error) if error.is_retryable() && attempt < max_attempts => {
                    let delay = self.policy.delay_for(attempt);
                    self.context.log(
                        LogLevel::Warning,
                        format!(
                            "Rate limited in {}, retrying ({}/{}) after {}ms: {}",
                            label,
                            attempt,
                            max_attempts,
                            delay.as_millis(),
                            error
                        ),
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(error) => {
                    debug!(label, attempt, "giving up: {}", error);
                    return Err(error);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingLogSink;
    use smartlead_domain::core::logging::LoggingMode;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::time::{Duration, Instant};

    fn executor(policy: RetryPolicy) -> (RetryExecutor, Arc<RecordingLogSink>) {
        let sink = Arc::new(RecordingLogSink::new(LoggingMode::SideChannel));
        let context = Arc::new(GatewayContext::new(sink.clone()));
        (RetryExecutor::new(policy, context), sink)
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_timing_is_deterministic() {
        let (executor, sink) = executor(RetryPolicy::default());
        let calls = Mutex::new(Vec::new());

        let result: Result<&str, RemoteError> = executor
            .run("get_campaign", || {
                calls.lock().unwrap().push(Instant::now());
                let attempt = calls.lock().unwrap().len();
                async move {
                    if attempt < 3 {
                        Err(RemoteError::from_status(429, None))
                    } else {
                        Ok("done")
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), "done");
        let calls = calls.into_inner().unwrap();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[1] - calls[0], Duration::from_millis(1000));
        assert_eq!(calls[2] - calls[1], Duration::from_millis(2000));

        let warnings = sink.at_level(LogLevel::Warning);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("get_campaign"));
        assert!(warnings[0].contains("(1/3)"));
        assert!(warnings[0].contains("1000ms"));
        assert!(warnings[1].contains("(2/3)"));
        assert!(warnings[1].contains("2000ms"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_retryable_failure_short_circuits() {
        let (executor, sink) = executor(RetryPolicy::default());
        let count = AtomicU32::new(0);

        let result: Result<(), RemoteError> = executor
            .run("delete_campaign", || {
                count.fetch_add(1, Ordering::SeqCst);
                async { Err(RemoteError::from_status(404, None)) }
            })
            .await;

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(result.unwrap_err(), RemoteError::from_status(404, None));
        assert!(sink.at_level(LogLevel::Warning).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhausted_retries_return_last_failure() {
        let (executor, sink) = executor(RetryPolicy::default());
        let count = AtomicU32::new(0);

        let result: Result<(), RemoteError> = executor
            .run("list_campaigns", || {
                let n = count.fetch_add(1, Ordering::SeqCst) + 1;
                async move { Err(RemoteError::new(format!("rate limit hit #{}", n))) }
            })
            .await;

        assert_eq!(count.load(Ordering::SeqCst), 3);
        assert_eq!(result.unwrap_err().message, "rate limit hit #3");
        assert_eq!(sink.at_level(LogLevel::Warning).len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_attempt_policy_never_sleeps() {
        let (executor, _sink) = executor(RetryPolicy::default().with_max_attempts(1));
        let count = AtomicU32::new(0);
        let start = Instant::now();

        let result: Result<(), RemoteError> = executor
            .run("ping", || {
                count.fetch_add(1, Ordering::SeqCst);
                async { Err(RemoteError::from_status(429, None)) }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_capped_by_max() {
        let policy = RetryPolicy::default()
            .with_max_attempts(4)
            .with_initial_delay_ms(1000)
            .with_max_delay_ms(1500);
        let (executor, _sink) = executor(policy);
        let start = Instant::now();

        let result: Result<(), RemoteError> = executor
            .run("capped", || async { Err(RemoteError::from_status(429, None)) })
            .await;

        assert!(result.is_err());
        // 1000 + 1500 + 1500
        assert_eq!(start.elapsed(), Duration::from_millis(4000));
    }
}
