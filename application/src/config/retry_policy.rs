//! Retry policy for rate-limited remote calls.
//!
//! [`RetryPolicy`] is fixed at startup and read by
//! [`RetryExecutor`](crate::use_cases::retry::RetryExecutor) for every call.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Rejected retry policy values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RetryPolicyError {
    #[error("max_attempts must be at least 1 (got {0})")]
    ZeroAttempts(u32),

    #[error("backoff_factor must be a finite number >= 1.0 (got {0})")]
    InvalidBackoffFactor(f64),

    #[error("initial_delay_ms ({initial}) must not exceed max_delay_ms ({max})")]
    InitialExceedsMax { initial: u64, max: u64 },
}

/// Exponential backoff parameters.
///
/// The delay before retry `n` (1-based) is
/// `min(initial_delay_ms * backoff_factor^(n - 1), max_delay_ms)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts including the first one.
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
    pub backoff_factor: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay_ms: 1000,
            max_delay_ms: 10000,
            backoff_factor: 2.0,
        }
    }
}

impl RetryPolicy {
    // ==================== Builder Methods ====================

    pub fn with_max_attempts(mut self, max: u32) -> Self {
        self.max_attempts = max;
        self
    }

    pub fn with_initial_delay_ms(mut self, ms: u64) -> Self {
        self.initial_delay_ms = ms;
        self
    }

    pub fn with_max_delay_ms(mut self, ms: u64) -> Self {
        self.max_delay_ms = ms;
        self
    }

    pub fn with_backoff_factor(mut self, factor: f64) -> Self {
        self.backoff_factor = factor;
        self
    }

    // ==================== Queries ====================

    /// Delay to wait after failed attempt `attempt` (1-based) before the next one.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(i32::MAX as u32) as i32;
        let raw = self.initial_delay_ms as f64 * self.backoff_factor.powi(exponent);
        let capped = raw.min(self.max_delay_ms as f64);
        Duration::from_millis(capped as u64)
    }

    pub fn validate(&self) -> Result<(), RetryPolicyError> {
        if self.max_attempts == 0 {
            return Err(RetryPolicyError::ZeroAttempts(self.max_attempts));
        }
        if !self.backoff_factor.is_finite() || self.backoff_factor < 1.0 {
            return Err(RetryPolicyError::InvalidBackoffFactor(self.backoff_factor));
        }
        if self.initial_delay_ms > self.max_delay_ms {
            return Err(RetryPolicyError::InitialExceedsMax {
                initial: self.initial_delay_ms,
                max: self.max_delay_ms,
            });
        }
        Ok(())
    }
}
