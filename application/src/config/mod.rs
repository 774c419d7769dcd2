//! Application-level configuration.
//!
//! - [`RetryPolicy`]: backoff parameters for rate-limited remote calls

pub mod retry_policy;

pub use retry_policy::{RetryPolicy, RetryPolicyError};
