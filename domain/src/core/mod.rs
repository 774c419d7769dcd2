//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ArgumentError`]: argument validation failures
//! - [`remote::RemoteRequest`]: the single HTTP operation a tool maps to
//! - [`logging::LogLevel`] / [`logging::LoggingMode`]: log severity and sink mode

pub mod error;
pub mod logging;
pub mod remote;
