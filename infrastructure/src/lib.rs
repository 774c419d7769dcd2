//! Infrastructure layer for smartlead-mcp
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod api;
pub mod config;
pub mod logging;
pub mod tools;

// Re-export commonly used types
pub use api::SmartleadClient;
pub use config::{ConfigError, ConfigLoader, FileConfig, GatewayConfig};
pub use logging::TracingLogSink;
pub use tools::JsonSchemaToolConverter;
