//! MCP (JSON-RPC 2.0) server
//!
//! - [`protocol`]: wire types and error codes
//! - [`transport`]: frame classification and the single-writer outbound queue
//! - [`server`]: the per-connection request loop
//! - [`log_sink`]: protocol-native log notifications

pub mod error;
pub mod log_sink;
pub mod protocol;
pub mod server;
pub mod transport;

pub use error::McpError;
pub use log_sink::ProtocolLogSink;
pub use server::McpServer;
pub use transport::{Outbound, Outgoing};
