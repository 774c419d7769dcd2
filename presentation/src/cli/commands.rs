//! CLI command definitions

use clap::{Parser, ValueEnum};
use smartlead_domain::core::logging::LoggingMode;
use std::path::PathBuf;

/// Transport the MCP server listens on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TransportKind {
    /// Newline-delimited JSON-RPC on stdin/stdout
    #[default]
    Stdio,
    /// Newline-delimited JSON-RPC on one accepted TCP connection
    Tcp,
}

impl TransportKind {
    /// Logging mode for the lifetime of the process.
    ///
    /// On stdio, stdout is the protocol stream, so logs go to the side channel.
    /// Over TCP the client receives them as `notifications/message`.
    pub fn logging_mode(self) -> LoggingMode {
        match self {
            TransportKind::Stdio => LoggingMode::SideChannel,
            TransportKind::Tcp => LoggingMode::ProtocolNative,
        }
    }
}

/// CLI arguments for smartlead-mcp
#[derive(Parser, Debug)]
#[command(name = "smartlead-mcp")]
#[command(author, version, about = "MCP server exposing Smartlead campaign operations as tools")]
#[command(long_about = r#"
smartlead-mcp exposes the Smartlead campaign API as MCP tools.

Each tool call is validated, sent as exactly one HTTP request, retried with
exponential backoff while the API answers 429, and returned as a text result.

Configuration is loaded from (in priority order):
1. SMARTLEAD_* environment variables (SMARTLEAD_API_KEY is required)
2. --config <path>     Explicit config file
3. ./smartlead.toml    Project-level config
4. ~/.config/smartlead-mcp/config.toml   Global config

Example:
  SMARTLEAD_API_KEY=... smartlead-mcp
  smartlead-mcp --transport tcp --listen 127.0.0.1:7878 -v
"#)]
pub struct Cli {
    /// Transport to serve MCP on
    #[arg(short, long, value_enum, default_value = "stdio")]
    pub transport: TransportKind,

    /// Address to listen on with --transport tcp
    #[arg(long, value_name = "ADDR", default_value = "127.0.0.1:7878")]
    pub listen: String,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
