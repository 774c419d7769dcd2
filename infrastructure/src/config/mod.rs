//! Configuration loading for smartlead-mcp
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SMARTLEAD_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./smartlead.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/smartlead-mcp/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigError, DEFAULT_API_URL, FileConfig, GatewayConfig};
pub use loader::{ConfigLoader, ENV_PREFIX, PROJECT_CONFIG_FILE};
