//! Configuration loader with multi-source merging

use super::file_config::{ConfigError, FileConfig, GatewayConfig};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Prefix of the environment variables read at startup
pub const ENV_PREFIX: &str = "SMARTLEAD_";

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "smartlead.toml";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate configuration from all sources
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `SMARTLEAD_*`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./smartlead.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/smartlead-mcp/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<GatewayConfig, ConfigError> {
        Self::load_raw(config_path)?.into_gateway_config()
    }

    /// Merge all sources without validating
    pub fn load_raw(config_path: Option<&Path>) -> Result<FileConfig, ConfigError> {
        Ok(Self::figment(config_path).extract().map_err(Box::new)?)
    }

    fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).ignore(&["api_key"]));

        // Taken verbatim so an all-digit key keeps its exact text.
        match std::env::var(Self::api_key_var()) {
            Ok(key) => figment.merge(Serialized::default("api_key", key)),
            Err(_) => figment,
        }
    }

    fn api_key_var() -> String {
        format!("{}API_KEY", ENV_PREFIX)
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/smartlead-mcp/config.toml if set,
    /// otherwise falls back to ~/.config/smartlead-mcp/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("smartlead-mcp").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        let path = PathBuf::from(PROJECT_CONFIG_FILE);
        path.exists().then_some(path)
    }

    /// Describe the config sources in priority order.
    ///
    /// The secret itself is never included, only whether it is set.
    pub fn describe_sources(config_path: Option<&Path>) -> String {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        let key_set = std::env::var(Self::api_key_var())
            .map(|v| !v.trim().is_empty())
            .unwrap_or(false);
        lines.push(format!(
            "  [{}] Environment: {}*",
            if key_set { "KEY  " } else { "     " },
            ENV_PREFIX
        ));

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            lines.push(format!("  [{}] --config: {}", mark, path.display()));
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
            None => lines.push(format!("  [     ] Project: ./{}", PROJECT_CONFIG_FILE)),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:  {}", mark, path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines.join("\n")
    }
}
