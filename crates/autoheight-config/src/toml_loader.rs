//! Reading and seeding `config.toml`.
//!
//! Nothing here logs: the config decides the log level, so the caller
//! reports the outcome once logging is up.

use crate::schema::AutoHeightConfig;
use crate::validation;
use autoheight_common::ConfigError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Where a loaded config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from this file.
    File(PathBuf),
    /// No file existed, so the commented default was written here.
    Created(PathBuf),
    /// The platform has no config directory.
    BuiltIn,
}

/// A validated config and its origin.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: AutoHeightConfig,
    pub source: ConfigSource,
}

/// Parse TOML text and validate it. Missing fields take their defaults.
pub fn parse_config(content: &str) -> Result<AutoHeightConfig, ConfigError> {
    let config: AutoHeightConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validation::validate(&config)?;
    Ok(config)
}

/// Read and validate the config at `path`.
pub fn load_from_path(path: &Path) -> Result<AutoHeightConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    parse_config(&content)
}

/// Read the config at `path`, seeding it with the commented default first
/// if it does not exist yet.
pub fn load_or_create(path: &Path) -> Result<LoadedConfig, ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok(LoadedConfig {
            config,
            source: ConfigSource::File(path.to_path_buf()),
        }),
        Err(ConfigError::FileNotFound(_)) => {
            write_default_config(path)?;
            Ok(LoadedConfig {
                config: AutoHeightConfig::default(),
                source: ConfigSource::Created(path.to_path_buf()),
            })
        }
        Err(e) => Err(e),
    }
}

/// `<config dir>/autoheight/config.toml`, if the platform has a config dir.
///
/// On macOS: `~/Library/Application Support/autoheight/config.toml`
/// On Linux: `~/.config/autoheight/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("autoheight").join("config.toml"))
}

/// Write the commented default config to `path`, creating parent directories.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, DEFAULT_CONFIG_TOML).map_err(io_err)
}

const DEFAULT_CONFIG_TOML: &str = r##"# Auto-height viewer configuration
# Only override what you want to change -- missing fields use defaults.

[view]
# auto_height = true
# default_height = 100   # 0-100000
# width = 480            # unset follows the window width
# scroll_enabled = false

[script]
# poll_interval_ms = 200 # 10-10000
# max_polls = 50         # unset polls until the bridge is ready

[webview]
# transparent = false
# devtools = false
# user_agent = "autoheight/0.1"
# clipboard = true
# autoplay = true

[logging]
# level = "info"         # trace, debug, info, warn, error
"##;

#[cfg(test)]
mod tests;
