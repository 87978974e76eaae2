//! Auto-height viewer configuration.
//!
//! TOML-based configuration with full validation. All sections use
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use autoheight_config::load_config;
//!
//! let loaded = load_config(None).expect("failed to load config");
//! println!("{:?}: {:?}", loaded.source, loaded.config.view);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::AutoHeightConfig;
pub use toml_loader::{ConfigSource, LoadedConfig};

use autoheight_common::ConfigError;
use std::path::Path;

/// Load and validate a config.
///
/// An explicit `path` must exist. Without one, the platform default path is
/// used and seeded with a commented default on first run.
pub fn load_config(path: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    if let Some(path) = path {
        return Ok(LoadedConfig {
            config: toml_loader::load_from_path(path)?,
            source: ConfigSource::File(path.to_path_buf()),
        });
    }
    match toml_loader::default_config_path() {
        Some(path) => toml_loader::load_or_create(&path),
        None => Ok(LoadedConfig {
            config: AutoHeightConfig::default(),
            source: ConfigSource::BuiltIn,
        }),
    }
}
