mod app_state;
mod cli;
mod options;

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use autoheight_common::ConfigError;
use autoheight_config::{AutoHeightConfig, ConfigSource, LoadedConfig};

/// CLI override first, then the config file's level.
fn log_directive(args: &cli::Args, config: &AutoHeightConfig) -> String {
    match &args.log_level {
        Some(directive) => directive.clone(),
        None => format!("autoheight={}", config.logging.level.as_directive()),
    }
}

/// Report how the config was obtained, falling back to defaults on error.
///
/// Runs after logging is initialized, since the config picks the level.
fn settle_config(loaded: Result<LoadedConfig, ConfigError>) -> AutoHeightConfig {
    match loaded {
        Ok(LoadedConfig { config, source }) => {
            match source {
                ConfigSource::File(path) => {
                    tracing::info!("Loaded config from {}", path.display())
                }
                ConfigSource::Created(path) => {
                    tracing::info!("Created default config at {}", path.display())
                }
                ConfigSource::BuiltIn => {
                    tracing::debug!("No config directory, using defaults")
                }
            }
            config
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            AutoHeightConfig::default()
        }
    }
}

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // The config carries the log level, so it is read before logging starts
    // and reported right after.
    let loaded = autoheight_config::load_config(args.config.as_deref());
    let directive = match &loaded {
        Ok(l) => log_directive(&args, &l.config),
        Err(_) => log_directive(&args, &AutoHeightConfig::default()),
    };

    // Initialize logging
    let (directive, bad_directive) = match directive.parse::<Directive>() {
        Ok(d) => (d, None),
        Err(e) => (LevelFilter::INFO.into(), Some(e)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();

    tracing::info!("autoheight v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = bad_directive {
        tracing::warn!("Ignoring log level: {e}");
    }

    let config = settle_config(loaded);

    let options = match options::build_options(&config, &args) {
        Ok(o) => o,
        Err(e) => {
            tracing::error!("Failed to prepare view: {e}");
            return;
        }
    };

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return;
        }
    };
    let mut app = app_state::AutoHeightApp::new(options);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
