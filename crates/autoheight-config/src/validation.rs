//! Configuration validation.
//!
//! Checks numeric ranges and collects every violation into one error.

use crate::schema::AutoHeightConfig;
use autoheight_common::ConfigError;

/// Largest height or width accepted from the config file.
const MAX_DIMENSION: u32 = 100_000;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &AutoHeightConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range(
        &mut errors,
        "view.default_height",
        config.view.default_height,
        0,
        MAX_DIMENSION,
    );
    if let Some(width) = config.view.width {
        validate_range(&mut errors, "view.width", width, 1, MAX_DIMENSION);
    }

    validate_range(
        &mut errors,
        "script.poll_interval_ms",
        config.script.poll_interval_ms,
        10,
        10_000,
    );
    if let Some(max_polls) = config.script.max_polls {
        validate_range(&mut errors, "script.max_polls", max_polls, 1, u32::MAX);
    }

    if let Some(ua) = &config.webview.user_agent {
        if ua.trim().is_empty() {
            errors.push("webview.user_agent must not be empty".into());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}
