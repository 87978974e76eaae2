//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

use serde::Deserialize;

// =============================================================================
// View Config
// =============================================================================

/// Sizing behavior of the auto-height view.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Follow the height reported by the embedded content.
    pub auto_height: bool,
    /// Initial height, and the fixed height when `auto_height` is off.
    pub default_height: u32,
    /// Fixed width in logical pixels. Unset follows the window width.
    pub width: Option<u32>,
    /// Let the embedded document scroll inside the view.
    pub scroll_enabled: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            auto_height: true,
            default_height: 100,
            width: None,
            scroll_enabled: false,
        }
    }
}

// =============================================================================
// Script Config
// =============================================================================

/// Measurement script timing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    /// Interval between bridge readiness checks (valid range: 10-10000).
    pub poll_interval_ms: u32,
    /// Give up after this many readiness checks. Unset polls forever.
    pub max_polls: Option<u32>,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 200,
            max_polls: None,
        }
    }
}

// =============================================================================
// WebView Config
// =============================================================================

/// Options forwarded unchanged to the underlying web view.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebViewSection {
    pub transparent: bool,
    pub devtools: bool,
    pub user_agent: Option<String>,
    pub clipboard: bool,
    pub autoplay: bool,
}

impl Default for WebViewSection {
    fn default() -> Self {
        Self {
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: None,
            clipboard: true,
            autoplay: true,
        }
    }
}

// =============================================================================
// Logging Config
// =============================================================================

/// Log level.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// The `tracing` filter directive for this level.
    pub fn as_directive(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

// =============================================================================
// Root Config
// =============================================================================

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AutoHeightConfig {
    pub view: ViewConfig,
    pub script: ScriptConfig,
    pub webview: WebViewSection,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
