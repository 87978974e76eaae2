//! AutoHeightApp struct definition and constructor.

use std::sync::Arc;
use std::time::Duration;

use winit::window::Window;

use autoheight_webview::{AutoHeightOptions, AutoHeightView};

/// How often to drain measurement messages.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Top-level application state.
pub struct AutoHeightApp {
    pub(super) options: AutoHeightOptions,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // The hosted view, created once the window exists
    pub(super) view: Option<AutoHeightView>,
}

impl AutoHeightApp {
    pub fn new(options: AutoHeightOptions) -> Self {
        Self {
            options,
            window: None,
            view: None,
        }
    }

    /// Logical width of the window's content area.
    pub(super) fn window_width(&self) -> f64 {
        self.window
            .as_ref()
            .map(|w| w.inner_size().to_logical::<f64>(w.scale_factor()).width)
            .unwrap_or(0.0)
    }
}
