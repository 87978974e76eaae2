//! Window creation and view setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use autoheight_webview::{AutoHeightView, MessageEvent};

use super::core::AutoHeightApp;

impl AutoHeightApp {
    /// Create the window and the auto-height view inside it.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title("autoheight")
            .with_inner_size(winit::dpi::LogicalSize::new(800.0, 600.0));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };
        self.window = Some(window.clone());

        let width = self.window_width();
        match AutoHeightView::create(window.as_ref(), width, &self.options) {
            Ok(view) => {
                self.view = Some(view.with_on_message(log_height_change));
                true
            }
            Err(e) => {
                tracing::error!("Failed to create view: {e}");
                false
            }
        }
    }
}

fn log_height_change(event: &MessageEvent) {
    tracing::info!(data = %event.data, "content height changed");
}
