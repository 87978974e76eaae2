use autoheight_common::{AutoHeightError, Rect, Result};

use super::bounds::rect_to_wry;

/// Stops the current navigation. wry has no native call for this.
const STOP_LOADING_SCRIPT: &str = "window.stop();";

/// The embedded web view, as seen by [`AutoHeightView`](super::AutoHeightView).
///
/// Must be used from the UI thread only.
pub trait EmbeddedView {
    /// Position and size the view inside its parent window.
    fn set_bounds(&self, bounds: Rect) -> Result<()>;

    /// Abort the navigation in progress.
    fn stop_loading(&self) -> Result<()>;

    /// Reload the current page. The injected script runs again from scratch.
    fn reload(&self) -> Result<()>;
}

fn webview_error(e: wry::Error) -> AutoHeightError {
    AutoHeightError::WebView(e.to_string())
}

impl EmbeddedView for wry::WebView {
    fn set_bounds(&self, bounds: Rect) -> Result<()> {
        wry::WebView::set_bounds(self, rect_to_wry(&bounds)).map_err(webview_error)
    }

    fn stop_loading(&self) -> Result<()> {
        self.evaluate_script(STOP_LOADING_SCRIPT)
            .map_err(webview_error)
    }

    fn reload(&self) -> Result<()> {
        wry::WebView::reload(self).map_err(webview_error)
    }
}
