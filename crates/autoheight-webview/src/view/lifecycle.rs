use std::sync::Arc;

use autoheight_common::{AutoHeightError, Rect, Result};
use tracing::{debug, info};
use wry::raw_window_handle;
use wry::{WebView, WebViewBuilder};

use crate::events::EventQueue;
use crate::script::{script_for_platform, HostPlatform, SCROLL_LOCK_SCRIPT};

use super::bounds::rect_to_wry;
use super::handlers::{attach_ipc_handler, attach_page_load_handler};
use super::types::{AutoHeightOptions, Source};
use super::AutoHeightView;

/// Script injected into every page load for these options.
pub fn injected_script(platform: HostPlatform, options: &AutoHeightOptions) -> String {
    let mut script = script_for_platform(platform, &options.script);
    if !options.scroll_enabled {
        script.push('\n');
        script.push_str(SCROLL_LOCK_SCRIPT);
    }
    script
}

impl AutoHeightView<WebView> {
    /// Create the view as a child of `window`, which is `window_width`
    /// logical pixels wide.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        window_width: f64,
        options: &AutoHeightOptions,
    ) -> Result<Self> {
        Self::create_for_platform(window, window_width, options, HostPlatform::current())
    }

    /// Like [`create`](Self::create) with an explicit script platform.
    pub fn create_for_platform<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        window_width: f64,
        options: &AutoHeightOptions,
        platform: HostPlatform,
    ) -> Result<Self> {
        let events: EventQueue = Arc::default();
        let script = injected_script(platform, options);

        // Default height until the first measurement arrives
        let (width, height) = options
            .sizing()
            .display_size(options.default_height, window_width);
        let bounds = Rect::new(options.origin.0, options.origin.1, width, height);

        let config = &options.webview;
        let mut builder = WebViewBuilder::new()
            .with_bounds(rect_to_wry(&bounds))
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_focused(false)
            .with_initialization_script(&script);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = attach_ipc_handler(builder, Arc::clone(&events));
        builder = attach_page_load_handler(builder, Arc::clone(&events));

        builder = match &options.source {
            Source::Url(url) => builder.with_url(url),
            Source::Html(html) => builder.with_html(html),
        };

        let webview = builder
            .build_as_child(window)
            .map_err(|e| AutoHeightError::WebView(e.to_string()))?;

        debug!(?platform, script_len = script.len(), "measurement script injected");
        info!(
            width = bounds.width,
            height = bounds.height,
            auto_height = options.auto_height,
            "auto-height view created"
        );

        let mut view = Self::from_parts(webview, options, window_width, events);
        view.applied = Some(bounds);
        Ok(view)
    }
}
