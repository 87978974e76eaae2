use crate::script::ScriptOptions;
use crate::sizing::SizingPolicy;

/// Content loaded into the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    Html(String),
}

impl Default for Source {
    fn default() -> Self {
        Self::Html("<html><body></body></html>".to_string())
    }
}

/// Options forwarded unchanged to the underlying `wry` builder.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Whether the WebView background should be transparent.
    pub transparent: bool,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Whether to enable clipboard access.
    pub clipboard: bool,
    /// Whether to enable autoplay for media.
    pub autoplay: bool,
}

impl Default for WebViewConfig {
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

/// Configuration for an auto-height view.
///
/// The message callback is not part of the options; set it with
/// [`AutoHeightView::with_on_message`](super::AutoHeightView::with_on_message).
#[derive(Debug, Clone)]
pub struct AutoHeightOptions {
    pub source: Source,
    /// Follow the height reported by the content.
    pub auto_height: bool,
    /// Initial height, and the fixed height when `auto_height` is off.
    pub default_height: u32,
    /// Fixed width. `None` follows the host window width.
    pub width: Option<u32>,
    /// Let the document scroll inside the view.
    pub scroll_enabled: bool,
    /// Top-left corner of the view inside the parent window.
    pub origin: (f64, f64),
    pub script: ScriptOptions,
    pub webview: WebViewConfig,
}

impl Default for AutoHeightOptions {
    fn default() -> Self {
        Self {
            source: Source::default(),
            auto_height: true,
            default_height: 100,
            width: None,
            scroll_enabled: false,
            origin: (0.0, 0.0),
            script: ScriptOptions::default(),
            webview: WebViewConfig::default(),
        }
    }
}

impl AutoHeightOptions {
    /// Options that load a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            source: Source::Url(url.into()),
            ..Default::default()
        }
    }

    /// Options that render inline HTML.
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            source: Source::Html(html.into()),
            ..Default::default()
        }
    }

    pub fn sizing(&self) -> SizingPolicy {
        SizingPolicy {
            auto_height: self.auto_height,
            default_height: self.default_height,
            width: self.width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_component_defaults() {
        let options = AutoHeightOptions::default();
        assert!(options.auto_height);
        assert_eq!(options.default_height, 100);
        assert!(options.width.is_none());
        assert!(!options.scroll_enabled);
        assert_eq!(options.script.poll_interval_ms, 200);
    }

    #[test]
    fn with_url_sets_source() {
        let options = AutoHeightOptions::with_url("https://example.com");
        assert_eq!(options.source, Source::Url("https://example.com".into()));
    }

    #[test]
    fn sizing_mirrors_options() {
        let options = AutoHeightOptions {
            auto_height: false,
            default_height: 42,
            width: Some(300),
            ..AutoHeightOptions::with_html("<p>hi</p>")
        };
        assert_eq!(
            options.sizing(),
            SizingPolicy {
                auto_height: false,
                default_height: 42,
                width: Some(300),
            }
        );
    }
}
