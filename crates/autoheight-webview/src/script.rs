//! Measurement script injected into the embedded content.
//!
//! The injected text has two parts:
//! - a **shim**, which installs `window.__autoHeight` with a readiness
//!   sentinel and a `post` function bound to the platform's IPC channel;
//! - the **measurement body**, which polls for that sentinel, then observes
//!   `document.body` and posts `max(clientHeight, scrollHeight)` of the root
//!   and body elements on every resize.
//!
//! The body is shared by every variant. Variants only differ in where the
//! shim goes and which native channel it binds.

use serde_json::json;

/// Value of `window.__autoHeight.ready` once the shim has run.
pub const BRIDGE_SENTINEL: &str = "autoheight-bridge-ready";

/// Default interval between readiness checks.
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 200;

/// Measurement body. Invoked with an options object:
/// `{ sentinel, interval, maxPolls }` (`maxPolls == 0` polls forever).
///
/// The bridge counts as ready once the sentinel is set and its channel
/// resolves to something with `postMessage`.
const MEASUREMENT_BODY: &str = r#"(function (opts) {
    var polls = 0;

    function measure() {
        var root = document.documentElement;
        var body = document.body;
        return Math.max(
            root.clientHeight,
            root.scrollHeight,
            body.clientHeight,
            body.scrollHeight
        );
    }

    function postResize() {
        window.__autoHeight.post(String(measure()));
    }

    function bridgeReady() {
        var bridge = window.__autoHeight;
        return !!bridge &&
            bridge.ready === opts.sentinel &&
            typeof bridge.post === 'function' &&
            typeof bridge.channel === 'function' &&
            !!bridge.channel();
    }

    function waitForBridge() {
        if (!bridgeReady()) {
            polls += 1;
            if (opts.maxPolls > 0 && polls >= opts.maxPolls) {
                return;
            }
            setTimeout(waitForBridge, opts.interval);
            return;
        }
        new ResizeObserver(postResize).observe(document.body);
        postResize();
    }

    // First check runs after the rest of the injected text, shim included
    function start() {
        setTimeout(waitForBridge, 0);
    }

    if (document.readyState === 'loading') {
        document.addEventListener('DOMContentLoaded', start);
    } else {
        start();
    }
})"#;

/// Hides document overflow so the view never scrolls internally.
pub const SCROLL_LOCK_SCRIPT: &str = r#"(function () {
    function lock() {
        document.documentElement.style.overflow = 'hidden';
        document.body.style.overflow = 'hidden';
    }
    if (document.readyState === 'loading') {
        document.addEventListener('DOMContentLoaded', lock);
    } else {
        lock();
    }
})();"#;

// =============================================================================
// PLATFORM SELECTION
// =============================================================================

/// Host platform family, as far as the IPC channel is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    /// macOS / iOS (WKWebView).
    Apple,
    /// Windows (WebView2), Linux (WebKitGTK), Android.
    Other,
}

impl HostPlatform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(any(target_os = "macos", target_os = "ios")) {
            Self::Apple
        } else {
            Self::Other
        }
    }
}

/// Shape of the injected script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptVariant {
    /// Shim first, bound to `window.ipc`.
    Primary,
    /// Body first, shim bound to `window.webkit.messageHandlers.ipc`.
    Alternate,
}

impl ScriptVariant {
    pub fn for_platform(platform: HostPlatform) -> Self {
        match platform {
            HostPlatform::Apple => Self::Alternate,
            HostPlatform::Other => Self::Primary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShimPlacement {
    BeforeBody,
    AfterBody,
}

struct ShimStrategy {
    placement: ShimPlacement,
    /// JS expression yielding an object with `postMessage`, or a falsy value.
    channel: &'static str,
}

static STRATEGIES: [(ScriptVariant, ShimStrategy); 2] = [
    (
        ScriptVariant::Primary,
        ShimStrategy {
            placement: ShimPlacement::BeforeBody,
            channel: "window.ipc",
        },
    ),
    (
        ScriptVariant::Alternate,
        ShimStrategy {
            placement: ShimPlacement::AfterBody,
            channel: "(window.webkit && window.webkit.messageHandlers && \
                      window.webkit.messageHandlers.ipc) || window.ipc",
        },
    ),
];

fn strategy(variant: ScriptVariant) -> &'static ShimStrategy {
    // STRATEGIES covers every variant
    let (_, s) = STRATEGIES
        .iter()
        .find(|(v, _)| *v == variant)
        .unwrap_or(&STRATEGIES[0]);
    s
}

// =============================================================================
// GENERATION
// =============================================================================

/// Readiness polling parameters for the measurement body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptOptions {
    pub poll_interval_ms: u32,
    /// Stop polling after this many failed checks. `None` never gives up.
    pub max_polls: Option<u32>,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            max_polls: None,
        }
    }
}

/// Generate the shim for a variant.
pub fn generate_shim(variant: ScriptVariant) -> String {
    let sentinel = json!(BRIDGE_SENTINEL);
    let channel = strategy(variant).channel;
    format!(
        "window.__autoHeight = {{ \
            ready: {sentinel}, \
            channel: function () {{ return {channel}; }}, \
            post: function (data) {{ \
                var channel = this.channel(); \
                if (channel) {{ channel.postMessage(data); }} \
            }} \
        }};"
    )
}

/// Generate the invocation of the shared measurement body.
pub fn generate_measurement(options: &ScriptOptions) -> String {
    let opts = json!({
        "sentinel": BRIDGE_SENTINEL,
        "interval": options.poll_interval_ms,
        "maxPolls": options.max_polls.unwrap_or(0),
    });
    format!("{MEASUREMENT_BODY}({opts});")
}

/// Full injected script for a variant.
pub fn build_script(variant: ScriptVariant, options: &ScriptOptions) -> String {
    let shim = generate_shim(variant);
    let body = generate_measurement(options);
    match strategy(variant).placement {
        ShimPlacement::BeforeBody => format!("{shim}\n{body}"),
        ShimPlacement::AfterBody => format!("{body}\n{shim}"),
    }
}

/// Injected script for the given host platform.
pub fn script_for_platform(platform: HostPlatform, options: &ScriptOptions) -> String {
    build_script(ScriptVariant::for_platform(platform), options)
}

// =============================================================================
// TESTS
// =============================================================================
