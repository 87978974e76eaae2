//! Merges the config file and CLI flags into view options.

use autoheight_common::Result;
use autoheight_config::AutoHeightConfig;
use autoheight_webview::{AutoHeightOptions, ScriptOptions, Source, WebViewConfig};

use crate::cli::Args;

/// Page shown when neither `--url` nor `--html-file` is given.
pub const DEMO_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
  body { margin: 0; padding: 16px; font-family: sans-serif; }
  p { margin: 0 0 8px; }
</style>
</head>
<body>
  <button id="grow">Add paragraph</button>
  <button id="shrink">Remove paragraph</button>
  <div id="items"><p>The view follows the height of this page.</p></div>
  <script>
    var items = document.getElementById('items');
    document.getElementById('grow').onclick = function () {
      var p = document.createElement('p');
      p.textContent = 'Paragraph ' + (items.children.length + 1);
      items.appendChild(p);
    };
    document.getElementById('shrink').onclick = function () {
      if (items.children.length > 1) { items.removeChild(items.lastElementChild); }
    };
  </script>
</body>
</html>
"#;

/// Build view options. CLI flags win over the config file.
pub fn build_options(config: &AutoHeightConfig, args: &Args) -> Result<AutoHeightOptions> {
    let source = if let Some(url) = &args.url {
        Source::Url(url.clone())
    } else if let Some(path) = &args.html_file {
        Source::Html(std::fs::read_to_string(path)?)
    } else {
        Source::Html(DEMO_HTML.to_string())
    };

    Ok(AutoHeightOptions {
        source,
        auto_height: config.view.auto_height && !args.no_auto_height,
        default_height: args.default_height.unwrap_or(config.view.default_height),
        width: args.width.or(config.view.width),
        scroll_enabled: config.view.scroll_enabled,
        origin: (0.0, 0.0),
        script: ScriptOptions {
            poll_interval_ms: config.script.poll_interval_ms,
            max_polls: config.script.max_polls,
        },
        webview: WebViewConfig {
            transparent: config.webview.transparent,
            devtools: config.webview.devtools,
            user_agent: config.webview.user_agent.clone(),
            clipboard: config.webview.clipboard,
            autoplay: config.webview.autoplay,
        },
    })
}
