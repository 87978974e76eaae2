use tracing::debug;
use wry::WebViewBuilder;

use crate::events::{push_event, EventQueue, PageLoadState, WebViewEvent};

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

/// Queue every IPC body as-is. Validation happens when the owner drains.
pub(super) fn attach_ipc_handler(
    builder: WebViewBuilder<'_>,
    events: EventQueue,
) -> WebViewBuilder<'_> {
    builder.with_ipc_handler(move |request| {
        let body = request.body().to_string();
        debug!(body_len = body.len(), "measurement message from JS");
        push_event(&events, WebViewEvent::Message { body });
    })
}

pub(super) fn attach_page_load_handler(
    builder: WebViewBuilder<'_>,
    events: EventQueue,
) -> WebViewBuilder<'_> {
    builder.with_on_page_load_handler(move |event, url| {
        let state = PageLoadState::from(event);
        push_event(&events, WebViewEvent::PageLoad { state, url });
    })
}
