//! WebView event types.

use std::sync::{Arc, Mutex};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded (DOMContentLoaded + resources).
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by the embedded view, queued for the owner's event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebViewEvent {
    /// Page load state changed. Carries the URL.
    PageLoad { state: PageLoadState, url: String },
    /// A raw message arrived from the measurement script.
    Message { body: String },
}

/// Event sink shared between the IPC handlers and the owning view.
pub type EventQueue = Arc<Mutex<Vec<WebViewEvent>>>;

/// Push an event, recovering the queue if a previous holder panicked.
pub(crate) fn push_event(queue: &EventQueue, event: WebViewEvent) {
    let mut events = queue.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    events.push(event);
}

/// Take every pending event, leaving the queue empty.
pub(crate) fn drain_events(queue: &EventQueue) -> Vec<WebViewEvent> {
    let mut events = queue.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    std::mem::take(&mut *events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_load_state_from_wry() {
        assert_eq!(
            PageLoadState::from(wry::PageLoadEvent::Started),
            PageLoadState::Started
        );
        assert_eq!(
            PageLoadState::from(wry::PageLoadEvent::Finished),
            PageLoadState::Finished
        );
    }

    #[test]
    fn drain_empties_queue_in_order() {
        let queue: EventQueue = Arc::default();
        push_event(&queue, WebViewEvent::Message { body: "1".into() });
        push_event(&queue, WebViewEvent::Message { body: "2".into() });

        let drained = drain_events(&queue);
        assert_eq!(
            drained,
            vec![
                WebViewEvent::Message { body: "1".into() },
                WebViewEvent::Message { body: "2".into() },
            ]
        );
        assert!(drain_events(&queue).is_empty());
    }
}
