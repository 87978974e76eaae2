//! The auto-height view.
//!
//! `AutoHeightView` owns an embedded view, the last accepted height, and the
//! queue its IPC handler writes into. The owner drains that queue from its
//! event loop with [`AutoHeightView::process_events`].

use std::sync::Arc;

use autoheight_common::{Rect, Result};
use tracing::{debug, warn};

use crate::events::{self, EventQueue, WebViewEvent};
use crate::message::MessageEvent;
use crate::reconciler::HeightReconciler;
use crate::sizing::SizingPolicy;

mod bounds;
mod embedded;
mod handlers;
mod lifecycle;
mod types;

pub use bounds::rect_to_wry;
pub use embedded::EmbeddedView;
pub use lifecycle::injected_script;
pub use types::{AutoHeightOptions, Source, WebViewConfig};

/// Called with the original message whenever the height changes.
pub type MessageCallback = Box<dyn FnMut(&MessageEvent)>;

/// An embedded web view that resizes itself to its content's height.
pub struct AutoHeightView<V: EmbeddedView = wry::WebView> {
    view: V,
    reconciler: HeightReconciler,
    sizing: SizingPolicy,
    origin: (f64, f64),
    window_width: f64,
    /// Bounds last pushed to the view.
    applied: Option<Rect>,
    events: EventQueue,
    on_message: MessageCallback,
}

impl<V: EmbeddedView> AutoHeightView<V> {
    /// Wrap an already constructed view.
    ///
    /// Messages must reach [`handle_message`](Self::handle_message), either
    /// directly or through [`event_queue`](Self::event_queue).
    pub fn with_view(view: V, options: &AutoHeightOptions, window_width: f64) -> Self {
        Self::from_parts(view, options, window_width, Arc::default())
    }

    pub(crate) fn from_parts(
        view: V,
        options: &AutoHeightOptions,
        window_width: f64,
        events: EventQueue,
    ) -> Self {
        Self {
            view,
            reconciler: HeightReconciler::new(options.default_height),
            sizing: options.sizing(),
            origin: options.origin,
            window_width,
            applied: None,
            events,
            on_message: Box::new(|_| {}),
        }
    }

    /// Set the callback invoked on every height change.
    pub fn with_on_message(mut self, callback: impl FnMut(&MessageEvent) + 'static) -> Self {
        self.on_message = Box::new(callback);
        self
    }

    /// Replace the height-change callback.
    pub fn set_on_message(&mut self, callback: impl FnMut(&MessageEvent) + 'static) {
        self.on_message = Box::new(callback);
    }

    /// The last accepted height.
    pub fn height(&self) -> u32 {
        self.reconciler.height()
    }

    /// `(width, height)` the view is displayed at.
    pub fn displayed_size(&self) -> (f64, f64) {
        self.sizing
            .display_size(self.reconciler.height(), self.window_width)
    }

    /// Bounds of the view inside the parent window.
    pub fn bounds(&self) -> Rect {
        let (width, height) = self.displayed_size();
        Rect::new(self.origin.0, self.origin.1, width, height)
    }

    /// Handle one message from the measurement script.
    ///
    /// Unreadable and redundant messages are dropped without touching the
    /// view or the callback. Otherwise the height is updated, the view is
    /// resized, and the callback receives `event`. Returns whether the
    /// height changed.
    pub fn handle_message(&mut self, event: MessageEvent) -> bool {
        let change = match self.reconciler.accept(&event) {
            Ok(change) => change,
            Err(_) => return false,
        };

        if let Err(e) = self.relayout() {
            warn!(height = change.current, error = %e, "failed to resize view");
        }

        (self.on_message)(&event);
        true
    }

    /// Track a new parent window width. Resizes the view if its width follows
    /// the window.
    pub fn set_window_width(&mut self, window_width: f64) -> Result<()> {
        self.window_width = window_width;
        self.relayout()
    }

    /// Push the current bounds to the view, unless they were already applied.
    pub fn relayout(&mut self) -> Result<()> {
        let bounds = self.bounds();
        if self.applied == Some(bounds) {
            return Ok(());
        }
        self.view.set_bounds(bounds)?;
        self.applied = Some(bounds);
        debug!(width = bounds.width, height = bounds.height, "view resized");
        Ok(())
    }

    pub fn stop_loading(&self) -> Result<()> {
        self.view.stop_loading()
    }

    pub fn reload(&self) -> Result<()> {
        self.view.reload()
    }

    /// The queue IPC handlers push into.
    pub fn event_queue(&self) -> EventQueue {
        Arc::clone(&self.events)
    }

    /// Drain queued events, feeding messages to
    /// [`handle_message`](Self::handle_message). Returns how many changed the
    /// height.
    pub fn process_events(&mut self) -> usize {
        let mut changed = 0;
        for event in events::drain_events(&self.events) {
            match event {
                WebViewEvent::Message { body } => {
                    if self.handle_message(MessageEvent::new(body)) {
                        changed += 1;
                    }
                }
                WebViewEvent::PageLoad { state, url } => {
                    debug!(?state, url = %url, "page load");
                }
            }
        }
        changed
    }

    /// The wrapped view.
    pub fn inner(&self) -> &V {
        &self.view
    }
}
