//! Auto-height web view for embedding web content at its natural height.
//!
//! Wraps the `wry` crate to provide:
//! - An injected measurement script that reports the document height
//! - A one-way IPC bridge (JavaScript -> Rust) carrying that height
//! - Reconciliation of reported heights into the child view's bounds
//! - Reload / stop-loading controls

pub mod events;
pub mod message;
pub mod reconciler;
pub mod script;
pub mod sizing;
pub mod view;

pub use events::{EventQueue, PageLoadState, WebViewEvent};
pub use message::{parse_height, MessageEvent};
pub use reconciler::{HeightChange, HeightReconciler, Rejection};
pub use script::{HostPlatform, ScriptOptions, ScriptVariant};
pub use sizing::SizingPolicy;
pub use view::{AutoHeightOptions, AutoHeightView, EmbeddedView, Source, WebViewConfig};
