//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Hosts a single auto-height view in one window.

mod core;
mod event_handler;
mod init;

pub use core::AutoHeightApp;
