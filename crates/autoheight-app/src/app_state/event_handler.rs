//! `ApplicationHandler` implementation for the winit event loop.

use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use super::core::{AutoHeightApp, POLL_INTERVAL};

impl ApplicationHandler for AutoHeightApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.view = None;
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    let width = self.window_width();
                    if let Some(view) = self.view.as_mut() {
                        if let Err(e) = view.set_window_width(width) {
                            tracing::warn!(error = %e, "Failed to sync view bounds");
                        }
                    }
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(view) = self.view.as_mut() {
            let changed = view.process_events();
            if changed > 0 {
                tracing::debug!(changed, height = view.height(), "measurements applied");
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }
}

impl AutoHeightApp {
    /// F5 reloads, Escape stops loading.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }
        let Some(view) = self.view.as_ref() else {
            return;
        };

        let result = match event.logical_key {
            Key::Named(NamedKey::F5) => {
                tracing::info!("Reloading");
                view.reload()
            }
            Key::Named(NamedKey::Escape) => {
                tracing::info!("Stopping load");
                view.stop_loading()
            }
            _ => Ok(()),
        };

        if let Err(e) = result {
            tracing::warn!(error = %e, "View control failed");
        }
    }
}
