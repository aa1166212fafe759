//! Winit event handling.
//!
//! Translates WindowEvent into application actions:
//!   Escape / close → exit
//!   Resize         → reconfigure surface, redraw
//!   Redraw         → render a frame

use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};

use super::app::UnionJackApp;

pub fn handle_window_event(
    app: &mut UnionJackApp,
    event_loop: &ActiveEventLoop,
    event: WindowEvent,
) {
    match event {
        // ── Window lifecycle ──────────────────────────────────────
        WindowEvent::CloseRequested => {
            tracing::info!("Window close requested");
            event_loop.exit();
        }

        WindowEvent::Destroyed => {
            tracing::info!("Window destroyed");
        }

        // ── Resize ───────────────────────────────────────────────
        WindowEvent::Resized(new_size) => {
            if let Some(gpu) = &mut app.gpu {
                gpu.resize(new_size);
            }
            app.request_redraw();
        }

        // ── Keyboard ─────────────────────────────────────────────
        WindowEvent::KeyboardInput { event, .. } => {
            if event.state != ElementState::Pressed {
                return;
            }
            if let Key::Named(NamedKey::Escape) = event.logical_key {
                app.wants_exit = true;
                event_loop.exit();
            }
        }

        // ── Render ───────────────────────────────────────────────
        WindowEvent::RedrawRequested => {
            app.redraw();
            if app.wants_exit {
                event_loop.exit();
            }
        }

        _ => {}
    }
}
