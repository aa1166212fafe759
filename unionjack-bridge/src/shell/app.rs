// unionjack-bridge/src/shell/app.rs
//! Application state and winit event loop.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{Local, Timelike};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::config::BridgeConfig;
use crate::gfx::{GpuState, WgpuBackend};
use crate::readout::Readout;

// ════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Starting,
    Active,
    Error(String),
}

pub struct UnionJackApp {
    // ── Window + GPU ──
    pub window: Option<Arc<Window>>,
    pub gpu: Option<GpuState>,

    // ── Content ──
    pub config: BridgeConfig,
    pub readout: Option<Readout<WgpuBackend>>,

    pub state: AppState,
    pub wants_exit: bool,
}

impl UnionJackApp {
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            window: None,
            gpu: None,
            config,
            readout: None,
            state: AppState::Starting,
            wants_exit: false,
        }
    }

    /// Request a window redraw.
    pub fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    /// Update clock displays. Returns true if anything visible changed.
    pub fn tick(&mut self) -> bool {
        match &mut self.readout {
            Some(readout) => readout.tick(Local::now().naive_local()),
            None => false,
        }
    }

    /// Draw one frame.
    pub fn redraw(&mut self) {
        let (Some(gpu), Some(readout)) = (&mut self.gpu, &mut self.readout) else {
            return;
        };

        let result = gpu.render_frame(self.config.clear_color, |pass, backend, view_projection| {
            readout.draw(backend, pass, view_projection);
        });

        if let Err(e) = result {
            tracing::error!("Render failed: {:#}", e);
            self.state = AppState::Error(e.to_string());
            self.wants_exit = true;
        }
    }

    fn init_graphics(&mut self, window: Arc<Window>) -> anyhow::Result<()> {
        let gpu = GpuState::new(window.clone())?;
        let mut readout = Readout::build(&gpu.backend, &gpu.font, &self.config.displays)?;
        readout.tick(Local::now().naive_local());

        self.gpu = Some(gpu);
        self.readout = Some(readout);
        self.window = Some(window);
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════
// ApplicationHandler (winit 0.30)
// ════════════════════════════════════════════════════════════════════

impl ApplicationHandler for UnionJackApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already created
        }

        let attrs = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let window = Arc::new(window);
                match self.init_graphics(window.clone()) {
                    Ok(()) => {
                        self.state = AppState::Active;
                        tracing::info!("Window + GPU initialized");
                        window.request_redraw();
                    }
                    Err(e) => {
                        tracing::error!("GPU init failed: {:#}", e);
                        self.state = AppState::Error(format!("GPU init failed: {:#}", e));
                        event_loop.exit();
                    }
                }
            }
            Err(e) => {
                tracing::error!("Window creation failed: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        super::events::handle_window_event(self, event_loop, event);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.wants_exit {
            event_loop.exit();
            return;
        }

        let has_clock = self.readout.as_ref().is_some_and(|r| r.has_clock());
        if !has_clock {
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        }

        if self.tick() {
            self.request_redraw();
        }

        // Wake at the next whole second.
        let nanos = Local::now().nanosecond() % 1_000_000_000;
        let until_next = Duration::from_nanos(u64::from(1_000_000_000 - nanos));
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + until_next));
    }
}

// ════════════════════════════════════════════════════════════════════
// Entry Point
// ════════════════════════════════════════════════════════════════════

/// Run the UnionJack viewer until the window closes.
pub fn run(config: BridgeConfig) -> anyhow::Result<()> {
    // Tracing is initialized once in the binary entry point (src/main.rs).
    tracing::info!(
        "UnionJack v{} starting ({} displays)",
        env!("CARGO_PKG_VERSION"),
        config.displays.len()
    );

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = UnionJackApp::new(config);
    event_loop.run_app(&mut app)?;

    if let AppState::Error(e) = &app.state {
        anyhow::bail!("{e}");
    }
    Ok(())
}
