//! Live preview window.
//!
//! Opens a window the size of the framebuffer and feeds the cursor into a
//! [`Simulation`] each frame, presenting the result through a
//! [`Compositor`]. The window stands in for the overlay: cursor positions are
//! mapped to global space by adding the configured origin, so a config that
//! places the buffer at `(-1920, 0)` behaves the same here as on the desktop.
//!
//! | Key | Action |
//! |-----|--------|
//! | `1`-`6` | select a kind by menu id |
//! | `Space` | pause |
//! | `C` | clear all particles |
//! | `Esc` | quit |
//!
//! ```ignore
//! let config = TrailConfig::load("trails.json")?;
//! mouse_trails::viewer::run(&config)?;
//! ```

mod compositor;

pub use compositor::Compositor;

use crate::config::TrailConfig;
use crate::error::ViewerError;
use crate::simulation::Simulation;
use crate::time::FrameClock;
use glam::IVec2;
use log::{debug, error, info, warn};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

/// Run the viewer until the window closes.
pub fn run(config: &TrailConfig) -> Result<(), ViewerError> {
    let sim = Simulation::from_config(config)?;
    let clock = FrameClock::new(config.frame_interval());

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = ViewerApp::new(sim, clock);
    event_loop.run_app(&mut app)?;

    match app.failure.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct ViewerApp {
    sim: Simulation,
    clock: FrameClock,
    window: Option<Arc<Window>>,
    compositor: Option<Compositor>,
    /// Latest cursor position in global space, `None` while outside.
    cursor: Option<IVec2>,
    /// Set when setup fails inside the event loop.
    failure: Option<ViewerError>,
}

impl ViewerApp {
    fn new(sim: Simulation, clock: FrameClock) -> Self {
        Self {
            sim,
            clock,
            window: None,
            compositor: None,
            cursor: None,
            failure: None,
        }
    }

    fn open(&mut self, event_loop: &ActiveEventLoop) -> Result<(), ViewerError> {
        let (width, height) = (self.sim.framebuffer().width(), self.sim.framebuffer().height());
        let attrs = Window::default_attributes()
            .with_title(format!("mouse-trails - {}", self.sim.active_kind()))
            .with_inner_size(winit::dpi::PhysicalSize::new(width, height));

        let window = Arc::new(event_loop.create_window(attrs)?);
        let compositor = pollster::block_on(Compositor::new(window.clone(), width, height))?;

        let (w, h) = compositor.size();
        if (w, h) != (width, height) {
            self.sim.resize(w, h);
        }

        info!("viewer open at {}x{}", w, h);
        self.window = Some(window);
        self.compositor = Some(compositor);
        Ok(())
    }

    fn on_key(&mut self, event_loop: &ActiveEventLoop, code: KeyCode) {
        let id = match code {
            KeyCode::Digit1 => 1,
            KeyCode::Digit2 => 2,
            KeyCode::Digit3 => 3,
            KeyCode::Digit4 => 4,
            KeyCode::Digit5 => 5,
            KeyCode::Digit6 => 6,
            KeyCode::Space => {
                self.clock.toggle_pause();
                info!("{}", if self.clock.is_paused() { "paused" } else { "resumed" });
                return;
            }
            KeyCode::KeyC => {
                self.sim.reset();
                debug!("cleared");
                return;
            }
            KeyCode::Escape => {
                event_loop.exit();
                return;
            }
            _ => return,
        };

        let kind = self.sim.select_kind(id);
        if let Some(window) = &self.window {
            window.set_title(&format!("mouse-trails - {}", kind));
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let dt = self.clock.tick();
        let pointer = if self.clock.is_paused() { None } else { self.cursor };
        let frame = self.sim.tick(pointer, dt);

        let Some(compositor) = &mut self.compositor else {
            return;
        };
        match compositor.present(frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = compositor.size();
                compositor.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("GPU out of memory, closing viewer");
                event_loop.exit();
            }
            Err(e) => warn!("present failed: {}", e),
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(err) = self.open(event_loop) {
                error!("{}", err);
                self.failure = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(compositor) = &mut self.compositor {
                    compositor.resize(size.width, size.height);
                }
                if size.width > 0 && size.height > 0 {
                    self.sim.resize(size.width, size.height);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let local = IVec2::new(position.x as i32, position.y as i32);
                self.cursor = Some(self.sim.framebuffer().origin() + local);
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                self.on_key(event_loop, code);
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.clock.until_next_frame().is_zero() {
            self.clock.schedule_next();
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.deadline()));
    }
}
