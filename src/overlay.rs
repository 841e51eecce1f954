//! Overlay builder and runner

use std::time::{Duration, Instant};

use winit::event_loop::{ControlFlow, EventLoop};

use crate::attractor::LorenzParams;
use crate::error::OverlayError;
use crate::renderer::Renderer;
use crate::time::FrameTimer;
use crate::visuals::RenderStyle;
use crate::window::OverlayApp;

/// Desktop window settings.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowOptions {
    pub title: String,
    /// Initial inner width in logical pixels.
    pub width: u32,
    /// Initial inner height in logical pixels.
    pub height: u32,
    /// No title bar or borders.
    pub frameless: bool,
    /// Let the desktop show through cleared pixels.
    pub transparent: bool,
    /// Keep the window above normal windows.
    pub always_on_top: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "Lorenz Attractor".to_string(),
            width: 800,
            height: 600,
            frameless: true,
            transparent: true,
            always_on_top: true,
        }
    }
}

/// A Lorenz attractor overlay.
///
/// Use method chaining to configure, then call `.run()` to open the window.
///
/// ```ignore
/// Overlay::new()
///     .with_style(RenderStyle::classic())
///     .run()?;
/// ```
#[derive(Debug, Clone)]
pub struct Overlay {
    params: LorenzParams,
    style: RenderStyle,
    window: WindowOptions,
    tick_interval: Duration,
}

impl Overlay {
    /// Classical Lorenz parameters, rainbow style, 800x600 frameless window.
    pub fn new() -> Self {
        Self {
            params: LorenzParams::default(),
            style: RenderStyle::default(),
            window: WindowOptions::default(),
            tick_interval: FrameTimer::DEFAULT_INTERVAL,
        }
    }

    pub fn with_params(mut self, params: LorenzParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_window(mut self, window: WindowOptions) -> Self {
        self.window = window;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Set the time between animation ticks.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn params(&self) -> &LorenzParams {
        &self.params
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn window(&self) -> &WindowOptions {
        &self.window
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Run the overlay. This blocks until the window is closed.
    pub fn run(self) -> Result<(), OverlayError> {
        let renderer = Renderer::new(&self.params, self.style);

        let bounds = renderer.bounds();
        log::info!(
            "Integrated {} points, center ({:.2}, {:.2}, {:.2}), max range {:.2}",
            renderer.trajectory().len(),
            bounds.center.x,
            bounds.center.y,
            bounds.center.z,
            bounds.max_range,
        );

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let timer = FrameTimer::new(self.tick_interval, Instant::now());
        let mut app = OverlayApp::new(renderer, self.window, timer);
        event_loop.run_app(&mut app)?;

        app.into_result()
    }
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new()
    }
}
