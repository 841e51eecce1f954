use std::sync::Arc;
use std::time::Instant;

use glam::DVec2;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalPosition},
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId, WindowLevel},
};

use crate::error::OverlayError;
use crate::gpu::GpuState;
use crate::input::DragState;
use crate::overlay::WindowOptions;
use crate::renderer::Renderer;
use crate::time::FrameTimer;

/// Event-loop side of the overlay: owns the window, the GPU state and the
/// renderer, and routes ticks, resizes and drags to them.
pub(crate) struct OverlayApp {
    options: WindowOptions,
    renderer: Renderer,
    timer: FrameTimer,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    drag: DragState,
    /// Last cursor position relative to the window.
    cursor: PhysicalPosition<f64>,
    error: Option<OverlayError>,
}

impl OverlayApp {
    pub(crate) fn new(renderer: Renderer, options: WindowOptions, timer: FrameTimer) -> Self {
        Self {
            options,
            renderer,
            timer,
            window: None,
            gpu_state: None,
            drag: DragState::new(),
            cursor: PhysicalPosition::new(0.0, 0.0),
            error: None,
        }
    }

    /// The setup error that stopped the loop, if any.
    pub(crate) fn into_result(self) -> Result<(), OverlayError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: OverlayError) {
        log::error!("{}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), OverlayError> {
        let window_attrs = Window::default_attributes()
            .with_title(self.options.title.clone())
            .with_inner_size(LogicalSize::new(self.options.width, self.options.height))
            .with_decorations(!self.options.frameless)
            .with_transparent(self.options.transparent)
            .with_window_level(if self.options.always_on_top {
                WindowLevel::AlwaysOnTop
            } else {
                WindowLevel::Normal
            });

        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let vertices = self.renderer.vertices();
        let line_width = self.renderer.style().line_width;
        let gpu_state = pollster::block_on(GpuState::new(window.clone(), &vertices, line_width))?;

        let size = window.inner_size();
        self.renderer.on_resize(size.width, size.height);
        log::info!("Overlay window {}x{} ready", size.width, size.height);

        self.window = Some(window);
        self.gpu_state = Some(gpu_state);
        Ok(())
    }

    /// Cursor position in screen coordinates, if the platform reports window positions.
    fn global_cursor(&self) -> Option<DVec2> {
        let window = self.window.as_ref()?;
        let outer = window.outer_position().ok()?;
        Some(DVec2::new(
            outer.x as f64 + self.cursor.x,
            outer.y as f64 + self.cursor.y,
        ))
    }

    fn move_window(&self, delta: DVec2) {
        let Some(window) = &self.window else {
            return;
        };
        if let Ok(outer) = window.outer_position() {
            window.set_outer_position(PhysicalPosition::new(
                outer.x + delta.x.round() as i32,
                outer.y + delta.y.round() as i32,
            ));
        }
    }
}

impl ApplicationHandler for OverlayApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.create_window(event_loop) {
                self.fail(event_loop, e);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::Escape)
                {
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(physical_size) => {
                self.renderer
                    .on_resize(physical_size.width, physical_size.height);
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => match self.global_cursor() {
                    Some(global) => self.drag.press(button.into(), global),
                    None => {
                        // No window positions here (e.g. Wayland); let the compositor move it
                        if let Some(window) = &self.window {
                            if let Err(e) = window.drag_window() {
                                log::debug!("Window drag unavailable: {}", e);
                            }
                        }
                    }
                },
                ElementState::Released => self.drag.release(button.into()),
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = position;
                if let Some(global) = self.global_cursor() {
                    if let Some(delta) = self.drag.motion(global) {
                        self.move_window(delta);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    let frame = self.renderer.on_frame();
                    match gpu_state.render(&frame) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            gpu_state.reconfigure()
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("GPU out of memory, closing overlay");
                            event_loop.exit()
                        }
                        Err(e) => log::warn!("Render error: {:?}", e),
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if self.timer.is_due(now) {
            if let Some(fps) = self.timer.tick(now) {
                log::trace!("{:.1} fps", fps);
            }
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.timer.deadline()));
    }
}
