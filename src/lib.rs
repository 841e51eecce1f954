//! # Lorenz Overlay
//!
//! An animated Lorenz attractor drawn into a frameless, transparent,
//! always-on-top desktop window.
//!
//! The trajectory is integrated once at startup with forward Euler. Every
//! tick the overlay redraws the line strip through the first `n` points,
//! growing `n` by a fixed stride until the whole butterfly is drawn, then
//! starts again from nothing.
//!
//! ## Quick Start
//!
//! ```ignore
//! use lorenz_overlay::prelude::*;
//!
//! fn main() -> Result<(), OverlayError> {
//!     Overlay::new()
//!         .with_style(RenderStyle::rainbow())
//!         .run()
//! }
//! ```
//!
//! ## Styles
//!
//! | Preset | Color | Spin | FOV | Camera distance |
//! |--------|-------|------|-----|-----------------|
//! | [`RenderStyle::classic`] | white | no | 45° | 1.5 × max range |
//! | [`RenderStyle::rainbow`] | hue sweep over index | 0.5°/frame | 60° | 2.0 × max range |
//!
//! ## Window
//!
//! The window has no decorations. Hold any mouse button and drag to move it;
//! press Escape to close it.
//!
//! ## Headless use
//!
//! [`attractor::generate`] and [`Renderer`] do not need a window or GPU, so
//! the trajectory and the animation state can be driven directly:
//!
//! ```ignore
//! let mut renderer = Renderer::new(&LorenzParams::default(), RenderStyle::classic());
//! renderer.on_resize(800, 600);
//! let frame = renderer.on_frame();
//! assert_eq!(frame.vertex_count, 0);
//! ```

pub mod animation;
pub mod attractor;
pub mod error;
mod gpu;
pub mod input;
mod overlay;
mod renderer;
pub mod time;
pub mod visuals;
mod window;

pub use bytemuck;
pub use glam::{DVec3, Mat4, Vec3};
pub use animation::{AnimationCursor, Spin};
pub use attractor::{generate, BoundingSummary, ColorTrack, LorenzParams, Trajectory};
pub use error::{GpuError, OverlayError};
pub use gpu::Camera;
pub use overlay::{Overlay, WindowOptions};
pub use renderer::{Frame, LineVertex, Renderer};
pub use visuals::{ColorMode, RenderStyle};

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use lorenz_overlay::prelude::*;
/// ```
pub mod prelude {
    pub use crate::attractor::{generate, LorenzParams};
    pub use crate::error::OverlayError;
    pub use crate::overlay::{Overlay, WindowOptions};
    pub use crate::renderer::Renderer;
    pub use crate::visuals::{ColorMode, RenderStyle};
    pub use crate::{DVec3, Vec3};
}
