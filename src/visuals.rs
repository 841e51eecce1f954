//! Visual configuration for the overlay.
//!
//! One renderer covers both looks of the overlay. A [`RenderStyle`] picks the
//! coloring, whether the scene spins, the field of view and how far the camera
//! backs away from the attractor.
//!
//! # Usage
//!
//! ```ignore
//! Overlay::new()
//!     .with_style(RenderStyle::rainbow())
//!     .run()?;
//! ```

use glam::Vec3;

use crate::animation::{AnimationCursor, Spin};

/// How the line strip is colored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ColorMode {
    /// One color for every vertex (opaque white by default).
    Uniform(Vec3),

    /// Hue sweeps once over the trajectory index: red, through cyan at the
    /// midpoint, and back toward red.
    #[default]
    Rainbow,
}

impl ColorMode {
    pub fn is_per_vertex(&self) -> bool {
        matches!(self, ColorMode::Rainbow)
    }
}

/// Rendering parameters for a single overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub color: ColorMode,
    /// Spin the scene about the vertical axis every frame.
    pub spin: bool,
    /// Degrees added to the spin angle per frame.
    pub spin_step: f32,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Camera distance as a multiple of the trajectory's largest axis range.
    pub eye_distance_factor: f32,
    /// Trajectory points revealed per frame.
    pub stride: usize,
    /// Line width in physical pixels.
    pub line_width: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
}

impl RenderStyle {
    /// White strip, fixed camera, 45 degree field of view.
    pub fn classic() -> Self {
        Self {
            color: ColorMode::Uniform(Vec3::ONE),
            spin: false,
            spin_step: Spin::DEFAULT_STEP,
            fov_degrees: 45.0,
            eye_distance_factor: 1.5,
            stride: AnimationCursor::DEFAULT_STRIDE,
            line_width: 2.0,
            near: 1.0,
            far: 1000.0,
        }
    }

    /// Rainbow strip spinning half a degree per frame, 60 degree field of view.
    pub fn rainbow() -> Self {
        Self {
            color: ColorMode::Rainbow,
            spin: true,
            fov_degrees: 60.0,
            eye_distance_factor: 2.0,
            ..Self::classic()
        }
    }

    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    pub fn with_spin(mut self, spin: bool) -> Self {
        self.spin = spin;
        self
    }

    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::rainbow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_preset() {
        let style = RenderStyle::classic();
        assert_eq!(style.color, ColorMode::Uniform(Vec3::ONE));
        assert!(!style.color.is_per_vertex());
        assert!(!style.spin);
        assert_eq!(style.fov_degrees, 45.0);
        assert_eq!(style.eye_distance_factor, 1.5);
    }

    #[test]
    fn test_rainbow_preset() {
        let style = RenderStyle::rainbow();
        assert!(style.color.is_per_vertex());
        assert!(style.spin);
        assert_eq!(style.spin_step, 0.5);
        assert_eq!(style.fov_degrees, 60.0);
        assert_eq!(style.eye_distance_factor, 2.0);
        assert_eq!(style.stride, 10);
        assert_eq!(style.line_width, 2.0);
        assert_eq!((style.near, style.far), (1.0, 1000.0));
    }
}
