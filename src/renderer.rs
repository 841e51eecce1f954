//! Host-independent animation and framing.
//!
//! [`Renderer`] owns everything that changes frame to frame and computes what
//! the GPU should draw. It never touches the device itself, which keeps the
//! draw-in loop testable without a window.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::animation::{AnimationCursor, Spin};
use crate::attractor::{generate, BoundingSummary, ColorTrack, LorenzParams, Trajectory};
use crate::gpu::Camera;
use crate::visuals::{ColorMode, RenderStyle};

/// A trajectory point as stored in the GPU vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// xyz plus w = 1.
    pub position: [f32; 4],
    /// rgb plus opaque alpha.
    pub color: [f32; 4],
}

/// What to draw for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub view_proj: Mat4,
    /// The strip runs through vertices `[0, vertex_count)`.
    pub vertex_count: u32,
}

/// Vertex count as drawn by the GPU, saturating at `u32::MAX`.
pub(crate) fn clamp_count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

impl Frame {
    /// Segments in the strip. A strip of fewer than two vertices draws nothing.
    pub fn segment_count(&self) -> u32 {
        self.vertex_count.saturating_sub(1)
    }
}

/// Animated line-strip renderer state.
pub struct Renderer {
    trajectory: Trajectory,
    colors: ColorTrack,
    bounds: BoundingSummary,
    style: RenderStyle,
    camera: Camera,
    cursor: AnimationCursor,
    spin: Spin,
    projection: Mat4,
}

impl Renderer {
    /// Integrate the trajectory and prepare the animation state.
    pub fn new(params: &LorenzParams, style: RenderStyle) -> Self {
        let (trajectory, bounds) = generate(params);
        Self::from_trajectory(trajectory, bounds, style)
    }

    pub fn from_trajectory(trajectory: Trajectory, bounds: BoundingSummary, style: RenderStyle) -> Self {
        let colors = match style.color {
            ColorMode::Uniform(color) => ColorTrack::uniform(trajectory.len(), color),
            ColorMode::Rainbow => ColorTrack::rainbow(trajectory.len()),
        };
        let camera = Camera::framing(&bounds, style.eye_distance_factor);
        let cursor = AnimationCursor::new(trajectory.len(), style.stride);
        let spin = Spin::new(style.spin_step);

        let mut renderer = Self {
            trajectory,
            colors,
            bounds,
            style,
            camera,
            cursor,
            spin,
            projection: Mat4::IDENTITY,
        };
        renderer.on_resize(1, 1);
        renderer
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn colors(&self) -> &ColorTrack {
        &self.colors
    }

    pub fn bounds(&self) -> &BoundingSummary {
        &self.bounds
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn cursor(&self) -> &AnimationCursor {
        &self.cursor
    }

    pub fn spin(&self) -> &Spin {
        &self.spin
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Every trajectory point with its color, ready for upload.
    pub fn vertices(&self) -> Vec<LineVertex> {
        self.trajectory
            .to_f32()
            .into_iter()
            .zip(self.colors.colors())
            .map(|(position, color): (Vec3, &Vec3)| LineVertex {
                position: position.extend(1.0).to_array(),
                color: color.extend(1.0).to_array(),
            })
            .collect()
    }

    /// Recompute the projection for a `width` x `height` surface.
    ///
    /// A zero dimension falls back to an aspect ratio of 1.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        let aspect = if width == 0 || height == 0 {
            1.0
        } else {
            width as f32 / height as f32
        };
        self.projection = Mat4::perspective_rh(
            self.style.fov_degrees.to_radians(),
            aspect,
            self.style.near,
            self.style.far,
        );
    }

    /// Produce this tick's frame, then advance the cursor and spin.
    pub fn on_frame(&mut self) -> Frame {
        let spin = if self.style.spin { self.spin.radians() } else { 0.0 };
        let view = self.camera.view_matrix(spin);

        let frame = Frame {
            view_proj: self.projection * view,
            vertex_count: clamp_count(self.cursor.current()),
        };

        self.cursor.advance();
        if self.style.spin {
            self.spin.advance();
        }

        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(style: RenderStyle) -> Renderer {
        let params = LorenzParams {
            steps: 100,
            ..Default::default()
        };
        Renderer::new(&params, style)
    }

    #[test]
    fn test_first_frame_draws_nothing() {
        let mut renderer = small(RenderStyle::classic());
        let frame = renderer.on_frame();
        assert_eq!(frame.vertex_count, 0);
        assert_eq!(frame.segment_count(), 0);
        assert_eq!(renderer.cursor().current(), 10);
    }

    #[test]
    fn test_draw_in_loop_resets() {
        let mut renderer = small(RenderStyle::classic());
        let counts: Vec<u32> = (0..12).map(|_| renderer.on_frame().vertex_count).collect();
        assert_eq!(counts, vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 0, 10]);
    }

    #[test]
    fn test_classic_does_not_spin() {
        let mut renderer = small(RenderStyle::classic());
        let first = renderer.on_frame().view_proj;
        let second = renderer.on_frame().view_proj;
        assert_eq!(first, second);
        assert_eq!(renderer.spin().degrees(), 0.0);
    }

    #[test]
    fn test_rainbow_spins() {
        let mut renderer = small(RenderStyle::rainbow());
        let first = renderer.on_frame().view_proj;
        let second = renderer.on_frame().view_proj;
        assert_ne!(first, second);
        assert_eq!(renderer.spin().degrees(), 1.0);
    }

    #[test]
    fn test_vertex_colors_follow_style() {
        let classic = small(RenderStyle::classic()).vertices();
        assert_eq!(classic.len(), 100);
        assert!(classic.iter().all(|v| v.color == [1.0, 1.0, 1.0, 1.0]));

        let rainbow = small(RenderStyle::rainbow()).vertices();
        assert_eq!(rainbow[0].color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(rainbow[50].color, [0.0, 1.0, 1.0, 1.0]);
        assert_eq!(rainbow[0].position, [0.0, 1.0, 1.05_f64 as f32, 1.0]);
    }

    #[test]
    fn test_vertex_count_saturates() {
        assert_eq!(clamp_count(0), 0);
        assert_eq!(clamp_count(10_000), 10_000);
        assert_eq!(clamp_count(u32::MAX as usize), u32::MAX);
        #[cfg(target_pointer_width = "64")]
        assert_eq!(clamp_count(u32::MAX as usize + 5), u32::MAX);
    }

    #[test]
    fn test_vertex_layout_is_two_vec4() {
        assert_eq!(std::mem::size_of::<LineVertex>(), 32);
    }

    #[test]
    fn test_resize_with_zero_dimension() {
        let mut renderer = small(RenderStyle::classic());
        renderer.on_resize(800, 0);
        let square = renderer.projection();
        assert!(square.is_finite());

        renderer.on_resize(0, 600);
        assert_eq!(renderer.projection(), square);

        renderer.on_resize(600, 600);
        assert_eq!(renderer.projection(), square);
    }

    #[test]
    fn test_resize_tracks_aspect() {
        let mut renderer = small(RenderStyle::classic());
        renderer.on_resize(800, 600);
        let p = renderer.projection();
        // x scale = y scale / aspect
        assert!((p.x_axis.x - p.y_axis.y * 600.0 / 800.0).abs() < 1e-6);
    }
}
