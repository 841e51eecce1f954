//! Camera that frames the whole attractor.

use glam::{Mat4, Vec3};

use crate::attractor::BoundingSummary;

/// Fixed camera looking down -Z at the trajectory's center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Camera world position.
    pub eye: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
}

impl Camera {
    /// Place the camera at `(center.x, center.y, max_range * eye_distance_factor)`
    /// looking at the bounds' center.
    pub fn framing(bounds: &BoundingSummary, eye_distance_factor: f32) -> Self {
        let center = bounds.center.as_vec3();
        let eye_distance = bounds.max_range as f32 * eye_distance_factor;
        Self {
            eye: Vec3::new(center.x, center.y, eye_distance),
            target: center,
        }
    }

    /// View matrix with the scene turned `spin` radians about the world Y axis.
    ///
    /// The rotation is applied to the model before the camera transform, so
    /// the whole scene turns about the world origin's vertical axis.
    pub fn view_matrix(&self, spin: f32) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y) * Mat4::from_rotation_y(spin)
    }
}
