//! Lorenz trajectory generation.
//!
//! The trajectory is integrated once with forward Euler and never changes
//! afterwards. Alongside the points this module derives the axis-aligned
//! bounds used to frame the camera, and an optional rainbow [`ColorTrack`]
//! that sweeps the hue once across the point indices.
//!
//! ```ignore
//! use lorenz_overlay::attractor::{generate, LorenzParams, ColorTrack};
//!
//! let (trajectory, bounds) = generate(&LorenzParams::default());
//! let colors = ColorTrack::rainbow(trajectory.len());
//! println!("max range: {:.2}", bounds.max_range);
//! ```

use glam::{DVec3, Vec3};

/// Parameters of the Lorenz system and its integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LorenzParams {
    pub sigma: f64,
    pub rho: f64,
    pub beta: f64,
    /// Fixed Euler step size.
    pub dt: f64,
    /// Number of points in the trajectory, initial point included.
    pub steps: usize,
    /// Initial condition, stored as the first point.
    pub initial: DVec3,
}

impl Default for LorenzParams {
    /// The classical butterfly: sigma = 10, rho = 28, beta = 8/3, 10000 points
    /// spaced 0.01 apart, starting at (0, 1, 1.05).
    fn default() -> Self {
        Self {
            sigma: 10.0,
            rho: 28.0,
            beta: 8.0 / 3.0,
            dt: 0.01,
            steps: 10_000,
            initial: DVec3::new(0.0, 1.0, 1.05),
        }
    }
}

impl LorenzParams {
    /// Time derivative of the system at `p`.
    pub fn derivative(&self, p: DVec3) -> DVec3 {
        DVec3::new(
            self.sigma * (p.y - p.x),
            p.x * (self.rho - p.z) - p.y,
            p.x * p.y - self.beta * p.z,
        )
    }

    /// One explicit Euler step from `p`.
    pub fn euler_step(&self, p: DVec3) -> DVec3 {
        let d = self.derivative(p);
        DVec3::new(
            p.x + d.x * self.dt,
            p.y + d.y * self.dt,
            p.z + d.z * self.dt,
        )
    }
}

/// Ordered sequence of integrated points. Index order is integration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    points: Vec<DVec3>,
}

impl Trajectory {
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points narrowed to `f32` for GPU upload.
    pub fn to_f32(&self) -> Vec<Vec3> {
        self.points.iter().map(|p| p.as_vec3()).collect()
    }
}

/// Per-axis extent of a trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSummary {
    pub min: DVec3,
    pub max: DVec3,
    /// `(min + max) / 2` on every axis.
    pub center: DVec3,
    /// `max - min` on every axis.
    pub range: DVec3,
    /// Largest of the three per-axis ranges.
    pub max_range: f64,
}

impl BoundingSummary {
    /// Single pass over `points`. An empty slice yields an all-zero summary.
    pub fn from_points(points: &[DVec3]) -> Self {
        let Some(first) = points.first() else {
            return Self {
                min: DVec3::ZERO,
                max: DVec3::ZERO,
                center: DVec3::ZERO,
                range: DVec3::ZERO,
                max_range: 0.0,
            };
        };

        let (min, max) = points
            .iter()
            .skip(1)
            .fold((*first, *first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));

        let center = DVec3::new(
            (min.x + max.x) / 2.0,
            (min.y + max.y) / 2.0,
            (min.z + max.z) / 2.0,
        );
        let range = max - min;
        let max_range = range.x.max(range.y).max(range.z);

        Self {
            min,
            max,
            center,
            range,
            max_range,
        }
    }
}

/// Integrate the Lorenz system and summarize its bounds.
///
/// The first point is `params.initial`; each following point is one Euler
/// step from its predecessor. The result is bit-for-bit reproducible.
pub fn generate(params: &LorenzParams) -> (Trajectory, BoundingSummary) {
    let mut points = Vec::with_capacity(params.steps);

    if params.steps > 0 {
        let mut p = params.initial;
        points.push(p);
        for _ in 1..params.steps {
            p = params.euler_step(p);
            points.push(p);
        }
    }

    let bounds = BoundingSummary::from_points(&points);
    (Trajectory { points }, bounds)
}

/// RGB colors index-aligned with a trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTrack {
    colors: Vec<Vec3>,
}

impl ColorTrack {
    /// Full hue sweep over `len` points: color `i` has hue `i / len`,
    /// saturation and value 1.
    ///
    /// First point is red, middle is cyan, and the hue climbs back toward red
    /// at the end.
    pub fn rainbow(len: usize) -> Self {
        let colors = (0..len)
            .map(|i| hsv_to_rgb(i as f32 / len as f32, 1.0, 1.0))
            .collect();
        Self { colors }
    }

    /// The same color for all `len` points.
    pub fn uniform(len: usize, color: Vec3) -> Self {
        Self {
            colors: vec![color; len],
        }
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Convert HSV to RGB. Hue wraps at 1.0.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Vec3 {
    let h = h.rem_euclid(1.0);
    let c = v * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match (h * 6.0) as u32 % 6 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Vec3::new(r + m, g + m, b + m)
}
