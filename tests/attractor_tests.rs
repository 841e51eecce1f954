//! Integration tests for trajectory generation and the draw-in animation.
//!
//! These exercise the public API with the classical parameters, the same
//! way the overlay binaries use it.

use lorenz_overlay::attractor::hsv_to_rgb;
use lorenz_overlay::{
    generate, AnimationCursor, ColorTrack, DVec3, LorenzParams, RenderStyle, Renderer, Vec3,
};

// ============================================================================
// Trajectory
// ============================================================================

#[test]
fn test_generation_is_deterministic() {
    let params = LorenzParams::default();
    let (a, bounds_a) = generate(&params);
    let (b, bounds_b) = generate(&params);

    assert_eq!(a, b);
    assert_eq!(bounds_a, bounds_b);
}

#[test]
fn test_starts_at_initial_condition() {
    let (trajectory, _) = generate(&LorenzParams::default());
    assert_eq!(trajectory.points()[0], DVec3::new(0.0, 1.0, 1.05));
}

#[test]
fn test_every_point_is_one_euler_step_from_the_last() {
    let (sigma, rho, beta, dt) = (10.0_f64, 28.0_f64, 8.0_f64 / 3.0, 0.01_f64);
    let (trajectory, _) = generate(&LorenzParams::default());

    for pair in trajectory.points().windows(2) {
        let (p, next) = (pair[0], pair[1]);
        let dx = sigma * (p.y - p.x);
        let dy = p.x * (rho - p.z) - p.y;
        let dz = p.x * p.y - beta * p.z;
        assert_eq!(next, DVec3::new(p.x + dx * dt, p.y + dy * dt, p.z + dz * dt));
    }
}

#[test]
fn test_classical_attractor_is_bounded() {
    let (trajectory, bounds) = generate(&LorenzParams::default());

    assert_eq!(trajectory.len(), 10_000);
    assert!(trajectory.points().iter().all(|p| p.is_finite()));

    // The butterfly spans tens of units
    assert!(bounds.max_range > 10.0 && bounds.max_range < 100.0);
}

#[test]
fn test_bounding_summary_invariants() {
    let (trajectory, bounds) = generate(&LorenzParams::default());

    assert_eq!(bounds.center.x, (bounds.min.x + bounds.max.x) / 2.0);
    assert_eq!(bounds.center.y, (bounds.min.y + bounds.max.y) / 2.0);
    assert_eq!(bounds.center.z, (bounds.min.z + bounds.max.z) / 2.0);

    let ranges = bounds.max - bounds.min;
    assert_eq!(bounds.max_range, ranges.x.max(ranges.y).max(ranges.z));

    for p in trajectory.points() {
        assert!(p.cmpge(bounds.min).all() && p.cmple(bounds.max).all());
    }
}

// ============================================================================
// Colors
// ============================================================================

#[test]
fn test_rainbow_follows_index_hue() {
    let n = 10_000;
    let track = ColorTrack::rainbow(n);

    assert_eq!(track.colors()[0], Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(track.colors()[n / 2], Vec3::new(0.0, 1.0, 1.0));

    for (i, color) in track.colors().iter().enumerate().step_by(97) {
        assert_eq!(*color, hsv_to_rgb(i as f32 / n as f32, 1.0, 1.0));
    }
}

/// Recover the hue in `[0, 1)` of a fully saturated color.
fn hue_of(color: Vec3) -> f32 {
    let max = color.max_element();
    let delta = max - color.min_element();
    let sector = if max == color.x {
        ((color.y - color.z) / delta).rem_euclid(6.0)
    } else if max == color.y {
        (color.z - color.x) / delta + 2.0
    } else {
        (color.x - color.y) / delta + 4.0
    };
    sector / 6.0
}

#[test]
fn test_rainbow_hue_increases_with_index() {
    let n = 10_000;
    let hues: Vec<f32> = ColorTrack::rainbow(n).colors().iter().map(|c| hue_of(*c)).collect();

    assert_eq!(hues[0], 0.0);
    for (i, hue) in hues.iter().enumerate() {
        assert!((hue - i as f32 / n as f32).abs() < 1e-4, "index {i}: hue {hue}");
    }
    for pair in hues.windows(2) {
        assert!(pair[1] > pair[0], "hue went from {} to {}", pair[0], pair[1]);
    }
    assert!(hues[n - 1] < 1.0);
}

#[test]
fn test_rainbow_colors_are_fully_saturated() {
    let track = ColorTrack::rainbow(1_000);
    for color in track.colors() {
        assert!((color.max_element() - 1.0).abs() < 1e-6);
        assert!(color.min_element().abs() < 1e-6);
    }
}

// ============================================================================
// Animation
// ============================================================================

#[test]
fn test_cursor_returns_to_zero_after_full_loop() {
    let mut renderer = Renderer::new(&LorenzParams::default(), RenderStyle::classic());
    let period = renderer.cursor().period();
    assert_eq!(period, 1_000);

    for _ in 0..period {
        let frame = renderer.on_frame();
        assert!((frame.vertex_count as usize) < renderer.trajectory().len());
    }
    assert_eq!(renderer.cursor().current(), 0);
}

#[test]
fn test_cursor_period_rounds_up() {
    let mut cursor = AnimationCursor::new(10_005, 10);
    assert_eq!(cursor.period(), 1_001);
    for _ in 0..cursor.period() {
        cursor.advance();
    }
    assert_eq!(cursor.current(), 0);
}

#[test]
fn test_rainbow_scene_completes_a_turn() {
    let mut renderer = Renderer::new(&LorenzParams::default(), RenderStyle::rainbow());
    let start = renderer.on_frame().view_proj;
    for _ in 0..719 {
        renderer.on_frame();
    }
    assert_eq!(renderer.spin().degrees(), 0.0);

    // Angle is back at 0; only the cursor has moved
    assert_eq!(renderer.on_frame().view_proj, start);
}

#[test]
fn test_resize_to_zero_is_harmless() {
    let mut renderer = Renderer::new(&LorenzParams::default(), RenderStyle::rainbow());
    renderer.on_resize(0, 600);
    assert!(renderer.projection().is_finite());
    renderer.on_resize(800, 0);
    assert!(renderer.projection().is_finite());
    assert!(renderer.on_frame().view_proj.is_finite());
}
