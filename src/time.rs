//! Fixed-interval frame ticking.
//!
//! The overlay redraws on a ~16 ms timer rather than as fast as possible.
//! [`FrameTimer`] holds the next deadline for the event loop to sleep until
//! and measures the achieved frame rate.
//!
//! All methods take the current instant explicitly, so the schedule can be
//! driven from tests without sleeping.
//!
//! # Example
//!
//! ```ignore
//! use lorenz_overlay::time::FrameTimer;
//!
//! let mut timer = FrameTimer::new(FrameTimer::DEFAULT_INTERVAL, Instant::now());
//!
//! // In the event loop:
//! if timer.is_due(Instant::now()) {
//!     timer.tick(Instant::now());
//!     window.request_redraw();
//! }
//! event_loop.set_control_flow(ControlFlow::WaitUntil(timer.deadline()));
//! ```

use std::time::{Duration, Instant};

/// Periodic tick schedule with FPS measurement.
#[derive(Debug)]
pub struct FrameTimer {
    /// Time between ticks.
    interval: Duration,
    /// When the next tick is due.
    next: Instant,
    /// Total ticks since start.
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
}

impl FrameTimer {
    /// ~60 ticks per second.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(16);

    /// Create a timer whose first tick is due immediately.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next: now,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
        }
    }

    /// When the event loop should wake for the next tick.
    pub fn deadline(&self) -> Instant {
        self.next
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Record a tick at `now` and schedule the next one an interval later.
    ///
    /// Returns the new FPS figure when it was recalculated.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        self.frame_count += 1;
        self.next = now + self.interval;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed < self.fps_update_interval {
            return None;
        }

        let frames_since = self.frame_count - self.fps_frame_count;
        self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
        self.fps_frame_count = self.frame_count;
        self.fps_update_time = now;
        Some(self.fps)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Total ticks since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Last calculated frames per second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}
