//! Per-frame animation state.
//!
//! Both pieces of state advance exactly once per tick and wrap back to their
//! start, so the overlay loops forever: the line strip is redrawn from
//! scratch every `len / stride` frames and the scene completes a turn every
//! `360 / step` frames.

/// How far along the trajectory the line strip currently reaches.
///
/// Always in `[0, len)` for a non-empty trajectory. Reaching or passing the
/// end resets to 0 rather than sliding a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationCursor {
    current: usize,
    stride: usize,
    len: usize,
}

impl AnimationCursor {
    /// Points revealed per frame unless configured otherwise.
    pub const DEFAULT_STRIDE: usize = 10;

    pub fn new(len: usize, stride: usize) -> Self {
        Self {
            current: 0,
            stride,
            len,
        }
    }

    /// Number of leading points to draw.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move forward one frame, wrapping to 0 at the end.
    pub fn advance(&mut self) {
        self.current += self.stride;
        if self.current >= self.len {
            self.current = 0;
        }
    }

    /// Frames needed for one full loop: `ceil(len / stride)`.
    pub fn period(&self) -> usize {
        if self.stride == 0 {
            return 0;
        }
        self.len.div_ceil(self.stride)
    }
}

/// Rotation about the vertical axis, in degrees within `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    angle: f32,
    step: f32,
}

impl Spin {
    /// Degrees added per frame unless configured otherwise.
    pub const DEFAULT_STEP: f32 = 0.5;

    pub fn new(step: f32) -> Self {
        Self { angle: 0.0, step }
    }

    pub fn degrees(&self) -> f32 {
        self.angle
    }

    pub fn radians(&self) -> f32 {
        self.angle.to_radians()
    }

    /// Move forward one frame, resetting to 0 once a full turn is reached.
    pub fn advance(&mut self) {
        self.angle += self.step;
        if self.angle >= 360.0 {
            self.angle = 0.0;
        }
    }
}

impl Default for Spin {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEP)
    }
}
