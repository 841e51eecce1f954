//! Drag-to-move tracking for the frameless overlay.
//!
//! The overlay has no title bar, so holding any mouse button and moving the
//! pointer moves the window. Positions are global (screen) coordinates: the
//! window moves under the pointer, so window-relative positions would feed
//! the window's own motion back into the delta.
//!
//! ```ignore
//! let mut drag = DragState::new();
//! drag.press(MouseButton::Left, DVec2::new(100.0, 100.0));
//! let delta = drag.motion(DVec2::new(110.0, 95.0)); // Some((10, -5))
//! ```

use std::collections::HashSet;

use glam::DVec2;
use winit::event::MouseButton as WinitMouseButton;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other,
}

impl From<WinitMouseButton> for MouseButton {
    fn from(btn: WinitMouseButton) -> Self {
        match btn {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

/// Pointer-drag state machine.
#[derive(Debug, Default)]
pub struct DragState {
    held: HashSet<MouseButton>,
    /// Global pointer position at the last press or move.
    anchor: Option<DVec2>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any button is currently held.
    pub fn is_dragging(&self) -> bool {
        !self.held.is_empty()
    }

    /// A button went down at global position `global`.
    pub fn press(&mut self, button: MouseButton, global: DVec2) {
        self.held.insert(button);
        self.anchor = Some(global);
    }

    /// A button went up. Dragging stops once no button is held.
    pub fn release(&mut self, button: MouseButton) {
        self.held.remove(&button);
        if self.held.is_empty() {
            self.anchor = None;
        }
    }

    /// The pointer moved to `global`.
    ///
    /// While a button is held, returns how far the window should move and
    /// re-anchors at `global`. Returns `None` when not dragging.
    pub fn motion(&mut self, global: DVec2) -> Option<DVec2> {
        if !self.is_dragging() {
            return None;
        }
        let anchor = self.anchor.replace(global)?;
        Some(global - anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motion_without_press_is_ignored() {
        let mut drag = DragState::new();
        assert_eq!(drag.motion(DVec2::new(5.0, 5.0)), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_drag_reports_incremental_deltas() {
        let mut drag = DragState::new();
        drag.press(MouseButton::Left, DVec2::new(100.0, 100.0));

        assert_eq!(drag.motion(DVec2::new(110.0, 95.0)), Some(DVec2::new(10.0, -5.0)));
        assert_eq!(drag.motion(DVec2::new(111.0, 95.0)), Some(DVec2::new(1.0, 0.0)));
    }

    #[test]
    fn test_release_ends_drag() {
        let mut drag = DragState::new();
        drag.press(MouseButton::Left, DVec2::ZERO);
        drag.release(MouseButton::Left);
        assert_eq!(drag.motion(DVec2::new(3.0, 3.0)), None);
    }

    #[test]
    fn test_drag_continues_while_any_button_held() {
        let mut drag = DragState::new();
        drag.press(MouseButton::Left, DVec2::ZERO);
        drag.press(MouseButton::Right, DVec2::new(2.0, 0.0));
        drag.release(MouseButton::Left);

        assert!(drag.is_dragging());
        assert_eq!(drag.motion(DVec2::new(4.0, 1.0)), Some(DVec2::new(2.0, 1.0)));
    }

    #[test]
    fn test_button_conversion() {
        assert_eq!(MouseButton::from(WinitMouseButton::Left), MouseButton::Left);
        assert_eq!(MouseButton::from(WinitMouseButton::Back), MouseButton::Other);
    }
}
