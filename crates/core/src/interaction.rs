//! Pointer-drag interaction state for rotatable decorations.
//!
//! Pure event wiring, independent of the frame loop: the host feeds pointer
//! events in, the renderer reads the accumulated orientation out. An idle
//! auto-spin is available for decorations that keep turning while nobody is
//! dragging.

use glam::DVec2;

/// Radians of rotation per pixel of pointer travel.
const DRAG_SENSITIVITY: f64 = 0.005;

/// Drag-to-rotate state: whether a drag is active, where the pointer last
/// was, and the accumulated orientation (x = pitch, y = yaw, radians).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    dragging: bool,
    last_position: Option<DVec2>,
    orientation: DVec2,
}

impl DragState {
    pub fn new() -> DragState {
        DragState::default()
    }

    /// True between `press` and `release`.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Accumulated orientation in radians (x = pitch, y = yaw).
    pub fn orientation(&self) -> DVec2 {
        self.orientation
    }

    /// Pointer went down: begin a drag at `position`.
    pub fn press(&mut self, position: DVec2) {
        self.dragging = true;
        self.last_position = Some(position);
    }

    /// Pointer moved. While dragging, horizontal travel turns into yaw and
    /// vertical travel into pitch; otherwise the event is ignored.
    pub fn drag_to(&mut self, position: DVec2) {
        if !self.dragging {
            return;
        }
        if let Some(last) = self.last_position {
            let delta = position - last;
            self.orientation.y += delta.x * DRAG_SENSITIVITY;
            self.orientation.x += delta.y * DRAG_SENSITIVITY;
        }
        self.last_position = Some(position);
    }

    /// Pointer went up: end the drag. Orientation is kept.
    pub fn release(&mut self) {
        self.dragging = false;
        self.last_position = None;
    }

    /// Idle auto-rotation: adds `rate` radians of yaw, but only while no
    /// drag is active so the user's grip always wins.
    pub fn spin(&mut self, rate: f64) {
        if !self.dragging {
            self.orientation.y += rate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_not_dragging_and_unrotated() {
        let s = DragState::new();
        assert!(!s.is_dragging());
        assert_eq!(s.orientation(), DVec2::ZERO);
    }

    #[test]
    fn press_begins_a_drag() {
        let mut s = DragState::new();
        s.press(DVec2::new(100.0, 100.0));
        assert!(s.is_dragging());
    }

    #[test]
    fn drag_accumulates_orientation_from_pointer_travel() {
        let mut s = DragState::new();
        s.press(DVec2::new(100.0, 100.0));
        s.drag_to(DVec2::new(140.0, 120.0));
        // 40px right -> yaw, 20px down -> pitch, at 0.005 rad/px.
        assert!((s.orientation().y - 0.2).abs() < 1e-12);
        assert!((s.orientation().x - 0.1).abs() < 1e-12);
    }

    #[test]
    fn consecutive_drags_accumulate() {
        let mut s = DragState::new();
        s.press(DVec2::ZERO);
        s.drag_to(DVec2::new(10.0, 0.0));
        s.drag_to(DVec2::new(20.0, 0.0));
        assert!((s.orientation().y - 0.1).abs() < 1e-12);
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut s = DragState::new();
        s.drag_to(DVec2::new(500.0, 500.0));
        assert_eq!(s.orientation(), DVec2::ZERO);
    }

    #[test]
    fn move_after_release_is_ignored() {
        let mut s = DragState::new();
        s.press(DVec2::ZERO);
        s.drag_to(DVec2::new(10.0, 0.0));
        s.release();
        s.drag_to(DVec2::new(1000.0, 1000.0));
        assert!((s.orientation().y - 0.05).abs() < 1e-12);
    }

    #[test]
    fn release_keeps_the_accumulated_orientation() {
        let mut s = DragState::new();
        s.press(DVec2::ZERO);
        s.drag_to(DVec2::new(100.0, 0.0));
        let before = s.orientation();
        s.release();
        assert_eq!(s.orientation(), before);
        assert!(!s.is_dragging());
    }

    #[test]
    fn a_new_press_does_not_jump_from_the_old_position() {
        let mut s = DragState::new();
        s.press(DVec2::ZERO);
        s.drag_to(DVec2::new(10.0, 0.0));
        s.release();
        // New grab far away; the first move after it must only count travel
        // from the new press point.
        s.press(DVec2::new(500.0, 500.0));
        s.drag_to(DVec2::new(510.0, 500.0));
        assert!((s.orientation().y - 0.1).abs() < 1e-12);
    }

    #[test]
    fn spin_rotates_only_while_idle() {
        let mut s = DragState::new();
        s.spin(0.01);
        assert!((s.orientation().y - 0.01).abs() < 1e-12);
        s.press(DVec2::ZERO);
        s.spin(0.01);
        assert!((s.orientation().y - 0.01).abs() < 1e-12, "spin applied mid-drag");
        s.release();
        s.spin(0.01);
        assert!((s.orientation().y - 0.02).abs() < 1e-12);
    }
}
