//! Per-gesture drag state.

use crate::item::{ItemHandle, ItemKey};

/// Where the current gesture stands in drag arbitration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    /// No pointer is down.
    Idle,
    /// The pointer is down but the gesture has not committed to a row drag;
    /// the list may still scroll.
    Arbitrating,
    /// The gesture is a horizontal row drag; vertical scroll is suppressed.
    Swiping,
}

/// The active horizontal drag of one row.
///
/// Existing at all means the gesture committed to swiping; there is at most
/// one per list.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    target: ItemHandle,
    dx: f32,
    dy: f32,
    armed: bool,
}

impl DragSession {
    pub fn new(target: ItemHandle) -> Self {
        Self {
            target,
            dx: 0.0,
            dy: 0.0,
            armed: false,
        }
    }

    pub fn key(&self) -> ItemKey {
        self.target.key
    }

    /// Last resolved handle of the dragged row.
    pub fn target(&self) -> &ItemHandle {
        &self.target
    }

    /// Cumulative delta since the gesture started.
    pub fn delta(&self) -> (f32, f32) {
        (self.dx, self.dy)
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Refreshes the row snapshot (bounds may move while the list lays out).
    pub fn retarget(&mut self, target: ItemHandle) {
        debug_assert_eq!(target.key, self.target.key);
        self.target = target;
    }

    /// Records the cumulative delta for this frame and re-evaluates the armed
    /// flag against `width / arm_width_divisor`. Returns true when the flag
    /// changed.
    pub fn update(&mut self, dx: f32, dy: f32, arm_width_divisor: f32) -> bool {
        self.dx = dx;
        self.dy = dy;
        let armed = dx.abs() > self.target.width() / arm_width_divisor;
        let crossed = armed != self.armed;
        self.armed = armed;
        crossed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swipeselect_ui_graphics::Rect;

    fn session() -> DragSession {
        DragSession::new(ItemHandle::new(ItemKey(0), Rect::new(0.0, 0.0, 90.0, 40.0)))
    }

    #[test]
    fn new_session_is_unarmed_at_origin() {
        let session = session();
        assert!(!session.is_armed());
        assert_eq!(session.delta(), (0.0, 0.0));
    }

    #[test]
    fn arms_beyond_width_ratio() {
        let mut session = session();
        // 90 / 4.5 = 20
        assert!(!session.update(20.0, 0.0, 4.5));
        assert!(!session.is_armed());
        assert!(session.update(20.5, 0.0, 4.5));
        assert!(session.is_armed());
    }

    #[test]
    fn reports_each_crossing_once() {
        let mut session = session();
        let crossings: Vec<bool> = [10.0, 25.0, 30.0, -35.0, 12.0, 5.0, -21.0]
            .into_iter()
            .map(|dx| session.update(dx, 0.0, 4.5))
            .collect();
        assert_eq!(crossings, vec![false, true, false, false, true, false, true]);
    }
}
