use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use swipeselect_ui_graphics::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

impl PointerEventKind {
    /// Up and Cancel both end the gesture.
    pub fn ends_gesture(self) -> bool {
        matches!(self, PointerEventKind::Up | PointerEventKind::Cancel)
    }
}

/// Pointer event with consumption tracking for gesture disambiguation.
///
/// A handler that claims the event (a committed row drag, a tap that toggled
/// selection) consumes it so the host list skips its own scroll/click
/// handling for that event.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    /// Position in list coordinates.
    pub position: Point,
    /// Event time since an arbitrary, monotonic origin shared by the stream.
    pub time: Duration,
    /// Shared via Rc<Cell> so consumption is visible across copies.
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, time: Duration) -> Self {
        Self {
            id: 0,
            kind,
            position,
            time,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(position: Point, time: Duration) -> Self {
        Self::new(PointerEventKind::Down, position, time)
    }

    pub fn moved(position: Point, time: Duration) -> Self {
        Self::new(PointerEventKind::Move, position, time)
    }

    pub fn up(position: Point, time: Duration) -> Self {
        Self::new(PointerEventKind::Up, position, time)
    }

    pub fn cancel(position: Point, time: Duration) -> Self {
        Self::new(PointerEventKind::Cancel, position, time)
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    /// Mark this event as consumed, preventing the host from processing it.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
