//! Pointer input and gesture detection for swipeselect

pub mod gesture_constants;
pub mod gestures;
pub mod pointer;

pub use gestures::{GestureDetector, GestureListener};
pub use pointer::{EventClock, PointerEvent, PointerEventKind, PointerId};
pub use swipeselect_ui_graphics::{Point, Rect, Size};

pub mod prelude {
    pub use crate::gesture_constants::*;
    pub use crate::gestures::{GestureDetector, GestureListener};
    pub use crate::pointer::{EventClock, PointerEvent, PointerEventKind, PointerId};
}
