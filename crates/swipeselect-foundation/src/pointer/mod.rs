mod clock;
mod types;

pub use clock::EventClock;
pub use types::{PointerEvent, PointerEventKind, PointerId};
