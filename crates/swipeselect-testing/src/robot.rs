//! Robot-style driver for scripted gestures
//!
//! The robot owns a [`GestureArbiter`] plus a virtual clock and a single
//! finger. Every move advances the clock by one frame, so long-press timing
//! only depends on how the script waits.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use swipeselect_list::{Feature, GestureArbiter};
//! use swipeselect_testing::{FakeListHost, GestureRobot};
//!
//! let host = Rc::new(FakeListHost::new(5, 90.0, 40.0));
//! let arbiter = GestureArbiter::builder(Rc::clone(&host))
//!     .feature(Feature::MultiSelect, true)
//!     .build()
//!     .unwrap();
//! let mut robot = GestureRobot::new(arbiter);
//!
//! robot.long_press(host.row_center(3));
//! assert_eq!(robot.arbiter().selected_indices(), vec![3]);
//! ```

use std::time::Duration;
use swipeselect_foundation::PointerEvent;
use swipeselect_list::{GestureArbiter, ListHost};
use swipeselect_ui_graphics::Point;

/// Frame interval used between scripted moves.
pub const FRAME: Duration = Duration::from_millis(16);

pub struct GestureRobot<H> {
    arbiter: GestureArbiter<H>,
    now: Duration,
    position: Point,
    pressed_at: Point,
}

impl<H: ListHost> GestureRobot<H> {
    pub fn new(arbiter: GestureArbiter<H>) -> Self {
        Self {
            arbiter,
            now: Duration::from_secs(1),
            position: Point::ZERO,
            pressed_at: Point::ZERO,
        }
    }

    pub fn arbiter(&self) -> &GestureArbiter<H> {
        &self.arbiter
    }

    pub fn arbiter_mut(&mut self) -> &mut GestureArbiter<H> {
        &mut self.arbiter
    }

    pub fn into_arbiter(self) -> GestureArbiter<H> {
        self.arbiter
    }

    /// Current virtual frame time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Where the finger is (or was last).
    pub fn position(&self) -> Point {
        self.position
    }

    /// Puts the finger down. Returns whether the arbiter consumed the event.
    pub fn press(&mut self, at: Point) -> bool {
        self.position = at;
        self.pressed_at = at;
        self.send(PointerEvent::down(at, self.now))
    }

    /// Moves the finger to `to` one frame later.
    pub fn move_to(&mut self, to: Point) -> bool {
        self.now += FRAME;
        self.position = to;
        self.send(PointerEvent::moved(to, self.now))
    }

    pub fn move_by(&mut self, dx: f32, dy: f32) -> bool {
        self.move_to(self.position.offset(dx, dy))
    }

    /// Lifts the finger one frame later.
    pub fn release(&mut self) -> bool {
        self.now += FRAME;
        self.send(PointerEvent::up(self.position, self.now))
    }

    /// The platform takes the gesture away (for example a parent intercepted).
    pub fn cancel(&mut self) -> bool {
        self.now += FRAME;
        self.send(PointerEvent::cancel(self.position, self.now))
    }

    /// Advances the clock and polls gesture timers. Returns true when a
    /// long-press fired.
    pub fn advance(&mut self, by: Duration) -> bool {
        self.now += by;
        self.arbiter.poll(self.now)
    }

    pub fn tap(&mut self, at: Point) -> bool {
        self.press(at);
        self.release()
    }

    /// Press, hold past the long-press timeout, release. Returns whether the
    /// long-press fired.
    pub fn long_press(&mut self, at: Point) -> bool {
        let timeout = self.arbiter.config().long_press_timeout;
        self.press(at);
        let fired = self.advance(timeout);
        self.release();
        fired
    }

    /// Moves the held finger through successive horizontal offsets from where
    /// it was pressed. Returns how many of those moves were consumed.
    pub fn drag_through(&mut self, offsets: &[f32]) -> usize {
        let origin = self.pressed_at;
        offsets
            .iter()
            .filter(|dx| self.move_to(origin.offset(**dx, 0.0)))
            .count()
    }

    /// Full gesture: press at `from`, move by `(dx, dy)` in `steps` equal
    /// frames, release. Returns whether the release was consumed.
    pub fn swipe(&mut self, from: Point, dx: f32, dy: f32, steps: u32) -> bool {
        self.press(from);
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.move_to(from.offset(dx * t, dy * t));
        }
        self.release()
    }

    fn send(&mut self, event: PointerEvent) -> bool {
        self.arbiter.on_pointer_event(&event)
    }
}
