//! Press/scroll/tap/long-press recogniser.
//!
//! Feeds a single pointer stream and reports the classic single-pointer
//! gestures to a [`GestureListener`]:
//!
//! - movement within touch slop reports nothing;
//! - movement beyond slop enters scroll mode, cancels tap and long-press, and
//!   reports every following move through [`GestureListener::on_scroll`];
//! - a press that rests within slop for the long-press timeout fires
//!   [`GestureListener::on_long_press`] once, after which the rest of the
//!   gesture is ignored;
//! - a release that was neither a scroll nor a long-press is a tap.
//!
//! Long-press needs a clock even when no events arrive, so hosts call
//! [`GestureDetector::poll`] from their frame loop. Every event also checks
//! the timeout first, so a host that only forwards events still sees the
//! long-press before the move or release that follows it.

use crate::gesture_constants::{LONG_PRESS_TIMEOUT, TOUCH_SLOP};
use crate::pointer::{PointerEvent, PointerEventKind};
use std::time::Duration;
use swipeselect_ui_graphics::Point;

/// Receives classified gestures. Every method defaults to "not handled".
pub trait GestureListener {
    fn on_down(&mut self, _event: &PointerEvent) {}

    /// Called for each move once the gesture has left touch slop.
    ///
    /// `distance_x`/`distance_y` are the distance travelled since the previous
    /// reported position, measured as previous minus current.
    fn on_scroll(
        &mut self,
        _down: &PointerEvent,
        _current: &PointerEvent,
        _distance_x: f32,
        _distance_y: f32,
    ) -> bool {
        false
    }

    fn on_long_press(&mut self, _down: &PointerEvent) {}

    fn on_single_tap_up(&mut self, _up: &PointerEvent) -> bool {
        false
    }
}

#[derive(Debug)]
struct Press {
    down: PointerEvent,
    last_position: Point,
    in_scroll: bool,
    long_press_fired: bool,
}

#[derive(Debug)]
pub struct GestureDetector {
    touch_slop: f32,
    long_press_timeout: Duration,
    press: Option<Press>,
}

impl GestureDetector {
    pub fn new(touch_slop: f32, long_press_timeout: Duration) -> Self {
        Self {
            touch_slop,
            long_press_timeout,
            press: None,
        }
    }

    /// Whether a pointer is currently down.
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Whether the current press has left touch slop.
    pub fn is_scrolling(&self) -> bool {
        self.press.as_ref().is_some_and(|press| press.in_scroll)
    }

    /// Feeds one pointer event. Returns whether a listener handled it.
    pub fn on_pointer_event<L>(&mut self, event: &PointerEvent, listener: &mut L) -> bool
    where
        L: GestureListener + ?Sized,
    {
        match event.kind {
            PointerEventKind::Down => {
                if self.press.is_some() {
                    log::debug!("pointer down while a press is active; restarting gesture");
                }
                self.press = Some(Press {
                    down: event.clone(),
                    last_position: event.position,
                    in_scroll: false,
                    long_press_fired: false,
                });
                listener.on_down(event);
                false
            }
            PointerEventKind::Move => {
                self.poll(event.time, listener);
                let slop_squared = self.touch_slop * self.touch_slop;
                let Some(press) = self.press.as_mut() else {
                    return false;
                };
                if press.long_press_fired {
                    return false;
                }
                if !press.in_scroll {
                    if press.down.position.distance_squared(event.position) <= slop_squared {
                        return false;
                    }
                    press.in_scroll = true;
                }
                let distance_x = press.last_position.x - event.position.x;
                let distance_y = press.last_position.y - event.position.y;
                press.last_position = event.position;
                let down = press.down.clone();
                listener.on_scroll(&down, event, distance_x, distance_y)
            }
            PointerEventKind::Up => {
                self.poll(event.time, listener);
                match self.press.take() {
                    Some(press) if !press.in_scroll && !press.long_press_fired => {
                        listener.on_single_tap_up(event)
                    }
                    Some(_) => false,
                    None => {
                        log::debug!("pointer up without a matching down");
                        false
                    }
                }
            }
            PointerEventKind::Cancel => {
                self.press = None;
                false
            }
        }
    }

    /// Fires a pending long-press if the timeout has elapsed by `now`.
    /// Returns true when the long-press fired during this call.
    pub fn poll<L>(&mut self, now: Duration, listener: &mut L) -> bool
    where
        L: GestureListener + ?Sized,
    {
        let Some(press) = self.press.as_mut() else {
            return false;
        };
        if press.in_scroll || press.long_press_fired {
            return false;
        }
        if now.saturating_sub(press.down.time) < self.long_press_timeout {
            return false;
        }
        press.long_press_fired = true;
        let down = press.down.clone();
        listener.on_long_press(&down);
        true
    }
}

impl Default for GestureDetector {
    fn default() -> Self {
        Self::new(TOUCH_SLOP, LONG_PRESS_TIMEOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Seen {
        Down,
        Scroll { dx: f32, dy: f32, distance_x: f32, distance_y: f32 },
        LongPress,
        Tap,
    }

    #[derive(Default)]
    struct Log(Vec<Seen>);

    impl GestureListener for Log {
        fn on_down(&mut self, _event: &PointerEvent) {
            self.0.push(Seen::Down);
        }

        fn on_scroll(
            &mut self,
            down: &PointerEvent,
            current: &PointerEvent,
            distance_x: f32,
            distance_y: f32,
        ) -> bool {
            self.0.push(Seen::Scroll {
                dx: current.position.x - down.position.x,
                dy: current.position.y - down.position.y,
                distance_x,
                distance_y,
            });
            true
        }

        fn on_long_press(&mut self, _down: &PointerEvent) {
            self.0.push(Seen::LongPress);
        }

        fn on_single_tap_up(&mut self, _up: &PointerEvent) -> bool {
            self.0.push(Seen::Tap);
            true
        }
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn quick_release_is_a_tap() {
        let mut detector = GestureDetector::default();
        let mut log = Log::default();
        let at = Point::new(20.0, 20.0);

        detector.on_pointer_event(&PointerEvent::down(at, ms(0)), &mut log);
        detector.on_pointer_event(&PointerEvent::moved(at.offset(3.0, 2.0), ms(16)), &mut log);
        let handled = detector.on_pointer_event(&PointerEvent::up(at, ms(80)), &mut log);

        assert!(handled);
        assert_eq!(log.0, vec![Seen::Down, Seen::Tap]);
        assert!(!detector.is_pressed());
    }

    #[test]
    fn movement_beyond_slop_scrolls_and_cancels_tap() {
        let mut detector = GestureDetector::default();
        let mut log = Log::default();
        let at = Point::new(20.0, 20.0);

        detector.on_pointer_event(&PointerEvent::down(at, ms(0)), &mut log);
        detector.on_pointer_event(&PointerEvent::moved(at.offset(12.0, 0.0), ms(16)), &mut log);
        detector.on_pointer_event(&PointerEvent::moved(at.offset(18.0, 1.0), ms(32)), &mut log);
        detector.on_pointer_event(&PointerEvent::up(at.offset(18.0, 1.0), ms(48)), &mut log);

        assert_eq!(
            log.0,
            vec![
                Seen::Down,
                Seen::Scroll { dx: 12.0, dy: 0.0, distance_x: -12.0, distance_y: 0.0 },
                Seen::Scroll { dx: 18.0, dy: 1.0, distance_x: -6.0, distance_y: -1.0 },
            ]
        );
    }

    #[test]
    fn long_press_fires_once_from_poll_and_suppresses_tap() {
        let mut detector = GestureDetector::default();
        let mut log = Log::default();
        let at = Point::new(20.0, 20.0);

        detector.on_pointer_event(&PointerEvent::down(at, ms(0)), &mut log);
        assert!(!detector.poll(ms(499), &mut log));
        assert!(detector.poll(ms(500), &mut log));
        assert!(!detector.poll(ms(700), &mut log));
        detector.on_pointer_event(&PointerEvent::moved(at.offset(30.0, 0.0), ms(720)), &mut log);
        detector.on_pointer_event(&PointerEvent::up(at, ms(800)), &mut log);

        assert_eq!(log.0, vec![Seen::Down, Seen::LongPress]);
    }

    #[test]
    fn late_event_fires_pending_long_press_first() {
        let mut detector = GestureDetector::default();
        let mut log = Log::default();
        let at = Point::new(20.0, 20.0);

        detector.on_pointer_event(&PointerEvent::down(at, ms(0)), &mut log);
        detector.on_pointer_event(&PointerEvent::up(at, ms(650)), &mut log);

        assert_eq!(log.0, vec![Seen::Down, Seen::LongPress]);
    }

    #[test]
    fn scrolling_cancels_long_press() {
        let mut detector = GestureDetector::default();
        let mut log = Log::default();
        let at = Point::new(20.0, 20.0);

        detector.on_pointer_event(&PointerEvent::down(at, ms(0)), &mut log);
        detector.on_pointer_event(&PointerEvent::moved(at.offset(0.0, 30.0), ms(100)), &mut log);
        assert!(!detector.poll(ms(900), &mut log));

        assert!(!log.0.contains(&Seen::LongPress));
        assert!(detector.is_scrolling());
    }

    #[test]
    fn cancel_never_taps() {
        let mut detector = GestureDetector::default();
        let mut log = Log::default();
        let at = Point::new(20.0, 20.0);

        detector.on_pointer_event(&PointerEvent::down(at, ms(0)), &mut log);
        detector.on_pointer_event(&PointerEvent::cancel(at, ms(40)), &mut log);
        detector.on_pointer_event(&PointerEvent::up(at, ms(60)), &mut log);

        assert_eq!(log.0, vec![Seen::Down]);
        assert!(!detector.is_pressed());
    }
}
