use std::time::Duration;
use web_time::Instant;

/// Stamps pointer events for hosts that read the wall clock.
///
/// Gesture timing only ever compares event times with each other, so the
/// clock reports time elapsed since its own creation rather than an absolute
/// instant. Hosts replaying recorded input can skip this and build
/// [`PointerEvent`](super::PointerEvent)s with their own timestamps.
#[derive(Clone, Copy, Debug)]
pub struct EventClock {
    origin: Instant,
}

impl EventClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now(&self) -> Duration {
        self.at(Instant::now())
    }

    /// Converts an instant captured by the platform into event time.
    /// Instants before the origin clamp to zero.
    pub fn at(&self, instant: Instant) -> Duration {
        instant.saturating_duration_since(self.origin)
    }
}

impl Default for EventClock {
    fn default() -> Self {
        Self::new()
    }
}
