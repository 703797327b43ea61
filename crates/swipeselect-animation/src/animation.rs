//! Time-based tweens with easing curves.
//!
//! Animations here are sampled, not scheduled: the owner passes the current
//! frame time to [`TweenAnimation::value_at`]. The first sample starts the
//! clock, so an animation created inside an event callback begins on the next
//! frame the host renders.

use std::time::Duration;

/// Values a tween can move between.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Maps linear time progress onto value progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Travels past the target and settles back onto it. Larger `tension`
    /// overshoots further.
    Overshoot { tension: f32 },
}

impl Easing {
    /// Tension rows use when snapping back home.
    pub const DEFAULT_OVERSHOOT: Easing = Easing::Overshoot { tension: 2.0 };

    /// Eased progress for linear progress `fraction`, clamped to [0, 1]
    /// first. Both curves start at 0 and end at exactly 1.
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => fraction,
            Easing::Overshoot { tension } => {
                let t = fraction - 1.0;
                t * t * ((tension + 1.0) * t + tension) + 1.0
            }
        }
    }
}

/// Duration, easing and start delay of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
    /// Time between the first sample and the start of motion.
    pub delay: Duration,
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            delay: Duration::ZERO,
        }
    }

    pub fn linear(duration: Duration) -> Self {
        Self::tween(duration, Easing::Linear)
    }

    pub fn overshoot(duration: Duration) -> Self {
        Self::tween(duration, Easing::DEFAULT_OVERSHOOT)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Linear progress in [0, 1] after `elapsed` time since the first sample.
    pub fn fraction(&self, elapsed: Duration) -> f32 {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        (active.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

/// One value moving from `start` to `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct TweenAnimation<T> {
    start: T,
    target: T,
    spec: AnimationSpec,
    started_at: Option<Duration>,
}

impl<T: Lerp + Clone> TweenAnimation<T> {
    pub fn new(start: T, target: T, spec: AnimationSpec) -> Self {
        Self {
            start,
            target,
            spec,
            started_at: None,
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Samples the animation at frame time `now`, starting it if this is the
    /// first sample.
    pub fn value_at(&mut self, now: Duration) -> T {
        let started_at = *self.started_at.get_or_insert_with(|| {
            log::trace!("tween started at {:?}", now);
            now
        });
        match self.spec.fraction(now.saturating_sub(started_at)) {
            done if done >= 1.0 => self.target.clone(),
            fraction => self
                .start
                .lerp(&self.target, self.spec.easing.transform(fraction)),
        }
    }

    /// Unstarted animations are never finished.
    pub fn is_finished_at(&self, now: Duration) -> bool {
        self.started_at.is_some_and(|started_at| {
            self.spec.fraction(now.saturating_sub(started_at)) >= 1.0
        })
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
