//! Shared gesture constants for list row interaction.
//!
//! These values are in logical pixels and match the platform defaults the
//! swipe/select interaction was tuned against. Every one of them is only a
//! default: `GestureConfig` in `swipeselect-list` exposes each as a
//! configurable parameter.

use std::time::Duration;

/// Touch slop in logical pixels.
///
/// Movement below this distance from the press position is finger jitter:
/// it neither starts a scroll nor cancels a pending tap or long-press, and a
/// horizontal row drag never commits below it.
pub const TOUCH_SLOP: f32 = 8.0;

/// How long the pointer must rest within slop before a press becomes a
/// long-press.
pub const LONG_PRESS_TIMEOUT: Duration = Duration::from_millis(500);

/// Cumulative vertical travel beyond which a gesture can no longer become a
/// row drag. Catches a finger that scrolled and then came to rest.
pub const MAX_VERTICAL_DRAG_TRAVEL: f32 = 50.0;

/// A row drag must commit before the cumulative horizontal travel exceeds
/// `TOUCH_SLOP * DRAG_COMMIT_SLOP_MULTIPLIER`.
pub const DRAG_COMMIT_SLOP_MULTIPLIER: f32 = 5.0;

/// A frame is predominantly horizontal when `|dy| * ratio <= |dx|`.
pub const HORIZONTAL_FRAME_RATIO: f32 = 5.0;

/// A dragged row is armed for deletion once `|dx| > width / divisor`.
pub const ARM_WIDTH_DIVISOR: f32 = 4.5;

/// Duration of the default return-to-home row animation.
pub const RETURN_HOME_DURATION: Duration = Duration::from_millis(250);
