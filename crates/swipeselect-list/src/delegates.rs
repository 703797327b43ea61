//! Pluggable handlers the arbiter calls out to.
//!
//! All methods take `&self`: delegates are shared as `Rc<dyn _>` between the
//! arbiter and the host, so stateful implementations keep their state behind
//! `Cell`/`RefCell` like the default drag animator does. Every callback runs
//! synchronously on the event thread and must return quickly.

use crate::error::HapticError;
use crate::item::{ItemHandle, ItemKey};
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::time::Duration;
use swipeselect_animation::{AnimationSpec, TweenAnimation};
use swipeselect_foundation::gesture_constants::RETURN_HOME_DURATION;

/// Business decisions about rows.
pub trait ListListener {
    /// A row was tapped outside selection mode.
    fn on_item_activated(&self, item: &ItemHandle);

    /// An armed drag was released. Returning true accepts the delete: the
    /// listener then removes the row itself and no return-home animation
    /// runs. Returning false sends the row back home.
    fn on_delete_requested(&self, item: &ItemHandle) -> bool;
}

/// Visual treatment of a dragged row.
pub trait DragAnimator {
    /// Called every frame of a drag with the cumulative delta since the
    /// gesture started.
    fn on_drag_transform(&self, item: &ItemHandle, dx: f32, dy: f32);

    /// Animate the row back to its resting position. Not called for rows the
    /// listener agreed to delete.
    fn on_drag_return_home(&self, item: &ItemHandle);

    /// The listener accepted the delete; the row is gone and any state kept
    /// for it can be dropped.
    fn on_drag_removed(&self, _item: &ItemHandle) {}
}

/// Visual treatment of selection changes.
pub trait SelectionAnimator {
    fn on_selected(&self, item: &ItemHandle);

    fn on_deselected(&self, item: &ItemHandle);

    /// Selection mode ended; `positions` are every index that was selected
    /// when it ended, ascending.
    fn on_selection_reset(&self, positions: &[usize]);
}

/// Device vibration. Best effort: errors are logged by the arbiter, never
/// surfaced.
pub trait HapticFeedback {
    fn pulse(&self) -> Result<(), HapticError>;
}

/// The contextual toolbar shown while rows are being selected.
pub trait SelectionToolbar {
    /// Show the toolbar. Returning false refuses, and selection mode does
    /// not start.
    fn open(&self) -> bool;

    fn set_title(&self, title: &str);

    /// Hide the toolbar because the selection emptied or the feature was
    /// switched off.
    fn close(&self);
}

#[derive(Debug)]
enum Translation {
    Dragging(f32),
    Returning(TweenAnimation<f32>),
}

/// Slides the row horizontally with the finger and snaps it back with an
/// overshoot. Rendering code reads the offset through
/// [`DefaultDragAnimator::translation_at`].
#[derive(Debug)]
pub struct DefaultDragAnimator {
    spec: AnimationSpec,
    translations: RefCell<FxHashMap<ItemKey, Translation>>,
}

impl DefaultDragAnimator {
    pub fn new() -> Self {
        Self::with_return_duration(RETURN_HOME_DURATION)
    }

    pub fn with_return_duration(duration: Duration) -> Self {
        Self {
            spec: AnimationSpec::overshoot(duration),
            translations: RefCell::new(FxHashMap::default()),
        }
    }

    /// Horizontal offset of the row at frame time `now`. Rows that are not
    /// dragged or have settled report 0.
    pub fn translation_at(&self, key: ItemKey, now: Duration) -> f32 {
        let mut translations = self.translations.borrow_mut();
        let Some(translation) = translations.get_mut(&key) else {
            return 0.0;
        };
        let (value, finished) = match translation {
            Translation::Dragging(offset) => return *offset,
            Translation::Returning(animation) => {
                (animation.value_at(now), animation.is_finished_at(now))
            }
        };
        if finished {
            translations.remove(&key);
        }
        value
    }

    /// Whether any row still needs frames (dragged or returning).
    pub fn is_animating(&self) -> bool {
        !self.translations.borrow().is_empty()
    }
}

impl Default for DefaultDragAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl DragAnimator for DefaultDragAnimator {
    fn on_drag_transform(&self, item: &ItemHandle, dx: f32, _dy: f32) {
        self.translations
            .borrow_mut()
            .insert(item.key, Translation::Dragging(dx));
    }

    fn on_drag_return_home(&self, item: &ItemHandle) {
        let mut translations = self.translations.borrow_mut();
        let from = match translations.get(&item.key) {
            Some(Translation::Dragging(offset)) => *offset,
            // Already on its way home, or never moved.
            Some(Translation::Returning(_)) | None => return,
        };
        translations.insert(
            item.key,
            Translation::Returning(TweenAnimation::new(from, 0.0, self.spec)),
        );
    }

    fn on_drag_removed(&self, item: &ItemHandle) {
        self.translations.borrow_mut().remove(&item.key);
    }
}

/// Placeholder installed when multi-select is enabled without an animator.
#[derive(Debug, Default)]
pub struct DefaultSelectionAnimator;

impl SelectionAnimator for DefaultSelectionAnimator {
    fn on_selected(&self, item: &ItemHandle) {
        log::warn!("stub selection animator asked to check row {:?}", item.key);
    }

    fn on_deselected(&self, item: &ItemHandle) {
        log::warn!("stub selection animator asked to uncheck row {:?}", item.key);
    }

    fn on_selection_reset(&self, positions: &[usize]) {
        log::warn!(
            "stub selection animator reset with {} selected rows",
            positions.len()
        );
    }
}

#[derive(Debug, Default)]
pub struct NoopHaptics;

impl HapticFeedback for NoopHaptics {
    fn pulse(&self) -> Result<(), HapticError> {
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct NoopToolbar;

impl SelectionToolbar for NoopToolbar {
    fn open(&self) -> bool {
        true
    }

    fn set_title(&self, title: &str) {
        log::trace!("selection title: {title}");
    }

    fn close(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use swipeselect_ui_graphics::Rect;

    fn row(key: u64) -> ItemHandle {
        ItemHandle::new(ItemKey(key), Rect::new(0.0, key as f32 * 40.0, 90.0, 40.0))
    }

    #[test]
    fn drag_sets_translation_directly() {
        let animator = DefaultDragAnimator::new();
        animator.on_drag_transform(&row(1), 24.0, 3.0);
        assert_eq!(animator.translation_at(ItemKey(1), Duration::ZERO), 24.0);
        assert_eq!(animator.translation_at(ItemKey(2), Duration::ZERO), 0.0);
        assert!(animator.is_animating());
    }

    #[test]
    fn return_home_settles_at_zero() {
        let animator = DefaultDragAnimator::new();
        animator.on_drag_transform(&row(1), 30.0, 0.0);
        animator.on_drag_return_home(&row(1));

        let start = Duration::from_secs(2);
        assert_eq!(animator.translation_at(ItemKey(1), start), 30.0);
        let mid = animator.translation_at(ItemKey(1), start + Duration::from_millis(60));
        assert!(mid < 30.0, "row did not move: {mid}");

        let done = start + RETURN_HOME_DURATION;
        assert_eq!(animator.translation_at(ItemKey(1), done), 0.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn return_home_for_untouched_row_is_ignored() {
        let animator = DefaultDragAnimator::new();
        animator.on_drag_return_home(&row(5));
        assert!(!animator.is_animating());
    }

    #[test]
    fn removed_row_stops_animating() {
        let animator = DefaultDragAnimator::new();
        animator.on_drag_transform(&row(3), 85.0, 0.0);
        animator.on_drag_removed(&row(3));
        assert!(!animator.is_animating());
        assert_eq!(animator.translation_at(ItemKey(3), Duration::ZERO), 0.0);
    }

    #[test]
    fn noop_delegates_accept_everything() {
        assert_eq!(NoopHaptics.pulse(), Ok(()));
        assert!(NoopToolbar.open());
        NoopToolbar.set_title("1 selected");
        NoopToolbar.close();
    }
}
