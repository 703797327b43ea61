//! The host list's side of the contract.

use crate::item::{ItemHandle, ItemKey};
use std::cell::Cell;
use std::rc::Rc;
use swipeselect_ui_graphics::Point;

/// What the arbiter needs from the scrollable list it is attached to.
///
/// The arbiter only queries: it never lays out, recycles or renders rows.
pub trait ListHost {
    /// The row under `point` (list coordinates), if any.
    fn hit_test(&self, point: Point) -> Option<ItemHandle>;

    /// Adapter position of the row, or `None` for NO_POSITION (the row is
    /// being removed or not bound yet).
    fn index_of(&self, item: &ItemHandle) -> Option<usize>;

    /// Re-resolves a row by key. `None` once the row is no longer laid out.
    fn item(&self, key: ItemKey) -> Option<ItemHandle>;

    /// Whether the list's own item animations are running.
    fn is_animating(&self) -> bool;
}

impl<T: ListHost + ?Sized> ListHost for Rc<T> {
    fn hit_test(&self, point: Point) -> Option<ItemHandle> {
        (**self).hit_test(point)
    }

    fn index_of(&self, item: &ItemHandle) -> Option<usize> {
        (**self).index_of(item)
    }

    fn item(&self, key: ItemKey) -> Option<ItemHandle> {
        (**self).item(key)
    }

    fn is_animating(&self) -> bool {
        (**self).is_animating()
    }
}

impl<T: ListHost + ?Sized> ListHost for &T {
    fn hit_test(&self, point: Point) -> Option<ItemHandle> {
        (**self).hit_test(point)
    }

    fn index_of(&self, item: &ItemHandle) -> Option<usize> {
        (**self).index_of(item)
    }

    fn item(&self, key: ItemKey) -> Option<ItemHandle> {
        (**self).item(key)
    }

    fn is_animating(&self) -> bool {
        (**self).is_animating()
    }
}

/// Shared "a row is being swiped" flag.
///
/// The host's layout code keeps a clone and asks
/// [`ScrollGate::can_scroll_vertically`] before scrolling; only the arbiter
/// opens and closes the gate.
#[derive(Clone, Debug, Default)]
pub struct ScrollGate {
    swiping: Rc<Cell<bool>>,
}

impl ScrollGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_scroll_vertically(&self) -> bool {
        !self.swiping.get()
    }

    pub fn is_swiping(&self) -> bool {
        self.swiping.get()
    }

    /// Closes the gate. Returns whether it was already closed.
    pub(crate) fn begin_swipe(&self) -> bool {
        self.swiping.replace(true)
    }

    /// Reopens the gate. Returns whether it had been closed.
    pub(crate) fn end_swipe(&self) -> bool {
        self.swiping.replace(false)
    }
}
