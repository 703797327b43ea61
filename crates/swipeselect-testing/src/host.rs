//! An in-memory list of equally tall rows.

use std::cell::{Cell, RefCell};
use swipeselect_list::{ItemHandle, ItemKey, ListHost};
use swipeselect_ui_graphics::{Point, Rect};

/// A vertical list of rows with fixed width and height.
///
/// Rows are keyed `0..count` at creation; removing a row shifts the ones
/// below it up, just like an adapter removal would. Scrolling moves every
/// row by the same offset. All state sits behind cells so the host can be
/// shared with an arbiter as `Rc<FakeListHost>`.
#[derive(Debug)]
pub struct FakeListHost {
    rows: RefCell<Vec<ItemKey>>,
    width: f32,
    row_height: f32,
    scroll_offset: Cell<f32>,
    animating: Cell<bool>,
}

impl FakeListHost {
    pub fn new(count: usize, width: f32, row_height: f32) -> Self {
        Self {
            rows: RefCell::new((0..count as u64).map(ItemKey).collect()),
            width,
            row_height,
            scroll_offset: Cell::new(0.0),
            animating: Cell::new(false),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.borrow().is_empty()
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Simulates a running item animator (insert, remove, move).
    pub fn set_animating(&self, animating: bool) {
        self.animating.set(animating);
    }

    /// Removes the row with `key`. Returns the index it had.
    pub fn remove(&self, key: ItemKey) -> Option<usize> {
        let mut rows = self.rows.borrow_mut();
        let index = rows.iter().position(|row| *row == key)?;
        rows.remove(index);
        Some(index)
    }

    /// Scrolls content up by `dy` pixels.
    pub fn scroll_by(&self, dy: f32) {
        self.scroll_offset.set(self.scroll_offset.get() + dy);
    }

    /// Handle of the row currently at `index`.
    pub fn handle(&self, index: usize) -> Option<ItemHandle> {
        let key = *self.rows.borrow().get(index)?;
        Some(ItemHandle::new(key, self.bounds_at(index)))
    }

    /// Screen position of the middle of row `index`, whether or not a row is
    /// there.
    pub fn row_center(&self, index: usize) -> Point {
        self.bounds_at(index).center()
    }

    fn bounds_at(&self, index: usize) -> Rect {
        let top = index as f32 * self.row_height - self.scroll_offset.get();
        Rect::new(0.0, top, self.width, self.row_height)
    }
}

impl ListHost for FakeListHost {
    fn hit_test(&self, point: Point) -> Option<ItemHandle> {
        let content_y = point.y + self.scroll_offset.get();
        if content_y < 0.0 {
            return None;
        }
        let index = (content_y / self.row_height) as usize;
        self.handle(index)
            .filter(|handle| handle.bounds.contains(point))
    }

    fn index_of(&self, item: &ItemHandle) -> Option<usize> {
        self.rows.borrow().iter().position(|row| *row == item.key)
    }

    fn item(&self, key: ItemKey) -> Option<ItemHandle> {
        let index = self.rows.borrow().iter().position(|row| *row == key)?;
        self.handle(index)
    }

    fn is_animating(&self) -> bool {
        self.animating.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot_assertions::assert_rect_contains_point;

    #[test]
    fn hit_test_follows_scroll_offset() {
        let host = FakeListHost::new(5, 90.0, 40.0);
        assert_eq!(host.hit_test(Point::new(10.0, 45.0)).map(|h| h.key), Some(ItemKey(1)));

        host.scroll_by(30.0);
        assert_eq!(host.hit_test(Point::new(10.0, 45.0)).map(|h| h.key), Some(ItemKey(1)));
        assert_eq!(host.hit_test(Point::new(10.0, 5.0)).map(|h| h.key), Some(ItemKey(0)));
        assert_eq!(host.hit_test(Point::new(95.0, 45.0)), None);

        let center = host.row_center(2);
        let handle = host.handle(2).expect("row 2 exists");
        assert_rect_contains_point(handle.bounds, center.x, center.y, "row 2 center");
    }

    #[test]
    fn removal_shifts_rows_below() {
        let host = FakeListHost::new(4, 90.0, 40.0);
        assert_eq!(host.remove(ItemKey(1)), Some(1));
        assert_eq!(host.remove(ItemKey(1)), None);
        assert_eq!(host.len(), 3);

        let moved = host.item(ItemKey(2)).expect("row 2 still attached");
        assert_eq!(host.index_of(&moved), Some(1));
        assert_eq!(moved.bounds.y, 40.0);
        assert_eq!(host.hit_test(Point::new(10.0, 130.0)), None);
    }
}
