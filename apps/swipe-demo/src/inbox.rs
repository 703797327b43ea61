//! A message list the demo swipes through.

use std::cell::RefCell;
use swipeselect_foundation::{Point, Rect};
use swipeselect_list::{
    ItemHandle, ItemKey, ListHost, ListListener, SelectionAnimator, SelectionToolbar,
};

struct Message {
    key: ItemKey,
    subject: String,
}

pub struct Inbox {
    messages: RefCell<Vec<Message>>,
    width: f32,
    row_height: f32,
}

impl Inbox {
    pub fn new<'a>(subjects: impl IntoIterator<Item = &'a str>, width: f32, row_height: f32) -> Self {
        let messages = subjects
            .into_iter()
            .enumerate()
            .map(|(i, subject)| Message {
                key: ItemKey(i as u64),
                subject: subject.to_owned(),
            })
            .collect();
        Self {
            messages: RefCell::new(messages),
            width,
            row_height,
        }
    }

    pub fn subjects(&self) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .map(|message| message.subject.clone())
            .collect()
    }

    pub fn position_of(&self, subject: &str) -> Option<usize> {
        self.messages
            .borrow()
            .iter()
            .position(|message| message.subject == subject)
    }

    pub fn key_at(&self, index: usize) -> Option<ItemKey> {
        self.messages.borrow().get(index).map(|message| message.key)
    }

    pub fn row_center(&self, index: usize) -> Point {
        self.bounds_at(index).center()
    }

    fn subject_of(&self, key: ItemKey) -> String {
        self.messages
            .borrow()
            .iter()
            .find(|message| message.key == key)
            .map(|message| message.subject.clone())
            .unwrap_or_default()
    }

    fn bounds_at(&self, index: usize) -> Rect {
        Rect::new(0.0, index as f32 * self.row_height, self.width, self.row_height)
    }
}

impl ListHost for Inbox {
    fn hit_test(&self, point: Point) -> Option<ItemHandle> {
        if point.y < 0.0 {
            return None;
        }
        let index = (point.y / self.row_height) as usize;
        let key = self.key_at(index)?;
        Some(ItemHandle::new(key, self.bounds_at(index))).filter(|item| item.bounds.contains(point))
    }

    fn index_of(&self, item: &ItemHandle) -> Option<usize> {
        self.messages
            .borrow()
            .iter()
            .position(|message| message.key == item.key)
    }

    fn item(&self, key: ItemKey) -> Option<ItemHandle> {
        let index = self
            .messages
            .borrow()
            .iter()
            .position(|message| message.key == key)?;
        Some(ItemHandle::new(key, self.bounds_at(index)))
    }

    fn is_animating(&self) -> bool {
        false
    }
}

impl ListListener for Inbox {
    fn on_item_activated(&self, item: &ItemHandle) {
        println!("  open \"{}\"", self.subject_of(item.key));
    }

    fn on_delete_requested(&self, item: &ItemHandle) -> bool {
        let subject = self.subject_of(item.key);
        self.messages
            .borrow_mut()
            .retain(|message| message.key != item.key);
        println!("  deleted \"{subject}\"");
        true
    }
}

/// Prints what a real list would render as checkmarks.
pub struct ConsoleSelection;

impl SelectionAnimator for ConsoleSelection {
    fn on_selected(&self, item: &ItemHandle) {
        println!("  [x] row {}", item.key.0);
    }

    fn on_deselected(&self, item: &ItemHandle) {
        println!("  [ ] row {}", item.key.0);
    }

    fn on_selection_reset(&self, positions: &[usize]) {
        println!("  selection cleared, was {positions:?}");
    }
}

pub struct ConsoleToolbar;

impl SelectionToolbar for ConsoleToolbar {
    fn open(&self) -> bool {
        println!("  toolbar shown");
        true
    }

    fn set_title(&self, title: &str) {
        println!("  toolbar: {title}");
    }

    fn close(&self) {
        println!("  toolbar hidden");
    }
}
