//! Item handles and per-row interaction tags.

use rustc_hash::FxHashMap;
use swipeselect_ui_graphics::Rect;

/// Stable identity the host assigns to a row.
///
/// Unlike the adapter position, a key survives insertions and removals above
/// the row, so a drag can keep tracking its row while the list changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey(pub u64);

/// A row as resolved by the host for the current event.
///
/// Handles are snapshots: bounds are only valid for the callback they were
/// resolved in. Hold on to the key, not the handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemHandle {
    pub key: ItemKey,
    pub bounds: Rect,
}

impl ItemHandle {
    pub fn new(key: ItemKey, bounds: Rect) -> Self {
        Self { key, bounds }
    }

    pub fn width(&self) -> f32 {
        self.bounds.width
    }
}

/// Describes how the user is interacting with a row at the moment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InteractionState {
    /// Neither swiping nor holding this row.
    #[default]
    Idle,
    /// The row is being dragged sideways (pointer not yet released).
    Swiping,
    /// Reserved for a pressed-but-not-dragging row; nothing transitions here.
    Holding,
}

/// Interaction tags keyed by row. Rows without an entry are idle.
#[derive(Debug, Default)]
pub(crate) struct InteractionStates {
    states: FxHashMap<ItemKey, InteractionState>,
}

impl InteractionStates {
    pub(crate) fn get(&self, key: ItemKey) -> InteractionState {
        self.states.get(&key).copied().unwrap_or_default()
    }

    pub(crate) fn set(&mut self, key: ItemKey, state: InteractionState) {
        if state == InteractionState::Idle {
            self.states.remove(&key);
        } else {
            self.states.insert(key, state);
        }
    }

    pub(crate) fn count(&self, state: InteractionState) -> usize {
        self.states.values().filter(|tag| **tag == state).count()
    }
}
