//! Delegates that record every callback the arbiter makes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use swipeselect_list::{
    ArbiterBuilder, DragAnimator, HapticError, HapticFeedback, ItemHandle, ItemKey, ListHost,
    ListListener, SelectionAnimator, SelectionToolbar,
};

/// One delegate callback, in the order it happened.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    ItemActivated(ItemKey),
    DeleteRequested(ItemKey),
    DragTransform { key: ItemKey, dx: f32, dy: f32 },
    ReturnHome(ItemKey),
    DragRemoved(ItemKey),
    Selected(ItemKey),
    Deselected(ItemKey),
    SelectionReset(Vec<usize>),
    HapticPulse,
    ToolbarOpened,
    ToolbarTitle(String),
    ToolbarClosed,
}

/// Implements every delegate trait and logs the calls.
///
/// Deletes are refused and the toolbar opens unless configured otherwise.
#[derive(Debug, Default)]
pub struct RecordingDelegates {
    calls: RefCell<Vec<Call>>,
    accept_deletes: Cell<bool>,
    refuse_toolbar: Cell<bool>,
    haptic_error: RefCell<Option<HapticError>>,
}

impl RecordingDelegates {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Registers `self` as listener, both animators, toolbar and haptics.
    pub fn install<H: ListHost>(self: &Rc<Self>, builder: ArbiterBuilder<H>) -> ArbiterBuilder<H> {
        builder
            .listener(self.clone())
            .drag_animator(self.clone())
            .selection_animator(self.clone())
            .toolbar(self.clone())
            .haptics(self.clone())
    }

    pub fn set_accept_deletes(&self, accept: bool) {
        self.accept_deletes.set(accept);
    }

    pub fn set_refuse_toolbar(&self, refuse: bool) {
        self.refuse_toolbar.set(refuse);
    }

    /// Makes every pulse fail with `error`.
    pub fn fail_haptics(&self, error: HapticError) {
        *self.haptic_error.borrow_mut() = Some(error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Returns the calls so far and starts a fresh log.
    pub fn take_calls(&self) -> Vec<Call> {
        self.calls.take()
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| matches(call)).count()
    }

    pub fn count_of(&self, call: &Call) -> usize {
        self.count(|recorded| recorded == call)
    }

    pub fn last_title(&self) -> Option<String> {
        self.calls.borrow().iter().rev().find_map(|call| match call {
            Call::ToolbarTitle(title) => Some(title.clone()),
            _ => None,
        })
    }

    /// Cumulative horizontal offsets sent for `key`, in order.
    pub fn transforms_of(&self, key: ItemKey) -> Vec<f32> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::DragTransform { key: k, dx, .. } if *k == key => Some(*dx),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl ListListener for RecordingDelegates {
    fn on_item_activated(&self, item: &ItemHandle) {
        self.record(Call::ItemActivated(item.key));
    }

    fn on_delete_requested(&self, item: &ItemHandle) -> bool {
        self.record(Call::DeleteRequested(item.key));
        self.accept_deletes.get()
    }
}

impl DragAnimator for RecordingDelegates {
    fn on_drag_transform(&self, item: &ItemHandle, dx: f32, dy: f32) {
        self.record(Call::DragTransform {
            key: item.key,
            dx,
            dy,
        });
    }

    fn on_drag_return_home(&self, item: &ItemHandle) {
        self.record(Call::ReturnHome(item.key));
    }

    fn on_drag_removed(&self, item: &ItemHandle) {
        self.record(Call::DragRemoved(item.key));
    }
}

impl SelectionAnimator for RecordingDelegates {
    fn on_selected(&self, item: &ItemHandle) {
        self.record(Call::Selected(item.key));
    }

    fn on_deselected(&self, item: &ItemHandle) {
        self.record(Call::Deselected(item.key));
    }

    fn on_selection_reset(&self, positions: &[usize]) {
        self.record(Call::SelectionReset(positions.to_vec()));
    }
}

impl HapticFeedback for RecordingDelegates {
    fn pulse(&self) -> Result<(), HapticError> {
        self.record(Call::HapticPulse);
        match self.haptic_error.borrow().as_ref() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

impl SelectionToolbar for RecordingDelegates {
    fn open(&self) -> bool {
        if self.refuse_toolbar.get() {
            return false;
        }
        self.record(Call::ToolbarOpened);
        true
    }

    fn set_title(&self, title: &str) {
        self.record(Call::ToolbarTitle(title.to_owned()));
    }

    fn close(&self) {
        self.record(Call::ToolbarClosed);
    }
}
