//! Gesture handling behind [`GestureArbiter`](crate::GestureArbiter).
//!
//! The detector classifies the raw stream; this listener decides what each
//! classified gesture means for the list: a row drag, a selection toggle, a
//! plain activation, or nothing (the host keeps scrolling).

use crate::config::{GestureConfig, TitleTemplate};
use crate::delegates::{
    DefaultDragAnimator, DefaultSelectionAnimator, DragAnimator, HapticFeedback, ListListener,
    NoopHaptics, NoopToolbar, SelectionAnimator, SelectionToolbar,
};
use crate::drag::DragSession;
use crate::features::{Feature, FeatureFlags};
use crate::host::{ListHost, ScrollGate};
use crate::item::{InteractionState, InteractionStates, ItemHandle};
use crate::selection::SelectionSet;
use std::rc::Rc;
use swipeselect_foundation::{GestureListener, PointerEvent};

fn default_selection_animator() -> Rc<dyn SelectionAnimator> {
    Rc::new(DefaultSelectionAnimator)
}

fn default_toolbar() -> Rc<dyn SelectionToolbar> {
    Rc::new(NoopToolbar)
}

pub(crate) struct Delegates {
    pub(crate) listener: Option<Rc<dyn ListListener>>,
    pub(crate) drag_animator: Option<Rc<dyn DragAnimator>>,
    /// Same object as `drag_animator` when the arbiter installed it itself.
    pub(crate) default_drag_animator: Option<Rc<DefaultDragAnimator>>,
    pub(crate) selection_animator: Option<Rc<dyn SelectionAnimator>>,
    pub(crate) toolbar: Option<Rc<dyn SelectionToolbar>>,
    pub(crate) haptics: Rc<dyn HapticFeedback>,
}

impl Default for Delegates {
    fn default() -> Self {
        Self {
            listener: None,
            drag_animator: None,
            default_drag_animator: None,
            selection_animator: None,
            toolbar: None,
            haptics: Rc::new(NoopHaptics),
        }
    }
}

pub(crate) struct Interaction<H> {
    pub(crate) host: H,
    pub(crate) config: GestureConfig,
    pub(crate) title: TitleTemplate,
    pub(crate) features: FeatureFlags,
    pub(crate) gate: ScrollGate,
    pub(crate) drag: Option<DragSession>,
    pub(crate) selection: Option<SelectionSet>,
    pub(crate) states: InteractionStates,
    pub(crate) delegates: Delegates,
    /// Set when the drag target vanished mid-gesture; the remaining frames of
    /// that gesture are left to the host.
    gesture_abandoned: bool,
}

impl<H: ListHost> Interaction<H> {
    pub(crate) fn new(
        host: H,
        config: GestureConfig,
        title: TitleTemplate,
        gate: ScrollGate,
        delegates: Delegates,
    ) -> Self {
        Self {
            host,
            config,
            title,
            features: FeatureFlags::NONE,
            gate,
            drag: None,
            selection: None,
            states: InteractionStates::default(),
            delegates,
            gesture_abandoned: false,
        }
    }

    pub(crate) fn drag_animator(&mut self) -> Rc<dyn DragAnimator> {
        if let Some(animator) = &self.delegates.drag_animator {
            return Rc::clone(animator);
        }
        let animator = Rc::new(DefaultDragAnimator::with_return_duration(
            self.config.return_home_duration,
        ));
        log::debug!("installing default drag animator");
        let erased: Rc<dyn DragAnimator> = animator.clone();
        self.delegates.default_drag_animator = Some(animator);
        self.delegates.drag_animator = Some(Rc::clone(&erased));
        erased
    }

    pub(crate) fn selection_animator(&mut self) -> Rc<dyn SelectionAnimator> {
        Rc::clone(
            self.delegates
                .selection_animator
                .get_or_insert_with(default_selection_animator),
        )
    }

    pub(crate) fn toolbar(&mut self) -> Rc<dyn SelectionToolbar> {
        Rc::clone(self.delegates.toolbar.get_or_insert_with(default_toolbar))
    }

    fn ensure_delegates(&mut self, feature: Feature) {
        match feature {
            Feature::ItemDrag => {
                self.drag_animator();
            }
            Feature::MultiSelect => {
                self.selection_animator();
                self.toolbar();
            }
        }
    }

    fn pulse_haptics(&self) {
        if let Err(err) = self.delegates.haptics.pulse() {
            log::debug!("ignoring haptic failure: {err}");
        }
    }

    pub(crate) fn set_feature_enabled(&mut self, feature: Feature, enabled: bool) {
        if enabled {
            if self.features.set(feature, true) {
                log::debug!("enabled {feature:?}");
            }
            self.ensure_delegates(feature);
            return;
        }

        match feature {
            Feature::ItemDrag => {
                if let Some(session) = self.drag.take() {
                    self.gesture_abandoned = true;
                    self.abandon_swipe(session);
                }
            }
            Feature::MultiSelect => self.finish_selection(),
        }
        if self.features.set(feature, false) {
            log::debug!("disabled {feature:?}");
        }
    }

    /// Called for Up/Cancel before the detector sees the event.
    pub(crate) fn end_gesture(&mut self, event: &PointerEvent) {
        let was_swiping = self.gate.end_swipe();
        match self.drag.take() {
            Some(session) => {
                if !was_swiping {
                    log::warn!("drag of {:?} was active with the scroll gate open", session.key());
                }
                self.release_swipe(session);
                event.consume();
            }
            None if was_swiping => {
                log::error!("swipe release intercepted without an active drag");
            }
            None => {}
        }
    }

    fn should_ignore_drag(&self, dx: f32, dy: f32, frame_dx: f32, frame_dy: f32) -> bool {
        if self.selection.is_some() {
            log::trace!("drag ignored: selection mode is open");
            return true;
        }
        if dx.abs() < self.config.touch_slop || self.host.is_animating() {
            return true;
        }
        // Only start when the user clearly means to swipe sideways.
        if frame_dy.abs() * self.config.frame_axis_ratio > frame_dx.abs() {
            log::trace!("drag ignored: frame ({frame_dx}, {frame_dy}) is not horizontal");
            return true;
        }
        // A finger that scrolled and came to rest must not become a drag.
        if dy.abs() > self.config.max_vertical_travel || dx.abs() > self.config.max_commit_travel()
        {
            log::trace!("drag ignored: gesture already travelled ({dx}, {dy})");
            return true;
        }
        false
    }

    /// Only reached with no session recorded: `on_down` releases stale ones
    /// and `on_scroll` keeps tracking an existing one.
    fn begin_swipe(&mut self, item: ItemHandle) -> DragSession {
        debug_assert!(self.drag.is_none(), "swipe started over an active drag");
        log::debug!("swipe started on {:?}", item.key);
        self.states.set(item.key, InteractionState::Swiping);
        if self.gate.begin_swipe() {
            log::warn!("scroll gate was already closed when {:?} started", item.key);
        }
        DragSession::new(item)
    }

    fn track_swipe(&mut self, mut session: DragSession, dx: f32, dy: f32) {
        self.drag_animator()
            .on_drag_transform(session.target(), dx, dy);
        if session.update(dx, dy, self.config.arm_width_divisor) {
            log::trace!(
                "{:?} {} delete threshold",
                session.key(),
                if session.is_armed() { "crossed" } else { "left" }
            );
            self.pulse_haptics();
        }
        self.drag = Some(session);
    }

    fn release_swipe(&mut self, session: DragSession) {
        let item = *session.target();
        let return_home = if session.is_armed() {
            if self.states.get(item.key) != InteractionState::Swiping {
                log::error!("{:?} was never tagged as swiping", item.key);
            }
            match self.delegates.listener.clone() {
                Some(listener) => !listener.on_delete_requested(&item),
                None => true,
            }
        } else {
            true
        };
        log::debug!(
            "swipe released on {:?} (armed: {}, return home: {return_home})",
            item.key,
            session.is_armed()
        );

        self.states.set(item.key, InteractionState::Idle);
        self.gate.end_swipe();
        let animator = self.drag_animator();
        if return_home {
            animator.on_drag_return_home(&item);
        } else {
            animator.on_drag_removed(&item);
        }
    }

    /// Sends the row home without asking the listener anything.
    fn abandon_swipe(&mut self, session: DragSession) {
        let item = *session.target();
        log::debug!("swipe on {:?} abandoned", item.key);
        self.states.set(item.key, InteractionState::Idle);
        self.gate.end_swipe();
        self.drag_animator().on_drag_return_home(&item);
    }

    fn toggle_selection(&mut self, item: &ItemHandle, index: usize) {
        let Some(selection) = self.selection.as_mut() else {
            log::error!("toggle of row {index} outside selection mode");
            return;
        };
        let now_empty = selection.toggle(index);
        let now_selected = selection.is_selected(index);
        let count = selection.count();

        let animator = self.selection_animator();
        if now_selected {
            animator.on_selected(item);
        } else {
            animator.on_deselected(item);
        }

        if now_empty {
            // The set held exactly this row before the toggle.
            self.close_selection(vec![index]);
        } else {
            let title = self.title.format(count);
            self.toolbar().set_title(&title);
        }
    }

    fn close_selection(&mut self, positions: Vec<usize>) {
        self.selection = None;
        self.toolbar().close();
        self.selection_animator().on_selection_reset(&positions);
    }

    /// Ends selection mode from this side: hides the toolbar and resets.
    pub(crate) fn finish_selection(&mut self) {
        if let Some(selection) = self.selection.take() {
            self.close_selection(selection.selected_indices());
        }
    }

    /// The host already dismissed the toolbar; only the state is reset.
    pub(crate) fn reset_selection(&mut self) {
        if let Some(selection) = self.selection.take() {
            let positions = selection.selected_indices();
            self.selection_animator().on_selection_reset(&positions);
        }
    }
}

impl<H: ListHost> GestureListener for Interaction<H> {
    fn on_down(&mut self, _event: &PointerEvent) {
        self.gesture_abandoned = false;
        if let Some(stale) = self.drag.take() {
            log::error!("pointer down with {:?} still swiping; releasing", stale.key());
            self.release_swipe(stale);
        }
    }

    fn on_scroll(
        &mut self,
        down: &PointerEvent,
        current: &PointerEvent,
        distance_x: f32,
        distance_y: f32,
    ) -> bool {
        if !self.features.contains(Feature::ItemDrag) || self.gesture_abandoned {
            return false;
        }

        let dx = current.position.x - down.position.x;
        let dy = current.position.y - down.position.y;

        if let Some(mut session) = self.drag.take() {
            // Stay on the original row even if the finger drifts over a
            // neighbour.
            match self.host.item(session.key()) {
                Some(item) => session.retarget(item),
                None => {
                    log::debug!("drag target {:?} left the list", session.key());
                    self.gesture_abandoned = true;
                    self.abandon_swipe(session);
                    return false;
                }
            }
            self.track_swipe(session, dx, dy);
            current.consume();
            return true;
        }

        let Some(item) = self.host.hit_test(current.position) else {
            log::debug!(
                "no row at ({}, {})",
                current.position.x,
                current.position.y
            );
            return false;
        };
        if self.should_ignore_drag(dx, dy, distance_x, distance_y) {
            return false;
        }

        let session = self.begin_swipe(item);
        self.track_swipe(session, dx, dy);
        current.consume();
        true
    }

    fn on_long_press(&mut self, down: &PointerEvent) {
        if !self.features.contains(Feature::MultiSelect) {
            return;
        }
        let Some(item) = self.host.hit_test(down.position) else {
            return;
        };
        if self.selection.is_some() || self.drag.is_some() {
            return;
        }
        let Some(index) = self.host.index_of(&item) else {
            log::debug!("long-pressed {:?} has no adapter position", item.key);
            return;
        };
        if !self.toolbar().open() {
            log::debug!("selection toolbar refused to open");
            return;
        }

        log::debug!("selection mode started on row {index}");
        self.selection = Some(SelectionSet::new());
        self.toggle_selection(&item, index);
        self.pulse_haptics();
    }

    fn on_single_tap_up(&mut self, up: &PointerEvent) -> bool {
        let Some(item) = self.host.hit_test(up.position) else {
            return false;
        };

        if self.selection.is_none() {
            if let Some(listener) = self.delegates.listener.clone() {
                listener.on_item_activated(&item);
            }
            up.consume();
            return true;
        }

        match self.host.index_of(&item) {
            Some(index) => {
                self.toggle_selection(&item, index);
                up.consume();
                true
            }
            None => false,
        }
    }
}
