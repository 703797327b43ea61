//! The public entry point: one arbiter per list.

use crate::config::{GestureConfig, TitleTemplate};
use crate::delegates::{
    DefaultDragAnimator, DragAnimator, HapticFeedback, ListListener, SelectionAnimator,
    SelectionToolbar,
};
use crate::drag::{DragPhase, DragSession};
use crate::error::ConfigError;
use crate::features::{Feature, FeatureFlags};
use crate::host::{ListHost, ScrollGate};
use crate::interaction::{Delegates, Interaction};
use crate::item::{InteractionState, ItemKey};
use crate::selection::SelectionSet;
use std::rc::Rc;
use std::time::Duration;
use swipeselect_foundation::{GestureDetector, PointerEvent};

/// Interprets a list's pointer stream as scroll, row drag, tap, long-press
/// or selection toggle.
///
/// The host forwards every pointer event through
/// [`GestureArbiter::on_pointer_event`] before its own scroll handling and
/// calls [`GestureArbiter::poll`] once per frame so long-presses fire while
/// the finger rests. A consumed event belongs to the arbiter; anything else
/// is the host's to scroll with, unless [`ScrollGate`] says a row is being
/// swiped.
///
/// ```
/// use std::time::Duration;
/// use swipeselect_list::{Feature, GestureArbiter, ItemHandle, ItemKey, ListHost};
/// use swipeselect_foundation::{Point, PointerEvent, Rect};
///
/// struct OneRow;
///
/// impl ListHost for OneRow {
///     fn hit_test(&self, point: Point) -> Option<ItemHandle> {
///         self.item(ItemKey(0)).filter(|row| row.bounds.contains(point))
///     }
///     fn index_of(&self, _item: &ItemHandle) -> Option<usize> {
///         Some(0)
///     }
///     fn item(&self, key: ItemKey) -> Option<ItemHandle> {
///         Some(ItemHandle::new(key, Rect::new(0.0, 0.0, 90.0, 40.0)))
///     }
///     fn is_animating(&self) -> bool {
///         false
///     }
/// }
///
/// let mut arbiter = GestureArbiter::new(OneRow);
/// arbiter.set_feature_enabled(Feature::MultiSelect, true);
///
/// let at = Point::new(45.0, 20.0);
/// arbiter.on_pointer_event(&PointerEvent::down(at, Duration::ZERO));
/// arbiter.poll(Duration::from_millis(600));
/// assert_eq!(arbiter.selected_indices(), vec![0]);
/// ```
pub struct GestureArbiter<H> {
    detector: GestureDetector,
    interaction: Interaction<H>,
}

impl<H: ListHost> GestureArbiter<H> {
    /// Arbiter with default thresholds and both features disabled.
    pub fn new(host: H) -> Self {
        let config = GestureConfig::default();
        Self {
            detector: GestureDetector::new(config.touch_slop, config.long_press_timeout),
            interaction: Interaction::new(
                host,
                config,
                TitleTemplate::default(),
                ScrollGate::new(),
                Delegates::default(),
            ),
        }
    }

    pub fn builder(host: H) -> ArbiterBuilder<H> {
        ArbiterBuilder::new(host)
    }

    /// Feeds one pointer event. Returns true when the arbiter consumed it.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        if event.kind.ends_gesture() {
            self.interaction.end_gesture(event);
        }
        self.detector.on_pointer_event(event, &mut self.interaction);
        event.is_consumed()
    }

    /// Advances gesture timers to frame time `now`. Returns true when a
    /// long-press fired.
    pub fn poll(&mut self, now: Duration) -> bool {
        self.detector.poll(now, &mut self.interaction)
    }

    pub fn drag_phase(&self) -> DragPhase {
        if self.interaction.drag.is_some() {
            DragPhase::Swiping
        } else if self.detector.is_pressed() {
            DragPhase::Arbitrating
        } else {
            DragPhase::Idle
        }
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.interaction.drag.as_ref()
    }

    pub fn interaction_state(&self, key: ItemKey) -> InteractionState {
        self.interaction.states.get(key)
    }

    /// Number of rows currently tagged `state`.
    pub fn rows_in_state(&self, state: InteractionState) -> usize {
        self.interaction.states.count(state)
    }

    pub fn scroll_gate(&self) -> ScrollGate {
        self.interaction.gate.clone()
    }

    pub fn is_selecting(&self) -> bool {
        self.interaction.selection.is_some()
    }

    pub fn selection(&self) -> Option<&SelectionSet> {
        self.interaction.selection.as_ref()
    }

    /// Selected indices, ascending. Empty outside selection mode.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.interaction
            .selection
            .as_ref()
            .map(SelectionSet::selected_indices)
            .unwrap_or_default()
    }

    /// The host dismissed the selection toolbar: clear the selection and
    /// notify the selection animator with what was selected.
    pub fn reset_selection(&mut self) {
        self.interaction.reset_selection();
    }

    /// Leaves selection mode, closing the toolbar.
    pub fn finish_selection(&mut self) {
        self.interaction.finish_selection();
    }

    pub fn is_feature_enabled(&self, feature: Feature) -> bool {
        self.interaction.features.contains(feature)
    }

    /// Enabling installs default delegates where none are set. Disabling
    /// item drag sends an in-flight row home; disabling multi-select ends
    /// selection mode.
    pub fn set_feature_enabled(&mut self, feature: Feature, enabled: bool) {
        self.interaction.set_feature_enabled(feature, enabled);
    }

    pub fn config(&self) -> &GestureConfig {
        &self.interaction.config
    }

    pub fn title_template(&self) -> &TitleTemplate {
        &self.interaction.title
    }

    pub fn set_title_template(&mut self, template: &str) -> Result<(), ConfigError> {
        self.interaction.title = TitleTemplate::parse(template)?;
        Ok(())
    }

    pub fn set_listener(&mut self, listener: Rc<dyn ListListener>) {
        self.interaction.delegates.listener = Some(listener);
    }

    pub fn clear_listener(&mut self) {
        self.interaction.delegates.listener = None;
    }

    pub fn drag_animator(&self) -> Option<Rc<dyn DragAnimator>> {
        self.interaction.delegates.drag_animator.clone()
    }

    /// The animator the arbiter installed itself, if it is the one in use.
    /// Rendering code reads row offsets from it.
    pub fn default_drag_animator(&self) -> Option<Rc<DefaultDragAnimator>> {
        self.interaction.delegates.default_drag_animator.clone()
    }

    /// Does not change whether dragging is enabled.
    pub fn set_drag_animator(&mut self, animator: Rc<dyn DragAnimator>) {
        self.interaction.delegates.default_drag_animator = None;
        self.interaction.delegates.drag_animator = Some(animator);
    }

    /// Reverts to the default drag animator.
    pub fn reset_drag_animator(&mut self) {
        self.interaction.delegates.default_drag_animator = None;
        self.interaction.delegates.drag_animator = None;
        self.interaction.drag_animator();
    }

    pub fn selection_animator(&self) -> Option<Rc<dyn SelectionAnimator>> {
        self.interaction.delegates.selection_animator.clone()
    }

    /// Does not change whether multi-select is enabled.
    pub fn set_selection_animator(&mut self, animator: Rc<dyn SelectionAnimator>) {
        self.interaction.delegates.selection_animator = Some(animator);
    }

    /// Reverts to the default selection animator.
    pub fn reset_selection_animator(&mut self) {
        self.interaction.delegates.selection_animator = None;
        self.interaction.selection_animator();
    }

    pub fn set_toolbar(&mut self, toolbar: Rc<dyn SelectionToolbar>) {
        self.interaction.delegates.toolbar = Some(toolbar);
    }

    pub fn set_haptics(&mut self, haptics: Rc<dyn HapticFeedback>) {
        self.interaction.delegates.haptics = haptics;
    }

    pub fn host(&self) -> &H {
        &self.interaction.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.interaction.host
    }
}

/// Configures a [`GestureArbiter`]; validation happens in
/// [`ArbiterBuilder::build`].
pub struct ArbiterBuilder<H> {
    host: H,
    config: GestureConfig,
    title: Option<String>,
    features: FeatureFlags,
    gate: Option<ScrollGate>,
    delegates: Delegates,
}

impl<H: ListHost> ArbiterBuilder<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            config: GestureConfig::default(),
            title: None,
            features: FeatureFlags::NONE,
            gate: None,
            delegates: Delegates::default(),
        }
    }

    pub fn config(mut self, config: GestureConfig) -> Self {
        self.config = config;
        self
    }

    pub fn feature(mut self, feature: Feature, enabled: bool) -> Self {
        self.features.set(feature, enabled);
        self
    }

    pub fn title_template(mut self, template: impl Into<String>) -> Self {
        self.title = Some(template.into());
        self
    }

    /// Shares an existing gate with the host's layout code. Without one the
    /// arbiter creates its own; fetch it with [`GestureArbiter::scroll_gate`].
    pub fn scroll_gate(mut self, gate: ScrollGate) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn listener(mut self, listener: Rc<dyn ListListener>) -> Self {
        self.delegates.listener = Some(listener);
        self
    }

    pub fn drag_animator(mut self, animator: Rc<dyn DragAnimator>) -> Self {
        self.delegates.drag_animator = Some(animator);
        self
    }

    pub fn selection_animator(mut self, animator: Rc<dyn SelectionAnimator>) -> Self {
        self.delegates.selection_animator = Some(animator);
        self
    }

    pub fn toolbar(mut self, toolbar: Rc<dyn SelectionToolbar>) -> Self {
        self.delegates.toolbar = Some(toolbar);
        self
    }

    pub fn haptics(mut self, haptics: Rc<dyn HapticFeedback>) -> Self {
        self.delegates.haptics = haptics;
        self
    }

    pub fn build(self) -> Result<GestureArbiter<H>, ConfigError> {
        self.config.validate()?;
        let title = match self.title {
            Some(template) => TitleTemplate::parse(&template)?,
            None => TitleTemplate::default(),
        };

        let mut interaction = Interaction::new(
            self.host,
            self.config,
            title,
            self.gate.unwrap_or_default(),
            self.delegates,
        );
        for feature in Feature::ALL {
            if self.features.contains(feature) {
                interaction.set_feature_enabled(feature, true);
            }
        }

        Ok(GestureArbiter {
            detector: GestureDetector::new(self.config.touch_slop, self.config.long_press_timeout),
            interaction,
        })
    }
}

#[cfg(test)]
#[path = "tests/arbiter_tests.rs"]
mod tests;
