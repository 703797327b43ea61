//! Swipe-to-delete and multi-select for scrollable lists.
//!
//! A [`GestureArbiter`] sits between the host list and its pointer stream and
//! decides, frame by frame, whether the user is scrolling, dragging a row
//! sideways, tapping, long-pressing to start a selection, or toggling rows in
//! an open selection. Visual effects and business decisions are delegated to
//! the traits in [`delegates`]; the host list is only queried through
//! [`ListHost`] and told to hold vertical scroll through [`ScrollGate`].

mod arbiter;
pub mod config;
pub mod delegates;
mod drag;
pub mod error;
mod features;
mod host;
mod interaction;
mod item;
mod selection;

pub use arbiter::{ArbiterBuilder, GestureArbiter};
pub use config::{GestureConfig, TitleTemplate};
pub use delegates::{
    DefaultDragAnimator, DefaultSelectionAnimator, DragAnimator, HapticFeedback, ListListener,
    NoopHaptics, NoopToolbar, SelectionAnimator, SelectionToolbar,
};
pub use drag::{DragPhase, DragSession};
pub use error::{ConfigError, HapticError};
pub use features::{Feature, FeatureFlags};
pub use host::{ListHost, ScrollGate};
pub use item::{InteractionState, ItemHandle, ItemKey};
pub use selection::SelectionSet;

pub mod prelude {
    pub use crate::arbiter::{ArbiterBuilder, GestureArbiter};
    pub use crate::delegates::{
        DragAnimator, HapticFeedback, ListListener, SelectionAnimator, SelectionToolbar,
    };
    pub use crate::features::Feature;
    pub use crate::host::{ListHost, ScrollGate};
    pub use crate::item::{InteractionState, ItemHandle, ItemKey};
}
