//! Animation primitives for swipeselect

mod animation;

pub use animation::*;

pub mod prelude {
    pub use crate::animation::{AnimationSpec, Easing, Lerp, TweenAnimation};
}
