pub mod detector;

pub use detector::{GestureDetector, GestureListener};
