//! Testing utilities and harness for swipeselect

pub mod host;
pub mod recording;
pub mod robot;
pub mod robot_assertions;

pub use host::FakeListHost;
pub use recording::{Call, RecordingDelegates};
pub use robot::GestureRobot;

pub mod prelude {
    pub use crate::host::FakeListHost;
    pub use crate::recording::{Call, RecordingDelegates};
    pub use crate::robot::GestureRobot;
    pub use crate::robot_assertions;
}
