//! Properties that must hold over many gesture shapes.

use std::rc::Rc;
use std::time::Duration;
use swipeselect_list::{
    ConfigError, DragPhase, Feature, GestureArbiter, GestureConfig, InteractionState, ItemKey,
    ScrollGate,
};
use swipeselect_testing::prelude::*;

fn robot_with(
    features: &[Feature],
) -> (Rc<FakeListHost>, Rc<RecordingDelegates>, GestureRobot<Rc<FakeListHost>>) {
    let host = Rc::new(FakeListHost::new(8, 90.0, 40.0));
    let delegates = RecordingDelegates::new();
    let mut builder = delegates.install(GestureArbiter::builder(Rc::clone(&host)));
    for feature in features {
        builder = builder.feature(*feature, true);
    }
    let arbiter = builder.build().expect("valid configuration");
    (host, delegates, GestureRobot::new(arbiter))
}

fn is_drag_call(call: &Call) -> bool {
    matches!(
        call,
        Call::DragTransform { .. } | Call::ReturnHome(_) | Call::DeleteRequested(_)
    )
}

#[test]
fn mostly_vertical_motion_never_starts_a_drag() {
    let (host, delegates, mut robot) = robot_with(&[Feature::ItemDrag]);

    for step_x in [0.0, 0.5, 1.0, 1.5, -1.5] {
        for step_y in [9.0, 12.0, -10.0, 15.0] {
            robot.press(host.row_center(4));
            for _ in 0..6 {
                assert!(!robot.move_by(step_x, step_y));
                assert!(robot.arbiter().scroll_gate().can_scroll_vertically());
            }
            robot.release();
        }
    }

    assert_eq!(delegates.count(is_drag_call), 0);
    assert_eq!(robot.arbiter().drag_phase(), DragPhase::Idle);
}

#[test]
fn at_most_one_row_swipes_at_a_time() {
    let (host, _delegates, mut robot) = robot_with(&[Feature::ItemDrag, Feature::MultiSelect]);
    let swiping = |robot: &GestureRobot<Rc<FakeListHost>>| {
        robot.arbiter().rows_in_state(InteractionState::Swiping)
    };

    for row in 0..6 {
        robot.press(host.row_center(row));
        assert!(swiping(&robot) <= 1);
        for dx in [12.0, 18.0, 25.0] {
            robot.drag_through(&[dx]);
            assert_eq!(swiping(&robot), 1);
        }
        // Every other gesture loses its release.
        if row % 2 == 0 {
            robot.release();
            assert_eq!(swiping(&robot), 0);
        }
    }
    robot.release();

    assert_eq!(swiping(&robot), 0);
    assert_eq!(robot.arbiter().rows_in_state(InteractionState::Holding), 0);
}

#[test]
fn haptics_pulse_once_per_threshold_crossing() {
    let (host, delegates, mut robot) = robot_with(&[Feature::ItemDrag]);

    robot.press(host.row_center(0));
    robot.drag_through(&[12.0, 18.0, 22.0, 30.0, 19.0, 15.0, 21.0, 25.0]);
    robot.release();

    assert_eq!(delegates.count_of(&Call::HapticPulse), 3);
}

#[test]
fn swipe_blocks_the_shared_scroll_gate_until_release() {
    let host = Rc::new(FakeListHost::new(4, 90.0, 40.0));
    let gate = ScrollGate::new();
    let arbiter = GestureArbiter::builder(Rc::clone(&host))
        .scroll_gate(gate.clone())
        .feature(Feature::ItemDrag, true)
        .build()
        .expect("valid configuration");
    let mut robot = GestureRobot::new(arbiter);

    robot.press(host.row_center(1));
    assert!(gate.can_scroll_vertically());
    robot.drag_through(&[12.0]);
    assert!(gate.is_swiping());
    assert!(!gate.can_scroll_vertically());
    robot.drag_through(&[12.0, 20.0]);
    assert!(!gate.can_scroll_vertically());
    robot.release();
    assert!(gate.can_scroll_vertically());
}

#[test]
fn disabled_features_leave_the_stream_to_the_host() {
    let (host, delegates, mut robot) = robot_with(&[]);

    assert!(!robot.swipe(host.row_center(1), 30.0, 0.0, 5));
    robot.long_press(host.row_center(2));
    assert!(!robot.arbiter().is_selecting());
    assert!(robot.tap(host.row_center(3)));

    assert_eq!(delegates.calls(), vec![Call::ItemActivated(ItemKey(3))]);
}

#[test]
fn toggling_features_at_runtime() {
    let (host, delegates, mut robot) = robot_with(&[]);

    robot.arbiter_mut().set_feature_enabled(Feature::ItemDrag, true);
    robot.press(host.row_center(0));
    assert_eq!(robot.drag_through(&[12.0, 25.0]), 2);
    robot.arbiter_mut().set_feature_enabled(Feature::ItemDrag, false);
    assert!(!robot.release());

    assert_eq!(delegates.count_of(&Call::ReturnHome(ItemKey(0))), 1);
    assert_eq!(delegates.count(|call| matches!(call, Call::DeleteRequested(_))), 0);
    assert!(!robot.arbiter().is_feature_enabled(Feature::ItemDrag));
}

#[test]
fn item_animation_blocks_new_drags_only() {
    let (host, delegates, mut robot) = robot_with(&[Feature::ItemDrag]);

    host.set_animating(true);
    robot.press(host.row_center(0));
    assert_eq!(robot.drag_through(&[12.0, 18.0]), 0);
    robot.release();

    host.set_animating(false);
    robot.press(host.row_center(0));
    robot.drag_through(&[12.0]);
    host.set_animating(true);
    assert_eq!(robot.drag_through(&[18.0, 24.0]), 2);
    robot.release();

    assert_eq!(delegates.transforms_of(ItemKey(0)), vec![12.0, 18.0, 24.0]);
}

#[test]
fn builder_validates_configuration() {
    let host = Rc::new(FakeListHost::new(1, 90.0, 40.0));

    let result = GestureArbiter::builder(Rc::clone(&host))
        .config(GestureConfig::default().with_long_press_timeout(Duration::ZERO))
        .build();
    assert!(matches!(result, Err(ConfigError::ZeroLongPressTimeout)));

    let result = GestureArbiter::builder(Rc::clone(&host))
        .title_template("{total} rows")
        .build();
    assert!(matches!(result, Err(ConfigError::UnknownPlaceholder { .. })));

    let config = GestureConfig::default()
        .with_touch_slop(4.0)
        .with_long_press_timeout(Duration::from_millis(300));
    let arbiter = GestureArbiter::builder(host)
        .config(config)
        .build()
        .expect("valid configuration");
    assert_eq!(arbiter.config().long_press_timeout, Duration::from_millis(300));
    assert_eq!(arbiter.config().max_commit_travel(), 20.0);
}

#[test]
fn custom_long_press_timeout_is_honoured() {
    let host = Rc::new(FakeListHost::new(3, 90.0, 40.0));
    let arbiter = GestureArbiter::builder(Rc::clone(&host))
        .config(GestureConfig::default().with_long_press_timeout(Duration::from_millis(300)))
        .feature(Feature::MultiSelect, true)
        .build()
        .expect("valid configuration");
    let mut robot = GestureRobot::new(arbiter);

    robot.press(host.row_center(1));
    assert!(robot.advance(Duration::from_millis(300)));
    robot.release();
    assert_eq!(robot.arbiter().selected_indices(), vec![1]);
}
