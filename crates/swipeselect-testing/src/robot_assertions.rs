//! Assertion utilities for robot testing

use swipeselect_ui_graphics::Rect;

/// Assert that a value is within an expected range.
///
/// Useful for sampled animation values that land between frames.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle contains a point.
pub fn assert_rect_contains_point(rect: Rect, x: f32, y: f32, msg: &str) {
    assert!(
        x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height,
        "{}: point ({}, {}) not in rect {:?}",
        msg,
        x,
        y,
        rect
    );
}

/// Assert that offsets only grow in magnitude, as a finger moving steadily
/// away from its start produces.
pub fn assert_monotonic_away(offsets: &[f32], msg: &str) {
    for pair in offsets.windows(2) {
        assert!(
            pair[1].abs() >= pair[0].abs(),
            "{}: offsets {:?} move back toward the origin",
            msg,
            offsets
        );
    }
}
