use super::*;

const FRAME: Duration = Duration::from_nanos(16_666_667);

#[test]
fn linear_easing_is_identity_and_clamped() {
    assert_eq!(Easing::Linear.transform(0.25), 0.25);
    assert_eq!(Easing::Linear.transform(-1.0), 0.0);
    assert_eq!(Easing::Linear.transform(2.0), 1.0);
}

#[test]
fn higher_tension_overshoots_further() {
    let peak = |easing: Easing| {
        (1..100)
            .map(|step| easing.transform(step as f32 / 100.0))
            .fold(f32::MIN, f32::max)
    };
    let soft = peak(Easing::Overshoot { tension: 1.0 });
    let stiff = peak(Easing::Overshoot { tension: 4.0 });
    assert!(stiff > soft, "soft {soft}, stiff {stiff}");
}

#[test]
fn overshoot_passes_target_then_settles() {
    let easing = Easing::DEFAULT_OVERSHOOT;
    assert!(easing.transform(0.0).abs() < 1e-6);
    assert!((easing.transform(1.0) - 1.0).abs() < 1e-6);

    let peak = (1..100)
        .map(|step| easing.transform(step as f32 / 100.0))
        .fold(f32::MIN, f32::max);
    assert!(peak > 1.0, "overshoot never passed target: {peak}");
}

#[test]
fn fraction_honours_delay() {
    let spec = AnimationSpec::linear(Duration::from_millis(100)).with_delay(Duration::from_millis(50));
    assert_eq!(spec.fraction(Duration::from_millis(20)), 0.0);
    assert!((spec.fraction(Duration::from_millis(100)) - 0.5).abs() < 1e-6);
    assert_eq!(spec.fraction(Duration::from_millis(400)), 1.0);
}

#[test]
fn zero_duration_finishes_immediately() {
    let mut tween = TweenAnimation::new(10.0f32, 0.0, AnimationSpec::linear(Duration::ZERO));
    assert_eq!(tween.value_at(Duration::from_secs(3)), 0.0);
    assert!(tween.is_finished_at(Duration::from_secs(3)));
}

#[test]
fn tween_starts_on_first_sample() {
    let mut tween = TweenAnimation::new(40.0f32, 0.0, AnimationSpec::linear(Duration::from_millis(100)));
    assert!(!tween.is_started());
    assert!(!tween.is_finished_at(Duration::from_secs(10)));

    let start = Duration::from_secs(10);
    assert_eq!(tween.value_at(start), 40.0);
    assert!(tween.is_started());

    let halfway = tween.value_at(start + Duration::from_millis(50));
    assert!((halfway - 20.0).abs() < 1e-3, "halfway = {halfway}");

    assert_eq!(tween.value_at(start + Duration::from_millis(100)), 0.0);
    assert!(tween.is_finished_at(start + Duration::from_millis(100)));
}

#[test]
fn overshoot_tween_crosses_home_before_settling() {
    let spec = AnimationSpec::overshoot(Duration::from_millis(250));
    let mut tween = TweenAnimation::new(30.0f32, 0.0, spec);
    let start = Duration::ZERO;
    let mut samples = Vec::new();
    let mut now = start;
    while !tween.is_finished_at(now) {
        samples.push(tween.value_at(now));
        now += FRAME;
    }

    assert_eq!(samples[0], 30.0);
    assert!(samples.iter().any(|value| *value < 0.0), "never crossed home: {samples:?}");
    assert_eq!(tween.value_at(now), 0.0);
}
