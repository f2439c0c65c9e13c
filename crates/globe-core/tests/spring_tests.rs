// Settling behavior of the interaction spring.

use globe_core::spring::{Spring, SpringConfig};

const DT: f32 = 1.0 / 60.0;

#[test]
fn spring_starts_at_rest() {
    let s = Spring::new(SpringConfig::default());
    assert_eq!(s.value(), 0.0);
    assert!(s.settled());
}

#[test]
fn spring_converges_to_target_within_precision() {
    let mut s = Spring::new(SpringConfig::default());
    s.set_target(0.2);
    for _ in 0..600 {
        s.step(DT);
    }
    assert!(
        (s.value() - 0.2).abs() < 1e-3,
        "value {} did not settle on 0.2",
        s.value()
    );
}

#[test]
fn spring_snaps_exactly_once_settled() {
    let mut s = Spring::new(SpringConfig::default());
    s.set_target(0.2);
    for _ in 0..600 {
        s.step(DT);
    }
    assert!(s.settled());
    assert_eq!(s.value(), 0.2);
}

#[test]
fn spring_tracks_a_moving_target() {
    let mut s = Spring::new(SpringConfig::default());
    s.set_target(0.5);
    for _ in 0..30 {
        s.step(DT);
    }
    let mid = s.value();
    assert!(mid > 0.0 && mid < 0.6);

    // Redirect mid-flight; it must settle on the new target
    s.set_target(-0.25);
    for _ in 0..600 {
        s.step(DT);
    }
    assert!((s.value() - (-0.25)).abs() < 1e-3);
}

#[test]
fn spring_value_stays_finite_under_long_integration() {
    let mut s = Spring::new(SpringConfig::default());
    s.set_target(1.0);
    for _ in 0..10_000 {
        s.step(DT);
    }
    assert!(s.value().is_finite());
    assert_eq!(s.value(), 1.0);
}

#[test]
fn zero_dt_step_is_a_no_op() {
    let mut s = Spring::new(SpringConfig::default());
    s.set_target(0.3);
    s.step(0.0);
    assert_eq!(s.value(), 0.0);
}
