use super::*;

#[test]
fn auto_rotate_is_proportional_to_delta() {
    assert_eq!(auto_rotate_delta(1.0), AUTO_ROTATE_RATE);
    assert_eq!(auto_rotate_delta(0.0), 0.0);
    assert!((auto_rotate_delta(1.0 / 60.0) - 0.15 / 60.0).abs() < 1e-12);
}

#[test]
fn follow_moves_a_fraction_per_step() {
    let mut f = SmoothFollow::new(0.0);
    assert_eq!(f.step(1.0), 0.05);
    assert!((f.step(1.0) - 0.0975).abs() < 1e-12);
}

#[test]
fn follow_settles_exactly_on_the_target() {
    let mut f = SmoothFollow::new(0.0);
    for _ in 0..500 {
        f.step(1.0);
    }
    assert_eq!(f.value(), 1.0);
}

#[test]
fn follow_tracks_a_reversing_target() {
    let mut f = SmoothFollow::new(0.0);
    for _ in 0..50 {
        f.step(1.0);
    }
    let peak = f.value();
    f.step(0.0);
    assert!(f.value() < peak);
}

#[test]
fn snap_jumps_immediately() {
    let mut f = SmoothFollow::new(0.0);
    f.snap(0.8);
    assert_eq!(f.value(), 0.8);
}
