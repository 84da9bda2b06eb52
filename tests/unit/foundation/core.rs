use super::*;

#[test]
fn sample_keeps_finite_readings() {
    let s = ScrollSample::new(1200.0, 900.0);
    assert_eq!(s.scroll_y, 1200.0);
    assert_eq!(s.viewport_height, 900.0);
    assert_eq!(s.viewport_center(), 450.0);
}

#[test]
fn sample_zeroes_degenerate_readings() {
    let s = ScrollSample::new(f64::NAN, f64::INFINITY);
    assert_eq!(s.scroll_y, 0.0);
    assert_eq!(s.viewport_height, 0.0);

    let s = ScrollSample::new(100.0, -50.0);
    assert_eq!(s.viewport_height, 0.0);
}

#[test]
fn unanchored_input_has_no_observation() {
    let input = FrameInput::unanchored(ScrollSample::new(0.0, 1000.0));
    assert!(input.anchor_center_y.is_none());
}
