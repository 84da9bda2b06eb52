use super::*;

fn window(start: f64, range: f64) -> StageWindow {
    StageWindow::new("s", StageStart::Fixed(start), range).unwrap()
}

#[test]
fn progress_is_zero_below_start() {
    let w = window(900.0, 800.0);
    assert_eq!(w.progress(0.0), 0.0);
    assert_eq!(w.progress(899.999), 0.0);
    // Exactly zero, never negative.
    assert_eq!(w.progress(-5000.0), 0.0);
}

#[test]
fn progress_is_one_at_and_past_end() {
    let w = window(900.0, 800.0);
    assert_eq!(w.progress(1700.0), 1.0);
    assert_eq!(w.progress(100_000.0), 1.0);
}

#[test]
fn progress_interpolates_linearly_inside_the_window() {
    let w = window(900.0, 800.0);
    assert_eq!(w.progress(900.0), 0.0);
    assert_eq!(w.progress(1300.0), 0.5);
    assert_eq!(w.progress(1500.0), 0.75);
}

#[test]
fn progress_is_monotonic_in_scroll_y() {
    let w = window(250.0, 640.0);
    let mut last = -1.0;
    for i in 0..200 {
        let p = w.progress(i as f64 * 10.0);
        assert!(p >= last, "progress regressed at i={i}");
        last = p;
    }
}

#[test]
fn progress_is_idempotent() {
    let w = window(100.0, 300.0);
    assert_eq!(w.progress(250.0), w.progress(250.0));
}

#[test]
fn pending_start_pins_progress_to_zero() {
    let w = StageWindow::new("anchor", StageStart::Pending, 800.0).unwrap();
    assert_eq!(w.progress(0.0), 0.0);
    assert_eq!(w.progress(1e9), 0.0);
    assert!(w.end().is_none());
}

#[test]
fn degenerate_range_is_rejected_at_construction() {
    assert!(StageWindow::new("s", StageStart::Fixed(0.0), 0.0).is_err());
    assert!(StageWindow::new("s", StageStart::Fixed(0.0), -1.0).is_err());
    assert!(StageWindow::new("s", StageStart::Fixed(0.0), f64::NAN).is_err());
    assert!(StageWindow::new("", StageStart::Fixed(0.0), 1.0).is_err());
    assert!(StageWindow::new("s", StageStart::Fixed(f64::INFINITY), 1.0).is_err());
}

#[test]
fn end_is_start_plus_range() {
    assert_eq!(window(900.0, 800.0).end(), Some(1700.0));
}
