use super::*;
use crate::foundation::core::ScrollSample;

fn sample(scroll_y: f64) -> ScrollSample {
    ScrollSample::new(scroll_y, 1000.0)
}

#[test]
fn unresolved_until_node_reaches_center() {
    let mut latch = AnchorLatch::new();
    // Node center still below the viewport center (y 500).
    assert_eq!(latch.observe(sample(100.0), Some(800.0)), None);
    assert_eq!(latch.resolved(), None);
}

#[test]
fn resolves_to_the_crossing_offset() {
    let mut latch = AnchorLatch::new();
    // Node center 200px above viewport center while scrolled to 3000:
    // the crossing happened at 3000 + (300 - 500) = 2800.
    assert_eq!(latch.observe(sample(3000.0), Some(300.0)), Some(2800.0));
}

#[test]
fn latch_is_write_once() {
    let mut latch = AnchorLatch::new();
    latch.observe(sample(3000.0), Some(500.0));
    let first = latch.resolved().unwrap();

    // Scroll back above the anchor, then far past it again.
    latch.observe(sample(0.0), Some(900.0));
    latch.observe(sample(9000.0), Some(-400.0));
    assert_eq!(latch.resolved(), Some(first));
}

#[test]
fn missing_node_never_latches() {
    let mut latch = AnchorLatch::new();
    for y in [0.0, 500.0, 5000.0, 50_000.0] {
        assert_eq!(latch.observe(sample(y), None), None);
    }
}

#[test]
fn reset_clears_the_latch() {
    let mut latch = AnchorLatch::new();
    latch.observe(sample(1000.0), Some(500.0));
    assert!(latch.resolved().is_some());
    latch.reset();
    assert_eq!(latch.resolved(), None);
}
