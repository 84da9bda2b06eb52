use super::*;

#[test]
fn all_curves_fix_the_endpoints() {
    for ease in [Ease::Linear, Ease::OutQuad, Ease::OutCubic] {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?} at 0");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?} at 1");
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::OutCubic.apply(-3.0), 0.0);
    assert_eq!(Ease::OutCubic.apply(7.0), 1.0);
}

#[test]
fn out_curves_front_load_progress() {
    assert!(Ease::OutQuad.apply(0.5) > 0.5);
    assert!(Ease::OutCubic.apply(0.5) > Ease::OutQuad.apply(0.5));
}

#[test]
fn out_curves_never_fall_behind_linear() {
    for i in 0..=20 {
        let t = f64::from(i) / 20.0;
        assert!(Ease::OutQuad.apply(t) >= t);
        assert!(Ease::OutCubic.apply(t) >= Ease::OutQuad.apply(t));
    }
}

#[test]
fn default_is_linear() {
    assert_eq!(Ease::default(), Ease::Linear);
    assert_eq!(Ease::default().apply(0.3), 0.3);
}
