pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Exponential approach toward `target`; `rate` is the per-step fraction.
pub(crate) fn approach(current: f64, target: f64, rate: f64) -> f64 {
    current + (target - current) * rate
}
