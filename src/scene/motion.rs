use crate::foundation::math::approach;

/// Idle spin applied to the device group, in radians per second.
pub const AUTO_ROTATE_RATE: f64 = 0.15;

/// Yaw increment for one frame of auto-rotation.
pub fn auto_rotate_delta(delta_secs: f64) -> f64 {
    delta_secs * AUTO_ROTATE_RATE
}

/// Frame-by-frame exponential approach toward a moving target.
///
/// Used to ease the explode distance between its current and target values
/// so toggling the exploded view animates instead of snapping. Settles
/// exactly on the target once within `EPSILON`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothFollow {
    current: f64,
    rate: f64,
}

impl SmoothFollow {
    const EPSILON: f64 = 1e-3;

    /// Default per-frame approach fraction.
    pub const DEFAULT_RATE: f64 = 0.05;

    /// Start at `initial` with the default rate.
    pub fn new(initial: f64) -> Self {
        Self::with_rate(initial, Self::DEFAULT_RATE)
    }

    /// Start at `initial` with an explicit per-frame rate in `(0, 1]`.
    pub fn with_rate(initial: f64, rate: f64) -> Self {
        Self {
            current: initial,
            rate: rate.clamp(f64::MIN_POSITIVE, 1.0),
        }
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.current
    }

    /// Advance one frame toward `target`; returns the new value.
    pub fn step(&mut self, target: f64) -> f64 {
        if (self.current - target).abs() <= Self::EPSILON {
            self.current = target;
        } else {
            self.current = approach(self.current, target, self.rate);
        }
        self.current
    }

    /// Jump straight to `target` (non-animated mode).
    pub fn snap(&mut self, target: f64) {
        self.current = target;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/motion.rs"]
mod tests;
