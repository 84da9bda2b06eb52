use crate::{foundation::math::lerp, reveal::ease::Ease};

/// Vertical travel of a section while it reveals, in CSS pixels.
pub const REVEAL_TRAVEL_PX: f64 = 50.0;

/// Resolved presentation of one page section for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RevealStyle {
    /// Section opacity in `[0, 1]`.
    pub opacity: f64,
    /// Remaining upward travel in pixels; 0 once fully revealed.
    pub translate_y: f64,
}

impl RevealStyle {
    /// The translation as a kurbo affine, for callers composing transforms.
    pub fn to_affine(self) -> kurbo::Affine {
        kurbo::Affine::translate((0.0, self.translate_y))
    }
}

/// Map a stage's progress to the standard section reveal: opacity tracks
/// progress directly and the block slides up from `REVEAL_TRAVEL_PX` below
/// its resting position.
pub fn reveal_style(progress: f64) -> RevealStyle {
    let p = progress.clamp(0.0, 1.0);
    RevealStyle {
        opacity: p,
        translate_y: lerp(REVEAL_TRAVEL_PX, 0.0, p),
    }
}

/// Eased variant of [`reveal_style`].
pub fn eased_reveal_style(progress: f64, ease: Ease) -> RevealStyle {
    reveal_style(ease.apply(progress))
}

/// Remap progress so the reveal only begins past `start_threshold`.
///
/// Sections that share a stage with a 3D scene use this to hold back their
/// copy until the scene animation is mostly done: 0 until the threshold,
/// then linear to 1 over the remainder.
pub fn delayed_reveal(progress: f64, start_threshold: f64) -> f64 {
    let t = start_threshold.clamp(0.0, 1.0);
    let p = progress.clamp(0.0, 1.0);
    if t >= 1.0 {
        return if p >= 1.0 { 1.0 } else { 0.0 };
    }
    if p <= t {
        return 0.0;
    }
    ((p - t) / (1.0 - t)).min(1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/style.rs"]
mod tests;
