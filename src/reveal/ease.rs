/// Deceleration curves applied on top of a stage's linear progress.
///
/// Sections always ease *out*: motion is fastest as a section enters and
/// settles as it reaches its resting position, matching the page's CSS
/// transitions. In-style curves have no consumer here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Identity; the raw stage progress.
    #[default]
    Linear,
    /// Quadratic deceleration.
    OutQuad,
    /// Cubic deceleration, a sharper settle.
    OutCubic,
}

impl Ease {
    /// Apply the curve to `t`, clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - inv * inv,
            Self::OutCubic => 1.0 - inv * inv * inv,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/ease.rs"]
mod tests;
