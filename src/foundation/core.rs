/// One raw reading of the viewport, taken at most once per animation frame.
///
/// `scroll_y` and `viewport_height` share one coordinate space (CSS pixels
/// from the document top / viewport top). Samples are ephemeral: every
/// derived quantity is recomputed from the current sample.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollSample {
    /// Absolute scroll offset of the viewport top.
    pub scroll_y: f64,
    /// Current viewport height; changes on resize/orientation-change.
    pub viewport_height: f64,
}

impl ScrollSample {
    /// Build a sample, replacing non-finite or negative-height readings
    /// with zeros so downstream progress degrades to 0 instead of NaN.
    pub fn new(scroll_y: f64, viewport_height: f64) -> Self {
        let scroll_y = if scroll_y.is_finite() { scroll_y } else { 0.0 };
        let viewport_height = if viewport_height.is_finite() && viewport_height > 0.0 {
            viewport_height
        } else {
            0.0
        };
        Self {
            scroll_y,
            viewport_height,
        }
    }

    /// Vertical center of the viewport, in viewport coordinates.
    pub fn viewport_center(self) -> f64 {
        self.viewport_height / 2.0
    }
}

/// Everything the sequencer needs for one frame of evaluation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameInput {
    /// The raw viewport reading for this frame.
    pub scroll: ScrollSample,
    /// Vertical center of the registered anchor node in viewport
    /// coordinates, or `None` while the node is not mounted.
    pub anchor_center_y: Option<f64>,
}

impl FrameInput {
    /// A frame input with no anchor observation.
    pub fn unanchored(scroll: ScrollSample) -> Self {
        Self {
            scroll,
            anchor_center_y: None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
