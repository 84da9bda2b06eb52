use crate::foundation::error::{AsthesisError, AsthesisResult};

/// Where a stage window begins on the scroll axis.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum StageStart {
    /// Absolute scroll offset at which the stage's progress leaves 0.
    Fixed(f64),
    /// The start is not known yet (anchor not latched, or chained after an
    /// unlatched anchor). A pending stage reports progress 0 unconditionally.
    Pending,
}

/// One named animation stage: progress runs 0 → 1 over `range` scroll
/// pixels starting at `start`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StageWindow {
    /// Stage name; unique within a chain.
    pub name: String,
    /// Resolved start of the window.
    pub start: StageStart,
    /// Scroll distance over which progress goes 0 → 1. Always `> 0`.
    pub range: f64,
}

impl StageWindow {
    /// Build a window, rejecting degenerate ranges up front so progress
    /// evaluation never has to guard a division.
    pub fn new(name: impl Into<String>, start: StageStart, range: f64) -> AsthesisResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(AsthesisError::validation("stage name must be non-empty"));
        }
        if !range.is_finite() || range <= 0.0 {
            return Err(AsthesisError::validation(format!(
                "stage '{name}' range must be finite and > 0, got {range}"
            )));
        }
        if let StageStart::Fixed(s) = start
            && !s.is_finite()
        {
            return Err(AsthesisError::validation(format!(
                "stage '{name}' start must be finite, got {s}"
            )));
        }
        Ok(Self { name, start, range })
    }

    /// Progress of this stage at `scroll_y`, clamped to `[0, 1]`.
    ///
    /// Pure: identical inputs always produce identical output. A pending
    /// start reports exactly `0.0` without attempting the subtraction.
    pub fn progress(&self, scroll_y: f64) -> f64 {
        let StageStart::Fixed(start) = self.start else {
            return 0.0;
        };
        if scroll_y < start {
            return 0.0;
        }
        ((scroll_y - start) / self.range).clamp(0.0, 1.0)
    }

    /// Scroll offset at which this stage reaches progress 1, if resolved.
    pub fn end(&self) -> Option<f64> {
        match self.start {
            StageStart::Fixed(start) => Some(start + self.range),
            StageStart::Pending => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/window.rs"]
mod tests;
