use crate::foundation::core::ScrollSample;

/// Write-once latch for the anchor stage's start offset.
///
/// The anchor stage does not start at a fixed pixel offset; it starts when
/// the registered page element's vertical center reaches the viewport's
/// vertical center. On the first frame that condition holds, the absolute
/// scroll offset of the crossing is computed and held for the rest of the
/// page lifetime. Scrolling back up (or past again) never re-latches.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnchorLatch {
    resolved: Option<f64>,
}

impl AnchorLatch {
    /// A fresh, unresolved latch.
    pub fn new() -> Self {
        Self::default()
    }

    /// The latched absolute scroll offset, if resolved.
    pub fn resolved(&self) -> Option<f64> {
        self.resolved
    }

    /// Feed one frame's observation of the anchor node.
    ///
    /// `node_center_y` is the node's vertical center in viewport
    /// coordinates; `None` means the node is not mounted this frame, which
    /// leaves the latch untouched. Returns the resolved offset, if any.
    pub fn observe(&mut self, sample: ScrollSample, node_center_y: Option<f64>) -> Option<f64> {
        if self.resolved.is_some() {
            return self.resolved;
        }
        let node_center_y = node_center_y?;
        let viewport_center = sample.viewport_center();
        if node_center_y <= viewport_center {
            // The node center sits at `scroll_y + node_center_y` in document
            // space; the crossing happened where the two centers coincide.
            self.resolved = Some(sample.scroll_y + (node_center_y - viewport_center));
        }
        self.resolved
    }

    /// Clear the latch. Used only on full sequencer reset (remount).
    pub fn reset(&mut self) {
        self.resolved = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/anchor.rs"]
mod tests;
