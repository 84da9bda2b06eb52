use crate::{
    foundation::core::FrameInput,
    sequence::chain::{ProgressMap, ScrollSequencer},
};

/// Source of per-frame viewport readings.
///
/// The browser-embedded implementation reads `window.scrollY`,
/// `window.innerHeight` and the registered anchor node's bounding box;
/// tests and the offline tracer provide scripted sources. Returning `None`
/// models a non-interactive context: the frame is skipped and every stage
/// stays at progress 0.
pub trait ScrollSource {
    /// Produce this frame's input, if the viewport is readable.
    fn frame(&mut self) -> Option<FrameInput>;
}

impl<F> ScrollSource for F
where
    F: FnMut() -> Option<FrameInput>,
{
    fn frame(&mut self) -> Option<FrameInput> {
        self()
    }
}

/// Coalesces raw scroll events into at most one sequencer evaluation per
/// animation frame.
///
/// The browser can deliver many `scroll` events between two rendered
/// frames; a single dirty flag ensures the chain is recomputed once per
/// frame regardless. `prime` covers the mount-time evaluation that happens
/// before any scroll event.
#[derive(Debug)]
pub struct FrameSampler<S: ScrollSource> {
    source: S,
    sequencer: ScrollSequencer,
    dirty: bool,
    frames_evaluated: u64,
}

impl<S: ScrollSource> FrameSampler<S> {
    /// Build a sampler over `source` driving `sequencer`.
    pub fn new(source: S, sequencer: ScrollSequencer) -> Self {
        Self {
            source,
            sequencer,
            dirty: false,
            frames_evaluated: 0,
        }
    }

    /// Record that at least one scroll event arrived since the last frame.
    pub fn notify_scroll(&mut self) {
        self.dirty = true;
    }

    /// Force an evaluation on the next frame (mount-time initial read).
    pub fn prime(&mut self) {
        self.dirty = true;
    }

    /// Run one animation-frame callback.
    ///
    /// Returns the fresh progress map if an evaluation ran, or `None` when
    /// no scroll event arrived (nothing to recompute) or the source is
    /// unavailable this frame.
    pub fn animation_frame(&mut self) -> Option<ProgressMap> {
        if !std::mem::take(&mut self.dirty) {
            return None;
        }
        let Some(input) = self.source.frame() else {
            return None;
        };
        self.frames_evaluated += 1;
        Some(self.sequencer.sample(input))
    }

    /// How many full evaluations have run (diagnostics/tests).
    pub fn frames_evaluated(&self) -> u64 {
        self.frames_evaluated
    }

    /// The underlying sequencer.
    pub fn sequencer(&self) -> &ScrollSequencer {
        &self.sequencer
    }

    /// Reset the sequencer to its mount state (component remount).
    pub fn reset(&mut self) {
        self.sequencer.reset();
        self.dirty = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/sampler.rs"]
mod tests;
