use crate::{
    foundation::core::{FrameInput, ScrollSample},
    foundation::error::{AsthesisError, AsthesisResult},
    sequence::anchor::AnchorLatch,
    sequence::window::{StageStart, StageWindow},
};

fn default_delay_factor() -> f64 {
    0.10
}

/// One stage entry in a chain configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StageSpec {
    /// Stage name; unique within the chain.
    pub name: String,
    /// Scroll distance over which this stage's progress goes 0 → 1.
    pub range: f64,
    /// Whether this stage starts at the anchor latch instead of the
    /// chained arithmetic. At most one stage per chain may be the anchor.
    #[serde(default)]
    pub anchor: bool,
}

/// Declarative description of a scroll sequence, the unit of configuration
/// (JSON round-trippable, validated before use).
///
/// Stage starts are chained: stage 0 starts at `base_offset`, and every
/// following stage starts where the previous one ends plus a breathing-room
/// delay of `delay_factor * viewport_height` (recomputed every frame, since
/// the viewport can resize). The anchor stage breaks the arithmetic: its
/// start comes from the [`AnchorLatch`], and stages after it chain off the
/// latched value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChainConfig {
    /// Absolute scroll offset where the first stage starts.
    #[serde(default)]
    pub base_offset: f64,
    /// Inter-stage delay as a fraction of viewport height.
    #[serde(default = "default_delay_factor")]
    pub delay_factor: f64,
    /// Ordered stages.
    pub stages: Vec<StageSpec>,
}

impl ChainConfig {
    /// Start an empty chain at `base_offset` with the default 10% delay.
    pub fn new(base_offset: f64) -> Self {
        Self {
            base_offset,
            delay_factor: default_delay_factor(),
            stages: Vec::new(),
        }
    }

    /// Override the inter-stage delay factor.
    pub fn delay_factor(mut self, factor: f64) -> Self {
        self.delay_factor = factor;
        self
    }

    /// Append a chained stage.
    pub fn stage(mut self, name: impl Into<String>, range: f64) -> Self {
        self.stages.push(StageSpec {
            name: name.into(),
            range,
            anchor: false,
        });
        self
    }

    /// Append the anchor stage.
    pub fn anchor_stage(mut self, name: impl Into<String>, range: f64) -> Self {
        self.stages.push(StageSpec {
            name: name.into(),
            range,
            anchor: true,
        });
        self
    }

    /// The Asthesis landing-page sequence: seven chained reveal stages, the
    /// anchored device showcase, and the trailing features panel.
    pub fn asthesis_home() -> Self {
        let mut cfg = Self::new(800.0);
        for name in [
            "system",
            "style",
            "interface",
            "housing",
            "processing",
            "power",
            "future",
        ] {
            cfg = cfg.stage(name, 800.0);
        }
        cfg.anchor_stage("showcase", 800.0).stage("features", 800.0)
    }

    /// Validate structural invariants: non-empty unique stage names,
    /// positive finite ranges, at most one anchor, finite offsets.
    pub fn validate(&self) -> AsthesisResult<()> {
        if self.stages.is_empty() {
            return Err(AsthesisError::validation("chain must have at least one stage"));
        }
        if !self.base_offset.is_finite() {
            return Err(AsthesisError::validation("base_offset must be finite"));
        }
        if !self.delay_factor.is_finite() || self.delay_factor < 0.0 {
            return Err(AsthesisError::validation(
                "delay_factor must be finite and >= 0",
            ));
        }
        let mut anchors = 0usize;
        for (idx, spec) in self.stages.iter().enumerate() {
            if spec.name.is_empty() {
                return Err(AsthesisError::validation(format!(
                    "stage {idx} has an empty name"
                )));
            }
            if !spec.range.is_finite() || spec.range <= 0.0 {
                return Err(AsthesisError::validation(format!(
                    "stage '{}' range must be finite and > 0, got {}",
                    spec.name, spec.range
                )));
            }
            if self.stages[..idx].iter().any(|s| s.name == spec.name) {
                return Err(AsthesisError::validation(format!(
                    "duplicate stage name '{}'",
                    spec.name
                )));
            }
            if spec.anchor {
                anchors += 1;
            }
        }
        if anchors > 1 {
            return Err(AsthesisError::validation(
                "a chain may have at most one anchor stage",
            ));
        }
        Ok(())
    }
}

/// Ordered per-stage progress for one frame, keyed by stage name.
///
/// This is the single structured value handed to section renderers and the
/// layer compositor, replacing one positional parameter per stage.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ProgressMap {
    entries: Vec<(String, f64)>,
}

impl ProgressMap {
    /// Progress for `name`, or `None` if the chain has no such stage.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, p)| p)
    }

    /// Iterate entries in stage order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, p)| (n.as_str(), *p))
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no stages.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Stateful owner of one page's scroll sequence.
///
/// All state is recreated on mount and discarded on unmount; the only
/// mutation across frames is the anchor latch, written at most once.
#[derive(Clone, Debug)]
pub struct ScrollSequencer {
    config: ChainConfig,
    latch: AnchorLatch,
}

impl ScrollSequencer {
    /// Build a sequencer from a validated chain configuration.
    pub fn new(config: ChainConfig) -> AsthesisResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            latch: AnchorLatch::new(),
        })
    }

    /// The configuration this sequencer runs.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// The anchor latch's resolved offset, if any.
    pub fn anchor_offset(&self) -> Option<f64> {
        self.latch.resolved()
    }

    /// Resolve every stage window for the current sample, in stage order.
    ///
    /// The anchor stage and everything chained after an unlatched anchor
    /// come back [`StageStart::Pending`].
    pub fn windows(&self, sample: ScrollSample) -> Vec<StageWindow> {
        let delay = self.config.delay_factor * sample.viewport_height;
        let mut out = Vec::with_capacity(self.config.stages.len());
        // Start of the next chained stage; None once we pass an unlatched anchor.
        let mut cursor = Some(self.config.base_offset);
        for spec in &self.config.stages {
            let start = if spec.anchor {
                self.latch.resolved()
            } else {
                cursor
            };
            cursor = start.map(|s| s + spec.range + delay);
            out.push(StageWindow {
                name: spec.name.clone(),
                start: match start {
                    Some(s) => StageStart::Fixed(s),
                    None => StageStart::Pending,
                },
                range: spec.range,
            });
        }
        out
    }

    /// Evaluate one frame: update the latch, resolve stage windows in
    /// dependency order, and compute each stage's progress.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn sample(&mut self, input: FrameInput) -> ProgressMap {
        // Latch first; dependent stages read it in the same frame.
        self.latch.observe(input.scroll, input.anchor_center_y);
        let entries = self
            .windows(input.scroll)
            .into_iter()
            .map(|w| {
                let p = w.progress(input.scroll.scroll_y);
                (w.name, p)
            })
            .collect();
        ProgressMap { entries }
    }

    /// Return to the mount state: clears the anchor latch.
    pub fn reset(&mut self) {
        self.latch.reset();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/chain.rs"]
mod tests;
