//! Asthesis is the motion engine behind the Asthesis product site: a
//! scroll-driven reveal sequencer, an exploded-view device rig, and a thin
//! proxy to the Figma design-data API.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: a [`ScrollSource`] yields one [`FrameInput`] per animation
//!    frame (scroll offset, viewport height, anchor node position).
//! 2. **Sequence**: the [`ScrollSequencer`] resolves every stage window
//!    (chained start arithmetic plus one write-once anchor latch) and
//!    produces a [`ProgressMap`] of per-stage progress in `[0, 1]`.
//! 3. **Consume**: page sections map progress to opacity/translation via
//!    [`reveal_style`], and the 3D device rig maps progress to per-layer
//!    poses via [`ExplodedRig::pose_at`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure per-frame evaluation**: window resolution, progress and layer
//!   poses are pure functions of the current sample; nothing is cached
//!   across frames except the anchor latch, which is written at most once.
//! - **Degrade, never fail**: an unresolved or unresolvable anchor pins its
//!   stage (and everything chained after it) to progress 0; sequencing never
//!   raises an error on the hot path.
//!
//! The Figma proxy ([`FigmaProxy`]) is an external collaborator off the
//! animation path; it surfaces upstream failures as structured JSON errors.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod proxy;
mod reveal;
mod scene;
mod sequence;

pub use foundation::core::{FrameInput, ScrollSample};
pub use foundation::error::{AsthesisError, AsthesisResult};
pub use proxy::figma::{FigmaQuery, ProxyRejection, RequestType, parse_query, upstream_url};
pub use proxy::server::{BoundProxy, FigmaProxy, ProxyConfig, ProxyResponse};
pub use reveal::ease::Ease;
pub use reveal::style::{
    REVEAL_TRAVEL_PX, RevealStyle, delayed_reveal, eased_reveal_style, reveal_style,
};
pub use scene::explode::{
    DeviceLayer, ExplodeState, ExplodedRig, LayerConfig, LayerPose, compose_layer,
};
pub use scene::motion::{AUTO_ROTATE_RATE, SmoothFollow, auto_rotate_delta};
pub use sequence::anchor::AnchorLatch;
pub use sequence::chain::{ChainConfig, ProgressMap, ScrollSequencer, StageSpec};
pub use sequence::sampler::{FrameSampler, ScrollSource};
pub use sequence::window::{StageStart, StageWindow};
