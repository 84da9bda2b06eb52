use super::*;
use crate::{
    foundation::core::{FrameInput, ScrollSample},
    sequence::chain::ChainConfig,
};

fn sequencer() -> ScrollSequencer {
    ScrollSequencer::new(ChainConfig::new(0.0).stage("one", 800.0)).unwrap()
}

fn fixed_source(scroll_y: f64) -> impl FnMut() -> Option<FrameInput> {
    move || Some(FrameInput::unanchored(ScrollSample::new(scroll_y, 1000.0)))
}

#[test]
fn frame_without_scroll_event_skips_evaluation() {
    let mut sampler = FrameSampler::new(fixed_source(400.0), sequencer());
    assert!(sampler.animation_frame().is_none());
    assert_eq!(sampler.frames_evaluated(), 0);
}

#[test]
fn many_events_coalesce_into_one_evaluation() {
    let mut sampler = FrameSampler::new(fixed_source(400.0), sequencer());
    for _ in 0..50 {
        sampler.notify_scroll();
    }
    let map = sampler.animation_frame().expect("one evaluation");
    assert_eq!(map.get("one"), Some(0.5));
    assert_eq!(sampler.frames_evaluated(), 1);

    // The flag was consumed; the next frame does nothing.
    assert!(sampler.animation_frame().is_none());
    assert_eq!(sampler.frames_evaluated(), 1);
}

#[test]
fn prime_forces_the_mount_evaluation() {
    let mut sampler = FrameSampler::new(fixed_source(0.0), sequencer());
    sampler.prime();
    assert!(sampler.animation_frame().is_some());
}

#[test]
fn unavailable_source_yields_no_progress() {
    let source = || None;
    let mut sampler = FrameSampler::new(source, sequencer());
    sampler.prime();
    assert!(sampler.animation_frame().is_none());
    assert_eq!(sampler.frames_evaluated(), 0);
}

#[test]
fn reset_clears_pending_work() {
    let mut sampler = FrameSampler::new(fixed_source(400.0), sequencer());
    sampler.notify_scroll();
    sampler.reset();
    assert!(sampler.animation_frame().is_none());
}
