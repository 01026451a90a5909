//! Touch tracking and the eased settle animation that follows a release.

use crate::constants::{FULL_WIDTH, SWIPE_DIVISOR};
use crate::ease::{TimingFunction, Tween};
use crate::track::{Slot, Track};
use crate::transform::TrackTransform;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Bound applied to the live drag offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DragClamp {
    /// The track never moves further than one neighbor.
    #[default]
    ContainerWidth,
    /// Raw pointer deltas are applied as-is.
    None,
}

impl DragClamp {
    fn apply(self, delta: f32, width: f32) -> f32 {
        match self {
            Self::ContainerWidth if width > 0.0 => delta.clamp(-width, width),
            _ => delta,
        }
    }
}

/// How a settle animation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    Commit(Direction),
    Cancel,
}

/// What a touch release started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// No gesture, or the gesture is already settling.
    Ignored,
    /// The finger never moved; the gesture is gone.
    Tap,
    /// A settle animation is running; drive it with [`GesturePipeline::frame`].
    Settling(SettleOutcome),
}

#[derive(Debug, Clone)]
struct Settle {
    tween: Tween,
    outcome: SettleOutcome,
}

/// State of one touch sequence, from touch-start until it is resolved.
#[derive(Debug, Clone)]
pub struct Gesture {
    initial_x: f32,
    last_x: Option<f32>,
    preview: Option<TrackTransform>,
    candidate_prev: Option<Slot>,
    candidate_next: Option<Slot>,
    settle: Option<Settle>,
}

impl Gesture {
    fn new(initial_x: f32) -> Self {
        Self {
            initial_x,
            last_x: None,
            preview: None,
            candidate_prev: None,
            candidate_next: None,
            settle: None,
        }
    }

    pub fn initial_x(&self) -> f32 {
        self.initial_x
    }

    pub fn last_x(&self) -> Option<f32> {
        self.last_x
    }

    pub fn preview(&self) -> Option<TrackTransform> {
        self.preview
    }

    pub fn candidate_prev(&self) -> Option<Slot> {
        self.candidate_prev
    }

    pub fn candidate_next(&self) -> Option<Slot> {
        self.candidate_next
    }

    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    fn base_widths(&self) -> f32 {
        if self.candidate_prev.is_some() { -FULL_WIDTH } else { 0.0 }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GesturePipeline {
    active: Option<Gesture>,
    clamp: DragClamp,
    easing: TimingFunction,
}

impl GesturePipeline {
    pub fn new(clamp: DragClamp, easing: TimingFunction) -> Self {
        Self {
            active: None,
            clamp,
            easing,
        }
    }

    pub fn active(&self) -> Option<&Gesture> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Opens a gesture at `x`. Refused while another gesture is unresolved.
    pub fn start(&mut self, x: f32) -> bool {
        if self.active.is_some() {
            log::trace!("touch start ignored, gesture still in flight");
            return false;
        }
        self.active = Some(Gesture::new(x));
        true
    }

    /// Tracks the finger. The drag sign picks which neighbor is previewed.
    pub fn moved(&mut self, x: f32, visible: Slot, track: &Track, width: f32) {
        let clamp = self.clamp;
        let Some(gesture) = self.active.as_mut().filter(|g| g.settle.is_none()) else {
            return;
        };

        let delta = clamp.apply(x - gesture.initial_x, width);
        gesture.candidate_prev = None;
        gesture.candidate_next = None;
        if delta < 0.0 {
            gesture.candidate_next = Some(track.next(visible));
        } else if delta > 0.0 {
            gesture.candidate_prev = Some(track.prev(visible));
        }

        gesture.last_x = Some(gesture.initial_x + delta);
        gesture.preview = Some(TrackTransform::new(gesture.base_widths(), delta));
    }

    /// Ends the touch. A drag past a quarter of `width` settles onto the
    /// neighbor, anything shorter settles back to rest.
    pub fn release(&mut self, width: f32, duration: Duration) -> Release {
        let Some(gesture) = self.active.as_mut() else {
            return Release::Ignored;
        };
        if gesture.settle.is_some() {
            return Release::Ignored;
        }
        let Some(last_x) = gesture.last_x else {
            self.active = None;
            return Release::Tap;
        };

        let init_x = last_x - gesture.initial_x;
        let threshold = width / SWIPE_DIVISOR;
        let is_change = init_x.abs() > threshold;
        let (to_x, outcome) = if is_change {
            let direction = if init_x < 0.0 { Direction::Next } else { Direction::Prev };
            (init_x.signum() * width, SettleOutcome::Commit(direction))
        } else {
            (0.0, SettleOutcome::Cancel)
        };
        log::debug!("swipe of {init_x}px against threshold {threshold}px settles as {outcome:?}");

        gesture.settle = Some(Settle {
            tween: Tween::new(self.easing, init_x, to_x, duration),
            outcome,
        });
        Release::Settling(outcome)
    }

    /// Advances the settle animation. Returns the outcome once it finishes,
    /// at which point the gesture is discarded.
    pub fn frame(&mut self, now: Duration) -> Option<SettleOutcome> {
        let gesture = self.active.as_mut()?;
        let base = gesture.base_widths();
        let settle = gesture.settle.as_mut()?;

        let (px, done) = settle.tween.sample(now);
        gesture.preview = Some(TrackTransform::new(base, px));
        log::trace!("settle frame at {px}px");

        if !done {
            return None;
        }
        let outcome = settle.outcome;
        self.active = None;
        Some(outcome)
    }

    /// Drops any gesture and its animation.
    pub fn cancel(&mut self) {
        self.active = None;
    }
}
