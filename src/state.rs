use crate::track::Slot;

/// Which items are on the track.
///
/// At most one neighbor is ever in flight, so the three shapes are
/// exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselState {
    Resting { visible: Slot },                                  // At rest, one item shown
    TransitioningPrev { previous: Slot, visible: Slot },        // Sliding right to reveal `previous`
    TransitioningNext { visible: Slot, next: Slot },            // Sliding left to reveal `next`
}

impl CarouselState {
    pub fn visible(&self) -> Slot {
        match *self {
            Self::Resting { visible }
            | Self::TransitioningPrev { visible, .. }
            | Self::TransitioningNext { visible, .. } => visible,
        }
    }

    pub fn previous(&self) -> Option<Slot> {
        match *self {
            Self::TransitioningPrev { previous, .. } => Some(previous),
            _ => None,
        }
    }

    pub fn next(&self) -> Option<Slot> {
        match *self {
            Self::TransitioningNext { next, .. } => Some(next),
            _ => None,
        }
    }

    /// The item that will be visible once any pending transition commits.
    pub fn target(&self) -> Slot {
        self.previous().or(self.next()).unwrap_or(self.visible())
    }

    pub fn is_resting(&self) -> bool {
        matches!(self, Self::Resting { .. })
    }

    /// Collapses the state onto its target.
    pub fn committed(&self) -> Self {
        Self::Resting { visible: self.target() }
    }
}

/// Autoplay state reported to `on_change_state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Play,
    Pause,
}

impl PlayState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
        }
    }
}

/// Identifies one slide transition so late completion signals can be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TransitionId(pub u64);
