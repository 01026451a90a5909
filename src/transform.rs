use crate::constants::FULL_WIDTH;
use crate::ease::TimingFunction;
use crate::state::{CarouselState, TransitionId};
use std::time::Duration;

/// Horizontal offset of the track: a number of container widths plus pixels.
///
/// Equivalent to `translate3d(widths * 100%, 0, 0) translate3d(px, 0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackTransform {
    pub widths: f32,
    pub px: f32,
}

impl TrackTransform {
    pub const IDENTITY: Self = Self { widths: 0.0, px: 0.0 };

    pub const fn widths(widths: f32) -> Self {
        Self { widths, px: 0.0 }
    }

    pub const fn new(widths: f32, px: f32) -> Self {
        Self { widths, px }
    }

    /// Resolves the offset in pixels for a container of `width`.
    pub fn to_pixels(self, width: f32) -> f32 {
        self.widths * width + self.px
    }
}

/// Animated style change on the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub function: TimingFunction,
}

/// The style the renderer should apply to the track.
///
/// When `transition` is set the renderer animates from `from` to `to`
/// and reports completion with `id`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackStyle {
    pub id: TransitionId,
    pub from: TrackTransform,
    pub to: TrackTransform,
    pub transition: Option<Transition>,
}

impl TrackStyle {
    pub fn at_rest(id: TransitionId) -> Self {
        Self {
            id,
            from: TrackTransform::IDENTITY,
            to: TrackTransform::IDENTITY,
            transition: None,
        }
    }

    /// Derives the style for `state`.
    ///
    /// The previous item is laid out before the visible one, so revealing
    /// it slides from one width left back to zero.
    pub fn for_state(state: &CarouselState, id: TransitionId, duration: Duration) -> Self {
        let (from, to) = match state {
            CarouselState::Resting { .. } => return Self::at_rest(id),
            CarouselState::TransitioningPrev { .. } => (-FULL_WIDTH, 0.0),
            CarouselState::TransitioningNext { .. } => (0.0, -FULL_WIDTH),
        };
        Self {
            id,
            from: TrackTransform::widths(from),
            to: TrackTransform::widths(to),
            transition: Some(Transition {
                duration,
                function: TimingFunction::Ease,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::Slot;

    #[test]
    fn pixels_combine_widths_and_offset() {
        assert_eq!(TrackTransform::new(-1.0, 60.0).to_pixels(400.0), -340.0);
        assert_eq!(TrackTransform::IDENTITY.to_pixels(400.0), 0.0);
    }

    #[test]
    fn next_slides_left_and_prev_slides_right() {
        let duration = Duration::from_millis(200);
        let next = TrackStyle::for_state(
            &CarouselState::TransitioningNext {
                visible: Slot(0),
                next: Slot(1),
            },
            TransitionId(1),
            duration,
        );
        assert_eq!(next.from, TrackTransform::IDENTITY);
        assert_eq!(next.to, TrackTransform::widths(-1.0));

        let prev = TrackStyle::for_state(
            &CarouselState::TransitioningPrev {
                previous: Slot(2),
                visible: Slot(0),
            },
            TransitionId(2),
            duration,
        );
        assert_eq!(prev.from, TrackTransform::widths(-1.0));
        assert_eq!(prev.to, TrackTransform::IDENTITY);
        assert_eq!(prev.transition.map(|t| t.duration), Some(duration));

        let rest = TrackStyle::for_state(&CarouselState::Resting { visible: Slot(0) }, TransitionId(3), duration);
        assert!(rest.transition.is_none());
    }
}
