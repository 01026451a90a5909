use carousel::ease::Tween;
use carousel::{TrackStyle, TrackTransform, TransitionId};
use std::time::Duration;

/// Plays track style changes the way a CSS `transition` would.
///
/// A new style id restarts the animation from the style's `from`; when it
/// finishes the id is handed back so the engine can commit.
pub struct TrackAnimator {
    current: Option<TransitionId>,
    tween: Option<Tween>,
    transform: TrackTransform,
}

impl TrackAnimator {
    pub fn new() -> Self {
        Self {
            current: None,
            tween: None,
            transform: TrackTransform::IDENTITY,
        }
    }

    /// Advances to `now`. Returns the id of a transition that just ended.
    pub fn update(&mut self, style: TrackStyle, now: Duration) -> Option<TransitionId> {
        let restyled = self.current != Some(style.id) || (style.transition.is_none() && self.tween.is_some());
        if restyled {
            self.current = Some(style.id);
            self.tween = style
                .transition
                .map(|t| Tween::new(t.function, style.from.widths, style.to.widths, t.duration));
            self.transform = style.from;
        }

        let Some(tween) = self.tween.as_mut() else {
            self.transform = style.to;
            return None;
        };
        let (widths, done) = tween.sample(now);
        self.transform = TrackTransform::widths(widths);
        if done {
            self.tween = None;
            return Some(style.id);
        }
        None
    }

    pub fn transform(&self) -> TrackTransform {
        self.transform
    }
}
