//! Binds external input handles (buttons, keys) to carousel controls.

use crate::engine::Carousel;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Prev,
    Next,
    TogglePlay,
}

/// Previous/next handles. They are registered together or not at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavButtons<H> {
    pub prev: H,
    pub next: H,
}

/// Registry of the handles currently attached to a carousel.
///
/// Rebinding replaces the prior registration and hands it back, so the
/// caller can detach whatever listener it installed on the old handle.
#[derive(Debug, Clone)]
pub struct ControlBindings<H> {
    navigation: Option<NavButtons<H>>,
    state: Option<H>,
}

impl<H> Default for ControlBindings<H> {
    fn default() -> Self {
        Self {
            navigation: None,
            state: None,
        }
    }
}

impl<H: PartialEq> ControlBindings<H> {
    pub fn new(navigation: Option<NavButtons<H>>, state: Option<H>) -> Self {
        Self { navigation, state }
    }

    pub fn bind_navigation(&mut self, navigation: Option<NavButtons<H>>) -> Option<NavButtons<H>> {
        std::mem::replace(&mut self.navigation, navigation)
    }

    pub fn bind_state(&mut self, state: Option<H>) -> Option<H> {
        std::mem::replace(&mut self.state, state)
    }

    pub fn navigation(&self) -> Option<&NavButtons<H>> {
        self.navigation.as_ref()
    }

    pub fn state(&self) -> Option<&H> {
        self.state.as_ref()
    }

    pub fn resolve(&self, handle: &H) -> Option<Control> {
        if let Some(nav) = &self.navigation {
            if nav.prev == *handle {
                return Some(Control::Prev);
            }
            if nav.next == *handle {
                return Some(Control::Next);
            }
        }
        self.state
            .as_ref()
            .filter(|state| *state == handle)
            .map(|_| Control::TogglePlay)
    }

    /// Routes an activation of `handle`. Unbound handles are ignored.
    pub fn dispatch(&self, handle: &H, carousel: &mut Carousel, now: Duration) -> Option<Control> {
        let control = self.resolve(handle)?;
        log::debug!("control {control:?} activated");
        carousel.apply(control, now);
        Some(control)
    }
}
