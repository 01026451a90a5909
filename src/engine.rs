//! The carousel engine: one state container fed by three time sources.
//!
//! The host drives it from a single thread: timer wakes through
//! [`Carousel::poll_timers`], animation frames through [`Carousel::frame`],
//! and user input through the navigation and touch methods. Rendering is a
//! pure function of the engine's state, see [`Carousel::view`].

use crate::config::{CarouselConfig, StartPolicy};
use crate::controls::Control;
use crate::gesture::{Direction, Gesture, GesturePipeline, Release, SettleOutcome};
use crate::item::{CarouselItem, Link};
use crate::progress::{ProgressBar, ProgressIndicator};
use crate::state::{CarouselState, PlayState, TransitionId};
use crate::timer::{AutoplayTimer, TimerState};
use crate::track::{Slot, Track};
use crate::transform::{TrackStyle, TrackTransform};
use std::fmt;
use std::time::Duration;

/// Pointer position of an activation, in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
}

type ItemCallback = Box<dyn FnMut(&CarouselItem)>;
type StateCallback = Box<dyn FnMut(PlayState)>;
type ClickCallback = Box<dyn FnMut(&PointerEvent, &CarouselItem)>;

#[derive(Default)]
struct Listeners {
    on_change_item: Option<ItemCallback>,
    on_change_state: Option<StateCallback>,
    on_click: Option<ClickCallback>,
}

impl Listeners {
    fn state_changed(&mut self, state: PlayState) {
        log::debug!("state changed to {}", state.as_str());
        if let Some(callback) = self.on_change_state.as_mut() {
            callback(state);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("on_change_item", &self.on_change_item.is_some())
            .field("on_change_state", &self.on_change_state.is_some())
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

/// One slide in render order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideView<'a> {
    pub slot: Slot,
    pub item: &'a CarouselItem,
    /// Only the visible item reacts to activation.
    pub clickable: bool,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct View<'a> {
    /// Laid out left to right, one container width apart.
    pub slides: Vec<SlideView<'a>>,
    /// Track style from the state machine.
    pub style: TrackStyle,
    /// Live gesture offset; overrides `style` while set.
    pub gesture_transform: Option<TrackTransform>,
    /// `None` when autoplay is disabled.
    pub progress: Option<ProgressBar>,
}

#[derive(Debug)]
pub struct Carousel {
    track: Option<Track>,
    state: CarouselState,
    transition_id: TransitionId,
    style: TrackStyle,

    timer: AutoplayTimer,
    progress: ProgressIndicator,
    progress_lead: Duration,
    gesture: GesturePipeline,

    duration: Duration,
    container_width: f32,
    start: StartPolicy,
    mounted: bool,
    disposed: bool,

    listeners: Listeners,
}

impl Carousel {
    pub fn new(config: CarouselConfig, now: Duration) -> Self {
        let track = Track::new(config.items);
        if track.is_none() {
            log::debug!("carousel created without items, nothing will render");
        }
        let state = CarouselState::Resting {
            visible: track.as_ref().map(Track::first).unwrap_or(Slot(0)),
        };

        let mut carousel = Self {
            track,
            state,
            transition_id: TransitionId::default(),
            style: TrackStyle::at_rest(TransitionId::default()),
            timer: AutoplayTimer::new(config.interval, now),
            progress: ProgressIndicator::new(),
            progress_lead: config.progress_lead,
            gesture: GesturePipeline::new(config.drag_clamp, config.settle_easing),
            duration: config.duration,
            container_width: config.size.map(|s| s.width).unwrap_or(0.0),
            start: config.start,
            mounted: false,
            disposed: false,
            listeners: Listeners::default(),
        };
        carousel.sync_progress();
        carousel
    }

    pub fn on_change_item(mut self, callback: impl FnMut(&CarouselItem) + 'static) -> Self {
        self.listeners.on_change_item = Some(Box::new(callback));
        self
    }

    pub fn on_change_state(mut self, callback: impl FnMut(PlayState) + 'static) -> Self {
        self.listeners.on_change_state = Some(Box::new(callback));
        self
    }

    pub fn on_click(mut self, callback: impl FnMut(&PointerEvent, &CarouselItem) + 'static) -> Self {
        self.listeners.on_click = Some(Box::new(callback));
        self
    }

    // --- Accessors ---

    pub fn track(&self) -> Option<&Track> {
        self.track.as_ref()
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn visible_item(&self) -> Option<&CarouselItem> {
        self.track.as_ref().map(|t| t.get(self.state.visible()))
    }

    /// The item that will be visible once the pending transition commits.
    pub fn target_item(&self) -> Option<&CarouselItem> {
        self.track.as_ref().map(|t| t.get(self.state.target()))
    }

    pub fn style(&self) -> TrackStyle {
        self.style
    }

    pub fn timer_state(&self) -> TimerState {
        self.timer.state()
    }

    pub fn next_autoplay(&self) -> Option<Duration> {
        self.timer.next_wake()
    }

    pub fn is_playing(&self) -> bool {
        self.timer.is_running()
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.active()
    }

    pub fn progress_scheduled(&self) -> bool {
        self.progress.is_scheduled()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    pub fn set_container_width(&mut self, width: f32) {
        self.container_width = width.max(0.0);
    }

    fn is_inert(&self) -> bool {
        self.disposed || self.track.is_none()
    }

    // --- Lifecycle ---

    /// Runs the start policy. Only the first call has any effect.
    pub fn mount(&mut self, now: Duration) {
        if self.mounted || self.is_inert() {
            return;
        }
        self.mounted = true;
        if self.start == StartPolicy::Autoplay {
            self.play(now);
        }
    }

    /// Cancels every timer, frame loop and gesture. The carousel is inert afterwards.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.timer.stop();
        self.progress.cancel();
        self.gesture.cancel();
        self.disposed = true;
        log::debug!("carousel disposed");
    }

    // --- Autoplay ---

    /// Starts or resumes autoplay. Ignored while a gesture is unresolved,
    /// the gesture resumes autoplay itself once it ends.
    pub fn play(&mut self, now: Duration) {
        if self.is_inert() {
            return;
        }
        if self.gesture.is_active() {
            log::trace!("play ignored, gesture in flight");
            return;
        }
        if self.timer.play(now) {
            self.listeners.state_changed(PlayState::Play);
            self.sync_progress();
        }
    }

    pub fn pause(&mut self, now: Duration) {
        if self.is_inert() {
            return;
        }
        if self.timer.pause(now) {
            self.listeners.state_changed(PlayState::Pause);
            self.sync_progress();
        }
    }

    pub fn toggle_play(&mut self, now: Duration) {
        if self.timer.is_running() {
            self.pause(now);
        } else {
            self.play(now);
        }
    }

    // --- Navigation ---

    /// Slides to the previous item and restarts the autoplay cycle.
    pub fn go_prev(&mut self, now: Duration) {
        self.navigate_manually(Direction::Prev, now);
    }

    /// Slides to the next item and restarts the autoplay cycle.
    pub fn go_next(&mut self, now: Duration) {
        self.navigate_manually(Direction::Next, now);
    }

    pub fn apply(&mut self, control: Control, now: Duration) {
        match control {
            Control::Prev => self.go_prev(now),
            Control::Next => self.go_next(now),
            Control::TogglePlay => self.toggle_play(now),
        }
    }

    fn navigate_manually(&mut self, direction: Direction, now: Duration) {
        if self.is_inert() {
            return;
        }
        if self.gesture.is_active() {
            log::trace!("navigation ignored, gesture in flight");
            return;
        }
        if self.timer.restart(now) {
            self.listeners.state_changed(PlayState::Play);
        }
        self.navigate(direction);
        self.sync_progress();
    }

    /// Starts a transition from the current target toward its neighbor.
    ///
    /// A transition still in flight is committed first, so callbacks see
    /// every item the carousel passes through.
    fn navigate(&mut self, direction: Direction) {
        self.commit();
        let Some(track) = self.track.as_ref() else {
            return;
        };

        let base = self.state.target();
        self.state = match direction {
            Direction::Prev => CarouselState::TransitioningPrev {
                previous: track.prev(base),
                visible: base,
            },
            Direction::Next => CarouselState::TransitioningNext {
                visible: base,
                next: track.next(base),
            },
        };
        self.transition_id.0 += 1;
        self.style = TrackStyle::for_state(&self.state, self.transition_id, self.duration);
        log::debug!(
            "transition {} toward order {}",
            self.transition_id.0,
            track.get(self.state.target()).order
        );
    }

    /// Signals that the renderer finished animating transition `id`.
    ///
    /// Returns `false` for stale or unknown ids.
    pub fn complete_transition(&mut self, id: TransitionId) -> bool {
        if self.is_inert() || id != self.transition_id || self.state.is_resting() {
            return false;
        }
        self.commit();
        true
    }

    fn commit(&mut self) {
        if self.state.is_resting() {
            return;
        }
        let Some(track) = self.track.as_ref() else {
            return;
        };

        self.state = self.state.committed();
        self.style = TrackStyle::at_rest(self.transition_id);
        let item = track.get(self.state.visible());
        log::debug!("committed order {}", item.order);

        if let Some(callback) = self.listeners.on_change_item.as_mut() {
            callback(item);
        }
        // A commit reports play unless the host paused autoplay mid-slide.
        if self.timer.is_running() || !self.timer.is_enabled() {
            self.listeners.state_changed(PlayState::Play);
        }
    }

    // --- Time sources ---

    /// Handles a due autoplay wake, if any.
    pub fn poll_timers(&mut self, now: Duration) {
        if self.is_inert() {
            return;
        }
        if self.timer.poll(now) {
            log::trace!("autoplay tick");
            self.navigate(Direction::Next);
            self.sync_progress();
        }
    }

    /// Runs one animation frame: progress bar and gesture settle.
    pub fn frame(&mut self, now: Duration) {
        if self.is_inert() {
            return;
        }
        self.progress.frame(now);

        match self.gesture.frame(now) {
            Some(SettleOutcome::Commit(direction)) => {
                // The settle already moved the track onto the neighbor. The
                // commit reports the re-armed timer.
                self.timer.restart(now);
                self.navigate(direction);
                self.commit();
                self.sync_progress();
            }
            Some(SettleOutcome::Cancel) => self.play(now),
            None => {}
        }
    }

    /// Polls timers, then runs a frame.
    pub fn update(&mut self, now: Duration) {
        self.poll_timers(now);
        self.frame(now);
    }

    fn sync_progress(&mut self) {
        let Some(interval) = self.timer.interval() else {
            return;
        };
        let shortened = interval.saturating_sub(self.progress_lead);
        let bar_interval = if shortened.is_zero() { interval } else { shortened };
        self.progress
            .sync(bar_interval, self.timer.state().start, !self.timer.is_running());
    }

    // --- Touch ---

    /// Begins a gesture. Returns `false` when a previous gesture is unresolved.
    ///
    /// Autoplay stays paused until the gesture ends: `play`, `toggle_play`
    /// and the navigation methods are ignored in between.
    pub fn touch_start(&mut self, x: f32, now: Duration) -> bool {
        if self.is_inert() || self.gesture.is_active() {
            return false;
        }
        self.commit();
        self.pause(now);
        self.gesture.start(x)
    }

    pub fn touch_move(&mut self, x: f32) {
        let Some(track) = self.track.as_ref().filter(|_| !self.disposed) else {
            return;
        };
        self.gesture.moved(x, self.state.visible(), track, self.container_width);
    }

    pub fn touch_end(&mut self, now: Duration) -> Release {
        if self.is_inert() {
            return Release::Ignored;
        }
        let release = self.gesture.release(self.container_width, self.duration);
        if release == Release::Tap {
            self.play(now);
        }
        release
    }

    // --- Activation and rendering ---

    /// Activates the visible item, returning its link for the host to follow.
    pub fn activate(&mut self, event: PointerEvent) -> Option<&Link> {
        if self.is_inert() {
            return None;
        }
        let track = self.track.as_ref()?;
        let item = track.get(self.state.visible());
        if let Some(callback) = self.listeners.on_click.as_mut() {
            callback(&event, item);
        }
        item.link.as_ref()
    }

    pub fn view(&self) -> View<'_> {
        let Some(track) = self.track.as_ref().filter(|_| !self.disposed) else {
            return View {
                slides: Vec::new(),
                style: self.style,
                gesture_transform: None,
                progress: None,
            };
        };

        let gesture = self.gesture.active();
        let slide = |slot: Slot, clickable: bool| SlideView {
            slot,
            item: track.get(slot),
            clickable,
        };

        let mut slides = Vec::with_capacity(3);
        if let Some(prev) = self
            .state
            .previous()
            .or_else(|| gesture.and_then(Gesture::candidate_prev))
        {
            slides.push(slide(prev, false));
        }
        slides.push(slide(self.state.visible(), true));
        if let Some(next) = self
            .state
            .next()
            .or_else(|| gesture.and_then(Gesture::candidate_next))
        {
            slides.push(slide(next, false));
        }

        View {
            slides,
            style: self.style,
            gesture_transform: gesture.and_then(Gesture::preview),
            progress: self.timer.is_enabled().then(|| self.progress.bar()),
        }
    }
}
