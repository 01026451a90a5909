//! Autoplay cycle clock with pause/resume bookkeeping.

use std::time::Duration;

/// Snapshot of the autoplay clock.
///
/// `elapsed_at_pause` is only set while paused; resuming consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    pub start: Duration,
    pub elapsed_at_pause: Option<Duration>,
    pub running: bool,
}

/// Owns the single pending autoplay wake.
///
/// The first wake after `play` fires after the continuation delay; every
/// wake after that recurs at the full interval.
#[derive(Debug, Clone)]
pub struct AutoplayTimer {
    interval: Option<Duration>,
    state: TimerState,
    wake_at: Option<Duration>,
}

impl AutoplayTimer {
    /// A zero or absent interval disables autoplay; every operation then does nothing.
    pub fn new(interval: Option<Duration>, now: Duration) -> Self {
        Self {
            interval: interval.filter(|i| !i.is_zero()),
            state: TimerState {
                start: now,
                elapsed_at_pause: None,
                running: false,
            },
            wake_at: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.interval.is_some()
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn next_wake(&self) -> Option<Duration> {
        self.wake_at
    }

    /// Starts or resumes autoplay. Returns `true` when the timer was armed.
    pub fn play(&mut self, now: Duration) -> bool {
        let Some(interval) = self.interval else {
            return false;
        };
        if self.state.running {
            return false;
        }

        let elapsed = self.state.elapsed_at_pause.take().unwrap_or_default().min(interval);
        let continuation = interval - elapsed;
        self.state.start = now.saturating_sub(elapsed);
        self.state.running = true;
        self.wake_at = Some(now + continuation);
        log::debug!("autoplay armed, next advance in {}ms", continuation.as_millis());
        true
    }

    /// Pauses autoplay, remembering how far into the cycle it got.
    pub fn pause(&mut self, now: Duration) -> bool {
        let Some(interval) = self.interval else {
            return false;
        };
        if !self.state.running {
            return false;
        }

        let elapsed = now.saturating_sub(self.state.start).min(interval);
        self.state.elapsed_at_pause = Some(elapsed);
        self.state.running = false;
        self.wake_at = None;
        log::debug!("autoplay paused {}ms into the cycle", elapsed.as_millis());
        true
    }

    /// Starts a fresh full cycle at `now`, arming autoplay if it was paused.
    ///
    /// Returns `true` when this armed a timer that was not running.
    pub fn restart(&mut self, now: Duration) -> bool {
        let Some(interval) = self.interval else {
            return false;
        };
        let was_running = self.state.running;
        self.state = TimerState {
            start: now,
            elapsed_at_pause: None,
            running: true,
        };
        self.wake_at = Some(now + interval);
        !was_running
    }

    /// Cancels the pending wake and forgets any paused progress.
    pub fn stop(&mut self) {
        self.state.running = false;
        self.state.elapsed_at_pause = None;
        self.wake_at = None;
    }

    /// Fires the pending wake if it is due. Missed wakes collapse into one.
    pub fn poll(&mut self, now: Duration) -> bool {
        let (Some(interval), Some(at)) = (self.interval, self.wake_at) else {
            return false;
        };
        if now < at {
            return false;
        }

        let mut next = at + interval;
        self.state.start = at;
        if next <= now {
            log::trace!("autoplay fell behind by {}ms, re-anchoring", (now - at).as_millis());
            self.state.start = now;
            next = now + interval;
        }
        self.wake_at = Some(next);
        true
    }
}
