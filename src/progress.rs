//! Frame-driven bar showing how much of the autoplay interval is left.

use crate::ease::progress;
use std::time::Duration;

/// Bar geometry as fractions of the container width.
///
/// The bar starts full and its left edge moves right as the cycle elapses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressBar {
    pub left: f32,
    pub width: f32,
}

impl ProgressBar {
    pub const FULL: Self = Self { left: 0.0, width: 1.0 };

    pub fn at(percentage: f32) -> Self {
        let p = percentage.clamp(0.0, 1.0);
        Self { left: p, width: 1.0 - p }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Key {
    interval: Duration,
    start: Duration,
    paused: bool,
}

/// Owns at most one frame subscription.
///
/// Any change of interval, cycle start or pause flag drops the old
/// subscription and, unless paused, opens a new one.
#[derive(Debug, Clone)]
pub struct ProgressIndicator {
    key: Option<Key>,
    scheduled: bool,
    bar: ProgressBar,
}

impl Default for ProgressIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressIndicator {
    pub fn new() -> Self {
        Self {
            key: None,
            scheduled: false,
            bar: ProgressBar::FULL,
        }
    }

    /// Returns `true` when the frame loop was re-acquired.
    pub fn sync(&mut self, interval: Duration, start: Duration, paused: bool) -> bool {
        let key = Key { interval, start, paused };
        if self.key == Some(key) {
            return false;
        }
        if self.scheduled {
            log::trace!("progress frame loop cancelled");
        }
        self.key = Some(key);
        self.scheduled = !paused && !interval.is_zero();
        self.scheduled
    }

    /// Advances one frame. The loop stops itself once the bar is empty.
    pub fn frame(&mut self, now: Duration) -> ProgressBar {
        if let (true, Some(key)) = (self.scheduled, self.key) {
            let percentage = progress(now.saturating_sub(key.start), key.interval);
            self.bar = ProgressBar::at(percentage);
            if percentage >= 1.0 {
                self.scheduled = false;
            }
        }
        self.bar
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    pub fn bar(&self) -> ProgressBar {
        self.bar
    }

    pub fn cancel(&mut self) {
        self.scheduled = false;
        self.key = None;
    }
}
