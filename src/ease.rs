//! Timing functions mapping normalized progress to eased progress.

use serde::Deserialize;
use std::time::Duration;

/// CSS-style timing functions.
///
/// Every function maps `0.0` to `0.0` and `1.0` to `1.0`. Input outside
/// `[0, 1]` is clamped first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimingFunction {
    Linear,
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl TimingFunction {
    pub const ALL: [Self; 5] = [
        Self::Linear,
        Self::Ease,
        Self::EaseIn,
        Self::EaseOut,
        Self::EaseInOut,
    ];

    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            // Denominator is >= 0.5 on [0, 1].
            Self::Ease => t * t / (2.0 * (t * t - t) + 1.0),
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Ease => "ease",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }
}

/// Fraction of `duration` covered by `elapsed`, clamped to `[0, 1]`.
///
/// A zero duration is treated as already finished.
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
}

/// A value animated from `from` to `to` over a fixed duration.
///
/// The start instant is latched on the first sample, the same way a
/// frame callback records its first timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    function: TimingFunction,
    from: f32,
    to: f32,
    duration: Duration,
    started_at: Option<Duration>,
}

impl Tween {
    pub fn new(function: TimingFunction, from: f32, to: f32, duration: Duration) -> Self {
        Self {
            function,
            from,
            to,
            duration,
            started_at: None,
        }
    }

    /// Samples the tween at `now`, returning the value and whether the tween has finished.
    pub fn sample(&mut self, now: Duration) -> (f32, bool) {
        let start = *self.started_at.get_or_insert(now);
        let t = progress(now.saturating_sub(start), self.duration);
        let value = (self.to - self.from) * self.function.apply(t) + self.from;
        (value, t >= 1.0)
    }

    pub fn from(&self) -> f32 {
        self.from
    }

    pub fn to(&self) -> f32 {
        self.to
    }
}
