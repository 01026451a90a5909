use std::time::Duration;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(200); // Slide and settle animation length
pub const DEFAULT_INTERVAL: Duration = Duration::ZERO;             // Autoplay disabled unless configured

pub const SWIPE_DIVISOR: f32 = 4.0;                                // Swipe commits past width / SWIPE_DIVISOR
pub const FULL_WIDTH: f32 = 1.0;                                   // One track slot, in container widths
