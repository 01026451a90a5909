//! Headless image carousel engine.
//!
//! [`Carousel`] keeps the previous/visible/next triple, the autoplay clock,
//! the progress bar and touch gestures consistent. The host feeds it time
//! and input, and draws whatever [`Carousel::view`] returns.

pub mod config;
pub mod constants;
pub mod controls;
pub mod ease;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod item;
pub mod progress;
pub mod state;
pub mod timer;
pub mod track;
pub mod transform;

pub use config::{CarouselConfig, Manifest, Size, StartPolicy};
pub use controls::{Control, ControlBindings, NavButtons};
pub use ease::TimingFunction;
pub use engine::{Carousel, PointerEvent, SlideView, View};
pub use error::ConfigError;
pub use gesture::{Direction, DragClamp, Release, SettleOutcome};
pub use item::{CarouselItem, Link, ObjectFit, Rgba};
pub use progress::ProgressBar;
pub use state::{CarouselState, PlayState, TransitionId};
pub use track::{Slot, Track};
pub use transform::{TrackStyle, TrackTransform, Transition};
