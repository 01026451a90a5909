//! Construction-time configuration, in code or from a TOML manifest.

use crate::constants::{DEFAULT_DURATION, DEFAULT_INTERVAL};
use crate::ease::TimingFunction;
use crate::error::ConfigError;
use crate::gesture::DragClamp;
use crate::item::{CarouselItem, Link, ObjectFit, Rgba};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Fixed container size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// What happens on the first mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartPolicy {
    /// Start autoplay once, on the first mount.
    #[default]
    Autoplay,
    /// Never start on mount; the host calls `play` when it wants to.
    Manual,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    pub items: Vec<CarouselItem>,
    pub size: Option<Size>,
    pub interval: Option<Duration>,
    pub duration: Duration,
    pub start: StartPolicy,
    pub settle_easing: TimingFunction,
    pub progress_lead: Duration,
    pub drag_clamp: DragClamp,
}

impl CarouselConfig {
    pub fn new(items: Vec<CarouselItem>) -> Self {
        Self {
            items,
            size: None,
            interval: Some(DEFAULT_INTERVAL).filter(|i| !i.is_zero()),
            duration: DEFAULT_DURATION,
            start: StartPolicy::default(),
            settle_easing: TimingFunction::default(),
            progress_lead: Duration::ZERO,
            drag_clamp: DragClamp::default(),
        }
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// A zero interval disables autoplay.
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = Some(interval).filter(|i| !i.is_zero());
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn start(mut self, start: StartPolicy) -> Self {
        self.start = start;
        self
    }

    pub fn settle_easing(mut self, easing: TimingFunction) -> Self {
        self.settle_easing = easing;
        self
    }

    /// Shortens the progress bar so it empties `lead` before the advance.
    pub fn progress_lead(mut self, lead: Duration) -> Self {
        self.progress_lead = lead;
        self
    }

    pub fn drag_clamp(mut self, clamp: DragClamp) -> Self {
        self.drag_clamp = clamp;
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestItem {
    pub order: i64,
    pub image: String,
    pub link: Option<String>,
    pub new_tab: Option<bool>,
    pub background_color: Option<String>,
    pub object_fit: Option<ObjectFit>,
    pub alt: Option<String>,
}

impl ManifestItem {
    /// Resolves `image` against `base` when it is relative.
    fn into_item(self, base: Option<&Path>) -> Result<CarouselItem, ConfigError> {
        let link = match (self.link, self.new_tab) {
            (Some(href), new_tab) => Some(Link {
                href,
                new_tab: new_tab.unwrap_or(false),
            }),
            (None, Some(_)) => return Err(ConfigError::NewTabWithoutLink { order: self.order }),
            (None, None) => None,
        };

        let background_color = self
            .background_color
            .map(|value| {
                Rgba::parse(&value).ok_or(ConfigError::InvalidColor {
                    order: self.order,
                    value,
                })
            })
            .transpose()?;

        let image = match base {
            Some(base) if Path::new(&self.image).is_relative() => {
                base.join(&self.image).to_string_lossy().into_owned()
            }
            _ => self.image,
        };

        Ok(CarouselItem {
            order: self.order,
            image,
            link,
            background_color,
            object_fit: self.object_fit,
            alt: self.alt,
        })
    }
}

/// A carousel described in TOML.
///
/// ```toml
/// interval_ms = 5000
/// duration_ms = 200
/// width = 400
/// height = 200
///
/// [[items]]
/// order = 1
/// image = "banner1.webp"
/// alt = "first"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub interval_ms: Option<u64>,
    pub duration_ms: Option<u64>,
    pub progress_lead_ms: Option<u64>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub settle_easing: Option<TimingFunction>,
    pub drag_clamp: Option<DragClamp>,
    #[serde(default)]
    pub items: Vec<ManifestItem>,
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl Manifest {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Parses `text` and resolves relative image paths against `base_dir`.
    pub fn parse_in(text: &str, base_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let mut manifest = Self::parse(text)?;
        manifest.base_dir = Some(base_dir.into());
        Ok(manifest)
    }

    pub fn into_config(self) -> Result<CarouselConfig, ConfigError> {
        let size = match (self.width, self.height) {
            (Some(width), Some(height)) if width > 0.0 && height > 0.0 => Some(Size::new(width, height)),
            (Some(width), Some(height)) => return Err(ConfigError::InvalidSize { width, height }),
            (None, None) => None,
            _ => return Err(ConfigError::PartialSize),
        };

        let mut seen = HashSet::new();
        let base = self.base_dir.as_deref();
        let items = self
            .items
            .into_iter()
            .map(|item| {
                if !seen.insert(item.order) {
                    return Err(ConfigError::DuplicateOrder { order: item.order });
                }
                item.into_item(base)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut config = CarouselConfig::new(items);
        config.size = size;
        if let Some(ms) = self.interval_ms {
            config = config.interval(Duration::from_millis(ms));
        }
        if let Some(ms) = self.duration_ms {
            config = config.duration(Duration::from_millis(ms));
        }
        if let Some(ms) = self.progress_lead_ms {
            config = config.progress_lead(Duration::from_millis(ms));
        }
        if let Some(easing) = self.settle_easing {
            config = config.settle_easing(easing);
        }
        if let Some(clamp) = self.drag_clamp {
            config = config.drag_clamp(clamp);
        }
        Ok(config)
    }
}
