use clap::Parser;
use std::path::PathBuf;

/// Image carousel viewer.
///
/// Drag with the mouse to swipe, click the visible image to follow its
/// link, Left/Right to navigate, Space to pause or resume.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Directory of images, or a `.toml` carousel manifest
    pub source: PathBuf,

    /// Milliseconds between automatic advances; 0 disables autoplay
    #[arg(long, default_value_t = 5000)]
    pub interval: u64,

    /// Slide animation length in milliseconds
    #[arg(long, default_value_t = 200)]
    pub duration: u64,

    /// Fixed carousel width in pixels
    #[arg(long, requires = "height")]
    pub width: Option<f32>,

    /// Fixed carousel height in pixels
    #[arg(long, requires = "width")]
    pub height: Option<f32>,

    /// Shuffle directory images instead of sorting them by name
    #[arg(long)]
    pub shuffle: bool,

    /// Start paused
    #[arg(long)]
    pub paused: bool,

    /// Make the progress bar empty this many milliseconds before each advance
    #[arg(long, default_value_t = 0)]
    pub progress_lead: u64,
}

impl Args {
    pub fn is_manifest(&self) -> bool {
        self.source.is_file() && self.source.extension().is_some_and(|ext| ext == "toml")
    }
}
