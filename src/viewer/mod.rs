pub mod animator;
pub mod cli;
pub mod render;
pub mod texture_loader;

use anyhow::{Context, Result};
use carousel::{CarouselConfig, CarouselItem, Manifest, Size, StartPolicy};
use rand::seq::SliceRandom;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::viewer::cli::Args;
use crate::viewer::texture_loader::load_sorted_image_paths;

/// Builds the carousel configuration from a manifest or an image directory.
pub fn load_config(args: &Args) -> Result<CarouselConfig> {
    let config = if args.is_manifest() {
        let text = fs::read_to_string(&args.source)
            .with_context(|| format!("failed to read manifest {:?}", args.source))?;
        let base = args.source.parent().unwrap_or(Path::new("."));
        Manifest::parse_in(&text, base)?.into_config()?
    } else {
        let mut paths = load_sorted_image_paths(&args.source)?;
        if args.shuffle {
            paths.shuffle(&mut rand::rng());
        }
        let items = paths
            .iter()
            .zip(1..)
            .map(|(path, order)| {
                let name = path.file_stem().map(|s| s.to_string_lossy().into_owned());
                let item = CarouselItem::new(order, path.to_string_lossy());
                match name {
                    Some(name) => item.with_alt(name),
                    None => item,
                }
            })
            .collect();

        let mut config = CarouselConfig::new(items)
            .interval(Duration::from_millis(args.interval))
            .duration(Duration::from_millis(args.duration))
            .progress_lead(Duration::from_millis(args.progress_lead));
        if let (Some(width), Some(height)) = (args.width, args.height) {
            config = config.size(Size::new(width, height));
        }
        config
    };

    let start = if args.paused { StartPolicy::Manual } else { StartPolicy::Autoplay };
    Ok(config.start(start))
}
