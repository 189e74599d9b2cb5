use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use hero_carousel::slide::parse_captions;
use hero_carousel::{CarouselConfig, CarouselController, SlideInfo};
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod texture_loader;
mod viewer;

use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};
use crate::viewer::sprite::SlideSprite;
use crate::viewer::{FPS, Viewer};

/// Hero image carousel viewer
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory holding the slide images, shown in file name order
    image_directory: PathBuf,

    /// Captions file, one `title|subtitle|badge` line per slide
    #[arg(long)]
    captions: Option<PathBuf>,

    /// Start with autoplay disabled
    #[arg(long)]
    no_autoplay: bool,

    /// Autoplay interval on wide windows
    #[arg(long, default_value_t = 5000)]
    interval_ms: u64,

    /// Autoplay interval on narrow windows
    #[arg(long, default_value_t = 6000)]
    mobile_interval_ms: u64,

    /// Cross-fade duration, during which navigation is locked
    #[arg(long, default_value_t = 500)]
    transition_ms: u64,

    /// Minimum horizontal drag counted as a swipe
    #[arg(long, default_value_t = 50.0)]
    swipe_distance: f32,

    #[arg(long, default_value_t = 1280)]
    width: i32,

    #[arg(long, default_value_t = 720)]
    height: i32,
}

impl Args {
    fn carousel_config(&self) -> CarouselConfig {
        CarouselConfig {
            desktop_interval: Duration::from_millis(self.interval_ms),
            mobile_interval: Duration::from_millis(self.mobile_interval_ms),
            transition_duration: Duration::from_millis(self.transition_ms),
            min_swipe_distance: self.swipe_distance,
            auto_play: !self.no_autoplay,
            ..CarouselConfig::default()
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    let args = Args::parse();

    let image_paths = load_sorted_image_paths(&args.image_directory)?;
    if image_paths.is_empty() {
        warn!(directory = %args.image_directory.display(), "no image files found");
    }

    let captions = match &args.captions {
        Some(path) => parse_captions(
            &fs::read_to_string(path)
                .with_context(|| format!("failed to read captions {}", path.display()))?,
        ),
        None => Vec::new(),
    };

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Hero Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    rl.set_exit_key(None);

    // Preload every slide before the first frame so cross-fades never wait on I/O.
    let mut sprites = Vec::new();
    let mut slides = Vec::new();
    for path in image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, &path) {
            Ok(texture) => {
                let info = captions.get(slides.len()).cloned().unwrap_or_else(|| {
                    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
                    SlideInfo::new(stem)
                });
                slides.push(info);
                sprites.push(SlideSprite::new(texture));
            }
            Err(e) => warn!("skipping slide: {e:#}"),
        }
    }
    info!(slides = slides.len(), "slides loaded");

    let controller = CarouselController::new(slides, args.carousel_config());
    Viewer::new(controller, sprites).run(&mut rl, &thread);
    Ok(())
}
