use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use panview_core::io::load_image;
use panview_core::{OffscreenSurface, Point, ResampleQuality, Viewer, WheelDirection};
use tracing::info;

use super::{load_config, parse_offset, parse_size};
use crate::summary::print_render_summary;

#[derive(Args)]
pub struct RenderArgs {
    /// Input image file
    pub file: PathBuf,

    /// Surface size as WIDTHxHEIGHT
    #[arg(long, default_value = "800x600", value_parser = parse_size)]
    pub surface: (u32, u32),

    /// Viewer config (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Resize filter level, 0 (nearest) to 4 (lanczos); overrides the config
    #[arg(short, long)]
    pub quality: Option<u8>,

    /// Open at 1:1 instead of fitting to the surface
    #[arg(long)]
    pub identity: bool,

    /// Wheel notches toward zoom in
    #[arg(long, default_value = "0")]
    pub zoom_in: u32,

    /// Wheel notches toward zoom out
    #[arg(long, default_value = "0")]
    pub zoom_out: u32,

    /// Pointer position for wheel notches as X,Y (only used with zoom_to_cursor)
    #[arg(long, value_parser = parse_offset)]
    pub pointer: Option<(i32, i32)>,

    /// Drag the image by DX,DY pixels after zooming (repeatable)
    #[arg(long, value_parser = parse_offset, allow_hyphen_values = true)]
    pub drag: Vec<(i32, i32)>,

    /// Output PNG of the full surface
    #[arg(short, long, default_value = "view.png")]
    pub output: PathBuf,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(level) = args.quality {
        config.quality = ResampleQuality::from_level(level)?;
    }
    let background = config.background_rgb()?;

    let image = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let (width, height) = args.surface;
    let surface = OffscreenSurface::new(width, height, background);
    let mut viewer = Viewer::new(surface, None, config)?;
    viewer.set_image(Some(image));
    if args.identity {
        viewer.reset_zoom();
    }

    let pointer = args.pointer.map(|(x, y)| Point::new(x, y));
    for _ in 0..args.zoom_in {
        viewer.on_wheel(WheelDirection::In, pointer);
    }
    for _ in 0..args.zoom_out {
        viewer.on_wheel(WheelDirection::Out, pointer);
    }

    // Drags are replayed from the surface centre.
    let start = Point::new(width as i32 / 2, height as i32 / 2);
    for &(dx, dy) in &args.drag {
        viewer.on_drag_start(start);
        viewer.on_drag_move(Point::new(start.x + dx, start.y + dy));
        viewer.on_drag_release();
    }
    // Drags away from the margins only scroll; recomposite before the snapshot.
    viewer.render();

    viewer
        .current_frame()
        .context("Nothing visible on the surface after the requested operations")?;

    let snapshot = viewer.surface().snapshot();
    info!(
        output = %args.output.display(),
        scale = viewer.scale(),
        resamples = viewer.resample_count(),
        "Saving surface snapshot"
    );
    snapshot
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    print_render_summary(&args.file, &args.output, &viewer.status(), viewer.crop_window());
    Ok(())
}
