use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use panview_core::io::load_image;
use panview_core::view::scale::fit_to_surface;
use panview_core::view::{resampled_size, ViewState, ZoomLimits};
use tracing::info;

use super::{load_config, parse_size};

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,

    /// Surface size used to compute the fit scale
    #[arg(long, default_value = "800x600", value_parser = parse_size)]
    pub surface: (u32, u32),

    /// Viewer config (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let image = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let limits = ZoomLimits::from_config(&config)?;
    let mut state = ViewState::new(args.surface.0, args.surface.1);
    fit_to_surface(&mut state, &limits, image.size());
    let (fw, fh) = resampled_size(image.size(), state.scale);
    info!(scale = state.scale, width = fw, height = fh, "Computed fit");

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", image.width(), image.height());
    println!("Surface:     {}x{}", args.surface.0, args.surface.1);
    println!("Fit scale:   x{:.2}", state.scale);
    println!("Fitted size: {}x{}", fw, fh);
    println!("Zoom range:  x{:.2} - x{:.2}", limits.min_level(), limits.max_level());

    Ok(())
}
