use std::path::Path;

use image::ImageFormat;
use tracing::info;

use crate::compositor::CompositedFrame;
use crate::error::Result;
use crate::source::SourceImage;

/// Decode an image file into a `SourceImage`. Any format the `image` crate
/// recognises is accepted.
pub fn load_image(path: &Path) -> Result<SourceImage> {
    let img = image::open(path)?;
    info!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "Loaded image"
    );
    Ok(SourceImage::from(img))
}

/// Save the cropped pixels of a composited frame as PNG.
pub fn save_frame(frame: &CompositedFrame, path: &Path) -> Result<()> {
    frame.pixels().save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
