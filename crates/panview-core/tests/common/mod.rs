#![allow(dead_code)]

use image::{Rgba, RgbaImage};

use panview_core::{OffscreenSurface, SourceImage, Viewer, ViewerConfig};

pub const BACKGROUND: [u8; 3] = [0x99, 0x99, 0x99];

/// Image whose pixels encode their own coordinates (mod 256).
pub fn gradient_image(width: u32, height: u32) -> SourceImage {
    SourceImage::new(RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    }))
}

pub fn solid_image(width: u32, height: u32, rgba: [u8; 4]) -> SourceImage {
    SourceImage::filled(width, height, rgba)
}

/// Viewer over an off-screen surface, constructed with the image at 1:1.
pub fn viewer_with(
    surface: (u32, u32),
    image: Option<SourceImage>,
    config: ViewerConfig,
) -> Viewer<OffscreenSurface> {
    let surface = OffscreenSurface::new(surface.0, surface.1, BACKGROUND);
    Viewer::new(surface, image, config).expect("valid default config")
}

pub fn viewer(surface: (u32, u32), image: Option<SourceImage>) -> Viewer<OffscreenSurface> {
    viewer_with(surface, image, ViewerConfig::default())
}

/// Check the crop of the frame on screen lies inside the resampled bitmap.
pub fn assert_crop_in_bounds(viewer: &Viewer<OffscreenSurface>) {
    let Some(crop) = viewer.crop_window() else {
        return;
    };
    let (rw, rh) = viewer.resampled_size().expect("frame implies image");
    assert!(crop.left < crop.right, "empty width: {crop:?}");
    assert!(crop.top < crop.bottom, "empty height: {crop:?}");
    assert!(crop.right <= rw && crop.bottom <= rh, "{crop:?} outside {rw}x{rh}");
}
