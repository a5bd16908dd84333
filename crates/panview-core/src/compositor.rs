use image::{imageops, RgbaImage};
use tracing::trace;

use crate::view::{CropRect, Point, ViewWindow};

/// The crop currently shown on the surface.
///
/// A new frame is built on every redraw; frames are never patched in place.
#[derive(Clone, Debug)]
pub struct CompositedFrame {
    pixels: RgbaImage,
    crop: CropRect,
    center_x: f64,
    center_y: f64,
}

impl CompositedFrame {
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Where the pixels came from in the resampled bitmap.
    pub fn crop(&self) -> CropRect {
        self.crop
    }

    /// Centre of the frame in scroll coordinates.
    pub fn center(&self) -> (f64, f64) {
        (self.center_x, self.center_y)
    }

    /// Top-left corner in scroll coordinates.
    pub fn top_left(&self) -> (f64, f64) {
        (
            self.center_x - self.pixels.width() as f64 / 2.0,
            self.center_y - self.pixels.height() as f64 / 2.0,
        )
    }

    /// Top-left corner in surface pixels for a surface scrolled to `origin`.
    pub fn surface_position(&self, origin: Point) -> (f64, f64) {
        let (x, y) = self.top_left();
        (x - origin.x as f64, y - origin.y as f64)
    }
}

/// Cut the visible window out of the resampled bitmap.
pub fn compose(bitmap: &RgbaImage, window: &ViewWindow) -> CompositedFrame {
    let crop = window.crop;
    let pixels = imageops::crop_imm(bitmap, crop.left, crop.top, crop.width(), crop.height())
        .to_image();
    trace!(
        left = crop.left,
        top = crop.top,
        right = crop.right,
        bottom = crop.bottom,
        "Composited frame"
    );
    CompositedFrame {
        pixels,
        crop,
        center_x: window.center_x,
        center_y: window.center_y,
    }
}
