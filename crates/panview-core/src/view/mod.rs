pub mod clamp;
pub mod scale;

pub use clamp::{CropRect, Margins, ViewWindow};
pub use scale::ZoomLimits;

/// A position in surface pixels, as reported by the host's pointer events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Everything the viewer mutates in response to input.
///
/// `pan_x`/`pan_y` is the scroll origin: the surface's top-left corner in
/// scroll coordinates, where `(0, 0)` is the unpanned position.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub scale: f64,
    /// Cached resampled bitmap no longer matches `scale` or the filter.
    pub scale_dirty: bool,
    pub pan_x: i32,
    pub pan_y: i32,
    pub surface_width: u32,
    pub surface_height: u32,
}

impl ViewState {
    pub fn new(surface_width: u32, surface_height: u32) -> Self {
        Self {
            scale: 1.0,
            scale_dirty: true,
            pan_x: 0,
            pan_y: 0,
            surface_width,
            surface_height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.pan_x, self.pan_y)
    }

    pub fn surface_size(&self) -> (u32, u32) {
        (self.surface_width, self.surface_height)
    }
}

/// Size of the source image once scaled, never smaller than 1x1.
pub fn resampled_size(source: (u32, u32), scale: f64) -> (u32, u32) {
    let axis = |len: u32| ((len as f64 * scale).round() as u32).max(1);
    (axis(source.0), axis(source.1))
}
