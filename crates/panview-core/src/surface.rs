use image::{imageops, Rgba, RgbaImage};

use crate::compositor::CompositedFrame;
use crate::view::Point;

/// Drawing services the host provides to the viewer.
///
/// Frames are positioned in scroll coordinates; the surface keeps its own
/// scroll origin in sync through `scroll_by` and maps frames to screen space.
pub trait Surface {
    /// Current drawable size in pixels.
    fn size(&self) -> (u32, u32);

    /// Show `frame`, replacing whatever was drawn before.
    fn draw(&mut self, frame: &CompositedFrame);

    /// Remove the displayed frame, leaving only the background.
    fn clear(&mut self);

    /// Move the scroll origin by a delta without redrawing.
    fn scroll_by(&mut self, dx: i32, dy: i32);
}

/// In-memory surface that can be rasterised to an image. Used by the headless
/// CLI and by tests.
#[derive(Clone, Debug)]
pub struct OffscreenSurface {
    width: u32,
    height: u32,
    background: [u8; 3],
    origin: Point,
    frame: Option<CompositedFrame>,
    draw_count: usize,
}

impl OffscreenSurface {
    pub fn new(width: u32, height: u32, background: [u8; 3]) -> Self {
        Self {
            width,
            height,
            background,
            origin: Point::default(),
            frame: None,
            draw_count: 0,
        }
    }

    /// Change the surface size. The viewer must be told separately through
    /// `on_surface_resize`.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn frame(&self) -> Option<&CompositedFrame> {
        self.frame.as_ref()
    }

    /// Number of frames drawn since creation.
    pub fn draw_count(&self) -> usize {
        self.draw_count
    }

    /// Rasterise the background and current frame.
    pub fn snapshot(&self) -> RgbaImage {
        let [r, g, b] = self.background;
        let mut canvas = RgbaImage::from_pixel(self.width, self.height, Rgba([r, g, b, 255]));
        if let Some(frame) = &self.frame {
            let (x, y) = frame.surface_position(self.origin);
            imageops::overlay(&mut canvas, frame.pixels(), x.floor() as i64, y.floor() as i64);
        }
        canvas
    }
}

impl Surface for OffscreenSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw(&mut self, frame: &CompositedFrame) {
        self.frame = Some(frame.clone());
        self.draw_count += 1;
    }

    fn clear(&mut self) {
        self.frame = None;
    }

    fn scroll_by(&mut self, dx: i32, dy: i32) {
        self.origin.x += dx;
        self.origin.y += dy;
    }
}
