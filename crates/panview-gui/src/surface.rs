use panview_core::compositor::CompositedFrame;
use panview_core::{Point, Surface};

use crate::convert::frame_to_color_image;

/// Surface backed by an egui texture.
///
/// The latest frame is uploaded on `draw`; the viewport panel paints it each
/// egui frame at the position given by `frame_rect`.
pub struct EguiSurface {
    ctx: egui::Context,
    size: (u32, u32),
    origin: Point,
    texture: Option<egui::TextureHandle>,
    visible: bool,
    top_left: (f64, f64),
}

impl EguiSurface {
    pub fn new(ctx: &egui::Context, size: (u32, u32)) -> Self {
        Self {
            ctx: ctx.clone(),
            size,
            origin: Point::default(),
            texture: None,
            visible: false,
            top_left: (0.0, 0.0),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    /// Texture and its on-screen rectangle relative to the surface's top-left.
    pub fn frame_rect(&self) -> Option<(egui::TextureId, egui::Rect)> {
        if !self.visible {
            return None;
        }
        let texture = self.texture.as_ref()?;
        let [w, h] = texture.size();
        let x = (self.top_left.0 - self.origin.x as f64).floor() as f32;
        let y = (self.top_left.1 - self.origin.y as f64).floor() as f32;
        let rect = egui::Rect::from_min_size(egui::pos2(x, y), egui::vec2(w as f32, h as f32));
        Some((texture.id(), rect))
    }
}

impl Surface for EguiSurface {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn draw(&mut self, frame: &CompositedFrame) {
        let image = frame_to_color_image(frame.pixels());
        match &mut self.texture {
            Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
            None => {
                self.texture = Some(self.ctx.load_texture(
                    "viewport",
                    image,
                    egui::TextureOptions::NEAREST,
                ));
            }
        }
        self.top_left = frame.top_left();
        self.visible = true;
        self.ctx.request_repaint();
    }

    fn clear(&mut self) {
        self.visible = false;
    }

    fn scroll_by(&mut self, dx: i32, dy: i32) {
        self.origin.x += dx;
        self.origin.y += dy;
        self.ctx.request_repaint();
    }
}
