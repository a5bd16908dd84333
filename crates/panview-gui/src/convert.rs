use image::RgbaImage;

/// Convert a composited RGBA frame to an egui ColorImage.
pub fn frame_to_color_image(pixels: &RgbaImage) -> egui::ColorImage {
    let (w, h) = pixels.dimensions();
    egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], pixels.as_raw())
}

/// Viewer background as an egui colour; neutral grey if it was unparseable.
pub fn background_color(rgb: Option<[u8; 3]>) -> egui::Color32 {
    let [r, g, b] = rgb.unwrap_or([0x99, 0x99, 0x99]);
    egui::Color32::from_rgb(r, g, b)
}
