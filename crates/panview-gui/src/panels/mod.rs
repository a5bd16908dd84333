pub mod controls;
pub mod menu_bar;
pub mod status;
pub mod viewport;

use std::sync::mpsc;

use panview_core::io::load_image;

use crate::messages::AppMessage;

pub(crate) fn section_header(ui: &mut egui::Ui, label: &str) {
    ui.horizontal(|ui| {
        ui.strong(label);
    });
}

/// Pick an image file and decode it off the UI thread.
pub(crate) fn open_image(msg_tx: mpsc::Sender<AppMessage>, ctx: egui::Context) {
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp"])
            .add_filter("All files", &["*"])
            .pick_file()
        else {
            return;
        };
        let msg = match load_image(&path) {
            Ok(image) => AppMessage::ImageLoaded { path, image },
            Err(e) => AppMessage::Error {
                message: format!("Failed to open {}: {e}", path.display()),
            },
        };
        let _ = msg_tx.send(msg);
        ctx.request_repaint();
    });
}
