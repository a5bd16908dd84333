use std::sync::mpsc;

use panview_core::{Surface, Viewer, ViewerConfig};

use crate::messages::AppMessage;
use crate::panels;
use crate::state::UIState;
use crate::surface::EguiSurface;

pub struct PanviewApp {
    pub msg_tx: mpsc::Sender<AppMessage>,
    pub msg_rx: mpsc::Receiver<AppMessage>,
    pub viewer: Viewer<EguiSurface>,
    pub ui_state: UIState,
    ctx: egui::Context,
}

impl PanviewApp {
    pub fn new(ctx: &egui::Context) -> panview_core::Result<Self> {
        let (msg_tx, msg_rx) = mpsc::channel();
        let viewer = Viewer::new(EguiSurface::new(ctx, (1, 1)), None, ViewerConfig::default())?;

        Ok(Self {
            msg_tx,
            msg_rx,
            viewer,
            ui_state: UIState::default(),
            ctx: ctx.clone(),
        })
    }

    /// Drain all pending messages from loader threads.
    fn poll_messages(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            match msg {
                AppMessage::ImageLoaded { path, image } => {
                    self.ui_state.add_log(format!(
                        "Opened: {} ({}x{})",
                        path.display(),
                        image.width(),
                        image.height()
                    ));
                    self.ui_state.file_path = Some(path);
                    self.viewer.set_image(Some(image));
                }
                AppMessage::ConfigImported { path, config } => {
                    self.apply_config(config);
                    self.ui_state
                        .add_log(format!("Config imported: {}", path.display()));
                }
                AppMessage::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    /// Rebuild the viewer with new construction-time settings, keeping the
    /// current image.
    fn apply_config(&mut self, config: ViewerConfig) {
        let size = self.viewer.surface().size();
        let image = self.viewer.image().cloned();
        match Viewer::new(EguiSurface::new(&self.ctx, size), None, config) {
            Ok(mut viewer) => {
                viewer.set_image(image);
                self.viewer = viewer;
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }
}

impl eframe::App for PanviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_messages();

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);

        // About dialog
        if self.ui_state.show_about {
            egui::Window::new("About Panview")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Panview");
                        ui.label("Pan and zoom image viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}
