use crate::app::PanviewApp;

pub fn show(ctx: &egui::Context, app: &mut PanviewApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 3 lines.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if let Some((w, h)) = app.viewer.source_size() {
                ui.label(format!("{w}x{h}"));
                ui.separator();
            }
            ui.label(format!("Zoom: {:.0}%", app.viewer.scale() * 100.0));
            ui.separator();
            ui.label(format!("Filter: {}", app.viewer.quality()));
        });

        ui.add_space(2.0);
    });
}
