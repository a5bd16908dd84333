use panview_core::ResampleQuality;

use crate::app::PanviewApp;
use crate::panels::{open_image, section_header};

const LEFT_PANEL_WIDTH: f32 = 220.0;

pub fn show(ctx: &egui::Context, app: &mut PanviewApp) {
    handle_shortcuts(ctx, app);

    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

            view_section(ui, app);
            ui.separator();
            filter_section(ui, app);
            ui.separator();
            file_section(ui, app, ctx);
            ui.separator();
            status_section(ui, app);
        });
}

fn handle_shortcuts(ctx: &egui::Context, app: &mut PanviewApp) {
    let reset = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::R);
    if ctx.input_mut(|i| i.consume_shortcut(&reset)) {
        app.viewer.reset_to_fit();
    }
    if ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Num1)) {
        app.viewer.reset_zoom();
    }
}

fn view_section(ui: &mut egui::Ui, app: &mut PanviewApp) {
    section_header(ui, "View");
    ui.add_space(4.0);

    let loaded = app.viewer.image_loaded();
    ui.horizontal(|ui| {
        let reset = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::R);
        let button = egui::Button::new("Reset Preview").shortcut_text(ui.ctx().format_shortcut(&reset));
        if ui.add_enabled(loaded, button).clicked() {
            app.viewer.reset_to_fit();
        }
        if ui
            .add_enabled(loaded, egui::Button::new("x1.0"))
            .on_hover_text("Actual size (1)")
            .clicked()
        {
            app.viewer.reset_zoom();
        }
    });
}

fn filter_section(ui: &mut egui::Ui, app: &mut PanviewApp) {
    section_header(ui, "Filter");
    ui.add_space(4.0);

    let current = app.viewer.quality();
    let mut selected = current;
    egui::ComboBox::from_id_salt("resample_quality")
        .selected_text(selected.to_string())
        .show_ui(ui, |ui| {
            for &q in ResampleQuality::ALL {
                ui.selectable_value(&mut selected, q, format!("{} - {q}", q.level()));
            }
        });
    if selected != current {
        app.viewer.set_resample_quality(selected);
    }
}

fn file_section(ui: &mut egui::Ui, app: &mut PanviewApp, ctx: &egui::Context) {
    section_header(ui, "File");
    ui.add_space(4.0);

    if ui.button("Load Image...").clicked() {
        open_image(app.msg_tx.clone(), ctx.clone());
    }
    if let Some(ref path) = app.ui_state.file_path {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        ui.small(name);
    }
}

fn status_section(ui: &mut egui::Ui, app: &PanviewApp) {
    section_header(ui, "Status");
    ui.add_space(4.0);
    ui.label(egui::RichText::new(app.viewer.status().to_string()).monospace());
}
