use panview_core::{Point, Surface, WheelDirection};

use crate::app::PanviewApp;
use crate::convert::background_color;

pub fn show(ctx: &egui::Context, app: &mut PanviewApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            sync_surface_size(app, rect);

            let background = background_color(app.viewer.config().background_rgb().ok());
            ui.painter().rect_filled(rect, 0.0, background);

            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
            handle_wheel(ui, &response, app, rect);
            handle_drag(&response, app, rect);

            if response.double_clicked() {
                app.viewer.reset_to_fit();
            }

            if let Some((texture_id, frame_rect)) = app.viewer.surface().frame_rect() {
                let img_rect = frame_rect.translate(rect.min.to_vec2());
                let painter = ui.painter_at(rect);
                painter.image(
                    texture_id,
                    img_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            } else if !app.viewer.image_loaded() {
                show_placeholder(ui, rect);
            }
        });
}

fn sync_surface_size(app: &mut PanviewApp, rect: egui::Rect) {
    let width = rect.width().max(1.0) as u32;
    let height = rect.height().max(1.0) as u32;
    if app.viewer.surface().size() != (width, height) {
        app.viewer.surface_mut().resize(width, height);
        app.viewer.on_surface_resize(width, height);
    }
}

/// Pointer position relative to the surface's top-left corner.
fn surface_point(pos: egui::Pos2, rect: egui::Rect) -> Point {
    let local = pos - rect.min;
    Point::new(local.x.round() as i32, local.y.round() as i32)
}

fn handle_wheel(ui: &egui::Ui, response: &egui::Response, app: &mut PanviewApp, rect: egui::Rect) {
    if !response.hovered() {
        return;
    }
    let delta = ui.input(|i| i.raw_scroll_delta.y);
    if delta == 0.0 {
        return;
    }
    if let Some(direction) = WheelDirection::from_delta(delta) {
        let pointer = response.hover_pos().map(|pos| surface_point(pos, rect));
        app.viewer.on_wheel(direction, pointer);
    }
}

fn handle_drag(response: &egui::Response, app: &mut PanviewApp, rect: egui::Rect) {
    if response.drag_started_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            app.viewer.on_drag_start(surface_point(pos, rect));
        }
    }
    if response.dragged_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            app.viewer.on_drag_move(surface_point(pos, rect));
        }
    }
    if response.drag_stopped() {
        app.viewer.on_drag_release();
    }
}

fn show_placeholder(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "Open an image to begin",
        egui::FontId::proportional(18.0),
        egui::Color32::from_gray(60),
    );
}
