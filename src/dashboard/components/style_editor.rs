//! Text style controls shared by every overlay editor

use egui::{RichText, Rounding};

use crate::dashboard::components::color_picker::color_picker;
use crate::dashboard::theme::ThemeColors;
use crate::overlay::style::{MAX_FONT_SIZE_PX, MIN_FONT_SIZE_PX};
use crate::overlay::TextStyle;

/// Font size, font color, background color and transparency for one text block
pub fn style_editor(ui: &mut egui::Ui, id_salt: &str, title: &str, style: &mut TextStyle) {
    egui::Frame::none()
        .fill(ThemeColors::BG_LIGHT)
        .rounding(Rounding::same(6.0))
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.label(RichText::new(title).size(13.0).color(ThemeColors::TEXT_SECONDARY).strong());
            ui.add_space(4.0);

            egui::Grid::new(("style_editor", id_salt))
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Font size");
                    font_size_stepper(ui, style);
                    ui.end_row();

                    ui.label("Font color");
                    color_picker(ui, (id_salt, "font"), &mut style.font_color, true);
                    ui.end_row();

                    ui.label("Background");
                    ui.vertical(|ui| {
                        let enabled = !style.transparent;
                        color_picker(ui, (id_salt, "background"), &mut style.background_color, enabled);
                        ui.checkbox(&mut style.transparent, "Transparent");
                    });
                    ui.end_row();
                });
        });
}

/// ▼ / value / ▲ stepper, always within the font size limits
pub fn font_size_stepper(ui: &mut egui::Ui, style: &mut TextStyle) {
    ui.horizontal(|ui| {
        let size = style.font_size_px();
        if ui
            .add_enabled(size > MIN_FONT_SIZE_PX, egui::Button::new("▼").small())
            .clicked()
        {
            style.step_font_size(-1);
        }

        let mut value = style.font_size_px() as i64;
        let response = ui.add(
            egui::DragValue::new(&mut value)
                .range(MIN_FONT_SIZE_PX as i64..=MAX_FONT_SIZE_PX as i64)
                .suffix(" px"),
        );
        if response.changed() {
            style.set_font_size_px(value);
        }

        if ui
            .add_enabled(style.font_size_px() < MAX_FONT_SIZE_PX, egui::Button::new("▲").small())
            .clicked()
        {
            style.step_font_size(1);
        }
    });
}
