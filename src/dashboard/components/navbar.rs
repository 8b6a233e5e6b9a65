//! Top navigation bar

use egui::{Color32, RichText, Rounding, Sense, Vec2};
use std::time::Duration;
use tracing::info;

use crate::dashboard::components::toast::{Toast, Toasts};
use crate::dashboard::theme::{color_with_alpha, ThemeColors};

/// How long the "URL Copied" toast stays up
pub const COPY_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Render the navbar: title, tagline and the copy-overlay-URL button
pub fn render_navbar(ui: &mut egui::Ui, overlay_url: &str, toasts: &mut Toasts) {
    ui.horizontal(|ui| {
        ui.add_space(8.0);
        ui.label(
            RichText::new("OVERLAY STUDIO")
                .size(20.0)
                .color(ThemeColors::ACCENT_PRIMARY)
                .strong(),
        );
        ui.add_space(8.0);
        ui.label(
            RichText::new("Manage Your Overlays")
                .size(13.0)
                .color(ThemeColors::TEXT_MUTED),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(8.0);
            let response = icon_button(ui, "⎘").on_hover_text("Copy overlay URL");
            if response.clicked() {
                ui.ctx().copy_text(overlay_url.to_string());
                info!("Copied overlay URL to clipboard");
                toasts.push(Toast::new(
                    "URL Copied",
                    "Overlay URL has been copied to clipboard",
                    COPY_TOAST_DURATION,
                ));
            }
            ui.label(
                RichText::new(overlay_url)
                    .size(12.0)
                    .monospace()
                    .color(ThemeColors::TEXT_SECONDARY),
            );
        });
    });
}

/// Square ghost button with a single glyph
fn icon_button(ui: &mut egui::Ui, icon: &str) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(32.0), Sense::click());

    if ui.is_rect_visible(rect) {
        let bg_color = if response.is_pointer_button_down_on() {
            color_with_alpha(ThemeColors::ACCENT_PRIMARY, 51) // ~0.2 alpha
        } else if response.hovered() {
            ThemeColors::BG_HOVER
        } else {
            Color32::TRANSPARENT
        };
        let text_color = if response.hovered() {
            ThemeColors::TEXT_PRIMARY
        } else {
            ThemeColors::TEXT_SECONDARY
        };

        ui.painter().rect_filled(rect, Rounding::same(6.0), bg_color);
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(18.0),
            text_color,
        );
    }

    response
}
