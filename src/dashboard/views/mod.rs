//! Dashboard views, one editor section per overlay

pub mod bible;
pub mod image;
pub mod lyrics;
pub mod presenter;
pub mod ticker;

pub use bible::render_bible_view;
pub use image::render_image_view;
pub use lyrics::render_lyrics_view;
pub use presenter::render_presenter_view;
pub use ticker::render_ticker_view;

use egui::{RichText, Rounding};

use crate::dashboard::theme::ThemeColors;
use crate::overlay::OverlayKind;

/// Card frame every editor section is drawn in
pub(crate) fn section_frame<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::none()
        .fill(ThemeColors::BG_MEDIUM)
        .rounding(Rounding::same(8.0))
        .inner_margin(16.0)
        .show(ui, add_contents)
        .inner
}

/// Heading, enabled switch and Reset button.
///
/// Returns true when Reset was clicked.
pub(crate) fn section_header(ui: &mut egui::Ui, kind: OverlayKind, enabled: &mut bool) -> bool {
    let mut reset = false;
    ui.horizontal(|ui| {
        ui.label(RichText::new(kind.icon()).size(18.0).color(ThemeColors::ACCENT_PRIMARY));
        ui.heading(RichText::new(format!("{} Overlay", kind.label())).size(18.0).strong());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Reset").on_hover_text("Restore defaults").clicked() {
                reset = true;
            }
            ui.add_space(8.0);
            let (status, color) = if *enabled {
                ("Enabled", ThemeColors::ACCENT_SUCCESS)
            } else {
                ("Disabled", ThemeColors::TEXT_MUTED)
            };
            ui.checkbox(enabled, RichText::new(status).color(color));
        });
    });
    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);
    reset
}

/// Muted caption under a heading or field
pub(crate) fn caption(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).size(12.0).color(ThemeColors::TEXT_MUTED));
}
