//! Color picker with a swatch palette and hex input

use egui::{Rounding, Sense, Stroke, Vec2};

use crate::dashboard::theme::{contrast_text, hex_color32, ThemeColors};
use crate::overlay::HexColor;

/// Palette offered by every color picker
pub const PALETTE: [&str; 18] = [
    "#000000", "#FFFFFF", "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#00FFFF", "#FF00FF",
    "#C0C0C0", "#808080", "#800000", "#808000", "#008000", "#800080", "#008080", "#000080",
    "#FFA500", "#A52A2A",
];

const SWATCH_SIZE: f32 = 20.0;
const SWATCHES_PER_ROW: usize = 6;

/// Swatch button that expands into a palette and hex field.
///
/// Returns true when `color` changed.
pub fn color_picker(ui: &mut egui::Ui, id_salt: impl std::hash::Hash, color: &mut HexColor, enabled: bool) -> bool {
    let id = ui.make_persistent_id(id_salt);
    let mut open = ui.data(|d| d.get_temp::<bool>(id).unwrap_or(false));
    let mut changed = false;

    ui.add_enabled_ui(enabled, |ui| {
        ui.horizontal(|ui| {
            let response = swatch(ui, color, open);
            if response.clicked() {
                open = !open;
            }
            ui.label(egui::RichText::new(color.as_str()).monospace().size(12.0).color(ThemeColors::TEXT_SECONDARY));
        });

        if open && enabled {
            egui::Frame::none()
                .fill(ThemeColors::BG_LIGHT)
                .rounding(Rounding::same(6.0))
                .inner_margin(8.0)
                .show(ui, |ui| {
                    egui::Grid::new(id.with("palette"))
                        .spacing(Vec2::splat(4.0))
                        .show(ui, |ui| {
                            for (i, hex) in PALETTE.into_iter().enumerate() {
                                let candidate = HexColor::from_static(hex);
                                if swatch(ui, &candidate, candidate == *color).clicked() {
                                    *color = candidate;
                                    changed = true;
                                }
                                if (i + 1) % SWATCHES_PER_ROW == 0 {
                                    ui.end_row();
                                }
                            }
                        });

                    ui.add_space(6.0);
                    let buffer_id = id.with("hex");
                    let mut buffer = ui.data(|d| d.get_temp::<String>(buffer_id))
                        .unwrap_or_else(|| color.to_string());
                    ui.horizontal(|ui| {
                        ui.label("Hex");
                        let response = ui.add(egui::TextEdit::singleline(&mut buffer).desired_width(80.0));
                        if response.changed() {
                            if let Some(parsed) = HexColor::parse(&buffer) {
                                *color = parsed;
                                changed = true;
                            }
                        }
                        if !response.has_focus() && HexColor::parse(&buffer).as_ref() != Some(&*color) {
                            buffer = color.to_string();
                        }
                    });
                    ui.data_mut(|d| d.insert_temp(buffer_id, buffer));
                });
        }
    });

    ui.data_mut(|d| d.insert_temp(id, open && enabled));
    changed
}

/// A filled square showing `color`
fn swatch(ui: &mut egui::Ui, color: &HexColor, selected: bool) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(SWATCH_SIZE), Sense::click());
    if ui.is_rect_visible(rect) {
        let fill = hex_color32(color);
        let stroke = if selected {
            Stroke::new(2.0, ThemeColors::ACCENT_PRIMARY)
        } else if response.hovered() {
            Stroke::new(1.0, contrast_text(fill))
        } else {
            Stroke::new(1.0, ThemeColors::BORDER)
        };
        ui.painter().rect_filled(rect, Rounding::same(4.0), fill);
        ui.painter().rect_stroke(rect, Rounding::same(4.0), stroke);
    }
    response.on_hover_text(color.as_str())
}
