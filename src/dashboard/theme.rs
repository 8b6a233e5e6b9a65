//! Dashboard theme and styling
//!
//! Slate and violet control-room theme, plus conversion of overlay colors
//! into egui colors.

use egui::style::WidgetVisuals;
use egui::{Color32, FontFamily, FontId, Rounding, Stroke, TextStyle, Visuals};

use crate::overlay::HexColor;

const WIDGET_ROUNDING: f32 = 5.0;

/// Control-room palette
pub struct ThemeColors;

impl ThemeColors {
    pub const BG_DARK: Color32 = Color32::from_rgb(15, 17, 23);
    pub const BG_MEDIUM: Color32 = Color32::from_rgb(24, 27, 36);
    pub const BG_LIGHT: Color32 = Color32::from_rgb(34, 38, 50);
    pub const BG_HOVER: Color32 = Color32::from_rgb(45, 50, 66);

    pub const ACCENT_PRIMARY: Color32 = Color32::from_rgb(124, 92, 246);
    pub const ACCENT_SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
    pub const ACCENT_WARNING: Color32 = Color32::from_rgb(245, 158, 11);
    pub const ACCENT_ERROR: Color32 = Color32::from_rgb(239, 68, 68);

    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(241, 245, 249);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(148, 163, 184);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(100, 116, 139);

    pub const BORDER: Color32 = Color32::from_rgb(51, 65, 85);
    pub const BORDER_FOCUS: Color32 = Color32::from_rgb(167, 139, 250);

    /// Behind the preview canvas, where the stream video would be
    pub const CANVAS_BACKDROP: Color32 = Color32::from_rgb(8, 9, 12);
}

/// Widget look for one interaction state
fn widget_visuals(fill: Color32, text: Color32, border: Stroke) -> WidgetVisuals {
    WidgetVisuals {
        bg_fill: fill,
        weak_bg_fill: fill,
        bg_stroke: border,
        fg_stroke: Stroke::new(1.0, text),
        rounding: Rounding::same(WIDGET_ROUNDING),
        expansion: 0.0,
    }
}

/// Apply the studio theme to egui
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    let mut visuals = Visuals::dark();

    visuals.panel_fill = ThemeColors::BG_DARK;
    visuals.window_fill = ThemeColors::BG_MEDIUM;
    visuals.faint_bg_color = ThemeColors::BG_LIGHT;
    // Text fields and slider rails
    visuals.extreme_bg_color = ThemeColors::BG_DARK;

    let border = Stroke::new(1.0, ThemeColors::BORDER);
    visuals.widgets.noninteractive =
        widget_visuals(ThemeColors::BG_MEDIUM, ThemeColors::TEXT_SECONDARY, Stroke::new(1.0, ThemeColors::BG_LIGHT));
    visuals.widgets.inactive = widget_visuals(ThemeColors::BG_LIGHT, ThemeColors::TEXT_PRIMARY, border);
    visuals.widgets.hovered = widget_visuals(
        ThemeColors::BG_HOVER,
        ThemeColors::TEXT_PRIMARY,
        Stroke::new(1.0, ThemeColors::BORDER_FOCUS),
    );
    visuals.widgets.active = widget_visuals(ThemeColors::ACCENT_PRIMARY, ThemeColors::TEXT_PRIMARY, Stroke::NONE);
    visuals.widgets.open = widget_visuals(ThemeColors::BG_HOVER, ThemeColors::TEXT_PRIMARY, border);

    visuals.selection.bg_fill = color_with_alpha(ThemeColors::ACCENT_PRIMARY, 90);
    visuals.selection.stroke = Stroke::new(1.0, ThemeColors::BORDER_FOCUS);
    visuals.hyperlink_color = ThemeColors::BORDER_FOCUS;

    // Dialogs (manage songs) and popups (combo boxes, color palettes)
    visuals.window_rounding = Rounding::same(10.0);
    visuals.window_stroke = border;
    visuals.window_shadow.blur = 12.0;
    visuals.popup_shadow.blur = 6.0;
    visuals.menu_rounding = Rounding::same(WIDGET_ROUNDING);

    style.visuals = visuals;

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);
    style.spacing.slider_width = 180.0;
    style.spacing.window_margin = egui::Margin::same(14.0);

    style.text_styles = [
        (TextStyle::Small, FontId::new(12.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(14.5, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(13.5, FontFamily::Monospace)),
        (TextStyle::Button, FontId::new(14.5, FontFamily::Proportional)),
        (TextStyle::Heading, FontId::new(20.0, FontFamily::Proportional)),
    ]
    .into();

    ctx.set_style(style);
}

/// Helper to create a color with modified alpha
pub fn color_with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Opaque egui color for an overlay color
pub fn hex_color32(color: &HexColor) -> Color32 {
    let (r, g, b) = color.rgb();
    Color32::from_rgb(r, g, b)
}

/// Black or white, whichever reads better on `background`
pub fn contrast_text(background: Color32) -> Color32 {
    let luma = 0.299 * background.r() as f32
        + 0.587 * background.g() as f32
        + 0.114 * background.b() as f32;
    if luma > 140.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}
