//! Toast notifications
//!
//! Short-lived messages in the bottom-right corner that fade in and out.

use egui::{Align2, Color32, FontId, RichText, Rounding, Vec2};
use std::time::{Duration, Instant};

use crate::dashboard::theme::{color_with_alpha, ThemeColors};

const FADE_IN_SECS: f32 = 0.3;
const FADE_OUT_SECS: f32 = 0.5;
const MAX_TOASTS: usize = 3;

/// Visual style of a toast
#[derive(Debug, Clone)]
pub struct ToastStyle {
    /// Background color (RGBA)
    pub background: [f32; 4],
    /// Text color (RGBA)
    pub text_color: [f32; 4],
    /// Border radius
    pub corner_radius: f32,
    /// Padding
    pub padding: f32,
}

impl Default for ToastStyle {
    fn default() -> Self {
        Self {
            background: [0.1, 0.1, 0.1, 0.92],
            text_color: [1.0, 1.0, 1.0, 1.0],
            corner_radius: 8.0,
            padding: 12.0,
        }
    }
}

/// A toast with timing information for display
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub description: String,
    shown_at: Instant,
    expires_at: Instant,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>, duration: Duration) -> Self {
        Self::shown_at(title, description, duration, Instant::now())
    }

    fn shown_at(
        title: impl Into<String>,
        description: impl Into<String>,
        duration: Duration,
        shown_at: Instant,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            shown_at,
            expires_at: shown_at + duration,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now > self.expires_at
    }

    /// Opacity with fade-in/fade-out effects
    pub fn opacity(&self, now: Instant) -> f32 {
        let age = now.saturating_duration_since(self.shown_at).as_secs_f32();
        let fade_in = (age / FADE_IN_SECS).min(1.0);

        let remaining = self.expires_at.saturating_duration_since(now).as_secs_f32();
        let fade_out = (remaining / FADE_OUT_SECS).min(1.0);

        fade_in * fade_out
    }
}

/// Queue of visible toasts
#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
    style: ToastStyle,
}

impl Toasts {
    pub fn push(&mut self, toast: Toast) {
        self.items.push(toast);
        if self.items.len() > MAX_TOASTS {
            self.items.remove(0);
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop expired toasts
    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|toast| !toast.is_expired(now));
    }

    /// Draw the toasts and keep repainting while any are visible
    pub fn show(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        self.prune(now);
        if self.items.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(Align2::RIGHT_BOTTOM, Vec2::new(-20.0, -20.0))
            .show(ctx, |ui| {
                ui.set_max_width(320.0);
                for toast in &self.items {
                    draw_toast(ui, toast, &self.style, toast.opacity(now));
                    ui.add_space(8.0);
                }
            });

        ctx.request_repaint_after(Duration::from_millis(50));
    }
}

fn rgba(color: [f32; 4], opacity: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * opacity * 255.0) as u8,
    )
}

fn draw_toast(ui: &mut egui::Ui, toast: &Toast, style: &ToastStyle, opacity: f32) {
    let text_color = rgba(style.text_color, opacity);

    egui::Frame::none()
        .fill(rgba(style.background, opacity))
        .stroke(egui::Stroke::new(1.0, color_with_alpha(ThemeColors::BORDER, (opacity * 255.0) as u8)))
        .rounding(Rounding::same(style.corner_radius))
        .inner_margin(style.padding)
        .show(ui, |ui| {
            ui.label(
                RichText::new(&toast.title)
                    .color(text_color)
                    .font(FontId::proportional(15.0))
                    .strong(),
            );
            if !toast.description.is_empty() {
                ui.label(
                    RichText::new(&toast.description)
                        .color(text_color)
                        .font(FontId::proportional(13.0)),
                );
            }
        });
}
