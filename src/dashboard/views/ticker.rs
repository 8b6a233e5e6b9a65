//! Ticker overlay editor

use crate::dashboard::components::{scroll_slider, style_editor};
use crate::dashboard::views::{caption, section_frame, section_header};
use crate::editor::OverlayEditor;
use crate::overlay::ticker::{MAX_SCROLL_SPEED, MIN_SCROLL_SPEED};
use crate::overlay::{OverlayKind, TickerOverlay};
use crate::preview::ticker::PIXELS_PER_SPEED_STEP;
use crate::shared::StoreError;

pub fn render_ticker_view(
    ui: &mut egui::Ui,
    editor: &OverlayEditor<TickerOverlay>,
) -> Result<(), StoreError> {
    let mut draft = editor.load()?;

    let reset = section_frame(ui, |ui| {
        let ticker = &mut draft.value;
        if section_header(ui, OverlayKind::Ticker, &mut ticker.enabled) {
            return true;
        }

        ui.horizontal(|ui| {
            ui.label("Title");
            ui.add(egui::TextEdit::singleline(&mut ticker.ticker_title).desired_width(200.0));
            ui.checkbox(&mut ticker.title_blink, "Blink title");
        });

        ui.add_space(8.0);
        ui.label("Content");
        ui.add(
            egui::TextEdit::multiline(&mut ticker.ticker_content)
                .desired_rows(2)
                .desired_width(f32::INFINITY),
        );

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label("Scroll speed");
            let mut speed = ticker.scroll_speed();
            if scroll_slider(ui, &mut speed, MIN_SCROLL_SPEED..=MAX_SCROLL_SPEED, 1, "").changed() {
                ticker.set_scroll_speed(speed as i64);
            }
        });
        caption(ui, &speed_caption(ticker.scroll_speed()));

        ui.add_space(12.0);
        ui.columns(2, |columns| {
            style_editor(&mut columns[0], "ticker_title", "Title Style", &mut ticker.title_style);
            style_editor(&mut columns[1], "ticker_content", "Content Style", &mut ticker.content_style);
        });
        false
    });

    if reset {
        editor.reset()?;
    } else {
        editor.commit(draft)?;
    }
    Ok(())
}

/// How far the content moves each frame at `speed`
fn speed_caption(speed: u32) -> String {
    format!("Moves {} px per frame at 60 fps", speed as f32 * PIXELS_PER_SPEED_STEP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_caption_uses_half_pixel_steps() {
        assert_eq!(speed_caption(5), "Moves 2.5 px per frame at 60 fps");
        assert_eq!(speed_caption(2), "Moves 1 px per frame at 60 fps");
        assert_eq!(speed_caption(MAX_SCROLL_SPEED), "Moves 5 px per frame at 60 fps");
    }
}
