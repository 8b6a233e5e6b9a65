//! Bible overlay editor

use egui::RichText;
use tracing::info;

use crate::dashboard::components::style_editor;
use crate::dashboard::theme::ThemeColors;
use crate::dashboard::views::{caption, section_frame, section_header};
use crate::editor::verse::{fetch_into, VerseFetcher};
use crate::editor::OverlayEditor;
use crate::overlay::{BibleOverlay, BibleVersion, OverlayKind};
use crate::shared::StoreError;

/// Where the preview paints the verse block
const PLACEMENT_CAPTION: &str = "Shown in the top-left corner of the stream";

/// Render the Bible editor section
pub fn render_bible_view(
    ui: &mut egui::Ui,
    editor: &OverlayEditor<BibleOverlay>,
    fetcher: &dyn VerseFetcher,
) -> Result<(), StoreError> {
    let mut draft = editor.load()?;

    let reset = section_frame(ui, |ui| {
        let bible = &mut draft.value;
        if section_header(ui, OverlayKind::Bible, &mut bible.enabled) {
            return true;
        }

        ui.horizontal(|ui| {
            ui.label("Verse");
            ui.add(
                egui::TextEdit::singleline(&mut bible.verse_reference)
                    .hint_text("e.g. John 3:16")
                    .desired_width(180.0),
            );

            egui::ComboBox::from_id_salt("bible_version")
                .selected_text(bible.version.name())
                .show_ui(ui, |ui| {
                    for version in BibleVersion::ALL {
                        ui.selectable_value(&mut bible.version, version, version.name());
                    }
                });

            let fetch = egui::Button::new(RichText::new("Fetch").color(ThemeColors::TEXT_PRIMARY))
                .fill(ThemeColors::ACCENT_PRIMARY);
            if ui.add_enabled(bible.has_reference(), fetch).clicked() && fetch_into(bible, fetcher) {
                info!("Fetched verse text for {}", bible.reference_label());
            }
        });

        ui.add_space(8.0);
        ui.label("Content");
        ui.add(
            egui::TextEdit::multiline(&mut bible.verse_content)
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );
        caption(ui, PLACEMENT_CAPTION);

        ui.add_space(12.0);
        ui.columns(2, |columns| {
            style_editor(&mut columns[0], "bible_reference", "Reference Style", &mut bible.reference_style);
            style_editor(&mut columns[1], "bible_content", "Content Style", &mut bible.content_style);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_caption_names_top_left() {
        assert!(PLACEMENT_CAPTION.contains("top-left"));
        assert!(!PLACEMENT_CAPTION.contains("bottom"));
    }
}
