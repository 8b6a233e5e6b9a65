//! Presenter overlay editor

use crate::dashboard::components::style_editor;
use crate::dashboard::views::{section_frame, section_header};
use crate::editor::OverlayEditor;
use crate::overlay::{OverlayKind, PresenterOverlay};
use crate::shared::StoreError;

pub fn render_presenter_view(
    ui: &mut egui::Ui,
    editor: &OverlayEditor<PresenterOverlay>,
) -> Result<(), StoreError> {
    let mut draft = editor.load()?;

    let reset = section_frame(ui, |ui| {
        let presenter = &mut draft.value;
        if section_header(ui, OverlayKind::Presenter, &mut presenter.enabled) {
            return true;
        }

        egui::Grid::new("presenter_fields")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Title");
                ui.add(egui::TextEdit::singleline(&mut presenter.presenter_title).desired_width(240.0));
                ui.end_row();

                ui.label("Name");
                ui.add(egui::TextEdit::singleline(&mut presenter.presenter_name).desired_width(240.0));
                ui.end_row();
            });

        ui.add_space(12.0);
        ui.columns(2, |columns| {
            style_editor(&mut columns[0], "presenter_title", "Title Style", &mut presenter.title_style);
            style_editor(&mut columns[1], "presenter_name", "Name Style", &mut presenter.name_style);
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
