//! Image overlay editor

use egui::{Color32, RichText, Rounding, Stroke};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

use crate::config::ImagesConfig;
use crate::dashboard::components::scroll_slider;
use crate::dashboard::state::{ImageViewState, PendingImage};
use crate::dashboard::theme::{color_with_alpha, ThemeColors};
use crate::dashboard::views::{caption, section_frame, section_header};
use crate::editor::OverlayEditor;
use crate::media::{ImageHandle, ImageLibrary, MediaError};
use crate::overlay::image::{MAX_IMAGE_SIZE_PERCENT, MIN_IMAGE_SIZE_PERCENT};
use crate::overlay::{ImageOverlay, OverlayKind};
use crate::shared::StoreError;

/// Render the image editor section
pub fn render_image_view(
    ui: &mut egui::Ui,
    view_state: &mut ImageViewState,
    editor: &OverlayEditor<ImageOverlay>,
    library: &mut ImageLibrary,
    images: &ImagesConfig,
) -> Result<(), StoreError> {
    let mut draft = editor.load()?;
    let limit = images.limit();

    let reset = section_frame(ui, |ui| {
        let overlay = &mut draft.value;
        if section_header(ui, OverlayKind::Image, &mut overlay.enabled) {
            return true;
        }
        caption(ui, &format!("Add up to {} images to your stream", limit.max_images));
        ui.add_space(8.0);

        render_file_chooser(ui, view_state, library);

        ui.add_space(8.0);
        let has_file = view_state.pending.is_some();
        ui.horizontal(|ui| {
            ui.label("Size");
            ui.add_enabled_ui(has_file, |ui| {
                scroll_slider(
                    ui,
                    &mut view_state.size_percent,
                    MIN_IMAGE_SIZE_PERCENT..=MAX_IMAGE_SIZE_PERCENT,
                    10,
                    "%",
                );
            });

            let full = limit.enforce && overlay.is_full(limit);
            let add = egui::Button::new(RichText::new("Add").color(ThemeColors::TEXT_PRIMARY))
                .fill(ThemeColors::ACCENT_PRIMARY);
            let response = ui.add_enabled(has_file && !full, add);
            if response.clicked() {
                if let Some(pending) = &view_state.pending {
                    match overlay.add_image(pending.handle, view_state.size_percent, limit) {
                        Ok(id) => {
                            info!("Placed '{}' as image {}", pending.name, id);
                            view_state.last_error = None;
                        }
                        Err(e) => {
                            warn!("Could not add image: {}", e);
                            view_state.last_error = Some(e.to_string());
                        }
                    }
                }
            }
            if full {
                response.on_disabled_hover_text(MediaError::LimitReached { max: limit.max_images }.to_string());
            }
        });

        if !limit.enforce && overlay.images.len() > limit.max_images {
            ui.label(
                RichText::new(format!("{} images placed, over the limit of {}", overlay.images.len(), limit.max_images))
                    .size(12.0)
                    .color(ThemeColors::ACCENT_WARNING),
            );
        }
        if let Some(error) = &view_state.last_error {
            ui.label(RichText::new(error).size(12.0).color(ThemeColors::ACCENT_ERROR));
        }

        ui.add_space(12.0);
        render_image_list(ui, overlay);

        ui.add_space(8.0);
        caption(
            ui,
            "Drag and drop images directly in the preview canvas to position them exactly where you want.",
        );
        false
    });

    if reset {
        editor.reset()?;
        view_state.reset(images.default_size());
    } else {
        editor.commit(draft)?;
    }

    let overlay = editor.context().get::<ImageOverlay>()?;
    release_unused(library, &overlay, view_state.pending.as_ref());
    Ok(())
}

/// Drop zone, path field and the chosen file's name
fn render_file_chooser(ui: &mut egui::Ui, view_state: &mut ImageViewState, library: &mut ImageLibrary) {
    let stroke = if view_state.drop_hover {
        Stroke::new(2.0, ThemeColors::ACCENT_PRIMARY)
    } else {
        Stroke::new(1.0, ThemeColors::BORDER)
    };
    let fill = if view_state.drop_hover {
        color_with_alpha(ThemeColors::ACCENT_PRIMARY, 25)
    } else {
        Color32::TRANSPARENT
    };

    egui::Frame::none()
        .fill(fill)
        .stroke(stroke)
        .rounding(Rounding::same(6.0))
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            let chosen = view_state
                .pending
                .as_ref()
                .map(|pending| pending.name.clone())
                .unwrap_or_else(|| "Choose file...".to_string());
            ui.label(RichText::new(chosen).color(ThemeColors::TEXT_SECONDARY));

            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut view_state.path_input)
                        .hint_text("Path to an image, or drop a file on the window")
                        .desired_width(280.0),
                );
                let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let load = ui.add_enabled(!view_state.path_input.trim().is_empty(), egui::Button::new("Load"));
                if load.clicked() || submitted {
                    let path = view_state.path_input.trim().to_string();
                    choose_path(view_state, library, Path::new(&path));
                }
            });
        });
}

/// One row per placed image with its size, position and a remove button
fn render_image_list(ui: &mut egui::Ui, overlay: &mut ImageOverlay) {
    ui.label(RichText::new(format!("Added Images ({})", overlay.images.len())).strong());
    if overlay.images.is_empty() {
        return;
    }

    let mut remove = None;
    egui::ScrollArea::vertical()
        .id_salt("image_list")
        .max_height(180.0)
        .show(ui, |ui| {
            for item in &overlay.images {
                egui::Frame::none()
                    .fill(ThemeColors::BG_LIGHT)
                    .rounding(Rounding::same(4.0))
                    .inner_margin(6.0)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(image_label(&item.id)).strong());
                            caption(ui, &format!("{}%", item.size_percent()));
                            caption(
                                ui,
                                &format!(
                                    "X: {:.0}% Y: {:.0}%",
                                    item.position.x_percent, item.position.y_percent
                                ),
                            );
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                let button = egui::Button::new(RichText::new("×").color(Color32::WHITE))
                                    .fill(ThemeColors::ACCENT_ERROR)
                                    .small();
                                if ui.add(button).on_hover_text("Remove image").clicked() {
                                    remove = Some(item.id.clone());
                                }
                            });
                        });
                    });
                ui.add_space(4.0);
            }
        });

    if let Some(id) = remove {
        if overlay.remove_image(&id).is_some() {
            info!("Removed image {}", id);
        }
    }
}

/// "Image #" plus the last four characters of the id
pub fn image_label(id: &str) -> String {
    let start = id.char_indices().rev().nth(3).map(|(i, _)| i).unwrap_or(0);
    format!("Image #{}", &id[start..])
}

/// Decode a file from disk and make it the pending image
pub fn choose_path(view_state: &mut ImageViewState, library: &mut ImageLibrary, path: &Path) {
    match library.load_path(path) {
        Ok(handle) => set_pending(view_state, library, handle),
        Err(e) => {
            warn!("Could not load {}: {}", path.display(), e);
            view_state.last_error = Some(e.to_string());
        }
    }
}

/// Make a file dropped on the window the pending image
pub fn accept_dropped_file(view_state: &mut ImageViewState, library: &mut ImageLibrary, file: &egui::DroppedFile) {
    if let Some(bytes) = &file.bytes {
        let name = if file.name.is_empty() { "dropped image" } else { file.name.as_str() };
        match library.load_bytes(bytes, name) {
            Ok(handle) => set_pending(view_state, library, handle),
            Err(e) => {
                warn!("Could not decode dropped file '{}': {}", name, e);
                view_state.last_error = Some(e.to_string());
            }
        }
    } else if let Some(path) = &file.path {
        view_state.path_input = path.display().to_string();
        choose_path(view_state, library, path);
    }
}

fn set_pending(view_state: &mut ImageViewState, library: &ImageLibrary, handle: ImageHandle) {
    let name = library
        .get(handle)
        .map(|image| image.name.clone())
        .unwrap_or_default();
    view_state.pending = Some(PendingImage { handle, name });
    view_state.last_error = None;
}

/// Release decoded images neither placed nor pending
pub fn release_unused(library: &mut ImageLibrary, overlay: &ImageOverlay, pending: Option<&PendingImage>) {
    let in_use: HashSet<_> = overlay
        .images
        .iter()
        .map(|item| item.image_ref)
        .chain(pending.map(|pending| pending.handle))
        .collect();
    library.retain(&in_use);
}
