//! Lyrics overlay editor and song library dialog

use egui::RichText;
use tracing::info;

use crate::dashboard::components::style_editor;
use crate::dashboard::state::{filter_songs, LyricsViewState, SongEdit};
use crate::dashboard::theme::ThemeColors;
use crate::dashboard::views::{caption, section_frame, section_header};
use crate::editor::OverlayEditor;
use crate::overlay::{LyricsOverlay, OverlayKind};
use crate::shared::StoreError;

/// Render the lyrics editor section and, when open, the manage songs dialog
pub fn render_lyrics_view(
    ui: &mut egui::Ui,
    view_state: &mut LyricsViewState,
    editor: &OverlayEditor<LyricsOverlay>,
) -> Result<(), StoreError> {
    let mut draft = editor.load()?;

    let reset = section_frame(ui, |ui| {
        let lyrics = &mut draft.value;
        if section_header(ui, OverlayKind::Lyrics, &mut lyrics.enabled) {
            return true;
        }

        ui.horizontal(|ui| {
            ui.label("Song");
            let selected_title = lyrics
                .selected_song()
                .map(|song| song.title.clone())
                .unwrap_or_else(|| "No songs".to_string());
            let mut chosen = None;
            egui::ComboBox::from_id_salt("lyrics_song")
                .selected_text(selected_title)
                .width(220.0)
                .show_ui(ui, |ui| {
                    for song in &lyrics.songs {
                        let is_selected = song.id == lyrics.selected_song_id;
                        if ui.selectable_label(is_selected, &song.title).clicked() && !is_selected {
                            chosen = Some(song.id.clone());
                        }
                    }
                });
            if let Some(id) = chosen {
                lyrics.select_song(&id);
            }

            if ui.button("Manage Songs").clicked() {
                view_state.show_manage_dialog = true;
            }
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(lyrics.has_previous_verse(), egui::Button::new("◀ Previous"))
                .clicked()
            {
                lyrics.previous_verse();
            }
            let count = lyrics.verse_count();
            let position = if count == 0 { 0 } else { lyrics.current_verse_index + 1 };
            ui.label(
                RichText::new(format!("Verse {} / {}", position, count))
                    .color(ThemeColors::TEXT_SECONDARY),
            );
            if ui
                .add_enabled(lyrics.has_next_verse(), egui::Button::new("Next ▶"))
                .clicked()
            {
                lyrics.next_verse();
            }
        });

        egui::Frame::none()
            .fill(ThemeColors::BG_DARK)
            .rounding(egui::Rounding::same(6.0))
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                let verse = lyrics.current_verse();
                if verse.is_empty() {
                    caption(ui, "Nothing to show");
                } else {
                    ui.label(RichText::new(verse).color(ThemeColors::TEXT_PRIMARY));
                }
            });

        ui.add_space(12.0);
        ui.columns(2, |columns| {
            style_editor(&mut columns[0], "lyrics_title", "Title Style", &mut lyrics.title_style);
            style_editor(&mut columns[1], "lyrics_content", "Content Style", &mut lyrics.content_style);
        });
        false
    });

    if view_state.show_manage_dialog {
        render_manage_dialog(ui.ctx(), view_state, &mut draft.value);
    }

    if reset {
        editor.reset()?;
    } else {
        editor.commit(draft)?;
    }
    Ok(())
}

/// Song library: filter, edit, delete and add songs
fn render_manage_dialog(ctx: &egui::Context, view_state: &mut LyricsViewState, lyrics: &mut LyricsOverlay) {
    let mut open = true;
    egui::Window::new("Manage Songs")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(480.0)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Filter");
                ui.add(
                    egui::TextEdit::singleline(&mut view_state.filter)
                        .hint_text("Search titles...")
                        .desired_width(240.0),
                );
            });
            ui.add_space(8.0);

            render_song_list(ui, view_state, lyrics);

            ui.add_space(8.0);
            ui.separator();
            render_song_editor(ui, view_state, lyrics);
        });

    if !open {
        view_state.show_manage_dialog = false;
        view_state.editing = None;
        view_state.confirm_delete = None;
    }
}

fn render_song_list(ui: &mut egui::Ui, view_state: &mut LyricsViewState, lyrics: &mut LyricsOverlay) {
    let mut edit = None;
    let mut delete = None;

    egui::ScrollArea::vertical()
        .id_salt("song_list")
        .max_height(200.0)
        .show(ui, |ui| {
            let matches = filter_songs(&lyrics.songs, &view_state.filter);
            if matches.is_empty() {
                caption(ui, "No songs match");
            }
            for song in matches {
                ui.horizontal(|ui| {
                    let selected = song.id == lyrics.selected_song_id;
                    let title = if selected {
                        RichText::new(&song.title).strong().color(ThemeColors::ACCENT_PRIMARY)
                    } else {
                        RichText::new(&song.title)
                    };
                    ui.label(title);
                    caption(ui, &format!("{} verses", song.verses.len()));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if view_state.confirm_delete.as_deref() == Some(song.id.as_str()) {
                            if ui.button("Cancel").clicked() {
                                view_state.confirm_delete = None;
                            }
                            let confirm = egui::Button::new(RichText::new("Delete").color(egui::Color32::WHITE))
                                .fill(ThemeColors::ACCENT_ERROR);
                            if ui.add(confirm).clicked() {
                                delete = Some(song.id.clone());
                            }
                        } else {
                            if ui.button("🗑").on_hover_text("Delete song").clicked() {
                                view_state.confirm_delete = Some(song.id.clone());
                            }
                            if ui.button("✏").on_hover_text("Edit song").clicked() {
                                edit = Some(SongEdit::from_song(song));
                            }
                        }
                    });
                });
            }
        });

    if let Some(song) = edit {
        view_state.editing = Some(song);
    }
    if let Some(id) = delete {
        if let Some(removed) = lyrics.delete_song(&id) {
            info!("Deleted song '{}'", removed.title);
        }
        view_state.confirm_delete = None;
        if view_state.editing.as_ref().is_some_and(|edit| edit.id == id) {
            view_state.editing = None;
        }
    }
}

/// Form for the song being edited, or for a new song
fn render_song_editor(ui: &mut egui::Ui, view_state: &mut LyricsViewState, lyrics: &mut LyricsOverlay) {
    let (heading, title, body) = match view_state.editing.as_mut() {
        Some(edit) => ("Edit Song", &mut edit.title, &mut edit.lyrics),
        None => ("Add Song", &mut view_state.new_title, &mut view_state.new_lyrics),
    };

    ui.label(RichText::new(heading).size(15.0).strong());
    ui.add_space(4.0);
    ui.add(
        egui::TextEdit::singleline(title)
            .hint_text("Title")
            .desired_width(f32::INFINITY),
    );
    ui.add(
        egui::TextEdit::multiline(body)
            .hint_text("Lyrics")
            .desired_rows(6)
            .desired_width(f32::INFINITY),
    );
    caption(ui, "Separate verses with a blank line");
    let can_save = !title.trim().is_empty() && !body.trim().is_empty();

    ui.horizontal(|ui| {
        if let Some(edit) = view_state.editing.clone() {
            if ui.add_enabled(can_save, egui::Button::new("Save")).clicked()
                && lyrics.update_song(&edit.id, &edit.title, &edit.lyrics)
            {
                info!("Updated song '{}'", edit.title);
                view_state.editing = None;
            }
            if ui.button("Cancel").clicked() {
                view_state.editing = None;
            }
        } else {
            let add = egui::Button::new(RichText::new("Add Song").color(ThemeColors::TEXT_PRIMARY))
                .fill(ThemeColors::ACCENT_PRIMARY);
            if ui.add_enabled(can_save, add).clicked() {
                if let Some(id) = lyrics.add_song(&view_state.new_title, &view_state.new_lyrics) {
                    info!("Added song {} '{}'", id, view_state.new_title.trim());
                    view_state.clear_new_song();
                }
            }
        }
    });
}
