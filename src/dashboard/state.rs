//! Dashboard view state management

use strsim::normalized_levenshtein;

use crate::media::ImageHandle;
use crate::overlay::image::DEFAULT_IMAGE_SIZE_PERCENT;
use crate::overlay::lyrics::Song;

/// Minimum title similarity for a fuzzy song match
pub const SONG_MATCH_THRESHOLD: f64 = 0.5;

/// Overall dashboard state
#[derive(Debug, Default)]
pub struct DashboardState {
    /// Lyrics editor state
    pub lyrics: LyricsViewState,
    /// Image editor state
    pub image: ImageViewState,
}

impl DashboardState {
    pub fn new(default_image_size: u32) -> Self {
        Self {
            lyrics: LyricsViewState::default(),
            image: ImageViewState::new(default_image_size),
        }
    }
}

/// Song being edited in the manage dialog
#[derive(Debug, Clone, PartialEq)]
pub struct SongEdit {
    pub id: String,
    pub title: String,
    pub lyrics: String,
}

impl SongEdit {
    pub fn from_song(song: &Song) -> Self {
        Self {
            id: song.id.clone(),
            title: song.title.clone(),
            lyrics: song.lyrics.clone(),
        }
    }
}

/// Lyrics view state
#[derive(Debug, Default)]
pub struct LyricsViewState {
    /// Manage songs dialog is open
    pub show_manage_dialog: bool,
    /// Title for a new song
    pub new_title: String,
    /// Lyrics for a new song
    pub new_lyrics: String,
    /// Song being edited, if any
    pub editing: Option<SongEdit>,
    /// Song pending delete confirmation
    pub confirm_delete: Option<String>,
    /// Song list filter
    pub filter: String,
}

impl LyricsViewState {
    pub fn clear_new_song(&mut self) {
        self.new_title.clear();
        self.new_lyrics.clear();
    }
}

/// Image decoded and waiting for "Add"
#[derive(Debug, Clone, PartialEq)]
pub struct PendingImage {
    pub handle: ImageHandle,
    pub name: String,
}

/// Image view state
#[derive(Debug)]
pub struct ImageViewState {
    /// Path typed into the file field
    pub path_input: String,
    /// Size for the next added image
    pub size_percent: u32,
    /// Chosen file, kept after adding so it can be placed again
    pub pending: Option<PendingImage>,
    /// Last load or add failure
    pub last_error: Option<String>,
    /// Files are hovering over the window
    pub drop_hover: bool,
}

impl Default for ImageViewState {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_SIZE_PERCENT)
    }
}

impl ImageViewState {
    pub fn new(default_size: u32) -> Self {
        Self {
            path_input: String::new(),
            size_percent: default_size,
            pending: None,
            last_error: None,
            drop_hover: false,
        }
    }

    /// Back to no file and the default size
    pub fn reset(&mut self, default_size: u32) {
        *self = Self::new(default_size);
    }
}

/// Songs whose title matches `query`.
///
/// Substring matches come first in list order, then titles that are
/// merely close (typos), best first. An empty query matches everything.
pub fn filter_songs<'a>(songs: &'a [Song], query: &str) -> Vec<&'a Song> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return songs.iter().collect();
    }

    let mut exact = Vec::new();
    let mut fuzzy: Vec<(f64, &Song)> = Vec::new();
    for song in songs {
        let title = song.title.to_lowercase();
        if title.contains(&query) {
            exact.push(song);
            continue;
        }
        let score = title_similarity(&title, &query);
        if score >= SONG_MATCH_THRESHOLD {
            fuzzy.push((score, song));
        }
    }

    fuzzy.sort_by(|a, b| b.0.total_cmp(&a.0));
    exact.extend(fuzzy.into_iter().map(|(_, song)| song));
    exact
}

/// Best of whole-title and per-word similarity
fn title_similarity(title: &str, query: &str) -> f64 {
    let whole = normalized_levenshtein(title, query);
    title
        .split_whitespace()
        .map(|word| normalized_levenshtein(word, query))
        .fold(whole, f64::max)
}
