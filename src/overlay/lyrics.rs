//! Song lyrics overlay and song library operations

use serde::{Deserialize, Serialize};

use crate::overlay::style::TextStyle;

const AMAZING_GRACE: &str = "Amazing grace! How sweet the sound
That saved a wretch like me!
I once was lost, but now am found;
Was blind, but now I see.

'Twas grace that taught my heart to fear,
And grace my fears relieved;
How precious did that grace appear
The hour I first believed.";

const HOW_GREAT_THOU_ART: &str = "O Lord my God, when I in awesome wonder,
Consider all the worlds Thy hands have made;
I see the stars, I hear the rolling thunder,
Thy power throughout the universe displayed.

Then sings my soul, my Savior God, to Thee,
How great Thou art, how great Thou art.
Then sings my soul, my Savior God, to Thee,
How great Thou art, how great Thou art!";

/// A song in the lyrics library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    /// Lyrics exactly as typed
    pub lyrics: String,
    /// Lyrics split into verses; never empty
    pub verses: Vec<String>,
}

impl Song {
    pub fn new(id: impl Into<String>, title: impl Into<String>, lyrics: impl Into<String>) -> Self {
        let lyrics = lyrics.into();
        Self {
            id: id.into(),
            title: title.into(),
            verses: split_verses(&lyrics),
            lyrics,
        }
    }
}

/// Split lyrics into verses on blank lines.
///
/// Lines inside a verse keep their line breaks. When no verse survives the
/// split the whole text becomes the only verse.
pub fn split_verses(lyrics: &str) -> Vec<String> {
    let mut verses = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in lyrics.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                verses.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        verses.push(current.join("\n"));
    }

    if verses.is_empty() {
        verses.push(lyrics.to_string());
    }
    verses
}

/// Lyrics overlay configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LyricsOverlay {
    pub enabled: bool,
    pub songs: Vec<Song>,
    /// Id of the selected song, or empty when nothing is selected
    pub selected_song_id: String,
    pub current_verse_index: usize,
    pub title_style: TextStyle,
    pub content_style: TextStyle,
}

impl Default for LyricsOverlay {
    fn default() -> Self {
        Self {
            enabled: true,
            songs: vec![
                Song::new("1", "Amazing Grace", AMAZING_GRACE),
                Song::new("2", "How Great Thou Art", HOW_GREAT_THOU_ART),
            ],
            selected_song_id: "1".to_string(),
            current_verse_index: 0,
            title_style: TextStyle::white_on_black(28),
            content_style: TextStyle::white_on_black(20),
        }
    }
}

impl LyricsOverlay {
    /// Select the first song and restore default styles.
    ///
    /// The song library and the enabled flag survive a reset.
    pub fn reset(&mut self) {
        let defaults = Self::default();
        self.selected_song_id = self
            .songs
            .first()
            .map(|song| song.id.clone())
            .unwrap_or_default();
        self.current_verse_index = 0;
        self.title_style = defaults.title_style;
        self.content_style = defaults.content_style;
    }

    pub fn song(&self, id: &str) -> Option<&Song> {
        self.songs.iter().find(|song| song.id == id)
    }

    pub fn selected_song(&self) -> Option<&Song> {
        self.song(&self.selected_song_id)
    }

    /// Song shown on the canvas: the selection, or the first song
    pub fn displayed_song(&self) -> Option<&Song> {
        self.selected_song().or_else(|| self.songs.first())
    }

    /// Verse shown on the canvas, empty when there is none
    pub fn current_verse(&self) -> &str {
        self.displayed_song()
            .and_then(|song| song.verses.get(self.current_verse_index))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn verse_count(&self) -> usize {
        self.selected_song().map(|song| song.verses.len()).unwrap_or(0)
    }

    /// Select a song by id and rewind to its first verse
    pub fn select_song(&mut self, id: &str) -> bool {
        if self.song(id).is_none() {
            return false;
        }
        self.selected_song_id = id.to_string();
        self.current_verse_index = 0;
        true
    }

    pub fn has_previous_verse(&self) -> bool {
        self.current_verse_index > 0
    }

    pub fn has_next_verse(&self) -> bool {
        self.current_verse_index + 1 < self.verse_count()
    }

    pub fn previous_verse(&mut self) -> bool {
        if !self.has_previous_verse() {
            return false;
        }
        self.current_verse_index -= 1;
        true
    }

    pub fn next_verse(&mut self) -> bool {
        if !self.has_next_verse() {
            return false;
        }
        self.current_verse_index += 1;
        true
    }

    /// Next free id: one past the largest numeric id
    pub fn next_song_id(&self) -> String {
        let max = self
            .songs
            .iter()
            .filter_map(|song| song.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }

    /// Add a song; returns its id, or `None` when title or lyrics is blank
    pub fn add_song(&mut self, title: &str, lyrics: &str) -> Option<String> {
        if title.trim().is_empty() || lyrics.trim().is_empty() {
            return None;
        }
        let id = self.next_song_id();
        self.songs.push(Song::new(id.clone(), title, lyrics));
        if self.selected_song_id.is_empty() {
            self.selected_song_id = id.clone();
            self.current_verse_index = 0;
        }
        Some(id)
    }

    /// Replace a song's title and lyrics, recomputing its verses
    pub fn update_song(&mut self, id: &str, title: &str, lyrics: &str) -> bool {
        if title.trim().is_empty() || lyrics.trim().is_empty() {
            return false;
        }
        let Some(song) = self.songs.iter_mut().find(|song| song.id == id) else {
            return false;
        };
        *song = Song::new(id, title, lyrics);

        if self.selected_song_id == id {
            let last = self.verse_count().saturating_sub(1);
            self.current_verse_index = self.current_verse_index.min(last);
        }
        true
    }

    /// Remove a song.
    ///
    /// Removing the selected song moves the selection to the new first song
    /// (or clears it) and rewinds to verse 0.
    pub fn delete_song(&mut self, id: &str) -> Option<Song> {
        let position = self.songs.iter().position(|song| song.id == id)?;
        let removed = self.songs.remove(position);

        if self.selected_song_id == id {
            self.selected_song_id = self
                .songs
                .first()
                .map(|song| song.id.clone())
                .unwrap_or_default();
            self.current_verse_index = 0;
        }
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_library() -> LyricsOverlay {
        LyricsOverlay {
            songs: Vec::new(),
            selected_song_id: String::new(),
            ..LyricsOverlay::default()
        }
    }

    #[test]
    fn test_split_verses_on_blank_lines() {
        assert_eq!(split_verses("A\n\nB\n\nC"), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_split_single_paragraph() {
        let lyrics = "line one\nline two";
        assert_eq!(split_verses(lyrics), vec![lyrics.to_string()]);
    }

    #[test]
    fn test_split_handles_crlf_and_extra_blank_lines() {
        let verses = split_verses("A1\r\nA2\r\n\r\n\r\n  \r\nB1\r\n");
        assert_eq!(verses, vec!["A1\nA2", "B1"]);
    }

    #[test]
    fn test_split_never_empty() {
        assert_eq!(split_verses("\n\n"), vec!["\n\n".to_string()]);
    }

    #[test]
    fn test_default_songs_have_two_verses() {
        let lyrics = LyricsOverlay::default();
        assert_eq!(lyrics.songs.len(), 2);
        for song in &lyrics.songs {
            assert_eq!(song.verses.len(), 2);
        }
        assert!(lyrics.current_verse().starts_with("Amazing grace!"));
    }

    #[test]
    fn test_add_song_assigns_next_numeric_id() {
        let mut lyrics = LyricsOverlay::default();
        let id = lyrics.add_song("Holy Holy", "Verse one\n\nVerse two\n\nVerse three");
        assert_eq!(id.as_deref(), Some("3"));

        let song = lyrics.song("3").unwrap();
        assert_eq!(song.verses.len(), 3);
        // Existing selection is kept
        assert_eq!(lyrics.selected_song_id, "1");
    }

    #[test]
    fn test_add_song_ignores_non_numeric_ids() {
        let mut lyrics = empty_library();
        lyrics.songs.push(Song::new("imported", "Imported", "words"));
        assert_eq!(lyrics.next_song_id(), "1");
    }

    #[test]
    fn test_add_song_rejects_blank_fields() {
        let mut lyrics = LyricsOverlay::default();
        assert!(lyrics.add_song("  ", "words").is_none());
        assert!(lyrics.add_song("Title", "\n \n").is_none());
        assert_eq!(lyrics.songs.len(), 2);
    }

    #[test]
    fn test_first_song_is_selected_when_library_was_empty() {
        let mut lyrics = empty_library();
        let id = lyrics.add_song("First", "only verse").unwrap();
        assert_eq!(lyrics.selected_song_id, id);
        assert_eq!(lyrics.current_verse(), "only verse");
    }

    #[test]
    fn test_update_song_recomputes_verses_and_clamps_index() {
        let mut lyrics = LyricsOverlay::default();
        assert!(lyrics.next_verse());
        assert_eq!(lyrics.current_verse_index, 1);

        assert!(lyrics.update_song("1", "Amazing Grace (short)", "Just one verse"));
        let song = lyrics.song("1").unwrap();
        assert_eq!(song.title, "Amazing Grace (short)");
        assert_eq!(song.verses, vec!["Just one verse"]);
        assert_eq!(lyrics.current_verse_index, 0);
    }

    #[test]
    fn test_update_unknown_or_blank_song_is_noop() {
        let mut lyrics = LyricsOverlay::default();
        let before = lyrics.clone();
        assert!(!lyrics.update_song("99", "Title", "words"));
        assert!(!lyrics.update_song("1", "", "words"));
        assert_eq!(before, lyrics);
    }

    #[test]
    fn test_delete_selected_song_moves_selection() {
        let mut lyrics = LyricsOverlay::default();
        lyrics.next_verse();

        let removed = lyrics.delete_song("1").unwrap();
        assert_eq!(removed.title, "Amazing Grace");
        assert_eq!(lyrics.selected_song_id, "2");
        assert_eq!(lyrics.current_verse_index, 0);
    }

    #[test]
    fn test_delete_last_song_clears_selection() {
        let mut lyrics = LyricsOverlay::default();
        lyrics.delete_song("2");
        lyrics.delete_song("1");
        assert!(lyrics.songs.is_empty());
        assert!(lyrics.selected_song_id.is_empty());
        assert_eq!(lyrics.current_verse_index, 0);
        assert_eq!(lyrics.current_verse(), "");
    }

    #[test]
    fn test_delete_other_song_keeps_selection_and_index() {
        let mut lyrics = LyricsOverlay::default();
        lyrics.next_verse();

        lyrics.delete_song("2");
        assert_eq!(lyrics.selected_song_id, "1");
        assert_eq!(lyrics.current_verse_index, 1);
    }

    #[test]
    fn test_delete_unknown_song_returns_none() {
        let mut lyrics = LyricsOverlay::default();
        assert!(lyrics.delete_song("42").is_none());
        assert_eq!(lyrics.songs.len(), 2);
    }

    #[test]
    fn test_verse_navigation_stays_in_bounds() {
        let mut lyrics = LyricsOverlay::default();
        assert!(!lyrics.previous_verse());
        assert!(lyrics.next_verse());
        assert!(!lyrics.next_verse());
        assert_eq!(lyrics.current_verse_index, 1);
        assert!(lyrics.previous_verse());
        assert_eq!(lyrics.current_verse_index, 0);
    }

    #[test]
    fn test_select_song_rewinds() {
        let mut lyrics = LyricsOverlay::default();
        lyrics.next_verse();
        assert!(lyrics.select_song("2"));
        assert_eq!(lyrics.current_verse_index, 0);
        assert!(!lyrics.select_song("nope"));
        assert_eq!(lyrics.selected_song_id, "2");
    }

    #[test]
    fn test_displayed_song_falls_back_to_first() {
        let mut lyrics = LyricsOverlay::default();
        lyrics.selected_song_id = String::new();
        assert_eq!(lyrics.displayed_song().unwrap().id, "1");
    }

    #[test]
    fn test_reset_keeps_songs() {
        let mut lyrics = LyricsOverlay::default();
        lyrics.add_song("Extra", "words");
        lyrics.select_song("2");
        lyrics.next_verse();
        lyrics.title_style.set_font_size_px(70);

        lyrics.reset();
        let once = lyrics.clone();
        lyrics.reset();

        assert_eq!(once, lyrics);
        assert_eq!(lyrics.songs.len(), 3);
        assert_eq!(lyrics.selected_song_id, "1");
        assert_eq!(lyrics.current_verse_index, 0);
        assert_eq!(lyrics.title_style.font_size_px(), 28);
    }
}
