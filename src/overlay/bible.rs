//! Bible verse lower-third

use serde::{Deserialize, Serialize};

use crate::overlay::style::TextStyle;

/// Text shown for John 3:16 in the default session and by the placeholder fetcher
pub const JOHN_3_16_KJV: &str = "For God so loved the world, that he gave his only begotten Son, \
that whosoever believeth in him should not perish, but have everlasting life.";

/// Supported Bible translations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BibleVersion {
    #[default]
    KJV,
    NIV,
    ESV,
    NKJV,
    NLT,
}

impl BibleVersion {
    pub const ALL: [BibleVersion; 5] = [
        BibleVersion::KJV,
        BibleVersion::NIV,
        BibleVersion::ESV,
        BibleVersion::NKJV,
        BibleVersion::NLT,
    ];

    /// Short code shown next to the reference
    pub fn code(&self) -> &'static str {
        match self {
            BibleVersion::KJV => "KJV",
            BibleVersion::NIV => "NIV",
            BibleVersion::ESV => "ESV",
            BibleVersion::NKJV => "NKJV",
            BibleVersion::NLT => "NLT",
        }
    }

    /// Full translation name for the version picker
    pub fn name(&self) -> &'static str {
        match self {
            BibleVersion::KJV => "King James Version",
            BibleVersion::NIV => "New International Version",
            BibleVersion::ESV => "English Standard Version",
            BibleVersion::NKJV => "New King James Version",
            BibleVersion::NLT => "New Living Translation",
        }
    }
}

/// Bible overlay configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibleOverlay {
    pub enabled: bool,
    pub verse_reference: String,
    pub version: BibleVersion,
    pub verse_content: String,
    pub reference_style: TextStyle,
    pub content_style: TextStyle,
}

impl Default for BibleOverlay {
    fn default() -> Self {
        Self {
            enabled: true,
            verse_reference: "John 3:16".to_string(),
            version: BibleVersion::KJV,
            verse_content: JOHN_3_16_KJV.to_string(),
            reference_style: TextStyle::white_on_black(24),
            content_style: TextStyle::white_on_black(18),
        }
    }
}

impl BibleOverlay {
    /// Clear the verse and restore default styles, keeping the enabled flag
    pub fn reset(&mut self) {
        *self = Self {
            enabled: self.enabled,
            verse_reference: String::new(),
            version: BibleVersion::KJV,
            verse_content: String::new(),
            ..Self::default()
        };
    }

    /// Label rendered above the verse, e.g. `John 3:16 (KJV)`
    pub fn reference_label(&self) -> String {
        format!("{} ({})", self.verse_reference, self.version.code())
    }

    /// Whether a fetch would do anything
    pub fn has_reference(&self) -> bool {
        !self.verse_reference.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bible_overlay() {
        let bible = BibleOverlay::default();
        assert!(bible.enabled);
        assert_eq!(bible.verse_reference, "John 3:16");
        assert_eq!(bible.version, BibleVersion::KJV);
        assert_eq!(bible.reference_style.font_size_px(), 24);
        assert_eq!(bible.content_style.font_size_px(), 18);
        assert!(bible.verse_content.starts_with("For God so loved"));
    }

    #[test]
    fn test_reset_clears_verse_and_keeps_enabled() {
        let mut bible = BibleOverlay::default();
        bible.enabled = false;
        bible.version = BibleVersion::NLT;
        bible.reference_style.set_font_size_px(60);

        bible.reset();

        assert!(!bible.enabled);
        assert!(bible.verse_reference.is_empty());
        assert!(bible.verse_content.is_empty());
        assert_eq!(bible.version, BibleVersion::KJV);
        assert_eq!(bible.reference_style.font_size_px(), 24);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut bible = BibleOverlay::default();
        bible.reset();
        let first = bible.clone();
        bible.reset();
        assert_eq!(first, bible);
    }

    #[test]
    fn test_reference_label() {
        let mut bible = BibleOverlay::default();
        bible.version = BibleVersion::NKJV;
        assert_eq!(bible.reference_label(), "John 3:16 (NKJV)");
    }

    #[test]
    fn test_has_reference_ignores_whitespace() {
        let mut bible = BibleOverlay::default();
        bible.verse_reference = "   ".to_string();
        assert!(!bible.has_reference());
    }
}
