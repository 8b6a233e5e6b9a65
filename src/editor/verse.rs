//! Verse text lookup for the Bible editor

use tracing::debug;

use crate::overlay::bible::{BibleVersion, JOHN_3_16_KJV};
use crate::overlay::BibleOverlay;

/// Source of Bible verse text
pub trait VerseFetcher: Send + Sync {
    fn fetch_verse_text(&self, reference: &str, version: BibleVersion) -> String;
}

/// Fetcher that answers every lookup with John 3:16
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderVerseFetcher;

impl VerseFetcher for PlaceholderVerseFetcher {
    fn fetch_verse_text(&self, reference: &str, version: BibleVersion) -> String {
        debug!("Placeholder lookup for {} ({})", reference, version.code());
        JOHN_3_16_KJV.to_string()
    }
}

/// Fill `verse_content` from `fetcher`; does nothing without a reference
pub fn fetch_into(bible: &mut BibleOverlay, fetcher: &dyn VerseFetcher) -> bool {
    if !bible.has_reference() {
        return false;
    }
    bible.verse_content = fetcher.fetch_verse_text(bible.verse_reference.trim(), bible.version);
    true
}
