//! Overlay Models
//!
//! Plain values describing what each overlay shows and how it is styled.
//! The store owns one of each; editors and the preview read and replace them.

pub mod bible;
pub mod image;
pub mod lyrics;
pub mod presenter;
pub mod style;
pub mod ticker;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use bible::{BibleOverlay, BibleVersion};
pub use image::{ImageItem, ImageOverlay, ImagePosition};
pub use lyrics::LyricsOverlay;
pub use presenter::PresenterOverlay;
pub use style::{HexColor, TextStyle};
pub use ticker::TickerOverlay;

/// The five overlay kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverlayKind {
    Bible,
    Lyrics,
    Presenter,
    Ticker,
    Image,
}

impl OverlayKind {
    pub fn label(&self) -> &'static str {
        match self {
            OverlayKind::Bible => "Bible",
            OverlayKind::Lyrics => "Lyrics",
            OverlayKind::Presenter => "Presenter",
            OverlayKind::Ticker => "Ticker",
            OverlayKind::Image => "Image",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            OverlayKind::Bible => "📖",
            OverlayKind::Lyrics => "🎵",
            OverlayKind::Presenter => "🎤",
            OverlayKind::Ticker => "📰",
            OverlayKind::Image => "🖼",
        }
    }
}

impl fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// All overlay values of one editing session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlaySet {
    pub bible: BibleOverlay,
    pub lyrics: LyricsOverlay,
    pub presenter: PresenterOverlay,
    pub ticker: TickerOverlay,
    pub image: ImageOverlay,
}

/// An overlay value the store can hold
pub trait OverlayValue: Clone + PartialEq + Send + Sync + 'static {
    const KIND: OverlayKind;

    fn slot(set: &OverlaySet) -> &Self;

    fn slot_mut(set: &mut OverlaySet) -> &mut Self;

    /// Restore the kind's reset values; `enabled` is kept
    fn reset(&mut self);
}

macro_rules! overlay_value {
    ($ty:ty, $kind:ident, $field:ident) => {
        impl OverlayValue for $ty {
            const KIND: OverlayKind = OverlayKind::$kind;

            fn slot(set: &OverlaySet) -> &Self {
                &set.$field
            }

            fn slot_mut(set: &mut OverlaySet) -> &mut Self {
                &mut set.$field
            }

            fn reset(&mut self) {
                <$ty>::reset(self)
            }
        }
    };
}

overlay_value!(BibleOverlay, Bible, bible);
overlay_value!(LyricsOverlay, Lyrics, lyrics);
overlay_value!(PresenterOverlay, Presenter, presenter);
overlay_value!(TickerOverlay, Ticker, ticker);
overlay_value!(ImageOverlay, Image, image);

#[cfg(test)]
mod tests {
    use super::*;

    fn reset_twice<T: OverlayValue + fmt::Debug>(value: &mut T) {
        OverlayValue::reset(value);
        let once = value.clone();
        OverlayValue::reset(value);
        assert_eq!(&once, value, "{} reset is not idempotent", T::KIND);
    }

    #[test]
    fn test_reset_is_idempotent_for_every_kind() {
        let mut set = OverlaySet::default();
        reset_twice(&mut set.bible);
        reset_twice(&mut set.lyrics);
        reset_twice(&mut set.presenter);
        reset_twice(&mut set.ticker);
        reset_twice(&mut set.image);
    }

    #[test]
    fn test_slots_point_at_matching_fields() {
        let mut set = OverlaySet::default();
        TickerOverlay::slot_mut(&mut set).ticker_title = "LIVE".to_string();
        assert_eq!(TickerOverlay::slot(&set).ticker_title, "LIVE");
        assert_eq!(set.ticker.ticker_title, "LIVE");
        assert_eq!(<TickerOverlay as OverlayValue>::KIND, OverlayKind::Ticker);
    }

    #[test]
    fn test_session_starts_with_everything_enabled() {
        let set = OverlaySet::default();
        assert!(set.bible.enabled);
        assert!(set.lyrics.enabled);
        assert!(set.presenter.enabled);
        assert!(set.ticker.enabled);
        assert!(set.image.enabled);
    }
}
