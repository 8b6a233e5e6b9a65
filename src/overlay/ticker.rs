//! Scrolling news ticker

use serde::{Deserialize, Deserializer, Serialize};

use crate::overlay::style::{HexColor, TextStyle};

pub const MIN_SCROLL_SPEED: u32 = 1;
pub const MAX_SCROLL_SPEED: u32 = 10;
const DEFAULT_SCROLL_SPEED: u32 = 5;

const WELCOME_TEXT: &str = "Welcome to our livestream. Thank you for joining us today!";

/// Ticker overlay configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerOverlay {
    pub enabled: bool,
    pub ticker_title: String,
    /// Blink the title every half second
    pub title_blink: bool,
    pub ticker_content: String,
    /// Scroll speed in [1, 10]
    #[serde(deserialize_with = "deserialize_scroll_speed")]
    scroll_speed: u32,
    pub title_style: TextStyle,
    pub content_style: TextStyle,
}

impl Default for TickerOverlay {
    fn default() -> Self {
        Self {
            enabled: true,
            ticker_title: "BREAKING NEWS".to_string(),
            title_blink: false,
            ticker_content: WELCOME_TEXT.to_string(),
            scroll_speed: DEFAULT_SCROLL_SPEED,
            title_style: TextStyle::new(
                24,
                HexColor::from_static(HexColor::WHITE),
                HexColor::from_static(HexColor::RED),
            ),
            content_style: TextStyle::white_on_black(20),
        }
    }
}

impl TickerOverlay {
    pub fn reset(&mut self) {
        *self = Self {
            enabled: self.enabled,
            ..Self::default()
        };
    }

    pub fn scroll_speed(&self) -> u32 {
        self.scroll_speed
    }

    /// Set the scroll speed, clamping to [1, 10]
    pub fn set_scroll_speed(&mut self, speed: i64) {
        let clamped = speed.clamp(MIN_SCROLL_SPEED as i64, MAX_SCROLL_SPEED as i64);
        self.scroll_speed = clamped as u32;
    }
}

fn deserialize_scroll_speed<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    u32::deserialize(deserializer).map(|speed| speed.clamp(MIN_SCROLL_SPEED, MAX_SCROLL_SPEED))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_speed_is_clamped() {
        let mut ticker = TickerOverlay::default();
        assert_eq!(ticker.scroll_speed(), 5);

        ticker.set_scroll_speed(0);
        assert_eq!(ticker.scroll_speed(), 1);

        ticker.set_scroll_speed(11);
        assert_eq!(ticker.scroll_speed(), 10);

        ticker.set_scroll_speed(7);
        assert_eq!(ticker.scroll_speed(), 7);
    }

    #[test]
    fn test_default_title_is_white_on_red() {
        let ticker = TickerOverlay::default();
        assert_eq!(ticker.title_style.font_color.as_str(), "#FFFFFF");
        assert_eq!(ticker.title_style.background_color.as_str(), "#FF0000");
        assert_eq!(ticker.content_style.font_size_px(), 20);
    }

    #[test]
    fn test_reset_keeps_enabled() {
        let mut ticker = TickerOverlay::default();
        ticker.enabled = false;
        ticker.title_blink = true;
        ticker.ticker_content = "Service starts in 5 minutes".to_string();
        ticker.set_scroll_speed(9);

        ticker.reset();
        let once = ticker.clone();
        ticker.reset();

        assert_eq!(once, ticker);
        assert!(!ticker.enabled);
        assert!(!ticker.title_blink);
        assert_eq!(ticker.scroll_speed(), 5);
        assert_eq!(ticker.ticker_title, "BREAKING NEWS");
    }

    #[test]
    fn test_deserialized_speed_is_clamped() {
        let mut value = serde_json::to_value(TickerOverlay::default()).unwrap();
        value["scroll_speed"] = serde_json::json!(40);
        let ticker: TickerOverlay = serde_json::from_value(value).unwrap();
        assert_eq!(ticker.scroll_speed(), 10);
    }
}
