//! Text styling shared by every overlay

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Smallest font size an overlay text can use
pub const MIN_FONT_SIZE_PX: u32 = 8;
/// Largest font size an overlay text can use
pub const MAX_FONT_SIZE_PX: u32 = 72;

/// An opaque `#RRGGBB` color, always stored upper case
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub const WHITE: &'static str = "#FFFFFF";
    pub const BLACK: &'static str = "#000000";
    pub const RED: &'static str = "#FF0000";

    /// Parse `#RRGGBB`, `RRGGBB` or `#RGB` (case-insensitive)
    pub fn parse(input: &str) -> Option<Self> {
        let digits = input.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let expanded = match digits.len() {
            6 => digits.to_ascii_uppercase(),
            3 => digits
                .chars()
                .flat_map(|c| [c, c])
                .collect::<String>()
                .to_ascii_uppercase(),
            _ => return None,
        };
        Some(Self(format!("#{expanded}")))
    }

    /// Build from a known-good constant such as [`HexColor::WHITE`]
    pub fn from_static(value: &'static str) -> Self {
        Self::parse(value).unwrap_or_else(|| Self(Self::BLACK.to_string()))
    }

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{r:02X}{g:02X}{b:02X}"))
    }

    /// Red, green and blue components
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&self.0[range], 16).unwrap_or(0)
        };
        (channel(1..3), channel(3..5), channel(5..7))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid hex color: {value}"))
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

/// Font and color settings for one block of overlay text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels, kept within [8, 72]
    #[serde(deserialize_with = "deserialize_font_size")]
    font_size_px: u32,
    pub font_color: HexColor,
    /// Kept even while `transparent` is set so unticking restores it
    pub background_color: HexColor,
    pub transparent: bool,
}

impl TextStyle {
    pub fn new(font_size_px: u32, font_color: HexColor, background_color: HexColor) -> Self {
        Self {
            font_size_px: clamp_font_size(font_size_px),
            font_color,
            background_color,
            transparent: false,
        }
    }

    /// White text on a black box
    pub fn white_on_black(font_size_px: u32) -> Self {
        Self::new(
            font_size_px,
            HexColor::from_static(HexColor::WHITE),
            HexColor::from_static(HexColor::BLACK),
        )
    }

    pub fn font_size_px(&self) -> u32 {
        self.font_size_px
    }

    /// Set the font size, clamping out-of-range requests
    pub fn set_font_size_px(&mut self, size: i64) {
        let clamped = size.clamp(MIN_FONT_SIZE_PX as i64, MAX_FONT_SIZE_PX as i64);
        self.font_size_px = clamped as u32;
    }

    pub fn step_font_size(&mut self, delta: i64) {
        self.set_font_size_px(self.font_size_px as i64 + delta);
    }

    /// Background to paint, `None` when the block is transparent
    pub fn background(&self) -> Option<&HexColor> {
        if self.transparent {
            None
        } else {
            Some(&self.background_color)
        }
    }
}

pub fn clamp_font_size(size: u32) -> u32 {
    size.clamp(MIN_FONT_SIZE_PX, MAX_FONT_SIZE_PX)
}

fn deserialize_font_size<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    u32::deserialize(deserializer).map(clamp_font_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_size_is_clamped() {
        let mut style = TextStyle::white_on_black(20);

        style.set_font_size_px(5);
        assert_eq!(style.font_size_px(), 8);

        style.set_font_size_px(999);
        assert_eq!(style.font_size_px(), 72);

        style.set_font_size_px(-40);
        assert_eq!(style.font_size_px(), 8);

        style.set_font_size_px(36);
        assert_eq!(style.font_size_px(), 36);
    }

    #[test]
    fn test_step_font_size_stops_at_bounds() {
        let mut style = TextStyle::white_on_black(71);
        style.step_font_size(1);
        style.step_font_size(1);
        assert_eq!(style.font_size_px(), 72);

        let mut style = TextStyle::white_on_black(8);
        style.step_font_size(-1);
        assert_eq!(style.font_size_px(), 8);
    }

    #[test]
    fn test_constructor_clamps() {
        assert_eq!(TextStyle::white_on_black(2).font_size_px(), 8);
        assert_eq!(TextStyle::white_on_black(100).font_size_px(), 72);
    }

    #[test]
    fn test_transparent_hides_but_keeps_background() {
        let mut style = TextStyle::white_on_black(24);
        style.background_color = HexColor::from_static(HexColor::RED);
        style.transparent = true;

        assert!(style.background().is_none());
        assert_eq!(style.background_color.as_str(), "#FF0000");

        style.transparent = false;
        assert_eq!(style.background().map(HexColor::as_str), Some("#FF0000"));
    }

    #[test]
    fn test_hex_color_parse() {
        assert_eq!(HexColor::parse("#ff00aa").unwrap().as_str(), "#FF00AA");
        assert_eq!(HexColor::parse("00ff00").unwrap().as_str(), "#00FF00");
        assert_eq!(HexColor::parse("#abc").unwrap().as_str(), "#AABBCC");
        assert!(HexColor::parse("#12345").is_none());
        assert!(HexColor::parse("#GGGGGG").is_none());
        assert!(HexColor::parse("").is_none());
    }

    #[test]
    fn test_hex_color_rgb() {
        let color = HexColor::parse("#FFA500").unwrap();
        assert_eq!(color.rgb(), (255, 165, 0));
        assert_eq!(HexColor::from_rgb(255, 165, 0), color);
    }

    #[test]
    fn test_deserialized_font_size_is_clamped() {
        let json = r##"{"font_size_px":300,"font_color":"#FFFFFF","background_color":"#000000","transparent":false}"##;
        let style: TextStyle = serde_json::from_str(json).unwrap();
        assert_eq!(style.font_size_px(), 72);
    }

    #[test]
    fn test_hex_color_serde_rejects_garbage() {
        let ok: HexColor = serde_json::from_str("\"#c0c0c0\"").unwrap();
        assert_eq!(ok.as_str(), "#C0C0C0");

        let bad: Result<HexColor, _> = serde_json::from_str("\"teal\"");
        assert!(bad.is_err());
    }
}
