//! Presenter name tag

use serde::{Deserialize, Serialize};

use crate::overlay::style::TextStyle;

/// Presenter overlay configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenterOverlay {
    pub enabled: bool,
    /// Role line shown above the name, e.g. "Speaker"
    pub presenter_title: String,
    pub presenter_name: String,
    pub title_style: TextStyle,
    pub name_style: TextStyle,
}

impl Default for PresenterOverlay {
    fn default() -> Self {
        Self {
            enabled: true,
            presenter_title: "Speaker".to_string(),
            presenter_name: "John Doe".to_string(),
            title_style: TextStyle::white_on_black(24),
            name_style: TextStyle::white_on_black(32),
        }
    }
}

impl PresenterOverlay {
    pub fn reset(&mut self) {
        *self = Self {
            enabled: self.enabled,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_restores_defaults_and_keeps_enabled() {
        let mut presenter = PresenterOverlay {
            enabled: false,
            presenter_title: "Host".to_string(),
            presenter_name: "Jane Roe".to_string(),
            ..PresenterOverlay::default()
        };
        presenter.name_style.transparent = true;

        presenter.reset();

        assert!(!presenter.enabled);
        assert_eq!(presenter.presenter_title, "Speaker");
        assert_eq!(presenter.presenter_name, "John Doe");
        assert!(!presenter.name_style.transparent);
        assert_eq!(presenter.name_style.font_size_px(), 32);
    }
}
