//! Reusable UI components for the dashboard

pub mod color_picker;
pub mod navbar;
pub mod scroll_slider;
pub mod style_editor;
pub mod toast;

pub use navbar::render_navbar;
pub use scroll_slider::scroll_slider;
pub use style_editor::style_editor;
pub use toast::Toasts;
