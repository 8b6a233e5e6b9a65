//! Preview Canvas
//!
//! Renders the enabled overlays on a fixed-aspect canvas as they will
//! appear on stream.

pub mod blink;
pub mod canvas;
pub mod drag;
pub mod layout;
pub mod ticker;

pub use canvas::PreviewCanvas;
pub use drag::InputSurface;
