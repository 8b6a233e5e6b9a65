//! Shared overlay state and change notifications
//!
//! Editors, the preview canvas and the shell all read and write overlay
//! values through an [`OverlayContext`] handed out by the [`OverlayProvider`].

pub mod messages;
pub mod state;

pub use messages::StoreNotification;
pub use state::{OverlayContext, OverlayProvider, StoreError};
