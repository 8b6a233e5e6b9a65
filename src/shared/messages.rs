//! Message types sent from the overlay store to its subscribers

use crate::overlay::OverlayKind;

/// Sent to every subscriber after an overlay value is replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreNotification {
    /// Overlay that changed
    pub kind: OverlayKind,
    /// Store revision after the change
    pub revision: u64,
}
