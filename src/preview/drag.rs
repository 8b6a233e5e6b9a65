//! Drag-to-reposition for canvas images
//!
//! A drag owns an [`InputCapture`] for its whole lifetime, so pointer moves
//! keep reaching it after the pointer leaves the image. The capture is
//! released when the drag ends, when the image disappears, or when the
//! controller is dropped.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

use crate::overlay::{ImageOverlay, ImagePosition};
use crate::shared::{OverlayContext, StoreError};

/// Canvas area in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl From<egui::Rect> for CanvasBounds {
    fn from(rect: egui::Rect) -> Self {
        Self {
            left: rect.min.x,
            top: rect.min.y,
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// Pointer position as a clamped percentage of the canvas
pub fn pointer_to_percent(bounds: CanvasBounds, pointer_x: f32, pointer_y: f32) -> ImagePosition {
    let axis = |pointer: f32, start: f32, extent: f32| {
        if extent <= 0.0 {
            0.0
        } else {
            (pointer - start) / extent * 100.0
        }
    };
    ImagePosition::new(
        axis(pointer_x, bounds.left, bounds.width),
        axis(pointer_y, bounds.top, bounds.height),
    )
}

/// Window-wide pointer listener registry
#[derive(Debug, Clone, Default)]
pub struct InputSurface {
    listeners: Arc<AtomicUsize>,
}

impl InputSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start receiving pointer moves and releases anywhere in the window
    pub fn capture(&self) -> InputCapture {
        self.listeners.fetch_add(1, Ordering::SeqCst);
        InputCapture {
            listeners: self.listeners.clone(),
        }
    }

    /// Number of captures currently held
    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.listeners.load(Ordering::SeqCst)
    }
}

/// Held pointer capture; released on drop
#[derive(Debug)]
pub struct InputCapture {
    listeners: Arc<AtomicUsize>,
}

impl Drop for InputCapture {
    fn drop(&mut self) {
        self.listeners.fetch_sub(1, Ordering::SeqCst);
    }
}

#[derive(Debug)]
struct ActiveDrag {
    image_id: String,
    _capture: InputCapture,
}

/// Idle or dragging one image
#[derive(Debug)]
pub struct DragController {
    surface: InputSurface,
    active: Option<ActiveDrag>,
}

impl DragController {
    pub fn new(surface: InputSurface) -> Self {
        Self {
            surface,
            active: None,
        }
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_ref().map(|drag| drag.image_id.as_str())
    }

    pub fn is_dragging(&self, image_id: &str) -> bool {
        self.active_id() == Some(image_id)
    }

    /// Pointer went down on an image; any previous drag ends first
    pub fn begin(&mut self, image_id: &str) {
        self.end();
        debug!("Drag started on image {}", image_id);
        self.active = Some(ActiveDrag {
            image_id: image_id.to_string(),
            _capture: self.surface.capture(),
        });
    }

    /// Move the dragged image under the pointer.
    ///
    /// Returns the stored position, or `None` when idle or when the image
    /// no longer exists (which also ends the drag).
    pub fn pointer_moved(
        &mut self,
        ctx: &OverlayContext,
        bounds: CanvasBounds,
        pointer_x: f32,
        pointer_y: f32,
    ) -> Result<Option<ImagePosition>, StoreError> {
        let Some(image_id) = self.active_id().map(str::to_string) else {
            return Ok(None);
        };

        let exists = ctx.read(|set| set.image.image(&image_id).is_some())?;
        if !exists {
            self.end();
            return Ok(None);
        }

        let position = pointer_to_percent(bounds, pointer_x, pointer_y);
        ctx.update::<ImageOverlay, _>(|overlay| {
            overlay.set_position(&image_id, position);
        })?;
        Ok(Some(position))
    }

    /// Pointer released
    pub fn end(&mut self) {
        if let Some(drag) = self.active.take() {
            debug!("Drag ended on image {}", drag.image_id);
        }
    }

    /// End the drag if its image was removed
    pub fn retain_existing(&mut self, overlay: &ImageOverlay) {
        let removed = self
            .active_id()
            .is_some_and(|id| overlay.image(id).is_none());
        if removed {
            self.end();
        }
    }
}
