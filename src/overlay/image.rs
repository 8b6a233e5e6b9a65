//! Positionable image overlay

use serde::{Deserialize, Deserializer, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;

use crate::media::{ImageHandle, MediaError};

pub const MIN_IMAGE_SIZE_PERCENT: u32 = 10;
pub const MAX_IMAGE_SIZE_PERCENT: u32 = 200;
pub const DEFAULT_IMAGE_SIZE_PERCENT: u32 = 100;
/// Number of images the overlay is documented to hold
pub const DEFAULT_MAX_IMAGES: usize = 10;

/// Center of an image as a percentage of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImagePosition {
    pub x_percent: f32,
    pub y_percent: f32,
}

impl ImagePosition {
    /// Build a position, clamping both axes to [0, 100]
    pub fn new(x_percent: f32, y_percent: f32) -> Self {
        Self {
            x_percent: clamp_percent(x_percent),
            y_percent: clamp_percent(y_percent),
        }
    }

    pub fn center() -> Self {
        Self::new(50.0, 50.0)
    }
}

impl Default for ImagePosition {
    fn default() -> Self {
        Self::center()
    }
}

fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// One image placed on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageItem {
    /// Creation time in milliseconds, bumped when two images share a millisecond
    pub id: String,
    pub image_ref: ImageHandle,
    #[serde(deserialize_with = "deserialize_size")]
    size_percent: u32,
    pub position: ImagePosition,
}

impl ImageItem {
    pub fn new(id: impl Into<String>, image_ref: ImageHandle, size_percent: u32) -> Self {
        Self {
            id: id.into(),
            image_ref,
            size_percent: clamp_size(size_percent),
            position: ImagePosition::center(),
        }
    }

    /// Width as a percentage of canvas width, in [10, 200]
    pub fn size_percent(&self) -> u32 {
        self.size_percent
    }
}

pub fn clamp_size(size: u32) -> u32 {
    size.clamp(MIN_IMAGE_SIZE_PERCENT, MAX_IMAGE_SIZE_PERCENT)
}

fn deserialize_size<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    u32::deserialize(deserializer).map(clamp_size)
}

/// How the image count limit is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageLimit {
    pub max_images: usize,
    /// Reject images past the limit instead of only warning
    pub enforce: bool,
}

impl Default for ImageLimit {
    fn default() -> Self {
        Self {
            max_images: DEFAULT_MAX_IMAGES,
            enforce: true,
        }
    }
}

/// Image overlay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageOverlay {
    pub enabled: bool,
    pub images: Vec<ImageItem>,
}

impl Default for ImageOverlay {
    fn default() -> Self {
        Self {
            enabled: true,
            images: Vec::new(),
        }
    }
}

impl ImageOverlay {
    /// Remove every image, keeping the enabled flag
    pub fn reset(&mut self) {
        self.images.clear();
    }

    pub fn image(&self, id: &str) -> Option<&ImageItem> {
        self.images.iter().find(|item| item.id == id)
    }

    pub fn is_full(&self, limit: ImageLimit) -> bool {
        self.images.len() >= limit.max_images
    }

    /// Place a decoded image at the canvas center, stamped with the current time
    pub fn add_image(
        &mut self,
        image_ref: ImageHandle,
        size_percent: u32,
        limit: ImageLimit,
    ) -> Result<String, MediaError> {
        self.add_image_at(now_millis(), image_ref, size_percent, limit)
    }

    /// Place a decoded image using `now_ms` as its id
    pub fn add_image_at(
        &mut self,
        now_ms: u64,
        image_ref: ImageHandle,
        size_percent: u32,
        limit: ImageLimit,
    ) -> Result<String, MediaError> {
        if self.is_full(limit) {
            if limit.enforce {
                return Err(MediaError::LimitReached {
                    max: limit.max_images,
                });
            }
            warn!(
                "Image overlay holds {} images, over the limit of {}",
                self.images.len() + 1,
                limit.max_images
            );
        }

        let mut stamp = now_ms;
        while self.image(&stamp.to_string()).is_some() {
            stamp += 1;
        }
        let id = stamp.to_string();
        self.images.push(ImageItem::new(id.clone(), image_ref, size_percent));
        Ok(id)
    }

    pub fn remove_image(&mut self, id: &str) -> Option<ImageItem> {
        let index = self.images.iter().position(|item| item.id == id)?;
        Some(self.images.remove(index))
    }

    /// Move an image; returns false when the id is unknown
    pub fn set_position(&mut self, id: &str, position: ImagePosition) -> bool {
        match self.images.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.position = ImagePosition::new(position.x_percent, position.y_percent);
                true
            }
            None => false,
        }
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_image_is_centered_and_clamped() {
        let item = ImageItem::new("1", ImageHandle(7), 500);
        assert_eq!(item.size_percent(), 200);
        assert_eq!(item.position, ImagePosition::new(50.0, 50.0));

        let item = ImageItem::new("2", ImageHandle(7), 1);
        assert_eq!(item.size_percent(), 10);
    }

    #[test]
    fn test_position_is_clamped() {
        let position = ImagePosition::new(-12.0, 140.0);
        assert_eq!(position.x_percent, 0.0);
        assert_eq!(position.y_percent, 100.0);
        assert_eq!(ImagePosition::new(f32::NAN, 30.0).x_percent, 0.0);
    }

    #[test]
    fn test_ids_stay_unique_within_one_millisecond() {
        let mut overlay = ImageOverlay::default();
        let limit = ImageLimit::default();
        let first = overlay.add_image_at(1_000, ImageHandle(1), 100, limit).unwrap();
        let second = overlay.add_image_at(1_000, ImageHandle(2), 100, limit).unwrap();
        assert_eq!(first, "1000");
        assert_eq!(second, "1001");
    }

    #[test]
    fn test_enforced_limit_rejects_eleventh_image() {
        let mut overlay = ImageOverlay::default();
        let limit = ImageLimit::default();
        for i in 0..10 {
            overlay.add_image_at(i, ImageHandle(i), 100, limit).unwrap();
        }

        let result = overlay.add_image_at(99, ImageHandle(99), 100, limit);
        assert!(matches!(result, Err(MediaError::LimitReached { max: 10 })));
        assert_eq!(overlay.images.len(), 10);
    }

    #[test]
    fn test_advisory_limit_allows_more_images() {
        let mut overlay = ImageOverlay::default();
        let limit = ImageLimit {
            max_images: 1,
            enforce: false,
        };
        overlay.add_image_at(1, ImageHandle(1), 100, limit).unwrap();
        overlay.add_image_at(2, ImageHandle(2), 100, limit).unwrap();
        assert_eq!(overlay.images.len(), 2);
    }

    #[test]
    fn test_set_position_and_remove() {
        let mut overlay = ImageOverlay::default();
        let id = overlay
            .add_image_at(5, ImageHandle(1), 80, ImageLimit::default())
            .unwrap();

        assert!(overlay.set_position(&id, ImagePosition::new(20.0, 75.0)));
        assert_eq!(overlay.image(&id).unwrap().position.x_percent, 20.0);
        assert!(!overlay.set_position("missing", ImagePosition::center()));

        let removed = overlay.remove_image(&id).unwrap();
        assert_eq!(removed.image_ref, ImageHandle(1));
        assert!(overlay.images.is_empty());
        assert!(overlay.remove_image(&id).is_none());
    }

    #[test]
    fn test_reset_clears_images_and_keeps_enabled() {
        let mut overlay = ImageOverlay::default();
        overlay.enabled = false;
        overlay
            .add_image_at(5, ImageHandle(1), 80, ImageLimit::default())
            .unwrap();

        overlay.reset();
        assert!(overlay.images.is_empty());
        assert!(!overlay.enabled);
    }
}
