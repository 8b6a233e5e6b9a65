//! Canvas geometry
//!
//! Overlay positions are defined on a logical canvas (640x360 by default)
//! and scaled to whatever space the preview panel has.

use egui::{pos2, vec2, Pos2, Rect, Vec2};

use crate::overlay::{ImageItem, ImagePosition};

/// Distance of the corner overlays from the canvas edges
pub const EDGE_MARGIN: f32 = 16.0;
/// Distance of the presenter tag from the bottom edge
pub const PRESENTER_BOTTOM: f32 = 80.0;
/// Horizontal padding inside a text block
pub const BLOCK_PADDING_X: f32 = 8.0;
/// Vertical padding inside a text block
pub const BLOCK_PADDING_Y: f32 = 4.0;
/// Space between two stacked text blocks
pub const BLOCK_GAP: f32 = 4.0;
/// Width fraction available to the Bible and lyrics overlays
pub const CORNER_MAX_WIDTH: f32 = 0.8;
/// Width fraction available to the presenter tag
pub const PRESENTER_MAX_WIDTH: f32 = 0.6;
/// Largest fraction of the canvas an image may cover
pub const IMAGE_MAX_FRACTION: f32 = 0.9;

/// Logical canvas scaled into screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    /// Canvas area on screen
    pub rect: Rect,
    /// Screen points per logical pixel
    pub scale: f32,
    /// Logical canvas size
    pub logical: Vec2,
}

impl CanvasTransform {
    /// Largest rect with the logical aspect ratio that fits `available`, centered horizontally
    pub fn fit(available: Rect, logical: Vec2) -> Self {
        let logical = vec2(logical.x.max(1.0), logical.y.max(1.0));
        let scale = (available.width() / logical.x)
            .min(available.height() / logical.y)
            .max(0.01);
        let size = logical * scale;
        let min = pos2(
            available.center().x - size.x / 2.0,
            available.min.y,
        );
        Self {
            rect: Rect::from_min_size(min, size),
            scale,
            logical,
        }
    }

    /// Map a logical point to screen space
    pub fn point(&self, x: f32, y: f32) -> Pos2 {
        self.rect.min + vec2(x, y) * self.scale
    }

    /// Scale a logical length
    pub fn len(&self, logical: f32) -> f32 {
        logical * self.scale
    }

    pub fn width(&self) -> f32 {
        self.rect.width()
    }
}

/// Height of the ticker content band for a content font size
pub fn ticker_band_height(font_size_px: u32) -> f32 {
    font_size_px as f32 + 16.0
}

/// Side of an image's square box, as a fraction of canvas width
pub fn image_box_fraction(size_percent: u32) -> f32 {
    (size_percent as f32 / 100.0).min(IMAGE_MAX_FRACTION)
}

/// Square box an image occupies, centered on its percent position.
///
/// The side is `size_percent` of the canvas width, capped at 90% of
/// both canvas dimensions.
pub fn image_rect(canvas: Rect, item: &ImageItem) -> Rect {
    let side = (canvas.width() * image_box_fraction(item.size_percent()))
        .min(canvas.height() * IMAGE_MAX_FRACTION);
    let center = position_to_point(canvas, item.position);
    Rect::from_center_size(center, vec2(side, side))
}

/// Screen point for a percent position inside `canvas`
pub fn position_to_point(canvas: Rect, position: ImagePosition) -> Pos2 {
    pos2(
        canvas.min.x + canvas.width() * position.x_percent / 100.0,
        canvas.min.y + canvas.height() * position.y_percent / 100.0,
    )
}

/// Fit an image of `image_size` inside `bounds`, keeping its aspect ratio
pub fn contain(image_size: Vec2, bounds: Rect) -> Rect {
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return bounds;
    }
    let scale = (bounds.width() / image_size.x).min(bounds.height() / image_size.y);
    Rect::from_center_size(bounds.center(), image_size * scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ImageHandle;

    fn canvas() -> Rect {
        Rect::from_min_size(Pos2::ZERO, vec2(640.0, 360.0))
    }

    #[test]
    fn test_fit_keeps_aspect_ratio() {
        let available = Rect::from_min_size(pos2(10.0, 20.0), vec2(1280.0, 1000.0));
        let transform = CanvasTransform::fit(available, vec2(640.0, 360.0));

        assert!((transform.scale - 2.0).abs() < 0.001);
        assert!((transform.rect.width() - 1280.0).abs() < 0.001);
        assert!((transform.rect.height() - 720.0).abs() < 0.001);
        assert_eq!(transform.point(16.0, 16.0), pos2(42.0, 52.0));
    }

    #[test]
    fn test_fit_limited_by_height_is_centered() {
        let available = Rect::from_min_size(Pos2::ZERO, vec2(1000.0, 180.0));
        let transform = CanvasTransform::fit(available, vec2(640.0, 360.0));

        assert!((transform.scale - 0.5).abs() < 0.001);
        assert!((transform.rect.min.x - 340.0).abs() < 0.001);
    }

    #[test]
    fn test_image_rect_is_square_and_centered() {
        let mut item = ImageItem::new("1", ImageHandle(1), 25);
        item.position = ImagePosition::new(25.0, 50.0);

        let rect = image_rect(canvas(), &item);
        assert!((rect.width() - 160.0).abs() < 0.001);
        assert!((rect.height() - 160.0).abs() < 0.001);
        assert!((rect.center().x - 160.0).abs() < 0.001);
        assert!((rect.center().y - 180.0).abs() < 0.001);
    }

    #[test]
    fn test_image_rect_is_capped() {
        let item = ImageItem::new("1", ImageHandle(1), 200);
        let rect = image_rect(canvas(), &item);
        // 90% of the canvas height is the binding cap on a 16:9 canvas
        assert!((rect.width() - 324.0).abs() < 0.001);
        assert_eq!(image_box_fraction(200), IMAGE_MAX_FRACTION);
    }

    #[test]
    fn test_contain_fits_wide_image() {
        let bounds = Rect::from_min_size(Pos2::ZERO, vec2(100.0, 100.0));
        let fitted = contain(vec2(200.0, 100.0), bounds);
        assert!((fitted.width() - 100.0).abs() < 0.001);
        assert!((fitted.height() - 50.0).abs() < 0.001);
        assert!((fitted.center().y - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_ticker_band_height() {
        assert_eq!(ticker_band_height(20), 36.0);
    }
}
