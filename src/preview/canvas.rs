//! Live preview canvas
//!
//! Paints every enabled overlay from the latest committed store values,
//! drives the ticker scroll and title blink, and lets images be dragged
//! into place.

use egui::text::LayoutJob;
use egui::{pos2, vec2, Align, Color32, CursorIcon, FontId, Galley, Painter, Rect, RichText, Sense, Stroke, Vec2};
use std::sync::Arc;
use std::time::Instant;

use crate::dashboard::theme::{color_with_alpha, hex_color32, ThemeColors};
use crate::media::ImageLibrary;
use crate::overlay::{
    BibleOverlay, ImageOverlay, LyricsOverlay, OverlaySet, PresenterOverlay, TextStyle, TickerOverlay,
};
use crate::preview::blink::BlinkTimer;
use crate::preview::drag::{DragController, InputSurface};
use crate::preview::layout::{
    contain, image_rect, ticker_band_height, CanvasTransform, BLOCK_GAP, BLOCK_PADDING_X,
    BLOCK_PADDING_Y, CORNER_MAX_WIDTH, EDGE_MARGIN, PRESENTER_BOTTOM, PRESENTER_MAX_WIDTH,
};
use crate::preview::ticker::{FrameScheduler, TickerAnimation};
use crate::shared::{OverlayContext, StoreError};

/// Frames per second the ticker speed is defined against
const REFERENCE_FPS: f32 = 60.0;
/// Longest frame gap the ticker catches up on
const MAX_CATCH_UP_FRAMES: f32 = 4.0;

/// The preview panel's canvas and its animation state
pub struct PreviewCanvas<S: FrameScheduler = egui::Context> {
    scheduler: S,
    /// Logical canvas size overlays are laid out on
    logical_size: Vec2,
    ticker: TickerAnimation,
    /// Width of the ticker text measured on the last paint, in logical pixels
    ticker_text_width: f32,
    blink: BlinkTimer,
    drag: DragController,
}

impl<S: FrameScheduler> PreviewCanvas<S> {
    pub fn new(scheduler: S, logical_size: Vec2, surface: InputSurface) -> Self {
        Self {
            scheduler,
            logical_size,
            ticker: TickerAnimation::new(),
            ticker_text_width: 0.0,
            blink: BlinkTimer::new(),
            drag: DragController::new(surface),
        }
    }

    #[cfg(test)]
    pub fn ticker_offset(&self) -> f32 {
        self.ticker.offset()
    }

    /// Advance the ticker loop and blink timer for one frame
    pub fn animate(&mut self, ticker: &TickerOverlay, frame_secs: f32, now: Instant) -> bool {
        self.ticker.sync(ticker.enabled, &self.scheduler);
        let frames = (frame_secs * REFERENCE_FPS).clamp(0.0, MAX_CATCH_UP_FRAMES);
        self.ticker.on_frame(
            ticker.scroll_speed(),
            self.ticker_text_width,
            self.logical_size.x,
            frames,
            &self.scheduler,
        );

        self.blink.sync(ticker.enabled && ticker.title_blink, now);
        let visible = self.blink.poll(now);
        if let Some(delay) = self.blink.until_next_toggle(now) {
            self.scheduler.request_frame_after(delay);
        }
        visible
    }

    /// Lay out, paint and handle input for the whole canvas
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &OverlayContext,
        library: &mut ImageLibrary,
    ) -> Result<(), StoreError> {
        let available = ui.available_rect_before_wrap();
        let transform = CanvasTransform::fit(available, self.logical_size);
        ui.allocate_rect(transform.rect, Sense::hover());

        let hovered_image = self.handle_image_drag(ui, ctx, &transform)?;

        // Paint from what the store holds after this frame's drag updates
        let set = ctx.snapshot()?;
        let (frame_secs, now) = (ui.input(|i| i.stable_dt), Instant::now());
        let title_visible = self.animate(&set.ticker, frame_secs, now);

        let painter = ui.painter_at(transform.rect);
        painter.rect_filled(transform.rect, 0.0, ThemeColors::CANVAS_BACKDROP);

        paint_overlays(&painter, &transform, &set, |painter, ticker, band| {
            self.paint_ticker(painter, &transform, ticker, band, title_visible)
        });
        self.paint_images(ui, &painter, &transform, &set.image, library, hovered_image.as_deref());

        painter.rect_stroke(transform.rect, 0.0, Stroke::new(1.0, ThemeColors::BORDER));
        Ok(())
    }

    /// Route pointer input on images to the drag controller.
    ///
    /// Returns the id of the image under the pointer.
    fn handle_image_drag(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &OverlayContext,
        transform: &CanvasTransform,
    ) -> Result<Option<String>, StoreError> {
        let images = ctx.get::<ImageOverlay>()?;
        self.drag.retain_existing(&images);
        if !images.enabled {
            self.drag.end();
            return Ok(None);
        }

        let mut hovered = None;
        for item in &images.images {
            let rect = image_rect(transform.rect, item);
            let id = ui.id().with(("overlay_image", &item.id));
            let response = ui.interact(rect, id, Sense::drag());

            if response.drag_started() {
                self.drag.begin(&item.id);
            }
            if response.dragged() && self.drag.is_dragging(&item.id) {
                if let Some(pointer) = response.interact_pointer_pos() {
                    self.drag
                        .pointer_moved(ctx, transform.rect.into(), pointer.x, pointer.y)?;
                }
            }
            if response.drag_stopped() {
                self.drag.end();
            }

            if response.hovered() || self.drag.is_dragging(&item.id) {
                ui.ctx().set_cursor_icon(CursorIcon::Move);
                hovered = Some(item.id.clone());
            }
        }
        Ok(hovered)
    }

    fn paint_ticker(
        &mut self,
        painter: &Painter,
        transform: &CanvasTransform,
        ticker: &TickerOverlay,
        band: Rect,
        title_visible: bool,
    ) {
        let scale = transform.scale;

        if title_visible {
            let title = layout_block(painter, &ticker.ticker_title, &ticker.title_style, f32::INFINITY, Align::Center, scale);
            let size = block_size(&title, scale);
            let rect = Rect::from_min_size(
                pos2(band.center().x - size.x / 2.0, band.min.y - transform.len(BLOCK_GAP) - size.y),
                size,
            );
            paint_block(painter, title, &ticker.title_style, rect, Align::Center, scale);
        }

        let style = &ticker.content_style;
        if let Some(background) = style.background() {
            painter.rect_filled(band, 0.0, hex_color32(background));
        }
        let content = painter.layout_no_wrap(
            ticker.ticker_content.clone(),
            FontId::proportional(style.font_size_px() as f32 * scale),
            hex_color32(&style.font_color),
        );
        self.ticker_text_width = content.size().x / scale;

        let origin = pos2(
            band.min.x + transform.len(self.ticker.offset()),
            band.center().y - content.size().y / 2.0,
        );
        painter
            .with_clip_rect(band.intersect(painter.clip_rect()))
            .galley(origin, content, Color32::WHITE);
    }

    fn paint_images(
        &self,
        ui: &egui::Ui,
        painter: &Painter,
        transform: &CanvasTransform,
        overlay: &ImageOverlay,
        library: &mut ImageLibrary,
        hovered: Option<&str>,
    ) {
        if !overlay.enabled {
            return;
        }
        for item in &overlay.images {
            let rect = image_rect(transform.rect, item);
            match library.texture(ui.ctx(), item.image_ref) {
                Some(texture) => {
                    let fitted = contain(texture.size_vec2(), rect);
                    painter.image(
                        texture.id(),
                        fitted,
                        Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                        Color32::WHITE,
                    );
                }
                None => {
                    painter.rect_stroke(rect, 4.0, Stroke::new(1.0, ThemeColors::TEXT_MUTED));
                }
            }

            if self.drag.is_dragging(&item.id) {
                painter.rect_stroke(rect.expand(2.0), 2.0, Stroke::new(2.0, ThemeColors::ACCENT_PRIMARY));
            } else if hovered == Some(item.id.as_str()) {
                painter.circle_filled(rect.center(), 18.0, color_with_alpha(Color32::BLACK, 128));
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "✥",
                    FontId::proportional(20.0),
                    Color32::WHITE,
                );
            }
        }
    }
}

impl<S: FrameScheduler> Drop for PreviewCanvas<S> {
    fn drop(&mut self) {
        self.ticker.stop(&self.scheduler);
        self.blink.disarm();
        self.drag.end();
    }
}

/// Paint the text overlays; the ticker band is handed to `paint_ticker`
fn paint_overlays(
    painter: &Painter,
    transform: &CanvasTransform,
    set: &OverlaySet,
    paint_ticker: impl FnOnce(&Painter, &TickerOverlay, Rect),
) {
    if set.bible.enabled {
        paint_bible(painter, transform, &set.bible);
    }
    if set.lyrics.enabled {
        paint_lyrics(painter, transform, &set.lyrics);
    }
    if set.presenter.enabled {
        paint_presenter(painter, transform, &set.presenter);
    }
    if set.ticker.enabled {
        let height = transform.len(ticker_band_height(set.ticker.content_style.font_size_px()));
        let bottom = transform.rect.max.y - transform.len(EDGE_MARGIN);
        let band = Rect::from_min_max(
            pos2(transform.rect.min.x, bottom - height),
            pos2(transform.rect.max.x, bottom),
        );
        paint_ticker(painter, &set.ticker, band);
    }
}

fn paint_bible(painter: &Painter, transform: &CanvasTransform, bible: &BibleOverlay) {
    let scale = transform.scale;
    let wrap = block_wrap_width(transform, CORNER_MAX_WIDTH);
    let origin = transform.point(EDGE_MARGIN, EDGE_MARGIN);

    let reference = layout_block(painter, &bible.reference_label(), &bible.reference_style, wrap, Align::LEFT, scale);
    let reference_rect = Rect::from_min_size(origin, block_size(&reference, scale));
    paint_block(painter, reference, &bible.reference_style, reference_rect, Align::LEFT, scale);

    let content = layout_block(painter, &bible.verse_content, &bible.content_style, wrap, Align::LEFT, scale);
    let content_rect = Rect::from_min_size(
        pos2(origin.x, reference_rect.max.y + transform.len(BLOCK_GAP)),
        block_size(&content, scale),
    );
    paint_block(painter, content, &bible.content_style, content_rect, Align::LEFT, scale);
}

fn paint_lyrics(painter: &Painter, transform: &CanvasTransform, lyrics: &LyricsOverlay) {
    let scale = transform.scale;
    let wrap = block_wrap_width(transform, CORNER_MAX_WIDTH);
    let right = transform.rect.max.x - transform.len(EDGE_MARGIN);
    let top = transform.rect.min.y + transform.len(EDGE_MARGIN);

    let title_text = lyrics.displayed_song().map(|song| song.title.as_str()).unwrap_or("");
    let title = layout_block(painter, title_text, &lyrics.title_style, wrap, Align::RIGHT, scale);
    let title_size = block_size(&title, scale);
    let title_rect = Rect::from_min_size(pos2(right - title_size.x, top), title_size);
    paint_block(painter, title, &lyrics.title_style, title_rect, Align::RIGHT, scale);

    let verse = layout_block(painter, lyrics.current_verse(), &lyrics.content_style, wrap, Align::RIGHT, scale);
    let verse_size = block_size(&verse, scale);
    let verse_rect = Rect::from_min_size(
        pos2(right - verse_size.x, title_rect.max.y + transform.len(BLOCK_GAP)),
        verse_size,
    );
    paint_block(painter, verse, &lyrics.content_style, verse_rect, Align::RIGHT, scale);
}

fn paint_presenter(painter: &Painter, transform: &CanvasTransform, presenter: &PresenterOverlay) {
    let scale = transform.scale;
    let wrap = block_wrap_width(transform, PRESENTER_MAX_WIDTH);
    let left = transform.rect.min.x + transform.len(EDGE_MARGIN);
    let bottom = transform.rect.max.y - transform.len(PRESENTER_BOTTOM);

    let name = layout_block(painter, &presenter.presenter_name, &presenter.name_style, wrap, Align::LEFT, scale);
    let name_size = block_size(&name, scale);
    let name_rect = Rect::from_min_size(pos2(left, bottom - name_size.y), name_size);

    let title = layout_block(painter, &presenter.presenter_title, &presenter.title_style, wrap, Align::LEFT, scale);
    let title_size = block_size(&title, scale);
    let title_rect = Rect::from_min_size(
        pos2(left, name_rect.min.y - transform.len(BLOCK_GAP) - title_size.y),
        title_size,
    );

    paint_block(painter, title, &presenter.title_style, title_rect, Align::LEFT, scale);
    paint_block(painter, name, &presenter.name_style, name_rect, Align::LEFT, scale);
}

/// Wrap width for text inside a block limited to `fraction` of the canvas
fn block_wrap_width(transform: &CanvasTransform, fraction: f32) -> f32 {
    (transform.width() * fraction - transform.len(BLOCK_PADDING_X * 2.0)).max(1.0)
}

fn layout_block(
    painter: &Painter,
    text: &str,
    style: &TextStyle,
    wrap_width: f32,
    align: Align,
    scale: f32,
) -> Arc<Galley> {
    let mut job = LayoutJob::simple(
        text.to_owned(),
        FontId::proportional(style.font_size_px() as f32 * scale),
        hex_color32(&style.font_color),
        wrap_width,
    );
    job.halign = align;
    painter.layout_job(job)
}

fn block_size(galley: &Galley, scale: f32) -> Vec2 {
    galley.size() + vec2(BLOCK_PADDING_X * 2.0, BLOCK_PADDING_Y * 2.0) * scale
}

/// Paint a text block's background and text into `rect`
fn paint_block(painter: &Painter, galley: Arc<Galley>, style: &TextStyle, rect: Rect, align: Align, scale: f32) {
    if let Some(background) = style.background() {
        painter.rect_filled(rect, 0.0, hex_color32(background));
    }
    let padding = vec2(BLOCK_PADDING_X, BLOCK_PADDING_Y) * scale;
    let x = match align {
        Align::Min => rect.min.x + padding.x,
        Align::Center => rect.center().x,
        Align::Max => rect.max.x - padding.x,
    };
    painter.galley(pos2(x, rect.min.y + padding.y), galley, hex_color32(&style.font_color));
}

/// Placeholder shown when the preview cannot reach the store
pub fn render_unavailable(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            RichText::new("Preview unavailable")
                .size(14.0)
                .color(ThemeColors::TEXT_MUTED),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::ticker::CountingScheduler;
    use std::time::Duration;

    fn canvas() -> PreviewCanvas<CountingScheduler> {
        PreviewCanvas::new(CountingScheduler::default(), vec2(640.0, 360.0), InputSurface::new())
    }

    #[test]
    fn test_animate_scrolls_enabled_ticker() {
        let mut canvas = canvas();
        let ticker = TickerOverlay::default();

        canvas.animate(&ticker, 1.0 / 60.0, Instant::now());
        assert!((canvas.ticker_offset() + 2.5).abs() < 0.01);
    }

    #[test]
    fn test_animate_holds_disabled_ticker() {
        let mut canvas = canvas();
        let mut ticker = TickerOverlay::default();
        ticker.enabled = false;

        canvas.animate(&ticker, 1.0 / 60.0, Instant::now());
        assert_eq!(canvas.ticker_offset(), 0.0);
        assert_eq!(canvas.scheduler.requested.get(), 0);
    }

    #[test]
    fn test_blink_only_when_enabled() {
        let mut canvas = canvas();
        let start = Instant::now();
        let mut ticker = TickerOverlay::default();
        ticker.title_blink = true;

        assert!(canvas.animate(&ticker, 0.0, start));
        assert!(!canvas.animate(&ticker, 0.0, start + Duration::from_millis(500)));
        assert!(canvas.scheduler.delayed.get() >= 2);

        ticker.enabled = false;
        assert!(canvas.animate(&ticker, 0.0, start + Duration::from_millis(600)));
    }

    #[test]
    fn test_long_frames_are_capped() {
        let mut canvas = canvas();
        canvas.animate(&TickerOverlay::default(), 5.0, Instant::now());
        // speed 5 * 0.5 px * 4 frames
        assert!((canvas.ticker_offset() + 10.0).abs() < 0.01);
    }

    #[test]
    fn test_drop_stops_animation_and_releases_drag() {
        let scheduler = CountingScheduler::default();
        let surface = InputSurface::new();
        let mut canvas = PreviewCanvas::new(&scheduler, vec2(640.0, 360.0), surface.clone());

        let mut ticker = TickerOverlay::default();
        ticker.title_blink = true;
        canvas.animate(&ticker, 1.0 / 60.0, Instant::now());
        canvas.drag.begin("1712345678901");
        assert_eq!(surface.listener_count(), 1);
        assert_eq!(scheduler.cancelled.get(), 0);

        drop(canvas);
        assert_eq!(surface.listener_count(), 0);
        assert_eq!(scheduler.cancelled.get(), 1);
    }
}
