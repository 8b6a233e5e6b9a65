//! Ticker scroll animation

use std::time::Duration;
use tracing::debug;

/// Pixels moved per animation frame for each step of scroll speed
pub const PIXELS_PER_SPEED_STEP: f32 = 0.5;

/// Host hook that drives animation frames
pub trait FrameScheduler {
    /// Ask for another frame as soon as possible
    fn request_frame(&self);

    /// Ask for a frame once `delay` has passed
    fn request_frame_after(&self, delay: Duration);

    /// Withdraw outstanding frame requests
    fn cancel_frames(&self);
}

impl FrameScheduler for egui::Context {
    fn request_frame(&self) {
        self.request_repaint();
    }

    fn request_frame_after(&self, delay: Duration) {
        self.request_repaint_after(delay);
    }

    fn cancel_frames(&self) {
        // egui forgets repaint requests nobody renews
    }
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for &S {
    fn request_frame(&self) {
        (**self).request_frame();
    }

    fn request_frame_after(&self, delay: Duration) {
        (**self).request_frame_after(delay);
    }

    fn cancel_frames(&self) {
        (**self).cancel_frames();
    }
}

/// Scheduler that only counts requests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct CountingScheduler {
    pub requested: std::cell::Cell<usize>,
    pub delayed: std::cell::Cell<usize>,
    pub cancelled: std::cell::Cell<usize>,
}

#[cfg(test)]
impl FrameScheduler for CountingScheduler {
    fn request_frame(&self) {
        self.requested.set(self.requested.get() + 1);
    }

    fn request_frame_after(&self, _delay: Duration) {
        self.delayed.set(self.delayed.get() + 1);
    }

    fn cancel_frames(&self) {
        self.cancelled.set(self.cancelled.get() + 1);
    }
}

/// Horizontal scroll state of the ticker content
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickerAnimation {
    /// Left edge of the content relative to the band, in logical pixels
    offset_px: f32,
    running: bool,
}

impl TickerAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> f32 {
        self.offset_px
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance by `frames` animation frames.
    ///
    /// Content that has fully left the band on the left wraps around to the
    /// right edge; the wrap replaces the move for that frame.
    pub fn step(&mut self, speed: u32, text_width: f32, container_width: f32, frames: f32) -> f32 {
        if self.offset_px < -text_width {
            self.offset_px = container_width;
        } else {
            self.offset_px -= speed as f32 * PIXELS_PER_SPEED_STEP * frames;
        }
        self.offset_px
    }

    /// Start or stop the loop to match the ticker's enabled flag.
    ///
    /// Restarting resumes from the current offset.
    pub fn sync(&mut self, enabled: bool, scheduler: &dyn FrameScheduler) {
        if enabled && !self.running {
            debug!("Ticker animation started at offset {:.1}", self.offset_px);
            self.running = true;
            scheduler.request_frame();
        } else if !enabled {
            self.stop(scheduler);
        }
    }

    /// Run one frame of the loop and schedule the next
    pub fn on_frame(
        &mut self,
        speed: u32,
        text_width: f32,
        container_width: f32,
        frames: f32,
        scheduler: &dyn FrameScheduler,
    ) {
        if !self.running {
            return;
        }
        self.step(speed, text_width, container_width, frames);
        scheduler.request_frame();
    }

    /// Cancel the loop; the offset is kept
    pub fn stop(&mut self, scheduler: &dyn FrameScheduler) {
        if self.running {
            debug!("Ticker animation stopped at offset {:.1}", self.offset_px);
            self.running = false;
            scheduler.cancel_frames();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_past_text_width_wraps_to_container() {
        let mut animation = TickerAnimation {
            offset_px: -301.0,
            running: true,
        };
        assert_eq!(animation.step(5, 300.0, 640.0, 1.0), 640.0);
    }

    #[test]
    fn test_step_moves_by_half_speed() {
        let mut animation = TickerAnimation::new();
        assert_eq!(animation.step(5, 300.0, 640.0, 1.0), -2.5);
        assert_eq!(animation.step(10, 300.0, 640.0, 2.0), -12.5);
    }

    #[test]
    fn test_exact_negative_width_still_moves() {
        let mut animation = TickerAnimation {
            offset_px: -300.0,
            running: true,
        };
        assert_eq!(animation.step(2, 300.0, 640.0, 1.0), -301.0);
        assert_eq!(animation.step(2, 300.0, 640.0, 1.0), 640.0);
    }

    #[test]
    fn test_loop_requests_frames_only_while_running() {
        let scheduler = CountingScheduler::default();
        let mut animation = TickerAnimation::new();

        animation.on_frame(5, 100.0, 640.0, 1.0, &scheduler);
        assert_eq!(scheduler.requested.get(), 0);
        assert_eq!(animation.offset(), 0.0);

        animation.sync(true, &scheduler);
        animation.on_frame(5, 100.0, 640.0, 1.0, &scheduler);
        assert_eq!(scheduler.requested.get(), 2);
        assert_eq!(animation.offset(), -2.5);
    }

    #[test]
    fn test_disable_cancels_and_reenable_resumes() {
        let scheduler = CountingScheduler::default();
        let mut animation = TickerAnimation::new();

        animation.sync(true, &scheduler);
        animation.on_frame(4, 100.0, 640.0, 1.0, &scheduler);
        animation.sync(false, &scheduler);
        assert_eq!(scheduler.cancelled.get(), 1);
        assert!(!animation.is_running());

        // Repeated disables do not cancel twice
        animation.sync(false, &scheduler);
        assert_eq!(scheduler.cancelled.get(), 1);

        animation.sync(true, &scheduler);
        animation.on_frame(4, 100.0, 640.0, 1.0, &scheduler);
        assert_eq!(animation.offset(), -4.0);
    }
}
