//! Ticker title blink timer

use std::time::{Duration, Instant};

pub const BLINK_PERIOD: Duration = Duration::from_millis(500);

/// Repeating timer toggling the ticker title's visibility
#[derive(Debug, Clone, PartialEq)]
pub struct BlinkTimer {
    visible: bool,
    /// Time of the last toggle while armed
    last_toggle: Option<Instant>,
}

impl Default for BlinkTimer {
    fn default() -> Self {
        Self {
            visible: true,
            last_toggle: None,
        }
    }
}

impl BlinkTimer {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.last_toggle.is_some()
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Arm while `active`, disarm and show the title otherwise
    pub fn sync(&mut self, active: bool, now: Instant) {
        match (active, self.last_toggle) {
            (true, None) => self.last_toggle = Some(now),
            (false, Some(_)) => self.disarm(),
            _ => {}
        }
    }

    pub fn disarm(&mut self) {
        self.last_toggle = None;
        self.visible = true;
    }

    /// Apply every toggle due by `now` and return the visibility
    pub fn poll(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_toggle {
            let elapsed = now.saturating_duration_since(last);
            let ticks = (elapsed.as_millis() / BLINK_PERIOD.as_millis()) as u32;
            if ticks > 0 {
                if ticks % 2 == 1 {
                    self.visible = !self.visible;
                }
                self.last_toggle = Some(last + BLINK_PERIOD * ticks);
            }
        }
        self.visible
    }

    /// Time left until the next toggle, `None` while disarmed
    pub fn until_next_toggle(&self, now: Instant) -> Option<Duration> {
        self.last_toggle
            .map(|last| (last + BLINK_PERIOD).saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles_every_period() {
        let start = Instant::now();
        let mut timer = BlinkTimer::new();
        timer.sync(true, start);

        assert!(timer.poll(start + Duration::from_millis(499)));
        assert!(!timer.poll(start + Duration::from_millis(500)));
        assert!(timer.poll(start + Duration::from_millis(1000)));
        // Two periods at once cancel out
        assert!(timer.poll(start + Duration::from_millis(2050)));
        assert_eq!(
            timer.until_next_toggle(start + Duration::from_millis(2050)),
            Some(Duration::from_millis(450))
        );
    }

    #[test]
    fn test_disarm_shows_title() {
        let start = Instant::now();
        let mut timer = BlinkTimer::new();
        timer.sync(true, start);
        assert!(!timer.poll(start + BLINK_PERIOD));

        timer.sync(false, start + BLINK_PERIOD);
        assert!(!timer.is_armed());
        assert!(timer.is_visible());
        assert!(timer.poll(start + BLINK_PERIOD * 3));
        assert_eq!(timer.until_next_toggle(start), None);
    }
}
