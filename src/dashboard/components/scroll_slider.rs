//! Integer slider that also responds to the mouse wheel

use egui::{Response, Slider, Ui};
use std::ops::RangeInclusive;

/// Add a slider over whole numbers.
///
/// While hovered, each wheel notch moves the value by `wheel_step`,
/// staying inside `range`.
pub fn scroll_slider(
    ui: &mut Ui,
    value: &mut u32,
    range: RangeInclusive<u32>,
    wheel_step: u32,
    suffix: &str,
) -> Response {
    let mut response = ui.add(Slider::new(value, range.clone()).step_by(1.0).suffix(suffix));

    if response.hovered() {
        let scroll_delta = ui.input(|i| i.raw_scroll_delta.y);
        if scroll_delta != 0.0 {
            *value = wheel_adjust(*value, scroll_delta, wheel_step, &range);
            response.mark_changed();
            ui.ctx().request_repaint();
        }
    }

    response
}

/// Wheel up (positive delta) increases the value, wheel down decreases it
fn wheel_adjust(value: u32, scroll_delta: f32, step: u32, range: &RangeInclusive<u32>) -> u32 {
    let next = if scroll_delta > 0.0 {
        value.saturating_add(step)
    } else {
        value.saturating_sub(step)
    };
    next.clamp(*range.start(), *range.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_adjust_stays_in_range() {
        assert_eq!(wheel_adjust(5, 1.0, 1, &(1..=10)), 6);
        assert_eq!(wheel_adjust(10, 1.0, 1, &(1..=10)), 10);
        assert_eq!(wheel_adjust(12, -3.0, 5, &(10..=200)), 10);
        assert_eq!(wheel_adjust(195, 2.0, 10, &(10..=200)), 200);
    }
}
