//! Sliders and progress bars.

use panelkit_core::{CommandBuffer, Rect};

use crate::input::Input;
use crate::style::{ProgressStyle, SliderStyle};

/// Snaps `value` to the nearest multiple of `step` above `min`.
fn quantize(value: f32, min: f32, step: f32) -> f32 {
    if step > 0.0 {
        min + ((value - min) / step).round() * step
    } else {
        value
    }
}

/// Draws a horizontal slider and returns the new value.
///
/// While a press that started on the track is held, horizontal pointer
/// motion moves the value: each pixel is worth `(max - min) / track_width`.
/// The result is quantized to `step` and clamped to `[min, max]`.
#[allow(clippy::too_many_arguments)]
pub fn slider(
    out: &mut CommandBuffer,
    rect: Rect,
    min: f32,
    value: f32,
    max: f32,
    step: f32,
    style: &SliderStyle,
    input: Option<&Input>,
) -> f32 {
    let (min, max) = if min <= max { (min, max) } else { (max, min) };
    let mut value = value.clamp(min, max);

    let track = rect.pad(style.padding);
    let cursor_w = track.h.min(track.w);
    let track_w = track.w - cursor_w;
    let range = max - min;

    if let Some(input) = input {
        let dragging = input.mouse_down && track.contains(input.mouse_down_pos);
        if dragging && track_w > 0.0 && input.mouse_delta.x != 0.0 {
            let moved = value + input.mouse_delta.x * range / track_w;
            value = quantize(moved, min, step).clamp(min, max);
        }
    }

    out.push_rect(rect, style.background);
    let bar_h = (track.h * 0.25).max(1.0);
    out.push_rect(
        Rect::new(track.x, track.y + (track.h - bar_h) * 0.5, track.w, bar_h),
        style.bar,
    );
    let ratio = if range > 0.0 { (value - min) / range } else { 0.0 };
    out.push_rect_framed(
        Rect::new(track.x + ratio * track_w, track.y, cursor_w, track.h),
        style.foreground,
        style.border,
        1.0,
        0.0,
    );
    value
}

/// Draws a progress bar and returns the (possibly modified) value.
///
/// With `modifiable`, holding the button over the bar sets the value to the
/// pointer position.
pub fn progress(
    out: &mut CommandBuffer,
    rect: Rect,
    value: usize,
    max: usize,
    modifiable: bool,
    style: &ProgressStyle,
    input: Option<&Input>,
) -> usize {
    let mut value = value.min(max);
    let area = rect.pad(style.padding);

    if let Some(input) = input {
        if modifiable && input.mouse_down && area.contains(input.mouse_pos) && area.w > 0.0 {
            let ratio = ((input.mouse_pos.x - area.x) / area.w).clamp(0.0, 1.0);
            value = ((ratio * max as f32).round() as usize).min(max);
        }
    }

    out.push_rect(rect, style.background);
    let ratio = if max > 0 { value as f32 / max as f32 } else { 0.0 };
    if value > 0 {
        out.push_rect(Rect::new(area.x, area.y, area.w * ratio, area.h), style.foreground);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::fixtures::{self, frame};
    use panelkit_core::{Color, Vec2};

    fn style() -> SliderStyle {
        SliderStyle {
            padding: Vec2::ZERO,
            bar: Color::WHITE,
            border: Color::WHITE,
            background: Color::BLACK,
            foreground: Color::WHITE,
        }
    }

    #[test]
    fn test_slider_press_without_motion_keeps_value() {
        let mut out = fixtures::buffer();
        let mut input = Input::new();
        let rect = Rect::new(0.0, 0.0, 110.0, 10.0);

        frame(&mut input, 95.0, 5.0, None);
        frame(&mut input, 95.0, 5.0, Some(true));
        let value = slider(&mut out, rect, 0.0, 0.0, 100.0, 1.0, &style(), Some(&input));
        assert_eq!(value, 0.0);
    }

    #[test]
    fn test_slider_drag_delta_and_quantizes() {
        let mut out = fixtures::buffer();
        let mut input = Input::new();
        // track 110 wide, cursor 10, so 100 px of travel
        let rect = Rect::new(0.0, 0.0, 110.0, 10.0);

        frame(&mut input, 55.0, 5.0, None);
        frame(&mut input, 55.0, 5.0, Some(true));
        frame(&mut input, 85.0, 5.0, None);
        let value = slider(&mut out, rect, 0.0, 0.0, 100.0, 10.0, &style(), Some(&input));
        assert_eq!(value, 30.0);

        // 30 - 17 = 13 snaps to 10
        frame(&mut input, 68.0, 5.0, None);
        let value = slider(&mut out, rect, 0.0, value, 100.0, 10.0, &style(), Some(&input));
        assert_eq!(value, 10.0);
    }

    #[test]
    fn test_slider_clamps_past_the_ends() {
        let mut out = fixtures::buffer();
        let mut input = Input::new();
        let rect = Rect::new(0.0, 0.0, 110.0, 10.0);

        frame(&mut input, 50.0, 5.0, None);
        frame(&mut input, 50.0, 5.0, Some(true));
        frame(&mut input, 500.0, 5.0, None);
        let value = slider(&mut out, rect, 0.0, 0.0, 1.0, 0.25, &style(), Some(&input));
        assert_eq!(value, 1.0);

        frame(&mut input, -500.0, 5.0, None);
        let value = slider(&mut out, rect, 0.0, value, 1.0, 0.25, &style(), Some(&input));
        assert_eq!(value, 0.0);
    }

    #[test]
    fn test_slider_ignores_press_outside_track() {
        let mut out = fixtures::buffer();
        let mut input = Input::new();
        let rect = Rect::new(0.0, 0.0, 110.0, 10.0);

        frame(&mut input, 200.0, 5.0, Some(true));
        frame(&mut input, 50.0, 5.0, None);
        let value = slider(&mut out, rect, 0.0, 7.0, 100.0, 1.0, &style(), Some(&input));
        assert_eq!(value, 7.0);
    }

    #[test]
    fn test_progress_modifiable() {
        let mut out = fixtures::buffer();
        let mut input = Input::new();
        let style = ProgressStyle {
            padding: Vec2::ZERO,
            background: Color::BLACK,
            foreground: Color::WHITE,
        };
        let rect = Rect::new(0.0, 0.0, 100.0, 10.0);

        assert_eq!(progress(&mut out, rect, 500, 100, false, &style, None), 100);

        frame(&mut input, 25.0, 5.0, Some(true));
        assert_eq!(progress(&mut out, rect, 0, 100, false, &style, Some(&input)), 0);
        assert_eq!(progress(&mut out, rect, 0, 100, true, &style, Some(&input)), 25);
    }
}
