//! Vertical scrollbar.

use panelkit_core::{CommandBuffer, Heading, Rect, Vec2};

use super::{button_triangle, ButtonBehavior};
use crate::input::Input;
use crate::style::{ButtonStyle, ScrollStyle};

/// Draws a vertical scrollbar over `rect` and returns the new offset.
///
/// `rect` spans the viewport, so its height is the visible size. The arrow
/// buttons move by `step` per frame while held; dragging the cursor moves the
/// content proportionally. The result is always within
/// `[0, max(0, content_size - rect.h)]`.
pub fn scroll(
    out: &mut CommandBuffer,
    rect: Rect,
    offset: f32,
    content_size: f32,
    step: f32,
    style: &ScrollStyle,
    input: Option<&Input>,
) -> f32 {
    let max_offset = (content_size - rect.h).max(0.0);
    out.push_rect_framed(rect, style.background, style.border, 1.0, 0.0);
    if max_offset <= 0.0 {
        return 0.0;
    }

    let mut offset = offset.clamp(0.0, max_offset);
    let button_h = rect.w.min(rect.h * 0.5);
    let arrows = ButtonStyle {
        border: 1.0,
        rounding: 0.0,
        padding: Vec2::new(button_h * 0.25, button_h * 0.25),
        background: style.background,
        foreground: style.border,
        content: style.border,
        highlight: style.foreground,
        highlight_content: style.border,
    };
    let up = Rect::new(rect.x, rect.y, rect.w, button_h);
    let down = Rect::new(rect.x, rect.bottom() - button_h, rect.w, button_h);
    if button_triangle(out, up, Heading::Up, ButtonBehavior::Repeater, &arrows, input) {
        offset -= step;
    }
    if button_triangle(out, down, Heading::Down, ButtonBehavior::Repeater, &arrows, input) {
        offset += step;
    }

    let track = Rect::new(rect.x, up.bottom(), rect.w, (rect.h - 2.0 * button_h).max(0.0));
    let cursor_h = (track.h * rect.h / content_size).clamp(1.0_f32.min(track.h), track.h);
    let cursor_y = track.y + (offset / content_size) * track.h;
    let cursor = Rect::new(track.x, cursor_y, track.w, cursor_h);

    if let Some(input) = input {
        // a drag started on the cursor last frame keeps it under the pointer
        if input.mouse_down && cursor.contains(input.mouse_prev) && track.h > 0.0 {
            offset += input.mouse_delta.y * content_size / track.h;
        }
    }

    let offset = offset.clamp(0.0, max_offset);
    let cursor_y = track.y + (offset / content_size) * track.h;
    out.push_rect(Rect::new(track.x + 1.0, cursor_y, (track.w - 2.0).max(0.0), cursor_h), style.foreground);
    offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::fixtures::{self, frame};
    use panelkit_core::Color;

    fn style() -> ScrollStyle {
        ScrollStyle {
            background: Color::BLACK,
            foreground: Color::WHITE,
            border: Color::WHITE,
        }
    }

    #[test]
    fn test_offset_is_clamped() {
        let mut out = fixtures::buffer();
        let rect = Rect::new(0.0, 0.0, 16.0, 100.0);

        assert_eq!(scroll(&mut out, rect, 1000.0, 300.0, 10.0, &style(), None), 200.0);
        assert_eq!(scroll(&mut out, rect, -5.0, 300.0, 10.0, &style(), None), 0.0);
        assert_eq!(scroll(&mut out, rect, 50.0, 80.0, 10.0, &style(), None), 0.0);
    }

    #[test]
    fn test_arrow_buttons_step() {
        let mut out = fixtures::buffer();
        let mut input = Input::new();
        let rect = Rect::new(0.0, 0.0, 16.0, 100.0);

        frame(&mut input, 8.0, 95.0, Some(true));
        let offset = scroll(&mut out, rect, 0.0, 300.0, 10.0, &style(), Some(&input));
        assert_eq!(offset, 10.0);

        frame(&mut input, 8.0, 4.0, None);
        let offset = scroll(&mut out, rect, 5.0, 300.0, 10.0, &style(), Some(&input));
        assert_eq!(offset, 0.0);
    }

    #[test]
    fn test_cursor_drag_moves_proportionally() {
        let mut out = fixtures::buffer();
        let mut input = Input::new();
        // track is 68 px for 300 px of content
        let rect = Rect::new(0.0, 0.0, 16.0, 100.0);

        frame(&mut input, 8.0, 20.0, Some(true));
        frame(&mut input, 8.0, 37.0, None);
        let offset = scroll(&mut out, rect, 0.0, 300.0, 10.0, &style(), Some(&input));
        assert!((offset - 17.0 * 300.0 / 68.0).abs() < 1e-3);
    }
}
