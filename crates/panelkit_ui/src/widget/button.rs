//! Buttons.

use panelkit_core::{Color, CommandBuffer, Heading, ImageHandle, Rect};

use super::text::align_x;
use super::{clicked, ButtonBehavior, TextAlign, VisualState};
use crate::font::Font;
use crate::input::Input;
use crate::style::ButtonStyle;

/// Draws the button frame and returns the click result and visual state.
///
/// Content is left to the caller; see [`button_text`] and friends.
pub fn button(
    out: &mut CommandBuffer,
    rect: Rect,
    behavior: ButtonBehavior,
    style: &ButtonStyle,
    input: Option<&Input>,
) -> (bool, VisualState) {
    let state = VisualState::of(&rect, input);
    let fill = if state.is_highlighted() { style.highlight } else { style.background };
    out.push_rect_framed(rect, fill, style.foreground, style.border, style.rounding);
    (clicked(&rect, behavior, input), state)
}

fn content_color(style: &ButtonStyle, state: VisualState) -> Color {
    if state.is_highlighted() {
        style.highlight_content
    } else {
        style.content
    }
}

/// Button with a centered label.
pub fn button_text(
    out: &mut CommandBuffer,
    rect: Rect,
    label: &str,
    behavior: ButtonBehavior,
    style: &ButtonStyle,
    input: Option<&Input>,
    font: &Font,
) -> bool {
    let (pressed, state) = button(out, rect, behavior, style, input);
    let area = rect.pad(style.padding);
    let visible = font.fit(label, area.w);
    let width = font.width(visible);
    let fill = if state.is_highlighted() { style.highlight } else { style.background };
    out.push_text(
        Rect::new(align_x(&area, width, TextAlign::Centered), area.y, width, area.h),
        visible,
        font.handle,
        fill,
        content_color(style, state),
    );
    pressed
}

/// Button with a triangle glyph.
pub fn button_triangle(
    out: &mut CommandBuffer,
    rect: Rect,
    heading: Heading,
    behavior: ButtonBehavior,
    style: &ButtonStyle,
    input: Option<&Input>,
) -> bool {
    let (pressed, state) = button(out, rect, behavior, style, input);
    let [a, b, c] = heading.triangle(rect.pad(style.padding));
    out.push_triangle(a, b, c, content_color(style, state));
    pressed
}

/// Button showing an image.
pub fn button_image(
    out: &mut CommandBuffer,
    rect: Rect,
    image: ImageHandle,
    behavior: ButtonBehavior,
    style: &ButtonStyle,
    input: Option<&Input>,
) -> bool {
    let (pressed, _) = button(out, rect, behavior, style, input);
    out.push_image(rect.pad(style.padding), image);
    pressed
}
