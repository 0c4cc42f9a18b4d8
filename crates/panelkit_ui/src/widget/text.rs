//! Static text.

use panelkit_core::{CommandBuffer, Rect};

use super::TextAlign;
use crate::font::Font;
use crate::style::TextStyle;

/// Places `width` pixels of content inside `area` per `align`.
pub(crate) fn align_x(area: &Rect, width: f32, align: TextAlign) -> f32 {
    match align {
        TextAlign::Left => area.x,
        TextAlign::Centered => area.x + ((area.w - width) * 0.5).max(0.0),
        TextAlign::Right => area.x + (area.w - width).max(0.0),
    }
}

/// Draws a background and a single line of text, cut to fit the rect.
pub fn text(
    out: &mut CommandBuffer,
    rect: Rect,
    label: &str,
    style: &TextStyle,
    align: TextAlign,
    font: &Font,
) {
    out.push_rect(rect, style.background);
    let area = rect.pad(style.padding);
    let visible = font.fit(label, area.w);
    let width = font.width(visible);
    let label_rect = Rect::new(align_x(&area, width, align), area.y, width, area.h);
    out.push_text(label_rect, visible, font.handle, style.background, style.foreground);
}
