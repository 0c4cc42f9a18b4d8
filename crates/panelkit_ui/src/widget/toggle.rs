//! Checkboxes and radio options.

use panelkit_core::{CommandBuffer, Rect, Vec2};

use super::{clicked, ButtonBehavior, ToggleKind};
use crate::font::Font;
use crate::input::Input;
use crate::style::ToggleStyle;

/// Draws a checkbox or radio option and returns its new value.
///
/// The square select box sits at the left of `rect`, the label fills the
/// rest. A completed click anywhere in `rect` flips the value.
#[allow(clippy::too_many_arguments)]
pub fn toggle(
    out: &mut CommandBuffer,
    rect: Rect,
    active: bool,
    label: &str,
    kind: ToggleKind,
    style: &ToggleStyle,
    input: Option<&Input>,
    font: &Font,
) -> bool {
    let active = active ^ clicked(&rect, ButtonBehavior::Default, input);

    let size = rect.h.min(rect.w);
    let select = Rect::new(rect.x, rect.y, size, size);
    let cursor = select.pad(style.padding);
    match kind {
        ToggleKind::Check => {
            out.push_rect(select, style.foreground);
            if active {
                out.push_rect(cursor, style.cursor);
            }
        }
        ToggleKind::Option => {
            out.push_circle(select, style.foreground);
            if active {
                out.push_circle(cursor, style.cursor);
            }
        }
    }

    let label_x = select.right() + style.padding.x;
    let area = Rect::new(label_x, rect.y, (rect.right() - label_x).max(0.0), rect.h)
        .pad(Vec2::new(0.0, style.padding.y));
    let visible = font.fit(label, area.w);
    out.push_text(
        Rect::new(area.x, area.y, font.width(visible), area.h),
        visible,
        font.handle,
        style.background,
        style.font,
    );
    active
}
