//! # Panels
//!
//! A [`Panel`] is the only widget state that survives a frame: its rect,
//! flags, scroll offset and minimized bit. Each frame it is opened with
//! [`Panel::begin`] (or the stacked/tiled variants), filled through the
//! returned [`PanelLayout`] and closed with [`Panel::end`].
//!
//! ```text
//! ┌──────────────────────────────┐ ← rect.y
//! │ Title                  ▼  x  │   header (move grip)
//! ├──────────────────────────────┤ ← rect.y + header_height
//! │  [ widget ] [ widget ]     ▲ │
//! │  [      widget       ]     █ │   body, clipped; scrollbar when
//! │                            ▼ │   content exceeds the viewport
//! │                           ◢  │ ← scaler grip
//! └──────────────────────────────┘
//! ```

mod graph;
mod layout;
mod nested;
mod table;
mod widgets;

pub use graph::{Graph, GraphKind};
pub use layout::PanelLayout;
pub use table::TableLines;

use std::sync::atomic::{AtomicU32, Ordering};

use bitflags::bitflags;
use panelkit_core::{CommandBuffer, Heading, Rect, Vec2};

use crate::config::{ColorRole, Config, Property};
use crate::input::Input;
use crate::stack::{Stack, StackId};
use crate::style::{ScrollStyle, TextStyle};
use crate::tiled::{SlotIndex, TiledLayout};
use crate::widget::{self, clicked, ButtonBehavior, TextAlign};

bitflags! {
    /// Panel behavior and internal state bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PanelFlags: u32 {
        /// Not drawn, no input.
        const HIDDEN = 0x01;
        /// Frame around the panel.
        const BORDER = 0x02;
        /// Header has a minimize toggle.
        const MINIMIZABLE = 0x04;
        /// Header has a close button that sets `HIDDEN`.
        const CLOSEABLE = 0x08;
        /// Header drags move the panel.
        const MOVEABLE = 0x10;
        /// Bottom-right grip resizes the panel.
        const SCALEABLE = 0x20;
        /// No header; content starts at the top padding.
        const NO_HEADER = 0x40;
        /// Line between header and body.
        const BORDER_HEADER = 0x80;
        /// Topmost panel of its stack. Maintained internally.
        const ACTIVE = 0x100;
        /// Scrollbar shown last frame. Maintained internally.
        const SCROLLBAR = 0x200;
        /// Nested tab context. Maintained internally.
        const TAB = 0x400;
    }
}

/// Process-unique panel identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(u32);

impl PanelId {
    fn next() -> Self {
        static NEXT: AtomicU32 = AtomicU32::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Persistent window state.
#[derive(Debug)]
pub struct Panel {
    id: PanelId,
    /// Position and size.
    pub rect: Rect,
    /// Behavior flags.
    pub flags: PanelFlags,
    /// Vertical scroll offset.
    pub offset: f32,
    /// Only the header is shown.
    pub minimized: bool,
    pub(crate) stack: Option<(StackId, usize)>,
}

/// A clone is a new panel: it gets its own id and no stack membership.
impl Clone for Panel {
    fn clone(&self) -> Self {
        let mut panel = Self::new(self.rect, self.flags - PanelFlags::ACTIVE);
        panel.offset = self.offset;
        panel.minimized = self.minimized;
        panel
    }
}

impl Panel {
    /// Creates a panel.
    #[must_use]
    pub fn new(rect: Rect, flags: PanelFlags) -> Self {
        Self {
            id: PanelId::next(),
            rect,
            flags,
            offset: 0.0,
            minimized: false,
            stack: None,
        }
    }

    /// Returns the panel identity.
    #[inline]
    #[must_use]
    pub fn id(&self) -> PanelId {
        self.id
    }

    /// Forgets the stack membership without touching the stack. Use after
    /// the stack the panel was pushed to has been dropped.
    pub fn leave_stack(&mut self) {
        self.stack = None;
        self.flags.remove(PanelFlags::ACTIVE);
    }

    /// Returns true if the panel is the topmost of its stack.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.flags.contains(PanelFlags::ACTIVE)
    }

    /// Height of the header for `config`.
    #[must_use]
    pub fn header_height(&self, config: &Config) -> f32 {
        let padding = config.property(Property::Padding);
        if self.flags.contains(PanelFlags::NO_HEADER) {
            padding.y
        } else {
            let item_padding = config.property(Property::ItemPadding);
            config.font.height + 2.0 * item_padding.y + 2.0 * padding.y
        }
    }

    /// Area the panel covers on screen: nothing when hidden, the header when
    /// minimized.
    #[must_use]
    pub fn visible_rect(&self, config: &Config) -> Rect {
        if self.flags.contains(PanelFlags::HIDDEN) {
            Rect::ZERO
        } else if self.minimized {
            Rect::new(self.rect.x, self.rect.y, self.rect.w, self.header_height(config))
        } else {
            self.rect
        }
    }

    fn drag(&mut self, config: &Config, input: &Input) {
        if !input.mouse_down {
            return;
        }
        let delta = input.mouse_delta;
        let header_height = self.header_height(config);
        if self.flags.contains(PanelFlags::MOVEABLE) {
            let header = Rect::new(self.rect.x, self.rect.y, self.rect.w, header_height);
            if header.contains(input.mouse_prev) {
                self.rect.x += delta.x;
                self.rect.y += delta.y;
                return;
            }
        }
        if self.flags.contains(PanelFlags::SCALEABLE) && !self.minimized {
            let scaler = config.property(Property::ScalerSize);
            let padding = config.property(Property::Padding);
            let grip = Rect::new(
                self.rect.right() - scaler.x,
                self.rect.bottom() - scaler.y,
                scaler.x,
                scaler.y,
            );
            if grip.contains(input.mouse_prev) {
                self.rect.w = (self.rect.w + delta.x).max(2.0 * padding.x + scaler.x);
                self.rect.h = (self.rect.h + delta.y).max(header_height + scaler.y);
            }
        }
    }

    fn header(&mut self, buffer: &mut CommandBuffer, config: &Config, title: &str, input: Option<&Input>) {
        let padding = config.property(Property::Padding);
        let item_padding = config.property(Property::ItemPadding);
        let font = &config.font;
        let header_height = self.header_height(config);
        let text_color = config.color(ColorRole::Text);

        buffer.push_rect(
            Rect::new(self.rect.x, self.rect.y, self.rect.w, header_height),
            config.color(ColorRole::Header),
        );

        let glyph = font.height;
        let glyph_y = self.rect.y + padding.y + item_padding.y;
        let mut right = self.rect.right() - padding.x;

        if self.flags.contains(PanelFlags::CLOSEABLE) {
            let close = Rect::new(right - glyph, glyph_y, glyph, glyph);
            buffer.push_line(Vec2::new(close.x, close.y), Vec2::new(close.right(), close.bottom()), text_color);
            buffer.push_line(Vec2::new(close.right(), close.y), Vec2::new(close.x, close.bottom()), text_color);
            if clicked(&close, ButtonBehavior::Default, input) {
                tracing::debug!(panel = self.id.raw(), "panel closed");
                self.flags.insert(PanelFlags::HIDDEN);
            }
            right = close.x - item_padding.x;
        }

        if self.flags.contains(PanelFlags::MINIMIZABLE) {
            let toggle = Rect::new(right - glyph, glyph_y, glyph, glyph);
            let heading = if self.minimized { Heading::Right } else { Heading::Down };
            let [a, b, c] = heading.triangle(toggle);
            buffer.push_triangle(a, b, c, text_color);
            if clicked(&toggle, ButtonBehavior::Default, input) {
                self.minimized = !self.minimized;
            }
            right = toggle.x - item_padding.x;
        }

        let left = self.rect.x + padding.x;
        let label = Rect::new(left, self.rect.y + padding.y, (right - left).max(0.0), glyph + 2.0 * item_padding.y);
        let style = TextStyle {
            padding: item_padding,
            foreground: text_color,
            background: config.color(ColorRole::Header),
        };
        widget::text(buffer, label, title, &style, TextAlign::Left, font);

        if self.flags.contains(PanelFlags::BORDER_HEADER) {
            let y = self.rect.y + header_height;
            buffer.push_line(Vec2::new(self.rect.x, y), Vec2::new(self.rect.right(), y), config.color(ColorRole::Border));
        }
    }

    /// Opens the panel for this frame.
    ///
    /// Applies header drags (move) and grip drags (scale) when the matching
    /// flags are set and the previous pointer position was on the grip, then
    /// draws the background and header and clips the body. The returned
    /// layout is invalid when the panel is hidden or minimized.
    pub fn begin<'a>(
        &mut self,
        buffer: &'a mut CommandBuffer,
        config: &'a Config,
        title: &str,
        input: Option<&'a Input>,
    ) -> PanelLayout<'a> {
        if self.flags.contains(PanelFlags::HIDDEN) {
            return PanelLayout::invalid(config, buffer, self.rect, self.flags);
        }
        if let Some(input) = input {
            self.drag(config, input);
        }

        let outer = buffer.clip();
        let header_height = self.header_height(config);
        if self.minimized {
            buffer.push_rect(
                Rect::new(self.rect.x, self.rect.y, self.rect.w, header_height),
                config.color(ColorRole::Panel),
            );
        } else {
            buffer.push_rect(self.rect, config.color(ColorRole::Panel));
        }
        if !self.flags.contains(PanelFlags::NO_HEADER) {
            self.header(buffer, config, title, input);
        }

        let scrollbar = if self.flags.contains(PanelFlags::SCROLLBAR) {
            config.property(Property::ScrollbarWidth).x
        } else {
            0.0
        };
        let width = (self.rect.w - scrollbar).max(0.0);
        let body = Rect::new(self.rect.x, self.rect.y + header_height, width, (self.rect.h - header_height).max(0.0));
        let clip = body.intersection(&outer);

        let mut layout = PanelLayout::new(
            config,
            input,
            buffer,
            self.rect,
            header_height,
            width,
            self.offset,
            clip,
            self.flags,
        );
        layout.valid = !self.flags.contains(PanelFlags::HIDDEN) && !self.minimized;
        if layout.valid {
            layout.buffer.push_scissor(clip);
        }
        layout
    }

    /// Opens the panel as a member of `stack`.
    ///
    /// The panel joins the stack if needed, giving up a membership in any
    /// other stack. A press inside the panel that no
    /// higher panel covers raises it to the top first; only the top panel
    /// receives input.
    pub fn begin_stacked<'a>(
        &mut self,
        stack: &mut Stack,
        buffer: &'a mut CommandBuffer,
        config: &'a Config,
        title: &str,
        input: Option<&'a Input>,
    ) -> PanelLayout<'a> {
        if !stack.contains(self) {
            if self.stack.is_some_and(|(id, _)| id != stack.id()) {
                tracing::debug!(panel = self.id.raw(), "panel moved to another stack");
                self.leave_stack();
            }
            stack.push(self);
        }
        if let Some(input) = input {
            let point = input.mouse_pos;
            if input.pressed()
                && self.visible_rect(config).contains(point)
                && stack.top() != Some(self.id)
                && !stack.covered(self, point)
                && stack.raise(self)
            {
                tracing::debug!(panel = self.id.raw(), "panel raised");
            }
        }

        let top = stack.top() == Some(self.id);
        self.flags.set(PanelFlags::ACTIVE, top);
        let layout = self.begin(buffer, config, title, if top { input } else { None });
        stack.set_rect(self, self.visible_rect(config));
        layout
    }

    /// Opens the panel in sub-slot `index` of a tiled layout slot.
    ///
    /// The slot geometry replaces the panel rect; move and scale are disabled
    /// for the frame. Ordering is kept by the tiled layout's own stack. When
    /// the slot has no such sub-slot the layout is invalid and nothing is
    /// drawn.
    #[allow(clippy::too_many_arguments)]
    pub fn begin_tiled<'a>(
        &mut self,
        tiled: &mut TiledLayout,
        slot: SlotIndex,
        index: usize,
        buffer: &'a mut CommandBuffer,
        config: &'a Config,
        title: &str,
        input: Option<&'a Input>,
    ) -> PanelLayout<'a> {
        let Some(rect) = tiled.panel_rect(slot, index) else {
            return PanelLayout::invalid(config, buffer, self.rect, self.flags | PanelFlags::HIDDEN);
        };
        self.rect = rect;
        let fixed = self.flags & (PanelFlags::MOVEABLE | PanelFlags::SCALEABLE);
        self.flags.remove(fixed);
        let layout = self.begin_stacked(tiled.stack_mut(), buffer, config, title, input);
        self.flags.insert(fixed);
        layout
    }

    /// Closes the panel for this frame.
    ///
    /// Updates the scroll offset (drawing a scrollbar when the content is
    /// taller than the body), lifts the clip and draws the scaler grip and
    /// border.
    pub fn end(&mut self, layout: PanelLayout<'_>) {
        if layout.flags.contains(PanelFlags::HIDDEN) {
            return;
        }
        let config = layout.config;
        let padding = config.property(Property::Padding);
        let header_height = layout.header_height;
        let buffer = layout.buffer;
        buffer.reset_scissor();

        if !self.minimized {
            let content = layout.cursor.at_y + layout.cursor.row_height + padding.y - (self.rect.y + header_height);
            let viewport = (self.rect.h - header_height).max(0.0);
            if layout.valid && content > viewport {
                let bar_w = config.property(Property::ScrollbarWidth).x;
                let bar = Rect::new(self.rect.right() - bar_w, self.rect.y + header_height, bar_w, viewport);
                self.flags.insert(PanelFlags::SCROLLBAR);
                self.offset = widget::scroll(
                    buffer,
                    bar,
                    self.offset,
                    content,
                    config.font.height,
                    &ScrollStyle::from_config(config),
                    layout.input,
                );
            } else {
                self.flags.remove(PanelFlags::SCROLLBAR);
                self.offset = 0.0;
            }

            if self.flags.contains(PanelFlags::SCALEABLE) {
                let scaler = config.property(Property::ScalerSize);
                let (right, bottom) = (self.rect.right(), self.rect.bottom());
                buffer.push_triangle(
                    Vec2::new(right, bottom - scaler.y),
                    Vec2::new(right, bottom),
                    Vec2::new(right - scaler.x, bottom),
                    config.color(ColorRole::Scaler),
                );
            }
        }

        if self.flags.contains(PanelFlags::BORDER) {
            let frame = self.visible_rect(config);
            let color = config.color(ColorRole::Border);
            let corners = [
                Vec2::new(frame.x, frame.y),
                Vec2::new(frame.right(), frame.y),
                Vec2::new(frame.right(), frame.bottom()),
                Vec2::new(frame.x, frame.bottom()),
            ];
            for i in 0..corners.len() {
                buffer.push_line(corners[i], corners[(i + 1) % corners.len()], color);
            }
        }
    }
}
