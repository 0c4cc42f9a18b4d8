//! # Panel Layout
//!
//! The per-frame placement cursor.
//!
//! ```text
//!  rect.x
//!  │ pad.x   item_w   spacing.x   item_w    pad.x
//!  ├──────┬─────────┬─────────┬──────────┬──────┤  ← at_y - offset
//!  │      │ widget 0│         │ widget 1 │      │
//!  │      └─────────┘         └──────────┘      │
//!  │                 spacing.y                  │
//!  ├──────┬─────────┬─────────┬──────────┬──────┤  ← next row
//! ```
//!
//! Row positions are kept in content coordinates; the scroll offset is
//! subtracted when a widget rect is produced.

use panelkit_core::{CommandBuffer, Rect};

use super::table::TableState;
use super::PanelFlags;
use crate::config::{Config, Property};
use crate::input::Input;

/// Row state shared between a layout and the nested contexts it spawns.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct RowCursor {
    /// Top of the current row in content coordinates.
    pub at_y: f32,
    /// Column of the next widget.
    pub index: usize,
    /// Height of the current row including item spacing.
    pub row_height: f32,
    /// Columns of the current row.
    pub row_columns: usize,
}

/// Link from a nested context back to its parent.
#[derive(Debug)]
pub(crate) struct Parent<'a> {
    pub cursor: &'a mut RowCursor,
    pub clip: Rect,
    pub offset: f32,
}

/// Per-frame placement cursor inside a panel or nested context.
///
/// Created by [`Panel::begin`](super::Panel::begin) or by a nested context
/// (`group_begin`, `shelf_begin`, `tab_begin`); borrows the command buffer
/// until it is handed back to the matching end call.
#[derive(Debug)]
pub struct PanelLayout<'a> {
    pub(crate) config: &'a Config,
    pub(crate) input: Option<&'a Input>,
    pub(crate) buffer: &'a mut CommandBuffer,
    pub(crate) rect: Rect,
    pub(crate) header_height: f32,
    pub(crate) width: f32,
    pub(crate) offset: f32,
    pub(crate) cursor: RowCursor,
    pub(crate) clip: Rect,
    pub(crate) valid: bool,
    pub(crate) flags: PanelFlags,
    pub(crate) table: Option<TableState>,
    pub(crate) parent: Option<Parent<'a>>,
}

impl<'a> PanelLayout<'a> {
    /// Creates a layout whose content starts below `header_height`.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        config: &'a Config,
        input: Option<&'a Input>,
        buffer: &'a mut CommandBuffer,
        rect: Rect,
        header_height: f32,
        width: f32,
        offset: f32,
        clip: Rect,
        flags: PanelFlags,
    ) -> Self {
        Self {
            config,
            input,
            buffer,
            rect,
            header_height,
            width,
            offset,
            cursor: RowCursor { at_y: rect.y + header_height, ..RowCursor::default() },
            clip,
            valid: true,
            flags,
            table: None,
            parent: None,
        }
    }

    /// Creates a layout that accepts widget calls but draws nothing.
    pub(crate) fn invalid(
        config: &'a Config,
        buffer: &'a mut CommandBuffer,
        rect: Rect,
        flags: PanelFlags,
    ) -> Self {
        let mut layout = Self::new(config, None, buffer, rect, 0.0, 0.0, 0.0, Rect::ZERO, flags);
        layout.valid = false;
        layout
    }

    /// Returns false when widgets would not be visible (hidden, minimized or
    /// fully clipped). Widget calls on an invalid layout draw nothing.
    #[inline]
    #[must_use]
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// Returns the clip rect of the body.
    #[inline]
    #[must_use]
    pub fn clip(&self) -> Rect {
        self.clip
    }

    /// Returns the outer rect of this context.
    #[inline]
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Returns the scroll offset in use this frame.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Returns the config the layout draws with.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &'a Config {
        self.config
    }

    /// Returns the input routed to this layout, if it receives any.
    #[inline]
    #[must_use]
    pub fn input(&self) -> Option<&'a Input> {
        self.input
    }

    /// Returns the command buffer for custom drawing.
    pub fn buffer(&mut self) -> &mut CommandBuffer {
        &mut *self.buffer
    }

    /// Returns the content height laid out so far.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.cursor.at_y + self.cursor.row_height - (self.rect.y + self.header_height)
    }

    /// Starts a new row of `columns` equal-width widgets, `height` pixels tall.
    pub fn row(&mut self, height: f32, columns: usize) {
        if !self.valid {
            return;
        }
        let spacing = self.config.property(Property::ItemSpacing);
        self.cursor.at_y += self.cursor.row_height;
        self.cursor.row_height = height + spacing.y;
        self.cursor.row_columns = columns;
        self.cursor.index = 0;
    }

    /// Number of widgets of `widget_size` pixels that fit in one row.
    #[must_use]
    pub fn row_columns(&self, widget_size: f32) -> usize {
        let padding = self.config.property(Property::Padding);
        let spacing = self.config.property(Property::ItemSpacing);
        let stride = widget_size + spacing.x;
        if stride <= 0.0 {
            return 1;
        }
        let space = self.width - 2.0 * padding.x + spacing.x;
        ((space / stride).floor() as usize).max(1)
    }

    /// Computes the rect of the next slot, wrapping to a new row when the
    /// current one is full. Does not check the clip.
    pub(crate) fn next_slot(&mut self) -> Option<Rect> {
        if !self.valid || self.cursor.row_columns == 0 {
            return None;
        }
        let spacing = self.config.property(Property::ItemSpacing);
        let padding = self.config.property(Property::Padding);
        if self.cursor.index >= self.cursor.row_columns {
            let height = self.cursor.row_height - spacing.y;
            self.row(height, self.cursor.row_columns);
        }

        let columns = self.cursor.row_columns as f32;
        let item_w = ((self.width - 2.0 * padding.x - (columns - 1.0) * spacing.x) / columns).max(0.0);
        let slot = Rect::new(
            self.rect.x + padding.x + self.cursor.index as f32 * (item_w + spacing.x),
            self.cursor.at_y - self.offset,
            item_w,
            self.cursor.row_height - spacing.y,
        );
        self.cursor.index += 1;
        Some(slot)
    }

    /// Returns the rect for the next widget.
    ///
    /// Returns `None` when the layout is invalid, no row was started, or the
    /// slot lies entirely outside the clip; the slot is consumed either way.
    pub fn widget(&mut self) -> Option<Rect> {
        self.next_slot().filter(|slot| slot.intersects(&self.clip))
    }

    /// Skips `columns` slots.
    pub fn spacing(&mut self, columns: usize) {
        for _ in 0..columns {
            if self.next_slot().is_none() {
                break;
            }
        }
    }

    /// Input for a widget at the current position; withheld while the
    /// pointer is outside the clip.
    pub(crate) fn widget_input(&self) -> Option<&'a Input> {
        self.input.filter(|input| self.clip.contains(input.mouse_pos))
    }

    /// Input for a text field. A press outside the clip releases focus;
    /// otherwise keys reach a focused field wherever the pointer is.
    pub(crate) fn focus_input(&self, active: &mut bool) -> Option<&'a Input> {
        let input = self.input?;
        if !self.clip.contains(input.mouse_pos) && input.pressed() {
            *active = false;
            return None;
        }
        Some(input)
    }
}
