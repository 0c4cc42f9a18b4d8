//! Grid lines drawn around table rows.

use bitflags::bitflags;
use panelkit_core::Vec2;

use super::PanelLayout;
use crate::config::{ColorRole, Property};

bitflags! {
    /// Which table lines to draw.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TableLines: u32 {
        /// Line under the header row.
        const HHEADER = 0x01;
        /// Column separators in the header row.
        const VHEADER = 0x02;
        /// Lines under body rows.
        const HBODY = 0x04;
        /// Column separators in body rows.
        const VBODY = 0x08;
    }
}

impl Default for TableLines {
    fn default() -> Self {
        Self::all()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TableState {
    lines: TableLines,
    header: bool,
}

impl PanelLayout<'_> {
    /// Starts a table: a row of `columns` cells whose boundaries are drawn
    /// according to `lines`. The first row is the header.
    pub fn table_begin(&mut self, lines: TableLines, row_height: f32, columns: usize) {
        if !self.valid {
            return;
        }
        self.row(row_height, columns);
        self.table = Some(TableState { lines, header: true });
    }

    /// Draws the lines of the current row and starts the next one with the
    /// same height and columns.
    pub fn table_row(&mut self) {
        let Some(state) = self.table else {
            return;
        };
        self.table_lines(state);
        let spacing = self.config.property(Property::ItemSpacing);
        let height = self.cursor.row_height - spacing.y;
        let columns = self.cursor.row_columns;
        self.row(height, columns);
        self.table = Some(TableState { header: false, ..state });
    }

    /// Draws the lines of the last row and leaves table mode.
    pub fn table_end(&mut self) {
        if let Some(state) = self.table.take() {
            self.table_lines(state);
        }
    }

    fn table_lines(&mut self, state: TableState) {
        if !self.valid || self.cursor.row_columns == 0 {
            return;
        }
        let (horizontal, vertical) = if state.header {
            (TableLines::HHEADER, TableLines::VHEADER)
        } else {
            (TableLines::HBODY, TableLines::VBODY)
        };
        let padding = self.config.property(Property::Padding);
        let spacing = self.config.property(Property::ItemSpacing);
        let color = self.config.color(ColorRole::TableLines);

        let top = self.cursor.at_y - self.offset;
        let bottom = top + self.cursor.row_height - spacing.y * 0.5;
        let left = self.rect.x + padding.x;
        let right = self.rect.x + self.width - padding.x;

        if state.lines.contains(horizontal) {
            self.buffer.push_line(Vec2::new(left, bottom), Vec2::new(right, bottom), color);
        }
        if state.lines.contains(vertical) {
            let columns = self.cursor.row_columns as f32;
            let item_w = ((right - left - (columns - 1.0) * spacing.x) / columns).max(0.0);
            for column in 1..self.cursor.row_columns {
                let x = left + column as f32 * (item_w + spacing.x) - spacing.x * 0.5;
                self.buffer.push_line(Vec2::new(x, top), Vec2::new(x, bottom), color);
            }
        }
    }
}
