//! # Nested Contexts
//!
//! Groups, shelves and tabs open a child [`PanelLayout`] inside the current
//! one. The child borrows the parent's command buffer and row cursor until it
//! is closed, so the parent cannot place widgets in the meantime.
//!
//! - **group**: fixed-size scrollable region in one slot of the parent; its
//!   own clip is the region body intersected with the parent clip.
//! - **shelf**: a group with a row of selectable tabs as its header.
//! - **tab**: collapsible section whose content grows the parent; closing it
//!   moves the parent cursor below the content.
//!
//! Every begin pushes the child clip as a scissor and every end pushes the
//! parent clip back.

use panelkit_core::{Heading, Rect};

use super::layout::{Parent, RowCursor};
use super::{PanelFlags, PanelLayout};
use crate::config::{ColorRole, Property};
use crate::style::{ScrollStyle, TextStyle};
use crate::widget::{self, clicked, ButtonBehavior, TextAlign};

impl PanelLayout<'_> {
    fn child_layout(
        &mut self,
        rect: Rect,
        header_height: f32,
        width: f32,
        offset: f32,
        clip: Rect,
        flags: PanelFlags,
    ) -> PanelLayout<'_> {
        self.buffer.push_scissor(clip);
        let mut child = PanelLayout::new(
            self.config,
            self.input,
            &mut *self.buffer,
            rect,
            header_height,
            width,
            offset,
            clip,
            flags,
        );
        child.parent = Some(Parent { cursor: &mut self.cursor, clip: self.clip, offset: self.offset });
        child
    }

    fn invalid_child(&mut self, offset: f32) -> PanelLayout<'_> {
        let mut child = PanelLayout::invalid(self.config, &mut *self.buffer, Rect::ZERO, PanelFlags::empty());
        child.offset = offset;
        child
    }

    /// Body of a group or shelf below `header_height`, with the scrollbar
    /// column reserved on the right.
    fn scroll_region(&mut self, rect: Rect, header_height: f32, offset: f32) -> PanelLayout<'_> {
        let bar = self.config.property(Property::ScrollbarWidth).x;
        let width = (rect.w - bar).max(0.0);
        let body = Rect::new(rect.x, rect.y + header_height, width, (rect.h - header_height).max(0.0));
        let clip = body.intersection(&self.clip);
        self.child_layout(rect, header_height, width, offset, clip, PanelFlags::empty())
    }

    fn nested_header_height(&self) -> f32 {
        self.config.font.height + 2.0 * self.config.property(Property::ItemPadding).y
    }

    /// Opens a scrollable group in the next slot, scrolled by `offset`.
    ///
    /// A non-empty `title` adds a header. Close with
    /// [`group_end`](Self::group_end), which returns the new offset.
    pub fn group_begin(&mut self, title: &str, offset: f32) -> PanelLayout<'_> {
        let Some(rect) = self.widget() else {
            return self.invalid_child(offset);
        };
        self.buffer.push_rect_framed(
            rect,
            self.config.color(ColorRole::Panel),
            self.config.color(ColorRole::Border),
            1.0,
            0.0,
        );
        let header_height = if title.is_empty() {
            0.0
        } else {
            let header_height = self.nested_header_height();
            let style = TextStyle {
                background: self.config.color(ColorRole::Header),
                ..TextStyle::from_config(self.config)
            };
            widget::text(
                self.buffer,
                Rect::new(rect.x, rect.y, rect.w, header_height),
                title,
                &style,
                TextAlign::Left,
                &self.config.font,
            );
            header_height
        };
        self.scroll_region(rect, header_height, offset)
    }

    /// Closes a group: restores the parent clip, draws the scrollbar and
    /// returns the offset to pass to the next `group_begin`.
    pub fn group_end(self) -> f32 {
        let PanelLayout { config, input, buffer, rect, header_height, offset, cursor, valid, parent, .. } = self;
        let Some(parent) = parent.filter(|_| valid) else {
            return offset;
        };
        buffer.push_scissor(parent.clip);

        let padding = config.property(Property::Padding);
        let bar_w = config.property(Property::ScrollbarWidth).x;
        let content = cursor.at_y + cursor.row_height + padding.y - (rect.y + header_height);
        let viewport = (rect.h - header_height).max(0.0);
        let bar = Rect::new(rect.right() - bar_w, rect.y + header_height, bar_w, viewport);
        let input = input.filter(|input| parent.clip.contains(input.mouse_pos));
        widget::scroll(
            buffer,
            bar,
            offset,
            content,
            config.font.height,
            &ScrollStyle::from_config(config),
            input,
        )
    }

    /// Opens a shelf in the next slot: a row of tabs labeled `tabs` above a
    /// scrollable body. Returns the selected tab after this frame's clicks
    /// and the body layout; close it with [`shelf_end`](Self::shelf_end).
    pub fn shelf_begin(&mut self, tabs: &[&str], active: usize, offset: f32) -> (usize, PanelLayout<'_>) {
        let active = active.min(tabs.len().saturating_sub(1));
        let Some(rect) = self.widget() else {
            return (active, self.invalid_child(offset));
        };
        self.buffer.push_rect_framed(
            rect,
            self.config.color(ColorRole::Panel),
            self.config.color(ColorRole::Border),
            1.0,
            0.0,
        );
        if tabs.is_empty() {
            return (active, self.scroll_region(rect, 0.0, offset));
        }

        let header_height = self.nested_header_height();
        let tab_w = rect.w / tabs.len() as f32;
        let input = self.widget_input();
        let mut selected = active;
        for (index, label) in tabs.iter().enumerate() {
            let tab = Rect::new(rect.x + index as f32 * tab_w, rect.y, tab_w, header_height);
            let (background, foreground) = if index == active {
                (ColorRole::ShelfActive, ColorRole::ShelfActiveText)
            } else {
                (ColorRole::Shelf, ColorRole::ShelfText)
            };
            let style = TextStyle {
                background: self.config.color(background),
                foreground: self.config.color(foreground),
                ..TextStyle::from_config(self.config)
            };
            widget::text(self.buffer, tab, label, &style, TextAlign::Centered, &self.config.font);
            if clicked(&tab, ButtonBehavior::Default, input) {
                selected = index;
            }
        }
        (selected, self.scroll_region(rect, header_height, offset))
    }

    /// Closes a shelf and returns the new body offset.
    pub fn shelf_end(self) -> f32 {
        self.group_end()
    }

    /// Opens a collapsible section titled `title`.
    ///
    /// The header takes a full row; a click on it flips `minimized`. While
    /// expanded the returned layout places widgets below the header, and
    /// [`tab_end`](Self::tab_end) moves the parent cursor past them.
    pub fn tab_begin(&mut self, title: &str, minimized: &mut bool) -> PanelLayout<'_> {
        if !self.valid {
            return self.invalid_child(0.0);
        }
        let header_height = self.nested_header_height();
        self.row(header_height, 1);
        let Some(header) = self.next_slot() else {
            return self.invalid_child(0.0);
        };

        let input = self.widget_input();
        if clicked(&header, ButtonBehavior::Default, input) {
            *minimized = !*minimized;
        }
        self.buffer.push_rect(header, self.config.color(ColorRole::Header));
        let item_padding = self.config.property(Property::ItemPadding);
        let glyph = self.config.font.height;
        let toggle = Rect::new(header.x + item_padding.x, header.y + item_padding.y, glyph, glyph);
        let heading = if *minimized { Heading::Right } else { Heading::Down };
        let [a, b, c] = heading.triangle(toggle);
        self.buffer.push_triangle(a, b, c, self.config.color(ColorRole::Text));
        let label_x = toggle.right();
        let style = TextStyle {
            background: self.config.color(ColorRole::Header),
            ..TextStyle::from_config(self.config)
        };
        widget::text(
            self.buffer,
            Rect::new(label_x, header.y, (header.right() - label_x).max(0.0), header.h),
            title,
            &style,
            TextAlign::Left,
            &self.config.font,
        );

        if *minimized {
            return self.invalid_child(0.0);
        }
        // content starts one parent row below the header
        let content_top = header.y + self.cursor.row_height;
        let rect = Rect::new(header.x, header.y, header.w, (self.clip.bottom() - header.y).max(0.0));
        let column = Rect::new(header.x, content_top, header.w, (rect.bottom() - content_top).max(0.0));
        let clip = column.intersection(&self.clip);
        self.child_layout(rect, self.cursor.row_height, header.w, 0.0, clip, PanelFlags::TAB)
    }

    /// Closes a tab: the parent continues below the tab content.
    pub fn tab_end(self) {
        let PanelLayout { buffer, cursor, parent, .. } = self;
        let Some(parent) = parent else {
            return;
        };
        buffer.push_scissor(parent.clip);
        *parent.cursor = RowCursor {
            at_y: cursor.at_y + cursor.row_height + parent.offset,
            ..Default::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::input::Input;
    use crate::widget::fixtures::{self, frame};
    use panelkit_core::{Command, CommandBuffer};

    fn layout<'a>(config: &'a Config, buffer: &'a mut CommandBuffer, input: Option<&'a Input>) -> PanelLayout<'a> {
        let rect = Rect::new(0.0, 0.0, 230.0, 400.0);
        PanelLayout::new(config, input, buffer, rect, 20.0, 230.0, 0.0, rect, PanelFlags::empty())
    }

    fn scissors(buffer: &CommandBuffer) -> Vec<(i16, i16, u16, u16)> {
        buffer
            .iter()
            .filter_map(|command| match command {
                Command::Scissor(s) => Some((s.x, s.y, s.w, s.h)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_group_clips_and_restores() {
        let config = fixtures::config();
        let mut buffer = fixtures::buffer();
        let mut parent = layout(&config, &mut buffer, None);
        parent.row(100.0, 1);

        let mut group = parent.group_begin("", 0.0);
        // slot (15, 20, 200, 100) minus the 16 px scrollbar column
        assert_eq!(group.clip(), Rect::new(15.0, 20.0, 184.0, 100.0));
        group.row(30.0, 1);
        assert_eq!(group.widget(), Some(Rect::new(30.0, 20.0, 154.0, 30.0)));
        assert_eq!(group.group_end(), 0.0);
        drop(parent);

        assert_eq!(scissors(&buffer), vec![(15, 20, 184, 100), (0, 0, 230, 400)]);
    }

    #[test]
    fn test_group_offset_is_clamped_to_content() {
        let config = fixtures::config();
        let mut buffer = fixtures::buffer();
        let mut parent = layout(&config, &mut buffer, None);
        parent.row(100.0, 1);

        let mut group = parent.group_begin("Items", 500.0);
        for _ in 0..5 {
            group.row(30.0, 1);
            assert_eq!(group.widget(), None);
        }
        // 5 * 34 + 10 padding = 180 of content, 82 visible below the header
        assert_eq!(group.group_end(), 98.0);
    }

    #[test]
    fn test_clipped_group_keeps_offset() {
        let config = fixtures::config();
        let mut buffer = fixtures::buffer();
        let rect = Rect::new(0.0, 0.0, 230.0, 400.0);
        let clip = Rect::new(0.0, 200.0, 230.0, 200.0);
        let mut parent = PanelLayout::new(&config, None, &mut buffer, rect, 20.0, 230.0, 0.0, clip, PanelFlags::empty());
        parent.row(100.0, 1);

        let group = parent.group_begin("", 12.0);
        assert!(!group.valid());
        assert_eq!(group.group_end(), 12.0);
    }

    #[test]
    fn test_shelf_selects_clicked_tab() {
        let config = fixtures::config();
        let mut buffer = fixtures::buffer();
        let mut input = Input::new();
        // second tab spans x 115..215 in the 18 px tab row
        frame(&mut input, 150.0, 25.0, Some(true));
        frame(&mut input, 150.0, 25.0, Some(false));
        let mut parent = layout(&config, &mut buffer, Some(&input));
        parent.row(100.0, 1);

        let (active, mut shelf) = parent.shelf_begin(&["one", "two"], 0, 0.0);
        assert_eq!(active, 1);
        assert_eq!(shelf.clip(), Rect::new(15.0, 38.0, 184.0, 82.0));
        shelf.row(20.0, 1);
        assert_eq!(shelf.shelf_end(), 0.0);
    }

    #[test]
    fn test_tab_grows_parent() {
        let config = fixtures::config();
        let mut buffer = fixtures::buffer();
        let mut parent = layout(&config, &mut buffer, None);
        let mut minimized = false;

        let mut tab = parent.tab_begin("Tab", &mut minimized);
        assert!(tab.valid());
        // header row 18 + 4 spacing; content indented by the padding again
        tab.row(20.0, 1);
        assert_eq!(tab.widget(), Some(Rect::new(30.0, 42.0, 170.0, 20.0)));
        tab.tab_end();

        parent.row(20.0, 1);
        assert_eq!(parent.widget().map(|r| r.y), Some(66.0));
    }

    #[test]
    fn test_minimized_tab_only_takes_header() {
        let config = fixtures::config();
        let mut buffer = fixtures::buffer();
        let mut input = Input::new();
        frame(&mut input, 20.0, 25.0, Some(true));
        frame(&mut input, 20.0, 25.0, Some(false));
        let mut parent = layout(&config, &mut buffer, Some(&input));
        let mut minimized = false;

        let tab = parent.tab_begin("Tab", &mut minimized);
        assert!(minimized);
        assert!(!tab.valid());
        tab.tab_end();

        parent.row(20.0, 1);
        assert_eq!(parent.widget().map(|r| r.y), Some(42.0));
    }
}
