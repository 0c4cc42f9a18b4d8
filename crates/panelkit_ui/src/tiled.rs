//! # Tiled Layout
//!
//! Five fixed screen regions described by ratios of the screen size:
//!
//! ```text
//! ┌──────────────────────────────────┐
//! │               Top                │  top
//! ├────────┬─────────────┬───────────┤
//! │  Left  │   Center    │   Right   │  centerv
//! ├────────┴─────────────┴───────────┤
//! │              Bottom              │  bottom
//! └──────────────────────────────────┘
//!   left      centerh       right
//! ```
//!
//! Each slot holds `capacity` panels laid side by side (horizontal format)
//! or on top of each other (vertical format). Panels opened in a slot are
//! ordered by the layout's own [`Stack`].

use panelkit_core::{Rect, Vec2};

use crate::error::{LayoutError, LayoutResult};
use crate::stack::Stack;

const RATIO_EPSILON: f32 = 1e-4;

/// Named region of a tiled layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotIndex {
    /// Full-width strip at the top.
    Top,
    /// Full-width strip at the bottom.
    Bottom,
    /// Left column of the middle band.
    Left,
    /// Center column of the middle band.
    Center,
    /// Right column of the middle band.
    Right,
}

impl SlotIndex {
    /// All slots in storage order.
    pub const ALL: [Self; 5] = [Self::Top, Self::Bottom, Self::Left, Self::Center, Self::Right];

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

/// How a slot splits its area between its panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutFormat {
    /// Panels side by side, each `width / capacity` wide.
    #[default]
    Horizontal,
    /// Panels stacked, each `height / capacity` tall.
    Vertical,
}

/// Whether the layout has a usable size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutState {
    /// Not initialized or zero sized; panels cannot be placed.
    #[default]
    Inactive,
    /// Slot rects are valid.
    Active,
}

/// Screen fractions of each region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Width of the left column.
    pub left: f32,
    /// Width of the right column.
    pub right: f32,
    /// Width of the center column.
    pub centerh: f32,
    /// Height of the middle band.
    pub centerv: f32,
    /// Height of the bottom strip.
    pub bottom: f32,
    /// Height of the top strip.
    pub top: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            left: 0.25,
            right: 0.25,
            centerh: 0.5,
            centerv: 0.6,
            bottom: 0.2,
            top: 0.2,
        }
    }
}

impl LayoutConfig {
    fn validate(&self) -> LayoutResult<()> {
        let fields = [
            ("left", self.left),
            ("right", self.right),
            ("centerh", self.centerh),
            ("centerv", self.centerv),
            ("bottom", self.bottom),
            ("top", self.top),
        ];
        for (name, value) in fields {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(LayoutError::InvalidRatio { name, value });
            }
        }

        let horizontal = self.left + self.centerh + self.right;
        if horizontal > 1.0 + RATIO_EPSILON {
            return Err(LayoutError::RatioOverflow { axis: "horizontal", sum: horizontal });
        }
        let vertical = self.top + self.centerv + self.bottom;
        if vertical > 1.0 + RATIO_EPSILON {
            return Err(LayoutError::RatioOverflow { axis: "vertical", sum: vertical });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Slot {
    capacity: usize,
    /// Size as a fraction of the screen.
    ratio: Vec2,
    /// Position as a fraction of the screen.
    offset: Vec2,
    format: LayoutFormat,
}

/// Docking grid of five slots.
#[derive(Debug, Default)]
pub struct TiledLayout {
    width: f32,
    height: f32,
    state: LayoutState,
    stack: Stack,
    slots: [Slot; 5],
}

impl TiledLayout {
    /// Creates an inactive layout with empty slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the slot ratios and the screen size.
    ///
    /// Slot capacities and formats are kept. On error the layout is left
    /// unchanged.
    pub fn init(&mut self, config: &LayoutConfig, width: f32, height: f32) -> LayoutResult<()> {
        config.validate()?;

        let middle = config.top;
        let geometry = [
            (SlotIndex::Top, Vec2::new(1.0, config.top), Vec2::new(0.0, 0.0)),
            (SlotIndex::Bottom, Vec2::new(1.0, config.bottom), Vec2::new(0.0, 1.0 - config.bottom)),
            (SlotIndex::Left, Vec2::new(config.left, config.centerv), Vec2::new(0.0, middle)),
            (
                SlotIndex::Center,
                Vec2::new(config.centerh, config.centerv),
                Vec2::new(config.left, middle),
            ),
            (
                SlotIndex::Right,
                Vec2::new(config.right, config.centerv),
                Vec2::new(config.left + config.centerh, middle),
            ),
        ];
        for (index, ratio, offset) in geometry {
            let slot = &mut self.slots[index.index()];
            slot.ratio = ratio;
            slot.offset = offset;
        }
        self.set_size(width, height);
        tracing::debug!(width, height, "tiled layout initialized");
        Ok(())
    }

    /// Resizes the screen. The layout is active while both sides are positive.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.state = if self.width > 0.0 && self.height > 0.0 {
            LayoutState::Active
        } else {
            LayoutState::Inactive
        };
    }

    /// Returns the layout state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> LayoutState {
        self.state
    }

    /// Sets how many panels `index` holds and how they are arranged.
    pub fn slot(&mut self, index: SlotIndex, format: LayoutFormat, panel_count: usize) {
        let slot = &mut self.slots[index.index()];
        slot.format = format;
        slot.capacity = panel_count;
    }

    /// Pixel area of a slot.
    #[must_use]
    pub fn slot_rect(&self, index: SlotIndex) -> Rect {
        let slot = &self.slots[index.index()];
        Rect::new(
            slot.offset.x * self.width,
            slot.offset.y * self.height,
            slot.ratio.x * self.width,
            slot.ratio.y * self.height,
        )
    }

    /// Pixel area of panel `sub` inside slot `index`.
    ///
    /// `None` while the layout is inactive or when the slot has fewer than
    /// `sub + 1` panels.
    #[must_use]
    pub fn panel_rect(&self, index: SlotIndex, sub: usize) -> Option<Rect> {
        let slot = &self.slots[index.index()];
        if self.state != LayoutState::Active || sub >= slot.capacity {
            return None;
        }
        let area = self.slot_rect(index);
        let count = slot.capacity as f32;
        let at = sub as f32;
        Some(match slot.format {
            LayoutFormat::Horizontal => {
                let w = area.w / count;
                Rect::new(area.x + at * w, area.y, w, area.h)
            }
            LayoutFormat::Vertical => {
                let h = area.h / count;
                Rect::new(area.x, area.y + at * h, area.w, h)
            }
        })
    }

    /// Stack ordering the panels placed in this layout.
    #[inline]
    #[must_use]
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Mutable access to the layout stack.
    #[inline]
    pub fn stack_mut(&mut self) -> &mut Stack {
        &mut self.stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> TiledLayout {
        let mut layout = TiledLayout::new();
        layout.init(&LayoutConfig::default(), 800.0, 600.0).unwrap();
        layout
    }

    #[test]
    fn test_inactive_until_sized() {
        let mut layout = TiledLayout::new();
        layout.slot(SlotIndex::Center, LayoutFormat::Horizontal, 1);
        assert_eq!(layout.state(), LayoutState::Inactive);
        assert_eq!(layout.panel_rect(SlotIndex::Center, 0), None);

        layout.init(&LayoutConfig::default(), 0.0, 600.0).unwrap();
        assert_eq!(layout.state(), LayoutState::Inactive);
        layout.set_size(800.0, 600.0);
        assert_eq!(layout.state(), LayoutState::Active);
    }

    #[test]
    fn test_slot_geometry() {
        let layout = layout();
        assert_eq!(layout.slot_rect(SlotIndex::Top), Rect::new(0.0, 0.0, 800.0, 120.0));
        assert_eq!(layout.slot_rect(SlotIndex::Left), Rect::new(0.0, 120.0, 200.0, 360.0));
        assert_eq!(layout.slot_rect(SlotIndex::Center), Rect::new(200.0, 120.0, 400.0, 360.0));
        assert_eq!(layout.slot_rect(SlotIndex::Right), Rect::new(600.0, 120.0, 200.0, 360.0));
        assert_eq!(layout.slot_rect(SlotIndex::Bottom), Rect::new(0.0, 480.0, 800.0, 120.0));
    }

    #[test]
    fn test_panel_rects_split_by_format() {
        let mut layout = layout();
        layout.slot(SlotIndex::Top, LayoutFormat::Horizontal, 4);
        layout.slot(SlotIndex::Left, LayoutFormat::Vertical, 3);

        assert_eq!(layout.panel_rect(SlotIndex::Top, 2), Some(Rect::new(400.0, 0.0, 200.0, 120.0)));
        assert_eq!(layout.panel_rect(SlotIndex::Left, 1), Some(Rect::new(0.0, 240.0, 200.0, 120.0)));
        assert_eq!(layout.panel_rect(SlotIndex::Left, 3), None);
        assert_eq!(layout.panel_rect(SlotIndex::Right, 0), None);
    }

    #[test]
    fn test_invalid_ratios_rejected() {
        let mut layout = TiledLayout::new();
        let config = LayoutConfig { left: -0.1, ..LayoutConfig::default() };
        assert_eq!(
            layout.init(&config, 800.0, 600.0),
            Err(LayoutError::InvalidRatio { name: "left", value: -0.1 })
        );

        let config = LayoutConfig { top: 0.5, bottom: 0.5, ..LayoutConfig::default() };
        assert!(matches!(
            layout.init(&config, 800.0, 600.0),
            Err(LayoutError::RatioOverflow { axis: "vertical", .. })
        ));

        let config = LayoutConfig { centerh: f32::NAN, ..LayoutConfig::default() };
        assert!(layout.init(&config, 800.0, 600.0).is_err());
        assert_eq!(layout.state(), LayoutState::Inactive);
    }
}
