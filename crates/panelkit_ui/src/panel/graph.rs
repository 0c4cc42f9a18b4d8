//! Line and column graphs.
//!
//! A graph is filled in three steps: [`PanelLayout::graph_begin`] takes the
//! next widget slot, each [`PanelLayout::graph_push`] stores one value in a
//! ring of `count` slots, and [`PanelLayout::graph_end`] draws the result.

use panelkit_core::{Rect, Vec2};

use super::PanelLayout;
use crate::config::ColorRole;

/// How values are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    /// Polyline through consecutive values.
    Lines,
    /// One bar per value.
    Column,
}

/// Values collected between `graph_begin` and `graph_end`.
#[derive(Debug, Clone)]
pub struct Graph {
    kind: GraphKind,
    rect: Option<Rect>,
    min: f32,
    max: f32,
    values: Vec<f32>,
    index: usize,
    count: usize,
    valid: bool,
    hovered: Option<usize>,
}

impl Graph {
    /// Graph kind.
    #[must_use]
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Area the graph draws into, `None` when clipped.
    #[must_use]
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    /// False until a value was pushed.
    #[must_use]
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// Stored values in slot order.
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Slot under the pointer, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    fn norm(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range > 0.0 {
            ((value - self.min) / range).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    fn slot_rect(&self, rect: Rect, slot: usize) -> Rect {
        let w = rect.w / self.count as f32;
        Rect::new(rect.x + slot as f32 * w, rect.y, w, rect.h)
    }
}

impl PanelLayout<'_> {
    /// Starts a graph of `count` slots over the value domain `[min, max]`.
    pub fn graph_begin(&mut self, kind: GraphKind, count: usize, min: f32, max: f32) -> Graph {
        let rect = self.widget();
        if let Some(rect) = rect {
            let role = match kind {
                GraphKind::Lines => ColorRole::Plot,
                GraphKind::Column => ColorRole::Histo,
            };
            self.buffer.push_rect(rect, self.config.color(role));
        }
        Graph {
            kind,
            rect,
            min,
            max,
            values: Vec::with_capacity(count),
            index: 0,
            count,
            valid: false,
            hovered: None,
        }
    }

    /// Stores `value` in the next slot, overwriting the oldest once `count`
    /// values were pushed. Returns true if the slot was clicked.
    pub fn graph_push(&mut self, graph: &mut Graph, value: f32) -> bool {
        if graph.count == 0 {
            return false;
        }
        let slot = graph.index % graph.count;
        if slot < graph.values.len() {
            graph.values[slot] = value;
        } else {
            graph.values.push(value);
        }
        graph.index += 1;
        graph.valid = true;

        let (Some(rect), Some(input)) = (graph.rect, self.widget_input()) else {
            return false;
        };
        if !graph.slot_rect(rect, slot).contains(input.mouse_pos) {
            return false;
        }
        graph.hovered = Some(slot);
        input.pressed()
    }

    /// Draws the collected values.
    pub fn graph_end(&mut self, graph: Graph) {
        let Some(rect) = graph.rect else {
            return;
        };
        if !graph.valid {
            return;
        }
        let config = self.config;
        match graph.kind {
            GraphKind::Lines => {
                let step = if graph.count > 1 { rect.w / (graph.count - 1) as f32 } else { 0.0 };
                let point = |slot: usize, value: f32| {
                    Vec2::new(rect.x + slot as f32 * step, rect.bottom() - graph.norm(value) * rect.h)
                };
                let color = config.color(ColorRole::PlotLines);
                for (slot, pair) in graph.values.windows(2).enumerate() {
                    self.buffer.push_line(point(slot, pair[0]), point(slot + 1, pair[1]), color);
                }
                if let Some(slot) = graph.hovered {
                    let at = point(slot, graph.values[slot]);
                    self.buffer.push_rect(
                        Rect::new(at.x - 2.0, at.y - 2.0, 4.0, 4.0),
                        config.color(ColorRole::PlotHighlight),
                    );
                }
            }
            GraphKind::Column => {
                for (slot, &value) in graph.values.iter().enumerate() {
                    let area = graph.slot_rect(rect, slot);
                    let h = graph.norm(value) * rect.h;
                    let role = if graph.hovered == Some(slot) {
                        ColorRole::HistoHighlight
                    } else if value < 0.0 {
                        ColorRole::HistoNegative
                    } else {
                        ColorRole::HistoBars
                    };
                    self.buffer.push_rect(Rect::new(area.x, rect.bottom() - h, area.w, h), config.color(role));
                }
            }
        }
    }

    /// Draws `values[offset..]` scaled to their own range and returns the
    /// clicked index into `values`.
    pub fn graph(&mut self, kind: GraphKind, values: &[f32], offset: usize) -> Option<usize> {
        let values = values.get(offset..).unwrap_or_default();
        let min = values.iter().copied().fold(f32::INFINITY, f32::min).min(0.0);
        let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max).max(min);

        let mut graph = self.graph_begin(kind, values.len(), min, max);
        let mut clicked = None;
        for (at, &value) in values.iter().enumerate() {
            if self.graph_push(&mut graph, value) && clicked.is_none() {
                clicked = Some(offset + at);
            }
        }
        self.graph_end(graph);
        clicked
    }

    /// Draws `count` values produced by `value` and returns the clicked index.
    pub fn graph_with<F>(&mut self, kind: GraphKind, count: usize, value: F) -> Option<usize>
    where
        F: FnMut(usize) -> f32,
    {
        let values: Vec<f32> = (0..count).map(value).collect();
        self.graph(kind, &values, 0)
    }
}
