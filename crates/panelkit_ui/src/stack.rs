//! # Panel Stack
//!
//! Z-order of panels. The tail is the topmost panel: it draws last and is
//! the only one that receives input.
//!
//! Nodes live in a slot vector with a free list and are linked by index:
//!
//! ```text
//!  slots:  [0: A] [1: free] [2: C] [3: B]
//!  order:  head=0 ──► 3 ──► 2=tail          (A, B, C bottom to top)
//! ```
//!
//! Each [`Panel`] remembers its slot, so removing it or moving it to the top
//! is O(1) and never searches the list.

use std::sync::atomic::{AtomicU32, Ordering};

use panelkit_core::{Rect, Vec2};

use crate::panel::{Panel, PanelId};

/// Identity of a stack, used to validate panel membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StackId(u32);

impl StackId {
    fn next() -> Self {
        static NEXT: AtomicU32 = AtomicU32::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone)]
struct StackNode {
    panel: PanelId,
    rect: Rect,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Ordered set of panels.
#[derive(Debug)]
pub struct Stack {
    id: StackId,
    nodes: Vec<Option<StackNode>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    count: usize,
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl Stack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: StackId::next(),
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            count: 0,
        }
    }

    /// Returns the stack identity.
    #[inline]
    #[must_use]
    pub fn id(&self) -> StackId {
        self.id
    }

    /// Number of panels.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if no panel is stacked.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn node(&self, slot: usize) -> Option<&StackNode> {
        self.nodes.get(slot).and_then(Option::as_ref)
    }

    fn slot_of(&self, panel: &Panel) -> Option<usize> {
        match panel.stack {
            Some((id, slot)) if id == self.id => self
                .node(slot)
                .filter(|node| node.panel == panel.id())
                .map(|_| slot),
            _ => None,
        }
    }

    /// Returns true if `panel` is a member of this stack.
    #[must_use]
    pub fn contains(&self, panel: &Panel) -> bool {
        self.slot_of(panel).is_some()
    }

    /// Returns the topmost panel.
    #[must_use]
    pub fn top(&self) -> Option<PanelId> {
        self.tail.and_then(|slot| self.node(slot)).map(|node| node.panel)
    }

    /// Appends `panel` on top.
    ///
    /// Returns false if the panel already belongs to this or another stack.
    pub fn push(&mut self, panel: &mut Panel) -> bool {
        match panel.stack {
            Some((id, _)) if id != self.id => {
                tracing::warn!(panel = panel.id().raw(), "panel already belongs to another stack");
                return false;
            }
            Some(_) if self.contains(panel) => return false,
            _ => {}
        }

        let node = StackNode {
            panel: panel.id(),
            rect: panel.rect,
            prev: self.tail,
            next: None,
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                slot
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        };
        match self.tail.and_then(|tail| self.nodes[tail].as_mut()) {
            Some(tail) => tail.next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.count += 1;
        panel.stack = Some((self.id, slot));
        tracing::trace!(panel = panel.id().raw(), slot, "panel pushed");
        true
    }

    /// Removes `panel`.
    ///
    /// Returns false if it was not a member; a stale membership left behind
    /// by [`clear`](Self::clear) is dropped.
    pub fn pop(&mut self, panel: &mut Panel) -> bool {
        let Some(slot) = self.slot_of(panel) else {
            if matches!(panel.stack, Some((id, _)) if id == self.id) {
                panel.stack = None;
            }
            return false;
        };
        let Some(node) = self.nodes[slot].take() else {
            return false;
        };

        match node.prev.and_then(|prev| self.nodes[prev].as_mut()) {
            Some(prev) => prev.next = node.next,
            None => self.head = node.next,
        }
        match node.next.and_then(|next| self.nodes[next].as_mut()) {
            Some(next) => next.prev = node.prev,
            None => self.tail = node.prev,
        }
        self.free.push(slot);
        self.count -= 1;
        panel.stack = None;
        tracing::trace!(panel = panel.id().raw(), slot, "panel popped");
        true
    }

    /// Moves `panel` to the top. Returns false if it is not a member.
    pub fn raise(&mut self, panel: &mut Panel) -> bool {
        self.pop(panel) && self.push(panel)
    }

    /// Removes every panel. Panels still holding a membership are accepted
    /// again by [`push`](Self::push).
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.count = 0;
    }

    /// Iterates panel ids from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = PanelId> + '_ {
        std::iter::successors(self.head.and_then(|slot| self.node(slot)), |node| {
            node.next.and_then(|slot| self.node(slot))
        })
        .map(|node| node.panel)
    }

    /// Records the on-screen area of `panel` for hit tests against the
    /// panels below it.
    pub(crate) fn set_rect(&mut self, panel: &Panel, rect: Rect) {
        if let Some(slot) = self.slot_of(panel) {
            if let Some(node) = self.nodes[slot].as_mut() {
                node.rect = rect;
            }
        }
    }

    /// Returns true if a panel above `panel` covers `point`.
    pub(crate) fn covered(&self, panel: &Panel, point: Vec2) -> bool {
        let Some(slot) = self.slot_of(panel) else {
            return false;
        };
        let mut next = self.node(slot).and_then(|node| node.next);
        while let Some(at) = next {
            let Some(node) = self.node(at) else {
                break;
            };
            if node.rect.contains(point) {
                return true;
            }
            next = node.next;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::PanelFlags;

    fn panel() -> Panel {
        Panel::new(Rect::new(0.0, 0.0, 10.0, 10.0), PanelFlags::empty())
    }

    #[test]
    fn test_push_orders_bottom_to_top() {
        let mut stack = Stack::new();
        let (mut a, mut b, mut c) = (panel(), panel(), panel());

        assert!(stack.push(&mut a));
        assert!(stack.push(&mut b));
        assert!(stack.push(&mut c));
        assert!(!stack.push(&mut b));

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![a.id(), b.id(), c.id()]);
        assert_eq!(stack.top(), Some(c.id()));
    }

    #[test]
    fn test_pop_middle_and_reuse_slot() {
        let mut stack = Stack::new();
        let (mut a, mut b, mut c, mut d) = (panel(), panel(), panel(), panel());
        stack.push(&mut a);
        stack.push(&mut b);
        stack.push(&mut c);

        assert!(stack.pop(&mut b));
        assert!(!stack.pop(&mut b));
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![a.id(), c.id()]);

        stack.push(&mut d);
        assert_eq!(stack.nodes.len(), 3);
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![a.id(), c.id(), d.id()]);
    }

    #[test]
    fn test_raise_moves_to_tail() {
        let mut stack = Stack::new();
        let (mut a, mut b) = (panel(), panel());
        stack.push(&mut a);
        stack.push(&mut b);

        assert!(stack.raise(&mut a));
        assert_eq!(stack.top(), Some(a.id()));
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![b.id(), a.id()]);
    }

    #[test]
    fn test_single_membership() {
        let mut first = Stack::new();
        let mut second = Stack::new();
        let mut a = panel();

        assert!(first.push(&mut a));
        assert!(!second.push(&mut a));
        assert!(!second.pop(&mut a));
        assert!(first.contains(&a));
    }

    #[test]
    fn test_clear_forgets_members() {
        let mut stack = Stack::new();
        let mut a = panel();
        stack.push(&mut a);
        stack.clear();

        assert!(stack.is_empty());
        assert!(!stack.contains(&a));
        assert!(stack.push(&mut a));
        assert_eq!(stack.top(), Some(a.id()));
    }

    #[test]
    fn test_covered_checks_only_higher_panels() {
        let mut stack = Stack::new();
        let (mut low, mut high) = (panel(), panel());
        stack.push(&mut low);
        stack.push(&mut high);
        stack.set_rect(&low, Rect::new(0.0, 0.0, 100.0, 100.0));
        stack.set_rect(&high, Rect::new(50.0, 50.0, 100.0, 100.0));

        assert!(stack.covered(&low, Vec2::new(60.0, 60.0)));
        assert!(!stack.covered(&low, Vec2::new(10.0, 10.0)));
        assert!(!stack.covered(&high, Vec2::new(60.0, 60.0)));
    }
}
