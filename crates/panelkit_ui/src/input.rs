//! Input snapshot for one frame.
//!
//! The platform layer feeds discrete events between [`Input::begin`] and
//! [`Input::end`]; widgets only read the result.

use panelkit_core::{utf8, Vec2};

/// Maximum number of UTF-8 bytes of text input per frame.
pub const INPUT_MAX: usize = 16;

/// Keys the widgets react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Shift modifier.
    Shift,
    /// Control modifier.
    Ctrl,
    /// Delete key.
    Del,
    /// Enter/Return key.
    Enter,
    /// Backspace key.
    Backspace,
    /// Escape key.
    Escape,
    /// Space bar.
    Space,
}

impl Key {
    /// Number of tracked keys.
    pub const COUNT: usize = 7;

    /// All keys in table order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Shift,
        Self::Ctrl,
        Self::Del,
        Self::Enter,
        Self::Backspace,
        Self::Escape,
        Self::Space,
    ];
}

/// State of one key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    /// Key is held.
    pub down: bool,
    /// Key changed state this frame.
    pub clicked: bool,
}

/// Input state for the current frame.
#[derive(Debug, Clone, Default)]
pub struct Input {
    keys: [KeyState; Key::COUNT],
    text: [u8; INPUT_MAX],
    text_len: usize,
    /// Current mouse position.
    pub mouse_pos: Vec2,
    /// Mouse position at the previous `begin`.
    pub mouse_prev: Vec2,
    /// Mouse movement this frame.
    pub mouse_delta: Vec2,
    /// Left button is held.
    pub mouse_down: bool,
    /// Number of button transitions this frame.
    pub mouse_clicked: u32,
    /// Position of the last button transition.
    pub mouse_clicked_pos: Vec2,
    /// Position of the last button press.
    pub mouse_down_pos: Vec2,
}

impl Input {
    /// Creates a new empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new frame, clearing edge flags and text.
    pub fn begin(&mut self) {
        self.mouse_clicked = 0;
        self.text_len = 0;
        self.mouse_prev = self.mouse_pos;
        for key in &mut self.keys {
            key.clicked = false;
        }
    }

    /// Updates the mouse position.
    pub fn motion(&mut self, x: f32, y: f32) {
        self.mouse_pos = Vec2::new(x, y);
    }

    /// Records a key transition.
    pub fn key(&mut self, key: Key, down: bool) {
        let state = &mut self.keys[key as usize];
        if state.down != down {
            state.clicked = true;
        }
        state.down = down;
    }

    /// Records a button transition at `(x, y)`. Repeated reports of the same
    /// state are ignored.
    pub fn button(&mut self, x: f32, y: f32, down: bool) {
        if self.mouse_down == down {
            return;
        }
        let at = Vec2::new(x, y);
        self.mouse_clicked_pos = at;
        if down {
            self.mouse_down_pos = at;
        }
        self.mouse_down = down;
        self.mouse_clicked += 1;
    }

    /// Queues one glyph of text. The first code point of `glyph` is decoded
    /// and appended if it fits in the remaining capacity.
    pub fn char(&mut self, glyph: &[u8]) {
        let (ch, consumed) = utf8::decode(glyph);
        if consumed == 0 {
            return;
        }
        let written = utf8::encode(ch, &mut self.text[self.text_len..]);
        self.text_len += written;
    }

    /// Finalizes the frame.
    pub fn end(&mut self) {
        self.mouse_delta = self.mouse_pos - self.mouse_prev;
    }

    /// Returns the state of a key.
    #[inline]
    #[must_use]
    pub fn key_state(&self, key: Key) -> KeyState {
        self.keys[key as usize]
    }

    /// Returns true if the key went down this frame.
    #[inline]
    #[must_use]
    pub fn key_pressed(&self, key: Key) -> bool {
        let state = self.keys[key as usize];
        state.down && state.clicked
    }

    /// Returns the text typed this frame.
    #[must_use]
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.text[..self.text_len]).unwrap_or_default()
    }

    /// Returns true if the button went down this frame.
    #[inline]
    #[must_use]
    pub fn pressed(&self) -> bool {
        self.mouse_down && self.mouse_clicked > 0
    }

    /// Returns true if the button was released this frame.
    #[inline]
    #[must_use]
    pub fn released(&self) -> bool {
        !self.mouse_down && self.mouse_clicked > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_follows_motion() {
        let mut input = Input::new();
        input.begin();
        input.motion(10.0, 5.0);
        input.end();
        assert_eq!(input.mouse_delta, Vec2::new(10.0, 5.0));

        input.begin();
        input.motion(12.0, 2.0);
        input.end();
        assert_eq!(input.mouse_delta, Vec2::new(2.0, -3.0));
    }

    #[test]
    fn test_click_edge_cleared_on_begin() {
        let mut input = Input::new();
        input.begin();
        input.button(3.0, 4.0, true);
        input.button(3.0, 4.0, true);
        input.end();
        assert_eq!(input.mouse_clicked, 1);
        assert!(input.pressed());
        assert_eq!(input.mouse_down_pos, Vec2::new(3.0, 4.0));

        input.begin();
        input.end();
        assert_eq!(input.mouse_clicked, 0);
        assert!(input.mouse_down);
    }

    #[test]
    fn test_key_edges() {
        let mut input = Input::new();
        input.begin();
        input.key(Key::Enter, true);
        assert!(input.key_pressed(Key::Enter));

        input.begin();
        assert!(!input.key_state(Key::Enter).clicked);
        assert!(input.key_state(Key::Enter).down);
    }

    #[test]
    fn test_text_queue_is_bounded() {
        let mut input = Input::new();
        input.begin();
        for _ in 0..20 {
            input.char(b"a");
        }
        input.char("é".as_bytes());
        assert_eq!(input.text().len(), INPUT_MAX);

        input.begin();
        input.char(&[0xFF]);
        assert_eq!(input.text(), "\u{FFFD}");
    }
}
