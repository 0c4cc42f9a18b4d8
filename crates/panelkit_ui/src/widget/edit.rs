//! Single line text field.

use panelkit_core::{CommandBuffer, Rect};

use crate::font::Font;
use crate::input::{Input, Key};
use crate::style::EditStyle;

/// Which characters a text field accepts.
#[derive(Debug, Clone, Copy, Default)]
pub enum InputFilter {
    /// Any printable character.
    #[default]
    Default,
    /// Printable ASCII.
    Ascii,
    /// Floating point number: digits, one `.`, leading `-`.
    Float,
    /// Integer: digits, leading `-`.
    Decimal,
    /// Hexadecimal digits.
    Hex,
    /// Octal digits.
    Oct,
    /// Binary digits.
    Binary,
    /// Caller predicate.
    Custom(fn(char) -> bool),
}

impl InputFilter {
    /// Returns true if appending `c` to `current` keeps a valid token.
    #[must_use]
    pub fn accepts(&self, c: char, current: &str) -> bool {
        match self {
            Self::Default => !c.is_control(),
            Self::Ascii => c.is_ascii() && !c.is_ascii_control(),
            Self::Float => {
                c.is_ascii_digit()
                    || (c == '-' && current.is_empty())
                    || (c == '.' && !current.contains('.'))
            }
            Self::Decimal => c.is_ascii_digit() || (c == '-' && current.is_empty()),
            Self::Hex => c.is_ascii_hexdigit(),
            Self::Oct => ('0'..='7').contains(&c),
            Self::Binary => c == '0' || c == '1',
            Self::Custom(accept) => accept(c),
        }
    }
}

/// Returns the longest suffix of `text` that fits in `space` pixels.
fn tail<'a>(text: &'a str, space: f32, font: &Font) -> &'a str {
    let mut start = 0;
    for (at, ch) in text.char_indices() {
        if font.width(&text[at..]) <= space {
            return &text[at..];
        }
        start = at + ch.len_utf8();
    }
    &text[start..]
}

/// Draws a text field and applies this frame's edits to `buffer`.
///
/// A press inside the field focuses it, a press outside or Escape releases
/// it. While focused, typed characters accepted by `filter` are appended up
/// to `max` characters, Backspace and Delete remove the last one.
/// Returns the character count.
#[allow(clippy::too_many_arguments)]
pub fn edit(
    out: &mut CommandBuffer,
    rect: Rect,
    buffer: &mut String,
    max: usize,
    active: &mut bool,
    filter: InputFilter,
    style: &EditStyle,
    input: Option<&Input>,
    font: &Font,
) -> usize {
    if let Some(input) = input {
        if input.pressed() {
            *active = rect.contains(input.mouse_pos);
        }
        if input.key_pressed(Key::Escape) {
            *active = false;
        }
        if *active {
            if input.key_pressed(Key::Backspace) || input.key_pressed(Key::Del) {
                buffer.pop();
            }
            let mut count = buffer.chars().count();
            for c in input.text().chars() {
                if count >= max {
                    break;
                }
                if filter.accepts(c, buffer) {
                    buffer.push(c);
                    count += 1;
                }
            }
        }
    }

    out.push_rect_framed(rect, style.background, style.border, 1.0, 0.0);
    let area = rect.pad(style.padding);
    let cursor_w = if *active && style.show_cursor { font.width(" ").max(1.0) } else { 0.0 };
    let visible = tail(buffer, (area.w - cursor_w).max(0.0), font);
    let width = font.width(visible);
    out.push_text(
        Rect::new(area.x, area.y, width, area.h),
        visible,
        font.handle,
        style.background,
        style.foreground,
    );
    if cursor_w > 0.0 {
        out.push_rect(Rect::new(area.x + width, area.y, cursor_w, area.h), style.cursor);
    }
    buffer.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::fixtures::{self, frame};
    use panelkit_core::Command;

    fn typing(input: &mut Input, text: &str) {
        input.begin();
        for c in text.chars() {
            let mut bytes = [0u8; 4];
            input.char(c.encode_utf8(&mut bytes).as_bytes());
        }
        input.end();
    }

    #[test]
    fn test_focus_and_type() {
        let config = fixtures::config();
        let style = EditStyle::from_config(&config);
        let mut out = fixtures::buffer();
        let mut input = Input::new();
        let rect = Rect::new(0.0, 0.0, 100.0, 20.0);
        let mut text = String::new();
        let mut active = false;

        typing(&mut input, "ignored");
        edit(&mut out, rect, &mut text, 8, &mut active, InputFilter::Default, &style, Some(&input), &config.font);
        assert!(text.is_empty());

        frame(&mut input, 10.0, 10.0, Some(true));
        edit(&mut out, rect, &mut text, 8, &mut active, InputFilter::Default, &style, Some(&input), &config.font);
        assert!(active);

        typing(&mut input, "héllo wörld");
        let len = edit(&mut out, rect, &mut text, 8, &mut active, InputFilter::Default, &style, Some(&input), &config.font);
        assert_eq!(len, 8);
        assert_eq!(text, "héllo wö");
    }

    #[test]
    fn test_backspace_and_escape() {
        let config = fixtures::config();
        let style = EditStyle::from_config(&config);
        let mut out = fixtures::buffer();
        let mut input = Input::new();
        let rect = Rect::new(0.0, 0.0, 100.0, 20.0);
        let mut text = String::from("abc");
        let mut active = true;

        input.begin();
        input.key(Key::Backspace, true);
        input.end();
        edit(&mut out, rect, &mut text, 8, &mut active, InputFilter::Default, &style, Some(&input), &config.font);
        assert_eq!(text, "ab");

        input.begin();
        input.key(Key::Backspace, false);
        input.key(Key::Escape, true);
        input.end();
        edit(&mut out, rect, &mut text, 8, &mut active, InputFilter::Default, &style, Some(&input), &config.font);
        assert!(!active);
        assert_eq!(text, "ab");
    }

    #[test]
    fn test_press_outside_unfocuses() {
        let config = fixtures::config();
        let style = EditStyle::from_config(&config);
        let mut out = fixtures::buffer();
        let mut input = Input::new();
        let mut text = String::new();
        let mut active = true;

        frame(&mut input, 300.0, 10.0, Some(true));
        edit(
            &mut out,
            Rect::new(0.0, 0.0, 100.0, 20.0),
            &mut text,
            8,
            &mut active,
            InputFilter::Default,
            &style,
            Some(&input),
            &config.font,
        );
        assert!(!active);
    }

    #[test]
    fn test_filters() {
        assert!(InputFilter::Float.accepts('-', ""));
        assert!(!InputFilter::Float.accepts('-', "1"));
        assert!(InputFilter::Float.accepts('.', "1"));
        assert!(!InputFilter::Float.accepts('.', "1.5"));
        assert!(InputFilter::Hex.accepts('F', ""));
        assert!(!InputFilter::Hex.accepts('g', ""));
        assert!(!InputFilter::Oct.accepts('8', ""));
        assert!(!InputFilter::Binary.accepts('2', ""));
        assert!(!InputFilter::Ascii.accepts('é', ""));
        assert!(InputFilter::Custom(|c| c == 'x').accepts('x', ""));
    }

    #[test]
    fn test_long_text_shows_tail() {
        let config = fixtures::config();
        let mut style = EditStyle::from_config(&config);
        style.show_cursor = false;
        let mut out = fixtures::buffer();
        let mut text = String::from("0123456789");
        let mut active = false;

        // 38 px minus 8 padding fits five 6 px glyphs
        edit(
            &mut out,
            Rect::new(0.0, 0.0, 38.0, 20.0),
            &mut text,
            32,
            &mut active,
            InputFilter::Decimal,
            &style,
            None,
            &config.font,
        );
        let shown = out.iter().find_map(|command| match command {
            Command::Text { text, .. } => Some(text.to_owned()),
            _ => None,
        });
        assert_eq!(shown.as_deref(), Some("56789"));
    }
}
