//! Per-widget styles.
//!
//! Widgets never read the [`Config`] tables themselves: panel code builds one
//! of these from the config and hands it to the widget function. Callers
//! drawing widgets outside of a panel can fill them in by hand.

use panelkit_core::{Color, Vec2};

use crate::config::{ColorRole, Config, Property};

/// Style for plain text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Space between the rect border and the text.
    pub padding: Vec2,
    /// Text color.
    pub foreground: Color,
    /// Fill color behind the text.
    pub background: Color,
}

impl TextStyle {
    /// Panel text style.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            padding: config.property(Property::ItemPadding),
            foreground: config.color(ColorRole::Text),
            background: config.color(ColorRole::Panel),
        }
    }
}

/// Style for buttons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    /// Border width.
    pub border: f32,
    /// Corner radius.
    pub rounding: f32,
    /// Space between the frame and the content.
    pub padding: Vec2,
    /// Fill color.
    pub background: Color,
    /// Border color.
    pub foreground: Color,
    /// Content color (text, glyph).
    pub content: Color,
    /// Fill color while hovered or pressed.
    pub highlight: Color,
    /// Content color while hovered or pressed.
    pub highlight_content: Color,
}

impl ButtonStyle {
    /// Panel button style.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            border: 1.0,
            rounding: 0.0,
            padding: config.property(Property::ItemPadding),
            background: config.color(ColorRole::Button),
            foreground: config.color(ColorRole::ButtonBorder),
            content: config.color(ColorRole::Text),
            highlight: config.color(ColorRole::ButtonHover),
            highlight_content: config.color(ColorRole::ButtonHoverFont),
        }
    }

    /// Style for glyph buttons with the given fill, border and glyph colors.
    #[must_use]
    pub fn glyph(config: &Config, background: Color, border: Color, glyph: Color) -> Self {
        Self {
            background,
            foreground: border,
            content: glyph,
            highlight: background,
            highlight_content: config.color(ColorRole::Text),
            ..Self::from_config(config)
        }
    }
}

/// Style for checkboxes and radio options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToggleStyle {
    /// Space between the select box and its cursor.
    pub padding: Vec2,
    /// Label color.
    pub font: Color,
    /// Fill behind the label.
    pub background: Color,
    /// Select box color.
    pub foreground: Color,
    /// Cursor color when active.
    pub cursor: Color,
}

impl ToggleStyle {
    /// Checkbox style.
    #[must_use]
    pub fn check(config: &Config) -> Self {
        Self {
            padding: config.property(Property::ItemPadding),
            font: config.color(ColorRole::Text),
            background: config.color(ColorRole::Panel),
            foreground: config.color(ColorRole::CheckBackground),
            cursor: config.color(ColorRole::CheckActive),
        }
    }

    /// Radio option style.
    #[must_use]
    pub fn option(config: &Config) -> Self {
        Self {
            foreground: config.color(ColorRole::OptionBackground),
            cursor: config.color(ColorRole::OptionActive),
            ..Self::check(config)
        }
    }
}

/// Style for sliders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderStyle {
    /// Space between the frame and the track.
    pub padding: Vec2,
    /// Track color.
    pub bar: Color,
    /// Cursor border color.
    pub border: Color,
    /// Fill color.
    pub background: Color,
    /// Cursor color.
    pub foreground: Color,
}

impl SliderStyle {
    /// Panel slider style.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            padding: config.property(Property::ItemPadding),
            bar: config.color(ColorRole::SliderBar),
            border: config.color(ColorRole::SliderBorder),
            background: config.color(ColorRole::Slider),
            foreground: config.color(ColorRole::SliderCursor),
        }
    }
}

/// Style for progress bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressStyle {
    /// Space between the frame and the bar.
    pub padding: Vec2,
    /// Fill color.
    pub background: Color,
    /// Bar color.
    pub foreground: Color,
}

impl ProgressStyle {
    /// Panel progress style.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            padding: config.property(Property::ItemPadding),
            background: config.color(ColorRole::Progress),
            foreground: config.color(ColorRole::ProgressCursor),
        }
    }
}

/// Style for scrollbars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollStyle {
    /// Track color.
    pub background: Color,
    /// Cursor color.
    pub foreground: Color,
    /// Border and arrow color.
    pub border: Color,
}

impl ScrollStyle {
    /// Panel scrollbar style.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            background: config.color(ColorRole::Scrollbar),
            foreground: config.color(ColorRole::ScrollbarCursor),
            border: config.color(ColorRole::ScrollbarBorder),
        }
    }
}

/// Style for text fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditStyle {
    /// Space between the frame and the text.
    pub padding: Vec2,
    /// Draw a cursor after the text while focused.
    pub show_cursor: bool,
    /// Cursor color.
    pub cursor: Color,
    /// Fill color.
    pub background: Color,
    /// Text color.
    pub foreground: Color,
    /// Border color.
    pub border: Color,
}

impl EditStyle {
    /// Panel text field style.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            padding: config.property(Property::ItemPadding),
            show_cursor: true,
            cursor: config.color(ColorRole::InputCursor),
            background: config.color(ColorRole::Input),
            foreground: config.color(ColorRole::Text),
            border: config.color(ColorRole::InputBorder),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::Font;
    use panelkit_core::FontHandle;

    #[test]
    fn test_styles_follow_config_overrides() {
        let mut config = Config::new(Font::monospace(FontHandle(0), 10.0, 6.0));
        config.push_color(ColorRole::Button, 1, 2, 3, 255);
        assert_eq!(ButtonStyle::from_config(&config).background, Color::rgb(1, 2, 3));

        config.pop_color();
        assert_eq!(
            ButtonStyle::from_config(&config).background,
            ColorRole::Button.default_color()
        );
    }

    #[test]
    fn test_option_style_uses_option_roles() {
        let config = Config::new(Font::monospace(FontHandle(0), 10.0, 6.0));
        let style = ToggleStyle::option(&config);
        assert_eq!(style.cursor, config.color(ColorRole::OptionActive));
        assert_eq!(style.font, config.color(ColorRole::Text));
    }
}
