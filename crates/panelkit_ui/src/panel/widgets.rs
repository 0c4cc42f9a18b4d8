//! Widget calls placed by the panel layout.
//!
//! Each call takes the next slot from [`PanelLayout::widget`], builds the
//! widget style from the config and forwards to the primitive in
//! [`crate::widget`]. Calls on a clipped slot draw nothing and return the
//! value they were given.

use panelkit_core::{Color, Heading, ImageHandle, Rect};

use super::PanelLayout;
use crate::config::{ColorRole, Property};
use crate::input::Key;
use crate::style::{
    ButtonStyle, EditStyle, ProgressStyle, SliderStyle, TextStyle, ToggleStyle,
};
use crate::widget::{self, ButtonBehavior, InputFilter, TextAlign, ToggleKind};

const SHELL_LABEL: &str = "submit";

impl PanelLayout<'_> {
    /// Text in the next slot.
    pub fn text(&mut self, label: &str, align: TextAlign) {
        let color = self.config.color(ColorRole::Text);
        self.text_colored(label, align, color);
    }

    /// Text in the next slot drawn with `color`.
    pub fn text_colored(&mut self, label: &str, align: TextAlign, color: Color) {
        let Some(rect) = self.widget() else {
            return;
        };
        let style = TextStyle { foreground: color, ..TextStyle::from_config(self.config) };
        widget::text(self.buffer, rect, label, &style, align, &self.config.font);
    }

    /// Starts a single-column row one text line tall and draws `label` in it.
    pub fn label(&mut self, label: &str, align: TextAlign) {
        let color = self.config.color(ColorRole::Text);
        self.label_colored(label, align, color);
    }

    /// [`label`](Self::label) drawn with `color`.
    pub fn label_colored(&mut self, label: &str, align: TextAlign, color: Color) {
        let item_padding = self.config.property(Property::ItemPadding);
        self.row(self.config.font.height + 2.0 * item_padding.y, 1);
        self.text_colored(label, align, color);
    }

    /// Button with a label. Returns true when activated per `behavior`.
    pub fn button_text(&mut self, label: &str, behavior: ButtonBehavior) -> bool {
        let Some(rect) = self.widget() else {
            return false;
        };
        let style = ButtonStyle::from_config(self.config);
        let input = self.widget_input();
        widget::button_text(self.buffer, rect, label, behavior, &style, input, &self.config.font)
    }

    /// Button filled with `color`.
    pub fn button_color(&mut self, color: Color, behavior: ButtonBehavior) -> bool {
        let Some(rect) = self.widget() else {
            return false;
        };
        let style = ButtonStyle {
            background: color,
            highlight: color,
            ..ButtonStyle::from_config(self.config)
        };
        let input = self.widget_input();
        widget::button(self.buffer, rect, behavior, &style, input).0
    }

    /// Button with a triangle glyph.
    pub fn button_triangle(&mut self, heading: Heading, behavior: ButtonBehavior) -> bool {
        let Some(rect) = self.widget() else {
            return false;
        };
        let style = ButtonStyle::from_config(self.config);
        let input = self.widget_input();
        widget::button_triangle(self.buffer, rect, heading, behavior, &style, input)
    }

    /// Button showing an image.
    pub fn button_image(&mut self, image: ImageHandle, behavior: ButtonBehavior) -> bool {
        let Some(rect) = self.widget() else {
            return false;
        };
        let style = ButtonStyle::from_config(self.config);
        let input = self.widget_input();
        widget::button_image(self.buffer, rect, image, behavior, &style, input)
    }

    /// Button that stays highlighted while `active`. Returns the new state.
    pub fn button_toggle(&mut self, label: &str, active: bool) -> bool {
        let Some(rect) = self.widget() else {
            return active;
        };
        let mut style = ButtonStyle::from_config(self.config);
        if active {
            style.background = self.config.color(ColorRole::ButtonToggle);
            style.highlight = style.background;
            style.content = self.config.color(ColorRole::ButtonHoverFont);
        }
        let input = self.widget_input();
        let clicked = widget::button_text(
            self.buffer,
            rect,
            label,
            ButtonBehavior::Default,
            &style,
            input,
            &self.config.font,
        );
        active ^ clicked
    }

    fn toggle(&mut self, label: &str, active: bool, kind: ToggleKind) -> bool {
        let Some(rect) = self.widget() else {
            return active;
        };
        let style = match kind {
            ToggleKind::Check => ToggleStyle::check(self.config),
            ToggleKind::Option => ToggleStyle::option(self.config),
        };
        let input = self.widget_input();
        widget::toggle(self.buffer, rect, active, label, kind, &style, input, &self.config.font)
    }

    /// Checkbox. Returns the new state.
    pub fn check(&mut self, label: &str, active: bool) -> bool {
        self.toggle(label, active, ToggleKind::Check)
    }

    /// Radio option. Returns the new state.
    pub fn option(&mut self, label: &str, active: bool) -> bool {
        self.toggle(label, active, ToggleKind::Option)
    }

    /// One radio option per label, `current` selected. Returns the selected
    /// index after this frame's clicks.
    pub fn option_group(&mut self, labels: &[&str], current: usize) -> usize {
        let mut selected = current;
        for (index, label) in labels.iter().enumerate() {
            if self.option(label, index == current) && index != current {
                selected = index;
            }
        }
        selected
    }

    /// Horizontal slider. Returns the new value.
    pub fn slider(&mut self, min: f32, value: f32, max: f32, step: f32) -> f32 {
        let Some(rect) = self.widget() else {
            return value;
        };
        let style = SliderStyle::from_config(self.config);
        let input = self.widget_input();
        widget::slider(self.buffer, rect, min, value, max, step, &style, input)
    }

    /// Progress bar, editable by the pointer when `modifiable`.
    pub fn progress(&mut self, value: usize, max: usize, modifiable: bool) -> usize {
        let Some(rect) = self.widget() else {
            return value;
        };
        let style = ProgressStyle::from_config(self.config);
        let input = self.widget_input();
        widget::progress(self.buffer, rect, value, max, modifiable, &style, input)
    }

    /// Text field. Returns the character count.
    pub fn edit(&mut self, buffer: &mut String, max: usize, active: &mut bool, filter: InputFilter) -> usize {
        let Some(rect) = self.widget() else {
            return buffer.chars().count();
        };
        self.edit_in(rect, buffer, max, active, filter)
    }

    /// Text field accepting only characters for which `accept` holds.
    pub fn edit_filtered(
        &mut self,
        buffer: &mut String,
        max: usize,
        active: &mut bool,
        accept: fn(char) -> bool,
    ) -> usize {
        self.edit(buffer, max, active, InputFilter::Custom(accept))
    }

    fn edit_in(
        &mut self,
        rect: Rect,
        buffer: &mut String,
        max: usize,
        active: &mut bool,
        filter: InputFilter,
    ) -> usize {
        let style = EditStyle::from_config(self.config);
        let input = self.focus_input(active);
        widget::edit(self.buffer, rect, buffer, max, active, filter, &style, input, &self.config.font)
    }

    /// Text field with a submit button. Returns true when the button is
    /// clicked or Enter is pressed while the field is focused.
    pub fn shell(&mut self, buffer: &mut String, max: usize, active: &mut bool) -> bool {
        let Some(rect) = self.widget() else {
            return false;
        };
        let spacing = self.config.property(Property::ItemSpacing);
        let item_padding = self.config.property(Property::ItemPadding);
        let button_w = (self.config.font.width(SHELL_LABEL) + 2.0 * item_padding.x).min(rect.w);
        let field = Rect::new(rect.x, rect.y, (rect.w - button_w - spacing.x).max(0.0), rect.h);
        let submit = Rect::new(rect.right() - button_w, rect.y, button_w, rect.h);

        let was_active = *active;
        self.edit_in(field, buffer, max, active, InputFilter::Default);
        let style = ButtonStyle::from_config(self.config);
        let input = self.widget_input();
        let clicked = widget::button_text(
            self.buffer,
            submit,
            SHELL_LABEL,
            ButtonBehavior::Default,
            &style,
            input,
            &self.config.font,
        );
        let entered = was_active && self.input.is_some_and(|input| input.key_pressed(Key::Enter));
        clicked || entered
    }

    /// Integer field with up/down arrows. Returns the new value.
    ///
    /// Typing replaces the value once the text parses; the arrows add or
    /// subtract `step`. The result is clamped to `[min, max]`.
    pub fn spinner(&mut self, min: i32, value: i32, max: i32, step: i32, active: &mut bool) -> i32 {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let Some(rect) = self.widget() else {
            return value.clamp(min, max);
        };
        let button_w = (rect.h * 0.5).min(rect.w);
        let field = Rect::new(rect.x, rect.y, rect.w - button_w, rect.h);
        let up = Rect::new(field.right(), rect.y, button_w, rect.h * 0.5);
        let down = Rect::new(field.right(), rect.y + up.h, button_w, rect.h - up.h);

        let mut value = value.clamp(min, max);
        let arrows = ButtonStyle::glyph(
            self.config,
            self.config.color(ColorRole::Spinner),
            self.config.color(ColorRole::SpinnerBorder),
            self.config.color(ColorRole::SpinnerTriangle),
        );
        let input = self.widget_input();
        if widget::button_triangle(self.buffer, up, Heading::Up, ButtonBehavior::Default, &arrows, input) {
            value = value.saturating_add(step).min(max);
        }
        if widget::button_triangle(self.buffer, down, Heading::Down, ButtonBehavior::Default, &arrows, input) {
            value = value.saturating_sub(step).max(min);
        }

        let mut text = value.to_string();
        let style = EditStyle {
            background: self.config.color(ColorRole::Spinner),
            border: self.config.color(ColorRole::SpinnerBorder),
            ..EditStyle::from_config(self.config)
        };
        let input = self.focus_input(active);
        widget::edit(
            self.buffer,
            field,
            &mut text,
            11,
            active,
            InputFilter::Decimal,
            &style,
            input,
            &self.config.font,
        );
        text.parse::<i32>().map_or(value, |typed| typed.clamp(min, max))
    }

    /// Shows `items[current]` with arrows to step through the list. Returns
    /// the selected index.
    pub fn selector(&mut self, items: &[&str], current: usize) -> usize {
        let Some(last) = items.len().checked_sub(1) else {
            return 0;
        };
        let current = current.min(last);
        let Some(rect) = self.widget() else {
            return current;
        };
        let button_w = (rect.h * 0.5).min(rect.w);
        let field = Rect::new(rect.x, rect.y, rect.w - button_w, rect.h);
        let up = Rect::new(field.right(), rect.y, button_w, rect.h * 0.5);
        let down = Rect::new(field.right(), rect.y + up.h, button_w, rect.h - up.h);

        self.buffer.push_rect_framed(
            field,
            self.config.color(ColorRole::Selector),
            self.config.color(ColorRole::SelectorBorder),
            1.0,
            0.0,
        );
        let style = TextStyle {
            background: self.config.color(ColorRole::Selector),
            ..TextStyle::from_config(self.config)
        };
        widget::text(self.buffer, field, items[current], &style, TextAlign::Left, &self.config.font);

        let arrows = ButtonStyle::glyph(
            self.config,
            self.config.color(ColorRole::Selector),
            self.config.color(ColorRole::SelectorBorder),
            self.config.color(ColorRole::SelectorTriangle),
        );
        let input = self.widget_input();
        let mut selected = current;
        if widget::button_triangle(self.buffer, up, Heading::Up, ButtonBehavior::Default, &arrows, input) {
            selected = selected.saturating_sub(1);
        }
        if widget::button_triangle(self.buffer, down, Heading::Down, ButtonBehavior::Default, &arrows, input) {
            selected = (selected + 1).min(last);
        }
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::input::Input;
    use crate::panel::PanelFlags;
    use crate::widget::fixtures::{self, frame};
    use panelkit_core::{Command, CommandBuffer};

    fn layout<'a>(
        config: &'a Config,
        buffer: &'a mut CommandBuffer,
        input: Option<&'a Input>,
    ) -> PanelLayout<'a> {
        let rect = Rect::new(0.0, 0.0, 230.0, 400.0);
        let mut layout = PanelLayout::new(config, input, buffer, rect, 20.0, 230.0, 0.0, rect, PanelFlags::empty());
        layout.row(20.0, 1);
        layout
    }

    /// Presses and releases the button at `(x, y)`; the release frame is
    /// left in `input`.
    fn click(input: &mut Input, x: f32, y: f32) {
        frame(input, x, y, Some(true));
        frame(input, x, y, Some(false));
    }

    fn texts(buffer: &CommandBuffer) -> Vec<String> {
        buffer
            .iter()
            .filter_map(|command| match command {
                Command::Text { text, .. } => Some(text.to_owned()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_button_click_in_slot() {
        let config = fixtures::config();
        let mut buffer = fixtures::buffer();
        let mut input = Input::new();
        // first slot spans (15, 20, 200, 20)
        click(&mut input, 100.0, 30.0);
        let mut layout = layout(&config, &mut buffer, Some(&input));

        assert!(layout.button_text("Go", ButtonBehavior::Default));
        assert!(!layout.button_text("Stay", ButtonBehavior::Default));
        drop(layout);
        assert_eq!(texts(&buffer), vec!["Go".to_owned(), "Stay".to_owned()]);
    }

    #[test]
    fn test_input_outside_clip_is_withheld() {
        let config = fixtures::config();
        let mut buffer = fixtures::buffer();
        let mut input = Input::new();
        frame(&mut input, 100.0, 25.0, Some(true));
        let rect = Rect::new(0.0, 0.0, 230.0, 400.0);
        let clip = Rect::new(0.0, 30.0, 230.0, 370.0);
        let mut layout =
            PanelLayout::new(&config, Some(&input), &mut buffer, rect, 20.0, 230.0, 0.0, clip, PanelFlags::empty());
        layout.row(20.0, 1);

        // slot lies partly in the clip but the pointer does not
        assert!(!layout.button_color(Color::WHITE, ButtonBehavior::Repeater));
    }

    #[test]
    fn test_press_outside_panel_releases_edit() {
        let config = fixtures::config();
        let mut buffer = fixtures::buffer();
        let mut input = Input::new();
        let mut text = String::from("ab");
        let mut active = true;
        frame(&mut input, 500.0, 500.0, Some(true));
        let mut layout = layout(&config, &mut buffer, Some(&input));
        layout.edit(&mut text, 16, &mut active, InputFilter::Default);
        assert!(!active);

        // pointer back over the field, no press
        input.begin();
        input.motion(100.0, 30.0);
        input.char(b"c");
        input.end();
        let mut layout = self::layout(&config, &mut buffer, Some(&input));
        assert_eq!(layout.edit(&mut text, 16, &mut active, InputFilter::Default), 2);
        assert_eq!(text, "ab");
    }

    #[test]
    fn test_focused_edit_types_with_pointer_outside() {
        let config = fixtures::config();
        let mut buffer = fixtures::buffer();
        let mut input = Input::new();
        let mut text = String::new();
        let mut active = true;
        input.begin();
        input.motion(500.0, 500.0);
        input.char(b"z");
        input.end();

        let mut layout = layout(&config, &mut buffer, Some(&input));
        assert_eq!(layout.edit(&mut text, 16, &mut active, InputFilter::Default), 1);
        assert!(active);
        assert_eq!(text, "z");
    }

    #[test]
    fn test_spinner_press_outside_panel_releases_focus() {
        let config = fixtures::config();
        let mut buffer = fixtures::buffer();
        let mut input = Input::new();
        let mut active = true;
        frame(&mut input, 500.0, 500.0, Some(true));

        let mut layout = layout(&config, &mut buffer, Some(&input));
        assert_eq!(layout.spinner(0, 4, 10, 1, &mut active), 4);
        assert!(!active);
    }

    #[test]
    fn test_option_group_selects_clicked() {
        let config = fixtures::config();
        let mut buffer = fixtures::buffer();
        let mut input = Input::new();
        // second option: row wraps to y 44..64
        click(&mut input, 20.0, 50.0);
        let mut layout = layout(&config, &mut buffer, Some(&input));

        assert_eq!(layout.option_group(&["a", "b", "c"], 0), 1);
    }

    #[test]
    fn test_check_and_toggle_flip() {
        let config = fixtures::config();
        let mut buffer = fixtures::buffer();
        let mut input = Input::new();
        // second row, first of two 95 px columns
        click(&mut input, 20.0, 50.0);
        let mut layout = layout(&config, &mut buffer, Some(&input));
        layout.row(20.0, 2);

        assert!(layout.check("first", false));
        assert!(!layout.check("second", false));

        // first toggle sits above the click, the second wraps onto it
        let mut layout = self::layout(&config, &mut buffer, Some(&input));
        assert!(layout.button_toggle("on", true));
        assert!(layout.button_toggle("off", false));
    }

    #[test]
    fn test_spinner_arrows_and_clamp() {
        let config = fixtures::config();
        let mut buffer = fixtures::buffer();
        let mut input = Input::new();
        let mut active = false;
        // up arrow: x 205..215, y 20..30
        click(&mut input, 210.0, 24.0);
        let mut layout = layout(&config, &mut buffer, Some(&input));
        assert_eq!(layout.spinner(0, 9, 10, 5, &mut active), 10);

        let mut layout = self::layout(&config, &mut buffer, None);
        assert_eq!(layout.spinner(0, 42, 10, 1, &mut active), 10);
    }

    #[test]
    fn test_spinner_typed_value() {
        let config = fixtures::config();
        let mut buffer = fixtures::buffer();
        let mut input = Input::new();
        let mut active = true;
        input.begin();
        input.char(b"7");
        input.end();

        let mut layout = layout(&config, &mut buffer, Some(&input));
        assert_eq!(layout.spinner(0, 1, 100, 1, &mut active), 17);
    }

    #[test]
    fn test_selector_steps_through_items() {
        let config = fixtures::config();
        let mut buffer = fixtures::buffer();
        let mut input = Input::new();
        // down arrow: x 205..215, y 30..40
        click(&mut input, 210.0, 35.0);
        let mut layout = layout(&config, &mut buffer, Some(&input));
        assert_eq!(layout.selector(&["low", "mid", "high"], 1), 2);

        let mut layout = self::layout(&config, &mut buffer, Some(&input));
        assert_eq!(layout.selector(&["low", "mid", "high"], 2), 2);
        assert_eq!(layout.selector(&[], 3), 0);
    }

    #[test]
    fn test_shell_submits_on_enter() {
        let config = fixtures::config();
        let mut buffer = fixtures::buffer();
        let mut input = Input::new();
        let mut line = String::from("ls");
        let mut active = true;
        input.begin();
        input.key(Key::Enter, true);
        input.end();

        let mut layout = layout(&config, &mut buffer, Some(&input));
        assert!(layout.shell(&mut line, 32, &mut active));
        drop(layout);
        assert!(texts(&buffer).contains(&SHELL_LABEL.to_owned()));
    }

    #[test]
    fn test_label_starts_own_row() {
        let config = fixtures::config();
        let mut buffer = fixtures::buffer();
        let mut layout = layout(&config, &mut buffer, None);

        layout.label("Title", TextAlign::Left);
        // 20 + 4 spacing, one line of 10 + 2 * 4 padding
        assert_eq!(layout.cursor.at_y, 44.0);
        assert_eq!(layout.cursor.row_height, 22.0);
    }
}
