//! # Widget Primitives
//!
//! Stateless functions that draw into a [`CommandBuffer`] and return the
//! interaction result for this frame.
//!
//! Every widget follows the same pattern:
//!
//! 1. hit-test the rect against the mouse position
//! 2. derive a [`VisualState`] from the hit test and the button
//! 3. emit background, frame and content commands
//! 4. return the result
//!
//! Passing `None` as input draws the widget in its normal state and never
//! reports interaction.
//!
//! [`CommandBuffer`]: panelkit_core::CommandBuffer

mod button;
mod edit;
mod scroll;
mod slider;
mod text;
mod toggle;

pub use button::{button, button_image, button_text, button_triangle};
pub use edit::{edit, InputFilter};
pub use scroll::scroll;
pub use slider::{progress, slider};
pub use text::text;
pub use toggle::toggle;

use panelkit_core::Rect;

use crate::input::Input;

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAlign {
    /// Flush left.
    #[default]
    Left,
    /// Centered.
    Centered,
    /// Flush right.
    Right,
}

/// When a button reports activation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonBehavior {
    /// Once, when a press that started inside is released inside.
    #[default]
    Default,
    /// Every frame the button is held while hovered.
    Repeater,
}

/// Shape of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleKind {
    /// Square checkbox.
    Check,
    /// Round radio option.
    Option,
}

/// Visual state of an interactive widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    /// Not hovered.
    Normal,
    /// Hovered, button up.
    Hover,
    /// Hovered, button down.
    Active,
}

impl VisualState {
    /// Derives the state from the hit test and the button.
    #[must_use]
    pub fn of(rect: &Rect, input: Option<&Input>) -> Self {
        match input {
            Some(input) if rect.contains(input.mouse_pos) => {
                if input.mouse_down {
                    Self::Active
                } else {
                    Self::Hover
                }
            }
            _ => Self::Normal,
        }
    }

    /// True for hover and active.
    #[inline]
    #[must_use]
    pub fn is_highlighted(self) -> bool {
        self != Self::Normal
    }
}

/// Returns true if `rect` was clicked this frame according to `behavior`.
#[must_use]
pub fn clicked(rect: &Rect, behavior: ButtonBehavior, input: Option<&Input>) -> bool {
    let Some(input) = input else {
        return false;
    };
    let hovered = rect.contains(input.mouse_pos);
    match behavior {
        ButtonBehavior::Default => {
            hovered && input.released() && rect.contains(input.mouse_down_pos)
        }
        ButtonBehavior::Repeater => hovered && input.mouse_down,
    }
}
