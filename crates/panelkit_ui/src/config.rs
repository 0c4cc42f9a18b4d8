//! # Config
//!
//! Flat color and spacing tables with scoped overrides.
//!
//! ```text
//!   push_color(Button, red)        pop_color()
//!         │                            │
//!         ▼                            ▼
//!  colors[Button] = red        colors[Button] = saved
//!  stack: [(Button, saved)]    stack: []
//! ```
//!
//! Widgets read through [`Config::color`] and [`Config::property`] only, so a
//! push/pop pair restyles everything drawn in between.

use std::collections::BTreeMap;
use std::path::Path;

use panelkit_core::{Color, Vec2};
use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};
use crate::font::Font;

/// Depth of each override stack.
pub const MAX_STACK_DEPTH: usize = 32;

/// Spacing properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// Gap between widgets in a row and between rows.
    ItemSpacing,
    /// Inner padding of widgets.
    ItemPadding,
    /// Panel padding around the content.
    Padding,
    /// Size of the scaler grip.
    ScalerSize,
    /// Width of the panel scrollbar.
    ScrollbarWidth,
    /// Default panel size.
    Size,
}

impl Property {
    /// Number of properties.
    pub const COUNT: usize = 6;

    /// All properties in table order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::ItemSpacing,
        Self::ItemPadding,
        Self::Padding,
        Self::ScalerSize,
        Self::ScrollbarWidth,
        Self::Size,
    ];

    /// Compiled-in default value.
    #[must_use]
    pub const fn default_value(self) -> Vec2 {
        match self {
            Self::ItemSpacing => Vec2::new(10.0, 4.0),
            Self::ItemPadding => Vec2::new(4.0, 4.0),
            Self::Padding => Vec2::new(15.0, 10.0),
            Self::ScalerSize => Vec2::new(16.0, 16.0),
            Self::ScrollbarWidth => Vec2::new(16.0, 16.0),
            Self::Size => Vec2::new(64.0, 64.0),
        }
    }
}

impl TryFrom<u32> for Property {
    type Error = ConfigError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(ConfigError::UnknownProperty(value))
    }
}

/// Color roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum ColorRole {
    Text,
    Panel,
    Header,
    Border,
    Button,
    ButtonBorder,
    ButtonHover,
    ButtonToggle,
    ButtonHoverFont,
    Check,
    CheckBackground,
    CheckActive,
    Option,
    OptionBackground,
    OptionActive,
    Slider,
    SliderBar,
    SliderBorder,
    SliderCursor,
    Progress,
    ProgressCursor,
    Input,
    InputCursor,
    InputBorder,
    Spinner,
    SpinnerBorder,
    SpinnerTriangle,
    Selector,
    SelectorBorder,
    SelectorTriangle,
    Histo,
    HistoBars,
    HistoNegative,
    HistoHighlight,
    Plot,
    PlotLines,
    PlotHighlight,
    Scrollbar,
    ScrollbarCursor,
    ScrollbarBorder,
    TableLines,
    Shelf,
    ShelfText,
    ShelfActive,
    ShelfActiveText,
    Scaler,
}

impl ColorRole {
    /// Number of color roles.
    pub const COUNT: usize = 46;

    /// All roles in table order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Text,
        Self::Panel,
        Self::Header,
        Self::Border,
        Self::Button,
        Self::ButtonBorder,
        Self::ButtonHover,
        Self::ButtonToggle,
        Self::ButtonHoverFont,
        Self::Check,
        Self::CheckBackground,
        Self::CheckActive,
        Self::Option,
        Self::OptionBackground,
        Self::OptionActive,
        Self::Slider,
        Self::SliderBar,
        Self::SliderBorder,
        Self::SliderCursor,
        Self::Progress,
        Self::ProgressCursor,
        Self::Input,
        Self::InputCursor,
        Self::InputBorder,
        Self::Spinner,
        Self::SpinnerBorder,
        Self::SpinnerTriangle,
        Self::Selector,
        Self::SelectorBorder,
        Self::SelectorTriangle,
        Self::Histo,
        Self::HistoBars,
        Self::HistoNegative,
        Self::HistoHighlight,
        Self::Plot,
        Self::PlotLines,
        Self::PlotHighlight,
        Self::Scrollbar,
        Self::ScrollbarCursor,
        Self::ScrollbarBorder,
        Self::TableLines,
        Self::Shelf,
        Self::ShelfText,
        Self::ShelfActive,
        Self::ShelfActiveText,
        Self::Scaler,
    ];

    /// Compiled-in default color.
    #[must_use]
    pub const fn default_color(self) -> Color {
        match self {
            Self::Text | Self::ButtonHoverFont | Self::ShelfActiveText => {
                Color::rgb(200, 200, 200)
            }
            Self::Panel => Color::rgb(45, 45, 45),
            Self::Header => Color::rgb(76, 88, 68),
            Self::Border
            | Self::ButtonBorder
            | Self::SliderBorder
            | Self::InputBorder
            | Self::SpinnerBorder
            | Self::SelectorBorder
            | Self::ScrollbarBorder
            | Self::TableLines
            | Self::HistoBars
            | Self::PlotLines
            | Self::Scaler => Color::rgb(100, 100, 100),
            Self::Button
            | Self::Check
            | Self::Option
            | Self::Slider
            | Self::Progress
            | Self::Input
            | Self::Spinner
            | Self::Selector
            | Self::Histo
            | Self::Plot
            | Self::Scrollbar
            | Self::Shelf => Color::rgb(50, 50, 50),
            Self::ButtonHover | Self::ButtonToggle => Color::rgb(35, 35, 35),
            Self::CheckBackground
            | Self::OptionBackground
            | Self::SliderBar
            | Self::ProgressCursor => Color::rgb(100, 100, 100),
            Self::CheckActive
            | Self::OptionActive
            | Self::SliderCursor
            | Self::InputCursor
            | Self::ScrollbarCursor
            | Self::ShelfActive => Color::rgb(45, 45, 45),
            Self::SpinnerTriangle | Self::SelectorTriangle | Self::ShelfText => {
                Color::rgb(175, 175, 175)
            }
            Self::HistoNegative => Color::rgb(255, 255, 255),
            Self::HistoHighlight | Self::PlotHighlight => Color::rgb(255, 0, 0),
        }
    }
}

impl TryFrom<u32> for ColorRole {
    type Error = ConfigError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(ConfigError::UnknownColor(value))
    }
}

/// Theme document.
///
/// ```toml
/// [colors]
/// panel = [30, 30, 30, 255]
///
/// [properties]
/// item_spacing = [8.0, 4.0]
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Theme {
    colors: BTreeMap<ColorRole, [u8; 4]>,
    properties: BTreeMap<Property, [f32; 2]>,
}

/// Font, spacing and colors shared by every widget of a frame.
#[derive(Debug, Clone)]
pub struct Config {
    /// Font used for all text.
    pub font: Font,
    properties: [Vec2; Property::COUNT],
    colors: [Color; ColorRole::COUNT],
    property_stack: Vec<(Property, Vec2)>,
    color_stack: Vec<(ColorRole, Color)>,
}

impl Config {
    /// Creates a config with the compiled-in defaults.
    #[must_use]
    pub fn new(font: Font) -> Self {
        let mut config = Self {
            font,
            properties: [Vec2::ZERO; Property::COUNT],
            colors: [Color::TRANSPARENT; ColorRole::COUNT],
            property_stack: Vec::with_capacity(MAX_STACK_DEPTH),
            color_stack: Vec::with_capacity(MAX_STACK_DEPTH),
        };
        config.reset_properties();
        config.reset_colors();
        config
    }

    /// Returns a spacing property.
    #[inline]
    #[must_use]
    pub fn property(&self, kind: Property) -> Vec2 {
        self.properties[kind as usize]
    }

    /// Returns a color.
    #[inline]
    #[must_use]
    pub fn color(&self, role: ColorRole) -> Color {
        self.colors[role as usize]
    }

    /// Overrides a property until the matching [`pop_property`](Self::pop_property).
    ///
    /// Ignored once [`MAX_STACK_DEPTH`] overrides are pending.
    pub fn push_property(&mut self, kind: Property, x: f32, y: f32) {
        if self.property_stack.len() >= MAX_STACK_DEPTH {
            tracing::warn!(?kind, "property stack full, override ignored");
            return;
        }
        self.property_stack.push((kind, self.property(kind)));
        self.properties[kind as usize] = Vec2::new(x, y);
    }

    /// Overrides a color until the matching [`pop_color`](Self::pop_color).
    ///
    /// Ignored once [`MAX_STACK_DEPTH`] overrides are pending.
    pub fn push_color(&mut self, role: ColorRole, r: u8, g: u8, b: u8, a: u8) {
        if self.color_stack.len() >= MAX_STACK_DEPTH {
            tracing::warn!(?role, "color stack full, override ignored");
            return;
        }
        self.color_stack.push((role, self.color(role)));
        self.colors[role as usize] = Color::rgba(r, g, b, a);
    }

    /// Restores the most recently overridden property.
    ///
    /// Returns false if there was nothing to restore.
    pub fn pop_property(&mut self) -> bool {
        match self.property_stack.pop() {
            Some((kind, value)) => {
                self.properties[kind as usize] = value;
                true
            }
            None => {
                tracing::warn!("pop_property on empty stack");
                false
            }
        }
    }

    /// Restores the most recently overridden color.
    ///
    /// Returns false if there was nothing to restore.
    pub fn pop_color(&mut self) -> bool {
        match self.color_stack.pop() {
            Some((role, value)) => {
                self.colors[role as usize] = value;
                true
            }
            None => {
                tracing::warn!("pop_color on empty stack");
                false
            }
        }
    }

    /// Number of pending property overrides.
    #[must_use]
    pub fn property_depth(&self) -> usize {
        self.property_stack.len()
    }

    /// Number of pending color overrides.
    #[must_use]
    pub fn color_depth(&self) -> usize {
        self.color_stack.len()
    }

    /// Restores the default colors and drops pending color overrides.
    pub fn reset_colors(&mut self) {
        for role in ColorRole::ALL {
            self.colors[role as usize] = role.default_color();
        }
        self.color_stack.clear();
    }

    /// Restores the default properties and drops pending property overrides.
    pub fn reset_properties(&mut self) {
        for kind in Property::ALL {
            self.properties[kind as usize] = kind.default_value();
        }
        self.property_stack.clear();
    }

    /// Restores all defaults.
    pub fn reset(&mut self) {
        self.reset_colors();
        self.reset_properties();
    }

    /// Applies a TOML theme on top of the current values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed documents or unknown keys;
    /// nothing is applied in that case.
    pub fn apply_theme_toml(&mut self, source: &str) -> ConfigResult<()> {
        let theme: Theme = toml::from_str(source)?;
        for (role, rgba) in &theme.colors {
            self.colors[*role as usize] = Color::from(*rgba);
        }
        for (kind, [x, y]) in &theme.properties {
            self.properties[*kind as usize] = Vec2::new(*x, *y);
        }
        tracing::debug!(
            colors = theme.colors.len(),
            properties = theme.properties.len(),
            "theme applied"
        );
        Ok(())
    }

    /// Reads and applies a TOML theme file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise see
    /// [`apply_theme_toml`](Self::apply_theme_toml).
    pub fn load_theme(&mut self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let source = std::fs::read_to_string(path)?;
        self.apply_theme_toml(&source)
    }
}
