//! Error types for theme loading and tiled layouts.

use thiserror::Error;

/// Theme and config errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Raw color index outside the role table.
    #[error("Unknown color role index {0}")]
    UnknownColor(u32),

    /// Raw property index outside the property table.
    #[error("Unknown property index {0}")]
    UnknownProperty(u32),

    /// Theme file could not be read.
    #[error("Failed to read theme file: {0}")]
    Io(#[from] std::io::Error),

    /// Theme document is not valid TOML or has unknown keys.
    #[error("Invalid theme: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tiled layout errors.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum LayoutError {
    /// A ratio is negative, above one, or not finite.
    #[error("Ratio {name} = {value} is outside [0, 1]")]
    InvalidRatio {
        /// Field name in the layout config.
        name: &'static str,
        /// Offending value.
        value: f32,
    },

    /// Ratios along one axis add up to more than the screen.
    #[error("{axis} ratios sum to {sum}, expected at most 1")]
    RatioOverflow {
        /// `"horizontal"` or `"vertical"`.
        axis: &'static str,
        /// Sum of the ratios on that axis.
        sum: f32,
    },
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for tiled layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
