//! Font contract.
//!
//! Glyphs are never rasterized here: a font is an opaque handle for the
//! renderer plus a width callback for layout.

use std::fmt;
use std::sync::Arc;

use panelkit_core::FontHandle;

/// Width measurement callback.
pub type MeasureFn = dyn Fn(&str) -> f32 + Send + Sync;

/// A font as seen by layout code.
#[derive(Clone)]
pub struct Font {
    /// Handle written into text commands.
    pub handle: FontHandle,
    /// Line height in pixels.
    pub height: f32,
    measure: Arc<MeasureFn>,
}

impl Font {
    /// Creates a font from a handle, a line height and a measurement callback.
    pub fn new<F>(handle: FontHandle, height: f32, measure: F) -> Self
    where
        F: Fn(&str) -> f32 + Send + Sync + 'static,
    {
        Self { handle, height, measure: Arc::new(measure) }
    }

    /// Creates a fixed-advance font, `advance` pixels per code point.
    #[must_use]
    pub fn monospace(handle: FontHandle, height: f32, advance: f32) -> Self {
        Self::new(handle, height, move |text| text.chars().count() as f32 * advance)
    }

    /// Measures the rendered width of `text`.
    #[inline]
    #[must_use]
    pub fn width(&self, text: &str) -> f32 {
        (self.measure)(text)
    }

    /// Returns the longest prefix of `text` that fits in `space` pixels,
    /// cut on a character boundary.
    #[must_use]
    pub fn fit<'a>(&self, text: &'a str, space: f32) -> &'a str {
        if self.width(text) <= space {
            return text;
        }
        let mut end = 0;
        for (at, ch) in text.char_indices() {
            let next = at + ch.len_utf8();
            if self.width(&text[..next]) > space {
                break;
            }
            end = next;
        }
        &text[..end]
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("handle", &self.handle)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
