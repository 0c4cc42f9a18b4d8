//! # PANELKIT UI
//!
//! Immediate-mode panels and widgets recorded into a
//! [`CommandBuffer`](panelkit_core::CommandBuffer).
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        FRAME PIPELINE                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Input → Panel::begin → PanelLayout → widgets → Panel::end  │
//! │    ↓           ↓              ↓           ↓          ↓      │
//! │  edges    move/scale     row/column    commands   scrollbar │
//! │           header, clip   arithmetic                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing below the panel is retained: every widget re-derives its visual
//! state and result from the rectangle, the [`Input`] snapshot and the
//! [`Config`] each frame.
//!
//! ## Example
//!
//! ```rust
//! use panelkit_core::{CommandBuffer, FontHandle, Rect};
//! use panelkit_ui::{Config, Font, Input, Panel, PanelFlags};
//!
//! let config = Config::new(Font::monospace(FontHandle(0), 10.0, 6.0));
//! let mut buffer = CommandBuffer::fixed(16 * 1024);
//! let mut panel = Panel::new(Rect::new(10.0, 10.0, 200.0, 300.0), PanelFlags::BORDER);
//! let mut input = Input::new();
//!
//! input.begin();
//! input.end();
//!
//! let mut layout = panel.begin(&mut buffer, &config, "Demo", Some(&input));
//! layout.row(30.0, 2);
//! let clicked = layout.button_text("OK", panelkit_ui::ButtonBehavior::Default);
//! panel.end(layout);
//!
//! assert!(!clicked);
//! assert!(buffer.iter().count() > 0);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod font;
pub mod input;
pub mod panel;
pub mod stack;
pub mod style;
pub mod tiled;
pub mod widget;

pub use config::{ColorRole, Config, Property, MAX_STACK_DEPTH};
pub use error::{ConfigError, ConfigResult, LayoutError, LayoutResult};
pub use font::Font;
pub use input::{Input, Key, KeyState, INPUT_MAX};
pub use panel::{Graph, GraphKind, Panel, PanelFlags, PanelId, PanelLayout, TableLines};
pub use stack::{Stack, StackId};
pub use tiled::{LayoutConfig, LayoutFormat, LayoutState, SlotIndex, TiledLayout};
pub use widget::{ButtonBehavior, InputFilter, TextAlign, ToggleKind};
