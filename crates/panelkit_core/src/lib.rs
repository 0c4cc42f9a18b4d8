//! # PANELKIT Core
//!
//! Memory and draw-command primitives for an immediate-mode UI:
//! - A byte arena that is either fixed (caller block) or growable
//! - An append-only command log linked by byte offsets
//! - Geometry, color and UTF-8 helpers shared by the UI crate
//!
//! ## Architecture Rules
//!
//! 1. **Offsets, not pointers** - records reference each other by byte offset,
//!    so a growing buffer may relocate without invalidating anything
//! 2. **No partial writes** - a record either fits completely or is not written
//! 3. **Plain-old-data records** - every record is `bytemuck::Pod`
//!
//! ## Example
//!
//! ```rust
//! use panelkit_core::{Color, CommandBuffer, Rect};
//!
//! let mut buffer = CommandBuffer::fixed(1024);
//! buffer.push_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::rgb(255, 0, 0));
//! assert_eq!(buffer.iter().count(), 1);
//! ```

#![warn(missing_docs)]

pub mod command;
pub mod error;
pub mod math;
pub mod memory;
pub mod utf8;

pub use command::{
    Command, CommandBuffer, CommandHeader, CommandKind, Commands, FontHandle, ImageHandle,
};
pub use error::{BufferError, BufferResult};
pub use math::{Color, Heading, Rect, Vec2};
pub use memory::{Allocator, BufferKind, HeapAllocator, MemoryBuffer, MemoryStatus};
