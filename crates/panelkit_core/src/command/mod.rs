//! # Draw Commands
//!
//! Variable-length draw records appended to a [`MemoryBuffer`] and linked by
//! byte offsets:
//!
//! ```text
//!  header.offset ──────────┐ header.offset ─────────────────┐
//!  ▼                       ▼                                ▼
//! ┌────────┬──────────────┬────────┬──────────────────────┬────────
//! │ kind   │  scissor     │ kind   │  text + "label"      │ ...
//! │ offset │  x y w h     │ offset │  font x y w h len    │
//! └────────┴──────────────┴────────┴──────────────────────┴────────
//! ```
//!
//! A renderer walks [`CommandBuffer::iter`] and dispatches on [`Command`].
//!
//! [`MemoryBuffer`]: crate::memory::MemoryBuffer

mod buffer;
mod iter;
mod records;

pub use buffer::{CommandBuffer, FontHandle, ImageHandle, COMMAND_ALIGN};
pub use iter::{Command, Commands};
pub use records::{
    CircleCommand, CommandHeader, CommandKind, ImageCommand, LineCommand, RectCommand,
    ScissorCommand, TextCommand, TriangleCommand,
};
