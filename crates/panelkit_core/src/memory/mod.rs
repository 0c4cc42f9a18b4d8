//! # Memory Management
//!
//! Byte arena backing the command buffer.
//!
//! ## Design Philosophy
//!
//! The arena is either:
//! - **Fixed**: a block handed over by the caller. Never grows. Allocation
//!   past capacity fails and nothing is written.
//! - **Dynamic**: owned through an [`Allocator`] and grown by a
//!   multiplicative factor when full.
//!
//! Callers hold byte offsets, never addresses, so growth is invisible to them.

mod allocator;
mod buffer;

pub use allocator::{Allocator, HeapAllocator};
pub use buffer::{align_up, BufferKind, MemoryBuffer, MemoryStatus};
