//! # Memory Buffer
//!
//! A bump allocator over a byte block that hands out offsets.
//!
//! ```text
//! ┌──────────┬───┬──────────────┬─────────────── free ──────────┐
//! │ record A │pad│   record B   │                               │
//! └──────────┴───┴──────────────┴───────────────────────────────┘
//! 0                             allocated                capacity
//! ```
//!
//! Offsets stay valid across growth because the dynamic variant copies the
//! whole written prefix into the new block.

use super::allocator::{Allocator, HeapAllocator};
use crate::error::{BufferError, BufferResult};

/// Rounds `offset` up to the next multiple of `align` (a power of two).
#[inline]
#[must_use]
pub const fn align_up(offset: usize, align: usize) -> usize {
    (offset + align - 1) & !(align - 1)
}

/// Kind of backing storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferKind {
    /// Caller-supplied block that never grows.
    Fixed,
    /// Allocator-owned block that grows on demand.
    Dynamic,
}

/// Diagnostic snapshot of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryStatus {
    /// Storage kind.
    pub kind: BufferKind,
    /// Total capacity in bytes.
    pub capacity: usize,
    /// Bytes written since the last reset.
    pub allocated: usize,
    /// High-water mark of bytes required, including failed requests.
    pub needed: usize,
    /// Number of allocation calls since the last clear.
    pub calls: usize,
}

/// Byte arena with fixed or geometrically growing storage.
///
/// # Thread Safety
///
/// Not thread-safe. One buffer is advanced per frame by one thread.
pub struct MemoryBuffer {
    kind: BufferKind,
    memory: Box<[u8]>,
    allocator: Option<Box<dyn Allocator>>,
    grow_factor: f32,
    allocated: usize,
    needed: usize,
    calls: usize,
}

impl MemoryBuffer {
    /// Creates a dynamic buffer owning `initial_size` bytes from `allocator`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidGrowFactor`] when `grow_factor` is not a
    /// finite value `>= 1.0`, and [`BufferError::AllocationFailed`] when the
    /// allocator cannot provide the initial block.
    pub fn new(
        allocator: impl Allocator + 'static,
        initial_size: usize,
        grow_factor: f32,
    ) -> BufferResult<Self> {
        if !grow_factor.is_finite() || grow_factor < 1.0 {
            return Err(BufferError::InvalidGrowFactor(grow_factor));
        }
        let mut allocator: Box<dyn Allocator> = Box::new(allocator);
        let memory = allocator
            .alloc(initial_size)
            .ok_or(BufferError::AllocationFailed { size: initial_size })?;
        Ok(Self {
            kind: BufferKind::Dynamic,
            memory,
            allocator: Some(allocator),
            grow_factor,
            allocated: 0,
            needed: 0,
            calls: 0,
        })
    }

    /// Creates a dynamic buffer on the global heap.
    ///
    /// # Errors
    ///
    /// See [`MemoryBuffer::new`].
    pub fn with_capacity(initial_size: usize, grow_factor: f32) -> BufferResult<Self> {
        Self::new(HeapAllocator, initial_size, grow_factor)
    }

    /// Wraps a caller-supplied block. The buffer never grows.
    #[must_use]
    pub fn fixed(memory: Box<[u8]>) -> Self {
        Self {
            kind: BufferKind::Fixed,
            memory,
            allocator: None,
            grow_factor: 1.0,
            allocated: 0,
            needed: 0,
            calls: 0,
        }
    }

    /// Returns the storage kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> BufferKind {
        self.kind
    }

    /// Returns the total capacity in bytes.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.memory.len()
    }

    /// Returns the number of bytes written since the last reset.
    #[inline]
    #[must_use]
    pub const fn allocated(&self) -> usize {
        self.allocated
    }

    /// Returns a diagnostic snapshot.
    #[must_use]
    pub fn status(&self) -> MemoryStatus {
        MemoryStatus {
            kind: self.kind,
            capacity: self.capacity(),
            allocated: self.allocated,
            needed: self.needed,
            calls: self.calls,
        }
    }

    /// Reserves `size` bytes aligned to `align` and returns their offset.
    ///
    /// The offset stays valid until the next [`reset`](Self::reset) or
    /// [`clear`](Self::clear), including across growth.
    ///
    /// # Errors
    ///
    /// - [`BufferError::InvalidAlignment`] if `align` is not a power of two
    /// - [`BufferError::Overflow`] if a fixed buffer is full (nothing is written)
    /// - [`BufferError::AllocationFailed`] if the allocator refuses to grow
    pub fn alloc(&mut self, size: usize, align: usize) -> BufferResult<usize> {
        if !align.is_power_of_two() {
            return Err(BufferError::InvalidAlignment(align));
        }
        self.calls += 1;

        let start = align_up(self.allocated, align);
        let end = start + size;
        self.needed = self.needed.max(end);

        if end > self.capacity() {
            self.grow(end)?;
        }
        self.allocated = end;
        Ok(start)
    }

    fn grow(&mut self, required: usize) -> BufferResult<()> {
        let capacity = self.capacity();
        let Some(allocator) = self.allocator.as_mut() else {
            tracing::debug!(required, capacity, "fixed buffer overflow");
            return Err(BufferError::Overflow { requested: required, capacity });
        };

        let scaled = (capacity as f64 * f64::from(self.grow_factor)) as usize;
        let new_capacity = required.max(scaled);
        let memory = std::mem::take(&mut self.memory);
        match allocator.realloc(memory, new_capacity) {
            Ok(memory) => {
                tracing::debug!(from = capacity, to = new_capacity, "buffer grown");
                self.memory = memory;
                Ok(())
            }
            Err(memory) => {
                tracing::warn!(size = new_capacity, "allocator refused to grow buffer");
                self.memory = memory;
                Err(BufferError::AllocationFailed { size: new_capacity })
            }
        }
    }

    /// Rewinds the write cursor. Capacity and statistics are kept.
    #[inline]
    pub fn reset(&mut self) {
        self.allocated = 0;
    }

    /// Rewinds the write cursor and zeroes the statistics.
    pub fn clear(&mut self) {
        self.allocated = 0;
        self.needed = 0;
        self.calls = 0;
    }

    /// Returns the written part of the buffer.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.memory[..self.allocated]
    }

    /// Returns a writable window into already allocated bytes.
    ///
    /// # Panics
    ///
    /// Panics if the window extends past the allocated region.
    #[inline]
    pub fn bytes_mut(&mut self, offset: usize, len: usize) -> &mut [u8] {
        assert!(offset + len <= self.allocated, "window outside allocated region");
        &mut self.memory[offset..offset + len]
    }

    /// Gives the backing block back to its owner.
    #[must_use]
    pub fn into_memory(mut self) -> Box<[u8]> {
        std::mem::take(&mut self.memory)
    }
}

impl Drop for MemoryBuffer {
    fn drop(&mut self) {
        if let Some(allocator) = self.allocator.as_mut() {
            allocator.free(std::mem::take(&mut self.memory));
        }
    }
}

impl std::fmt::Debug for MemoryBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryBuffer")
            .field("kind", &self.kind)
            .field("capacity", &self.capacity())
            .field("allocated", &self.allocated)
            .field("grow_factor", &self.grow_factor)
            .finish_non_exhaustive()
    }
}
