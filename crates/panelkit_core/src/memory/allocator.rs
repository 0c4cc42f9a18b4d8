//! Pluggable allocation interface for dynamic buffers.

/// Provides and releases the backing blocks of a dynamic [`MemoryBuffer`].
///
/// Supplied once when the buffer is constructed.
///
/// [`MemoryBuffer`]: super::MemoryBuffer
pub trait Allocator {
    /// Allocates a zeroed block of `size` bytes, or `None` when exhausted.
    fn alloc(&mut self, size: usize) -> Option<Box<[u8]>>;

    /// Resizes `memory` to `size` bytes, preserving the common prefix.
    ///
    /// On failure the untouched block is handed back in `Err`. The default
    /// implementation allocates a new block, copies and frees the old one.
    fn realloc(&mut self, memory: Box<[u8]>, size: usize) -> Result<Box<[u8]>, Box<[u8]>> {
        let Some(mut block) = self.alloc(size) else {
            return Err(memory);
        };
        let keep = memory.len().min(size);
        block[..keep].copy_from_slice(&memory[..keep]);
        self.free(memory);
        Ok(block)
    }

    /// Releases a block previously returned by this allocator.
    fn free(&mut self, memory: Box<[u8]>) {
        drop(memory);
    }
}

/// Allocator backed by the global heap.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapAllocator;

impl Allocator for HeapAllocator {
    fn alloc(&mut self, size: usize) -> Option<Box<[u8]>> {
        Some(vec![0u8; size].into_boxed_slice())
    }

    fn realloc(&mut self, memory: Box<[u8]>, size: usize) -> Result<Box<[u8]>, Box<[u8]>> {
        let mut block = memory.into_vec();
        block.resize(size, 0);
        Ok(block.into_boxed_slice())
    }
}
