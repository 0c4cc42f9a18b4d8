//! # Buffer Error Types
//!
//! All errors that can occur while reserving memory for draw commands.

use thiserror::Error;

/// Errors that can occur in the memory buffer.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum BufferError {
    /// A fixed buffer cannot hold the requested allocation.
    #[error("buffer overflow: need {requested} bytes, capacity {capacity}")]
    Overflow {
        /// Total bytes the allocation would have required.
        requested: usize,
        /// Capacity of the fixed block.
        capacity: usize,
    },

    /// The allocator refused to provide memory while growing.
    #[error("allocator failed to provide {size} bytes")]
    AllocationFailed {
        /// The size that was requested from the allocator.
        size: usize,
    },

    /// Growth factors below 1.0 would shrink the buffer.
    #[error("invalid grow factor: {0} (must be finite and >= 1.0)")]
    InvalidGrowFactor(f32),

    /// Alignment must be a non-zero power of two.
    #[error("invalid alignment: {0}")]
    InvalidAlignment(usize),
}

/// Result type for buffer operations.
pub type BufferResult<T> = Result<T, BufferError>;
