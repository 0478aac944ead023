//! # Heap Error Types
//!
//! All errors that can occur in the memory system.

use thiserror::Error;

/// Errors that can occur while allocating from the heap.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    /// No free sector large enough for the request exists; a full circular
    /// pass of the sector list found no fit.
    #[error("heap exhausted: requested {requested} bytes, {available} bytes available")]
    Exhausted {
        /// Number of bytes requested.
        requested: usize,
        /// Free bytes remaining across the whole heap.
        available: usize,
    },

    /// A zero-byte allocation was requested.
    #[error("zero-byte allocation request")]
    ZeroSizeRequest,
}

/// Result type for heap operations.
pub type HeapResult<T> = Result<T, HeapError>;
