//! # Graphics Error Types
//!
//! All errors that can occur in the graphics system.

use cinder_core::HeapError;
use thiserror::Error;

/// Errors that can occur in the graphics system.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphicsError {
    /// The heap could not service a buffer request.
    #[error(transparent)]
    Memory(#[from] HeapError),

    /// Attempted to add a color to a palette that is already full.
    #[error("palette full: capacity {capacity}")]
    PaletteFull {
        /// The palette's fixed capacity.
        capacity: usize,
    },
}

/// Result type for graphics operations.
pub type GraphicsResult<T> = Result<T, GraphicsError>;
