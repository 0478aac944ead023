//! # Memory Management
//!
//! A fixed-size heap with sector bookkeeping, acquired once at startup.
//!
//! ## Design Philosophy
//!
//! All memory is allocated once when the heap is created. Afterwards:
//! - No system calls, ever
//! - Allocation is a bounded next-fit walk over the sector list
//! - Release coalesces neighbours so fragmentation cannot accumulate
//! - Every sector carries an integrity tag so trampled bookkeeping is
//!   detected rather than trusted

mod error;
mod heap;

pub use error::{HeapError, HeapResult};
pub use heap::{Block, Heap, SectorInfo, SharedHeap, SECTOR_OVERHEAD};
