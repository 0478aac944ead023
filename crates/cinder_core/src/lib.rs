//! # Cinder Core Kernel
//!
//! One contiguous heap, acquired from the operating environment exactly once
//! at startup, services every dynamic allocation the engine makes:
//! - No system allocation calls after initialization
//! - Byte-exact accounting of every sector, free or used
//! - Corruption detection on the heap's own bookkeeping
//!
//! ## Architecture Rules
//!
//! 1. **One block, acquired once** - the heap never grows and never asks the
//!    environment for more
//! 2. **Everything on the ledger** - header overhead and payload bytes always
//!    sum to the configured capacity
//! 3. **Fail safe, not loud** - a corrupted or stale handle is refused and
//!    logged; it never takes the sector list down with it
//!
//! ## Example
//!
//! ```rust,ignore
//! use cinder_core::Heap;
//!
//! let mut heap = Heap::new(1024 * 1024);
//! let block = heap.allocate(256)?;
//! heap.bytes_mut(block).fill(0xAB);
//! heap.release(block);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod memory;

pub use config::{ConfigError, CoreConfig, GIGABYTE, KILOBYTE, MEGABYTE};
pub use memory::{Block, Heap, HeapError, HeapResult, SectorInfo, SharedHeap, SECTOR_OVERHEAD};
