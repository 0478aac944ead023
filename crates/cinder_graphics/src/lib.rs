//! # Cinder Graphics
//!
//! Software rendering primitives: colors, pixel canvases, palettes, and
//! masked textures.
//!
//! ## CRITICAL RULE
//!
//! Every buffer in this crate - pixels, palette entries, texture masks -
//! is allocated from the [`cinder_core`] heap and released back to it.
//! The system allocator is never consulted behind the heap's back.
//!
//! The types themselves are lightweight descriptors (a block handle plus
//! dimensions); the heap is passed into each operation that touches pixel
//! data.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canvas;
pub mod color;
pub mod error;
pub mod palette;
pub mod texture;

pub use canvas::{BlitMode, Canvas};
pub use color::Color;
pub use error::{GraphicsError, GraphicsResult};
pub use palette::Palette;
pub use texture::Texture;
