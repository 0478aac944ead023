//! Palette-indexed textures with transparency masks.
//!
//! A texture pairs a canvas with the palette of its distinct colors and a
//! per-pixel mask of palette indices, where `-1` marks a transparent texel.
//! The mask lives in the engine heap like every other buffer.

use bytemuck::bytes_of;
use cinder_core::Heap;

use crate::canvas::{BlitMode, Canvas};
use crate::color::Color;
use crate::error::GraphicsResult;
use crate::palette::Palette;

/// Bytes per mask entry.
const MASK_ENTRY_SIZE: usize = std::mem::size_of::<i32>();

/// Mask value marking a transparent texel.
const TRANSPARENT: i32 = -1;

/// A canvas with a palette and a transparency mask.
#[derive(Debug)]
pub struct Texture {
    canvas: Canvas,
    palette: Palette,
    mask: cinder_core::Block,
    width: i32,
    height: i32,
}

impl Texture {
    /// Builds a texture over the given canvas.
    ///
    /// The palette is taken from the canvas's distinct colors. Pixels equal
    /// to `transparent` (when given) are masked out; so is any color that
    /// somehow misses the palette.
    ///
    /// The canvas stays owned by the caller - releasing the texture does
    /// not release it.
    ///
    /// # Errors
    ///
    /// Propagates heap exhaustion from the palette or mask allocation.
    pub fn from_canvas(
        heap: &mut Heap,
        canvas: Canvas,
        transparent: Option<Color>,
    ) -> GraphicsResult<Self> {
        let width = canvas.width();
        let height = canvas.height();
        let palette = Palette::from_canvas(heap, canvas)?;

        let mask = match heap.allocate((width as usize) * (height as usize) * MASK_ENTRY_SIZE) {
            Ok(mask) => mask,
            Err(error) => {
                palette.release(heap);
                return Err(error.into());
            }
        };

        let texture = Self {
            canvas,
            palette,
            mask,
            width,
            height,
        };

        for y in 0..height {
            for x in 0..width {
                let color = canvas.pixel_at(heap, x, y);
                let entry = if transparent.is_some_and(|skip| skip.approx_eq(color)) {
                    TRANSPARENT
                } else {
                    // colors missing from the palette become transparent too
                    texture
                        .palette
                        .index_of(heap, color)
                        .map_or(TRANSPARENT, |index| index as i32)
                };
                texture.write_mask(heap, x, y, entry);
            }
        }

        Ok(texture)
    }

    /// Texture width in pixels.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Texture height in pixels.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// The canvas this texture was built over.
    #[inline]
    #[must_use]
    pub const fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// The texture's palette.
    #[inline]
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Returns the mask entry (palette index) at `(x, y)`. Negative values,
    /// including everything outside the texture, are transparent.
    #[must_use]
    pub fn mask_at(&self, heap: &Heap, x: i32, y: i32) -> i32 {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return TRANSPARENT;
        }

        let start = self.mask_index(x, y) * MASK_ENTRY_SIZE;
        bytemuck::pod_read_unaligned(&heap.bytes(self.mask)[start..start + MASK_ENTRY_SIZE])
    }

    /// Reads the pixel at `(x, y)` through the palette. Transparent texels
    /// read as the palette's first entry; blitting skips them anyway.
    #[must_use]
    pub fn pixel_at(&self, heap: &Heap, x: i32, y: i32) -> Color {
        let index = self.mask_at(heap, x, y);
        if index < 0 {
            return self.palette.color_at(heap, 0);
        }

        self.palette.color_at(heap, index as usize)
    }

    /// Blits an area of the texture onto a canvas, skipping transparent
    /// texels. Coordinates work exactly like [`Canvas::blit`].
    #[allow(clippy::too_many_arguments)]
    pub fn blit_to_canvas(
        &self,
        heap: &mut Heap,
        src_x1: i32,
        src_y1: i32,
        src_x2: i32,
        src_y2: i32,
        dst: Canvas,
        dst_x: i32,
        dst_y: i32,
        mode: BlitMode,
    ) {
        // clamp the span to the texture; the mask and the destination's own
        // bounds check absorb the rest of the clipping
        let span_x = src_x2.min(self.width - 1) - src_x1;
        let span_y = src_y2.min(self.height - 1) - src_y1;

        for x in 0..=span_x {
            for y in 0..=span_y {
                if self.mask_at(heap, src_x1 + x, src_y1 + y) < 0 {
                    continue;
                }

                let color = self.pixel_at(heap, src_x1 + x, src_y1 + y);
                dst.write_pixel(heap, dst_x + x, dst_y + y, color, mode);
            }
        }
    }

    /// Returns the mask and palette storage to the heap. The canvas is the
    /// caller's and stays alive.
    pub fn release(self, heap: &mut Heap) {
        heap.release(self.mask);
        self.palette.release(heap);
    }

    fn mask_index(&self, x: i32, y: i32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    fn write_mask(&self, heap: &mut Heap, x: i32, y: i32, entry: i32) {
        let start = self.mask_index(x, y) * MASK_ENTRY_SIZE;
        heap.bytes_mut(self.mask)[start..start + MASK_ENTRY_SIZE]
            .copy_from_slice(bytes_of(&entry));
    }
}
