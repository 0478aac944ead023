//! Fixed-capacity color tables stored in the engine heap.
//!
//! Palettes index the distinct colors of an image so textures can refer to
//! pixels by small indices and have their colors swapped wholesale.

use bytemuck::bytes_of;
use cinder_core::Heap;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::{GraphicsError, GraphicsResult};

/// Bytes per stored palette entry.
const ENTRY_SIZE: usize = std::mem::size_of::<Color>();

/// A fixed-capacity table of colors in the engine heap.
#[derive(Debug)]
pub struct Palette {
    block: cinder_core::Block,
    capacity: usize,
    assigned: usize,
}

impl Palette {
    /// Creates an empty palette able to hold `capacity` colors.
    ///
    /// # Errors
    ///
    /// Propagates heap exhaustion.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(heap: &mut Heap, capacity: usize) -> GraphicsResult<Self> {
        assert!(capacity > 0, "palette capacity must be positive");

        let block = heap.allocate(capacity * ENTRY_SIZE)?;
        Ok(Self {
            block,
            capacity,
            assigned: 0,
        })
    }

    /// Builds a palette of the canvas's distinct colors, in the order they
    /// first appear scanning left to right, row by row.
    ///
    /// A scratch buffer large enough for the worst case (every pixel
    /// unique) is borrowed from the heap for the scan and released before
    /// returning.
    ///
    /// # Errors
    ///
    /// Propagates heap exhaustion from the scratch or palette allocation.
    pub fn from_canvas(heap: &mut Heap, canvas: Canvas) -> GraphicsResult<Self> {
        let pixel_count = (canvas.width() as usize) * (canvas.height() as usize);
        let scratch = heap.allocate(pixel_count * ENTRY_SIZE)?;

        let mut unique = 0usize;
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                let color = canvas.pixel_at(heap, x, y);

                let mut seen = false;
                for index in 0..unique {
                    if read_entry(heap.bytes(scratch), index).approx_eq(color) {
                        seen = true;
                        break;
                    }
                }

                if !seen {
                    write_entry(heap.bytes_mut(scratch), unique, color);
                    unique += 1;
                }
            }
        }

        let mut palette = match Self::new(heap, unique) {
            Ok(palette) => palette,
            Err(error) => {
                heap.release(scratch);
                return Err(error);
            }
        };
        for index in 0..unique {
            let color = read_entry(heap.bytes(scratch), index);
            palette.push(heap, color)?;
        }

        heap.release(scratch);
        Ok(palette)
    }

    /// Number of colors assigned so far.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.assigned
    }

    /// Returns true if no colors have been assigned.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.assigned == 0
    }

    /// Maximum number of colors the palette can hold.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Finds the index of a color, if the palette contains it.
    #[must_use]
    pub fn index_of(&self, heap: &Heap, color: Color) -> Option<usize> {
        (0..self.assigned).find(|&index| read_entry(heap.bytes(self.block), index).approx_eq(color))
    }

    /// Returns the color at `index`, or black for an index outside the
    /// assigned range.
    #[must_use]
    pub fn color_at(&self, heap: &Heap, index: usize) -> Color {
        if index >= self.assigned {
            return Color::BLACK;
        }

        read_entry(heap.bytes(self.block), index)
    }

    /// Appends a color and returns its index.
    ///
    /// # Errors
    ///
    /// [`GraphicsError::PaletteFull`] when every slot is assigned.
    pub fn push(&mut self, heap: &mut Heap, color: Color) -> GraphicsResult<usize> {
        if self.assigned >= self.capacity {
            return Err(GraphicsError::PaletteFull {
                capacity: self.capacity,
            });
        }

        write_entry(heap.bytes_mut(self.block), self.assigned, color);
        let index = self.assigned;
        self.assigned += 1;
        Ok(index)
    }

    /// Replaces the first occurrence of `old` with `new`. Returns false if
    /// `old` is not in the palette.
    pub fn replace(&self, heap: &mut Heap, old: Color, new: Color) -> bool {
        match self.index_of(heap, old) {
            Some(index) => {
                write_entry(heap.bytes_mut(self.block), index, new);
                true
            }
            None => false,
        }
    }

    /// Replaces the color at `index` regardless of its value. Returns false
    /// for an index outside the assigned range.
    pub fn replace_at(&self, heap: &mut Heap, index: usize, color: Color) -> bool {
        if index >= self.assigned {
            return false;
        }

        write_entry(heap.bytes_mut(self.block), index, color);
        true
    }

    /// Returns the palette's storage to the heap.
    pub fn release(self, heap: &mut Heap) {
        heap.release(self.block);
    }
}

/// Reads the color at `index` from a palette or scratch buffer.
fn read_entry(bytes: &[u8], index: usize) -> Color {
    let start = index * ENTRY_SIZE;
    bytemuck::pod_read_unaligned(&bytes[start..start + ENTRY_SIZE])
}

/// Writes the color at `index` into a palette or scratch buffer.
fn write_entry(bytes: &mut [u8], index: usize, color: Color) {
    let start = index * ENTRY_SIZE;
    bytes[start..start + ENTRY_SIZE].copy_from_slice(bytes_of(&color));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_palette_is_empty() {
        let mut heap = Heap::new(64 * cinder_core::KILOBYTE);
        let palette = Palette::new(&mut heap, 5).unwrap();

        assert_eq!(palette.capacity(), 5);
        assert_eq!(palette.len(), 0);
        assert!(palette.is_empty());
    }

    #[test]
    fn test_push_until_full() {
        let mut heap = Heap::new(64 * cinder_core::KILOBYTE);
        let mut palette = Palette::new(&mut heap, 2).unwrap();

        let first = Color::rgb(0.5, 0.25, 0.0);
        assert_eq!(palette.push(&mut heap, first).unwrap(), 0);
        assert!(palette.color_at(&heap, 0).approx_eq(first));
        assert_eq!(palette.len(), 1);

        assert_eq!(palette.push(&mut heap, Color::WHITE).unwrap(), 1);
        assert_eq!(palette.len(), 2);

        assert_eq!(
            palette.push(&mut heap, Color::RED),
            Err(GraphicsError::PaletteFull { capacity: 2 })
        );
    }

    #[test]
    fn test_color_lookup() {
        let mut heap = Heap::new(64 * cinder_core::KILOBYTE);
        let mut palette = Palette::new(&mut heap, 5).unwrap();

        let red = Color::rgb(1.0, 0.0, 0.0);
        let green = Color::rgb(0.0, 1.0, 0.0);
        let blue = Color::rgb(0.0, 0.0, 1.0);
        palette.push(&mut heap, red).unwrap();
        palette.push(&mut heap, green).unwrap();
        palette.push(&mut heap, blue).unwrap();

        assert!(palette.color_at(&heap, 0).approx_eq(red));
        assert!(palette.color_at(&heap, 1).approx_eq(green));
        assert!(palette.color_at(&heap, 2).approx_eq(blue));

        // out of range index reads as black
        assert!(palette.color_at(&heap, 62).approx_eq(Color::BLACK));

        assert_eq!(palette.index_of(&heap, green), Some(1));
        assert_eq!(palette.index_of(&heap, Color::rgb(0.3, 0.3, 0.3)), None);
    }

    #[test]
    fn test_replace_colors() {
        let mut heap = Heap::new(64 * cinder_core::KILOBYTE);
        let mut palette = Palette::new(&mut heap, 3).unwrap();
        palette.push(&mut heap, Color::RED).unwrap();
        palette.push(&mut heap, Color::WHITE).unwrap();

        let teal = Color::rgb(0.0, 0.8, 0.8);
        assert!(palette.replace(&mut heap, Color::RED, teal));
        assert!(palette.color_at(&heap, 0).approx_eq(teal));
        assert!(!palette.replace(&mut heap, Color::RED, teal));

        assert!(palette.replace_at(&mut heap, 1, Color::BLACK));
        assert!(palette.color_at(&heap, 1).approx_eq(Color::BLACK));
        assert!(!palette.replace_at(&mut heap, 2, Color::BLACK));
    }

    #[test]
    fn test_from_canvas_collects_unique_colors_in_scan_order() {
        let mut heap = Heap::new(128 * cinder_core::KILOBYTE);
        let canvas = Canvas::new(&mut heap, 4, 4).unwrap();
        canvas.checker_pattern(&mut heap, Color::RED, Color::WHITE, 2);

        let before = heap.used();
        let palette = Palette::from_canvas(&mut heap, canvas).unwrap();

        assert_eq!(palette.len(), 2);
        assert_eq!(palette.index_of(&heap, Color::RED), Some(0));
        assert_eq!(palette.index_of(&heap, Color::WHITE), Some(1));

        // the scratch buffer went back to the heap; only the palette remains
        assert_eq!(heap.used(), before + palette.capacity() * ENTRY_SIZE + 32);

        palette.release(&mut heap);
        canvas.release(&mut heap);
    }

    #[test]
    fn test_release_returns_storage() {
        let mut heap = Heap::new(64 * cinder_core::KILOBYTE);
        let baseline = heap.used();

        let palette = Palette::new(&mut heap, 8).unwrap();
        assert!(heap.used() > baseline);

        palette.release(&mut heap);
        assert_eq!(heap.used(), baseline);
    }
}
