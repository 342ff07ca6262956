use log::debug;
use rasterfont_shared::types::Size;
use std::fmt::{Display, Formatter};

use crate::errors::FontResult;
use crate::font::{Orientation, Raster};

pub const LOG_TARGET: &str = "rasterfont::bitmap";

/// Rasterized text and the information needed to map it onto a display.
///
/// The data is a byte array of `bytes_per_row * bytes_per_column` bytes, laid out according to the
/// raster mode. In row-major mode every byte holds 8 horizontal pixels of one row, MSB first. In
/// column-major mode every byte holds 8 vertical pixels of one page column, LSB on top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    /// Rasterization
    pub raster: Raster,
    /// Text orientation
    pub orientation: Orientation,
    /// Width of the rasterized content in pixels, without offset
    pub width_pixels: u16,
    /// Height of the rasterized content in pixels, without offset
    pub height_pixels: u16,
    /// Bits the content is offset to the side (row-major)
    pub width_offset_bits: u8,
    /// Bits the content is offset from the top (column-major)
    pub height_offset_bits: u8,
    /// Bytes in a single row of data
    pub bytes_per_row: u16,
    /// Rows (row-major) or pages (column-major) of data
    pub bytes_per_column: u16,
    /// Position where the next glyph is placed. A bit position within the row for row-major
    /// bitmaps, a column for column-major bitmaps.
    pub cursor: u32,
    data: Vec<u8>,
}

impl Bitmap {
    /// Sizes a bitmap for `size` pixels shifted by `bit_offset % 8` and allocates zeroed storage.
    ///
    /// Only the sub-byte part of the offset is used, so callers can pass an absolute pixel position
    /// and address whole bytes themselves.
    pub fn allocate(raster: Raster, orientation: Orientation, size: Size<u16>, bit_offset: u16) -> FontResult<Self> {
        let offset = (bit_offset % 8) as u8;

        let mut bitmap = Bitmap {
            raster,
            orientation,
            width_pixels: size.width,
            height_pixels: size.height,
            width_offset_bits: 0,
            height_offset_bits: 0,
            bytes_per_row: 0,
            bytes_per_column: 0,
            cursor: 0,
            data: Vec::new(),
        };

        match raster {
            Raster::RowMajor => {
                let width = u32::from(size.width) + u32::from(offset);
                bitmap.width_offset_bits = offset;
                bitmap.bytes_per_row = width.div_ceil(8) as u16;
                bitmap.bytes_per_column = size.height;
                bitmap.cursor = u32::from(offset);
            }
            Raster::ColumnMajor => {
                let height = u32::from(size.height) + u32::from(offset);
                bitmap.height_offset_bits = offset;
                bitmap.bytes_per_row = size.width;
                bitmap.bytes_per_column = height.div_ceil(8) as u16;
            }
        }

        let len = usize::from(bitmap.bytes_per_row) * usize::from(bitmap.bytes_per_column);
        bitmap.data.try_reserve_exact(len)?;
        bitmap.data.resize(len, 0);

        debug!(
            target: LOG_TARGET,
            "allocated {raster} bitmap of {size} pixels, offset {offset}: {} x {} bytes",
            bitmap.bytes_per_row, bitmap.bytes_per_column
        );

        Ok(bitmap)
    }

    /// The rasterized bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the bitmap, handing over the rasterized bytes
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true when the content pixel at (x, y) is set. Coordinates are relative to the
    /// content, the bit offset is applied by the lookup.
    pub fn pixel(&self, x: u16, y: u16) -> bool {
        if x >= self.width_pixels || y >= self.height_pixels {
            return false;
        }

        let (index, mask) = match self.raster {
            Raster::RowMajor => {
                let bit = usize::from(x) + usize::from(self.width_offset_bits);
                (
                    usize::from(y) * usize::from(self.bytes_per_row) + bit / 8,
                    0x80u8 >> (bit % 8),
                )
            }
            Raster::ColumnMajor => {
                let bit = usize::from(y) + usize::from(self.height_offset_bits);
                (
                    (bit / 8) * usize::from(self.bytes_per_row) + usize::from(x),
                    1u8 << (bit % 8),
                )
            }
        };

        self.data.get(index).is_some_and(|byte| byte & mask != 0)
    }

    /// All set pixels, in row order
    pub fn lit_pixels(&self) -> Vec<(u16, u16)> {
        let mut pixels = Vec::new();
        for y in 0..self.height_pixels {
            for x in 0..self.width_pixels {
                if self.pixel(x, y) {
                    pixels.push((x, y));
                }
            }
        }
        pixels
    }
}

impl Display for Bitmap {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.height_pixels {
            for x in 0..self.width_pixels {
                write!(f, "{}", if self.pixel(x, y) { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_sizing() {
        let bm = Bitmap::allocate(Raster::RowMajor, Orientation::Top, Size::new(5, 7), 0).unwrap();
        assert_eq!((bm.bytes_per_row, bm.bytes_per_column), (1, 7));
        assert_eq!(bm.cursor, 0);
        assert_eq!(bm.len(), 7);
        assert!(bm.data().iter().all(|&b| b == 0));

        let bm = Bitmap::allocate(Raster::RowMajor, Orientation::Top, Size::new(5, 7), 4).unwrap();
        assert_eq!((bm.bytes_per_row, bm.bytes_per_column), (2, 7));
        assert_eq!(bm.width_offset_bits, 4);
        assert_eq!(bm.height_offset_bits, 0);
        assert_eq!(bm.cursor, 4);
        assert_eq!(bm.len(), 14);
    }

    #[test]
    fn column_major_sizing() {
        let bm = Bitmap::allocate(Raster::ColumnMajor, Orientation::Top, Size::new(5, 7), 1).unwrap();
        assert_eq!((bm.bytes_per_row, bm.bytes_per_column), (5, 1));
        assert_eq!(bm.height_offset_bits, 1);
        assert_eq!(bm.cursor, 0);

        let bm = Bitmap::allocate(Raster::ColumnMajor, Orientation::Top, Size::new(5, 7), 2).unwrap();
        assert_eq!((bm.bytes_per_row, bm.bytes_per_column), (5, 2));
        assert_eq!(bm.len(), 10);
    }

    #[test]
    fn only_sub_byte_offset_counts() {
        let a = Bitmap::allocate(Raster::RowMajor, Orientation::Top, Size::new(9, 3), 3).unwrap();
        let b = Bitmap::allocate(Raster::RowMajor, Orientation::Top, Size::new(9, 3), 19).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_bitmap() {
        for raster in [Raster::RowMajor, Raster::ColumnMajor] {
            let bm = Bitmap::allocate(raster, Orientation::Top, Size::default(), 5).unwrap();
            assert!(bm.is_empty());
            assert!(bm.lit_pixels().is_empty());
            assert_eq!(bm.to_string(), "");
        }
    }

    #[test]
    fn pixel_lookup() {
        let mut bm = Bitmap::allocate(Raster::RowMajor, Orientation::Top, Size::new(4, 2), 6).unwrap();
        // Pixel (2, 1) lives at bit 8 of the second row
        bm.data_mut()[3] = 0x80;
        assert!(bm.pixel(2, 1));
        assert_eq!(bm.lit_pixels(), vec![(2, 1)]);
        assert!(!bm.pixel(4, 1));

        let mut bm = Bitmap::allocate(Raster::ColumnMajor, Orientation::Top, Size::new(2, 4), 6).unwrap();
        // Pixel (1, 2) lives at bit 0 of the second page
        bm.data_mut()[3] = 0x01;
        assert!(bm.pixel(1, 2));
        assert_eq!(bm.to_string(), "..\n..\n.#\n..\n");
    }
}
