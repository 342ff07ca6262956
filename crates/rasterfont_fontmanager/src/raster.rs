//! Bit packing of glyphs into a bitmap.
//!
//! Font glyphs are stored as row-major scan lines with the most significant bit as the leftmost
//! pixel. Every writer copies a glyph into the destination by OR-ing bits onto the zeroed buffer,
//! so glyphs drawn earlier are never disturbed. The writer is picked once per rasterize call with
//! [`writer_for`]; the per-bit loops never look at the raster mode.
use log::trace;

use crate::bitmap::Bitmap;
use crate::font::{Font, GlyphDescriptor, Raster};

pub const LOG_TARGET: &str = "rasterfont::raster";

/// Copies a single glyph into a bitmap at the bitmap's cursor
pub trait GlyphWriter: Sync {
    /// Draws the glyph and advances the cursor by the glyph width plus the font spacing.
    ///
    /// The bitmap must already be large enough to hold the glyph at the current cursor.
    fn write_glyph(&self, font: &Font, glyph: &GlyphDescriptor, bitmap: &mut Bitmap);
}

/// Left->Right, Top->Bottom byte rows
pub struct RowMajorWriter;

/// Pages of 8 pixel high columns, Top->Bottom, Left->Right
pub struct ColumnMajorWriter;

static ROW_MAJOR: RowMajorWriter = RowMajorWriter;
static COLUMN_MAJOR: ColumnMajorWriter = ColumnMajorWriter;

/// Returns the glyph writer for the given raster mode
pub fn writer_for(raster: Raster) -> &'static dyn GlyphWriter {
    match raster {
        Raster::RowMajor => &ROW_MAJOR,
        Raster::ColumnMajor => &COLUMN_MAJOR,
    }
}

fn advance(font: &Font, glyph: &GlyphDescriptor, bitmap: &mut Bitmap) {
    bitmap.cursor += u32::from(glyph.width) + u32::from(font.c);
}

impl GlyphWriter for RowMajorWriter {
    fn write_glyph(&self, font: &Font, glyph: &GlyphDescriptor, bitmap: &mut Bitmap) {
        trace!(target: LOG_TARGET, "row-major glyph width {} at bit {}", glyph.width, bitmap.cursor);

        let row_bytes = glyph.row_bytes();
        let bytes_per_row = usize::from(bitmap.bytes_per_row);
        let first_byte = (bitmap.cursor / 8) as usize;
        let right_shift = bitmap.cursor % 8;

        if row_bytes > 0 && bytes_per_row > 0 {
            let source = font.glyph_rows(glyph).chunks_exact(row_bytes);
            let destination = bitmap.data_mut().chunks_exact_mut(bytes_per_row);

            for (src_row, dst_row) in source.zip(destination) {
                for (i, &byte) in src_row.iter().enumerate() {
                    let pos = first_byte + i;
                    // Font MSBs shifted towards the end of the destination byte
                    if let Some(dst) = dst_row.get_mut(pos) {
                        *dst |= byte >> right_shift;
                    }
                    // Font LSBs spill into the start of the next destination byte. Past the end of
                    // the row only padding bits remain.
                    if right_shift > 0 {
                        if let Some(dst) = dst_row.get_mut(pos + 1) {
                            *dst |= byte << (8 - right_shift);
                        }
                    }
                }
            }
        }

        advance(font, glyph, bitmap);
    }
}

impl GlyphWriter for ColumnMajorWriter {
    fn write_glyph(&self, font: &Font, glyph: &GlyphDescriptor, bitmap: &mut Bitmap) {
        trace!(target: LOG_TARGET, "column-major glyph width {} at column {}", glyph.width, bitmap.cursor);

        let row_bytes = glyph.row_bytes();
        let width = usize::from(glyph.width);
        let bytes_per_row = usize::from(bitmap.bytes_per_row);
        let height_offset = usize::from(bitmap.height_offset_bits);
        let column = bitmap.cursor as usize;

        if row_bytes > 0 {
            let data = bitmap.data_mut();

            for (row, src_row) in font.glyph_rows(glyph).chunks_exact(row_bytes).enumerate() {
                // Font rows are big-endian horizontally, pages are little-endian vertically
                let bit = 1u8 << ((row + height_offset) % 8);
                let page = (row + height_offset) / 8;
                let Some(page_data) = data.get_mut(page * bytes_per_row..(page + 1) * bytes_per_row) else {
                    break;
                };

                for (i, &byte) in src_row.iter().enumerate() {
                    if byte == 0 {
                        continue;
                    }
                    let columns = (width - i * 8).min(8);
                    for seg in 0..columns {
                        if byte & (0x80 >> seg) != 0 {
                            if let Some(dst) = page_data.get_mut(column + i * 8 + seg) {
                                *dst |= bit;
                            }
                        }
                    }
                }
            }
        }

        advance(font, glyph, bitmap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::Orientation;
    use crate::fonts::GLCD_5X7;
    use crate::geometry::resolve;
    use rasterfont_shared::types::Size;

    static EMPTY: Font = Font {
        name: "empty",
        height: 3,
        c: 2,
        char_start: b' ',
        char_end: b' ',
        descriptors: &[GlyphDescriptor::new(0, 0)],
        bitmap: &[],
    };

    /// Single glyph of 10 pixels wide, two rows: a full bar and two end dots
    static WIDE: Font = Font {
        name: "wide",
        height: 2,
        c: 1,
        char_start: b' ',
        char_end: b' ',
        descriptors: &[GlyphDescriptor::new(10, 0)],
        bitmap: &[0xff, 0xc0, 0x80, 0x40],
    };

    fn draw(raster: Raster, font: &Font, c: char, size: Size<u16>, offset: u16) -> Bitmap {
        let mut bitmap = Bitmap::allocate(raster, Orientation::Top, size, offset).unwrap();
        writer_for(raster).write_glyph(font, &resolve(font, c), &mut bitmap);
        bitmap
    }

    #[test]
    fn row_major_aligned() {
        let bm = draw(Raster::RowMajor, &GLCD_5X7, '|', Size::new(5, 7), 0);
        assert_eq!(bm.data(), &[0x20, 0x20, 0x20, 0x00, 0x20, 0x20, 0x20]);
        assert_eq!(bm.cursor, 6);
    }

    #[test]
    fn row_major_spans_bytes() {
        let bm = draw(Raster::RowMajor, &GLCD_5X7, '@', Size::new(5, 7), 4);
        assert_eq!(
            bm.data(),
            &[0x07, 0x00, 0x08, 0x80, 0x0a, 0x80, 0x0b, 0x80, 0x0b, 0x00, 0x08, 0x00, 0x07, 0x80]
        );
        assert_eq!(bm.cursor, 4 + 5 + 1);
    }

    #[test]
    fn row_major_wide_glyph() {
        let bm = draw(Raster::RowMajor, &WIDE, ' ', Size::new(10, 2), 3);
        assert_eq!(bm.data(), &[0x1f, 0xf8, 0x10, 0x08]);
    }

    #[test]
    fn column_major_pages() {
        let bm = draw(Raster::ColumnMajor, &GLCD_5X7, '|', Size::new(5, 7), 0);
        assert_eq!(bm.data(), &[0x00, 0x00, 0x77, 0x00, 0x00]);
        assert_eq!(bm.cursor, 6);

        let bm = draw(Raster::ColumnMajor, &GLCD_5X7, '|', Size::new(5, 7), 1);
        assert_eq!(bm.data(), &[0x00, 0x00, 0xee, 0x00, 0x00]);

        // Rows 4..7 land on the second page
        let bm = draw(Raster::ColumnMajor, &GLCD_5X7, '|', Size::new(5, 7), 4);
        assert_eq!(bm.data(), &[0x00, 0x00, 0x70, 0x00, 0x00, 0x00, 0x00, 0x07, 0x00, 0x00]);
    }

    #[test]
    fn column_major_glyph_columns() {
        let bm = draw(Raster::ColumnMajor, &GLCD_5X7, '@', Size::new(5, 7), 0);
        assert_eq!(bm.data(), &[0x3e, 0x41, 0x5d, 0x59, 0x4e]);

        let bm = draw(Raster::ColumnMajor, &WIDE, ' ', Size::new(10, 2), 0);
        assert_eq!(bm.data(), &[0x03, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x03]);
    }

    #[test]
    fn zero_width_glyph_only_advances() {
        for raster in [Raster::RowMajor, Raster::ColumnMajor] {
            let bm = draw(raster, &EMPTY, 'x', Size::new(4, 3), 0);
            assert!(bm.data().iter().all(|&b| b == 0));
            assert_eq!(bm.cursor, 2);
        }
    }

    #[test]
    fn or_composition_keeps_existing_bits() {
        let mut bm = Bitmap::allocate(Raster::RowMajor, Orientation::Top, Size::new(12, 7), 0).unwrap();
        bm.data_mut().fill(0x01);
        writer_for(Raster::RowMajor).write_glyph(&GLCD_5X7, &resolve(&GLCD_5X7, '|'), &mut bm);
        assert_eq!(&bm.data()[..4], &[0x21, 0x01, 0x21, 0x01]);
    }
}
