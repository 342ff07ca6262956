use rasterfont_fontmanager::geometry::resolve;
use rasterfont_fontmanager::{Bitmap, Font, FontManager, FontRegistry, Orientation, Raster};
use rasterfont_shared::types::Size;
use test_case::test_case;

fn manager(index: usize, raster: Raster) -> FontManager {
    FontManager::new(&FontRegistry::builtin(), index, raster, Orientation::Top).unwrap()
}

/// The pixels the font table declares for a character, in row order
fn expected_pixels(font: &Font, c: char) -> Vec<(u16, u16)> {
    let glyph = resolve(font, c);
    let rows = font.glyph_rows(&glyph);
    let row_bytes = glyph.row_bytes();

    let mut pixels = Vec::new();
    for y in 0..usize::from(font.height) {
        for x in 0..usize::from(glyph.width) {
            if rows[y * row_bytes + x / 8] & (0x80 >> (x % 8)) != 0 {
                pixels.push((x as u16, y as u16));
            }
        }
    }
    pixels
}

fn set_bits(bitmap: &Bitmap) -> u32 {
    bitmap.data().iter().map(|byte| byte.count_ones()).sum()
}

#[test_case(0, Raster::RowMajor, 0; "glcd 5x7 row-major")]
#[test_case(0, Raster::ColumnMajor, 3; "glcd 5x7 column-major")]
#[test_case(1, Raster::RowMajor, 5; "proportional row-major")]
#[test_case(1, Raster::ColumnMajor, 0; "proportional column-major")]
#[test_case(2, Raster::RowMajor, 7; "glcd 10x14 row-major")]
#[test_case(2, Raster::ColumnMajor, 6; "glcd 10x14 column-major")]
fn every_glyph_matches_its_mask(index: usize, raster: Raster, offset: u16) {
    let fm = manager(index, raster);
    let font = fm.font();

    for code in font.char_start..=font.char_end {
        let c = char::from(code);
        let bitmap = fm.rasterize_char(c, offset).unwrap();
        let expected = expected_pixels(font, c);

        assert_eq!(
            bitmap.len(),
            usize::from(bitmap.bytes_per_row) * usize::from(bitmap.bytes_per_column),
            "buffer size of {c:?}"
        );
        assert_eq!(bitmap.lit_pixels(), expected, "pixels of {c:?}");
        assert_eq!(set_bits(&bitmap), expected.len() as u32, "stray bits in {c:?}");
    }
}

#[test_case('\t')]
#[test_case('\u{7f}')]
#[test_case('é')]
#[test_case('\u{1f600}')]
fn out_of_range_renders_as_space(c: char) {
    for index in 0..3 {
        for raster in [Raster::RowMajor, Raster::ColumnMajor] {
            let fm = manager(index, raster);
            assert_eq!(fm.rasterize_char(c, 2).unwrap(), fm.rasterize_char(' ', 2).unwrap());
        }
    }
}

#[test_case(0)]
#[test_case(1)]
#[test_case(2)]
fn raster_modes_agree(index: usize) {
    let row_major = manager(index, Raster::RowMajor);
    let column_major = manager(index, Raster::ColumnMajor);

    for text in ["A", "@", "Hello, world!", "|~|"] {
        for offset in [0, 3, 7] {
            let a = row_major.rasterize(text, offset).unwrap();
            let b = column_major.rasterize(text, offset).unwrap();
            assert_eq!((a.width_pixels, a.height_pixels), (b.width_pixels, b.height_pixels));
            assert_eq!(a.lit_pixels(), b.lit_pixels(), "{text:?} at offset {offset}");
        }
    }
}

#[test]
fn measuring_is_idempotent() {
    for orientation in [Orientation::Top, Orientation::Right, Orientation::Bottom, Orientation::Left] {
        let fm = FontManager::new(&FontRegistry::builtin(), 1, Raster::RowMajor, orientation).unwrap();
        let first = fm.measure_string("The quick brown fox");
        assert_eq!(fm.measure_string("The quick brown fox"), first);
    }
}

#[test_case(Raster::RowMajor)]
#[test_case(Raster::ColumnMajor)]
fn whole_bytes_of_offset_are_ignored(raster: Raster) {
    // Only `offset % 8` shifts the content, so offset + 8 gives the same buffer and not one
    // shifted by a whole byte. Byte addressing is left to the caller.
    let fm = manager(0, raster);
    for offset in 0..8 {
        assert_eq!(
            fm.rasterize_char('Q', offset).unwrap(),
            fm.rasterize_char('Q', offset + 8).unwrap()
        );
        assert_eq!(fm.rasterize("Qz", offset).unwrap(), fm.rasterize("Qz", offset + 16).unwrap());
    }
}

#[test_case(0, &[0x20, 0x20, 0x20, 0x00, 0x20, 0x20, 0x20]; "offset 0")]
#[test_case(1, &[0x10, 0x10, 0x10, 0x00, 0x10, 0x10, 0x10]; "offset 1")]
// 5 pixels shifted by 4 bits need 9 bits, so every row takes two bytes
#[test_case(4, &[0x02, 0x00, 0x02, 0x00, 0x02, 0x00, 0x00, 0x00, 0x02, 0x00, 0x02, 0x00, 0x02, 0x00]; "offset 4")]
fn vertical_bar_row_major(offset: u16, expected: &[u8]) {
    let bitmap = manager(0, Raster::RowMajor).rasterize_char('|', offset).unwrap();
    assert_eq!(bitmap.data(), expected);
}

#[test]
fn vertical_bar_column_major() {
    let bitmap = manager(0, Raster::ColumnMajor).rasterize_char('|', 0).unwrap();
    assert_eq!(bitmap.data(), &[0x00, 0x00, 0x77, 0x00, 0x00]);
}

#[test]
fn breaks_three_characters() {
    let fm = manager(0, Raster::RowMajor);
    assert_eq!(fm.character_breaks("abc", 11), vec![2]);
    assert_eq!(fm.split_lines("abc", 11), vec!["ab", "c"]);
}

#[test_case(Raster::RowMajor)]
#[test_case(Raster::ColumnMajor)]
fn empty_string(raster: Raster) {
    let fm = manager(0, raster);
    assert_eq!(fm.measure_string(""), Size::new(0, 0));
    assert!(fm.rasterize("", 0).unwrap().is_empty());
    assert!(fm.character_breaks("", 10).is_empty());
}

#[test]
fn string_composition_matches_single_glyphs() {
    let fm = manager(1, Raster::RowMajor);
    let run = fm.rasterize("Hi!", 0).unwrap();

    let mut x = 0u16;
    for c in "Hi!".chars() {
        let glyph = fm.rasterize_char(c, 0).unwrap();
        for (gx, gy) in glyph.lit_pixels() {
            assert!(run.pixel(x + gx, gy), "{c:?} pixel ({gx}, {gy})");
        }
        x += glyph.width_pixels + u16::from(fm.font_c());
    }
    assert_eq!(x, run.width_pixels);
}
