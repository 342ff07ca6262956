use log::debug;
use rasterfont_shared::types::Size;

use crate::bitmap::Bitmap;
use crate::errors::FontResult;
use crate::font::{Font, Orientation, Raster};
use crate::geometry::resolve;
use crate::metrics;
use crate::raster::writer_for;
use crate::registry::FontRegistry;

pub const LOG_TARGET: &str = "rasterfont::manager";

/// Rasterizes characters and strings of a single font for a given display raster
#[derive(Clone, Copy, Debug)]
pub struct FontManager {
    /// The font managed by this object
    font: &'static Font,
    /// Raster direction
    raster: Raster,
    /// Character orientation
    orientation: Orientation,
}

impl FontManager {
    /// Number of fonts in the registry
    pub fn font_count(registry: &FontRegistry) -> usize {
        registry.len()
    }

    /// Names of the fonts in the registry, in font index order
    pub fn font_list(registry: &FontRegistry) -> Vec<&'static str> {
        registry.names()
    }

    /// Instantiates a font manager for the font at `index` in the registry
    pub fn new(registry: &FontRegistry, index: usize, raster: Raster, orientation: Orientation) -> FontResult<Self> {
        let font = registry.get(index)?;
        debug!(target: LOG_TARGET, "font {index} ({}) bound for {raster}, {orientation}", font.name);

        Ok(Self::with_font(font, raster, orientation))
    }

    /// Instantiates a font manager for an explicit font table
    pub fn with_font(font: &'static Font, raster: Raster, orientation: Orientation) -> Self {
        Self {
            font,
            raster,
            orientation,
        }
    }

    pub fn font(&self) -> &'static Font {
        self.font
    }

    pub fn font_name(&self) -> &'static str {
        self.font.name
    }

    /// Height of the font in pixels
    pub fn font_height(&self) -> u8 {
        self.font.height
    }

    /// The "C" value: space between adjacent characters in pixels
    pub fn font_c(&self) -> u8 {
        self.font.c
    }

    pub fn raster(&self) -> Raster {
        self.raster
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Measures the string in the manager's orientation
    pub fn measure_string(&self, s: &str) -> Size<u16> {
        metrics::measure_string(self.font, self.orientation, s)
    }

    /// For wrapping text: the character positions that start a new line when lines are `pixels` long
    pub fn character_breaks(&self, s: &str, pixels: u16) -> Vec<u16> {
        metrics::character_breaks(self.font, self.orientation, s, pixels)
    }

    /// Splits the string into lines of at most `pixels`
    pub fn split_lines<'a>(&self, s: &'a str, pixels: u16) -> Vec<&'a str> {
        metrics::split_lines(self.font, self.orientation, s, pixels)
    }

    /// Rasterizes a single character, shifted right (row-major) or down (column-major) by
    /// `bit_offset % 8` bits.
    pub fn rasterize_char(&self, c: char, bit_offset: u16) -> FontResult<Bitmap> {
        let glyph = resolve(self.font, c);
        let size = Size::new(u16::from(glyph.width), u16::from(self.font.height));

        let mut bitmap = Bitmap::allocate(self.raster, self.orientation, size, bit_offset)?;
        writer_for(self.raster).write_glyph(self.font, &glyph, &mut bitmap);

        Ok(bitmap)
    }

    /// Rasterizes a string, shifted right (row-major) or down (column-major) by `bit_offset % 8`
    /// bits. The bitmap is sized once for the whole string and glyphs are placed in order.
    pub fn rasterize(&self, s: &str, bit_offset: u16) -> FontResult<Bitmap> {
        let size = metrics::measure_run(self.font, s);

        let mut bitmap = Bitmap::allocate(self.raster, self.orientation, size, bit_offset)?;
        let writer = writer_for(self.raster);
        for c in s.chars() {
            writer.write_glyph(self.font, &resolve(self.font, c), &mut bitmap);
        }

        Ok(bitmap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FontError;

    fn manager(index: usize, raster: Raster) -> FontManager {
        FontManager::new(&FontRegistry::builtin(), index, raster, Orientation::Top).unwrap()
    }

    #[test]
    fn enumerate_fonts() {
        let registry = FontRegistry::builtin();
        assert_eq!(FontManager::font_count(&registry), 3);
        assert_eq!(FontManager::font_list(&registry)[0], "glcd_5x7");
    }

    #[test]
    fn invalid_index() {
        let result = FontManager::new(&FontRegistry::builtin(), 42, Raster::RowMajor, Orientation::Top);
        assert!(matches!(result, Err(FontError::InvalidFontIndex { index: 42, .. })));
    }

    #[test]
    fn font_properties() {
        let fm = manager(2, Raster::ColumnMajor);
        assert_eq!(fm.font_name(), "glcd_10x14");
        assert_eq!(fm.font_height(), 14);
        assert_eq!(fm.font_c(), 2);
        assert_eq!(fm.raster(), Raster::ColumnMajor);
        assert_eq!(fm.orientation(), Orientation::Top);
    }

    #[test]
    fn rasterize_char_row_major() {
        let fm = manager(0, Raster::RowMajor);
        let bm = fm.rasterize_char('|', 0).unwrap();
        assert_eq!(bm.data(), &[0x20, 0x20, 0x20, 0x00, 0x20, 0x20, 0x20]);

        let bm = fm.rasterize_char('|', 1).unwrap();
        assert_eq!(bm.data(), &[0x10, 0x10, 0x10, 0x00, 0x10, 0x10, 0x10]);
        assert_eq!(bm.width_pixels, 5);
        assert_eq!(bm.height_pixels, 7);
    }

    #[test]
    fn rasterize_string() {
        let fm = manager(0, Raster::RowMajor);
        let bm = fm.rasterize("||", 0).unwrap();
        // Two 5 pixel glyphs, each followed by a single pixel of spacing
        assert_eq!(bm.width_pixels, 12);
        assert_eq!(bm.bytes_per_row, 2);
        assert_eq!(&bm.data()[..4], &[0x20, 0x80, 0x20, 0x80]);
        assert_eq!(bm.cursor, 12);
    }

    #[test]
    fn rasterize_string_column_major() {
        let fm = manager(0, Raster::ColumnMajor);
        let bm = fm.rasterize("||", 0).unwrap();
        assert_eq!(bm.bytes_per_row, 12);
        assert_eq!(bm.bytes_per_column, 1);
        assert_eq!(
            bm.data(),
            &[0x00, 0x00, 0x77, 0x00, 0x00, 0x00, 0x00, 0x00, 0x77, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn rasterize_empty() {
        for raster in [Raster::RowMajor, Raster::ColumnMajor] {
            let fm = manager(1, raster);
            let bm = fm.rasterize("", 3).unwrap();
            assert!(bm.is_empty());
            assert_eq!(fm.measure_string(""), Size::new(0, 0));
        }
    }

    #[test]
    fn orientation_is_stamped() {
        let fm = FontManager::new(&FontRegistry::builtin(), 0, Raster::RowMajor, Orientation::Left).unwrap();
        let bm = fm.rasterize("ab", 0).unwrap();
        assert_eq!(bm.orientation, Orientation::Left);
        // Glyph runs are packed horizontally whatever the orientation
        assert_eq!(bm.width_pixels, 12);
        assert_eq!(fm.measure_string("ab"), Size::new(5, 7));
    }
}
