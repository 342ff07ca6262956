use derive_more::Display;
use std::str::FromStr;

use crate::errors::FontError;

/// Descriptor of a single glyph in a font table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphDescriptor {
    /// Width of the glyph in pixels
    pub width: u8,
    /// Offset of the first row of the glyph in the font bitmap
    pub offset: u16,
}

impl GlyphDescriptor {
    pub const fn new(width: u8, offset: u16) -> Self {
        Self { width, offset }
    }

    /// Number of bytes a single scan line of this glyph occupies in the font bitmap
    pub const fn row_bytes(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }
}

/// A statically compiled bitmap font.
///
/// The bitmap holds every glyph in ascending character order. Each glyph is `height` scan lines of
/// `ceil(width / 8)` bytes, most significant bit is the leftmost pixel. The space character must
/// be part of the `char_start..=char_end` range, unknown characters are drawn as a space.
#[derive(Debug)]
pub struct Font {
    /// Name of the font as listed by the font manager
    pub name: &'static str,
    /// Height of every glyph in pixels
    pub height: u8,
    /// Spacing between two adjacent characters in pixels
    pub c: u8,
    /// First character in the font
    pub char_start: u8,
    /// Last character in the font
    pub char_end: u8,
    /// Glyph descriptors, indexed by `char - char_start`
    pub descriptors: &'static [GlyphDescriptor],
    /// Glyph data for all glyphs
    pub bitmap: &'static [u8],
}

impl Font {
    /// Number of glyphs the font holds
    pub fn glyph_count(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns true when the character has its own glyph in this font
    pub fn contains(&self, c: char) -> bool {
        let code = c as u32;
        code >= u32::from(self.char_start) && code <= u32::from(self.char_end)
    }

    /// Descriptor of the first glyph in the table, used as the minimal unit for line breaking
    pub fn first_glyph(&self) -> GlyphDescriptor {
        self.descriptors.first().copied().unwrap_or(GlyphDescriptor::new(0, 0))
    }

    /// Returns the scan lines of the given glyph, `row_bytes() * height` bytes in total
    pub fn glyph_rows(&self, desc: &GlyphDescriptor) -> &'static [u8] {
        let start = usize::from(desc.offset);
        let len = desc.row_bytes() * usize::from(self.height);
        self.bitmap.get(start..start + len).unwrap_or(&[])
    }
}

/// The information ordering utilized by the target display
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display)]
pub enum Raster {
    /// Cartesian Left->Right, Top->Bottom. Each byte is 8 horizontally adjacent pixels.
    #[default]
    #[display("row-major")]
    RowMajor,
    /// Paged Top->Bottom, Left->Right. Each byte is 8 vertically stacked pixels in one page.
    #[display("column-major")]
    ColumnMajor,
}

impl FromStr for Raster {
    type Err = FontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "row-major" | "lrtb" => Ok(Raster::RowMajor),
            "column-major" | "ptblr" => Ok(Raster::ColumnMajor),
            _ => Err(FontError::InvalidParameter(format!("unknown raster: {s}"))),
        }
    }
}

/// The orientation of output characters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display)]
pub enum Orientation {
    #[default]
    #[display("top")]
    Top,
    #[display("right")]
    Right,
    #[display("bottom")]
    Bottom,
    #[display("left")]
    Left,
}

impl Orientation {
    /// Right and left orientations flow the text vertically
    pub fn is_vertical(&self) -> bool {
        matches!(self, Orientation::Right | Orientation::Left)
    }
}

impl FromStr for Orientation {
    type Err = FontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" | "t" => Ok(Orientation::Top),
            "right" | "r" => Ok(Orientation::Right),
            "bottom" | "b" => Ok(Orientation::Bottom),
            "left" | "l" => Ok(Orientation::Left),
            _ => Err(FontError::InvalidParameter(format!("unknown orientation: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::GLCD_10X14;
    use crate::fonts::GLCD_5X7;

    #[test]
    fn row_bytes() {
        assert_eq!(GlyphDescriptor::new(0, 0).row_bytes(), 0);
        assert_eq!(GlyphDescriptor::new(1, 0).row_bytes(), 1);
        assert_eq!(GlyphDescriptor::new(8, 0).row_bytes(), 1);
        assert_eq!(GlyphDescriptor::new(9, 0).row_bytes(), 2);
    }

    #[test]
    fn glyph_rows() {
        let desc = GLCD_5X7.descriptors[usize::from(b'|' - GLCD_5X7.char_start)];
        assert_eq!(GLCD_5X7.glyph_rows(&desc), &[0x20, 0x20, 0x20, 0x00, 0x20, 0x20, 0x20]);

        let desc = GLCD_10X14.descriptors[usize::from(b'|' - GLCD_10X14.char_start)];
        assert_eq!(GLCD_10X14.glyph_rows(&desc).len(), 28);
    }

    #[test]
    fn contains() {
        assert!(GLCD_5X7.contains(' '));
        assert!(GLCD_5X7.contains('~'));
        assert!(!GLCD_5X7.contains('\n'));
        assert!(!GLCD_5X7.contains('é'));
    }

    #[test]
    fn parse_modes() {
        assert_eq!("row-major".parse::<Raster>().unwrap(), Raster::RowMajor);
        assert_eq!("ptblr".parse::<Raster>().unwrap(), Raster::ColumnMajor);
        assert!("diagonal".parse::<Raster>().is_err());

        assert_eq!("left".parse::<Orientation>().unwrap(), Orientation::Left);
        assert!(Orientation::Right.is_vertical());
        assert!(!Orientation::Bottom.is_vertical());
        assert_eq!(Orientation::Left.to_string(), "left");
        assert_eq!(Raster::ColumnMajor.to_string(), "column-major");
    }
}
