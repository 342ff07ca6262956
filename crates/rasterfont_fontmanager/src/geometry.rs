//! Glyph lookup in a font table
use crate::font::{Font, GlyphDescriptor};

/// Character substituted for everything outside the font's range
pub const REPLACEMENT_CHAR: char = ' ';

/// Maps a character onto the glyph table index, replacing unknown characters with a space
pub fn glyph_index(font: &Font, c: char) -> usize {
    let c = if font.contains(c) { c } else { REPLACEMENT_CHAR };
    (c as u32).saturating_sub(u32::from(font.char_start)) as usize
}

/// Returns the glyph descriptor used to draw the given character.
///
/// A font without a space glyph is malformed; characters that cannot be resolved at all end up as
/// an empty, zero width glyph.
pub fn resolve(font: &Font, c: char) -> GlyphDescriptor {
    font.descriptors
        .get(glyph_index(font, c))
        .copied()
        .unwrap_or(GlyphDescriptor::new(0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::{GLCD_5X7, GLCD_PROP_5X7};

    #[test]
    fn in_range() {
        assert_eq!(glyph_index(&GLCD_5X7, ' '), 0);
        assert_eq!(glyph_index(&GLCD_5X7, '~'), 94);
        assert_eq!(resolve(&GLCD_PROP_5X7, '|').width, 1);
        assert_eq!(resolve(&GLCD_PROP_5X7, 'A').width, 5);
    }

    #[test]
    fn remaps_to_space() {
        let space = resolve(&GLCD_PROP_5X7, ' ');
        assert_eq!(resolve(&GLCD_PROP_5X7, '\t'), space);
        assert_eq!(resolve(&GLCD_PROP_5X7, '\u{7f}'), space);
        assert_eq!(resolve(&GLCD_PROP_5X7, 'ß'), space);
        assert_eq!(resolve(&GLCD_PROP_5X7, '中'), space);
    }
}
