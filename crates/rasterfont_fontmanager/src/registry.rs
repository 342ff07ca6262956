use crate::errors::{FontError, FontResult};
use crate::font::Font;
use crate::fonts::BUILTIN_FONTS;

/// Name reported for fonts that were compiled without one
pub const MISSING_FONT_NAME: &str = "** Font Name Missing **";

/// Read-only, index ordered set of fonts. The font manager borrows a registry instead of reaching
/// for global state, so any number of managers can share the same set.
#[derive(Clone, Copy, Debug)]
pub struct FontRegistry {
    fonts: &'static [&'static Font],
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FontRegistry {
    /// Registry with the fonts that are compiled into this library
    pub fn builtin() -> Self {
        Self { fonts: &BUILTIN_FONTS }
    }

    /// Registry over a custom set of fonts
    pub fn new(fonts: &'static [&'static Font]) -> Self {
        Self { fonts }
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Returns the font at the given index
    pub fn get(&self, index: usize) -> FontResult<&'static Font> {
        self.fonts.get(index).copied().ok_or(FontError::InvalidFontIndex {
            index,
            count: self.fonts.len(),
        })
    }

    /// Names of all fonts, in index order
    pub fn names(&self) -> Vec<&'static str> {
        self.fonts
            .iter()
            .map(|font| if font.name.is_empty() { MISSING_FONT_NAME } else { font.name })
            .collect()
    }

    /// Finds the index of a font by its name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fonts.iter().position(|font| font.name.eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Font> {
        self.fonts.iter().copied()
    }
}
