//! String measurement and line breaking
use rasterfont_shared::types::Size;

use crate::font::{Font, Orientation};
use crate::geometry::resolve;

/// Measures the pixel extent of a string in the given orientation.
///
/// Horizontal text sums the glyph widths plus the character spacing, which is added after every
/// character including the last one, the same way the raster cursor advances. Vertical text
/// reports the font height and the width of the font's first glyph.
pub fn measure_string(font: &Font, orientation: Orientation, s: &str) -> Size<u16> {
    if s.is_empty() {
        return Size::default();
    }

    if orientation.is_vertical() {
        return Size::new(u16::from(font.first_glyph().width), u16::from(font.height));
    }

    measure_run(font, s)
}

/// Measures a string as a single horizontal run of glyphs
pub fn measure_run(font: &Font, s: &str) -> Size<u16> {
    if s.is_empty() {
        return Size::default();
    }

    let width = s.chars().fold(0u16, |width, c| {
        let desc = resolve(font, c);
        width
            .saturating_add(u16::from(desc.width))
            .saturating_add(u16::from(font.c))
    });

    Size::new(width, u16::from(font.height))
}

/// Finds the character positions where a string must be broken to fit in `pixels`.
///
/// Each returned index is the first character of a new line. An empty list is returned when
/// `pixels` cannot hold even the smallest unit of the font. A glyph wider than `pixels` always
/// starts a new line, even as the first character.
///
/// Positions are `u16`; breaks after character 65535 are not reported.
pub fn character_breaks(font: &Font, orientation: Orientation, s: &str, pixels: u16) -> Vec<u16> {
    let mut breaks = Vec::new();

    if orientation.is_vertical() {
        // Glyph height is uniform, so lines hold a fixed number of characters
        if font.height == 0 || pixels < u16::from(font.height) {
            return breaks;
        }

        let per_line = usize::from(pixels / u16::from(font.height));
        let len = s.chars().count();
        for pos in (per_line..len).step_by(per_line) {
            let Ok(pos) = u16::try_from(pos) else {
                break;
            };
            breaks.push(pos);
        }
        return breaks;
    }

    if pixels < u16::from(font.first_glyph().width) {
        return breaks;
    }

    let mut pixel_pos: u16 = 0;
    for (pos, c) in s.chars().enumerate() {
        let Ok(pos) = u16::try_from(pos) else {
            break;
        };
        let width = u16::from(resolve(font, c).width);

        if width.saturating_add(pixel_pos) > pixels {
            breaks.push(pos);
            pixel_pos = 0;
        }
        pixel_pos = pixel_pos
            .saturating_add(width)
            .saturating_add(u16::from(font.c));
    }

    breaks
}

/// Splits a string into the lines defined by [`character_breaks`]
pub fn split_lines<'a>(font: &Font, orientation: Orientation, s: &'a str, pixels: u16) -> Vec<&'a str> {
    if s.is_empty() {
        return Vec::new();
    }

    let breaks = character_breaks(font, orientation, s, pixels);

    let mut lines = Vec::with_capacity(breaks.len() + 1);
    let mut start = 0;
    let mut next_break = breaks.iter().peekable();
    for (pos, (byte_pos, _)) in s.char_indices().enumerate() {
        if next_break.peek().is_some_and(|&&b| usize::from(b) == pos) {
            lines.push(&s[start..byte_pos]);
            start = byte_pos;
            next_break.next();
        }
    }
    lines.push(&s[start..]);

    lines
}
