// 5x7 GLCD glyphs trimmed to their ink width, proportional pitch.
// Rows are MSB-first, padded to whole bytes, glyphs laid out in character order.

use crate::font::{Font, GlyphDescriptor};

pub static GLCD_PROP_5X7: Font = Font {
    name: "glcd_prop_5x7",
    height: 7,
    c: 1,
    char_start: 0x20,
    char_end: 0x7e,
    descriptors: &DESCRIPTORS,
    bitmap: &BITMAP,
};

#[rustfmt::skip]
const DESCRIPTORS: [GlyphDescriptor; 95] = [
    GlyphDescriptor::new(3, 0), // ' '
    GlyphDescriptor::new(1, 7), // '!'
    GlyphDescriptor::new(3, 14), // '"'
    GlyphDescriptor::new(5, 21), // '#'
    GlyphDescriptor::new(5, 28), // '$'
    GlyphDescriptor::new(5, 35), // '%'
    GlyphDescriptor::new(5, 42), // '&'
    GlyphDescriptor::new(3, 49), // '\''
    GlyphDescriptor::new(3, 56), // '('
    GlyphDescriptor::new(3, 63), // ')'
    GlyphDescriptor::new(5, 70), // '*'
    GlyphDescriptor::new(5, 77), // '+'
    GlyphDescriptor::new(2, 84), // ','
    GlyphDescriptor::new(5, 91), // '-'
    GlyphDescriptor::new(2, 98), // '.'
    GlyphDescriptor::new(5, 105), // '/'
    GlyphDescriptor::new(5, 112), // '0'
    GlyphDescriptor::new(3, 119), // '1'
    GlyphDescriptor::new(5, 126), // '2'
    GlyphDescriptor::new(5, 133), // '3'
    GlyphDescriptor::new(5, 140), // '4'
    GlyphDescriptor::new(5, 147), // '5'
    GlyphDescriptor::new(5, 154), // '6'
    GlyphDescriptor::new(5, 161), // '7'
    GlyphDescriptor::new(5, 168), // '8'
    GlyphDescriptor::new(5, 175), // '9'
    GlyphDescriptor::new(1, 182), // ':'
    GlyphDescriptor::new(2, 189), // ';'
    GlyphDescriptor::new(4, 196), // '<'
    GlyphDescriptor::new(5, 203), // '='
    GlyphDescriptor::new(4, 210), // '>'
    GlyphDescriptor::new(5, 217), // '?'
    GlyphDescriptor::new(5, 224), // '@'
    GlyphDescriptor::new(5, 231), // 'A'
    GlyphDescriptor::new(5, 238), // 'B'
    GlyphDescriptor::new(5, 245), // 'C'
    GlyphDescriptor::new(5, 252), // 'D'
    GlyphDescriptor::new(5, 259), // 'E'
    GlyphDescriptor::new(5, 266), // 'F'
    GlyphDescriptor::new(5, 273), // 'G'
    GlyphDescriptor::new(5, 280), // 'H'
    GlyphDescriptor::new(3, 287), // 'I'
    GlyphDescriptor::new(5, 294), // 'J'
    GlyphDescriptor::new(5, 301), // 'K'
    GlyphDescriptor::new(5, 308), // 'L'
    GlyphDescriptor::new(5, 315), // 'M'
    GlyphDescriptor::new(5, 322), // 'N'
    GlyphDescriptor::new(5, 329), // 'O'
    GlyphDescriptor::new(5, 336), // 'P'
    GlyphDescriptor::new(5, 343), // 'Q'
    GlyphDescriptor::new(5, 350), // 'R'
    GlyphDescriptor::new(5, 357), // 'S'
    GlyphDescriptor::new(5, 364), // 'T'
    GlyphDescriptor::new(5, 371), // 'U'
    GlyphDescriptor::new(5, 378), // 'V'
    GlyphDescriptor::new(5, 385), // 'W'
    GlyphDescriptor::new(5, 392), // 'X'
    GlyphDescriptor::new(5, 399), // 'Y'
    GlyphDescriptor::new(5, 406), // 'Z'
    GlyphDescriptor::new(4, 413), // '['
    GlyphDescriptor::new(5, 420), // '\\'
    GlyphDescriptor::new(4, 427), // ']'
    GlyphDescriptor::new(5, 434), // '^'
    GlyphDescriptor::new(5, 441), // '_'
    GlyphDescriptor::new(3, 448), // '`'
    GlyphDescriptor::new(5, 455), // 'a'
    GlyphDescriptor::new(5, 462), // 'b'
    GlyphDescriptor::new(5, 469), // 'c'
    GlyphDescriptor::new(5, 476), // 'd'
    GlyphDescriptor::new(5, 483), // 'e'
    GlyphDescriptor::new(4, 490), // 'f'
    GlyphDescriptor::new(5, 497), // 'g'
    GlyphDescriptor::new(5, 504), // 'h'
    GlyphDescriptor::new(3, 511), // 'i'
    GlyphDescriptor::new(4, 518), // 'j'
    GlyphDescriptor::new(4, 525), // 'k'
    GlyphDescriptor::new(3, 532), // 'l'
    GlyphDescriptor::new(5, 539), // 'm'
    GlyphDescriptor::new(5, 546), // 'n'
    GlyphDescriptor::new(5, 553), // 'o'
    GlyphDescriptor::new(5, 560), // 'p'
    GlyphDescriptor::new(5, 567), // 'q'
    GlyphDescriptor::new(5, 574), // 'r'
    GlyphDescriptor::new(5, 581), // 's'
    GlyphDescriptor::new(5, 588), // 't'
    GlyphDescriptor::new(5, 595), // 'u'
    GlyphDescriptor::new(5, 602), // 'v'
    GlyphDescriptor::new(5, 609), // 'w'
    GlyphDescriptor::new(5, 616), // 'x'
    GlyphDescriptor::new(5, 623), // 'y'
    GlyphDescriptor::new(5, 630), // 'z'
    GlyphDescriptor::new(3, 637), // '{'
    GlyphDescriptor::new(1, 644), // '|'
    GlyphDescriptor::new(3, 651), // '}'
    GlyphDescriptor::new(5, 658), // '~'
];

#[rustfmt::skip]
static BITMAP: [u8; 665] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ' '
    0x80, 0x80, 0x80, 0x80, 0x80, 0x00, 0x80, // '!'
    0xa0, 0xa0, 0xa0, 0x00, 0x00, 0x00, 0x00, // '"'
    0x50, 0x50, 0xf8, 0x50, 0xf8, 0x50, 0x50, // '#'
    0x20, 0x78, 0xa0, 0x70, 0x28, 0xf0, 0x20, // '$'
    0xc0, 0xc8, 0x10, 0x20, 0x40, 0x98, 0x18, // '%'
    0x40, 0xa0, 0xa0, 0x40, 0xa8, 0x90, 0x68, // '&'
    0x60, 0x60, 0x40, 0x80, 0x00, 0x00, 0x00, // '\''
    0x20, 0x40, 0x80, 0x80, 0x80, 0x40, 0x20, // '('
    0x80, 0x40, 0x20, 0x20, 0x20, 0x40, 0x80, // ')'
    0x20, 0xa8, 0x70, 0xf8, 0x70, 0xa8, 0x20, // '*'
    0x00, 0x20, 0x20, 0xf8, 0x20, 0x20, 0x00, // '+'
    0x00, 0x00, 0x00, 0x00, 0xc0, 0xc0, 0x80, // ','
    0x00, 0x00, 0x00, 0xf8, 0x00, 0x00, 0x00, // '-'
    0x00, 0x00, 0x00, 0x00, 0x00, 0xc0, 0xc0, // '.'
    0x00, 0x08, 0x10, 0x20, 0x40, 0x80, 0x00, // '/'
    0x70, 0x88, 0x98, 0xa8, 0xc8, 0x88, 0x70, // '0'
    0x40, 0xc0, 0x40, 0x40, 0x40, 0x40, 0xe0, // '1'
    0x70, 0x88, 0x08, 0x70, 0x80, 0x80, 0xf8, // '2'
    0xf8, 0x08, 0x10, 0x30, 0x08, 0x88, 0x70, // '3'
    0x10, 0x30, 0x50, 0x90, 0xf8, 0x10, 0x10, // '4'
    0xf8, 0x80, 0xf0, 0x08, 0x08, 0x88, 0x70, // '5'
    0x38, 0x40, 0x80, 0xf0, 0x88, 0x88, 0x70, // '6'
    0xf8, 0x08, 0x08, 0x10, 0x20, 0x40, 0x80, // '7'
    0x70, 0x88, 0x88, 0x70, 0x88, 0x88, 0x70, // '8'
    0x70, 0x88, 0x88, 0x78, 0x08, 0x10, 0xe0, // '9'
    0x00, 0x00, 0x80, 0x00, 0x80, 0x00, 0x00, // ':'
    0x00, 0x00, 0x40, 0x00, 0x40, 0x40, 0x80, // ';'
    0x10, 0x20, 0x40, 0x80, 0x40, 0x20, 0x10, // '<'
    0x00, 0x00, 0xf8, 0x00, 0xf8, 0x00, 0x00, // '='
    0x80, 0x40, 0x20, 0x10, 0x20, 0x40, 0x80, // '>'
    0x70, 0x88, 0x08, 0x30, 0x20, 0x00, 0x20, // '?'
    0x70, 0x88, 0xa8, 0xb8, 0xb0, 0x80, 0x78, // '@'
    0x20, 0x50, 0x88, 0x88, 0xf8, 0x88, 0x88, // 'A'
    0xf0, 0x88, 0x88, 0xf0, 0x88, 0x88, 0xf0, // 'B'
    0x70, 0x88, 0x80, 0x80, 0x80, 0x88, 0x70, // 'C'
    0xf0, 0x88, 0x88, 0x88, 0x88, 0x88, 0xf0, // 'D'
    0xf8, 0x80, 0x80, 0xf0, 0x80, 0x80, 0xf8, // 'E'
    0xf8, 0x80, 0x80, 0xf0, 0x80, 0x80, 0x80, // 'F'
    0x78, 0x88, 0x80, 0x80, 0x98, 0x88, 0x78, // 'G'
    0x88, 0x88, 0x88, 0xf8, 0x88, 0x88, 0x88, // 'H'
    0xe0, 0x40, 0x40, 0x40, 0x40, 0x40, 0xe0, // 'I'
    0x38, 0x10, 0x10, 0x10, 0x10, 0x90, 0x60, // 'J'
    0x88, 0x90, 0xa0, 0xc0, 0xa0, 0x90, 0x88, // 'K'
    0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0xf8, // 'L'
    0x88, 0xd8, 0xa8, 0xa8, 0xa8, 0x88, 0x88, // 'M'
    0x88, 0x88, 0xc8, 0xa8, 0x98, 0x88, 0x88, // 'N'
    0x70, 0x88, 0x88, 0x88, 0x88, 0x88, 0x70, // 'O'
    0xf0, 0x88, 0x88, 0xf0, 0x80, 0x80, 0x80, // 'P'
    0x70, 0x88, 0x88, 0x88, 0xa8, 0x90, 0x68, // 'Q'
    0xf0, 0x88, 0x88, 0xf0, 0xa0, 0x90, 0x88, // 'R'
    0x70, 0x88, 0x80, 0x70, 0x08, 0x88, 0x70, // 'S'
    0xf8, 0xa8, 0x20, 0x20, 0x20, 0x20, 0x20, // 'T'
    0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x70, // 'U'
    0x88, 0x88, 0x88, 0x88, 0x88, 0x50, 0x20, // 'V'
    0x88, 0x88, 0x88, 0xa8, 0xa8, 0xa8, 0x50, // 'W'
    0x88, 0x88, 0x50, 0x20, 0x50, 0x88, 0x88, // 'X'
    0x88, 0x88, 0x50, 0x20, 0x20, 0x20, 0x20, // 'Y'
    0xf8, 0x08, 0x10, 0x70, 0x40, 0x80, 0xf8, // 'Z'
    0xf0, 0x80, 0x80, 0x80, 0x80, 0x80, 0xf0, // '['
    0x00, 0x80, 0x40, 0x20, 0x10, 0x08, 0x00, // '\\'
    0xf0, 0x10, 0x10, 0x10, 0x10, 0x10, 0xf0, // ']'
    0x20, 0x50, 0x88, 0x00, 0x00, 0x00, 0x00, // '^'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xf8, // '_'
    0xc0, 0xc0, 0x40, 0x20, 0x00, 0x00, 0x00, // '`'
    0x00, 0x00, 0x60, 0x10, 0x70, 0x90, 0x78, // 'a'
    0x80, 0x80, 0xb0, 0xc8, 0x88, 0xc8, 0xb0, // 'b'
    0x00, 0x00, 0x70, 0x88, 0x80, 0x88, 0x70, // 'c'
    0x08, 0x08, 0x68, 0x98, 0x88, 0x98, 0x68, // 'd'
    0x00, 0x00, 0x70, 0x88, 0xf8, 0x80, 0x70, // 'e'
    0x20, 0x50, 0x40, 0xe0, 0x40, 0x40, 0x40, // 'f'
    0x00, 0x00, 0x70, 0x98, 0x98, 0x68, 0x08, // 'g'
    0x80, 0x80, 0xb0, 0xc8, 0x88, 0x88, 0x88, // 'h'
    0x40, 0x00, 0xc0, 0x40, 0x40, 0x40, 0xe0, // 'i'
    0x10, 0x00, 0x10, 0x10, 0x10, 0x90, 0x60, // 'j'
    0x80, 0x80, 0x90, 0xa0, 0xc0, 0xa0, 0x90, // 'k'
    0xc0, 0x40, 0x40, 0x40, 0x40, 0x40, 0xe0, // 'l'
    0x00, 0x00, 0xd0, 0xa8, 0xa8, 0xa8, 0xa8, // 'm'
    0x00, 0x00, 0xb0, 0xc8, 0x88, 0x88, 0x88, // 'n'
    0x00, 0x00, 0x70, 0x88, 0x88, 0x88, 0x70, // 'o'
    0x00, 0x00, 0xb0, 0xc8, 0xc8, 0xb0, 0x80, // 'p'
    0x00, 0x00, 0x68, 0x98, 0x98, 0x68, 0x08, // 'q'
    0x00, 0x00, 0xb0, 0xc8, 0x80, 0x80, 0x80, // 'r'
    0x00, 0x00, 0x78, 0x80, 0x70, 0x08, 0xf0, // 's'
    0x20, 0x20, 0xf8, 0x20, 0x20, 0x28, 0x10, // 't'
    0x00, 0x00, 0x88, 0x88, 0x88, 0x98, 0x68, // 'u'
    0x00, 0x00, 0x88, 0x88, 0x88, 0x50, 0x20, // 'v'
    0x00, 0x00, 0x88, 0x88, 0xa8, 0xa8, 0x50, // 'w'
    0x00, 0x00, 0x88, 0x50, 0x20, 0x50, 0x88, // 'x'
    0x00, 0x00, 0x88, 0x88, 0x78, 0x08, 0x88, // 'y'
    0x00, 0x00, 0xf8, 0x10, 0x20, 0x40, 0xf8, // 'z'
    0x20, 0x40, 0x40, 0x80, 0x40, 0x40, 0x20, // '{'
    0x80, 0x80, 0x80, 0x00, 0x80, 0x80, 0x80, // '|'
    0x80, 0x40, 0x40, 0x20, 0x40, 0x40, 0x80, // '}'
    0x40, 0xa8, 0x10, 0x00, 0x00, 0x00, 0x00, // '~'
];
