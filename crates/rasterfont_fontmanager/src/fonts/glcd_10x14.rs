// 5x7 GLCD font doubled to 10x14.
// Rows are MSB-first, padded to whole bytes, glyphs laid out in character order.

use crate::font::{Font, GlyphDescriptor};

pub static GLCD_10X14: Font = Font {
    name: "glcd_10x14",
    height: 14,
    c: 2,
    char_start: 0x20,
    char_end: 0x7e,
    descriptors: &DESCRIPTORS,
    bitmap: &BITMAP,
};

#[rustfmt::skip]
const DESCRIPTORS: [GlyphDescriptor; 95] = [
    GlyphDescriptor::new(10, 0), // ' '
    GlyphDescriptor::new(10, 28), // '!'
    GlyphDescriptor::new(10, 56), // '"'
    GlyphDescriptor::new(10, 84), // '#'
    GlyphDescriptor::new(10, 112), // '$'
    GlyphDescriptor::new(10, 140), // '%'
    GlyphDescriptor::new(10, 168), // '&'
    GlyphDescriptor::new(10, 196), // '\''
    GlyphDescriptor::new(10, 224), // '('
    GlyphDescriptor::new(10, 252), // ')'
    GlyphDescriptor::new(10, 280), // '*'
    GlyphDescriptor::new(10, 308), // '+'
    GlyphDescriptor::new(10, 336), // ','
    GlyphDescriptor::new(10, 364), // '-'
    GlyphDescriptor::new(10, 392), // '.'
    GlyphDescriptor::new(10, 420), // '/'
    GlyphDescriptor::new(10, 448), // '0'
    GlyphDescriptor::new(10, 476), // '1'
    GlyphDescriptor::new(10, 504), // '2'
    GlyphDescriptor::new(10, 532), // '3'
    GlyphDescriptor::new(10, 560), // '4'
    GlyphDescriptor::new(10, 588), // '5'
    GlyphDescriptor::new(10, 616), // '6'
    GlyphDescriptor::new(10, 644), // '7'
    GlyphDescriptor::new(10, 672), // '8'
    GlyphDescriptor::new(10, 700), // '9'
    GlyphDescriptor::new(10, 728), // ':'
    GlyphDescriptor::new(10, 756), // ';'
    GlyphDescriptor::new(10, 784), // '<'
    GlyphDescriptor::new(10, 812), // '='
    GlyphDescriptor::new(10, 840), // '>'
    GlyphDescriptor::new(10, 868), // '?'
    GlyphDescriptor::new(10, 896), // '@'
    GlyphDescriptor::new(10, 924), // 'A'
    GlyphDescriptor::new(10, 952), // 'B'
    GlyphDescriptor::new(10, 980), // 'C'
    GlyphDescriptor::new(10, 1008), // 'D'
    GlyphDescriptor::new(10, 1036), // 'E'
    GlyphDescriptor::new(10, 1064), // 'F'
    GlyphDescriptor::new(10, 1092), // 'G'
    GlyphDescriptor::new(10, 1120), // 'H'
    GlyphDescriptor::new(10, 1148), // 'I'
    GlyphDescriptor::new(10, 1176), // 'J'
    GlyphDescriptor::new(10, 1204), // 'K'
    GlyphDescriptor::new(10, 1232), // 'L'
    GlyphDescriptor::new(10, 1260), // 'M'
    GlyphDescriptor::new(10, 1288), // 'N'
    GlyphDescriptor::new(10, 1316), // 'O'
    GlyphDescriptor::new(10, 1344), // 'P'
    GlyphDescriptor::new(10, 1372), // 'Q'
    GlyphDescriptor::new(10, 1400), // 'R'
    GlyphDescriptor::new(10, 1428), // 'S'
    GlyphDescriptor::new(10, 1456), // 'T'
    GlyphDescriptor::new(10, 1484), // 'U'
    GlyphDescriptor::new(10, 1512), // 'V'
    GlyphDescriptor::new(10, 1540), // 'W'
    GlyphDescriptor::new(10, 1568), // 'X'
    GlyphDescriptor::new(10, 1596), // 'Y'
    GlyphDescriptor::new(10, 1624), // 'Z'
    GlyphDescriptor::new(10, 1652), // '['
    GlyphDescriptor::new(10, 1680), // '\\'
    GlyphDescriptor::new(10, 1708), // ']'
    GlyphDescriptor::new(10, 1736), // '^'
    GlyphDescriptor::new(10, 1764), // '_'
    GlyphDescriptor::new(10, 1792), // '`'
    GlyphDescriptor::new(10, 1820), // 'a'
    GlyphDescriptor::new(10, 1848), // 'b'
    GlyphDescriptor::new(10, 1876), // 'c'
    GlyphDescriptor::new(10, 1904), // 'd'
    GlyphDescriptor::new(10, 1932), // 'e'
    GlyphDescriptor::new(10, 1960), // 'f'
    GlyphDescriptor::new(10, 1988), // 'g'
    GlyphDescriptor::new(10, 2016), // 'h'
    GlyphDescriptor::new(10, 2044), // 'i'
    GlyphDescriptor::new(10, 2072), // 'j'
    GlyphDescriptor::new(10, 2100), // 'k'
    GlyphDescriptor::new(10, 2128), // 'l'
    GlyphDescriptor::new(10, 2156), // 'm'
    GlyphDescriptor::new(10, 2184), // 'n'
    GlyphDescriptor::new(10, 2212), // 'o'
    GlyphDescriptor::new(10, 2240), // 'p'
    GlyphDescriptor::new(10, 2268), // 'q'
    GlyphDescriptor::new(10, 2296), // 'r'
    GlyphDescriptor::new(10, 2324), // 's'
    GlyphDescriptor::new(10, 2352), // 't'
    GlyphDescriptor::new(10, 2380), // 'u'
    GlyphDescriptor::new(10, 2408), // 'v'
    GlyphDescriptor::new(10, 2436), // 'w'
    GlyphDescriptor::new(10, 2464), // 'x'
    GlyphDescriptor::new(10, 2492), // 'y'
    GlyphDescriptor::new(10, 2520), // 'z'
    GlyphDescriptor::new(10, 2548), // '{'
    GlyphDescriptor::new(10, 2576), // '|'
    GlyphDescriptor::new(10, 2604), // '}'
    GlyphDescriptor::new(10, 2632), // '~'
];

#[rustfmt::skip]
static BITMAP: [u8; 2660] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ' '
    0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0c, 0x00, 0x0c, 0x00, // '!'
    0x33, 0x00, 0x33, 0x00, 0x33, 0x00, 0x33, 0x00, 0x33, 0x00, 0x33, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '"'
    0x33, 0x00, 0x33, 0x00, 0x33, 0x00, 0x33, 0x00, 0xff, 0xc0, 0xff, 0xc0, 0x33, 0x00, 0x33, 0x00, 0xff, 0xc0, 0xff, 0xc0, 0x33, 0x00, 0x33, 0x00, 0x33, 0x00, 0x33, 0x00, // '#'
    0x0c, 0x00, 0x0c, 0x00, 0x3f, 0xc0, 0x3f, 0xc0, 0xcc, 0x00, 0xcc, 0x00, 0x3f, 0x00, 0x3f, 0x00, 0x0c, 0xc0, 0x0c, 0xc0, 0xff, 0x00, 0xff, 0x00, 0x0c, 0x00, 0x0c, 0x00, // '$'
    0xf0, 0x00, 0xf0, 0x00, 0xf0, 0xc0, 0xf0, 0xc0, 0x03, 0x00, 0x03, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x30, 0x00, 0x30, 0x00, 0xc3, 0xc0, 0xc3, 0xc0, 0x03, 0xc0, 0x03, 0xc0, // '%'
    0x30, 0x00, 0x30, 0x00, 0xcc, 0x00, 0xcc, 0x00, 0xcc, 0x00, 0xcc, 0x00, 0x30, 0x00, 0x30, 0x00, 0xcc, 0xc0, 0xcc, 0xc0, 0xc3, 0x00, 0xc3, 0x00, 0x3c, 0xc0, 0x3c, 0xc0, // '&'
    0x0f, 0x00, 0x0f, 0x00, 0x0f, 0x00, 0x0f, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x30, 0x00, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '\''
    0x03, 0x00, 0x03, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x30, 0x00, 0x30, 0x00, 0x30, 0x00, 0x30, 0x00, 0x30, 0x00, 0x30, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x03, 0x00, 0x03, 0x00, // '('
    0x30, 0x00, 0x30, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x30, 0x00, 0x30, 0x00, // ')'
    0x0c, 0x00, 0x0c, 0x00, 0xcc, 0xc0, 0xcc, 0xc0, 0x3f, 0x00, 0x3f, 0x00, 0xff, 0xc0, 0xff, 0xc0, 0x3f, 0x00, 0x3f, 0x00, 0xcc, 0xc0, 0xcc, 0xc0, 0x0c, 0x00, 0x0c, 0x00, // '*'
    0x00, 0x00, 0x00, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0xff, 0xc0, 0xff, 0xc0, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x00, 0x00, 0x00, 0x00, // '+'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0f, 0x00, 0x0f, 0x00, 0x0f, 0x00, 0x0f, 0x00, 0x0c, 0x00, 0x0c, 0x00, // ','
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xc0, 0xff, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '-'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0f, 0x00, 0x0f, 0x00, 0x0f, 0x00, 0x0f, 0x00, // '.'
    0x00, 0x00, 0x00, 0x00, 0x00, 0xc0, 0x00, 0xc0, 0x03, 0x00, 0x03, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x30, 0x00, 0x30, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, // '/'
    0x3f, 0x00, 0x3f, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc3, 0xc0, 0xc3, 0xc0, 0xcc, 0xc0, 0xcc, 0xc0, 0xf0, 0xc0, 0xf0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x3f, 0x00, 0x3f, 0x00, // '0'
    0x0c, 0x00, 0x0c, 0x00, 0x3c, 0x00, 0x3c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x3f, 0x00, 0x3f, 0x00, // '1'
    0x3f, 0x00, 0x3f, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x3f, 0x00, 0x3f, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xff, 0xc0, 0xff, 0xc0, // '2'
    0xff, 0xc0, 0xff, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x03, 0x00, 0x03, 0x00, 0x0f, 0x00, 0x0f, 0x00, 0x00, 0xc0, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x3f, 0x00, 0x3f, 0x00, // '3'
    0x03, 0x00, 0x03, 0x00, 0x0f, 0x00, 0x0f, 0x00, 0x33, 0x00, 0x33, 0x00, 0xc3, 0x00, 0xc3, 0x00, 0xff, 0xc0, 0xff, 0xc0, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, // '4'
    0xff, 0xc0, 0xff, 0xc0, 0xc0, 0x00, 0xc0, 0x00, 0xff, 0x00, 0xff, 0x00, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x3f, 0x00, 0x3f, 0x00, // '5'
    0x0f, 0xc0, 0x0f, 0xc0, 0x30, 0x00, 0x30, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xff, 0x00, 0xff, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x3f, 0x00, 0x3f, 0x00, // '6'
    0xff, 0xc0, 0xff, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x03, 0x00, 0x03, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x30, 0x00, 0x30, 0x00, 0xc0, 0x00, 0xc0, 0x00, // '7'
    0x3f, 0x00, 0x3f, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x3f, 0x00, 0x3f, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x3f, 0x00, 0x3f, 0x00, // '8'
    0x3f, 0x00, 0x3f, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x3f, 0xc0, 0x3f, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x03, 0x00, 0x03, 0x00, 0xfc, 0x00, 0xfc, 0x00, // '9'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ':'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x30, 0x00, 0x30, 0x00, // ';'
    0x00, 0xc0, 0x00, 0xc0, 0x03, 0x00, 0x03, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x30, 0x00, 0x30, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x03, 0x00, 0x03, 0x00, 0x00, 0xc0, 0x00, 0xc0, // '<'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xc0, 0xff, 0xc0, 0x00, 0x00, 0x00, 0x00, 0xff, 0xc0, 0xff, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '='
    0x30, 0x00, 0x30, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x03, 0x00, 0x03, 0x00, 0x00, 0xc0, 0x00, 0xc0, 0x03, 0x00, 0x03, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x30, 0x00, 0x30, 0x00, // '>'
    0x3f, 0x00, 0x3f, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x0f, 0x00, 0x0f, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0c, 0x00, 0x0c, 0x00, // '?'
    0x3f, 0x00, 0x3f, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xcc, 0xc0, 0xcc, 0xc0, 0xcf, 0xc0, 0xcf, 0xc0, 0xcf, 0x00, 0xcf, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0x3f, 0xc0, 0x3f, 0xc0, // '@'
    0x0c, 0x00, 0x0c, 0x00, 0x33, 0x00, 0x33, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xff, 0xc0, 0xff, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, // 'A'
    0xff, 0x00, 0xff, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xff, 0x00, 0xff, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xff, 0x00, 0xff, 0x00, // 'B'
    0x3f, 0x00, 0x3f, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0x3f, 0x00, 0x3f, 0x00, // 'C'
    0xff, 0x00, 0xff, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xff, 0x00, 0xff, 0x00, // 'D'
    0xff, 0xc0, 0xff, 0xc0, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xff, 0x00, 0xff, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xff, 0xc0, 0xff, 0xc0, // 'E'
    0xff, 0xc0, 0xff, 0xc0, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xff, 0x00, 0xff, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, // 'F'
    0x3f, 0xc0, 0x3f, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc3, 0xc0, 0xc3, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x3f, 0xc0, 0x3f, 0xc0, // 'G'
    0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xff, 0xc0, 0xff, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, // 'H'
    0x3f, 0x00, 0x3f, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x3f, 0x00, 0x3f, 0x00, // 'I'
    0x0f, 0xc0, 0x0f, 0xc0, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0xc3, 0x00, 0xc3, 0x00, 0x3c, 0x00, 0x3c, 0x00, // 'J'
    0xc0, 0xc0, 0xc0, 0xc0, 0xc3, 0x00, 0xc3, 0x00, 0xcc, 0x00, 0xcc, 0x00, 0xf0, 0x00, 0xf0, 0x00, 0xcc, 0x00, 0xcc, 0x00, 0xc3, 0x00, 0xc3, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, // 'K'
    0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xff, 0xc0, 0xff, 0xc0, // 'L'
    0xc0, 0xc0, 0xc0, 0xc0, 0xf3, 0xc0, 0xf3, 0xc0, 0xcc, 0xc0, 0xcc, 0xc0, 0xcc, 0xc0, 0xcc, 0xc0, 0xcc, 0xc0, 0xcc, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, // 'M'
    0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xf0, 0xc0, 0xf0, 0xc0, 0xcc, 0xc0, 0xcc, 0xc0, 0xc3, 0xc0, 0xc3, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, // 'N'
    0x3f, 0x00, 0x3f, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x3f, 0x00, 0x3f, 0x00, // 'O'
    0xff, 0x00, 0xff, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xff, 0x00, 0xff, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, // 'P'
    0x3f, 0x00, 0x3f, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xcc, 0xc0, 0xcc, 0xc0, 0xc3, 0x00, 0xc3, 0x00, 0x3c, 0xc0, 0x3c, 0xc0, // 'Q'
    0xff, 0x00, 0xff, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xff, 0x00, 0xff, 0x00, 0xcc, 0x00, 0xcc, 0x00, 0xc3, 0x00, 0xc3, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, // 'R'
    0x3f, 0x00, 0x3f, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x00, 0xc0, 0x00, 0x3f, 0x00, 0x3f, 0x00, 0x00, 0xc0, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x3f, 0x00, 0x3f, 0x00, // 'S'
    0xff, 0xc0, 0xff, 0xc0, 0xcc, 0xc0, 0xcc, 0xc0, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, // 'T'
    0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x3f, 0x00, 0x3f, 0x00, // 'U'
    0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x33, 0x00, 0x33, 0x00, 0x0c, 0x00, 0x0c, 0x00, // 'V'
    0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xcc, 0xc0, 0xcc, 0xc0, 0xcc, 0xc0, 0xcc, 0xc0, 0xcc, 0xc0, 0xcc, 0xc0, 0x33, 0x00, 0x33, 0x00, // 'W'
    0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x33, 0x00, 0x33, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x33, 0x00, 0x33, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, // 'X'
    0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x33, 0x00, 0x33, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, // 'Y'
    0xff, 0xc0, 0xff, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x03, 0x00, 0x03, 0x00, 0x3f, 0x00, 0x3f, 0x00, 0x30, 0x00, 0x30, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xff, 0xc0, 0xff, 0xc0, // 'Z'
    0x3f, 0xc0, 0x3f, 0xc0, 0x30, 0x00, 0x30, 0x00, 0x30, 0x00, 0x30, 0x00, 0x30, 0x00, 0x30, 0x00, 0x30, 0x00, 0x30, 0x00, 0x30, 0x00, 0x30, 0x00, 0x3f, 0xc0, 0x3f, 0xc0, // '['
    0x00, 0x00, 0x00, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0x30, 0x00, 0x30, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x03, 0x00, 0x03, 0x00, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0x00, 0x00, 0x00, // '\\'
    0x3f, 0xc0, 0x3f, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x3f, 0xc0, 0x3f, 0xc0, // ']'
    0x0c, 0x00, 0x0c, 0x00, 0x33, 0x00, 0x33, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '^'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xc0, 0xff, 0xc0, // '_'
    0x3c, 0x00, 0x3c, 0x00, 0x3c, 0x00, 0x3c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x03, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '`'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3c, 0x00, 0x3c, 0x00, 0x03, 0x00, 0x03, 0x00, 0x3f, 0x00, 0x3f, 0x00, 0xc3, 0x00, 0xc3, 0x00, 0x3f, 0xc0, 0x3f, 0xc0, // 'a'
    0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xcf, 0x00, 0xcf, 0x00, 0xf0, 0xc0, 0xf0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xf0, 0xc0, 0xf0, 0xc0, 0xcf, 0x00, 0xcf, 0x00, // 'b'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3f, 0x00, 0x3f, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0x3f, 0x00, 0x3f, 0x00, // 'c'
    0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x3c, 0xc0, 0x3c, 0xc0, 0xc3, 0xc0, 0xc3, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc3, 0xc0, 0xc3, 0xc0, 0x3c, 0xc0, 0x3c, 0xc0, // 'd'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3f, 0x00, 0x3f, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xff, 0xc0, 0xff, 0xc0, 0xc0, 0x00, 0xc0, 0x00, 0x3f, 0x00, 0x3f, 0x00, // 'e'
    0x03, 0x00, 0x03, 0x00, 0x0c, 0xc0, 0x0c, 0xc0, 0x0c, 0x00, 0x0c, 0x00, 0x3f, 0x00, 0x3f, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, // 'f'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3f, 0x00, 0x3f, 0x00, 0xc3, 0xc0, 0xc3, 0xc0, 0xc3, 0xc0, 0xc3, 0xc0, 0x3c, 0xc0, 0x3c, 0xc0, 0x00, 0xc0, 0x00, 0xc0, // 'g'
    0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xcf, 0x00, 0xcf, 0x00, 0xf0, 0xc0, 0xf0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, // 'h'
    0x0c, 0x00, 0x0c, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3c, 0x00, 0x3c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x3f, 0x00, 0x3f, 0x00, // 'i'
    0x03, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0xc3, 0x00, 0xc3, 0x00, 0x3c, 0x00, 0x3c, 0x00, // 'j'
    0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc3, 0x00, 0xc3, 0x00, 0xcc, 0x00, 0xcc, 0x00, 0xf0, 0x00, 0xf0, 0x00, 0xcc, 0x00, 0xcc, 0x00, 0xc3, 0x00, 0xc3, 0x00, // 'k'
    0x3c, 0x00, 0x3c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x3f, 0x00, 0x3f, 0x00, // 'l'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xf3, 0x00, 0xf3, 0x00, 0xcc, 0xc0, 0xcc, 0xc0, 0xcc, 0xc0, 0xcc, 0xc0, 0xcc, 0xc0, 0xcc, 0xc0, 0xcc, 0xc0, 0xcc, 0xc0, // 'm'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xcf, 0x00, 0xcf, 0x00, 0xf0, 0xc0, 0xf0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, // 'n'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3f, 0x00, 0x3f, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x3f, 0x00, 0x3f, 0x00, // 'o'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xcf, 0x00, 0xcf, 0x00, 0xf0, 0xc0, 0xf0, 0xc0, 0xf0, 0xc0, 0xf0, 0xc0, 0xcf, 0x00, 0xcf, 0x00, 0xc0, 0x00, 0xc0, 0x00, // 'p'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3c, 0xc0, 0x3c, 0xc0, 0xc3, 0xc0, 0xc3, 0xc0, 0xc3, 0xc0, 0xc3, 0xc0, 0x3c, 0xc0, 0x3c, 0xc0, 0x00, 0xc0, 0x00, 0xc0, // 'q'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xcf, 0x00, 0xcf, 0x00, 0xf0, 0xc0, 0xf0, 0xc0, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, // 'r'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3f, 0xc0, 0x3f, 0xc0, 0xc0, 0x00, 0xc0, 0x00, 0x3f, 0x00, 0x3f, 0x00, 0x00, 0xc0, 0x00, 0xc0, 0xff, 0x00, 0xff, 0x00, // 's'
    0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0xff, 0xc0, 0xff, 0xc0, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0xc0, 0x0c, 0xc0, 0x03, 0x00, 0x03, 0x00, // 't'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc3, 0xc0, 0xc3, 0xc0, 0x3c, 0xc0, 0x3c, 0xc0, // 'u'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x33, 0x00, 0x33, 0x00, 0x0c, 0x00, 0x0c, 0x00, // 'v'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xcc, 0xc0, 0xcc, 0xc0, 0xcc, 0xc0, 0xcc, 0xc0, 0x33, 0x00, 0x33, 0x00, // 'w'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0x33, 0x00, 0x33, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x33, 0x00, 0x33, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, // 'x'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x3f, 0xc0, 0x3f, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, // 'y'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xc0, 0xff, 0xc0, 0x03, 0x00, 0x03, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x30, 0x00, 0x30, 0x00, 0xff, 0xc0, 0xff, 0xc0, // 'z'
    0x03, 0x00, 0x03, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x30, 0x00, 0x30, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x03, 0x00, 0x03, 0x00, // '{'
    0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, // '|'
    0x30, 0x00, 0x30, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x03, 0x00, 0x03, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x30, 0x00, 0x30, 0x00, // '}'
    0x30, 0x00, 0x30, 0x00, 0xcc, 0xc0, 0xcc, 0xc0, 0x03, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '~'
];
