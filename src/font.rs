//! # Font handling for the drawing layer
//!
//! Fonts are consumed as flat byte tables in a fixed format: byte 0 is the
//! glyph height in bits, byte 1 the glyph width in bytes (which equals the
//! number of pixel columns, every column is one byte), and from byte 2 on
//! the glyph data follows, `width` bytes per glyph, one glyph per
//! printable ASCII code starting at 0x20.
//!
//! Each glyph byte is a vertical line of 8 pixels, LSB on top, the same
//! packing the framebuffer uses.
//!
//! Instead of re-deriving the shape from the header bytes on every
//! character draw, the table is wrapped once into a [`Font`] descriptor at
//! load time. The table contents are never validated beyond the range
//! check on lookup, a garbage table draws garbage.

/// Typed view on a flat font table.
#[derive(Debug, Clone, Copy)]
pub struct Font<'a> {
    height: u8,
    width: u8,
    data: &'a [u8],
}

impl<'a> Font<'a> {
    /// Wrap a raw font table. The table must carry the two header bytes;
    /// the glyph data is taken as-is.
    pub fn new(table: &'a [u8]) -> Font<'a> {
        Font {
            height: table[0],
            width: table[1],
            data: &table[2..],
        }
    }

    /// Glyph height in pixel rows.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Glyph width in pixel columns (= bytes per glyph).
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Horizontal cursor advance per character: glyph width plus one
    /// column of spacing, regardless of glyph content.
    pub fn advance(&self) -> u8 {
        self.width + 1
    }

    /// Look up the column bytes of a character.
    ///
    /// Returns `None` for anything outside the printable ASCII range
    /// 0x20..=0x7E or past the end of the table; callers skip those
    /// silently.
    pub fn glyph(&self, ch: char) -> Option<&'a [u8]> {
        let code = ch as u32;
        if !(0x20..=0x7E).contains(&code) {
            return None;
        }
        let stride = self.width as usize;
        let start = (code as usize - 0x20) * stride;
        self.data.get(start..start + stride)
    }
}

impl<'a> Default for Font<'a> {
    fn default() -> Font<'a> {
        Font::new(FONT_5X8)
    }
}

/// The built-in 5x8 font covering printable ASCII, in the flat table
/// format described in the module docs.
///
/// No, it's not unicode, but an ASCII subset. It gets the job done and
/// looks nice.
#[rustfmt::skip]
pub const FONT_5X8: &[u8] = &[
    8, 5, // glyph height in bits, glyph width in bytes
    0x00, 0x00, 0x00, 0x00, 0x00, // ' '
    0x00, 0x00, 0x5f, 0x00, 0x00, // '!'
    0x00, 0x07, 0x00, 0x07, 0x00, // '"'
    0x14, 0x7f, 0x14, 0x7f, 0x14, // '#'
    0x24, 0x2a, 0x7f, 0x2a, 0x12, // '$'
    0x23, 0x13, 0x08, 0x64, 0x62, // '%'
    0x36, 0x49, 0x55, 0x22, 0x50, // '&'
    0x00, 0x05, 0x03, 0x00, 0x00, // '\''
    0x00, 0x1c, 0x22, 0x41, 0x00, // '('
    0x00, 0x41, 0x22, 0x1c, 0x00, // ')'
    0x14, 0x08, 0x3e, 0x08, 0x14, // '*'
    0x08, 0x08, 0x3e, 0x08, 0x08, // '+'
    0x00, 0x50, 0x30, 0x00, 0x00, // ','
    0x08, 0x08, 0x08, 0x08, 0x08, // '-'
    0x00, 0x60, 0x60, 0x00, 0x00, // '.'
    0x20, 0x10, 0x08, 0x04, 0x02, // '/'
    0x3e, 0x51, 0x49, 0x45, 0x3e, // '0'
    0x00, 0x42, 0x7f, 0x40, 0x00, // '1'
    0x42, 0x61, 0x51, 0x49, 0x46, // '2'
    0x21, 0x41, 0x45, 0x4b, 0x31, // '3'
    0x18, 0x14, 0x12, 0x7f, 0x10, // '4'
    0x27, 0x45, 0x45, 0x45, 0x39, // '5'
    0x3c, 0x4a, 0x49, 0x49, 0x30, // '6'
    0x01, 0x71, 0x09, 0x05, 0x03, // '7'
    0x36, 0x49, 0x49, 0x49, 0x36, // '8'
    0x06, 0x49, 0x49, 0x29, 0x1e, // '9'
    0x00, 0x36, 0x36, 0x00, 0x00, // ':'
    0x00, 0x56, 0x36, 0x00, 0x00, // ';'
    0x08, 0x14, 0x22, 0x41, 0x00, // '<'
    0x14, 0x14, 0x14, 0x14, 0x14, // '='
    0x00, 0x41, 0x22, 0x14, 0x08, // '>'
    0x02, 0x01, 0x51, 0x09, 0x06, // '?'
    0x32, 0x49, 0x79, 0x41, 0x3e, // '@'
    0x7e, 0x11, 0x11, 0x11, 0x7e, // 'A'
    0x7f, 0x49, 0x49, 0x49, 0x36, // 'B'
    0x3e, 0x41, 0x41, 0x41, 0x22, // 'C'
    0x7f, 0x41, 0x41, 0x22, 0x1c, // 'D'
    0x7f, 0x49, 0x49, 0x49, 0x41, // 'E'
    0x7f, 0x09, 0x09, 0x09, 0x01, // 'F'
    0x3e, 0x41, 0x49, 0x49, 0x7a, // 'G'
    0x7f, 0x08, 0x08, 0x08, 0x7f, // 'H'
    0x00, 0x41, 0x7f, 0x41, 0x00, // 'I'
    0x20, 0x40, 0x41, 0x3f, 0x01, // 'J'
    0x7f, 0x08, 0x14, 0x22, 0x41, // 'K'
    0x7f, 0x40, 0x40, 0x40, 0x40, // 'L'
    0x7f, 0x02, 0x0c, 0x02, 0x7f, // 'M'
    0x7f, 0x04, 0x08, 0x10, 0x7f, // 'N'
    0x3e, 0x41, 0x41, 0x41, 0x3e, // 'O'
    0x7f, 0x09, 0x09, 0x09, 0x06, // 'P'
    0x3e, 0x41, 0x51, 0x21, 0x5e, // 'Q'
    0x7f, 0x09, 0x19, 0x29, 0x46, // 'R'
    0x46, 0x49, 0x49, 0x49, 0x31, // 'S'
    0x01, 0x01, 0x7f, 0x01, 0x01, // 'T'
    0x3f, 0x40, 0x40, 0x40, 0x3f, // 'U'
    0x1f, 0x20, 0x40, 0x20, 0x1f, // 'V'
    0x3f, 0x40, 0x38, 0x40, 0x3f, // 'W'
    0x63, 0x14, 0x08, 0x14, 0x63, // 'X'
    0x07, 0x08, 0x70, 0x08, 0x07, // 'Y'
    0x61, 0x51, 0x49, 0x45, 0x43, // 'Z'
    0x00, 0x7f, 0x41, 0x41, 0x00, // '['
    0x02, 0x04, 0x08, 0x10, 0x20, // '\'
    0x00, 0x41, 0x41, 0x7f, 0x00, // ']'
    0x04, 0x02, 0x01, 0x02, 0x04, // '^'
    0x40, 0x40, 0x40, 0x40, 0x40, // '_'
    0x00, 0x01, 0x02, 0x04, 0x00, // '`'
    0x20, 0x54, 0x54, 0x54, 0x78, // 'a'
    0x7f, 0x48, 0x44, 0x44, 0x38, // 'b'
    0x38, 0x44, 0x44, 0x44, 0x20, // 'c'
    0x38, 0x44, 0x44, 0x48, 0x7f, // 'd'
    0x38, 0x54, 0x54, 0x54, 0x18, // 'e'
    0x08, 0x7e, 0x09, 0x01, 0x02, // 'f'
    0x0c, 0x52, 0x52, 0x52, 0x3e, // 'g'
    0x7f, 0x08, 0x04, 0x04, 0x78, // 'h'
    0x00, 0x44, 0x7d, 0x40, 0x00, // 'i'
    0x20, 0x40, 0x44, 0x3d, 0x00, // 'j'
    0x7f, 0x10, 0x28, 0x44, 0x00, // 'k'
    0x00, 0x41, 0x7f, 0x40, 0x00, // 'l'
    0x7c, 0x04, 0x18, 0x04, 0x78, // 'm'
    0x7c, 0x08, 0x04, 0x04, 0x78, // 'n'
    0x38, 0x44, 0x44, 0x44, 0x38, // 'o'
    0x7c, 0x14, 0x14, 0x14, 0x08, // 'p'
    0x08, 0x14, 0x14, 0x18, 0x7c, // 'q'
    0x7c, 0x08, 0x04, 0x04, 0x08, // 'r'
    0x48, 0x54, 0x54, 0x54, 0x20, // 's'
    0x04, 0x3f, 0x44, 0x40, 0x20, // 't'
    0x3c, 0x40, 0x40, 0x20, 0x7c, // 'u'
    0x1c, 0x20, 0x40, 0x20, 0x1c, // 'v'
    0x3c, 0x40, 0x30, 0x40, 0x3c, // 'w'
    0x44, 0x28, 0x10, 0x28, 0x44, // 'x'
    0x0c, 0x50, 0x50, 0x50, 0x3c, // 'y'
    0x44, 0x64, 0x54, 0x4c, 0x44, // 'z'
    0x00, 0x08, 0x36, 0x41, 0x00, // '{'
    0x00, 0x00, 0x7f, 0x00, 0x00, // '|'
    0x00, 0x41, 0x36, 0x08, 0x00, // '}'
    0x04, 0x02, 0x04, 0x08, 0x04, // '~'
];

#[cfg(test)]
mod tests {
    use super::{Font, FONT_5X8};

    #[test]
    fn header_bytes_become_the_descriptor() {
        let font = Font::new(FONT_5X8);
        assert_eq!(font.height(), 8);
        assert_eq!(font.width(), 5);
        assert_eq!(font.advance(), 6);
    }

    #[test]
    fn table_covers_all_printable_ascii() {
        // 95 glyphs from 0x20 to 0x7E, plus the two header bytes
        assert_eq!(FONT_5X8.len(), 2 + 95 * 5);

        let font = Font::new(FONT_5X8);
        for code in 0x20u8..=0x7E {
            assert!(font.glyph(code as char).is_some(), "missing {:#04x}", code);
        }
    }

    #[test]
    fn glyph_lookup_indexes_by_stride() {
        let font = Font::new(FONT_5X8);
        assert_eq!(font.glyph(' '), Some(&[0x00u8; 5][..]));
        assert_eq!(font.glyph('!'), Some(&[0x00, 0x00, 0x5f, 0x00, 0x00][..]));
        assert_eq!(font.glyph('A'), Some(&[0x7e, 0x11, 0x11, 0x11, 0x7e][..]));
    }

    #[test]
    fn unsupported_characters_have_no_glyph() {
        let font = Font::new(FONT_5X8);
        assert_eq!(font.glyph('\n'), None);
        assert_eq!(font.glyph('\u{1F}'), None);
        assert_eq!(font.glyph('\u{7F}'), None);
        assert_eq!(font.glyph('€'), None);
    }

    #[test]
    fn custom_table_is_taken_as_is() {
        // 2x2 "font" with one glyph worth of data for ' ' and '!'
        let table = [2u8, 2, 0xAA, 0xBB, 0xCC, 0xDD];
        let font = Font::new(&table);
        assert_eq!(font.height(), 2);
        assert_eq!(font.width(), 2);
        assert_eq!(font.glyph(' '), Some(&[0xAA, 0xBB][..]));
        assert_eq!(font.glyph('!'), Some(&[0xCC, 0xDD][..]));
        // past the end of the short table
        assert_eq!(font.glyph('"'), None);
    }
}
