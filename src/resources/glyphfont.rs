//! Fixed-grid bitmap font.
//!
//! The font image holds 8x8 glyphs, 32 per row and 7 rows, with 4 pixels of
//! padding under each row. The first glyph is ASCII space; any byte outside
//! the sheet is drawn as `?`. Text is drawn at twice the glyph size and `\n`
//! starts a new line.

use raylib::prelude::Rectangle;

pub const GLYPH_WIDTH: f32 = 8.0;
pub const GLYPH_HEIGHT: f32 = 8.0;
pub const GLYPH_PAD_H: f32 = 0.0;
pub const GLYPH_PAD_V: f32 = 4.0;
pub const FONT_COLS: u32 = 32;
pub const FONT_ROWS: u32 = 7;
pub const GLYPH_START: u8 = b' ';
pub const FONT_SCALE: f32 = 2.0;

const GLYPH_COUNT: u32 = FONT_COLS * FONT_ROWS;
const FALLBACK: u8 = b'?';

/// A bitmap font whose sheet lives in the texture store under `tex_key`.
#[derive(Debug, Clone)]
pub struct GlyphFont {
    pub tex_key: String,
}

/// One glyph to draw: where it comes from on the sheet and where it goes.
#[derive(Debug, Clone, Copy)]
pub struct PlacedGlyph {
    pub src: Rectangle,
    pub dst: Rectangle,
}

impl GlyphFont {
    pub fn new(tex_key: impl Into<String>) -> Self {
        Self {
            tex_key: tex_key.into(),
        }
    }

    /// Source rectangle of a byte on the font sheet.
    pub fn glyph_rect(byte: u8) -> Rectangle {
        let index = glyph_index(byte);
        Rectangle {
            x: ((GLYPH_WIDTH + GLYPH_PAD_H) * index as f32) % (FONT_COLS as f32 * GLYPH_WIDTH),
            y: (index / FONT_COLS) as f32 * (GLYPH_HEIGHT + GLYPH_PAD_V),
            width: GLYPH_WIDTH,
            height: GLYPH_HEIGHT,
        }
    }

    /// Lay out `text` with its top-left corner at `(x, y)`.
    pub fn layout(text: &str, x: f32, y: f32) -> Vec<PlacedGlyph> {
        let mut placed = Vec::with_capacity(text.len());
        let mut offset_x = 0.0;
        let mut offset_y = 0.0;
        for byte in text.bytes() {
            if byte == b'\n' {
                offset_x = 0.0;
                offset_y += Self::line_height();
                continue;
            }
            let src = Self::glyph_rect(byte);
            let dst = Rectangle {
                x: x + offset_x,
                y: y + offset_y,
                width: src.width * FONT_SCALE,
                height: src.height * FONT_SCALE,
            };
            offset_x += dst.width + GLYPH_PAD_H;
            placed.push(PlacedGlyph { src, dst });
        }
        placed
    }

    /// Distance between two baselines on screen.
    pub fn line_height() -> f32 {
        (GLYPH_HEIGHT + GLYPH_PAD_V) * FONT_SCALE
    }

    /// Width and height of `text` on screen.
    pub fn measure(text: &str) -> (f32, f32) {
        let advance = GLYPH_WIDTH * FONT_SCALE + GLYPH_PAD_H;
        // Same line breaks as `layout`: only '\n' ends a line.
        let widest = text.split('\n').map(str::len).max().unwrap_or(0);
        let lines = text.split('\n').count();
        (
            widest as f32 * advance,
            (lines as f32 - 1.0) * Self::line_height() + GLYPH_HEIGHT * FONT_SCALE,
        )
    }
}

fn glyph_index(byte: u8) -> u32 {
    let index = byte.wrapping_sub(GLYPH_START) as u32;
    if byte >= GLYPH_START && index < GLYPH_COUNT {
        index
    } else {
        (FALLBACK - GLYPH_START) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_space_is_first_glyph() {
        let r = GlyphFont::glyph_rect(b' ');
        assert!(approx_eq(r.x, 0.0));
        assert!(approx_eq(r.y, 0.0));
        assert!(approx_eq(r.width, 8.0));
        assert!(approx_eq(r.height, 8.0));
    }

    #[test]
    fn test_second_row_includes_padding() {
        // 'A' is index 33: second row, second column.
        let r = GlyphFont::glyph_rect(b'A');
        assert!(approx_eq(r.x, 8.0));
        assert!(approx_eq(r.y, 12.0));
    }

    #[test]
    fn test_control_bytes_fall_back_to_question_mark() {
        let q = GlyphFont::glyph_rect(b'?');
        let r = GlyphFont::glyph_rect(0x07);
        assert!(approx_eq(r.x, q.x));
        assert!(approx_eq(r.y, q.y));
    }

    #[test]
    fn test_layout_advances_and_breaks_lines() {
        let placed = GlyphFont::layout("ab\nc", 100.0, 50.0);
        assert_eq!(placed.len(), 3);
        assert!(approx_eq(placed[0].dst.x, 100.0));
        assert!(approx_eq(placed[1].dst.x, 116.0));
        assert!(approx_eq(placed[1].dst.width, 16.0));
        assert!(approx_eq(placed[2].dst.x, 100.0));
        assert!(approx_eq(placed[2].dst.y, 74.0));
    }

    #[test]
    fn test_measure_two_lines() {
        let (w, h) = GlyphFont::measure("testing!\nthis is a test...");
        assert!(approx_eq(w, 17.0 * 16.0));
        assert!(approx_eq(h, 24.0 + 16.0));
    }

    #[test]
    fn test_measure_matches_layout_with_carriage_returns() {
        let text = "ab\r\nc";
        let (w, h) = GlyphFont::measure(text);
        let placed = GlyphFont::layout(text, 0.0, 0.0);
        let right = placed
            .iter()
            .map(|g| g.dst.x + g.dst.width + GLYPH_PAD_H)
            .fold(0.0_f32, f32::max);
        let bottom = placed
            .iter()
            .map(|g| g.dst.y + g.dst.height)
            .fold(0.0_f32, f32::max);
        // "ab\r" is three glyphs wide, like its laid out row.
        assert!(approx_eq(w, 3.0 * 16.0));
        assert!(approx_eq(w, right));
        assert!(approx_eq(h, bottom));
    }
}
