//! # Drawing primitives on top of any pixel surface
//!
//! This module implements the geometry layer of the crate: lines,
//! rectangles, progress bars and text. It holds no hardware state of its
//! own, everything funnels through [`DrawSurface::set_pixel`] so the same
//! code draws into the real panel framebuffer or into a plain in-memory
//! surface in tests.
//!
//! The typical workflow for (animated) graphics is:
//!  - clear the display buffer
//!  - wrap the display in a [`Gfx`] and draw "stuff" into the buffer
//!  - flush the buffer to the panel, it now gets visible
//!  - rinse and repeat
//!
//! All primitives take a [`PixelColor`] per call; `Toggle` XORs against
//! the current buffer content, which is handy for cursors and blinking
//! elements since drawing the same thing twice restores the background.

use crate::{font::Font, DrawSurface, PixelColor};

/// Rasterizer over a pixel surface.
///
/// Borrows or owns the surface (a `&mut Ssd1306<_>` works through the
/// blanket [`DrawSurface`] impl) and carries the current font for the
/// text primitives.
pub struct Gfx<S> {
    surface: S,
    font: Font<'static>,
}

impl<S: DrawSurface> Gfx<S> {
    /// Wrap a surface, starting out with the built-in 5x8 font.
    pub fn new(surface: S) -> Gfx<S> {
        Gfx {
            surface,
            font: Font::default(),
        }
    }

    /// Swap the font used by the text primitives. The table contents are
    /// not validated.
    pub fn set_font(&mut self, font: Font<'static>) {
        self.font = font;
    }

    /// The font currently used by the text primitives.
    pub fn font(&self) -> Font<'static> {
        self.font
    }

    /// Shared access to the wrapped surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the wrapped surface, e.g. for clearing it.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consume the rasterizer and hand the surface back.
    pub fn release(self) -> S {
        self.surface
    }

    /// Draw a line between two arbitrary points, endpoints inclusive.
    ///
    /// Integer-only Bresenham: the steep case swaps the axes so the major
    /// axis always iterates by one, then endpoints are ordered
    /// left-to-right and the error accumulator decides when the minor
    /// axis steps.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: PixelColor) {
        let (mut x0, mut y0, mut x1, mut y1) = (x0, y0, x1, y1);

        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            core::mem::swap(&mut x0, &mut y0);
            core::mem::swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            core::mem::swap(&mut x0, &mut x1);
            core::mem::swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let dy = (y1 - y0).abs();
        let mut err = dx / 2;
        let ystep = if y0 < y1 { 1 } else { -1 };
        let mut y = y0;

        for x in x0..=x1 {
            if steep {
                self.surface.set_pixel(y, x, color);
            } else {
                self.surface.set_pixel(x, y, color);
            }
            err -= dy;
            if err < 0 {
                y += ystep;
                err += dx;
            }
        }
    }

    /// Draw a horizontal line of `w` pixels starting at `(x, y)`.
    pub fn draw_horizontal_line(&mut self, x: i32, y: i32, w: u32, color: PixelColor) {
        self.draw_line(x, y, x + w as i32 - 1, y, color);
    }

    /// Draw a vertical line of `h` pixels starting at `(x, y)`.
    pub fn draw_vertical_line(&mut self, x: i32, y: i32, h: u32, color: PixelColor) {
        self.draw_line(x, y, x, y + h as i32 - 1, color);
    }

    /// Draw the outline of a `w` x `h` rectangle with `(x, y)` as its top
    /// left corner.
    ///
    /// All four edges run their full length, so every corner pixel is
    /// drawn twice. That is invisible with `On`/`Off` but cancels out
    /// under `Toggle`, leaving toggled outlines with untouched corners.
    pub fn draw_rectangle(&mut self, x: i32, y: i32, w: u32, h: u32, color: PixelColor) {
        self.draw_horizontal_line(x, y, w, color);
        self.draw_horizontal_line(x, y + h as i32 - 1, w, color);
        self.draw_vertical_line(x, y, h, color);
        self.draw_vertical_line(x + w as i32 - 1, y, h, color);
    }

    /// Fill a `w` x `h` rectangle, drawn as one vertical line per column.
    pub fn draw_filled_rectangle(&mut self, x: i32, y: i32, w: u32, h: u32, color: PixelColor) {
        for i in x..x + w as i32 {
            self.draw_vertical_line(i, y, h, color);
        }
    }

    /// Draw a progress bar: the full-size outline plus a fill covering
    /// `progress` percent of the width.
    ///
    /// `progress` is clamped to 100, so callers can pass raw sensor
    /// values without the fill ever overshooting the outline.
    pub fn draw_progress_bar(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        progress: u8,
        color: PixelColor,
    ) {
        let progress = if progress > 100 { 100 } else { progress };
        self.draw_rectangle(x, y, w, h, color);
        self.draw_filled_rectangle(x, y, w * progress as u32 / 100, h, color);
    }

    /// Draw a single character with its top left corner at `(x, y)`.
    ///
    /// Characters without a glyph in the current font (anything outside
    /// printable ASCII) are silently skipped.
    pub fn draw_char(&mut self, x: i32, y: i32, ch: char, color: PixelColor) {
        let glyph = match self.font.glyph(ch) {
            Some(glyph) => glyph,
            None => return,
        };
        let height = self.font.height();

        for (col, &column) in glyph.iter().enumerate() {
            let mut column = column;
            for row in 0..height {
                if column & 1 != 0 {
                    self.surface
                        .set_pixel(x + col as i32, y + row as i32, color);
                }
                column >>= 1;
            }
        }
    }

    /// Draw a string left to right starting at `(x, y)`.
    ///
    /// The cursor advances by a fixed glyph-width-plus-one per character,
    /// including skipped ones, so column alignment is stable.
    pub fn draw_string(&mut self, x: i32, y: i32, s: &str, color: PixelColor) {
        let advance = self.font.advance() as i32;
        let mut x = x;
        for ch in s.chars() {
            self.draw_char(x, y, ch, color);
            x += advance;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Gfx;
    use crate::font::Font;
    use crate::{DrawSurface, PixelColor};

    const W: usize = 128;
    const H: usize = 64;

    /// Plain in-memory surface, one bool per pixel.
    struct Canvas {
        pixels: [[bool; W]; H],
    }

    impl Canvas {
        fn new() -> Canvas {
            Canvas {
                pixels: [[false; W]; H],
            }
        }

        fn lit(&self) -> usize {
            self.pixels
                .iter()
                .map(|row| row.iter().filter(|&&p| p).count())
                .sum()
        }

        fn is_lit(&self, x: i32, y: i32) -> bool {
            self.pixels[y as usize][x as usize]
        }
    }

    impl DrawSurface for Canvas {
        fn set_pixel(&mut self, x: i32, y: i32, color: PixelColor) {
            if x < 0 || x >= W as i32 || y < 0 || y >= H as i32 {
                return;
            }
            let pixel = &mut self.pixels[y as usize][x as usize];
            match color {
                PixelColor::On => *pixel = true,
                PixelColor::Off => *pixel = false,
                PixelColor::Toggle => *pixel = !*pixel,
            }
        }

        fn width(&self) -> u32 {
            W as u32
        }

        fn height(&self) -> u32 {
            H as u32
        }
    }

    #[test]
    fn horizontal_line_sets_exactly_its_pixels() {
        let mut gfx = Gfx::new(Canvas::new());
        gfx.draw_horizontal_line(0, 0, 10, PixelColor::On);

        let canvas = gfx.release();
        for x in 0..10 {
            assert!(canvas.is_lit(x, 0), "missing ({}, 0)", x);
        }
        assert_eq!(canvas.lit(), 10);
    }

    #[test]
    fn vertical_line_sets_exactly_its_pixels() {
        let mut gfx = Gfx::new(Canvas::new());
        gfx.draw_vertical_line(5, 2, 4, PixelColor::On);

        let canvas = gfx.release();
        for y in 2..6 {
            assert!(canvas.is_lit(5, y), "missing (5, {})", y);
        }
        assert_eq!(canvas.lit(), 4);
    }

    #[test]
    fn exact_diagonal_hits_every_step() {
        let mut gfx = Gfx::new(Canvas::new());
        gfx.draw_line(0, 0, 3, 3, PixelColor::On);

        let canvas = gfx.release();
        for i in 0..4 {
            assert!(canvas.is_lit(i, i), "missing ({}, {})", i, i);
        }
        assert_eq!(canvas.lit(), 4);
    }

    #[test]
    fn steep_line_swaps_axes() {
        let mut gfx = Gfx::new(Canvas::new());
        gfx.draw_line(0, 0, 2, 6, PixelColor::On);

        // worked through the error accumulator by hand
        let expected = [(0, 0), (0, 1), (1, 2), (1, 3), (1, 4), (2, 5), (2, 6)];

        let canvas = gfx.release();
        for &(x, y) in expected.iter() {
            assert!(canvas.is_lit(x, y), "missing ({}, {})", x, y);
        }
        assert_eq!(canvas.lit(), expected.len());
    }

    #[test]
    fn line_direction_does_not_matter() {
        let mut forward = Gfx::new(Canvas::new());
        forward.draw_line(0, 0, 9, 4, PixelColor::On);

        let mut backward = Gfx::new(Canvas::new());
        backward.draw_line(9, 4, 0, 0, PixelColor::On);

        let forward = forward.release();
        let backward = backward.release();
        for y in 0..H {
            for x in 0..W {
                assert_eq!(
                    forward.pixels[y][x], backward.pixels[y][x],
                    "mismatch at ({}, {})",
                    x, y
                );
            }
        }
    }

    #[test]
    fn rectangle_outline_is_a_perimeter() {
        let mut gfx = Gfx::new(Canvas::new());
        gfx.draw_rectangle(1, 1, 4, 3, PixelColor::On);

        let canvas = gfx.release();
        // 2*4 + 2*3 minus the 4 double-drawn corners
        assert_eq!(canvas.lit(), 10);
        assert!(canvas.is_lit(1, 1));
        assert!(canvas.is_lit(4, 1));
        assert!(canvas.is_lit(1, 3));
        assert!(canvas.is_lit(4, 3));
        assert!(!canvas.is_lit(2, 2));
    }

    #[test]
    fn toggled_rectangle_cancels_its_corners() {
        let mut gfx = Gfx::new(Canvas::new());
        gfx.draw_rectangle(1, 1, 4, 3, PixelColor::Toggle);

        let canvas = gfx.release();
        // corners are drawn twice, so the XOR leaves them dark
        assert!(!canvas.is_lit(1, 1));
        assert!(!canvas.is_lit(4, 1));
        assert!(!canvas.is_lit(1, 3));
        assert!(!canvas.is_lit(4, 3));
        assert!(canvas.is_lit(2, 1));
        assert_eq!(canvas.lit(), 6);
    }

    #[test]
    fn filled_rectangle_covers_the_area() {
        let mut gfx = Gfx::new(Canvas::new());
        gfx.draw_filled_rectangle(2, 3, 5, 4, PixelColor::On);

        let canvas = gfx.release();
        assert_eq!(canvas.lit(), 5 * 4);
        for y in 3..7 {
            for x in 2..7 {
                assert!(canvas.is_lit(x, y), "missing ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn progress_bar_fills_half_at_fifty_percent() {
        let mut gfx = Gfx::new(Canvas::new());
        gfx.draw_progress_bar(0, 0, 100, 10, 50, PixelColor::On);

        let canvas = gfx.release();
        // column 49 is the last filled one, column 50 only carries the
        // outline's top and bottom edges
        assert!(canvas.is_lit(49, 5));
        assert!(!canvas.is_lit(50, 5));
        assert!(canvas.is_lit(50, 0));
        assert!(canvas.is_lit(50, 9));
    }

    #[test]
    fn progress_bar_clamps_overshoot() {
        let mut clamped = Gfx::new(Canvas::new());
        clamped.draw_progress_bar(0, 0, 100, 10, 250, PixelColor::On);

        let mut full = Gfx::new(Canvas::new());
        full.draw_progress_bar(0, 0, 100, 10, 100, PixelColor::On);

        let clamped = clamped.release();
        let full = full.release();
        assert_eq!(clamped.lit(), full.lit());
        assert!(clamped.is_lit(99, 5));
    }

    #[test]
    fn char_blits_its_glyph_columns() {
        let mut gfx = Gfx::new(Canvas::new());
        // '|' is a single full column: 0x00 0x00 0x7F 0x00 0x00
        gfx.draw_char(0, 0, '|', PixelColor::On);

        let canvas = gfx.release();
        for y in 0..7 {
            assert!(canvas.is_lit(2, y), "missing (2, {})", y);
        }
        assert_eq!(canvas.lit(), 7);
    }

    #[test]
    fn unsupported_chars_are_skipped() {
        let mut gfx = Gfx::new(Canvas::new());
        gfx.draw_char(0, 0, '\n', PixelColor::On);
        gfx.draw_char(0, 0, '€', PixelColor::On);
        assert_eq!(gfx.release().lit(), 0);
    }

    #[test]
    fn string_advances_by_fixed_width() {
        let mut gfx = Gfx::new(Canvas::new());
        gfx.draw_string(0, 0, "||", PixelColor::On);

        let canvas = gfx.release();
        // second bar sits one advance (5 + 1) to the right
        for y in 0..7 {
            assert!(canvas.is_lit(2, y));
            assert!(canvas.is_lit(8, y));
        }
        assert_eq!(canvas.lit(), 14);
    }

    #[test]
    fn skipped_chars_still_advance_the_cursor() {
        let mut with_gap = Gfx::new(Canvas::new());
        with_gap.draw_string(0, 0, "|\t|", PixelColor::On);

        let canvas = with_gap.release();
        assert!(canvas.is_lit(2, 0));
        assert!(canvas.is_lit(14, 0));
        assert_eq!(canvas.lit(), 14);
    }

    #[test]
    fn swapped_font_changes_layout() {
        // single-column font: every glyph is one 0x01 byte (top pixel)
        static NARROW: [u8; 2 + 95] = {
            let mut table = [0x01u8; 2 + 95];
            table[0] = 8;
            table[1] = 1;
            table
        };

        let mut gfx = Gfx::new(Canvas::new());
        gfx.set_font(Font::new(&NARROW));
        assert_eq!(gfx.font().advance(), 2);

        gfx.draw_string(0, 0, "AB", PixelColor::On);
        let canvas = gfx.release();
        assert!(canvas.is_lit(0, 0));
        assert!(canvas.is_lit(2, 0));
        assert_eq!(canvas.lit(), 2);
    }

    #[test]
    fn drawing_twice_with_toggle_restores_the_canvas() {
        let mut gfx = Gfx::new(Canvas::new());
        gfx.draw_line(0, 0, 20, 11, PixelColor::Toggle);
        gfx.draw_string(3, 20, "involution", PixelColor::Toggle);
        assert_ne!(gfx.surface().lit(), 0);

        gfx.draw_line(0, 0, 20, 11, PixelColor::Toggle);
        gfx.draw_string(3, 20, "involution", PixelColor::Toggle);
        assert_eq!(gfx.release().lit(), 0);
    }

    #[test]
    fn out_of_bounds_drawing_is_clipped_not_wrapped() {
        let mut gfx = Gfx::new(Canvas::new());
        gfx.draw_line(120, 60, 140, 70, PixelColor::On);
        gfx.draw_string(125, 0, "x", PixelColor::On);

        let canvas = gfx.release();
        // everything that landed is inside the surface; nothing wrapped
        // around to the left edge
        for y in 0..H {
            assert!(!canvas.is_lit(0, y as i32));
        }
    }
}
