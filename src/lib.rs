//! # Driver library for SSD1306 OLED panels
//!
//! This crate talks to SSD1306-class monochrome OLED controllers over a
//! two-wire (I2C) bus, using `embedded_hal` as the abstraction layer. It
//! keeps a packed 1-bit framebuffer in memory, lets you draw into it with
//! pixel/line/rectangle/text primitives, and sends the whole buffer to the
//! panel with an explicit flush.
//!
//! Two panel families are supported, the common 128x64 modules and the
//! half-height 128x32 ones. Both share the same 64-row GDDRAM layout, the
//! 128x32 panels are handled through a row-doubling address transform in
//! the pixel addressing (see [`display`]).
//!
//! The typical workflow is:
//!  - create an [`Ssd1306`] from an I2C bus, a device address and a
//!    [`DisplaySize`]; this runs the whole bring-up sequence and leaves the
//!    panel powered on and blank
//!  - wrap it in a [`Gfx`] and draw "stuff" (lines, text, progress bars)
//!  - flush the framebuffer to the panel, it now gets visible
//!  - rinse and repeat, so clear and draw and flush and clear and draw and...
//!
//! Drawing and bus I/O are deliberately split: [`Gfx`] only knows the
//! [`DrawSurface`] trait, so all the geometry code can be exercised against
//! a plain in-memory surface without any bus at all.
//!
//! Everything is blocking and single-threaded; there is no background
//! refresh and no dirty tracking, the panel keeps showing whatever was
//! flushed last.

#![no_std]

extern crate embedded_hal as hal;

pub mod command;
pub mod display;
pub mod dummybus;
pub mod error;
pub mod font;
pub mod gfx;

#[cfg(feature = "graphics")]
pub mod drawtarget;

pub use crate::display::Ssd1306;
pub use crate::font::Font;
pub use crate::gfx::Gfx;

/// Number of pixel columns, identical for both supported panel families.
pub const WIDTH: usize = 128;

/// Number of GDDRAM rows. The controller RAM is always 8 pages deep, even
/// on panels that only expose 32 active rows.
pub const RAM_HEIGHT: usize = 64;

/// Size of the packed framebuffer in bytes (one bit per GDDRAM pixel).
pub const BUFFER_SIZE: usize = WIDTH * RAM_HEIGHT / 8;

/// The common I2C address of SSD1306 breakout modules.
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// The supported panel geometries.
///
/// Both variants drive the same controller RAM; they differ in how many
/// rows are physically present and therefore in how logical rows map onto
/// RAM rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplaySize {
    /// 128x64 panel, rows map 1:1 onto GDDRAM rows.
    W128xH64,
    /// 128x32 panel, multiplexed onto every other GDDRAM row.
    W128xH32,
}

impl DisplaySize {
    /// Display width in pixels.
    pub fn width(self) -> u32 {
        WIDTH as u32
    }

    /// Active display height in pixels.
    pub fn height(self) -> u32 {
        match self {
            DisplaySize::W128xH64 => 64,
            DisplaySize::W128xH32 => 32,
        }
    }
}

/// What to do with a pixel that gets drawn.
///
/// There is no persistent "current color", every drawing call carries its
/// own `PixelColor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelColor {
    /// Light the pixel up.
    On,
    /// Switch the pixel off.
    Off,
    /// Invert whatever the pixel currently is (XOR). Applying it twice
    /// restores the original value.
    Toggle,
}

/// Segment remap and COM scan direction of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Column 0 at segment 0, scan from COM0 upwards.
    Normal,
    /// Mirrored mapping, the usual orientation of the cheap breakout
    /// modules. This is what the bring-up sequence configures.
    Flipped,
}

/// A mutable pixel surface, the seam between the rasterizer and the
/// hardware buffer.
///
/// [`Ssd1306`] implements this on top of its packed framebuffer; tests
/// implement it with plain arrays. Out-of-range coordinates must be
/// silently ignored by implementations.
pub trait DrawSurface {
    /// Set, clear or toggle the pixel at `(x, y)`. Coordinates outside
    /// `0..width` x `0..height` are dropped without signal.
    fn set_pixel(&mut self, x: i32, y: i32, color: PixelColor);

    /// Width of the surface in pixels.
    fn width(&self) -> u32;

    /// Active height of the surface in pixels.
    fn height(&self) -> u32;
}

impl<'a, S: DrawSurface> DrawSurface for &'a mut S {
    fn set_pixel(&mut self, x: i32, y: i32, color: PixelColor) {
        (**self).set_pixel(x, y, color)
    }

    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }
}
