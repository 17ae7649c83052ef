//! embedded-graphics integration for the SSD1306 driver
//!
//! This module is behind the "graphics" feature flag. By implementing the
//! `DrawTarget` trait the complete embedded_graphics library becomes
//! usable on the panel: circles, styled text, images and TrueType fonts
//! all end up in the same framebuffer the crate's own primitives draw
//! into, and become visible on the next flush.

use core::convert::TryInto;

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
    Pixel,
};
use hal::blocking::i2c::Write as I2cWrite;

use crate::{display::Ssd1306, PixelColor};

impl<I2C, E> DrawTarget for Ssd1306<I2C>
where
    I2C: I2cWrite<Error = E>,
{
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let max_x = self.width() - 1;
        let max_y = self.height() - 1;

        for Pixel(coord, color) in pixels {
            let point: Result<(u32, u32), _> = coord.try_into();
            if let Ok((x, y)) = point {
                if x <= max_x && y <= max_y {
                    let color = match color {
                        BinaryColor::On => PixelColor::On,
                        BinaryColor::Off => PixelColor::Off,
                    };
                    self.set_pixel(x as i32, y as i32, color);
                }
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: BinaryColor) -> Result<(), Self::Error> {
        let color = match color {
            BinaryColor::On => PixelColor::On,
            BinaryColor::Off => PixelColor::Off,
        };
        Ssd1306::clear(self, color);
        Ok(())
    }
}

impl<I2C, E> OriginDimensions for Ssd1306<I2C>
where
    I2C: I2cWrite<Error = E>,
{
    // the size embedded_graphics operates on is the active panel area,
    // not the full GDDRAM
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}
