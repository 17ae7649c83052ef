//! # Small module to provide a "fake" bus
//!
//! This is used when driver code should run without real hardware, for
//! example in the shipped demo or in unit tests of the drawing code.
//!
//! Just construct a driver on top of a [`DummyI2c`] and it will behave as
//! if a panel acknowledged every transaction, but will actually do
//! nothing.

use hal::blocking::i2c::Write as I2cWrite;

/// Provides a dummy I2C bus that accepts and discards every write.
///
/// Very usable to exercise the framebuffer and drawing paths on a host
/// machine where no panel is attached.
#[derive(Debug, Clone, Copy)]
pub struct DummyI2c;

impl I2cWrite for DummyI2c {
    type Error = core::convert::Infallible;

    fn write(&mut self, _address: u8, _bytes: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }
}
