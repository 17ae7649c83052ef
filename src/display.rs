//! # Main driver module for the SSD1306
//!
//! In here most of the data structures and functions care about owning the
//! packed framebuffer, keeping a shadow of the display status and sending
//! raw bytes to the device over the two-wire bus.
//!
//! This module exports the main Ssd1306 struct. To use the driver, make a
//! Ssd1306::new() and call the methods on that. Users typically only use
//! the "set" commands to (re)configure the display; the drawing primitives
//! live in the [`crate::gfx`] module and reach this driver through the
//! [`DrawSurface`] trait.
//!
//! Typically you want to look into the following functions:
//!  - Ssd1306::new() to create a new driver instance (this runs the whole
//!    bring-up sequence, see below)
//!  - Ssd1306::flush() to make the framebuffer content visible
//!  - Ssd1306::set_contrast() to change the brightness of the panel
//!
//! The SSD1306 is write-only over I2C in this configuration, so the driver
//! never reads anything back; power, contrast, orientation and invert are
//! tracked as a local shadow of whatever was last commanded.

use hal::blocking::i2c::Write as I2cWrite;
use log::debug;

use crate::{
    command::prelude::*,
    error::Error,
    DisplaySize, DrawSurface, Orientation, PixelColor, BUFFER_SIZE, WIDTH,
};

/// Control prefix for a command byte, per the controller's wire convention.
const CONTROL_COMMAND: u8 = 0x00;
/// Control prefix for bulk GDDRAM data.
const CONTROL_DATA: u8 = 0x40;

#[derive(Debug)]
/// Driver for one SSD1306 panel on one bus address.
///
/// Owns the packed framebuffer and the bus handle. Several panels on
/// different addresses are simply several independent instances.
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    size: DisplaySize,
    buffer: [u8; BUFFER_SIZE],
    powered: bool,
    orientation: Orientation,
    inverted: bool,
    contrast: u8,
}

impl<I2C, E> Ssd1306<I2C>
where
    I2C: I2cWrite<Error = E>,
{
    /// Create a new instance of the SSD1306 driver and bring the panel up.
    ///
    /// Arguments:
    ///
    /// - i2c: a working blocking I2C bus implementing `Write`
    /// - address: the 7-bit device address, usually [`crate::DEFAULT_ADDRESS`]
    /// - size: the panel geometry, see [`DisplaySize`]
    ///
    /// The controller powers up in an undefined state, so this immediately
    /// runs the full bring-up sequence, clears the framebuffer and flushes
    /// it. On return the panel is powered on and blank. A bus failure
    /// anywhere in the sequence aborts construction.
    ///
    /// The bring-up never runs again for the lifetime of the instance; if
    /// the panel is power-cycled externally the caller has to construct a
    /// fresh driver. Dropping the driver does not power the panel down
    /// either, that is the caller's call to make via `set_power(false)`.
    pub fn new(i2c: I2C, address: u8, size: DisplaySize) -> Result<Ssd1306<I2C>, Error<E>> {
        debug!("creating new Ssd1306 instance at address {:#04x}", address);

        let mut display = Ssd1306 {
            i2c,
            address,
            size,
            buffer: [0u8; BUFFER_SIZE],
            powered: false,
            orientation: Orientation::Normal,
            inverted: false,
            contrast: 0,
        };

        // write the initial configuration, order is controller-mandated
        for command in display.bring_up_sequence().iter() {
            display.command(*command)?;
        }

        // mirror what the sequence just configured
        display.powered = true;
        display.orientation = Orientation::Flipped;
        display.inverted = false;
        display.contrast = 0xFF;

        // start from a blank, known screen content
        display.clear(PixelColor::Off);
        display.flush()?;

        Ok(display)
    }

    // The pre-programmed bring-up sequence. The addressing setup, the
    // analog parameters (clock, pre-charge, VCOM) and the charge pump
    // enable have to go out in exactly this order before the panel is
    // switched on; 0x3F/0x12 covers both supported glasses because the
    // 128x32 ones are addressed through the row doubling in set_pixel().
    fn bring_up_sequence(&self) -> [Command; 18] {
        [
            DisplayOn(false),
            LowColumn(0),
            HighColumn(0),
            StartLine(0),
            MemoryMode(0x00),
            Contrast(0xFF),
            SegmentRemap(Orientation::Flipped),
            ComScanDirection(Orientation::Flipped),
            Invert(false),
            Multiplex(0x3F),
            DisplayOffset(0x00),
            ClockDivider(0x80),
            Precharge(0x22),
            ComPins(0x12),
            VcomDetect(0x40),
            ChargePump(0x14),
            AllOnResume,
            DisplayOn(true),
        ]
    }

    /// Send a single command to the controller.
    ///
    /// Every opcode byte is framed in its own two-byte bus write with the
    /// command control prefix, the controller treats consecutive command
    /// frames as one logical command.
    pub fn command(&mut self, command: Command) -> Result<(), Error<E>> {
        let (bytes, len) = command.bytes();
        for &byte in &bytes[..len] {
            Error::bus(self.i2c.write(self.address, &[CONTROL_COMMAND, byte]))?;
        }
        Ok(())
    }

    // Send one bulk GDDRAM transfer: the data control prefix followed by
    // the whole buffer, in a single bus transaction.
    fn write_data(&mut self, data: &[u8; BUFFER_SIZE]) -> Result<(), Error<E>> {
        let mut frame = [0u8; BUFFER_SIZE + 1];
        frame[0] = CONTROL_DATA;
        frame[1..].copy_from_slice(data);
        Error::bus(self.i2c.write(self.address, &frame))
    }

    /// Send the owned framebuffer to the panel's GDDRAM.
    ///
    /// This is the only place where drawing becomes visible. The transfer
    /// is blocking and always covers the full buffer, there is no dirty
    /// tracking.
    pub fn flush(&mut self) -> Result<(), Error<E>> {
        let data = self.buffer;
        self.flush_from(&data)
    }

    /// Send a caller-supplied buffer to the panel instead of the owned
    /// one, e.g. a pre-rendered splash image. The internal framebuffer is
    /// left untouched.
    pub fn flush_from(&mut self, data: &[u8; BUFFER_SIZE]) -> Result<(), Error<E>> {
        debug!("flushing {} bytes to the panel", data.len());
        self.command(PageAddress { start: 0, end: 7 })?;
        self.write_data(data)
    }

    /// Bulk-overwrite the framebuffer from a raw bitmap.
    ///
    /// The data must be in the native packing (one byte per column per
    /// page, LSB on top); the fixed-size parameter pins the length to
    /// exactly one full buffer. Does not flush.
    pub fn load_bitmap(&mut self, data: &[u8; BUFFER_SIZE]) {
        self.buffer.copy_from_slice(data);
    }

    /// Set, clear or toggle a single pixel in the framebuffer.
    ///
    /// Coordinates outside the active area are silently ignored. Nothing
    /// is sent to the panel until the next flush.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: PixelColor) {
        if x < 0 || x >= self.size.width() as i32 || y < 0 || y >= self.size.height() as i32 {
            return;
        }

        // The 128x32 glass only connects every other COM row, so logical
        // rows sit on the odd GDDRAM rows. Downstream rendering depends on
        // this exact mapping, do not "fix" it to a 1:1 one.
        let y = match self.size {
            DisplaySize::W128xH32 => (y << 1) + 1,
            DisplaySize::W128xH64 => y,
        };

        let index = x as usize + (y as usize / 8) * WIDTH;
        let mask = 1u8 << (y & 7);
        match color {
            PixelColor::On => self.buffer[index] |= mask,
            PixelColor::Off => self.buffer[index] &= !mask,
            PixelColor::Toggle => self.buffer[index] ^= mask,
        }
    }

    /// Fill the whole framebuffer with all-on or all-off pixels.
    ///
    /// `Toggle` is undefined for a full clear and is ignored, matching the
    /// original behavior of the command set this was modeled on.
    pub fn clear(&mut self, color: PixelColor) {
        let byte: u8 = match color {
            PixelColor::On => 0xFF,
            PixelColor::Off => 0x00,
            PixelColor::Toggle => return,
        };
        self.buffer = [byte; BUFFER_SIZE];
    }

    /// Set the contrast (segment drive current), full byte range.
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Error<E>> {
        self.contrast = contrast;
        self.command(Contrast(contrast))
    }

    /// Render the RAM content inverted (true) or normal (false). This only
    /// changes how the controller maps bits to light, not the buffer.
    pub fn set_invert(&mut self, invert: bool) -> Result<(), Error<E>> {
        self.inverted = invert;
        self.command(Invert(invert))
    }

    /// Change segment remap and COM scan direction together, effectively
    /// rotating the panel by 180 degrees. Already rendered frames are not
    /// re-rendered, this applies from the next flush on.
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<(), Error<E>> {
        self.orientation = orientation;
        self.command(SegmentRemap(orientation))?;
        self.command(ComScanDirection(orientation))
    }

    /// Power the panel on or off (sleep mode). The GDDRAM content
    /// survives sleep, so `set_power(true)` restores the last frame.
    pub fn set_power(&mut self, on: bool) -> Result<(), Error<E>> {
        self.powered = on;
        self.command(DisplayOn(on))
    }

    /// Width of the panel in pixels.
    pub fn width(&self) -> u32 {
        self.size.width()
    }

    /// Active height of the panel in pixels.
    pub fn height(&self) -> u32 {
        self.size.height()
    }

    /// Size of the packed framebuffer in bytes.
    pub fn buffer_size(&self) -> usize {
        BUFFER_SIZE
    }

    /// Read-only view of the raw framebuffer, in native packing.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Whether the panel was last commanded on. The hardware is never
    /// read back, this is the local shadow.
    pub fn powered(&self) -> bool {
        self.powered
    }

    /// The last commanded orientation (shadow).
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether inverted rendering was last commanded (shadow).
    pub fn inverted(&self) -> bool {
        self.inverted
    }

    /// The last commanded contrast value (shadow).
    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    /// Consume the driver and hand the bus handle back. The panel is left
    /// in whatever state it is in, including powered on.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> DrawSurface for Ssd1306<I2C>
where
    I2C: I2cWrite<Error = E>,
{
    fn set_pixel(&mut self, x: i32, y: i32, color: PixelColor) {
        Ssd1306::set_pixel(self, x, y, color)
    }

    fn width(&self) -> u32 {
        Ssd1306::width(self)
    }

    fn height(&self) -> u32 {
        Ssd1306::height(self)
    }
}
