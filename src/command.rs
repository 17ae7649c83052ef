//! # Module defining the command set of the SSD1306
//!
//! All commands are implemented as one enum with typed arguments. The
//! source code is written to resemble the data sheet as close as possible.
//! The data sheet can be found here:
//! <https://cdn-shop.adafruit.com/datasheets/SSD1306.pdf>
//!
//! There is quite a number of registers and analog tweakings that can be
//! done on the SSD1306, because the controller was designed to drive many
//! different OLED glasses with different multiplex ratios and supply
//! setups. A few words on the ones you are most likely to touch:
//!
//! ## Contrast
//! A plain 0..=255 value, more is brighter. The controller adjusts the
//! segment output current with it. Unlike LCD contrast there is no real
//! risk in setting it high, OLED segments just age a bit faster. The
//! bring-up sequence starts at full contrast (0xFF) like the reference
//! modules do; change it at runtime with `set_contrast()`.
//!
//! ## Charge pump
//! The panel voltage (VCC) of the cheap breakout modules is generated by
//! the controller's internal charge pump from the logic supply. It must be
//! enabled (0x14) before the display is switched on, otherwise the screen
//! simply stays black. Boards with an external VCC rail would pass 0x10
//! instead.
//!
//! ## Multiplex ratio and COM pins
//! These describe how the OLED rows are wired to the controller's COM
//! outputs. They are a property of the glass, not something to change at
//! runtime: 0x3F/0x12 drives the common 128x64 and, through the row
//! doubling in the pixel addressing, also the 128x32 modules this crate
//! supports.

use crate::Orientation;

/// SSD1306 command set, see the data sheet's command table
///
/// Every variant encodes to one, two or three opcode bytes via
/// [`Command::bytes`]. Each byte goes out in its own command frame on the
/// wire, the controller does not care about transaction boundaries.
#[derive(Debug, Clone, Copy)]
pub enum Command {
    /// turn the panel on (true) or off/sleep (false)
    // translates to: 0xAE | on
    DisplayOn(bool),

    /// set the contrast (segment current), full byte range
    // translates to: 0x81, value
    Contrast(u8),

    /// invert (true) or normal (false) rendering of the RAM content
    // translates to: 0xA6 | invert
    Invert(bool),

    /// resume rendering the RAM content after an "entire display on"
    // translates to: 0xA4
    AllOnResume,

    /// set the lower nibble of the column start address (paged mode)
    // translates to: 0x00 | nibble
    LowColumn(u8),

    /// set the higher nibble of the column start address (paged mode)
    // translates to: 0x10 | nibble
    HighColumn(u8),

    /// set the RAM display start line, 0..=63
    // translates to: 0x40 | line
    StartLine(u8),

    /// set the memory addressing mode: 0 horizontal, 1 vertical, 2 page
    // translates to: 0x20, mode
    MemoryMode(u8),

    /// set the multiplex ratio; argument is `rows - 1`
    // translates to: 0xA8, ratio
    Multiplex(u8),

    /// shift the COM output mapping by the given number of rows
    // translates to: 0xD3, offset
    DisplayOffset(u8),

    /// set the display clock: low nibble divide ratio, high nibble
    /// oscillator frequency
    // translates to: 0xD5, value
    ClockDivider(u8),

    /// set the pre-charge period: low nibble phase 1, high nibble phase 2
    // translates to: 0xD9, value
    Precharge(u8),

    /// set the COM pins hardware configuration of the glass
    // translates to: 0xDA, value
    ComPins(u8),

    /// set the VCOMH deselect level
    // translates to: 0xDB, value
    VcomDetect(u8),

    /// enable (0x14) or disable (0x10) the internal charge pump
    // translates to: 0x8D, value
    ChargePump(u8),

    /// segment remap: column address 0 mapped to SEG0 (Normal) or SEG127
    /// (Flipped)
    // translates to: 0xA0 | remap
    SegmentRemap(Orientation),

    /// COM output scan direction: COM0 -> COM[N-1] (Normal) or remapped
    /// (Flipped)
    // translates to: 0xC0 | (remap << 3)
    ComScanDirection(Orientation),

    /// set the page address window for following data, start..=end pages
    // translates to: 0x22, start, end
    PageAddress { start: u8, end: u8 },

    /// set the column address window for following data, start..=end
    // translates to: 0x21, start, end
    ColumnAddress { start: u8, end: u8 },
}

use Command::*;

impl Command {
    /// Encode the command into its raw opcode bytes.
    ///
    /// Returns a fixed buffer plus the number of valid bytes in it, so no
    /// allocation is needed to feed something that does a `Write<u8>`.
    pub fn bytes(self) -> ([u8; 3], usize) {
        match self {
            DisplayOn(on) => ([0xAE | on as u8, 0, 0], 1),
            Contrast(value) => ([0x81, value, 0], 2),
            Invert(invert) => ([0xA6 | invert as u8, 0, 0], 1),
            AllOnResume => ([0xA4, 0, 0], 1),
            LowColumn(nibble) => ([0x00 | (nibble & 0x0F), 0, 0], 1),
            HighColumn(nibble) => ([0x10 | (nibble & 0x0F), 0, 0], 1),
            StartLine(line) => ([0x40 | (line & 0x3F), 0, 0], 1),
            MemoryMode(mode) => ([0x20, mode, 0], 2),
            Multiplex(ratio) => ([0xA8, ratio, 0], 2),
            DisplayOffset(offset) => ([0xD3, offset, 0], 2),
            ClockDivider(value) => ([0xD5, value, 0], 2),
            Precharge(value) => ([0xD9, value, 0], 2),
            ComPins(value) => ([0xDA, value, 0], 2),
            VcomDetect(value) => ([0xDB, value, 0], 2),
            ChargePump(value) => ([0x8D, value, 0], 2),
            SegmentRemap(orientation) => ([0xA0 | remap_bit(orientation), 0, 0], 1),
            ComScanDirection(orientation) => ([0xC0 | (remap_bit(orientation) << 3), 0, 0], 1),
            PageAddress { start, end } => ([0x22, start, end], 3),
            ColumnAddress { start, end } => ([0x21, start, end], 3),
        }
    }
}

fn remap_bit(orientation: Orientation) -> u8 {
    match orientation {
        Orientation::Normal => 0,
        Orientation::Flipped => 1,
    }
}

/// A prelude for convenience, it pulls the command enum and its variants
/// into scope.
pub mod prelude {
    pub use super::{Command, Command::*};
}
