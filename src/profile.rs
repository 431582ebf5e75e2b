//! Controller profiles
//!
//! A [`ControllerProfile`] is everything that differs between controller
//! dialects: the four addressing/RAM opcodes, the ordered init table and the
//! wire formats. The [`Display`](crate::Display) engine never hardcodes any of
//! these.
//!
//! ## Example
//!
//! ```
//! use rgb_display::command::{self, InitCommand};
//! use rgb_display::{ControllerProfile, PositionFormat};
//!
//! static INIT: &[InitCommand] = &[
//!     InitCommand::new(command::SLEEP_OUT),
//!     InitCommand::new(command::DISPLAY_ON),
//! ];
//!
//! // An 8-bit-addressed OLED with its own opcodes
//! let profile = ControllerProfile::new(0x15, 0x75, 0x5C, 0x5D)
//!     .with_init_sequence(INIT)
//!     .with_position_format(PositionFormat::U8);
//! assert_eq!(profile.init_sequence().len(), 2);
//! ```

use crate::color::{PixelFormat, PositionFormat, ReadbackFormat};
use crate::command::{
    COLUMN_ADDRESS_SET, InitCommand, MEMORY_READ, MEMORY_WRITE, PAGE_ADDRESS_SET,
};

/// Opcodes, init table and wire formats of one controller dialect
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControllerProfile {
    column_set: u8,
    page_set: u8,
    ram_write: u8,
    ram_read: u8,
    init_sequence: &'static [InitCommand],
    pixel_format: PixelFormat,
    position_format: PositionFormat,
    readback_format: ReadbackFormat,
}

impl ControllerProfile {
    /// Create a profile from its four opcodes
    ///
    /// The init table starts empty and every format takes its default.
    pub const fn new(column_set: u8, page_set: u8, ram_write: u8, ram_read: u8) -> Self {
        Self {
            column_set,
            page_set,
            ram_write,
            ram_read,
            init_sequence: &[],
            pixel_format: PixelFormat::Rgb565BigEndian,
            position_format: PositionFormat::U16BigEndian,
            readback_format: ReadbackFormat::Rgb888,
        }
    }

    /// Standard MIPI DCS opcodes (0x2A, 0x2B, 0x2C, 0x2E)
    pub const fn mipi_dcs() -> Self {
        Self::new(COLUMN_ADDRESS_SET, PAGE_ADDRESS_SET, MEMORY_WRITE, MEMORY_READ)
    }

    /// Replace the init table
    pub const fn with_init_sequence(mut self, init_sequence: &'static [InitCommand]) -> Self {
        self.init_sequence = init_sequence;
        self
    }

    /// Set the pixel write format
    pub const fn with_pixel_format(mut self, format: PixelFormat) -> Self {
        self.pixel_format = format;
        self
    }

    /// Set the window position format
    pub const fn with_position_format(mut self, format: PositionFormat) -> Self {
        self.position_format = format;
        self
    }

    /// Set the pixel readback format
    pub const fn with_readback_format(mut self, format: ReadbackFormat) -> Self {
        self.readback_format = format;
        self
    }

    /// Column address set opcode
    pub const fn column_set(&self) -> u8 {
        self.column_set
    }

    /// Page address set opcode
    pub const fn page_set(&self) -> u8 {
        self.page_set
    }

    /// RAM write opcode
    pub const fn ram_write(&self) -> u8 {
        self.ram_write
    }

    /// RAM read opcode
    pub const fn ram_read(&self) -> u8 {
        self.ram_read
    }

    /// Ordered initialization steps
    pub const fn init_sequence(&self) -> &'static [InitCommand] {
        self.init_sequence
    }

    /// Pixel write format
    pub const fn pixel_format(&self) -> PixelFormat {
        self.pixel_format
    }

    /// Window position format
    pub const fn position_format(&self) -> PositionFormat {
        self.position_format
    }

    /// Pixel readback format
    pub const fn readback_format(&self) -> ReadbackFormat {
        self.readback_format
    }
}

impl Default for ControllerProfile {
    fn default() -> Self {
        Self::mipi_dcs()
    }
}
