//! MIPI DCS command definitions
//!
//! Most RGB TFT controllers (ILI9341, ST7735, ST7789, HX8357, ...) share the
//! MIPI Display Command Set for addressing and RAM access. The opcodes below
//! are the ones [`ControllerProfile::mipi_dcs`](crate::ControllerProfile::mipi_dcs)
//! uses; the rest are provided for building controller init tables.
//!
//! ## Command Structure
//!
//! Every transfer follows the pattern:
//! 1. Set DC low (command mode)
//! 2. Send the command byte
//! 3. Set DC high (data mode)
//! 4. Send parameter bytes (if any)
//!
//! ## Example
//!
//! ```
//! use rgb_display::command::{self, InitCommand};
//!
//! static INIT: &[InitCommand] = &[
//!     InitCommand::new(command::SOFT_RESET),
//!     InitCommand::new(command::SLEEP_OUT),
//!     InitCommand::with_data(command::PIXEL_FORMAT_SET, &[0x55]),
//!     InitCommand::new(command::DISPLAY_ON),
//! ];
//! assert_eq!(INIT.len(), 4);
//! ```

// System control commands

/// Software reset (0x01)
pub const SOFT_RESET: u8 = 0x01;

/// Sleep out (0x11)
///
/// Most controllers need 5-120ms before the next command.
pub const SLEEP_OUT: u8 = 0x11;

/// Normal display mode on (0x13)
pub const NORMAL_MODE_ON: u8 = 0x13;

/// Display inversion off (0x20)
pub const INVERSION_OFF: u8 = 0x20;

/// Display inversion on (0x21)
pub const INVERSION_ON: u8 = 0x21;

/// Display off (0x28)
pub const DISPLAY_OFF: u8 = 0x28;

/// Display on (0x29)
pub const DISPLAY_ON: u8 = 0x29;

// Addressing and RAM commands

/// Column address set (0x2A)
///
/// Requires the start and end column, encoded per
/// [`PositionFormat`](crate::PositionFormat).
pub const COLUMN_ADDRESS_SET: u8 = 0x2A;

/// Page (row) address set (0x2B)
///
/// Requires the start and end row, encoded per
/// [`PositionFormat`](crate::PositionFormat).
pub const PAGE_ADDRESS_SET: u8 = 0x2B;

/// Memory write (0x2C)
///
/// Followed by pixel data filling the current window row by row.
pub const MEMORY_WRITE: u8 = 0x2C;

/// Memory read (0x2E)
pub const MEMORY_READ: u8 = 0x2E;

/// Memory access control (0x36)
///
/// Requires 1 byte (MY, MX, MV, ML, BGR, MH bits).
pub const MEMORY_ACCESS_CONTROL: u8 = 0x36;

/// Interface pixel format (0x3A)
///
/// Requires 1 byte: 0x55 selects 16 bits per pixel.
pub const PIXEL_FORMAT_SET: u8 = 0x3A;

/// One step of a controller's initialization table
///
/// Steps are replayed in order, each as a single transport write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitCommand {
    /// Command byte (sent in command mode)
    pub command: u8,
    /// Parameter bytes (sent in data mode), if any
    pub data: Option<&'static [u8]>,
}

impl InitCommand {
    /// A step with no parameters
    pub const fn new(command: u8) -> Self {
        Self {
            command,
            data: None,
        }
    }

    /// A step followed by parameter bytes
    pub const fn with_data(command: u8, data: &'static [u8]) -> Self {
        Self {
            command,
            data: Some(data),
        }
    }
}
