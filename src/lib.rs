//! RGB565 TFT/LCD Display Driver Core
//!
//! A controller-agnostic driver for RGB TFT panels (ILI9341, ST7735, ST7789,
//! HX8357, ...) that speak a MIPI DCS style command set over a
//! command/data link.
//!
//! ## Features
//!
//! - `no_std` compatible (requires `alloc`)
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Pluggable transports through [`BusTransport`]
//! - Per-controller opcodes, init tables and wire formats through [`ControllerProfile`]
//! - Chunked fills with a configurable transfer buffer
//! - Pixel readback
//! - Full-panel image writes with rotation
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use rgb_display::command::{self, InitCommand};
//! use rgb_display::{Builder, ControllerProfile, Dimensions, Display, Offset, SpiInterface, color565};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! static ST7789_INIT: &[InitCommand] = &[
//!     InitCommand::new(command::SOFT_RESET),
//!     InitCommand::new(command::SLEEP_OUT),
//!     InitCommand::with_data(command::PIXEL_FORMAT_SET, &[0x55]),
//!     InitCommand::with_data(command::MEMORY_ACCESS_CONTROL, &[0x00]),
//!     InitCommand::new(command::INVERSION_ON),
//!     InitCommand::new(command::NORMAL_MODE_ON),
//!     InitCommand::new(command::DISPLAY_ON),
//! ];
//!
//! let interface = SpiInterface::new(spi, dc, rst);
//! let profile = ControllerProfile::mipi_dcs().with_init_sequence(ST7789_INIT);
//! let dims = match Dimensions::new(240, 135) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).offset(Offset::new(40, 53)).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = match Display::new(interface, profile, config, &mut delay) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//! let _ = display.fill(color565(0, 0, 0));
//! let _ = display.fill_rectangle(10, 10, 50, 20, color565(255, 0, 0));
//! let _ = display.read_pixel(20, 15);
//! ```

#![no_std]

extern crate alloc;

/// RGB565 pixel codec
pub mod color;
/// MIPI DCS command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Image sources for full-panel writes
pub mod image;
/// Hardware interface abstraction
pub mod interface;
/// Controller opcodes, init tables and wire formats
pub mod profile;
/// Image rotation utilities
pub mod rotation;
/// RAM address windows
pub mod window;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::{
    BYTES_PER_PIXEL, EncodedPosition, PixelFormat, PositionFormat, ReadbackFormat, Rgb, color565,
};
pub use command::InitCommand;
pub use config::{
    Builder, Config, DEFAULT_BUFFER_CAPACITY, Dimensions, FULL_FRAME_BUFFER_CAPACITY, Offset,
};
pub use display::Display;
pub use error::{BuilderError, Error, ValidationError};
pub use image::{ImageRaw, PixelMode, PixelSource};
pub use interface::{BusTransport, InterfaceError, NoPin, RESET_SETTLE_MS, SpiInterface};
pub use profile::ControllerProfile;
pub use rotation::Rotation;
pub use window::Window;
