//! Hardware interface abstraction
//!
//! This module provides the [`BusTransport`] trait, the [`SpiInterface`]
//! realization over embedded-hal SPI, and the [`NoPin`] placeholder.
//!
//! ## Hardware Requirements
//!
//! An SPI panel requires:
//! - SPI bus (MOSI + SCK, MISO for readback) bound to a chip-select line
//! - GPIO pins:
//!   - **DC**: Data/Command select (output)
//!   - **RST**: Reset (output, active low, optional)
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use rgb_display::{BusTransport, SpiInterface};
//! # use core::convert::Infallible;
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
//! // Panel without a reset line
//! let mut interface = SpiInterface::without_reset(MockSpi, MockPin);
//!
//! // Send command with parameters
//! let _ = interface.write(Some(0x3A), Some(&[0x55]));
//!
//! // Read three bytes after a command
//! let mut buf = [0u8; 3];
//! let _ = interface.read(Some(0x2E), &mut buf);
//! ```

use core::convert::Infallible;
use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use embedded_hal::spi::{Operation, SpiDevice};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Settle time on each edge of the reset pulse
pub const RESET_SETTLE_MS: u32 = 50;

/// Command/data link to a panel controller
///
/// [`Display`](crate::display::Display) depends only on this trait, so the
/// same protocol engine drives SPI, parallel or I2C links.
///
/// ## Implementing
///
/// - A present `command` is sent as one byte in command mode; present `data`
///   follows in data mode.
/// - The physical link must be held exclusively for the duration of each
///   call and released on every exit path.
/// - Any physical-layer failure, including a read that cannot fill the whole
///   buffer, must be returned as an error, never silently truncated.
pub trait BusTransport {
    /// Error type for transport operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send an optional command byte followed by optional data bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the physical transfer fails.
    fn write(&mut self, command: Option<u8>, data: Option<&[u8]>)
    -> InterfaceResult<(), Self::Error>;

    /// Send an optional command byte, then read exactly `buf.len()` bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the physical transfer fails or cannot fill `buf`.
    fn read(&mut self, command: Option<u8>, buf: &mut [u8]) -> InterfaceResult<(), Self::Error>;

    /// Perform a hardware reset, if the link has a reset line
    ///
    /// The default implementation does nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if driving the reset line fails.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        let _ = delay;
        Ok(())
    }
}

impl<T: BusTransport + ?Sized> BusTransport for &mut T {
    type Error = T::Error;

    fn write(
        &mut self,
        command: Option<u8>,
        data: Option<&[u8]>,
    ) -> InterfaceResult<(), Self::Error> {
        T::write(self, command, data)
    }

    fn read(&mut self, command: Option<u8>, buf: &mut [u8]) -> InterfaceResult<(), Self::Error> {
        T::read(self, command, buf)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        T::reset(self, delay)
    }
}

/// Errors that can occur at the interface level
///
/// Generic over SPI, data/command pin and reset pin error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr, RstErr = PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// Data/command pin error
    Pin(PinErr),
    /// Reset pin error
    Reset(RstErr),
}

impl<SpiErr: Debug, PinErr: Debug, RstErr: Debug> core::fmt::Display
    for InterfaceError<SpiErr, PinErr, RstErr>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
            Self::Reset(e) => write!(f, "Reset pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug, RstErr: Debug> core::error::Error
    for InterfaceError<SpiErr, PinErr, RstErr>
{
}

/// Placeholder for an unconnected pin
///
/// Accepts every level change and reads as low. Use it wherever a pin type is
/// required but the board does not wire the signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoPin;

impl ErrorType for NoPin {
    type Error = Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl InputPin for NoPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(false)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(true)
    }
}

/// SPI transport with a data/command select line
///
/// Implements [`BusTransport`] for embedded-hal v1.0 SPI and GPIO traits.
/// Chip select and bus locking are handled by the [`SpiDevice`], which holds
/// the bus for exactly one transaction and releases it on every exit path.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`] ([`NoPin`] when absent)
pub struct SpiInterface<SPI, DC, RST = NoPin> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: Option<RST>,
}

impl<SPI, DC, RST> SpiInterface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a new interface with a reset line
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self {
            spi,
            dc,
            rst: Some(rst),
        }
    }

    /// Release the SPI device and pins
    pub fn release(self) -> (SPI, DC, Option<RST>) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC> SpiInterface<SPI, DC, NoPin>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    /// Create a new interface for a panel without a reset line
    pub fn without_reset(spi: SPI, dc: DC) -> Self {
        Self { spi, dc, rst: None }
    }
}

impl<SPI, DC, RST> BusTransport for SpiInterface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    type Error = InterfaceError<SPI::Error, DC::Error, RST::Error>;

    fn write(
        &mut self,
        command: Option<u8>,
        data: Option<&[u8]>,
    ) -> InterfaceResult<(), Self::Error> {
        // DC toggles between the two, so they are separate transactions
        if let Some(command) = command {
            self.dc.set_low().map_err(InterfaceError::Pin)?;
            self.spi.write(&[command]).map_err(InterfaceError::Spi)?;
        }
        if let Some(data) = data {
            self.dc.set_high().map_err(InterfaceError::Pin)?;
            self.spi.write(data).map_err(InterfaceError::Spi)?;
        }
        Ok(())
    }

    fn read(&mut self, command: Option<u8>, buf: &mut [u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        let result = match command {
            Some(command) if buf.is_empty() => self.spi.write(&[command]),
            Some(command) => self
                .spi
                .transaction(&mut [Operation::Write(&[command]), Operation::Read(buf)]),
            None if buf.is_empty() => Ok(()),
            None => self.spi.read(buf),
        };
        result.map_err(InterfaceError::Spi)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        let Some(rst) = self.rst.as_mut() else {
            return Ok(());
        };
        log::debug!("pulsing reset line");
        // Reset sequence: LOW -> wait 50ms -> HIGH -> wait 50ms
        rst.set_low().map_err(InterfaceError::Reset)?;
        delay.delay_ms(RESET_SETTLE_MS);
        rst.set_high().map_err(InterfaceError::Reset)?;
        delay.delay_ms(RESET_SETTLE_MS);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use embedded_hal::spi::ErrorType as SpiErrorType;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Dc(bool),
        Rst(bool),
        Delay(u32),
        /// One SPI transaction: bytes written and number of bytes read
        Transaction(Vec<u8>, usize),
    }

    type Log = RefCell<Vec<Event>>;

    #[derive(Debug, Clone, Copy)]
    struct MockError;

    impl embedded_hal::digital::Error for MockError {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    impl embedded_hal::spi::Error for MockError {
        fn kind(&self) -> embedded_hal::spi::ErrorKind {
            embedded_hal::spi::ErrorKind::Other
        }
    }

    struct MockSpi<'a> {
        log: &'a Log,
        fail: bool,
    }

    impl SpiErrorType for MockSpi<'_> {
        type Error = MockError;
    }

    impl SpiDevice for MockSpi<'_> {
        fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), MockError> {
            if self.fail {
                return Err(MockError);
            }
            let mut written = Vec::new();
            let mut read = 0;
            for op in operations.iter_mut() {
                match op {
                    Operation::Write(bytes) => written.extend_from_slice(bytes),
                    Operation::Read(buf) => {
                        buf.fill(0xA5);
                        read += buf.len();
                    }
                    _ => {}
                }
            }
            self.log.borrow_mut().push(Event::Transaction(written, read));
            Ok(())
        }
    }

    struct MockPin<'a> {
        log: &'a Log,
        reset_line: bool,
    }

    impl ErrorType for MockPin<'_> {
        type Error = MockError;
    }

    impl OutputPin for MockPin<'_> {
        fn set_low(&mut self) -> Result<(), MockError> {
            self.record(false);
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), MockError> {
            self.record(true);
            Ok(())
        }
    }

    impl MockPin<'_> {
        fn record(&self, level: bool) {
            let event = if self.reset_line {
                Event::Rst(level)
            } else {
                Event::Dc(level)
            };
            self.log.borrow_mut().push(event);
        }
    }

    struct MockDelay<'a> {
        log: &'a Log,
    }

    impl DelayNs for MockDelay<'_> {
        fn delay_ns(&mut self, _ns: u32) {}

        fn delay_ms(&mut self, ms: u32) {
            self.log.borrow_mut().push(Event::Delay(ms));
        }
    }

    fn interface(log: &Log) -> SpiInterface<MockSpi<'_>, MockPin<'_>, MockPin<'_>> {
        SpiInterface::new(
            MockSpi { log, fail: false },
            MockPin {
                log,
                reset_line: false,
            },
            MockPin {
                log,
                reset_line: true,
            },
        )
    }

    #[test]
    fn test_write_command_and_data_are_separate_transfers() {
        let log = Log::default();
        let mut iface = interface(&log);
        iface.write(Some(0x2A), Some(&[0, 1, 0, 2])).unwrap();
        assert_eq!(
            log.take(),
            [
                Event::Dc(false),
                Event::Transaction([0x2A].to_vec(), 0),
                Event::Dc(true),
                Event::Transaction([0, 1, 0, 2].to_vec(), 0),
            ]
        );
    }

    #[test]
    fn test_write_data_only() {
        let log = Log::default();
        let mut iface = interface(&log);
        iface.write(None, Some(&[0xFF, 0xFF])).unwrap();
        assert_eq!(
            log.take(),
            [Event::Dc(true), Event::Transaction([0xFF, 0xFF].to_vec(), 0)]
        );
    }

    #[test]
    fn test_read_with_command_is_one_transaction() {
        let log = Log::default();
        let mut iface = interface(&log);
        let mut buf = [0u8; 3];
        iface.read(Some(0x2E), &mut buf).unwrap();
        assert_eq!(buf, [0xA5; 3]);
        assert_eq!(
            log.take(),
            [Event::Dc(false), Event::Transaction([0x2E].to_vec(), 3)]
        );
    }

    #[test]
    fn test_reset_pulse_timing() {
        let log = Log::default();
        let mut iface = interface(&log);
        let mut delay = MockDelay { log: &log };
        iface.reset(&mut delay).unwrap();
        assert_eq!(
            log.take(),
            [
                Event::Rst(false),
                Event::Delay(RESET_SETTLE_MS),
                Event::Rst(true),
                Event::Delay(RESET_SETTLE_MS),
            ]
        );
    }

    #[test]
    fn test_reset_without_pin_is_noop() {
        let log = Log::default();
        let mut iface = SpiInterface::without_reset(
            MockSpi {
                log: &log,
                fail: false,
            },
            MockPin {
                log: &log,
                reset_line: false,
            },
        );
        let mut delay = MockDelay { log: &log };
        iface.reset(&mut delay).unwrap();
        assert!(log.take().is_empty());
    }

    #[test]
    fn test_spi_error_is_surfaced() {
        let log = Log::default();
        let mut iface = SpiInterface::without_reset(
            MockSpi {
                log: &log,
                fail: true,
            },
            MockPin {
                log: &log,
                reset_line: false,
            },
        );
        let result = iface.write(Some(0x2C), None);
        assert!(matches!(result, Err(InterfaceError::Spi(MockError))));
    }

    #[test]
    fn test_no_pin_accepts_everything() {
        let mut pin = NoPin;
        assert!(pin.set_high().is_ok());
        assert!(pin.set_low().is_ok());
        assert_eq!(pin.is_low(), Ok(true));
    }
}
