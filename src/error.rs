//! Error types for the driver
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`ValidationError`] - Caller input rejected before any bus I/O
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! Out-of-range pixel writes and oversized fill rectangles are not errors:
//! they are dropped or clamped.
//!
//! ## Example
//!
//! ```
//! use rgb_display::{Builder, BuilderError, Rotation, ValidationError};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Rotation must be a multiple of 90 degrees
//! let result = Rotation::try_from(45);
//! assert!(matches!(result, Err(ValidationError::InvalidRotation { degrees: 45 })));
//! ```

use crate::image::PixelMode;
use crate::interface::BusTransport;

/// Caller-supplied input that violates a documented precondition
///
/// Always raised before any bus I/O, so no partial transfer happens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Rotation is not one of 0, 90, 180 or 270 degrees
    InvalidRotation {
        /// Requested rotation
        degrees: u16,
    },
    /// Image is not RGB or RGBA
    UnsupportedPixelMode {
        /// Mode of the rejected image
        mode: PixelMode,
    },
    /// Image size after rotation differs from the panel size
    ImageSizeMismatch {
        /// Panel size as (width, height)
        expected: (u16, u16),
        /// Rotated image size as (width, height)
        actual: (u16, u16),
    },
    /// Raw image data does not match its declared size and mode
    ImageDataLength {
        /// Required length in bytes
        expected: usize,
        /// Provided length in bytes
        provided: usize,
    },
    /// Window coordinate plus RAM offset does not fit a 16-bit address
    AddressOverflow {
        /// Logical coordinate
        coordinate: u16,
        /// Offset added to it
        offset: u16,
    },
    /// Coordinate lies outside the panel
    OutOfBounds {
        /// X coordinate
        x: u16,
        /// Y coordinate
        y: u16,
    },
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidRotation { degrees } => {
                write!(f, "Rotation must be 0/90/180/270, got {degrees}")
            }
            Self::UnsupportedPixelMode { mode } => {
                write!(f, "Image must be in mode RGB or RGBA, got {mode:?}")
            }
            Self::ImageSizeMismatch { expected, actual } => write!(
                f,
                "Image must be same dimensions as display ({}x{}), got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
            Self::ImageDataLength { expected, provided } => write!(
                f,
                "Image data length mismatch: expected {expected} bytes, provided {provided}"
            ),
            Self::AddressOverflow { coordinate, offset } => write!(
                f,
                "Address {coordinate} + offset {offset} exceeds the 16-bit address range"
            ),
            Self::OutOfBounds { x, y } => write!(f, "Coordinate ({x}, {y}) is outside the panel"),
        }
    }
}

impl core::error::Error for ValidationError {}

/// Errors that can occur when interacting with the display
///
/// Generic over the transport type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<T: BusTransport> {
    /// Transport error (SPI/GPIO, short read, ...)
    ///
    /// Wraps the underlying error from the [`BusTransport`] implementation,
    /// unmodified.
    Transport(T::Error),
    /// Caller input was rejected
    Validation(ValidationError),
}

impl<T: BusTransport> From<ValidationError> for Error<T> {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error)
    }
}

impl<T: BusTransport> core::fmt::Display for Error<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "Transport error: {e:?}"),
            Self::Validation(e) => write!(f, "{e}"),
        }
    }
}

impl<T: BusTransport + core::fmt::Debug> core::error::Error for Error<T> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width requested
        width: u16,
        /// Height requested
        height: u16,
    },
    /// Fill transfer buffer capacity was zero
    InvalidBufferCapacity,
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => {
                write!(f, "Invalid dimensions {width}x{height} (both sides must be non-zero)")
            }
            Self::InvalidBufferCapacity => write!(f, "Buffer capacity must be at least 1 pixel"),
        }
    }
}

impl core::error::Error for BuilderError {}
