//! Image rotation utilities
//!
//! Images are rotated counter-clockwise with the canvas expanded to fit, so
//! a 90° or 270° rotation swaps width and height. The driver never builds a
//! rotated copy: for every destination pixel it looks up the source pixel
//! with [`Rotation::source_position`].
//!
//! ## Rotation Modes
//!
//! - **Rotate0**: Native orientation
//! - **Rotate90**: 90° counter-clockwise, width and height swapped
//! - **Rotate180**: 180° rotation, origin at bottom-right
//! - **Rotate270**: 270° counter-clockwise (or 90° clockwise)
//!
//! ## Example
//!
//! ```
//! use rgb_display::Rotation;
//!
//! let rotation = match Rotation::try_from(90) {
//!     Ok(rotation) => rotation,
//!     Err(_) => return,
//! };
//! // A 4x2 image becomes 2x4
//! assert_eq!(rotation.rotated_size(4, 2), (2, 4));
//! // Its top-left destination pixel comes from the top-right source pixel
//! assert_eq!(rotation.source_position(0, 0, 4, 2), (3, 0));
//! ```

use crate::error::ValidationError;

/// Image rotation, counter-clockwise
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees counter-clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees counter-clockwise
    Rotate270,
}

impl Rotation {
    /// Rotation angle in degrees
    pub const fn degrees(self) -> u16 {
        match self {
            Self::Rotate0 => 0,
            Self::Rotate90 => 90,
            Self::Rotate180 => 180,
            Self::Rotate270 => 270,
        }
    }

    /// Size of a `width` x `height` image after rotation
    pub const fn rotated_size(self, width: u16, height: u16) -> (u16, u16) {
        match self {
            Self::Rotate0 | Self::Rotate180 => (width, height),
            Self::Rotate90 | Self::Rotate270 => (height, width),
        }
    }

    /// Source pixel for destination `(x, y)` of the rotated image
    ///
    /// # Arguments
    ///
    /// * `x` - Destination column, 0 to rotated width - 1
    /// * `y` - Destination row, 0 to rotated height - 1
    /// * `width` - Source image width
    /// * `height` - Source image height
    pub const fn source_position(self, x: u16, y: u16, width: u16, height: u16) -> (u16, u16) {
        match self {
            Self::Rotate0 => (x, y),
            Self::Rotate90 => (width - 1 - y, x),
            Self::Rotate180 => (width - 1 - x, height - 1 - y),
            Self::Rotate270 => (y, height - 1 - x),
        }
    }
}

impl TryFrom<u16> for Rotation {
    type Error = ValidationError;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Self::Rotate0),
            90 => Ok(Self::Rotate90),
            180 => Ok(Self::Rotate180),
            270 => Ok(Self::Rotate270),
            _ => Err(ValidationError::InvalidRotation { degrees }),
        }
    }
}
