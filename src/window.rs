//! RAM address windows
//!
//! Before every RAM read or write burst the controller must be told which
//! rectangle the burst covers: one column-set command with the start and end
//! column, then one page-set command with the start and end row. The
//! controller keeps no window state the driver can rely on, so every
//! transfer re-issues both.
//!
//! ## Example
//!
//! ```
//! use rgb_display::{Offset, PositionFormat, Window};
//!
//! let window = Window::new(0, 0, 9, 4);
//! let (columns, pages) = match window.payloads(Offset::new(2, 1), PositionFormat::U16BigEndian) {
//!     Ok(payloads) => payloads,
//!     Err(_) => return,
//! };
//! assert_eq!(columns.as_ref(), &[0, 2, 0, 11]);
//! assert_eq!(pages.as_ref(), &[0, 1, 0, 5]);
//! ```

use crate::color::{EncodedPosition, PositionFormat};
use crate::config::Offset;
use crate::error::ValidationError;

/// Inclusive rectangle in logical panel coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    /// First column
    pub x0: u16,
    /// First row
    pub y0: u16,
    /// Last column (inclusive)
    pub x1: u16,
    /// Last row (inclusive)
    pub y1: u16,
}

impl Window {
    /// Create a window from inclusive corners
    pub const fn new(x0: u16, y0: u16, x1: u16, y1: u16) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// The 1x1 window at `(x, y)`
    pub const fn pixel(x: u16, y: u16) -> Self {
        Self::new(x, y, x, y)
    }

    /// Number of columns covered
    pub const fn width(&self) -> usize {
        self.x1.abs_diff(self.x0) as usize + 1
    }

    /// Number of rows covered
    pub const fn height(&self) -> usize {
        self.y1.abs_diff(self.y0) as usize + 1
    }

    /// Number of pixels covered
    pub const fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Column-set and page-set payloads for this window
    ///
    /// The offset is added to both ends of each axis before encoding.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::AddressOverflow` if any shifted coordinate
    /// exceeds `u16::MAX`.
    pub fn payloads(
        &self,
        offset: Offset,
        format: PositionFormat,
    ) -> Result<(EncodedPosition, EncodedPosition), ValidationError> {
        let columns = format.encode(shift(self.x0, offset.x)?, shift(self.x1, offset.x)?);
        let pages = format.encode(shift(self.y0, offset.y)?, shift(self.y1, offset.y)?);
        Ok((columns, pages))
    }
}

fn shift(coordinate: u16, offset: u16) -> Result<u16, ValidationError> {
    coordinate
        .checked_add(offset)
        .ok_or(ValidationError::AddressOverflow { coordinate, offset })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_window_size() {
        let window = Window::pixel(3, 7);
        assert_eq!(window.width(), 1);
        assert_eq!(window.height(), 1);
        assert_eq!(window.pixel_count(), 1);
    }

    #[test]
    fn test_payloads_without_offset() {
        let (columns, pages) = Window::new(1, 2, 0x0100, 0x00EF)
            .payloads(Offset::default(), PositionFormat::default())
            .unwrap();
        assert_eq!(columns.as_ref(), &[0x00, 0x01, 0x01, 0x00]);
        assert_eq!(pages.as_ref(), &[0x00, 0x02, 0x00, 0xEF]);
    }

    #[test]
    fn test_payloads_apply_offset_to_both_ends() {
        let (columns, pages) = Window::new(0, 0, 134, 239)
            .payloads(Offset::new(52, 40), PositionFormat::U16BigEndian)
            .unwrap();
        assert_eq!(columns.as_ref(), &[0, 52, 0, 186]);
        assert_eq!(pages.as_ref(), &[0, 40, 1, 23]);
    }

    #[test]
    fn test_payloads_u8_format() {
        let (columns, pages) = Window::new(0, 0, 95, 63)
            .payloads(Offset::new(0, 0), PositionFormat::U8)
            .unwrap();
        assert_eq!(columns.as_ref(), &[0, 95]);
        assert_eq!(pages.as_ref(), &[0, 63]);
    }

    #[test]
    fn test_payloads_offset_overflow_is_rejected() {
        let window = Window::new(0, 0, 1, 0);
        assert!(
            window
                .payloads(Offset::new(u16::MAX - 1, 0), PositionFormat::U16BigEndian)
                .is_ok()
        );
        assert_eq!(
            window.payloads(Offset::new(u16::MAX, 0), PositionFormat::U16BigEndian),
            Err(ValidationError::AddressOverflow {
                coordinate: 1,
                offset: u16::MAX
            })
        );
        assert_eq!(
            Window::pixel(0, 3).payloads(Offset::new(0, u16::MAX - 2), PositionFormat::U8),
            Err(ValidationError::AddressOverflow {
                coordinate: 3,
                offset: u16::MAX - 2
            })
        );
    }
}
