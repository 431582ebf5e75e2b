//! RGB565 pixel codec
//!
//! This module converts between 24-bit [`Rgb`] colors and the packed 16-bit
//! 565 representation used on the wire, and encodes/decodes the byte formats
//! a controller expects for pixel values and window positions.
//!
//! ## Bit Layout
//!
//! | Bits    | Channel | Source bits           |
//! |---------|---------|-----------------------|
//! | 15..=11 | Red     | `r & 0xF8`            |
//! | 10..=5  | Green   | `g & 0xFC`            |
//! | 4..=0   | Blue    | `b >> 3`              |
//!
//! Packing masks and shifts, it never rounds, so a round trip through the
//! panel is lossy to 565 precision.
//!
//! ## Example
//!
//! ```
//! use rgb_display::{color565, Rgb};
//!
//! assert_eq!(color565(255, 0, 0), 0xF800);
//! assert_eq!(Rgb::from((0, 255, 0)).to_565(), 0x07E0);
//! assert_eq!(Rgb::from_565(0xF800), Rgb::new(248, 0, 0));
//! ```

/// Pack three 8-bit channels into a 16-bit 565 value
///
/// Low bits of each channel are discarded; nothing is rounded.
///
/// ```
/// use rgb_display::color565;
///
/// assert_eq!(color565(0xFF, 0xFF, 0xFF), 0xFFFF);
/// assert_eq!(color565(0x07, 0x03, 0x07), 0x0000);
/// ```
pub const fn color565(r: u8, g: u8, b: u8) -> u16 {
    (((r as u16) & 0xF8) << 8) | (((g as u16) & 0xFC) << 3) | ((b as u16) >> 3)
}

/// A 24-bit RGB color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into the 16-bit 565 wire value
    pub const fn to_565(self) -> u16 {
        color565(self.r, self.g, self.b)
    }

    /// Expand a 565 value back into channels
    ///
    /// The dropped low bits come back as zero, so `Rgb::from_565(c).to_565() == c`
    /// for every `c`.
    pub const fn from_565(value: u16) -> Self {
        Self {
            r: ((value >> 8) & 0xF8) as u8,
            g: ((value >> 3) & 0xFC) as u8,
            b: ((value << 3) & 0xF8) as u8,
        }
    }

    /// The color as the panel stores it, truncated to 565 precision
    pub const fn quantized(self) -> Self {
        Self::from_565(self.to_565())
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for u16 {
    fn from(color: Rgb) -> Self {
        color.to_565()
    }
}

#[cfg(feature = "graphics")]
impl From<Rgb> for embedded_graphics_core::pixelcolor::Rgb565 {
    fn from(color: Rgb) -> Self {
        use embedded_graphics_core::pixelcolor::raw::RawU16;
        Self::from(RawU16::new(color.to_565()))
    }
}

/// Number of bytes one encoded pixel occupies on the wire
pub const BYTES_PER_PIXEL: usize = 2;

/// Largest readback payload any [`ReadbackFormat`] produces
pub const MAX_READBACK_LEN: usize = 3;

/// Wire format for pixel values written to display RAM
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PixelFormat {
    /// 16-bit 565, most significant byte first
    #[default]
    Rgb565BigEndian,
    /// 16-bit 565, least significant byte first
    Rgb565LittleEndian,
}

impl PixelFormat {
    /// Serialize a packed 565 value
    pub const fn encode(self, color: u16) -> [u8; BYTES_PER_PIXEL] {
        match self {
            Self::Rgb565BigEndian => color.to_be_bytes(),
            Self::Rgb565LittleEndian => color.to_le_bytes(),
        }
    }
}

/// Wire format for column/page address pairs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PositionFormat {
    /// Two unsigned 16-bit values, big endian (4 bytes)
    #[default]
    U16BigEndian,
    /// Two unsigned 8-bit values (2 bytes); higher bits are dropped
    U8,
}

impl PositionFormat {
    /// Serialize a start/end address pair
    pub const fn encode(self, start: u16, end: u16) -> EncodedPosition {
        match self {
            Self::U16BigEndian => {
                let [s0, s1] = start.to_be_bytes();
                let [e0, e1] = end.to_be_bytes();
                EncodedPosition {
                    bytes: [s0, s1, e0, e1],
                    len: 4,
                }
            }
            Self::U8 => EncodedPosition {
                bytes: [start as u8, end as u8, 0, 0],
                len: 2,
            },
        }
    }
}

/// An encoded address pair, at most four bytes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodedPosition {
    bytes: [u8; 4],
    len: u8,
}

impl AsRef<[u8]> for EncodedPosition {
    fn as_ref(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }
}

/// Wire format of a single pixel read back from display RAM
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReadbackFormat {
    /// Three bytes: red, green, blue
    #[default]
    Rgb888,
    /// One 16-bit 565 value, big endian
    Rgb565BigEndian,
}

impl ReadbackFormat {
    /// Number of bytes one pixel occupies when read back
    pub const fn byte_len(self) -> usize {
        match self {
            Self::Rgb888 => 3,
            Self::Rgb565BigEndian => 2,
        }
    }

    /// Decode one pixel and requantize it to 565 precision
    ///
    /// Only the first [`byte_len`](Self::byte_len) bytes are used.
    pub const fn decode(self, bytes: &[u8; MAX_READBACK_LEN]) -> Rgb {
        match self {
            Self::Rgb888 => Rgb::new(bytes[0], bytes[1], bytes[2]).quantized(),
            Self::Rgb565BigEndian => Rgb::from_565(u16::from_be_bytes([bytes[0], bytes[1]])),
        }
    }
}
