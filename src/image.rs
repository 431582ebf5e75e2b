//! Pixel sources for full-panel image writes
//!
//! [`Display::write_image`](crate::Display::write_image) accepts anything
//! implementing [`PixelSource`]. [`ImageRaw`] covers the common case of a
//! packed, row-major byte slice, as produced by most image decoders.
//!
//! ## Example
//!
//! ```
//! use rgb_display::{ImageRaw, PixelMode, PixelSource, Rgb};
//!
//! // 2x1 RGBA image: red, then half-transparent blue
//! let data = [255, 0, 0, 255, 0, 0, 255, 128];
//! let image = match ImageRaw::new(&data, 2, 1, PixelMode::Rgba) {
//!     Ok(image) => image,
//!     Err(_) => return,
//! };
//! assert_eq!(image.pixel(1, 0), Rgb::new(0, 0, 255));
//! ```

use crate::color::Rgb;
use crate::error::ValidationError;

/// Channel layout of an image
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelMode {
    /// Red, green, blue (3 bytes per pixel)
    Rgb,
    /// Red, green, blue, alpha (4 bytes per pixel); alpha is ignored
    Rgba,
    /// 8-bit grayscale (1 byte per pixel)
    Luma,
}

impl PixelMode {
    /// Bytes per pixel in packed form
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
            Self::Luma => 1,
        }
    }

    /// Whether the panel can take this mode directly
    pub const fn is_rgb(self) -> bool {
        matches!(self, Self::Rgb | Self::Rgba)
    }
}

/// A rasterized image with per-pixel channel access
pub trait PixelSource {
    /// Channel layout of the image
    fn mode(&self) -> PixelMode;

    /// Width in pixels
    fn width(&self) -> u16;

    /// Height in pixels
    fn height(&self) -> u16;

    /// Color at `(x, y)`
    ///
    /// Callers stay within `width() x height()`.
    fn pixel(&self, x: u16, y: u16) -> Rgb;
}

impl<S: PixelSource + ?Sized> PixelSource for &S {
    fn mode(&self) -> PixelMode {
        S::mode(self)
    }

    fn width(&self) -> u16 {
        S::width(self)
    }

    fn height(&self) -> u16 {
        S::height(self)
    }

    fn pixel(&self, x: u16, y: u16) -> Rgb {
        S::pixel(self, x, y)
    }
}

/// Borrowed packed image data, row-major
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageRaw<'a> {
    data: &'a [u8],
    width: u16,
    height: u16,
    mode: PixelMode,
}

impl<'a> ImageRaw<'a> {
    /// Wrap packed pixel data
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ImageDataLength` if `data` is not exactly
    /// `width * height * mode.bytes_per_pixel()` bytes.
    pub fn new(
        data: &'a [u8],
        width: u16,
        height: u16,
        mode: PixelMode,
    ) -> Result<Self, ValidationError> {
        let expected = width as usize * height as usize * mode.bytes_per_pixel();
        if data.len() != expected {
            return Err(ValidationError::ImageDataLength {
                expected,
                provided: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            mode,
        })
    }

    /// The underlying bytes
    pub fn data(&self) -> &'a [u8] {
        self.data
    }
}

impl PixelSource for ImageRaw<'_> {
    fn mode(&self) -> PixelMode {
        self.mode
    }

    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn pixel(&self, x: u16, y: u16) -> Rgb {
        let bpp = self.mode.bytes_per_pixel();
        let start = (y as usize * self.width as usize + x as usize) * bpp;
        match self.data.get(start..start + bpp) {
            Some([r, g, b, ..]) => Rgb::new(*r, *g, *b),
            Some([l]) => Rgb::new(*l, *l, *l),
            _ => Rgb::default(),
        }
    }
}
