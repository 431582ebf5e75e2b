//! Display configuration types and builder

pub use crate::error::BuilderError;

/// Default fill transfer buffer size, in pixels
///
/// Small enough for microcontroller RAM (512 bytes at 16bpp).
pub const DEFAULT_BUFFER_CAPACITY: usize = 256;

/// A transfer buffer large enough to blit a 320x240 frame in one write
///
/// Suitable for hosts whose SPI driver has no practical payload limit.
pub const FULL_FRAME_BUFFER_CAPACITY: usize = 320 * 240;

/// Panel dimensions in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels (columns)
    pub width: u16,
    /// Height in pixels (rows)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if either side is zero.
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || height == 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of pixels on the panel
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether `(x, y)` lies on the panel
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..i32::from(self.width)).contains(&x) && (0..i32::from(self.height)).contains(&y)
    }
}

/// Origin shift between logical coordinates and controller RAM
///
/// Panels smaller than their controller's RAM are often mounted with an
/// offset (e.g. 1.14" ST7789 modules at column 52, row 40).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Offset {
    /// Column offset
    pub x: u16,
    /// Row offset
    pub y: u16,
}

impl Offset {
    /// Create a new offset
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Display configuration
///
/// Use [`Builder`] to create a Config.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Panel dimensions
    pub dimensions: Dimensions,
    /// RAM origin offset
    pub offset: Offset,
    /// Pixels per transport write when streaming fills
    pub buffer_capacity: usize,
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use rgb_display::{Builder, Dimensions, Offset};
///
/// let dims = match Dimensions::new(240, 135) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new()
///     .dimensions(dims)
///     .offset(Offset::new(40, 53))
///     .buffer_capacity(1024)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.buffer_capacity, 1024);
/// ```
#[must_use]
#[derive(Clone, Copy, Debug)]
pub struct Builder {
    /// Panel dimensions (required)
    dimensions: Option<Dimensions>,
    /// RAM origin offset
    offset: Offset,
    /// Fill transfer buffer size in pixels
    buffer_capacity: usize,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            offset: Offset::default(),
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set panel dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set the RAM origin offset
    pub fn offset(mut self, offset: Offset) -> Self {
        self.offset = offset;
        self
    }

    /// Set the fill transfer buffer size in pixels
    ///
    /// Size it to the transport's practical maximum payload divided by
    /// the bytes per pixel.
    pub fn buffer_capacity(mut self, pixels: usize) -> Self {
        self.buffer_capacity = pixels;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set and
    /// `BuilderError::InvalidBufferCapacity` if the buffer capacity is zero.
    pub fn build(self) -> Result<Config, BuilderError> {
        if self.buffer_capacity == 0 {
            return Err(BuilderError::InvalidBufferCapacity);
        }
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            offset: self.offset,
            buffer_capacity: self.buffer_capacity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Dimensions::new(0, 10),
            Err(BuilderError::InvalidDimensions { width: 0, height: 10 })
        ));
        assert!(Dimensions::new(10, 0).is_err());
    }

    #[test]
    fn test_contains() {
        let dims = Dimensions::new(4, 3).unwrap();
        assert!(dims.contains(0, 0));
        assert!(dims.contains(3, 2));
        assert!(!dims.contains(-1, 0));
        assert!(!dims.contains(4, 0));
        assert!(!dims.contains(0, 3));
    }

    #[test]
    fn test_builder_defaults() {
        let config = Builder::new()
            .dimensions(Dimensions::new(240, 320).unwrap())
            .build()
            .unwrap();
        assert_eq!(config.offset, Offset::default());
        assert_eq!(config.buffer_capacity, DEFAULT_BUFFER_CAPACITY);
    }

    #[test]
    fn test_builder_missing_dimensions() {
        assert!(matches!(
            Builder::new().build(),
            Err(BuilderError::MissingDimensions)
        ));
    }

    #[test]
    fn test_builder_zero_capacity() {
        let result = Builder::new()
            .dimensions(Dimensions::new(8, 8).unwrap())
            .buffer_capacity(0)
            .build();
        assert!(matches!(result, Err(BuilderError::InvalidBufferCapacity)));
    }
}
