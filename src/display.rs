//! Core display operations

use alloc::vec::Vec;
use embedded_hal::delay::DelayNs;

use crate::color::{BYTES_PER_PIXEL, MAX_READBACK_LEN, Rgb};
use crate::config::{Config, Dimensions, Offset};
use crate::error::{Error, ValidationError};
use crate::image::PixelSource;
use crate::interface::BusTransport;
use crate::profile::ControllerProfile;
use crate::rotation::Rotation;
use crate::window::Window;

type DisplayResult<T> = core::result::Result<(), Error<T>>;

/// Protocol engine for RGB565 panel controllers
///
/// Owns its transport exclusively. A `Display` only exists once the
/// controller's init table has been replayed successfully, so every method
/// runs against a ready panel.
///
/// Writes and fills follow a permissive bounds policy: pixels outside the
/// panel are dropped and fill rectangles are clamped to the panel edge.
pub struct Display<T>
where
    T: BusTransport,
{
    /// Bus transport
    transport: T,
    /// Controller opcodes, init table and wire formats
    profile: ControllerProfile,
    /// Panel configuration
    config: Config,
}

impl<T> Display<T>
where
    T: BusTransport,
{
    /// Reset the panel, replay its init table and return a ready display
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` if the reset or any init command fails; no
    /// display is constructed in that case.
    pub fn new<D: DelayNs>(
        mut transport: T,
        profile: ControllerProfile,
        config: Config,
        delay: &mut D,
    ) -> Result<Self, Error<T>> {
        transport.reset(delay).map_err(Error::Transport)?;
        let mut display = Self {
            transport,
            profile,
            config,
        };
        display.init()?;
        Ok(display)
    }

    /// Replay the init table, in order
    fn init(&mut self) -> DisplayResult<T> {
        let steps = self.profile.init_sequence();
        log::debug!("initializing controller ({} commands)", steps.len());
        for step in steps {
            self.write(Some(step.command), step.data)?;
        }
        Ok(())
    }

    /// Select the RAM window for the next read or write burst
    ///
    /// Issues column-set then page-set with the configured offset applied.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::AddressOverflow` (before any bus I/O) if the
    /// offset pushes a coordinate past `u16::MAX`.
    pub fn set_window(&mut self, window: Window) -> DisplayResult<T> {
        log::trace!(
            "window ({}, {})..=({}, {})",
            window.x0,
            window.y0,
            window.x1,
            window.y1
        );
        let (columns, pages) = window.payloads(self.config.offset, self.profile.position_format())?;
        self.write(Some(self.profile.column_set()), Some(columns.as_ref()))?;
        self.write(Some(self.profile.page_set()), Some(pages.as_ref()))
    }

    /// Write pre-encoded pixel data to a window in one transfer
    ///
    /// `data` must already be in the controller's pixel format.
    pub fn write_block(&mut self, window: Window, data: &[u8]) -> DisplayResult<T> {
        self.set_window(window)?;
        self.write(Some(self.profile.ram_write()), Some(data))
    }

    /// Read one pixel back from display RAM
    ///
    /// The result is requantized to 565 precision.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfBounds` (before any bus I/O) if `(x, y)`
    /// is off the panel, and `Error::Transport` if the read fails or comes
    /// back short.
    pub fn read_pixel(&mut self, x: u16, y: u16) -> Result<Rgb, Error<T>> {
        if !self.config.dimensions.contains(i32::from(x), i32::from(y)) {
            return Err(ValidationError::OutOfBounds { x, y }.into());
        }
        let format = self.profile.readback_format();
        let mut raw = [0u8; MAX_READBACK_LEN];

        self.set_window(Window::pixel(x, y))?;
        self.transport
            .read(Some(self.profile.ram_read()), &mut raw[..format.byte_len()])
            .map_err(Error::Transport)?;

        Ok(format.decode(&raw))
    }

    /// Write one pixel
    ///
    /// Coordinates off the panel are silently ignored.
    pub fn write_pixel(&mut self, x: i32, y: i32, color: u16) -> DisplayResult<T> {
        if !self.config.dimensions.contains(x, y) {
            return Ok(());
        }
        let pixel = self.profile.pixel_format().encode(color);
        self.write_block(Window::pixel(x as u16, y as u16), &pixel)
    }

    /// Write a full-panel image
    ///
    /// The image is rotated counter-clockwise by `rotation`, converted to
    /// 565 and sent as a single block write covering the whole panel.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` (before any bus I/O) if the image is not
    /// RGB/RGBA or its rotated size differs from the panel size.
    pub fn write_image<S: PixelSource + ?Sized>(
        &mut self,
        image: &S,
        rotation: Rotation,
    ) -> DisplayResult<T> {
        let mode = image.mode();
        if !mode.is_rgb() {
            return Err(ValidationError::UnsupportedPixelMode { mode }.into());
        }
        let (src_width, src_height) = (image.width(), image.height());
        let Dimensions { width, height } = self.config.dimensions;
        let rotated = rotation.rotated_size(src_width, src_height);
        if rotated != (width, height) {
            return Err(ValidationError::ImageSizeMismatch {
                expected: (width, height),
                actual: rotated,
            }
            .into());
        }

        let format = self.profile.pixel_format();
        let mut pixels = Vec::with_capacity(self.config.dimensions.pixel_count() * BYTES_PER_PIXEL);
        for y in 0..height {
            for x in 0..width {
                let (sx, sy) = rotation.source_position(x, y, src_width, src_height);
                pixels.extend_from_slice(&format.encode(image.pixel(sx, sy).to_565()));
            }
        }

        self.write_block(Window::new(0, 0, width - 1, height - 1), &pixels)
    }

    /// Fill a rectangle with one color
    ///
    /// The origin is clamped onto the panel and the size is clamped to at
    /// least 1 and at most the space left to the panel edge. Pixels are
    /// streamed in writes of at most `buffer_capacity` pixels.
    pub fn fill_rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: u16,
    ) -> DisplayResult<T> {
        let panel_width = i32::from(self.config.dimensions.width);
        let panel_height = i32::from(self.config.dimensions.height);
        let x = x.clamp(0, panel_width - 1);
        let y = y.clamp(0, panel_height - 1);
        let width = width.max(1).min(panel_width - x);
        let height = height.max(1).min(panel_height - y);

        let window = Window::new(
            x as u16,
            y as u16,
            (x + width - 1) as u16,
            (y + height - 1) as u16,
        );
        self.set_window(window)?;
        self.write(Some(self.profile.ram_write()), None)?;
        self.stream_pixels(color, window.pixel_count())
    }

    /// Fill the whole panel with one color
    pub fn fill(&mut self, color: u16) -> DisplayResult<T> {
        let Dimensions { width, height } = self.config.dimensions;
        self.fill_rectangle(0, 0, i32::from(width), i32::from(height), color)
    }

    /// Draw a horizontal line `length` pixels wide
    pub fn hline(&mut self, x: i32, y: i32, length: i32, color: u16) -> DisplayResult<T> {
        self.fill_rectangle(x, y, length, 1, color)
    }

    /// Draw a vertical line `length` pixels tall
    pub fn vline(&mut self, x: i32, y: i32, length: i32, color: u16) -> DisplayResult<T> {
        self.fill_rectangle(x, y, 1, length, color)
    }

    /// Send `count` copies of `color` as RAM data
    ///
    /// Emits `count / capacity` full buffers, then one write with the
    /// remainder (empty when the count divides evenly). The byte stream is
    /// identical to a single unbounded write.
    fn stream_pixels(&mut self, color: u16, count: usize) -> DisplayResult<T> {
        let capacity = self.config.buffer_capacity;
        let (chunks, rest) = (count / capacity, count % capacity);
        let pixel = self.profile.pixel_format().encode(color);
        let buffer = pixel.repeat(count.min(capacity));
        log::trace!("streaming {count} pixels: {chunks} x {capacity} + {rest}");

        for _ in 0..chunks {
            self.write(None, Some(&buffer))?;
        }
        self.write(None, Some(&buffer[..rest * BYTES_PER_PIXEL]))
    }

    fn write(&mut self, command: Option<u8>, data: Option<&[u8]>) -> DisplayResult<T> {
        self.transport.write(command, data).map_err(Error::Transport)
    }

    /// Panel width in pixels
    pub fn width(&self) -> u16 {
        self.config.dimensions.width
    }

    /// Panel height in pixels
    pub fn height(&self) -> u16 {
        self.config.dimensions.height
    }

    /// Get panel dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Get the RAM origin offset
    pub fn offset(&self) -> Offset {
        self.config.offset
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Access the controller profile
    pub fn profile(&self) -> &ControllerProfile {
        &self.profile
    }

    /// Release the transport
    pub fn release(self) -> T {
        self.transport
    }
}
