//! Graphics support via embedded-graphics
//!
//! [`Display`] implements [`DrawTarget`] with [`Rgb565`] colors, so the whole
//! embedded-graphics ecosystem (primitives, fonts, images) draws straight to
//! the panel. There is no frame buffer: every draw call turns into windowed
//! RAM writes.
//!
//! - Pixels outside the panel are dropped
//! - Solid fills are clipped to the panel and streamed in buffered chunks
//! - Contiguous fills fully on the panel go out as one block write
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     pixelcolor::Rgb565,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use rgb_display::{Builder, ControllerProfile, Dimensions, Display, SpiInterface};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # let mut delay = MockDelay;
//! # let dims = match Dimensions::new(240, 320) {
//! #     Ok(dims) => dims,
//! #     Err(_) => return,
//! # };
//! # let config = match Builder::new().dimensions(dims).build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! let interface = SpiInterface::new(MockSpi, MockPin, MockPin);
//! let mut display = match Display::new(interface, ControllerProfile::mipi_dcs(), config, &mut delay) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//!
//! let _ = display.clear(Rgb565::BLACK);
//!
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(100, 50), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(Rgb565::GREEN, 2))
//!     .draw(&mut display);
//!
//! let _ = Text::new(
//!     "Hello, TFT!",
//!     Point::new(10, 100),
//!     MonoTextStyle::new(&FONT_6X10, Rgb565::WHITE),
//! )
//! .draw(&mut display);
//! ```

use alloc::vec::Vec;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Dimensions as _, OriginDimensions, Size},
    pixelcolor::{IntoStorage, Rgb565},
    prelude::Pixel,
    primitives::{PointsIter, Rectangle},
};

use crate::color::BYTES_PER_PIXEL;
use crate::display::Display;
use crate::error::Error;
use crate::interface::BusTransport;
use crate::window::Window;

impl<T> DrawTarget for Display<T>
where
    T: BusTransport,
{
    type Color = Rgb565;
    type Error = Error<T>;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.write_pixel(point.x, point.y, color.into_storage())?;
        }
        Ok(())
    }

    /// Write `colors` row by row into `area`
    ///
    /// On-panel areas go out as one block. If `colors` yields fewer than
    /// `area` pixels, the block is sent short and the controller leaves the
    /// rest of the window untouched; extra colors are ignored.
    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };
        if area.intersection(&self.bounding_box()) != *area {
            return self.draw_iter(
                area.points()
                    .zip(colors)
                    .map(|(point, color)| Pixel(point, color)),
            );
        }

        let format = self.profile().pixel_format();
        let count = area.size.width as usize * area.size.height as usize;
        let mut data = Vec::with_capacity(count * BYTES_PER_PIXEL);
        for color in colors.into_iter().take(count) {
            data.extend_from_slice(&format.encode(color.into_storage()));
        }

        let window = Window::new(
            area.top_left.x as u16,
            area.top_left.y as u16,
            bottom_right.x as u16,
            bottom_right.y as u16,
        );
        self.write_block(window, &data)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.is_zero_sized() {
            return Ok(());
        }
        self.fill_rectangle(
            area.top_left.x,
            area.top_left.y,
            area.size.width as i32,
            area.size.height as i32,
            color.into_storage(),
        )
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.into_storage())
    }
}

impl<T> OriginDimensions for Display<T>
where
    T: BusTransport,
{
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, Dimensions};
    use crate::profile::ControllerProfile;
    use alloc::vec;
    use core::convert::Infallible;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{Line, PrimitiveStyle};
    use embedded_hal::delay::DelayNs;

    #[derive(Debug, Clone, PartialEq)]
    enum Transfer {
        Command(u8),
        Data(Vec<u8>),
    }

    #[derive(Debug, Default)]
    struct RecordingBus {
        log: Vec<Transfer>,
    }

    impl BusTransport for RecordingBus {
        type Error = Infallible;

        fn write(&mut self, command: Option<u8>, data: Option<&[u8]>) -> Result<(), Infallible> {
            if let Some(command) = command {
                self.log.push(Transfer::Command(command));
            }
            if let Some(data) = data {
                self.log.push(Transfer::Data(data.to_vec()));
            }
            Ok(())
        }

        fn read(&mut self, command: Option<u8>, buf: &mut [u8]) -> Result<(), Infallible> {
            if let Some(command) = command {
                self.log.push(Transfer::Command(command));
            }
            buf.fill(0);
            Ok(())
        }
    }

    struct MockDelay;
    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn test_display(width: u16, height: u16) -> Display<RecordingBus> {
        let config = Builder::new()
            .dimensions(Dimensions::new(width, height).unwrap())
            .build()
            .unwrap();
        Display::new(
            RecordingBus::default(),
            ControllerProfile::mipi_dcs(),
            config,
            &mut MockDelay,
        )
        .unwrap()
    }

    fn log(display: Display<RecordingBus>) -> Vec<Transfer> {
        display.release().log
    }

    fn range(start: u16, end: u16) -> Transfer {
        let [s0, s1] = start.to_be_bytes();
        let [e0, e1] = end.to_be_bytes();
        Transfer::Data(vec![s0, s1, e0, e1])
    }

    #[test]
    fn test_size_matches_panel() {
        let display = test_display(240, 135);
        assert_eq!(display.size(), Size::new(240, 135));
    }

    #[test]
    fn test_draw_pixel() {
        let mut display = test_display(8, 8);
        Pixel(Point::new(1, 2), Rgb565::RED)
            .draw(&mut display)
            .unwrap();
        assert_eq!(
            log(display),
            [
                Transfer::Command(0x2A),
                range(1, 1),
                Transfer::Command(0x2B),
                range(2, 2),
                Transfer::Command(0x2C),
                Transfer::Data(vec![0xF8, 0x00]),
            ]
        );
    }

    #[test]
    fn test_draw_pixel_off_panel_is_dropped() {
        let mut display = test_display(8, 8);
        Pixel(Point::new(-1, 2), Rgb565::RED)
            .draw(&mut display)
            .unwrap();
        Pixel(Point::new(8, 0), Rgb565::RED)
            .draw(&mut display)
            .unwrap();
        assert!(log(display).is_empty());
    }

    #[test]
    fn test_filled_rectangle_is_clipped() {
        let mut display = test_display(8, 8);
        Rectangle::new(Point::new(-2, 6), Size::new(4, 10))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::BLUE))
            .draw(&mut display)
            .unwrap();
        let log = log(display);
        assert_eq!(log[1], range(0, 1));
        assert_eq!(log[3], range(6, 7));
        assert_eq!(log[4], Transfer::Command(0x2C));
        assert_eq!(log[5], Transfer::Data([0x00, 0x1F].repeat(4)));
    }

    #[test]
    fn test_fill_solid_off_panel_does_nothing() {
        let mut display = test_display(8, 8);
        display
            .fill_solid(&Rectangle::new(Point::new(20, 20), Size::new(4, 4)), Rgb565::RED)
            .unwrap();
        assert!(log(display).is_empty());
    }

    #[test]
    fn test_clear_fills_panel() {
        let mut display = test_display(4, 2);
        display.clear(Rgb565::WHITE).unwrap();
        let log = log(display);
        assert_eq!(log[1], range(0, 3));
        assert_eq!(log[3], range(0, 1));
        assert_eq!(log[5], Transfer::Data([0xFF, 0xFF].repeat(8)));
    }

    #[test]
    fn test_fill_contiguous_on_panel_is_one_block() {
        let mut display = test_display(8, 8);
        let colors = [Rgb565::RED, Rgb565::GREEN, Rgb565::BLUE, Rgb565::WHITE];
        display
            .fill_contiguous(&Rectangle::new(Point::new(2, 3), Size::new(2, 2)), colors)
            .unwrap();
        assert_eq!(
            log(display),
            [
                Transfer::Command(0x2A),
                range(2, 3),
                Transfer::Command(0x2B),
                range(3, 4),
                Transfer::Command(0x2C),
                Transfer::Data(vec![0xF8, 0x00, 0x07, 0xE0, 0x00, 0x1F, 0xFF, 0xFF]),
            ]
        );
    }

    #[test]
    fn test_fill_contiguous_short_colors_send_short_block() {
        let mut display = test_display(8, 8);
        let colors = [Rgb565::RED, Rgb565::BLUE];
        display
            .fill_contiguous(&Rectangle::new(Point::new(0, 0), Size::new(2, 2)), colors)
            .unwrap();
        assert_eq!(
            log(display).last(),
            Some(&Transfer::Data(vec![0xF8, 0x00, 0x00, 0x1F]))
        );
    }

    #[test]
    fn test_fill_contiguous_extra_colors_are_ignored() {
        let mut display = test_display(8, 8);
        let colors = [Rgb565::GREEN; 6];
        display
            .fill_contiguous(&Rectangle::new(Point::new(0, 0), Size::new(2, 1)), colors)
            .unwrap();
        assert_eq!(
            log(display).last(),
            Some(&Transfer::Data([0x07, 0xE0].repeat(2)))
        );
    }

    #[test]
    fn test_fill_contiguous_partially_off_panel_draws_visible_pixels() {
        let mut display = test_display(8, 8);
        let colors = [Rgb565::RED; 4];
        display
            .fill_contiguous(&Rectangle::new(Point::new(7, 0), Size::new(2, 2)), colors)
            .unwrap();
        let writes = log(display)
            .iter()
            .filter(|t| **t == Transfer::Command(0x2C))
            .count();
        assert_eq!(writes, 2);
    }

    #[test]
    fn test_line_draws_pixels() {
        let mut display = test_display(8, 8);
        Line::new(Point::new(0, 0), Point::new(3, 3))
            .into_styled(PrimitiveStyle::with_stroke(Rgb565::GREEN, 1))
            .draw(&mut display)
            .unwrap();
        let pixels = log(display)
            .iter()
            .filter(|t| **t == Transfer::Data(vec![0x07, 0xE0]))
            .count();
        assert_eq!(pixels, 4);
    }
}
