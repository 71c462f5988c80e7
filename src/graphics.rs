//! `embedded-graphics` support: a `Display` can be used as a `DrawTarget` of `BinaryColor`, so all
//! shapes, text and images of that crate render into the frame buffer. Call `Display::flush`
//! afterwards to show them.

use core::convert::{Infallible, TryFrom};

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
    Pixel,
};

use crate::canvas::Color;
use crate::display::Display;
use crate::interface;

impl From<BinaryColor> for Color {
    fn from(color: BinaryColor) -> Self {
        match color {
            BinaryColor::On => Color::On,
            BinaryColor::Off => Color::Off,
        }
    }
}

impl<DI> DrawTarget for Display<DI>
where
    DI: interface::DisplayInterface,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels.into_iter() {
            // Anything beyond i16 is far off the panel anyway.
            if let (Ok(x), Ok(y)) = (i16::try_from(point.x), i16::try_from(point.y)) {
                self.draw_pixel(x, y, color.into());
            }
        }
        Ok(())
    }
}

impl<DI> OriginDimensions for Display<DI>
where
    DI: interface::DisplayInterface,
{
    fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }
}
