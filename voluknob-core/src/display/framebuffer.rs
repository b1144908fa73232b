//! 1-bit frame buffer
//!
//! Organised as 8 pages of 128 column bytes, the native layout of
//! SSD1306/SH1106 controllers: bit `y % 8` of `pages[y / 8][x]` is pixel
//! (x, y). Drivers can send pages straight to the panel.

use core::convert::Infallible;

use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use super::bitmap::Bitmap;

/// Display width in pixels
pub const WIDTH: usize = 128;

/// Display height in pixels
pub const HEIGHT: usize = 64;

/// Number of 8-pixel pages
pub const PAGES: usize = HEIGHT / 8;

/// Frame buffer for a 128x64 monochrome panel
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pages: [[u8; WIDTH]; PAGES],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("lit", &self.lit_count())
            .finish()
    }
}

impl FrameBuffer {
    /// Create a blank frame buffer
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
        }
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
    }

    /// Set one pixel
    ///
    /// Coordinates outside the panel are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        let mask = 1u8 << (y % 8);
        let byte = &mut self.pages[y / 8][x];
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    /// Read one pixel (off outside the panel)
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        self.pages[y / 8][x] & (1 << (y % 8)) != 0
    }

    /// Number of lit pixels
    pub fn lit_count(&self) -> u32 {
        self.pages
            .iter()
            .flat_map(|page| page.iter())
            .map(|byte| byte.count_ones())
            .sum()
    }

    /// One page of column bytes
    pub fn page(&self, index: usize) -> &[u8; WIDTH] {
        &self.pages[index]
    }

    /// All pages, top to bottom
    pub fn pages(&self) -> &[[u8; WIDTH]; PAGES] {
        &self.pages
    }

    /// Plot a bitmap with its top-left corner at (`x_offset`, `y_offset`)
    ///
    /// Only lit bits are written; unset bits leave the buffer untouched.
    pub fn draw_bitmap(&mut self, bitmap: &Bitmap, x_offset: i32, y_offset: i32) {
        for (x, y) in bitmap.lit_pixels() {
            self.set_pixel(x as i32 + x_offset, y as i32 + y_offset, true);
        }
    }

    /// Draw one 5x8 character with its top-left corner at (`x`, `y`)
    pub fn draw_char(&mut self, ch: char, x: i32, y: i32) {
        let mut utf8 = [0u8; 4];
        let text = ch.encode_utf8(&mut utf8);
        let style = MonoTextStyle::new(&FONT_5X8, BinaryColor::On);
        let _ = Text::with_baseline(text, Point::new(x, y), style, Baseline::Top).draw(self);
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }
}
