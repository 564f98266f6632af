use alloc::{vec, vec::Vec};

use embedded_graphics::{
    Pixel,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Size},
};
use log::{debug, trace};

use crate::{
    error::{Result, check_height},
    raster::RasterSource,
};

/// Rows per controller page. One byte covers one column of a page.
pub const PAGE_HEIGHT: u32 = 8;

/// Monochrome bitmap in ST7565R display RAM order.
///
/// The buffer is split into pages of [`PAGE_HEIGHT`] rows. Each page holds
/// one byte per column, left to right, and bit `n` of that byte is row `n`
/// of the page. Pages follow each other top to bottom, so the byte for
/// `(x, y)` lives at `(y / 8) * width + x`. This is the order the controller
/// consumes when the column address auto-increments within a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PageBuffer {
    /// Blank buffer, all pixels off.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_height(height)?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize / PAGE_HEIGHT as usize],
        })
    }

    /// Packs an already oriented raster.
    ///
    /// The raster's row 0 ends up in bit 0 of page 0, so callers targeting
    /// the glass flip the image first.
    pub fn pack(source: &impl RasterSource) -> Result<Self> {
        let mut buffer = Self::new(source.width(), source.height())?;
        let width = buffer.width as usize;
        for page in 0..buffer.page_count() {
            for x in 0..buffer.width {
                let mut byte = 0u8;
                for row in 0..PAGE_HEIGHT {
                    let y = page as u32 * PAGE_HEIGHT + row;
                    let bit = source.pixel(x, y).is_on() as u8;
                    byte |= bit << row;
                }
                buffer.data[page * width + x as usize] = byte;
            }
            trace!("Packed page {}: {:02x?}", page, buffer.page(page));
        }
        debug!(
            "Packed {}x{} image into {} pages ({} bytes)",
            buffer.width,
            buffer.height,
            buffer.page_count(),
            buffer.data.len()
        );
        Ok(buffer)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn page_count(&self) -> usize {
        (self.height / PAGE_HEIGHT) as usize
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Bytes of one page, one per column.
    pub fn page(&self, page: usize) -> &[u8] {
        let width = self.width as usize;
        &self.data[page * width..(page + 1) * width]
    }

    pub fn pages(&self) -> impl Iterator<Item = &[u8]> {
        (0..self.page_count()).map(|page| self.page(page))
    }

    pub fn is_on(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let (byte_index, bit_index) = self.locate(x, y);
        (self.data[byte_index] >> bit_index) & 1 == 1
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: BinaryColor) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let (byte_index, bit_index) = self.locate(x as u32, y as u32);
        match color {
            BinaryColor::On => self.data[byte_index] |= 1 << bit_index,
            BinaryColor::Off => self.data[byte_index] &= !(1 << bit_index),
        }
    }

    /// Row-major on/off grid, the inverse of [`PageBuffer::pack`].
    pub fn unpack(&self) -> Vec<bool> {
        let mut pixels = Vec::with_capacity(self.width as usize * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                pixels.push(self.is_on(x, y));
            }
        }
        pixels
    }

    fn locate(&self, x: u32, y: u32) -> (usize, u32) {
        let page = (y / PAGE_HEIGHT) as usize;
        (page * self.width as usize + x as usize, y % PAGE_HEIGHT)
    }
}

impl OriginDimensions for PageBuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for PageBuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            self.set_pixel(coord.x, coord.y, color);
        }
        Ok(())
    }
}
