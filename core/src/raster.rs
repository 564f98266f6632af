use alloc::vec::Vec;

use crate::{
    error::{Error, Result},
    pixel::Rgba,
};

/// Anything that can hand out RGBA pixels by coordinate.
///
/// Decoders implement this so the packer never depends on a concrete image
/// library. `(0, 0)` is the top left corner.
pub trait RasterSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Callers stay within `width() x height()`.
    fn pixel(&self, x: u32, y: u32) -> Rgba;
}

/// Owned, row-major RGBA grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Raster {
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::PixelCount {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn filled(width: u32, height: u32, pixel: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: alloc::vec![pixel; width as usize * height as usize],
        }
    }

    pub fn from_source(source: &impl RasterSource) -> Self {
        let (width, height) = (source.width(), source.height());
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(source.pixel(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Rgba) {
        if x < self.width && y < self.height {
            let index = self.index(x, y);
            self.pixels[index] = pixel;
        }
    }

    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Rgba]> + ExactSizeIterator {
        // chunks_exact(0) panics; a zero-width grid has no pixels anyway
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Mirrored copy: the first row becomes the last.
    ///
    /// The ST7565R addresses row 0 at the bottom of the glass while decoders
    /// put it at the top.
    pub fn flip_vertical(&self) -> Self {
        let mut pixels = Vec::with_capacity(self.pixels.len());
        for row in self.rows().rev() {
            pixels.extend_from_slice(row);
        }
        Self {
            width: self.width,
            height: self.height,
            pixels,
        }
    }

    pub fn flip_vertical_in_place(&mut self) {
        let width = self.width as usize;
        let height = self.height as usize;
        for y in 0..height / 2 {
            let (top, bottom) = self.pixels.split_at_mut((height - 1 - y) * width);
            top[y * width..(y + 1) * width].swap_with_slice(&mut bottom[..width]);
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl RasterSource for Raster {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> Rgba {
        self.pixels[self.index(x, y)]
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use proptest::prelude::*;

    use super::*;

    fn gradient(width: u32, height: u32) -> Raster {
        let mut raster = Raster::filled(width, height, Rgba::TRANSPARENT);
        for y in 0..height {
            for x in 0..width {
                raster.set_pixel(x, y, Rgba::new(x as u8, y as u8, 0x80, 0xFF));
            }
        }
        raster
    }

    #[test]
    fn rejects_wrong_pixel_count() {
        let err = Raster::new(2, 2, vec![Rgba::WHITE; 3]).unwrap_err();
        assert_eq!(err, Error::PixelCount { expected: 4, actual: 3 });
    }

    #[test]
    fn flip_mirrors_rows() {
        let raster = gradient(3, 4);
        let flipped = raster.flip_vertical();
        assert_eq!(flipped.width(), 3);
        assert_eq!(flipped.height(), 4);
        for y in 0..4 {
            for x in 0..3 {
                assert_eq!(flipped.pixel(x, y), raster.pixel(x, 3 - y));
            }
        }
    }

    #[test]
    fn rows_walk_both_ends() {
        let raster = gradient(2, 3);
        assert_eq!(raster.rows().len(), 3);
        let last = raster.rows().next_back().unwrap();
        assert_eq!(last, &[raster.pixel(0, 2), raster.pixel(1, 2)]);
        let bottom_up: Vec<&[Rgba]> = raster.rows().rev().collect();
        assert_eq!(bottom_up[2], &[raster.pixel(0, 0), raster.pixel(1, 0)]);
    }

    #[test]
    fn in_place_flip_matches_copy() {
        for height in [0, 1, 2, 5, 8] {
            let raster = gradient(4, height);
            let mut in_place = raster.clone();
            in_place.flip_vertical_in_place();
            assert_eq!(in_place, raster.flip_vertical());
        }
    }

    #[test]
    fn copies_any_source() {
        struct Checker;
        impl RasterSource for Checker {
            fn width(&self) -> u32 {
                2
            }
            fn height(&self) -> u32 {
                2
            }
            fn pixel(&self, x: u32, y: u32) -> Rgba {
                if (x + y) % 2 == 0 {
                    Rgba::BLACK
                } else {
                    Rgba::WHITE
                }
            }
        }
        let raster = Raster::from_source(&Checker);
        assert_eq!(
            raster.pixels(),
            &[Rgba::BLACK, Rgba::WHITE, Rgba::WHITE, Rgba::BLACK]
        );
    }

    proptest! {
        #[test]
        fn flip_is_self_inverse(
            width in 0u32..16,
            height in 0u32..16,
            seed in any::<[u8; 4]>(),
        ) {
            let mut raster = Raster::filled(width, height, Rgba::from(seed));
            for y in 0..height {
                for x in 0..width {
                    let px = Rgba::new(
                        seed[0].wrapping_add(x as u8),
                        seed[1].wrapping_mul(y as u8),
                        seed[2] ^ (x as u8),
                        seed[3].wrapping_sub(y as u8),
                    );
                    raster.set_pixel(x, y, px);
                }
            }
            prop_assert_eq!(&raster.flip_vertical().flip_vertical(), &raster);

            let mut twice = raster.clone();
            twice.flip_vertical_in_place();
            twice.flip_vertical_in_place();
            prop_assert_eq!(&twice, &raster);
        }
    }
}
