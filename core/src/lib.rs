#![no_std]

pub mod error;
pub mod framebuffer;
pub mod listing;
pub mod pixel;
pub mod raster;

extern crate alloc;
#[cfg(test)]
#[macro_use]
extern crate std;

pub use error::{Error, Result};
pub use framebuffer::{PAGE_HEIGHT, PageBuffer};
pub use listing::CArray;
pub use pixel::Rgba;
pub use raster::{Raster, RasterSource};
