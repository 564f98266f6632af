use core::fmt;

use crate::framebuffer::PAGE_HEIGHT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Height is not a whole number of pages.
    InvalidHeight(u32),
    /// Pixel buffer does not match `width * height`.
    PixelCount { expected: usize, actual: usize },
}

pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidHeight(height) => write!(
                f,
                "Image height should be multiple of {PAGE_HEIGHT}, but is {height}"
            ),
            Error::PixelCount { expected, actual } => {
                write!(f, "Expected {expected} pixels, got {actual}")
            }
        }
    }
}

impl core::error::Error for Error {}

/// Fails unless `height` splits into whole pages.
pub fn check_height(height: u32) -> Result<()> {
    if height % PAGE_HEIGHT != 0 {
        return Err(Error::InvalidHeight(height));
    }
    Ok(())
}
