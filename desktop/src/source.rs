use std::path::Path;

use image::{DynamicImage, ImageReader, ImageResult, RgbaImage};
use log::debug;
use st7565_core::{Rgba, RasterSource, error::check_height};

use crate::error::{Error, Result};

/// Decoded input, normalized to 8-bit RGBA.
pub struct DecodedImage(RgbaImage);

impl RasterSource for DecodedImage {
    fn width(&self) -> u32 {
        self.0.width()
    }

    fn height(&self) -> u32 {
        self.0.height()
    }

    fn pixel(&self, x: u32, y: u32) -> Rgba {
        Rgba::from(self.0.get_pixel(x, y).0)
    }
}

/// Opens any format the `image` crate was built with. The format is sniffed
/// from the file contents, falling back to the extension. The height is
/// checked before the RGBA conversion.
pub fn load(path: &str) -> Result<DecodedImage> {
    let image = decode(path).map_err(|source| Error::Decode {
        path: path.to_string(),
        source,
    })?;
    debug!(
        "Decoded {}: {}x{} {:?}",
        path,
        image.width(),
        image.height(),
        image.color()
    );
    check_height(image.height())?;
    Ok(DecodedImage(image.into_rgba8()))
}

fn decode(path: &str) -> ImageResult<DynamicImage> {
    ImageReader::open(path)?.with_guessed_format()?.decode()
}

/// Final path component, used in the listing header.
pub fn display_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
