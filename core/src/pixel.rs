use embedded_graphics::pixelcolor::BinaryColor;

/// 8-bit RGBA pixel as handed over by the image decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(0xFF, 0xFF, 0xFF, 0xFF);
    pub const BLACK: Rgba = Rgba::new(0x00, 0x00, 0x00, 0xFF);
    pub const TRANSPARENT: Rgba = Rgba::new(0x00, 0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Whether this pixel lights up on the display.
    ///
    /// Only fully transparent pixels and opaque pure white stay off. Anything
    /// else, near-white included, is drawn. This is an exact match on white,
    /// not a luminance threshold.
    pub const fn is_on(self) -> bool {
        self.a > 0 && !(self.r == 0xFF && self.g == 0xFF && self.b == 0xFF)
    }

    pub const fn color(self) -> BinaryColor {
        if self.is_on() {
            BinaryColor::On
        } else {
            BinaryColor::Off
        }
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(px: Rgba) -> Self {
        [px.r, px.g, px.b, px.a]
    }
}
