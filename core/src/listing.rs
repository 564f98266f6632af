use core::fmt;

use crate::framebuffer::PageBuffer;

// Page lines open with five spaces.
const INDENT: &str = "     ";

/// C declaration of a [`PageBuffer`], one source line per page.
///
/// ```text
/// /* logo.png (128x32) */
/// uint8_t data[512] = {
///      0x00, 0xff, ...
/// };
/// ```
pub struct CArray<'a> {
    /// Shown in the header comment, usually the input file name.
    pub name: &'a str,
    pub bitmap: &'a PageBuffer,
}

impl<'a> CArray<'a> {
    pub fn new(name: &'a str, bitmap: &'a PageBuffer) -> Self {
        Self { name, bitmap }
    }
}

impl fmt::Display for CArray<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bitmap = self.bitmap;
        writeln!(f, "/* {} ({}x{}) */", self.name, bitmap.width(), bitmap.height())?;
        writeln!(f, "uint8_t data[{}] = {{", bitmap.as_bytes().len())?;
        for page in bitmap.pages() {
            f.write_str(INDENT)?;
            for (i, byte) in page.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "0x{byte:02x},")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "}};")
    }
}
