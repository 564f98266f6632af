use std::io::Write;
use std::process::ExitCode;

use argh::FromArgs;
use log::{debug, info};
use st7565_core::{CArray, PageBuffer, Raster};

use crate::error::{Error, Result};

mod error;
mod source;

#[derive(FromArgs)]
/// Convert an image into a C array for ST7565R displays.
///
/// Any pixel that is white or fully transparent stays blank on the display,
/// every other pixel is drawn. The image height must be a multiple of 8.
struct Args {
    /// image to convert
    #[argh(positional)]
    image: String,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<()> {
    let args = parse_args()?;

    let image = source::load(&args.image)?;
    let mut raster = Raster::from_source(&image);
    // The controller puts row 0 at the bottom of the glass.
    raster.flip_vertical_in_place();
    let bitmap = PageBuffer::pack(&raster)?;

    let name = source::display_name(&args.image);
    let listing = CArray::new(&name, &bitmap).to_string();
    info!(
        "Converted {} ({}x{}) into {} bytes",
        name,
        bitmap.width(),
        bitmap.height(),
        bitmap.as_bytes().len()
    );

    let mut out = std::io::stdout().lock();
    out.write_all(listing.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Exactly one argument, always taken as the image path. It goes behind
/// `--` so names like `help` or `-logo.png` are not read as flags.
fn parse_args() -> Result<Args> {
    let argv: Vec<String> = std::env::args().collect();
    let program = argv.first().map(String::as_str).unwrap_or("img2st7565");
    let usage = || Error::Usage {
        program: program.to_string(),
    };

    let rest = argv.get(1..).unwrap_or_default();
    let [image] = rest else {
        debug!("Expected one argument, got {}", rest.len());
        return Err(usage());
    };

    Args::from_args(&[program], &["--", image.as_str()]).map_err(|exit| {
        debug!("Argument parsing failed: {}", exit.output.trim_end());
        usage()
    })
}
