use std::process::exit;

use argh::FromArgs;
use embedded_io::Write;
use hires_core::{Error, MAX_HIRES_WIDTH, Raster, listing, packed_len};
use log::{error, info, warn};

use crate::std_io::StdoutWriter;

mod binarize;
mod std_io;

#[derive(FromArgs)]
/// Convert an image into a hires `.BYTE` listing on stdout
struct Args {
    /// input image path
    #[argh(positional)]
    input_path: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    let image = image::open(&args.input_path).unwrap_or_else(|err| {
        error!("Failed to open input image {}: {}", args.input_path, err);
        exit(1);
    });

    let bitmap = binarize::binarize(&image);
    let Some(byte_count) = packed_len(bitmap.width(), bitmap.height()) else {
        error!("Input image {} is too large", args.input_path);
        exit(1);
    };
    info!(
        "Converting {} ({}x{}, {} bytes)",
        args.input_path,
        bitmap.width(),
        bitmap.height(),
        byte_count
    );
    if bitmap.width() > MAX_HIRES_WIDTH {
        warn!(
            "Image is {} pixels wide, hires routines only handle {}",
            bitmap.width(),
            MAX_HIRES_WIDTH
        );
    }

    let mut out = StdoutWriter::new();
    let result = listing::write_listing(&mut out, &bitmap).and_then(|count| {
        out.flush().map_err(Error::from)?;
        Ok(count)
    });
    match result {
        Ok(count) => info!("Wrote {} bytes", count),
        Err(err) => {
            error!("Failed to write listing: {}", err);
            exit(1);
        }
    }
}
