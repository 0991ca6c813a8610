//! Assembler listing output.
//!
//! ```text
//! IMG_WIDTH  = 8
//! IMG_HEIGHT = 1
//!
//! IMG_DATA
//!     .BYTE %01010101
//! ```

use embedded_io::Write;
use log::debug;

use crate::{
    error::{Error, Result},
    pack::PackedBytes,
    raster::Raster,
};

pub const DATA_LABEL: &str = "IMG_DATA";

const BYTE_LINE: &[u8; 20] = b"    .BYTE %00000000\n";
const DIGITS_START: usize = 11;

pub fn write_header(out: &mut impl Write, width: usize, height: usize) -> Result<()> {
    write!(
        out,
        "IMG_WIDTH  = {}\nIMG_HEIGHT = {}\n\n{}\n",
        width, height, DATA_LABEL
    )
    .map_err(Error::from_fmt_error)
}

/// Writes one `.BYTE` line, most significant bit first.
pub fn write_byte(out: &mut impl Write, byte: u8) -> Result<()> {
    let mut line = *BYTE_LINE;
    for (i, digit) in line[DIGITS_START..DIGITS_START + 8].iter_mut().enumerate() {
        if byte & (0x80 >> i) != 0 {
            *digit = b'1';
        }
    }
    out.write_all(&line).map_err(Error::from)
}

/// Writes the complete listing and returns the number of data bytes.
pub fn write_listing<R: Raster + ?Sized>(out: &mut impl Write, raster: &R) -> Result<usize> {
    write_header(out, raster.width(), raster.height())?;
    let mut count = 0;
    for byte in PackedBytes::new(raster) {
        write_byte(out, byte)?;
        count += 1;
    }
    debug!(
        "Wrote {} data bytes for {}x{} image",
        count,
        raster.width(),
        raster.height()
    );
    Ok(count)
}
