//! Converts binarized rasters into packed 1-bit-per-pixel `.BYTE` listings
//! for hires graphics mode.
#![no_std]

pub mod error;
pub mod listing;
pub mod pack;
pub mod raster;

extern crate alloc;

pub use error::Error;
pub use listing::write_listing;
pub use pack::{BitAccumulator, PackedBytes, pack, packed_len};
pub use raster::{Bitmap, MAX_HIRES_WIDTH, Raster};
