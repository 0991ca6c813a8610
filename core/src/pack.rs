use core::iter::FusedIterator;

use alloc::vec::Vec;
use log::trace;

use crate::raster::Raster;

/// Pending bits of the byte currently being assembled.
///
/// The first pushed bit ends up in the most significant position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BitAccumulator {
    bits: u8,
    len: u8,
}

impl BitAccumulator {
    pub const fn new() -> Self {
        Self { bits: 0, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends one bit, returning the completed byte once eight are queued.
    pub fn push(&mut self, on: bool) -> Option<u8> {
        self.bits = (self.bits << 1) | on as u8;
        self.len += 1;
        if self.len == 8 {
            let byte = self.bits;
            *self = Self::new();
            Some(byte)
        } else {
            None
        }
    }

    /// Emits the partial byte, OFF-padded in the low bits.
    pub fn finish(&mut self) -> Option<u8> {
        if self.is_empty() {
            return None;
        }
        let byte = self.bits << (8 - self.len);
        *self = Self::new();
        Some(byte)
    }
}

/// Number of bytes needed for a `width` x `height` raster, `None` on overflow.
pub fn packed_len(width: usize, height: usize) -> Option<usize> {
    width.checked_mul(height).map(|bits| bits.div_ceil(8))
}

/// Row-major stream of packed bytes for a raster.
pub struct PackedBytes<'a, R: Raster + ?Sized> {
    raster: &'a R,
    width: usize,
    total: usize,
    pos: usize,
    acc: BitAccumulator,
    done: bool,
}

impl<'a, R: Raster + ?Sized> PackedBytes<'a, R> {
    /// # Panics
    ///
    /// Panics if the raster holds more than `usize::MAX` pixels.
    pub fn new(raster: &'a R) -> Self {
        let width = raster.width();
        let total = width
            .checked_mul(raster.height())
            .expect("raster pixel count overflows usize");
        trace!("Packing {}x{} raster", width, raster.height());
        Self {
            raster,
            width,
            total,
            pos: 0,
            acc: BitAccumulator::new(),
            done: false,
        }
    }

    fn remaining(&self) -> usize {
        if self.done {
            0
        } else {
            (self.total - self.pos + self.acc.len()).div_ceil(8)
        }
    }
}

impl<R: Raster + ?Sized> Iterator for PackedBytes<'_, R> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        while self.pos < self.total {
            let (x, y) = (self.pos % self.width, self.pos / self.width);
            self.pos += 1;
            if let Some(byte) = self.acc.push(self.raster.is_on(x, y)) {
                return Some(byte);
            }
        }
        if self.done {
            return None;
        }
        self.done = true;
        self.acc.finish()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<R: Raster + ?Sized> ExactSizeIterator for PackedBytes<'_, R> {}

impl<R: Raster + ?Sized> FusedIterator for PackedBytes<'_, R> {}

pub fn pack<R: Raster + ?Sized>(raster: &R) -> Vec<u8> {
    PackedBytes::new(raster).collect()
}

#[cfg(test)]
#[rustfmt::skip]
mod tests {
    extern crate std;

    use super::*;
    use crate::raster::Bitmap;
    use alloc::vec;

    fn row(pixels: &[u8]) -> Bitmap {
        Bitmap::from_pixels(pixels.len(), 1, pixels.to_vec()).unwrap()
    }

    #[test]
    fn test_accumulator_flushes_at_eight() {
        let mut acc = BitAccumulator::new();
        for bit in [true, false, true, false, true, false, true] {
            assert_eq!(acc.push(bit), None);
        }
        assert_eq!(acc.len(), 7);
        assert_eq!(acc.push(false), Some(0b1010_1010));
        assert!(acc.is_empty());
        assert_eq!(acc.finish(), None);
    }

    #[test]
    fn test_accumulator_pads_low_bits() {
        let mut acc = BitAccumulator::new();
        acc.push(true);
        acc.push(true);
        acc.push(true);
        assert_eq!(acc.finish(), Some(0b1110_0000));
        assert!(acc.is_empty());
    }

    #[test]
    fn test_example_rasters() {
        assert_eq!(pack(&row(&[0, 1, 0, 1, 0, 1, 0, 1])), vec![0b0101_0101]);
        assert_eq!(pack(&row(&[1, 1, 1])), vec![0b1110_0000]);
        assert_eq!(pack(&Bitmap::new(0, 0)), Vec::<u8>::new());
        assert_eq!(pack(&row(&[1; 16])), vec![0xFF, 0xFF]);
        assert_eq!(pack(&row(&[1, 0, 0, 0, 0, 0, 0, 0, 1])), vec![0b1000_0000, 0b1000_0000]);
    }

    #[test]
    fn test_degenerate_dimensions() {
        assert!(pack(&Bitmap::new(0, 5)).is_empty());
        assert!(pack(&Bitmap::new(5, 0)).is_empty());
    }

    #[test]
    fn test_byte_count_and_padding() {
        for width in 0..20 {
            for height in 0..6 {
                let bitmap = Bitmap::from_pixels(width, height, vec![0xFF; width * height]).unwrap();
                let bytes = pack(&bitmap);
                assert_eq!(Some(bytes.len()), packed_len(width, height));
                let rem = (width * height) % 8;
                if rem != 0 {
                    let last = *bytes.last().unwrap();
                    assert_eq!(last, 0xFFu8 << (8 - rem), "{}x{}", width, height);
                }
            }
        }
    }

    #[test]
    fn test_row_major_order() {
        // 3x3 with only the centre and the last pixel set
        let mut bitmap = Bitmap::new(3, 3);
        bitmap.set(1, 1, 1);
        bitmap.set(2, 2, 1);
        // bits: 000 010 001 -> 00001000 1(0000000)
        assert_eq!(pack(&bitmap), vec![0b0000_1000, 0b1000_0000]);
    }

    #[test]
    fn test_size_hint_is_exact() {
        let bitmap = Bitmap::new(5, 5);
        let mut iter = PackedBytes::new(&bitmap);
        let mut expected = packed_len(5, 5).unwrap();
        assert_eq!(iter.len(), expected);
        while iter.next().is_some() {
            expected -= 1;
            assert_eq!(iter.len(), expected);
        }
        assert_eq!(expected, 0);
        assert_eq!(iter.next(), None);
    }

    struct Unbounded;

    impl Raster for Unbounded {
        fn width(&self) -> usize {
            usize::MAX
        }

        fn height(&self) -> usize {
            2
        }

        fn pixel_at(&self, _x: usize, _y: usize) -> u8 {
            0
        }
    }

    #[test]
    fn test_packed_len_overflow() {
        assert_eq!(packed_len(usize::MAX, 2), None);
        assert_eq!(packed_len(usize::MAX, 1), Some(usize::MAX.div_ceil(8)));
    }

    #[test]
    #[should_panic(expected = "overflows")]
    fn test_packing_overflowing_raster_panics() {
        PackedBytes::new(&Unbounded);
    }

    #[test]
    fn test_pack_is_deterministic() {
        let bitmap = Bitmap::from_pixels(7, 3, (0..21u8).map(|v| v % 3).collect()).unwrap();
        assert_eq!(pack(&bitmap), pack(&bitmap));
    }
}
