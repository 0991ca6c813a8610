use hires_core::Bitmap;
use image::{DynamicImage, GrayImage, Rgb};
use log::trace;

const ON: u8 = 255;
const OFF: u8 = 0;

/// ITU-R 601-2 luma, truncated.
pub fn luma(pixel: &Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0;
    ((r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000) as u8
}

/// Drops color and alpha, keeping one 8-bit grey channel.
pub fn to_gray(image: &DynamicImage) -> GrayImage {
    match image {
        DynamicImage::ImageLuma8(gray) => gray.clone(),
        DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_) => image.to_luma8(),
        _ => {
            let rgb = image.to_rgb8();
            GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
                image::Luma([luma(rgb.get_pixel(x, y))])
            })
        }
    }
}

/// Floyd-Steinberg error diffusion down to two levels.
///
/// Integer arithmetic, left to right on every row. A pixel turns ON when its
/// corrected value exceeds 128.
pub fn floyd_steinberg(gray: &GrayImage) -> Bitmap {
    let width = gray.width() as usize;
    let height = gray.height() as usize;
    let mut bitmap = Bitmap::new(width, height);
    // errors[x + 1] holds the error carried down onto column x of the next row
    let mut errors = vec![0i32; width + 1];

    for y in 0..height {
        let (mut l, mut l0, mut l1) = (0i32, 0i32, 0i32);
        for x in 0..width {
            let input = gray.get_pixel(x as u32, y as u32)[0] as i32;
            l = (input + (l + errors[x + 1]) / 16).clamp(0, 255);
            let out = if l > 128 { ON } else { OFF };
            bitmap.set(x, y, out);

            let err = l - out as i32;
            errors[x] = 3 * err + l0;
            l0 = 5 * err + l1;
            l1 = err;
            l = 7 * err;
        }
        errors[width] = l0;
    }
    trace!("Dithered {}x{} image", width, height);
    bitmap
}

pub fn binarize(image: &DynamicImage) -> Bitmap {
    floyd_steinberg(&to_gray(image))
}
