use crate::foundation::{
    buffer::{PixelBuffer, check_rgba8_shape},
    channel::narrow,
    error::FilterResult,
};

const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

/// Replace R, G and B with the Rec. 601 luma of the pixel. Alpha is left alone.
pub fn grayscale(mut buffer: PixelBuffer) -> PixelBuffer {
    grayscale_pixels(buffer.as_raw_mut());
    buffer
}

/// Slice form of [`grayscale`]. `data` must hold exactly `width * height * 4` samples.
pub fn grayscale_rgba8_in_place(data: &mut [u8], width: u32, height: u32) -> FilterResult<()> {
    check_rgba8_shape(data, width, height)?;
    grayscale_pixels(data);
    Ok(())
}

fn grayscale_pixels(data: &mut [u8]) {
    for px in data.chunks_exact_mut(4) {
        let l = narrow(
            LUMA_R * f64::from(px[0]) + LUMA_G * f64::from(px[1]) + LUMA_B * f64::from(px[2]),
        );
        px[0] = l;
        px[1] = l;
        px[2] = l;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filters/grayscale.rs"]
mod tests;
