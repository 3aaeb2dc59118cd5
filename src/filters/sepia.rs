use crate::foundation::{
    buffer::{PixelBuffer, check_rgba8_shape},
    channel::narrow,
    error::FilterResult,
};

/// Row-major color matrix; row `i` produces output channel `i` from `(R, G, B)`.
const SEPIA: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Apply the classic sepia tone matrix to every pixel. Alpha is left alone.
///
/// Not idempotent: the matrix brightens and warms, so a second pass shifts colors again.
pub fn sepia(mut buffer: PixelBuffer) -> PixelBuffer {
    sepia_pixels(buffer.as_raw_mut());
    buffer
}

/// Slice form of [`sepia`]. `data` must hold exactly `width * height * 4` samples.
pub fn sepia_rgba8_in_place(data: &mut [u8], width: u32, height: u32) -> FilterResult<()> {
    check_rgba8_shape(data, width, height)?;
    sepia_pixels(data);
    Ok(())
}

fn sepia_pixels(data: &mut [u8]) {
    for px in data.chunks_exact_mut(4) {
        // Snapshot before writing: every output row reads the original triple.
        let rgb = [f64::from(px[0]), f64::from(px[1]), f64::from(px[2])];
        for (dst, row) in px.iter_mut().zip(SEPIA.iter()) {
            *dst = narrow(row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2]);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filters/sepia.rs"]
mod tests;
