use crate::foundation::{
    buffer::{PixelBuffer, check_rgba8_shape},
    channel::narrow,
    error::{FilterError, FilterResult},
};

/// What the sharpen pass writes for pixels the 3x3 kernel cannot fully cover.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderPolicy {
    /// Copy the outermost ring of pixels from the source unchanged.
    #[default]
    CopySource,
    /// Leave the outermost ring as transparent black `[0, 0, 0, 0]`.
    Zero,
}

/// Sharpen with the 4-neighbour Laplacian kernel scaled by `amount`:
///
/// ```text
///  0   -a    0
/// -a  1+4a  -a
///  0   -a    0
/// ```
///
/// Returns a new buffer with the same dimensions and leaves `buffer` untouched. Interior alpha
/// is copied from the source. Border pixels follow `border`.
pub fn sharpen(buffer: &PixelBuffer, amount: f64, border: BorderPolicy) -> FilterResult<PixelBuffer> {
    let (width, height) = buffer.dimensions();
    let out = sharpen_rgba8(buffer.as_raw(), width, height, amount, border)?;
    PixelBuffer::from_raw(width, height, out)
}

/// Slice form of [`sharpen`]. `src` must hold exactly `width * height * 4` samples.
pub fn sharpen_rgba8(
    src: &[u8],
    width: u32,
    height: u32,
    amount: f64,
    border: BorderPolicy,
) -> FilterResult<Vec<u8>> {
    check_rgba8_shape(src, width, height)?;
    validate_amount(amount)?;

    let mut out = match border {
        BorderPolicy::CopySource => src.to_vec(),
        BorderPolicy::Zero => vec![0u8; src.len()],
    };
    if width < 3 || height < 3 {
        return Ok(out);
    }

    let center = 1.0 + 4.0 * amount;
    let stride = width as usize * 4;
    for y in 1..(height as usize - 1) {
        for x in 1..(width as usize - 1) {
            let idx = y * stride + x * 4;
            let up = idx - stride;
            let down = idx + stride;
            let left = idx - 4;
            let right = idx + 4;
            for c in 0..3 {
                let neighbours = f64::from(src[up + c])
                    + f64::from(src[down + c])
                    + f64::from(src[left + c])
                    + f64::from(src[right + c]);
                out[idx + c] = narrow(center * f64::from(src[idx + c]) - amount * neighbours);
            }
            out[idx + 3] = src[idx + 3];
        }
    }
    Ok(out)
}

pub(crate) fn validate_amount(amount: f64) -> FilterResult<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(FilterError::invalid_parameter(format!(
            "sharpen amount must be finite and >= 0, got {amount}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/filters/sharpen.rs"]
mod tests;
