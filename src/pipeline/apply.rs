use crate::{
    filters::{
        grayscale::grayscale,
        sepia::sepia,
        sharpen::{BorderPolicy, sharpen},
    },
    foundation::{buffer::PixelBuffer, error::FilterResult},
    pipeline::kind::FilterKind,
};

#[tracing::instrument(skip(buffer), fields(width = buffer.width(), height = buffer.height()))]
/// Apply one filter, taking ownership of `buffer` and returning the result.
///
/// The returned buffer may reuse the input allocation (`None`, `Grayscale`, `Sepia`) or be a
/// fresh one (`Sharpen`); callers should not rely on either. Sharpen borders use
/// [`BorderPolicy::CopySource`].
pub fn apply_filter(buffer: PixelBuffer, kind: &FilterKind) -> FilterResult<PixelBuffer> {
    apply_filter_with(buffer, kind, BorderPolicy::default())
}

/// [`apply_filter`] with an explicit sharpen border policy.
pub fn apply_filter_with(
    buffer: PixelBuffer,
    kind: &FilterKind,
    border: BorderPolicy,
) -> FilterResult<PixelBuffer> {
    match *kind {
        FilterKind::None => Ok(buffer),
        FilterKind::Grayscale => Ok(grayscale(buffer)),
        FilterKind::Sepia => Ok(sepia(buffer)),
        FilterKind::Sharpen { amount } => {
            tracing::debug!(amount, ?border, "sharpen into new buffer");
            sharpen(&buffer, amount, border)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/apply.rs"]
mod tests;
