use crate::foundation::error::{FilterError, FilterResult};

/// Straight (non-premultiplied) RGBA8 pixel.
pub type Rgba8 = [u8; 4];

/// Owned RGBA8 raster, row-major, 4 samples per pixel.
///
/// The sample count is always `width * height * 4`. Constructors taking raw data reject any
/// other length, and no method can change it afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Zero-filled (transparent black) buffer.
    pub fn new(width: u32, height: u32) -> FilterResult<Self> {
        let len = rgba8_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    /// Buffer where every pixel is `px`.
    pub fn filled(width: u32, height: u32, px: Rgba8) -> FilterResult<Self> {
        let len = rgba8_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: px.repeat(len / 4),
        })
    }

    /// Wrap existing samples, validating the length against the dimensions.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> FilterResult<Self> {
        check_rgba8_shape(&data, width, height)?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Mutable view of the samples. The slice cannot be resized, so the shape invariant holds.
    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        let idx = self.index_of(x, y)?;
        let s = &self.data[idx..idx + 4];
        Some([s[0], s[1], s[2], s[3]])
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, px: Rgba8) -> FilterResult<()> {
        let idx = self.index_of(x, y).ok_or_else(|| {
            FilterError::invalid_parameter(format!(
                "pixel ({x},{y}) is outside {}x{}",
                self.width, self.height
            ))
        })?;
        self.data[idx..idx + 4].copy_from_slice(&px);
        Ok(())
    }

    /// Iterate pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgba8> + '_ {
        self.data.chunks_exact(4).map(|s| [s[0], s[1], s[2], s[3]])
    }

    /// Hand the samples over to `image` for encoding or display.
    pub fn into_rgba_image(self) -> FilterResult<image::RgbaImage> {
        let (width, height) = self.dimensions();
        let len = self.data.len();
        image::RgbaImage::from_raw(width, height, self.data)
            .ok_or_else(|| FilterError::invalid_shape(width, height, len))
    }

    fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }
}

impl TryFrom<image::RgbaImage> for PixelBuffer {
    type Error = FilterError;

    /// `image` accepts containers longer than `width * height * 4`; those are rejected here.
    fn try_from(img: image::RgbaImage) -> FilterResult<Self> {
        let (width, height) = img.dimensions();
        Self::from_raw(width, height, img.into_raw())
    }
}

/// Sample count for a `width` x `height` RGBA8 raster. Overflow is an invalid shape.
pub(crate) fn rgba8_len(width: u32, height: u32) -> FilterResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| FilterError::invalid_shape(width, height, 0))
}

/// Reject `data` unless it holds exactly `width * height * 4` samples.
pub(crate) fn check_rgba8_shape(data: &[u8], width: u32, height: u32) -> FilterResult<()> {
    let expected = rgba8_len(width, height)
        .map_err(|_| FilterError::invalid_shape(width, height, data.len()))?;
    if data.len() != expected {
        return Err(FilterError::invalid_shape(width, height, data.len()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/buffer.rs"]
mod tests;
