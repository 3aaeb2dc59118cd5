/// Convenience result type used across rasterfx.
pub type FilterResult<T> = Result<T, FilterError>;

/// Top-level error taxonomy for the filter core.
#[derive(thiserror::Error, Debug)]
pub enum FilterError {
    /// Sample count does not match `width * height * 4`.
    #[error("invalid buffer shape: {len} bytes for {width}x{height} rgba8")]
    InvalidBufferShape {
        /// Declared width in pixels.
        width: u32,
        /// Declared height in pixels.
        height: u32,
        /// Actual sample count.
        len: usize,
    },

    /// Filter name that does not map to a known [`crate::FilterKind`].
    #[error("unsupported filter kind: {0}")]
    UnsupportedFilterKind(String),

    /// Out-of-domain filter or batch parameter.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Recipe could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FilterError {
    /// Build a [`FilterError::InvalidBufferShape`] value.
    pub fn invalid_shape(width: u32, height: u32, len: usize) -> Self {
        Self::InvalidBufferShape { width, height, len }
    }

    /// Build a [`FilterError::UnsupportedFilterKind`] value.
    pub fn unsupported_kind(kind: impl Into<String>) -> Self {
        Self::UnsupportedFilterKind(kind.into())
    }

    /// Build a [`FilterError::InvalidParameter`] value.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Build a [`FilterError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
