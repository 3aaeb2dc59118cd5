//! rasterfx applies CPU raster filters to decoded RGBA8 images.
//!
//! The core works on [`PixelBuffer`] (straight RGBA8, row-major) and never decodes, encodes
//! or stores images itself. Hosts hand a buffer in, pick a [`FilterKind`] and take ownership of
//! the result:
//!
//! - [`apply_filter`]: one filter (grayscale, sepia, sharpen or identity).
//! - [`FilterChain`] / [`FilterRecipe`]: ordered filters, optionally loaded from JSON.
//! - [`apply_batch`]: one chain over many independent buffers on a rayon pool.
//!
//! Grayscale and sepia reuse the input allocation. Sharpen writes a fresh buffer and handles
//! the 1-pixel edge according to [`BorderPolicy`].
#![forbid(unsafe_code)]

mod filters;
mod foundation;
mod pipeline;

pub use filters::grayscale::{grayscale, grayscale_rgba8_in_place};
pub use filters::sepia::{sepia, sepia_rgba8_in_place};
pub use filters::sharpen::{BorderPolicy, sharpen, sharpen_rgba8};
pub use foundation::buffer::{PixelBuffer, Rgba8};
pub use foundation::error::{FilterError, FilterResult};
pub use pipeline::apply::{apply_filter, apply_filter_with};
pub use pipeline::batch::{BatchOpts, apply_batch};
pub use pipeline::kind::{DEFAULT_SHARPEN_AMOUNT, FilterInstance, FilterKind, parse_filter};
pub use pipeline::recipe::{FilterChain, FilterRecipe};
