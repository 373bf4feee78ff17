//! Foundational primitives for glyph outline extraction.
//!
//! ## Alpha Views and Stride
//! Alpha planes use element stride. `stride` is the distance, in elements,
//! between adjacent row starts and may be greater than `width`. This allows
//! borrowed views over padded buffers and cropped cells of a glyph sheet.
//!
//! ## Opacity
//! A pixel is opaque iff its alpha value is non-zero. Out-of-bounds lookups
//! read as transparent; boundary tracing relies on that.

mod error;
mod geom;
mod image;
mod mask;

pub use error::Error;
pub use geom::Point2f;
pub use image::{AlphaImage, AlphaView};
pub use mask::Mask;
