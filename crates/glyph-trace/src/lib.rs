//! Umbrella crate for the `glyph-trace` workspace.
//!
//! This crate re-exports the library crates so applications can depend on
//! a single entry point: raster primitives from `gt-core`, the diffusion
//! pre-pass from `gt-diffuse`, and boundary extraction from `gt-contour`.

pub use gt_contour::*;
pub use gt_core::*;
pub use gt_diffuse::*;
