//! Boundary extraction from glyph alpha masks via square tracking.
//!
//! Extraction runs in two stages:
//! - [`gt_diffuse::diffuse_opacity`] expands the opaque region by a small
//!   tolerance so anti-aliased edges do not fragment the boundary.
//! - A square-tracking walk emits one closed polygon per boundary loop,
//!   repeated until no untraced loop remains. Outer boundaries and hole
//!   boundaries are structurally identical loops; no winding direction is
//!   assigned, and loops appear in raster-scan discovery order.
//!
//! [`contour_set_to_path`] turns the result into a move/line/close command
//! list for clipping or rendering. Fill-rule semantics are left to the
//! consumer.

mod contour;
mod path;
mod trace;

pub use contour::{Contour, ContourSet};
pub use path::{CompoundPath, PathCmd, contour_set_to_path};
pub use trace::{Direction, ExtractConfig, extract_contours};
