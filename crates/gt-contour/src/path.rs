use gt_core::Point2f;

use crate::contour::ContourSet;

/// One drawing command of a compound path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo(Point2f),
    LineTo(Point2f),
    Close,
}

/// Flattened move/line/close command list over all loops of a contour set.
///
/// Loops are simply concatenated; no fill rule is chosen here. A consumer
/// clipping with this path picks even-odd or nonzero as it sees fit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundPath {
    pub cmds: Vec<PathCmd>,
}

impl CompoundPath {
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    pub fn num_subpaths(&self) -> usize {
        self.cmds
            .iter()
            .filter(|cmd| matches!(cmd, PathCmd::Close))
            .count()
    }
}

/// Converts every contour into a closed polyline: move to the first point,
/// line to each subsequent point, close back to the first.
pub fn contour_set_to_path(set: &ContourSet) -> CompoundPath {
    let mut cmds = Vec::with_capacity(set.total_points() + set.len());

    for contour in set.iter() {
        let mut points = contour.points.iter();
        let Some(&(x0, y0)) = points.next() else {
            continue;
        };

        cmds.push(PathCmd::MoveTo(Point2f::from_pixel(x0, y0)));
        for &(x, y) in points {
            cmds.push(PathCmd::LineTo(Point2f::from_pixel(x, y)));
        }
        cmds.push(PathCmd::Close);
    }

    CompoundPath { cmds }
}
