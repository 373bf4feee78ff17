use gt_core::{AlphaView, Error, Mask};
use gt_diffuse::diffuse_opacity;

use crate::contour::{Contour, ContourSet};

/// Facing direction of the square-tracking walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// Rotates 90 degrees counter-clockwise: Up, Left, Down, Right, Up.
    pub fn turn_left(self) -> Self {
        match self {
            Self::Up => Self::Left,
            Self::Left => Self::Down,
            Self::Down => Self::Right,
            Self::Right => Self::Up,
        }
    }

    /// Rotates 90 degrees clockwise: Up, Right, Down, Left, Up.
    pub fn turn_right(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
        }
    }

    fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Left => (-1, 0),
            Self::Down => (0, 1),
            Self::Right => (1, 0),
        }
    }

    /// Pixel one step ahead of `(x, y)`, or `None` when that leaves the
    /// `width` x `height` grid.
    pub fn step(self, x: usize, y: usize, width: usize, height: usize) -> Option<(usize, usize)> {
        let (dx, dy) = self.offset();
        let nx = x as isize + dx;
        let ny = y as isize + dy;
        if nx < 0 || ny < 0 {
            return None;
        }

        let (nxu, nyu) = (nx as usize, ny as usize);
        if nxu >= width || nyu >= height {
            return None;
        }

        Some((nxu, nyu))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Number of propagation passes applied before tracing. Pixels within
    /// this distance of an opaque pixel are treated as opaque.
    pub diffusion_steps: u32,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self { diffusion_steps: 5 }
    }
}

/// Extracts all boundary loops of `img` as closed polygons.
///
/// Loops are discovered by scanning rows top-to-bottom, columns
/// left-to-right, for an unvisited opaque pixel whose upper neighbor is
/// transparent, and traced with a square-tracking walk from there. A fully
/// transparent image yields an empty set; a zero-dimension image is an
/// error.
pub fn extract_contours(img: &AlphaView<'_>, cfg: &ExtractConfig) -> Result<ContourSet, Error> {
    let width = img.width();
    let height = img.height();
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage { width, height });
    }

    let opacity = diffuse_opacity(img, cfg.diffusion_steps);
    let mut visited = Mask::new(width, height);
    let mut contours = Vec::new();

    while let Some(start) = find_start(&opacity, &visited) {
        contours.push(trace_loop(&opacity, &mut visited, start));
    }

    Ok(ContourSet {
        width,
        height,
        contours,
    })
}

/// First unvisited top-edge pixel in raster order, if any.
fn find_start(opacity: &Mask, visited: &Mask) -> Option<(usize, usize)> {
    for y in 0..opacity.height() {
        for x in 0..opacity.width() {
            if opacity.get(x, y) && !(y > 0 && opacity.get(x, y - 1)) && !visited.get(x, y) {
                return Some((x, y));
            }
        }
    }
    None
}

/// Walks one boundary loop starting at `start` facing up.
///
/// Each step probes the pixel ahead: blocked (transparent or out of
/// bounds) emits the current pixel and turns left; open moves forward and
/// turns right. The termination test runs after the step, so a
/// single-pixel region still emits a four-point loop before the walk
/// returns to its initial state.
fn trace_loop(opacity: &Mask, visited: &mut Mask, start: (usize, usize)) -> Contour {
    let width = opacity.width();
    let height = opacity.height();

    let (mut x, mut y) = start;
    let mut dir = Direction::Up;
    let mut points = Vec::new();

    // Four directed states per pixel; a walk that has not closed by then
    // never will (possible on masks connected only diagonally).
    let max_steps = 4 * width * height + 4;

    for _ in 0..max_steps {
        let open = match dir.step(x, y, width, height) {
            Some((nx, ny)) => opacity.get(nx, ny).then_some((nx, ny)),
            None => None,
        };

        match open {
            Some((nx, ny)) => {
                x = nx;
                y = ny;
                dir = dir.turn_right();
            }
            None => {
                visited.set(x, y, true);
                points.push((x as u32, y as u32));
                dir = dir.turn_left();
            }
        }

        if (x, y) == start && dir == Direction::Up {
            break;
        }
    }

    Contour { points }
}
