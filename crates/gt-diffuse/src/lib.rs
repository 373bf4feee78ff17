//! Alpha diffusion for anti-aliased glyph edges.
//!
//! Pixels are treated as opaque with threshold `alpha != 0`. Diffusion
//! expands the opaque region by `steps` propagation passes so that tracing
//! does not hug single-pixel transparency gaps left by anti-aliasing.
//!
//! The propagation is a fixed-point iteration of `steps` full raster-order
//! passes over a per-pixel distance grid, not a queue BFS: pass `step`
//! promotes every still-unreached pixel with a 4-connected neighbor at
//! exactly distance `step` to `step + 1`. Pixels farther than `steps` from
//! any opaque pixel stay unreached and remain transparent.

use gt_core::{AlphaView, Mask};

/// Distance value for pixels not reached by propagation. Real distances
/// never exceed `steps`, so the sentinel cannot collide or wrap.
const UNREACHED: u32 = u32::MAX;

const NEIGHBORS: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// Computes the opacity mask of `src` after `steps` diffusion passes.
///
/// `steps == 0` yields the raw opacity of the input. A zero-dimension
/// input yields an empty mask.
pub fn diffuse_opacity(src: &AlphaView<'_>, steps: u32) -> Mask {
    let width = src.width();
    let height = src.height();
    let mut mask = Mask::new(width, height);
    if width == 0 || height == 0 {
        return mask;
    }

    let mut dist = vec![UNREACHED; width * height];
    for y in 0..height {
        for (x, &alpha) in src.row(y).iter().enumerate() {
            if alpha != 0 {
                dist[y * width + x] = 0;
            }
        }
    }

    for step in 0..steps {
        for y in 0..height {
            for x in 0..width {
                if dist[y * width + x] != UNREACHED {
                    continue;
                }

                for (dx, dy) in NEIGHBORS {
                    let nx = x as isize + dx;
                    let ny = y as isize + dy;
                    if nx < 0 || ny < 0 || nx >= width as isize || ny >= height as isize {
                        continue;
                    }

                    if dist[ny as usize * width + nx as usize] == step {
                        dist[y * width + x] = step + 1;
                        break;
                    }
                }
            }
        }
    }

    for y in 0..height {
        for x in 0..width {
            if dist[y * width + x] != UNREACHED {
                mask.set(x, y, true);
            }
        }
    }

    mask
}

#[cfg(test)]
mod tests {
    use gt_core::AlphaImage;

    use crate::diffuse_opacity;

    #[test]
    fn zero_steps_is_raw_opacity() {
        let mut data = vec![0u8; 25];
        data[12] = 7;
        data[3] = 255;
        let img = AlphaImage::from_vec(5, 5, data).expect("valid image");

        let mask = diffuse_opacity(&img.as_view(), 0);
        assert_eq!(mask.count_set(), 2);
        assert!(mask.get(2, 2));
        assert!(mask.get(3, 0));
    }

    #[test]
    fn one_step_grows_a_plus_shape() {
        let mut data = vec![0u8; 25];
        data[12] = 255;
        let img = AlphaImage::from_vec(5, 5, data).expect("valid image");

        let mask = diffuse_opacity(&img.as_view(), 1);
        assert_eq!(mask.count_set(), 5);
        assert!(mask.get(2, 2));
        assert!(mask.get(1, 2));
        assert!(mask.get(3, 2));
        assert!(mask.get(2, 1));
        assert!(mask.get(2, 3));
        assert!(!mask.get(1, 1));
    }

    #[test]
    fn propagation_stops_at_steps() {
        let mut data = vec![0u8; 9];
        data[0] = 255;
        let img = AlphaImage::from_vec(9, 1, data).expect("valid image");

        let mask = diffuse_opacity(&img.as_view(), 3);
        for x in 0..9 {
            assert_eq!(mask.get(x, 0), x <= 3, "x = {x}");
        }
    }

    #[test]
    fn bridges_gap_when_steps_cover_it() {
        // Two opaque columns with a 2-pixel transparent gap.
        let mut data = vec![0u8; 5];
        data[0] = 255;
        data[3] = 255;
        let img = AlphaImage::from_vec(5, 1, data).expect("valid image");

        let narrow = diffuse_opacity(&img.as_view(), 0);
        assert!(!narrow.get(1, 0) && !narrow.get(2, 0));

        let bridged = diffuse_opacity(&img.as_view(), 1);
        assert!(bridged.get(1, 0) && bridged.get(2, 0));
    }

    #[test]
    fn empty_dimensions_yield_empty_mask() {
        let img = AlphaImage::from_vec(0, 4, Vec::new()).expect("valid image");
        let mask = diffuse_opacity(&img.as_view(), 5);
        assert!(!mask.any_set());
    }

    #[test]
    fn fully_transparent_stays_transparent() {
        let img = AlphaImage::new_fill(8, 8, 0);
        let mask = diffuse_opacity(&img.as_view(), 5);
        assert!(!mask.any_set());
    }
}
