use gt_core::Error;

/// One closed boundary loop as ordered integer grid coordinates.
///
/// The loop is implicit: the last point connects back to the first. A loop
/// around a hole has the same structure as an outer boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contour {
    pub points: Vec<(u32, u32)>,
}

impl Contour {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Serializes the loop as `[x0, y0, x1, y1, ...]`.
    pub fn to_flat(&self) -> Vec<u32> {
        let mut flat = Vec::with_capacity(self.points.len() * 2);
        for &(x, y) in &self.points {
            flat.push(x);
            flat.push(y);
        }
        flat
    }

    /// Rebuilds a loop from a flat `[x0, y0, x1, y1, ...]` array.
    pub fn from_flat(flat: &[u32]) -> Result<Self, Error> {
        if flat.len() % 2 != 0 {
            return Err(Error::OddFlatLength { len: flat.len() });
        }

        let points = flat.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect();
        Ok(Self { points })
    }
}

/// All boundary loops of one extraction call, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContourSet {
    pub width: usize,
    pub height: usize,
    pub contours: Vec<Contour>,
}

impl ContourSet {
    pub fn len(&self) -> usize {
        self.contours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contour> {
        self.contours.iter()
    }

    pub fn total_points(&self) -> usize {
        self.contours.iter().map(Contour::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use gt_core::Error;

    use crate::Contour;

    #[test]
    fn flat_roundtrip_is_exact() {
        let contour = Contour {
            points: vec![(1, 2), (3, 2), (3, 4), (1, 4)],
        };

        let flat = contour.to_flat();
        assert_eq!(flat, vec![1, 2, 3, 2, 3, 4, 1, 4]);

        let back = Contour::from_flat(&flat).expect("even length");
        assert_eq!(back, contour);
    }

    #[test]
    fn empty_flat_is_empty_contour() {
        let contour = Contour::from_flat(&[]).expect("even length");
        assert!(contour.is_empty());
        assert!(contour.to_flat().is_empty());
    }

    #[test]
    fn odd_flat_length_is_rejected() {
        let err = Contour::from_flat(&[1, 2, 3]).expect_err("odd length");
        assert_eq!(err, Error::OddFlatLength { len: 3 });
    }
}
