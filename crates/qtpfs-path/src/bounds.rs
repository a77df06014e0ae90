use qtpfs_core::Float3;

/// Axis-aligned box over the ground plane. `y` of both corners is carried
/// but never used.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub mins: Float3,
    pub maxs: Float3,
}

impl BoundingBox {
    pub const fn new(mins: Float3, maxs: Float3) -> Self {
        Self { mins, maxs }
    }

    /// Tightest box over X and Z covering every point, or `None` if
    /// `points` is empty. The `y` of both corners is zero.
    pub fn from_points(points: &[Float3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let seed = Float3::new(first.x, 0.0, first.z);
        let (mins, maxs) = rest
            .iter()
            .fold((seed, seed), |(mins, maxs), &p| (mins.min_xz(p), maxs.max_xz(p)));
        Some(Self { mins, maxs })
    }

    /// Whether `p` lies inside the box over X and Z, edges inclusive.
    #[inline]
    pub fn contains_xz(&self, p: Float3) -> bool {
        p.x >= self.mins.x && p.x <= self.maxs.x && p.z >= self.mins.z && p.z <= self.maxs.z
    }
}

/// How a path's bounding box is established.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundsSource {
    /// Scan the current waypoints.
    Recompute,
    /// Take a box the caller already knows.
    Override { mins: Float3, maxs: Float3 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_empty() {
        assert_eq!(BoundingBox::from_points(&[]), None);
    }

    #[test]
    fn from_points_single() {
        let bb = BoundingBox::from_points(&[Float3::new(3.0, 7.0, 4.0)]).unwrap();
        assert_eq!(bb.mins, Float3::new(3.0, 0.0, 4.0));
        assert_eq!(bb.maxs, Float3::new(3.0, 0.0, 4.0));
    }

    #[test]
    fn from_points_ignores_y() {
        let bb = BoundingBox::from_points(&[
            Float3::new(1.0, 50.0, 2.0),
            Float3::new(5.0, -20.0, 9.0),
            Float3::new(3.0, 100.0, 0.0),
        ])
        .unwrap();
        assert_eq!(bb.mins, Float3::new(1.0, 0.0, 0.0));
        assert_eq!(bb.maxs, Float3::new(5.0, 0.0, 9.0));
    }

    #[test]
    fn contains_xz_edges_inclusive() {
        let bb = BoundingBox::new(Float3::new(1.0, 0.0, 1.0), Float3::new(4.0, 0.0, 3.0));
        assert!(bb.contains_xz(Float3::new(1.0, 999.0, 1.0)));
        assert!(bb.contains_xz(Float3::new(4.0, 0.0, 3.0)));
        assert!(bb.contains_xz(Float3::new(2.5, 0.0, 2.0)));
        assert!(!bb.contains_xz(Float3::new(4.1, 0.0, 2.0)));
        assert!(!bb.contains_xz(Float3::new(2.0, 0.0, 0.9)));
    }
}
