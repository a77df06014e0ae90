//! Map extent: the narrow view of the map a path needs for its coordinate
//! bounds check.

use crate::geom::Float3;

/// World units (elmos) per map square.
pub const SQUARE_SIZE: f32 = 8.0;

/// Provider of the map's size in squares and the size of one square.
pub trait MapExtent {
    /// Map width in squares.
    fn map_x(&self) -> i32;
    /// Map height (Z extent) in squares.
    fn map_y(&self) -> i32;
    /// World units per square.
    fn square_size(&self) -> f32 {
        SQUARE_SIZE
    }
}

/// A snapshot of a [`MapExtent`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDims {
    pub mapx: i32,
    pub mapy: i32,
    pub square_size: f32,
}

impl MapDims {
    /// Dimensions in squares, using [`SQUARE_SIZE`].
    pub const fn new(mapx: i32, mapy: i32) -> Self {
        Self {
            mapx,
            mapy,
            square_size: SQUARE_SIZE,
        }
    }

    pub const fn with_square_size(mut self, square_size: f32) -> Self {
        self.square_size = square_size;
        self
    }

    /// Capture the current dimensions of any provider.
    pub fn from_extent(extent: &impl MapExtent) -> Self {
        Self {
            mapx: extent.map_x(),
            mapy: extent.map_y(),
            square_size: extent.square_size(),
        }
    }

    /// Whether `p` lies on the map over X and Z. The far edge is inclusive.
    #[inline]
    pub fn contains(&self, p: Float3) -> bool {
        p.x >= 0.0
            && p.z >= 0.0
            && p.x / self.square_size <= self.mapx as f32
            && p.z / self.square_size <= self.mapy as f32
    }

    /// Assert that `p` lies on the map.
    ///
    /// An off-map coordinate is a caller bug and panics; it is never
    /// clamped or ignored.
    #[track_caller]
    pub fn check_in_bounds(&self, p: Float3) {
        if !self.contains(p) {
            log::error!(
                "point {} outside map extent {}x{} (square size {})",
                p,
                self.mapx,
                self.mapy,
                self.square_size
            );
        }
        assert!(p.x >= 0.0, "point {p} has negative x");
        assert!(p.z >= 0.0, "point {p} has negative z");
        assert!(
            p.x / self.square_size <= self.mapx as f32,
            "point {p} beyond map x extent {}",
            self.mapx
        );
        assert!(
            p.z / self.square_size <= self.mapy as f32,
            "point {p} beyond map z extent {}",
            self.mapy
        );
    }
}

impl MapExtent for MapDims {
    fn map_x(&self) -> i32 {
        self.mapx
    }

    fn map_y(&self) -> i32 {
        self.mapy
    }

    fn square_size(&self) -> f32 {
        self.square_size
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn map_dims_round_trip() {
        let dims = MapDims::new(64, 48).with_square_size(4.0);
        let json = serde_json::to_string(&dims).unwrap();
        let back: MapDims = serde_json::from_str(&json).unwrap();
        assert_eq!(dims, back);
    }
}
