use qtpfs_core::{Float2, GridPoint, GridRect};

/// Per-node metadata for one quad-tree node a path passes through.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNodeData {
    pub node_id: u32,
    /// Where the path crosses the node edge.
    pub net_point: Float2,
    /// Index of the node's entry waypoint in the owning path, if set.
    pub path_point_index: Option<usize>,
    /// Squares covered by the node, cached so the path can be re-validated
    /// without querying the tree. Stored as the search supplied it and not
    /// canonicalized; inverted bounds cover no square.
    pub bounds: GridRect,
}

impl PathNodeData {
    pub fn new(node_id: u32, net_point: Float2, path_point_index: Option<usize>) -> Self {
        Self {
            node_id,
            net_point,
            path_point_index,
            bounds: GridRect::default(),
        }
    }

    #[inline]
    pub fn xmin(&self) -> i32 {
        self.bounds.min.x
    }

    #[inline]
    pub fn zmin(&self) -> i32 {
        self.bounds.min.z
    }

    #[inline]
    pub fn xmax(&self) -> i32 {
        self.bounds.max.x
    }

    #[inline]
    pub fn zmax(&self) -> i32 {
        self.bounds.max.z
    }

    /// Whether the square `p` is inside this node's cached bounds.
    #[inline]
    pub fn contains_cell(&self, p: GridPoint) -> bool {
        self.bounds.contains(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unset() {
        let n = PathNodeData::default();
        assert_eq!(n.node_id, 0);
        assert_eq!(n.net_point, Float2::ZERO);
        assert_eq!(n.path_point_index, None);
        assert_eq!((n.xmin(), n.zmin(), n.xmax(), n.zmax()), (0, 0, 0, 0));
    }

    #[test]
    fn contains_cell_uses_half_open_bounds() {
        let mut n = PathNodeData::new(7, Float2::new(8.0, 16.0), Some(1));
        n.bounds = GridRect::new(4, 4, 8, 12);
        assert!(n.contains_cell(GridPoint::new(4, 4)));
        assert!(n.contains_cell(GridPoint::new(7, 11)));
        assert!(!n.contains_cell(GridPoint::new(8, 4)));
        assert!(!n.contains_cell(GridPoint::new(3, 5)));
    }
}
