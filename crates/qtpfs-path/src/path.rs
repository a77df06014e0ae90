use qtpfs_core::{Float2, Float3, GridPoint, GridRect, MapDims, MapExtent};

use crate::bounds::{BoundingBox, BoundsSource};
use crate::node::PathNodeData;
use crate::traits::{Clock, MoveDefRegistry};

/// Sentinel for an unset [`Path::hash`] / [`Path::virtual_hash`].
pub const NO_HASH: u64 = u64::MAX;

/// Non-owning handle to the simulation object that requested a path.
///
/// The path never resolves it; whoever owns the path drops or clears the
/// handle when the object dies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OwnerId(pub u32);

/// Opaque time at which a search ran, as reported by a [`Clock`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchTime(pub u64);

// ---------------------------------------------------------------------------
// Path
// ---------------------------------------------------------------------------

/// A computed route: waypoints, the quad-tree nodes they cross, and the
/// bookkeeping a path cache and a movement controller need.
///
/// Two kinds of failure are treated differently:
///
/// - Waypoint and node **indices** past the end are clamped to the last
///   entry. An off-by-one caller silently reads or writes the last element.
/// - **Coordinates** off the map, too few points for an endpoint write, and
///   unknown path types are contract violations and panic.
///
/// A `Path` is not synchronized. All mutation happens on the simulation
/// thread; other threads may read it between simulation steps only.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    id: u32,
    path_type: i32,

    next_point_index: usize,
    num_path_updates: u32,

    // Identifies the layer, source quad and target quad of the search that
    // produced this path, so equal searches can share it.
    hash: u64,
    // As `hash`, but with source/target quads normalized to a fixed size so
    // that searches between nearby quads can share a path approximately.
    virtual_hash: u64,
    radius: f32,
    synced: bool,
    have_full_path: bool,
    have_partial_path: bool,
    bounding_box_override: bool,

    points: Vec<Float3>,
    nodes: Vec<PathNodeData>,

    bounding_box: BoundingBox,

    owner: Option<OwnerId>,
    search_time: SearchTime,

    map: MapDims,
}

impl Path {
    /// Create an empty path whose coordinates are checked against `map`.
    pub fn new(map: &impl MapExtent) -> Self {
        Self::with_dims(MapDims::from_extent(map))
    }

    pub fn with_dims(map: MapDims) -> Self {
        Self {
            id: 0,
            path_type: 0,
            next_point_index: 0,
            num_path_updates: 0,
            hash: NO_HASH,
            virtual_hash: NO_HASH,
            radius: 0.0,
            synced: true,
            have_full_path: true,
            have_partial_path: false,
            bounding_box_override: false,
            points: Vec::new(),
            nodes: Vec::new(),
            bounding_box: BoundingBox::default(),
            owner: None,
            search_time: SearchTime::default(),
            map,
        }
    }

    /// Move the contents out, leaving `self` as a freshly constructed path
    /// over the same map.
    pub fn take(&mut self) -> Path {
        let fresh = Path::with_dims(self.map);
        std::mem::replace(self, fresh)
    }

    /// The map extent coordinates are validated against.
    #[inline]
    pub fn map_dims(&self) -> MapDims {
        self.map
    }

    // -----------------------------------------------------------------------
    // Identity and metadata
    // -----------------------------------------------------------------------

    /// Assigned by the path cache; 0 means unassigned.
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    #[inline]
    pub fn path_type(&self) -> i32 {
        self.path_type
    }

    /// Set the movement profile this path was computed for.
    ///
    /// Panics if `path_type` is not a valid index into `registry`.
    #[track_caller]
    pub fn set_path_type(&mut self, path_type: i32, registry: &impl MoveDefRegistry) {
        let n = registry.num_move_defs();
        let valid = usize::try_from(path_type).is_ok_and(|t| t < n);
        if !valid {
            log::error!("path type {path_type} out of range (have {n} move defs)");
        }
        assert!(valid, "invalid path type {path_type} for {n} move defs");
        self.path_type = path_type;
    }

    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    pub fn set_hash(&mut self, hash: u64) {
        self.hash = hash;
    }

    #[inline]
    pub fn virtual_hash(&self) -> u64 {
        self.virtual_hash
    }

    pub fn set_virtual_hash(&mut self, virtual_hash: u64) {
        self.virtual_hash = virtual_hash;
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    /// Whether this path must be identical on every simulation participant.
    #[inline]
    pub fn is_synced(&self) -> bool {
        self.synced
    }

    pub fn set_synced(&mut self, synced: bool) {
        self.synced = synced;
    }

    #[inline]
    pub fn is_full_path(&self) -> bool {
        self.have_full_path
    }

    pub fn set_has_full_path(&mut self, full_path: bool) {
        self.have_full_path = full_path;
    }

    #[inline]
    pub fn is_partial_path(&self) -> bool {
        self.have_partial_path
    }

    pub fn set_has_partial_path(&mut self, partial_path: bool) {
        self.have_partial_path = partial_path;
    }

    #[inline]
    pub fn owner(&self) -> Option<OwnerId> {
        self.owner
    }

    pub fn set_owner(&mut self, owner: Option<OwnerId>) {
        self.owner = owner;
    }

    pub fn clear_owner(&mut self) {
        self.owner = None;
    }

    #[inline]
    pub fn search_time(&self) -> SearchTime {
        self.search_time
    }

    pub fn set_search_time(&mut self, time: SearchTime) {
        self.search_time = time;
    }

    /// Record the current time of `clock` as the search time.
    pub fn stamp_search_time(&mut self, clock: &impl Clock) {
        self.search_time = clock.now();
    }

    // -----------------------------------------------------------------------
    // Progress and staleness
    // -----------------------------------------------------------------------

    /// Index of the waypoint the consumer is heading toward.
    #[inline]
    pub fn next_point_index(&self) -> usize {
        self.next_point_index
    }

    pub fn set_next_point_index(&mut self, index: usize) {
        self.next_point_index = index;
    }

    /// How many times this path was invalidated and searched again.
    #[inline]
    pub fn num_path_updates(&self) -> u32 {
        self.num_path_updates
    }

    pub fn set_num_path_updates(&mut self, n: u32) {
        self.num_path_updates = n;
    }

    /// The waypoint at [`next_point_index`](Self::next_point_index), clamped
    /// like [`point`](Self::point).
    #[inline]
    pub fn next_point(&self) -> Float3 {
        self.point(self.next_point_index)
    }

    // -----------------------------------------------------------------------
    // Waypoints
    // -----------------------------------------------------------------------

    #[inline]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn points(&self) -> &[Float3] {
        &self.points
    }

    /// Discard all waypoints and allocate `n` default (origin) ones.
    pub fn alloc_points(&mut self, n: usize) {
        log::trace!("path {}: alloc {} points", self.id, n);
        self.points.clear();
        self.points.resize(n, Float3::default());
    }

    /// Replace the waypoints with a copy of `other`'s.
    pub fn copy_points(&mut self, other: &Path) {
        self.alloc_points(other.num_points());
        self.points.copy_from_slice(&other.points);
    }

    /// Waypoint `i`, or the last waypoint if `i` is past the end.
    #[inline]
    pub fn point(&self, i: usize) -> Float3 {
        self.points[clamp_index(i, self.points.len())]
    }

    /// Write waypoint `i`, or the last waypoint if `i` is past the end.
    ///
    /// Panics if `p` is off the map.
    #[track_caller]
    pub fn set_point(&mut self, i: usize, p: Float3) {
        self.map.check_in_bounds(p);
        let i = clamp_index(i, self.points.len());
        self.points[i] = p;
    }

    /// Remove waypoint `index` (clamped), shifting later waypoints down.
    pub fn remove_point(&mut self, index: usize) {
        let i = clamp_index(index, self.points.len());
        self.points.remove(i);
    }

    #[inline]
    pub fn source_point(&self) -> Float3 {
        self.point(0)
    }

    #[inline]
    pub fn target_point(&self) -> Float3 {
        self.point(usize::MAX)
    }

    /// Overwrite the first waypoint. Requires at least two waypoints.
    #[track_caller]
    pub fn set_source_point(&mut self, p: Float3) {
        self.check_has_endpoints();
        self.map.check_in_bounds(p);
        self.points[0] = p;
    }

    /// Overwrite the last waypoint. Requires at least two waypoints.
    #[track_caller]
    pub fn set_target_point(&mut self, p: Float3) {
        self.check_has_endpoints();
        self.map.check_in_bounds(p);
        let last = self.points.len() - 1;
        self.points[last] = p;
    }

    #[track_caller]
    fn check_has_endpoints(&self) {
        assert!(
            self.points.len() >= 2,
            "path {} needs source and target points, has {}",
            self.id,
            self.points.len()
        );
    }

    // -----------------------------------------------------------------------
    // Nodes
    // -----------------------------------------------------------------------

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn nodes(&self) -> &[PathNodeData] {
        &self.nodes
    }

    /// Mutable access to the node list for bulk edits by the search.
    ///
    /// The list cannot be resized through this view; use
    /// [`alloc_nodes`](Self::alloc_nodes).
    #[inline]
    pub fn node_list_mut(&mut self) -> &mut [PathNodeData] {
        &mut self.nodes
    }

    /// Discard all node data and allocate `n` unset entries.
    pub fn alloc_nodes(&mut self, n: usize) {
        log::trace!("path {}: alloc {} nodes", self.id, n);
        self.nodes.clear();
        self.nodes.resize(n, PathNodeData::default());
    }

    /// Replace the node data with a copy of `other`'s.
    pub fn copy_nodes(&mut self, other: &Path) {
        self.alloc_nodes(other.num_nodes());
        self.nodes.copy_from_slice(&other.nodes);
    }

    /// Node `i`, or the last node if `i` is past the end.
    #[inline]
    pub fn node(&self, i: usize) -> &PathNodeData {
        &self.nodes[clamp_index(i, self.nodes.len())]
    }

    /// Set identity, crossing point and entry waypoint of node `i`
    /// (clamped). The cached bounds are left alone.
    pub fn set_node(
        &mut self,
        i: usize,
        node_id: u32,
        net_point: Float2,
        path_point_index: Option<usize>,
    ) {
        let i = clamp_index(i, self.nodes.len());
        let node = &mut self.nodes[i];
        node.node_id = node_id;
        node.net_point = net_point;
        node.path_point_index = path_point_index;
    }

    /// Set the cached square bounds of node `i` (clamped). The values are
    /// stored as given, without swapping inverted corners.
    pub fn set_node_boundary(&mut self, i: usize, xmin: i32, zmin: i32, xmax: i32, zmax: i32) {
        let i = clamp_index(i, self.nodes.len());
        self.nodes[i].bounds = GridRect {
            min: GridPoint::new(xmin, zmin),
            max: GridPoint::new(xmax, zmax),
        };
    }

    // -----------------------------------------------------------------------
    // Bounding box
    // -----------------------------------------------------------------------

    /// Establish the bounding box, then check both corners against the map.
    ///
    /// [`BoundsSource::Recompute`] scans the waypoints over X and Z and
    /// clears the override flag; it panics if there are no waypoints.
    /// [`BoundsSource::Override`] stores the given corners as-is and sets
    /// the override flag.
    #[track_caller]
    pub fn set_bounding_box(&mut self, source: BoundsSource) {
        match source {
            BoundsSource::Recompute => {
                let Some(bb) = BoundingBox::from_points(&self.points) else {
                    log::error!("path {}: bounding box of an empty path", self.id);
                    panic!("cannot compute bounding box of path {} without points", self.id);
                };
                log::trace!("path {}: recomputed bounding box {} {}", self.id, bb.mins, bb.maxs);
                self.bounding_box = bb;
                self.bounding_box_override = false;
            }
            BoundsSource::Override { mins, maxs } => {
                log::debug!("path {}: bounding box overridden {} {}", self.id, mins, maxs);
                self.bounding_box = BoundingBox::new(mins, maxs);
                self.bounding_box_override = true;
            }
        }

        self.map.check_in_bounds(self.bounding_box.mins);
        self.map.check_in_bounds(self.bounding_box.maxs);
    }

    /// Shorthand for `set_bounding_box(BoundsSource::Recompute)`.
    #[track_caller]
    pub fn recompute_bounding_box(&mut self) {
        self.set_bounding_box(BoundsSource::Recompute);
    }

    /// Shorthand for `set_bounding_box(BoundsSource::Override { mins, maxs })`.
    #[track_caller]
    pub fn override_bounding_box(&mut self, mins: Float3, maxs: Float3) {
        self.set_bounding_box(BoundsSource::Override { mins, maxs });
    }

    #[inline]
    pub fn is_bounding_box_overridden(&self) -> bool {
        self.bounding_box_override
    }

    #[inline]
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    #[inline]
    pub fn bounding_box_mins(&self) -> Float3 {
        self.bounding_box.mins
    }

    #[inline]
    pub fn bounding_box_maxs(&self) -> Float3 {
        self.bounding_box.maxs
    }

    /// Whether `p` is inside the cached bounding box over X and Z.
    #[inline]
    pub fn bounding_box_contains(&self, p: Float3) -> bool {
        self.bounding_box.contains_xz(p)
    }
}

/// Clamp `i` to the last valid index of a sequence of length `len`.
///
/// Panics on an empty sequence: there is no element to fall back to.
#[inline]
#[track_caller]
fn clamp_index(i: usize, len: usize) -> usize {
    assert!(len > 0, "index {i} into an empty sequence");
    i.min(len - 1)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let mut path = Path::with_dims(MapDims::new(16, 16));
        path.alloc_points(2);
        path.set_source_point(Float3::new(1.0, 2.0, 3.0));
        path.set_target_point(Float3::new(100.0, 0.0, 40.0));
        path.alloc_nodes(1);
        path.set_node(0, 4, Float2::new(50.0, 20.0), Some(0));
        path.set_node_boundary(0, 0, 0, 16, 8);
        path.set_owner(Some(OwnerId(2)));
        path.recompute_bounding_box();

        let json = serde_json::to_string(&path).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
        assert_eq!(back.hash(), NO_HASH);
    }
}
