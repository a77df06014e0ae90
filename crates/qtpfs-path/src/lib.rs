//! Path representation for quad-tree pathfinding.
//!
//! A [`Path`] is what a quad-tree search produces and what movement
//! controllers consume: an ordered list of waypoints, the quad-tree nodes the
//! route crosses, and the bookkeeping a path cache needs to share results
//! between equivalent requests.
//!
//! This crate does not search. It stores the search's output and keeps the
//! invariants that make sharing and consumption safe:
//!
//! - the bounding box either covers every waypoint (recomputed) or is a box
//!   the search supplied (overridden), see [`BoundsSource`];
//! - every coordinate written lies on the map, see
//!   [`MapDims::check_in_bounds`](qtpfs_core::MapDims::check_in_bounds);
//! - [`Path::hash`] and [`Path::virtual_hash`] default to [`NO_HASH`].
//!
//! # Collaborators
//!
//! | Trait | Used by |
//! |---|---|
//! | [`MapExtent`](qtpfs_core::MapExtent) | [`Path::new`], coordinate checks |
//! | [`MoveDefRegistry`] | [`Path::set_path_type`] |
//! | [`Clock`] | [`Path::stamp_search_time`] |

mod bounds;
mod node;
mod path;
mod traits;

pub use bounds::{BoundingBox, BoundsSource};
pub use node::PathNodeData;
pub use path::{NO_HASH, OwnerId, Path, SearchTime};
pub use traits::{Clock, MoveDefRegistry};
