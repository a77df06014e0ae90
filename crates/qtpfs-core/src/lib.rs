//! **qtpfs-core** — shared primitives for quad-tree pathfinding.
//!
//! This crate provides the geometry types paths are built from and the
//! map-extent view used to validate coordinates.

pub mod geom;
pub mod map;

pub use geom::{Float2, Float3, GridPoint, GridRect};
pub use map::{MapDims, MapExtent, SQUARE_SIZE};
