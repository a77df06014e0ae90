//! Geometry primitives: world-space [`Float3`] / [`Float2`] and grid-space
//! [`GridPoint`] / [`GridRect`].
//!
//! World coordinates are elmos (floats); grid coordinates are map squares.
//! The ground plane is X/Z, Y is height.

use std::fmt;

// ---------------------------------------------------------------------------
// Float3
// ---------------------------------------------------------------------------

/// A 3D world-space position.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Float3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Float3 {
    /// Origin (0, 0, 0).
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a new position.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Component-wise minimum over X and Z. Y is taken from `self`.
    #[inline]
    pub fn min_xz(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y, self.z.min(other.z))
    }

    /// Component-wise maximum over X and Z. Y is taken from `self`.
    #[inline]
    pub fn max_xz(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y, self.z.max(other.z))
    }
}

impl fmt::Display for Float3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ---------------------------------------------------------------------------
// Float2
// ---------------------------------------------------------------------------

/// A 2D position on the ground plane. `y` holds the world Z coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Float2 {
    pub x: f32,
    pub y: f32,
}

impl Float2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// ---------------------------------------------------------------------------
// GridPoint
// ---------------------------------------------------------------------------

/// A map-square coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub x: i32,
    pub z: i32,
}

impl GridPoint {
    pub const ZERO: Self = Self { x: 0, z: 0 };

    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}

// ---------------------------------------------------------------------------
// GridRect
// ---------------------------------------------------------------------------

/// A half-open rectangle of map squares \[min, max).
///
/// This is the footprint a quad-tree node covers: `min` is `(xmin, zmin)`,
/// `max` is `(xmax, zmax)`. [`GridRect::new`] canonicalizes the corners;
/// a rectangle built from its fields may have `min > max` on an axis, in
/// which case it is empty and contains nothing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridRect {
    pub min: GridPoint,
    pub max: GridPoint,
}

impl GridRect {
    /// Create a new rectangle from two corners, canonicalized so that
    /// `min` <= `max` on each axis.
    #[inline]
    pub fn new(x0: i32, z0: i32, x1: i32, z1: i32) -> Self {
        Self {
            min: GridPoint::new(x0.min(x1), z0.min(z1)),
            max: GridPoint::new(x0.max(x1), z0.max(z1)),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.z >= self.max.z
    }

    /// Whether `p` lies inside the half-open rectangle.
    #[inline]
    pub fn contains(self, p: GridPoint) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.z >= self.min.z && p.z < self.max.z
    }
}
