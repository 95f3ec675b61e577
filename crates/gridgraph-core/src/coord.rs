//! The [`CellCoord`] type: a cell position in a 3D lattice.

use std::fmt;

/// A cell position `(x, y, z)` in a 3D lattice.
///
/// The derived ordering is lexicographic on `(x, y, z)`, which is exactly
/// the order of the corresponding flat indices (see
/// [`Extents::flatten`](crate::Extents::flatten)). Sorting coordinates
/// therefore sorts them canonically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellCoord {
    /// Position along the slowest-varying axis.
    pub x: usize,
    /// Position along the middle axis.
    pub y: usize,
    /// Position along the fastest-varying axis.
    pub z: usize,
}

impl CellCoord {
    /// Create a coordinate from its three components.
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Components as `[x, y, z]`.
    pub const fn as_array(&self) -> [usize; 3] {
        [self.x, self.y, self.z]
    }

    /// Manhattan (L1) distance to `other`.
    ///
    /// On a face-adjacent lattice this equals the graph geodesic.
    pub fn manhattan(&self, other: &CellCoord) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) + self.z.abs_diff(other.z)
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<[usize; 3]> for CellCoord {
    fn from([x, y, z]: [usize; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<(usize, usize, usize)> for CellCoord {
    fn from((x, y, z): (usize, usize, usize)) -> Self {
        Self { x, y, z }
    }
}

impl From<CellCoord> for [usize; 3] {
    fn from(c: CellCoord) -> Self {
        c.as_array()
    }
}
