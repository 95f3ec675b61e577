//! Validated lattice extents and the flat-index convention.

use crate::coord::CellCoord;
use crate::error::LatticeError;
use std::fmt;

/// One of the three lattice axes.
///
/// `X` is the slowest-varying axis of the flat index and `Z` the fastest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Outermost axis (stride `py * pz`).
    X,
    /// Middle axis (stride `pz`).
    Y,
    /// Innermost axis (stride `1`).
    Z,
}

impl Axis {
    /// All axes in flattening order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of this axis in `[x, y, z]` arrays.
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// The size `(px, py, pz)` of a rectangular 3D lattice.
///
/// Every component is at least 1 and `px * py * pz` fits in `usize`; both
/// are checked at construction, so every other operation on `Extents` is
/// infallible or fails only on out-of-range arguments.
///
/// # Flat indices
///
/// Cell `(x, y, z)` has flat index `x * py * pz + y * pz + z`: row-major
/// ("C order") with `z` varying fastest. [`flatten`](Self::flatten) and
/// [`unravel`](Self::unravel) convert between the two and are mutual
/// inverses. Any consumer that maps graph nodes back onto a parameter
/// vector must use the same convention.
///
/// # Examples
///
/// ```
/// use gridgraph_core::{CellCoord, Extents};
///
/// let extents = Extents::new(2, 3, 4).unwrap();
/// assert_eq!(extents.cell_count(), 24);
/// assert_eq!(extents.strides(), [12, 4, 1]);
///
/// let idx = extents.flatten(CellCoord::new(1, 2, 3)).unwrap();
/// assert_eq!(idx, 23);
/// assert_eq!(extents.unravel(idx).unwrap(), CellCoord::new(1, 2, 3));
///
/// assert!(Extents::new(0, 1, 1).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[i64; 3]", into = "[usize; 3]")
)]
pub struct Extents {
    px: usize,
    py: usize,
    pz: usize,
    cell_count: usize,
}

impl Extents {
    /// Validate and create extents.
    ///
    /// Returns `Err(LatticeError::InvalidExtent)` naming the first axis
    /// (in x, y, z order) whose extent is `< 1`, or
    /// `Err(LatticeError::CellCountOverflow)` if the cell count does not
    /// fit in `usize`.
    pub fn new(px: i64, py: i64, pz: i64) -> Result<Self, LatticeError> {
        for (axis, value) in Axis::ALL.into_iter().zip([px, py, pz]) {
            if value < 1 {
                return Err(LatticeError::InvalidExtent { axis, value });
            }
        }
        let overflow = || LatticeError::CellCountOverflow { px, py, pz };
        let ux = usize::try_from(px).map_err(|_| overflow())?;
        let uy = usize::try_from(py).map_err(|_| overflow())?;
        let uz = usize::try_from(pz).map_err(|_| overflow())?;
        let cell_count = ux
            .checked_mul(uy)
            .and_then(|n| n.checked_mul(uz))
            .ok_or_else(overflow)?;
        Ok(Self {
            px: ux,
            py: uy,
            pz: uz,
            cell_count,
        })
    }

    /// Extent along x.
    pub fn px(&self) -> usize {
        self.px
    }

    /// Extent along y.
    pub fn py(&self) -> usize {
        self.py
    }

    /// Extent along z.
    pub fn pz(&self) -> usize {
        self.pz
    }

    /// Extent along `axis`.
    pub fn get(&self, axis: Axis) -> usize {
        self.as_array()[axis.index()]
    }

    /// Extents as `[px, py, pz]`.
    pub fn as_array(&self) -> [usize; 3] {
        [self.px, self.py, self.pz]
    }

    /// Total number of cells, `px * py * pz`.
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Flat-index step for a unit advance along x, y and z.
    pub fn strides(&self) -> [usize; 3] {
        [self.py * self.pz, self.pz, 1]
    }

    /// Number of unordered face-adjacent cell pairs, i.e. the edge count
    /// of the lattice graph:
    /// `(px-1)*py*pz + px*(py-1)*pz + px*py*(pz-1)`.
    ///
    /// Saturates at `usize::MAX` for lattices too large to enumerate.
    pub fn face_adjacent_pair_count(&self) -> usize {
        let (px, py, pz) = (self.px, self.py, self.pz);
        ((px - 1) * py * pz)
            .saturating_add(px * (py - 1) * pz)
            .saturating_add(px * py * (pz - 1))
    }

    /// Whether `coord` lies inside the lattice.
    pub fn contains(&self, coord: CellCoord) -> bool {
        coord.x < self.px && coord.y < self.py && coord.z < self.pz
    }

    /// Flat index of `coord`: `x * py * pz + y * pz + z`.
    pub fn flatten(&self, coord: CellCoord) -> Result<usize, LatticeError> {
        if !self.contains(coord) {
            return Err(LatticeError::CoordOutOfBounds {
                coord,
                extents: *self,
            });
        }
        Ok(coord.x * self.py * self.pz + coord.y * self.pz + coord.z)
    }

    /// Coordinate of flat index `index`; inverse of [`flatten`](Self::flatten).
    pub fn unravel(&self, index: usize) -> Result<CellCoord, LatticeError> {
        if index >= self.cell_count {
            return Err(LatticeError::IndexOutOfBounds {
                index,
                cell_count: self.cell_count,
            });
        }
        let plane = self.py * self.pz;
        let rem = index % plane;
        Ok(CellCoord::new(index / plane, rem / self.pz, rem % self.pz))
    }

    /// Every coordinate in canonical order (x outer, y middle, z inner).
    ///
    /// The n-th item has flat index n.
    pub fn iter_coords(&self) -> impl Iterator<Item = CellCoord> {
        let (px, py, pz) = (self.px, self.py, self.pz);
        (0..px).flat_map(move |x| {
            (0..py).flat_map(move |y| (0..pz).map(move |z| CellCoord::new(x, y, z)))
        })
    }
}

impl fmt::Display for Extents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.px, self.py, self.pz)
    }
}

impl TryFrom<[i64; 3]> for Extents {
    type Error = LatticeError;

    fn try_from([px, py, pz]: [i64; 3]) -> Result<Self, Self::Error> {
        Self::new(px, py, pz)
    }
}

impl TryFrom<(i64, i64, i64)> for Extents {
    type Error = LatticeError;

    fn try_from((px, py, pz): (i64, i64, i64)) -> Result<Self, Self::Error> {
        Self::new(px, py, pz)
    }
}

impl From<Extents> for [usize; 3] {
    fn from(e: Extents) -> Self {
        e.as_array()
    }
}
