//! Error types for lattice construction and index arithmetic.

use crate::coord::CellCoord;
use crate::extents::{Axis, Extents};
use std::error::Error;
use std::fmt;

/// Errors arising from extent validation or flat-index conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// An extent is zero or negative.
    InvalidExtent {
        /// Axis carrying the offending extent.
        axis: Axis,
        /// The rejected value.
        value: i64,
    },
    /// `px * py * pz` does not fit in `usize`.
    CellCountOverflow {
        /// Requested x extent.
        px: i64,
        /// Requested y extent.
        py: i64,
        /// Requested z extent.
        pz: i64,
    },
    /// A coordinate lies outside the lattice.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: CellCoord,
        /// Extents of the lattice it was checked against.
        extents: Extents,
    },
    /// A flat index is `>= cell_count`.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of cells in the lattice.
        cell_count: usize,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidExtent { axis, value } => {
                write!(f, "invalid extent along {axis}: {value} (must be >= 1)")
            }
            Self::CellCountOverflow { px, py, pz } => {
                write!(f, "lattice {px}x{py}x{pz} exceeds the addressable cell count")
            }
            Self::CoordOutOfBounds { coord, extents } => {
                write!(f, "coordinate {coord} out of bounds for lattice {extents}")
            }
            Self::IndexOutOfBounds { index, cell_count } => {
                write!(f, "flat index {index} out of bounds: [0, {cell_count})")
            }
        }
    }
}

impl Error for LatticeError {}
