//! 3D rectangular lattice with 6-connected (face-adjacent) neighbourhood.

use crate::builder::GridGraphBuilder;
use crate::graph::GridGraph;
use gridgraph_core::{CellCoord, Extents, LatticeError};
use smallvec::SmallVec;
use std::collections::VecDeque;

/// A three-dimensional rectangular lattice with 6-connected neighbourhood.
///
/// Cells are addressed by flat index (see [`Extents::flatten`]). Two cells
/// are neighbours when their coordinates differ by exactly 1 along exactly
/// one axis. The boundary absorbs: cells on a face have fewer neighbours
/// and an axis of extent 1 contributes none. Distance is Manhattan (L1),
/// which matches the graph geodesic.
///
/// `Lattice3D` answers adjacency queries by index arithmetic without
/// materialising edges; [`to_graph`](Self::to_graph) produces the
/// equivalent [`GridGraph`].
///
/// # Examples
///
/// ```
/// use gridgraph::Lattice3D;
///
/// let lattice = Lattice3D::from_dims(3, 3, 3).unwrap();
/// assert_eq!(lattice.cell_count(), 27);
///
/// // Corner cell: one neighbour per axis.
/// assert_eq!(lattice.neighbours(0).as_slice(), &[9, 3, 1]);
///
/// // Centre cell: two neighbours per axis.
/// assert_eq!(lattice.neighbours(13).len(), 6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Lattice3D {
    extents: Extents,
}

impl Lattice3D {
    /// Create a lattice over already-validated extents.
    pub fn new(extents: Extents) -> Self {
        Self { extents }
    }

    /// Validate `(px, py, pz)` and create a lattice.
    ///
    /// Returns `Err(LatticeError::InvalidExtent)` if any extent is `< 1`.
    pub fn from_dims(px: i64, py: i64, pz: i64) -> Result<Self, LatticeError> {
        Ok(Self::new(Extents::new(px, py, pz)?))
    }

    /// Lattice extents.
    pub fn extents(&self) -> Extents {
        self.extents
    }

    /// Number of spatial dimensions.
    pub fn ndim(&self) -> usize {
        3
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.extents.cell_count()
    }

    /// Face-adjacent neighbours of `index`.
    ///
    /// Order is fixed: `-x, +x, -y, +y, -z, +z`, skipping directions that
    /// leave the lattice. An out-of-range `index` has no neighbours.
    pub fn neighbours(&self, index: usize) -> SmallVec<[usize; 6]> {
        let mut result = SmallVec::new();
        let Ok(coord) = self.extents.unravel(index) else {
            return result;
        };
        let dims = self.extents.as_array();
        let strides = self.extents.strides();
        for ((pos, len), stride) in coord.as_array().into_iter().zip(dims).zip(strides) {
            if pos > 0 {
                result.push(index - stride);
            }
            if pos + 1 < len {
                result.push(index + stride);
            }
        }
        result
    }

    /// Upper bound on `neighbours(i).len()` over all cells.
    ///
    /// Each axis contributes 2 when its extent is at least 3, 1 when it
    /// is 2, and nothing when it is 1.
    pub fn max_neighbour_degree(&self) -> usize {
        self.extents
            .as_array()
            .into_iter()
            .map(|len| len.saturating_sub(1).min(2))
            .sum()
    }

    /// Manhattan distance between two cells, equal to the number of edges
    /// on a shortest path in the lattice graph.
    pub fn distance(&self, a: usize, b: usize) -> Result<usize, LatticeError> {
        let ca = self.extents.unravel(a)?;
        let cb = self.extents.unravel(b)?;
        Ok(ca.manhattan(&cb))
    }

    /// All coordinates in canonical (flat-index) order.
    pub fn canonical_ordering(&self) -> Vec<CellCoord> {
        self.extents.iter_coords().collect()
    }

    /// Position of `coord` in [`canonical_ordering`](Self::canonical_ordering),
    /// which is its flat index. `None` if out of bounds.
    pub fn canonical_rank(&self, coord: CellCoord) -> Option<usize> {
        self.extents.flatten(coord).ok()
    }

    /// Flat indices of every cell within graph distance `radius` of
    /// `center`, in ascending order. `center` itself is always included.
    ///
    /// Returns `Err(LatticeError::IndexOutOfBounds)` for an invalid center.
    pub fn cells_within(&self, center: usize, radius: usize) -> Result<Vec<usize>, LatticeError> {
        self.extents.unravel(center)?;

        let mut visited = vec![false; self.cell_count()];
        let mut queue = VecDeque::new();
        let mut result = vec![center];

        visited[center] = true;
        queue.push_back((center, 0usize));

        while let Some((here, dist)) = queue.pop_front() {
            if dist >= radius {
                continue;
            }
            for nb in self.neighbours(here) {
                if !visited[nb] {
                    visited[nb] = true;
                    queue.push_back((nb, dist + 1));
                    result.push(nb);
                }
            }
        }

        result.sort_unstable();
        Ok(result)
    }

    /// Materialise the lattice graph.
    pub fn to_graph(&self) -> GridGraph {
        GridGraphBuilder::new(self.extents).build()
    }
}

impl From<Extents> for Lattice3D {
    fn from(extents: Extents) -> Self {
        Self::new(extents)
    }
}
