//! Construction of the face-adjacency graph of a 3D lattice.

use crate::graph::GridGraph;
use gridgraph_core::{Extents, LatticeError};
use petgraph::graphmap::UnGraphMap;
use tracing::debug;

/// Builds the lattice graph for a fixed set of [`Extents`].
///
/// Extents are validated before a builder can exist, so
/// [`build`](Self::build) cannot fail.
///
/// # Examples
///
/// ```
/// use gridgraph::GridGraphBuilder;
/// use gridgraph_core::Extents;
///
/// let builder = GridGraphBuilder::new(Extents::new(2, 2, 2).unwrap());
/// let graph = builder.build();
/// assert_eq!(graph.node_count(), 8);
/// assert_eq!(graph.edge_count(), 12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridGraphBuilder {
    extents: Extents,
}

impl GridGraphBuilder {
    /// Create a builder for validated extents.
    pub fn new(extents: Extents) -> Self {
        Self { extents }
    }

    /// Validate `(px, py, pz)` and create a builder.
    pub fn from_dims(px: i64, py: i64, pz: i64) -> Result<Self, LatticeError> {
        Ok(Self::new(Extents::new(px, py, pz)?))
    }

    /// Extents the builder was created with.
    pub fn extents(&self) -> Extents {
        self.extents
    }

    /// Build the graph.
    ///
    /// All nodes are inserted first so that cells without neighbours are
    /// still present. Cells are then visited in canonical order (x outer,
    /// z inner) and each is joined only to its successor along y, x and z,
    /// so every face-adjacent pair is inserted exactly once.
    pub fn build(&self) -> GridGraph {
        let e = self.extents;
        let (px, py, pz) = (e.px(), e.py(), e.pz());
        let [x_stride, y_stride, z_stride] = e.strides();

        let mut graph =
            UnGraphMap::with_capacity(e.cell_count(), e.face_adjacent_pair_count());
        for index in 0..e.cell_count() {
            graph.add_node(index);
        }

        for x in 0..px {
            for y in 0..py {
                for z in 0..pz {
                    let index = x * x_stride + y * y_stride + z;
                    if y + 1 < py {
                        graph.add_edge(index, index + y_stride, ());
                    }
                    if x + 1 < px {
                        graph.add_edge(index, index + x_stride, ());
                    }
                    if z + 1 < pz {
                        graph.add_edge(index, index + z_stride, ());
                    }
                }
            }
        }

        debug!(
            extents = %e,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built lattice graph"
        );
        GridGraph { extents: e, graph }
    }
}

/// Build the face-adjacency graph of a `px × py × pz` lattice.
///
/// Node `i` is the cell with flat index `i` (`x * py * pz + y * pz + z`).
/// Returns `Err(LatticeError::InvalidExtent)` if any extent is zero or
/// negative; no graph is built in that case.
///
/// # Examples
///
/// ```
/// let chain = gridgraph::build(1, 1, 8).unwrap();
/// assert_eq!(chain.node_count(), 8);
/// assert_eq!(chain.edge_count(), 7);
///
/// assert!(gridgraph::build(0, 1, 1).is_err());
/// ```
pub fn build(px: i64, py: i64, pz: i64) -> Result<GridGraph, LatticeError> {
    let builder = GridGraphBuilder::from_dims(px, py, pz).map_err(|err| {
        debug!(px, py, pz, error = %err, "rejected lattice extents");
        err
    })?;
    Ok(builder.build())
}
