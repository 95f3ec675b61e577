//! Face-adjacency graphs over flattened 3D lattices.
//!
//! A lattice of extents `(px, py, pz)` is flattened into a parameter vector
//! of `px * py * pz` cells, cell `(x, y, z)` landing at index
//! `x * py * pz + y * pz + z`. This crate builds the undirected graph whose
//! nodes are those indices and whose edges join cells sharing a face.
//!
//! # Entry points
//!
//! - [`build`]: validate `(px, py, pz)` and build the [`GridGraph`]
//! - [`GridGraphBuilder`]: the same, starting from validated [`Extents`]
//! - [`Lattice3D`]: neighbour, distance and radius queries answered by
//!   index arithmetic, without materialising edges
//!
//! ```
//! let graph = gridgraph::build(2, 2, 2).unwrap();
//! assert_eq!(graph.node_count(), 8);
//! assert_eq!(graph.edge_count(), 12);
//! assert!(graph.contains_edge(0, 4));
//! assert!(!graph.contains_edge(0, 3));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod graph;
pub mod lattice;

#[cfg(test)]
pub(crate) mod compliance;

pub use builder::{build, GridGraphBuilder};
pub use graph::GridGraph;
pub use gridgraph_core::{Axis, CellCoord, Extents, LatticeError};
pub use lattice::Lattice3D;
