//! The immutable lattice graph value.

use gridgraph_core::Extents;
use petgraph::graphmap::UnGraphMap;

/// Undirected simple graph over the flat indices of a 3D lattice.
///
/// Nodes are exactly `0..extents.cell_count()`, including isolated ones.
/// Edges join every face-adjacent pair of cells once. Produced by
/// [`GridGraphBuilder`](crate::GridGraphBuilder) and never mutated
/// afterwards; use [`into_graph_map`](Self::into_graph_map) to take
/// ownership of the underlying petgraph structure.
///
/// Node iteration follows insertion order, which is ascending flat index.
#[derive(Clone, Debug)]
pub struct GridGraph {
    pub(crate) extents: Extents,
    pub(crate) graph: UnGraphMap<usize, ()>,
}

impl GridGraph {
    /// Extents of the lattice this graph was built from.
    pub fn extents(&self) -> Extents {
        self.extents
    }

    /// Number of nodes; always `extents().cell_count()`.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes in ascending flat-index order.
    pub fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.graph.nodes()
    }

    /// Every edge once, as `(low, high)` with `low < high`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.graph
            .all_edges()
            .map(|(a, b, _)| if a <= b { (a, b) } else { (b, a) })
    }

    /// Whether `a` and `b` are joined by an edge (in either direction).
    pub fn contains_edge(&self, a: usize, b: usize) -> bool {
        self.graph.contains_edge(a, b)
    }

    /// Whether `index` is a node of the graph.
    pub fn contains_node(&self, index: usize) -> bool {
        self.graph.contains_node(index)
    }

    /// Neighbours of `index`. Empty for an unknown node.
    pub fn neighbours(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.graph.neighbors(index)
    }

    /// Number of edges incident to `index`.
    pub fn degree(&self, index: usize) -> usize {
        self.graph.neighbors(index).count()
    }

    /// Borrow the underlying petgraph map, e.g. for `petgraph::algo`.
    pub fn as_graph_map(&self) -> &UnGraphMap<usize, ()> {
        &self.graph
    }

    /// Take the underlying petgraph map.
    pub fn into_graph_map(self) -> UnGraphMap<usize, ()> {
        self.graph
    }
}
