//! Lattice graph compliance test helpers.
//!
//! These functions verify that a [`GridGraph`] is exactly the face-adjacency
//! graph of its extents, and that [`Lattice3D`] queries agree with it.
//! Reused by the builder, graph and lattice test modules.

use crate::graph::GridGraph;
use crate::lattice::Lattice3D;
use indexmap::IndexSet;

/// Assert that the node set is exactly `0..cell_count`.
pub fn assert_node_set_exact(graph: &GridGraph) {
    let cell_count = graph.extents().cell_count();
    assert_eq!(
        graph.node_count(),
        cell_count,
        "node_count ({}) != cell_count ({cell_count})",
        graph.node_count()
    );
    for i in 0..cell_count {
        assert!(graph.contains_node(i), "node {i} missing");
    }
}

/// Assert that every edge joins two cells at Manhattan distance 1.
pub fn assert_edges_face_adjacent(graph: &GridGraph) {
    let e = graph.extents();
    for (a, b) in graph.edges() {
        let ca = e.unravel(a).expect("edge endpoint must be a valid index");
        let cb = e.unravel(b).expect("edge endpoint must be a valid index");
        assert_eq!(
            ca.manhattan(&cb),
            1,
            "nodes {a} and {b} are connected, but {ca} and {cb} are not neighbours"
        );
    }
}

/// Assert that every face-adjacent pair of cells is an edge.
///
/// Brute force over all pairs; keep lattices small.
pub fn assert_edges_complete(graph: &GridGraph) {
    let e = graph.extents();
    let cells: Vec<_> = e.iter_coords().collect();
    for (i, ci) in cells.iter().enumerate() {
        for (j, cj) in cells.iter().enumerate().skip(i + 1) {
            if ci.manhattan(cj) == 1 {
                assert!(
                    graph.contains_edge(i, j),
                    "{ci} and {cj} are neighbours, but nodes {i} and {j} are not connected"
                );
            }
        }
    }
}

/// Assert no self-loops and no repeated unordered pairs.
pub fn assert_simple(graph: &GridGraph) {
    let mut seen = IndexSet::new();
    for (a, b) in graph.edges() {
        assert_ne!(a, b, "self-loop on node {a}");
        assert!(seen.insert((a, b)), "duplicate edge ({a}, {b})");
    }
    assert_eq!(seen.len(), graph.edge_count(), "edges() disagrees with edge_count");
}

/// Assert that the edge count matches the closed-form pair count.
pub fn assert_edge_count_closed_form(graph: &GridGraph) {
    let expected = graph.extents().face_adjacent_pair_count();
    assert_eq!(
        graph.edge_count(),
        expected,
        "edge_count ({}) != face_adjacent_pair_count ({expected})",
        graph.edge_count()
    );
}

/// Assert `b in N(a)` implies `a in N(b)` for the lattice.
pub fn assert_neighbours_symmetric(lattice: &Lattice3D) {
    for a in 0..lattice.cell_count() {
        for b in lattice.neighbours(a) {
            assert!(
                lattice.neighbours(b).contains(&a),
                "neighbour symmetry violated: {b} in N({a}) but {a} not in N({b})"
            );
        }
    }
}

/// Assert that lattice distance is a metric: reflexive, symmetric and
/// satisfying the triangle inequality.
pub fn assert_distance_metric(lattice: &Lattice3D) {
    let n = lattice.cell_count();
    let d = |a, b| lattice.distance(a, b).expect("indices are in range");
    for a in 0..n {
        assert_eq!(d(a, a), 0, "distance({a}, {a}) != 0");
        for b in 0..n {
            assert_eq!(d(a, b), d(b, a), "distance not symmetric for ({a}, {b})");
            for c in 0..n {
                assert!(
                    d(a, c) <= d(a, b) + d(b, c),
                    "triangle inequality violated for ({a}, {b}, {c})"
                );
            }
        }
    }
}

/// Assert that lattice neighbours and graph neighbours coincide.
pub fn assert_graph_matches_lattice(graph: &GridGraph, lattice: &Lattice3D) {
    assert_eq!(graph.extents(), lattice.extents(), "extents differ");
    for i in 0..lattice.cell_count() {
        let mut from_lattice: Vec<usize> = lattice.neighbours(i).into_vec();
        let mut from_graph: Vec<usize> = graph.neighbours(i).collect();
        from_lattice.sort_unstable();
        from_graph.sort_unstable();
        assert_eq!(from_lattice, from_graph, "neighbours of {i} disagree");
        assert!(from_graph.len() <= lattice.max_neighbour_degree());
    }
}

/// Run every graph check, plus agreement with the matching lattice.
pub fn run_graph_compliance(graph: &GridGraph) {
    assert_node_set_exact(graph);
    assert_edges_face_adjacent(graph);
    assert_edges_complete(graph);
    assert_simple(graph);
    assert_edge_count_closed_form(graph);
    assert_graph_matches_lattice(graph, &Lattice3D::new(graph.extents()));
}

/// Run every lattice check, plus agreement with its materialised graph.
pub fn run_lattice_compliance(lattice: &Lattice3D) {
    assert_neighbours_symmetric(lattice);
    assert_distance_metric(lattice);
    run_graph_compliance(&lattice.to_graph());
}
