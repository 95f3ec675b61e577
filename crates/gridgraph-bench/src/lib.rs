//! Benchmark profiles for gridgraph.
//!
//! Provides lattice extents shared by the criterion benches:
//!
//! - [`reference_extents`]: 40x40x20 (32K cells), a typical field parameter
//! - [`stress_extents`]: 100x100x40 (400K cells)
//! - [`sample_pairs`]: deterministic cell pairs for distance benches

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridgraph_core::Extents;

/// Reference profile: 40x40x20 lattice (32K cells).
pub fn reference_extents() -> Extents {
    Extents::new(40, 40, 20).expect("reference extents are valid")
}

/// Stress profile: 100x100x40 lattice (400K cells).
pub fn stress_extents() -> Extents {
    Extents::new(100, 100, 40).expect("stress extents are valid")
}

/// `count` deterministic pseudo-random pairs of flat indices in `extents`.
pub fn sample_pairs(extents: Extents, count: usize) -> Vec<(usize, usize)> {
    let n = extents.cell_count() as u64;
    (0..count as u64)
        .map(|i| {
            let a = i.wrapping_mul(6364136223846793007) % n;
            let b = (i + 500).wrapping_mul(1442695040888963407) % n;
            (a as usize, b as usize)
        })
        .collect()
}
