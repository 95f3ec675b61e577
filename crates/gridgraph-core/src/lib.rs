//! Core types for 3D lattice graphs.
//!
//! This is the leaf crate with zero internal dependencies. It fixes the
//! vocabulary shared by every other crate in the workspace: validated
//! [`Extents`], [`CellCoord`], the row-major flat-index convention, and
//! the [`LatticeError`] type.
//!
//! # Flat-index convention
//!
//! A lattice of extents `(px, py, pz)` has `px * py * pz` cells numbered
//! `x * py * pz + y * pz + z`. The convention is part of the public
//! contract: graph nodes are flat indices, so anything that interprets
//! them as positions in a parameter vector must use the same mapping.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod extents;

pub use coord::CellCoord;
pub use error::LatticeError;
pub use extents::{Axis, Extents};
