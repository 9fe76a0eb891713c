//! Spatial topology for planewave simulations.
//!
//! The FDTD grid is a closed ring: the first and last cells are each
//! other's neighbours. [`Ring1D`] owns that topology and [`wrap`] is the
//! single index-folding rule every neighbour lookup goes through.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod ring1d;

pub use error::SpaceError;
pub use ring1d::{wrap, Ring1D};
