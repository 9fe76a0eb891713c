//! Core types for the planewave FDTD workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! spatial [`Mode`] description used to build initial conditions, the
//! token parser that front ends use to turn `amplitude,frequency` strings
//! into a [`ModeList`], and the [`ModeError`] type both of them return.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod mode;
pub mod parse;

pub use error::ModeError;
pub use mode::{Mode, ModeList};
pub use parse::{parse_mode, parse_mode_list, DEFAULT_MODE, USAGE};
