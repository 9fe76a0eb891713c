//! Benchmark profiles for the planewave FDTD engine.
//!
//! - [`reference_profile`]: the 201-cell grid at the reference medium, 20 100 steps
//! - [`stress_profile`]: a 4 001-cell grid at the same Courant number, 1 000 steps
//! - [`reference_modes`]: a fixed three-mode initial condition

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use planewave_core::{Mode, ModeList};
use planewave_engine::SimConfig;

/// Reference grid with a tenth of the full timeline.
///
/// fact = 0.005 against a Courant limit of sqrt(0.5) ≈ 0.707.
pub fn reference_profile() -> SimConfig {
    SimConfig::default().with_shape(SimConfig::REFERENCE_ZMAX, SimConfig::REFERENCE_TMAX / 10)
}

/// Twenty times the cells of [`reference_profile`], fewer steps.
pub fn stress_profile() -> SimConfig {
    SimConfig::default().with_shape(4_001, 1_000)
}

/// Fixed mode mix used by every benchmark.
pub fn reference_modes() -> ModeList {
    ModeList::from_slice(&[Mode::new(1.0, 2), Mode::new(0.5, 6), Mode::new(-0.25, 10)])
}
