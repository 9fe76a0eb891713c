//! Leapfrog FDTD engine for a 1D electromagnetic plane wave.
//!
//! Provides [`SimConfig`] (grid shape, medium and step coefficient, with
//! Courant validation), [`FieldEvolution`] (the time-stepping pass) and
//! [`Simulation`] (the finished electric and magnetic buffers). The
//! [`simulate`] helper wires the three together for the common case.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod evolution;
pub mod field;
pub mod hash;
pub mod phase;
pub mod simulation;
pub mod synth;

pub use config::{ConfigError, Medium, SimConfig};
pub use evolution::FieldEvolution;
pub use field::FieldBuffer;
pub use phase::Phase;
pub use simulation::{Frame, Frames, Simulation};
pub use synth::synthesize;

use planewave_core::Mode;

/// Validate `config`, seed from `modes` and run the full pass.
///
/// # Examples
///
/// ```
/// use planewave_core::Mode;
/// use planewave_engine::{simulate, SimConfig};
///
/// let config = SimConfig::default().with_shape(21, 100);
/// let sim = simulate(config, &[Mode::new(1.0, 2)]).unwrap();
/// assert_eq!(sim.magnetic().dim(), (21, 100));
/// ```
pub fn simulate(config: SimConfig, modes: &[Mode]) -> Result<Simulation, ConfigError> {
    log::info!(
        "simulating {} mode(s) on {} cells x {} steps",
        modes.len(),
        config.zmax,
        config.tmax
    );
    Ok(FieldEvolution::new(config, modes)?.run())
}
