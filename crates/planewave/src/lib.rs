//! Planewave: a leapfrog FDTD simulation of a 1D electromagnetic plane wave.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the planewave sub-crates. Most users only need this one dependency.
//!
//! # Quick start
//!
//! ```rust
//! use planewave::prelude::*;
//!
//! // Two sine modes on a 41-cell ring, 400 time steps.
//! let modes = parse_mode_list(["1.0,2", "0.25,6"]).unwrap();
//! let config = SimConfig::default().with_shape(41, 400);
//! let sim = simulate(config, &modes).unwrap();
//!
//! assert_eq!(sim.electric().dim(), (41, 400));
//! for frame in sim.frames(100) {
//!     assert_eq!(frame.electric.len(), 41);
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `planewave-core` | Modes, the mode-list parser, `ModeError` |
//! | [`space`] | `planewave-space` | The periodic `Ring1D` grid and index wrapping |
//! | [`engine`] | `planewave-engine` | Configuration, field evolution, results |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Mode descriptions and token parsing (`planewave-core`).
pub use planewave_core as types;

/// Periodic grid topology (`planewave-space`).
///
/// [`space::Ring1D`] supplies neighbour lookups; [`space::wrap`] is the
/// index-folding rule behind them.
pub use planewave_space as space;

/// The leapfrog engine (`planewave-engine`).
///
/// [`engine::SimConfig`] describes a run, [`engine::FieldEvolution`]
/// performs it and [`engine::Simulation`] holds the result.
pub use planewave_engine as engine;

/// Common imports for typical planewave usage.
///
/// ```rust
/// use planewave::prelude::*;
/// ```
pub mod prelude {
    // Modes
    pub use planewave_core::{parse_mode_list, Mode, ModeError, ModeList, USAGE};

    // Space
    pub use planewave_space::Ring1D;

    // Engine
    pub use planewave_engine::{
        simulate, ConfigError, FieldBuffer, FieldEvolution, Frame, Medium, Phase, SimConfig,
        Simulation,
    };
}
