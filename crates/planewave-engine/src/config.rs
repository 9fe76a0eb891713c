//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] is the immutable input for one simulation run.
//! [`validate()`](SimConfig::validate) checks every precondition of the
//! recurrence up front, so the time-stepping pass itself never fails.

use std::error::Error;
use std::fmt;

use planewave_core::ModeError;
use planewave_space::{Ring1D, SpaceError};

// ── Medium ─────────────────────────────────────────────────────────

/// Permeability and permittivity analogues of the simulated medium.
///
/// Together they fix the wave speed `1 / sqrt(mu * epsil)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Medium {
    /// Permeability analogue. Default: 1.0.
    pub mu: f64,
    /// Permittivity analogue. Default: 0.5.
    pub epsil: f64,
}

impl Default for Medium {
    fn default() -> Self {
        Self {
            mu: 1.0,
            epsil: 0.5,
        }
    }
}

impl Medium {
    /// Wave propagation speed in grid units.
    pub fn wave_speed(&self) -> f64 {
        1.0 / self.impedance_scale()
    }

    /// `sqrt(mu * epsil)`: the ratio between the magnetic and electric
    /// amplitudes of a plane wave in this medium.
    pub fn impedance_scale(&self) -> f64 {
        (self.mu * self.epsil).sqrt()
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Precondition violations detected before a simulation starts.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The spatial grid could not be built.
    Space(SpaceError),
    /// A mode in the initial condition is invalid.
    Mode(ModeError),
    /// `tmax` is zero.
    EmptyTimeline,
    /// `mu`, `epsil`, or their product is not finite and positive.
    InvalidMedium {
        /// Which constant was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// `fact` is NaN, infinite, zero, or negative.
    InvalidCoefficient {
        /// The rejected value.
        value: f64,
    },
    /// `fact` reaches or exceeds the Courant limit `sqrt(mu * epsil)`.
    CourantViolation {
        /// The configured coefficient.
        fact: f64,
        /// The exclusive upper bound for this medium.
        limit: f64,
    },
    /// `zmax * tmax` does not fit in one allocation.
    CellCountOverflow {
        /// Spatial size.
        zmax: usize,
        /// Timeline length.
        tmax: usize,
    },
    /// An explicit initial profile does not match the grid size.
    ProfileLength {
        /// Grid size.
        expected: usize,
        /// Length of the supplied profile.
        actual: usize,
    },
    /// The t=0 electric profile, or its magnetic counterpart
    /// `profile * sqrt(mu * epsil)`, holds a NaN or infinite sample.
    NonFiniteProfile {
        /// Grid index of the first offending sample.
        index: usize,
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space: {e}"),
            Self::Mode(e) => write!(f, "mode: {e}"),
            Self::EmptyTimeline => write!(f, "tmax must be at least 1"),
            Self::InvalidMedium { name, value } => {
                write!(f, "{name} must be finite and positive, got {value}")
            }
            Self::InvalidCoefficient { value } => {
                write!(f, "fact must be finite and positive, got {value}")
            }
            Self::CourantViolation { fact, limit } => {
                write!(
                    f,
                    "fact {fact} violates the Courant bound: must be below {limit}"
                )
            }
            Self::CellCountOverflow { zmax, tmax } => {
                write!(f, "buffer shape {zmax} x {tmax} is too large")
            }
            Self::ProfileLength { expected, actual } => {
                write!(
                    f,
                    "initial profile has {actual} samples, grid has {expected}"
                )
            }
            Self::NonFiniteProfile { index, value } => {
                write!(f, "initial profile sample {index} is not finite: {value}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::Mode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<ModeError> for ConfigError {
    fn from(e: ModeError) -> Self {
        Self::Mode(e)
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Complete configuration for one simulation run.
///
/// The default is the reference build: a 201-cell ring, 201 000 time
/// steps, `mu = 1`, `epsil = 0.5`, `fact = 0.005`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimConfig {
    /// Number of spatial cells.
    pub zmax: usize,
    /// Number of time columns, including the initial one.
    pub tmax: usize,
    /// Medium constants.
    pub medium: Medium,
    /// Stability coefficient of the discretization (`Δt / 2Δz`).
    pub fact: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            zmax: Self::REFERENCE_ZMAX,
            tmax: Self::REFERENCE_TMAX,
            medium: Medium::default(),
            fact: 0.005,
        }
    }
}

impl SimConfig {
    /// Grid size of the reference build.
    pub const REFERENCE_ZMAX: usize = 201;
    /// Timeline length of the reference build.
    pub const REFERENCE_TMAX: usize = 201 * 1_000;

    /// Replace the buffer shape.
    pub fn with_shape(mut self, zmax: usize, tmax: usize) -> Self {
        self.zmax = zmax;
        self.tmax = tmax;
        self
    }

    /// Replace the medium.
    pub fn with_medium(mut self, medium: Medium) -> Self {
        self.medium = medium;
        self
    }

    /// Replace the stability coefficient.
    pub fn with_fact(mut self, fact: f64) -> Self {
        self.fact = fact;
        self
    }

    /// Exclusive upper bound on `fact` for this medium.
    ///
    /// One electric/magnetic step pair has unit determinant and trace
    /// `2 - 4 s² fact² / (mu epsil)` for a Fourier mode with `s = sin(kΔz)`,
    /// so every mode stays on the unit circle iff `fact < sqrt(mu epsil)`.
    /// At equality the `kΔz = π/2` mode grows linearly.
    pub fn courant_limit(&self) -> f64 {
        self.medium.impedance_scale()
    }

    /// `fact / courant_limit()`. Stable runs need a value below 1.
    pub fn courant_number(&self) -> f64 {
        self.fact / self.courant_limit()
    }

    /// Coefficient of the electric update: `fact / (mu * epsil)`.
    pub fn electric_coupling(&self) -> f64 {
        self.fact / (self.medium.mu * self.medium.epsil)
    }

    /// Coefficient of the magnetic update: `fact`.
    pub fn magnetic_coupling(&self) -> f64 {
        self.fact
    }

    /// Number of time-step transitions in a full pass.
    pub fn transitions(&self) -> usize {
        self.tmax.saturating_sub(1)
    }

    /// Build the periodic grid for this configuration.
    pub fn grid(&self) -> Result<Ring1D, ConfigError> {
        Ok(Ring1D::new(self.zmax)?)
    }

    /// Validate all preconditions of the recurrence.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid must have at least one cell.
        self.grid()?;
        // 2. Timeline must have at least the initial column.
        if self.tmax == 0 {
            return Err(ConfigError::EmptyTimeline);
        }
        // 3. Buffer must be addressable (ndarray caps element counts at isize::MAX).
        match self.zmax.checked_mul(self.tmax) {
            Some(cells) if cells <= isize::MAX as usize => {}
            _ => {
                return Err(ConfigError::CellCountOverflow {
                    zmax: self.zmax,
                    tmax: self.tmax,
                })
            }
        }
        // 4. Medium constants finite and positive, product included.
        let Medium { mu, epsil } = self.medium;
        for (name, value) in [("mu", mu), ("epsil", epsil), ("mu * epsil", mu * epsil)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidMedium { name, value });
            }
        }
        // 5. fact finite and positive.
        if !self.fact.is_finite() || self.fact <= 0.0 {
            return Err(ConfigError::InvalidCoefficient { value: self.fact });
        }
        // 6. Courant bound (strict).
        let limit = self.courant_limit();
        if self.fact >= limit {
            return Err(ConfigError::CourantViolation {
                fact: self.fact,
                limit,
            });
        }
        Ok(())
    }
}
