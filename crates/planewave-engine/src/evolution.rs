//! The leapfrog field evolution engine.
//!
//! Staggered (Yee-style) discretization of the 1D Maxwell curl equations.
//! Each transition updates one component from the centred spatial
//! difference of the other and carries the other forward:
//!
//! ```text
//! Electric phase:  E[i, n+1] = E[i, n] - fact/(mu·epsil) · (B[r, n] - B[l, n])
//!                  B[:, n+1] = B[:, n]
//! Magnetic phase:  B[i, n+1] = B[i, n] - fact · (E[r, n] - E[l, n])
//!                  E[:, n+1] = E[:, n]
//! ```
//!
//! where `l` and `r` are the periodic neighbours of `i`. Every cell,
//! including the two ends of the grid, goes through the same update.

use ndarray::{ArrayView1, ArrayViewMut1};
use planewave_core::Mode;
use planewave_space::Ring1D;

use crate::config::{ConfigError, SimConfig};
use crate::field::FieldBuffer;
use crate::phase::Phase;
use crate::simulation::Simulation;
use crate::synth::synthesize;

/// Owns both field buffers while the time-stepping pass runs.
///
/// Construction validates the configuration and seeds time column 0.
/// [`run`](Self::run) then fills every remaining column and hands the
/// finished buffers to the caller as a [`Simulation`].
///
/// # Examples
///
/// ```
/// use planewave_core::Mode;
/// use planewave_engine::{FieldEvolution, SimConfig};
///
/// let config = SimConfig::default().with_shape(11, 5);
/// let sim = FieldEvolution::new(config, &[Mode::new(1.0, 2)]).unwrap().run();
/// assert_eq!(sim.electric().dim(), (11, 5));
/// // n = 0 is an electric phase: the magnetic field is carried forward.
/// assert_eq!(sim.magnetic().column(1), sim.magnetic().column(0));
/// ```
#[derive(Debug)]
pub struct FieldEvolution {
    config: SimConfig,
    neighbours: Vec<(usize, usize)>,
    electric: FieldBuffer,
    magnetic: FieldBuffer,
    phase: Phase,
    step: usize,
}

impl FieldEvolution {
    /// Validate `config` and seed both fields from the superposition of `modes`.
    ///
    /// Finite amplitudes can still overflow when summed or scaled; such a
    /// profile is rejected with [`ConfigError::NonFiniteProfile`].
    pub fn new(config: SimConfig, modes: &[Mode]) -> Result<Self, ConfigError> {
        for mode in modes {
            mode.validate()?;
            if !mode.is_seamless() {
                log::warn!(
                    "mode ({mode}) has an odd peak count; its profile has a slope \
                     discontinuity at the periodic seam"
                );
            }
        }
        config.validate()?;
        let grid = config.grid()?;
        let profile = synthesize(grid.len(), modes);
        Self::seeded(config, grid, profile.view())
    }

    /// Validate `config` and seed both fields from an explicit electric profile.
    ///
    /// The magnetic field starts at `profile * sqrt(mu * epsil)`, exactly as
    /// for a synthesized profile. Either field holding a NaN or infinite
    /// sample is rejected with [`ConfigError::NonFiniteProfile`].
    pub fn from_profile(config: SimConfig, profile: &[f64]) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = config.grid()?;
        if profile.len() != grid.len() {
            return Err(ConfigError::ProfileLength {
                expected: grid.len(),
                actual: profile.len(),
            });
        }
        Self::seeded(config, grid, ArrayView1::from(profile))
    }

    fn seeded(
        config: SimConfig,
        grid: Ring1D,
        profile: ArrayView1<'_, f64>,
    ) -> Result<Self, ConfigError> {
        let scale = config.medium.impedance_scale();
        let mut electric = FieldBuffer::zeros(grid.len(), config.tmax);
        let mut magnetic = FieldBuffer::zeros(grid.len(), config.tmax);
        electric.seed(profile, 1.0);
        magnetic.seed(profile, scale);
        check_finite(&electric)?;
        check_finite(&magnetic)?;

        Ok(Self {
            config,
            neighbours: grid.neighbour_table(),
            electric,
            magnetic,
            phase: Phase::INITIAL,
            step: 0,
        })
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Whether every time column has been populated.
    pub(crate) fn is_complete(&self) -> bool {
        self.step + 1 >= self.config.tmax
    }

    /// Run the full pass and hand the finished buffers to the caller.
    pub fn run(mut self) -> Simulation {
        log::debug!(
            "evolving {} cells over {} transitions (courant number {:.4})",
            self.config.zmax,
            self.config.transitions(),
            self.config.courant_number(),
        );
        while !self.is_complete() {
            self.advance();
        }
        let sim = Simulation::new(self.config, self.electric, self.magnetic);
        log::debug!("pass complete, peak amplitude {:.6}", sim.peak_amplitude());
        sim
    }

    /// Perform one transition: column `step` → column `step + 1`.
    fn advance(&mut self) {
        let n = self.step;
        let table = &self.neighbours;
        match self.phase {
            Phase::Electric => {
                let coupling = self.config.electric_coupling();
                let source = self.magnetic.column(n);
                self.electric
                    .step_with(n, |prev, next| leapfrog(prev, source, next, coupling, table));
                self.magnetic.carry_forward(n);
            }
            Phase::Magnetic => {
                let coupling = self.config.magnetic_coupling();
                let source = self.electric.column(n);
                self.magnetic
                    .step_with(n, |prev, next| leapfrog(prev, source, next, coupling, table));
                self.electric.carry_forward(n);
            }
        }
        self.phase = self.phase.next();
        self.step += 1;
    }
}

/// First non-finite sample of column 0, as an error.
fn check_finite(buffer: &FieldBuffer) -> Result<(), ConfigError> {
    match buffer.column(0).iter().position(|v| !v.is_finite()) {
        Some(index) => Err(ConfigError::NonFiniteProfile {
            index,
            value: buffer[(index, 0)],
        }),
        None => Ok(()),
    }
}

/// `next[i] = prev[i] - coupling * (source[right] - source[left])`.
fn leapfrog(
    prev: ArrayView1<'_, f64>,
    source: ArrayView1<'_, f64>,
    mut next: ArrayViewMut1<'_, f64>,
    coupling: f64,
    neighbours: &[(usize, usize)],
) {
    for (i, (out, &(left, right))) in next.iter_mut().zip(neighbours).enumerate() {
        *out = prev[i] - coupling * (source[right] - source[left]);
    }
}
