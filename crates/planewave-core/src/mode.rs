//! Spatial sine modes.

use crate::error::ModeError;
use smallvec::SmallVec;
use std::f64::consts::PI;
use std::fmt;

/// One sinusoidal spatial component of an initial field profile.
///
/// `frequency` counts half-wavelengths (peaks) across the grid. On a grid
/// of `len` cells the mode samples as
///
/// ```text
/// amplitude * sin(frequency * π * k / len)    for k in 0..len
/// ```
///
/// # Examples
///
/// ```
/// use planewave_core::Mode;
///
/// let m = Mode::new(2.0, 1);
/// assert_eq!(m.sample_at(0, 10), 0.0);
/// assert!((m.sample_at(5, 10) - 2.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mode {
    /// Peak amplitude of the component.
    pub amplitude: f64,
    /// Number of half-wavelengths across the grid.
    pub frequency: u32,
}

/// An ordered list of modes. Initial conditions rarely use more than four.
pub type ModeList = SmallVec<[Mode; 4]>;

impl Mode {
    /// Create a mode. Does not validate; see [`validate`](Self::validate).
    pub const fn new(amplitude: f64, frequency: u32) -> Self {
        Self {
            amplitude,
            frequency,
        }
    }

    /// Reject NaN or infinite amplitudes.
    pub fn validate(&self) -> Result<(), ModeError> {
        if !self.amplitude.is_finite() {
            return Err(ModeError::NonFiniteAmplitude {
                value: self.amplitude,
            });
        }
        Ok(())
    }

    /// Value of this mode at grid position `k` on a grid of `len` cells.
    ///
    /// `len` must be non-zero.
    #[inline]
    pub fn sample_at(&self, k: usize, len: usize) -> f64 {
        self.amplitude * (f64::from(self.frequency) * PI * k as f64 / len as f64).sin()
    }

    /// Whether the sampled profile closes smoothly across the periodic seam.
    ///
    /// Both ends of every profile are zero, but with an odd peak count the
    /// slope flips sign between the last and the first cell.
    pub fn is_seamless(&self) -> bool {
        self.frequency % 2 == 0
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "amplitude = {}, frequency = {}",
            self.amplitude, self.frequency
        )
    }
}
