//! Mode synthesis: turning a mode list into the t=0 spatial profile.

use ndarray::Array1;
use planewave_core::Mode;

/// Sample the superposition of `modes` at every cell of a `len`-cell grid.
///
/// Position `k` receives `Σ A·sin(f·π·k / len)` over all modes. No
/// normalization or clipping is applied; an empty list gives all zeros.
///
/// # Examples
///
/// ```
/// use planewave_core::Mode;
/// use planewave_engine::synthesize;
///
/// let profile = synthesize(4, &[Mode::new(2.0, 2)]);
/// assert_eq!(profile.len(), 4);
/// assert!((profile[1] - 2.0).abs() < 1e-12);
/// ```
pub fn synthesize(len: usize, modes: &[Mode]) -> Array1<f64> {
    Array1::from_shape_fn(len, |k| {
        modes
            .iter()
            .fold(0.0, |acc, mode| acc + mode.sample_at(k, len))
    })
}
