//! Completed simulation results and frame sampling.

use ndarray::ArrayView1;

use crate::config::SimConfig;
use crate::field::FieldBuffer;
use crate::hash;

/// The two fully populated field buffers of one run.
///
/// Produced by [`FieldEvolution::run`](crate::FieldEvolution::run) or
/// [`simulate`](crate::simulate). Read-only: consumers index columns to
/// render snapshots, or take ownership with [`into_parts`](Self::into_parts).
#[derive(Clone, Debug, PartialEq)]
pub struct Simulation {
    config: SimConfig,
    electric: FieldBuffer,
    magnetic: FieldBuffer,
}

/// Both field components at one time index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame<'a> {
    /// Time index of the snapshot.
    pub index: usize,
    /// Electric field over the grid.
    pub electric: ArrayView1<'a, f64>,
    /// Magnetic field over the grid.
    pub magnetic: ArrayView1<'a, f64>,
}

impl Simulation {
    pub(crate) fn new(config: SimConfig, electric: FieldBuffer, magnetic: FieldBuffer) -> Self {
        debug_assert_eq!(electric.dim(), magnetic.dim());
        Self {
            config,
            electric,
            magnetic,
        }
    }

    /// Configuration the run was produced with.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Electric field buffer.
    pub fn electric(&self) -> &FieldBuffer {
        &self.electric
    }

    /// Magnetic field buffer.
    pub fn magnetic(&self) -> &FieldBuffer {
        &self.magnetic
    }

    /// Take ownership of `(electric, magnetic)`.
    pub fn into_parts(self) -> (FieldBuffer, FieldBuffer) {
        (self.electric, self.magnetic)
    }

    /// Both components at time `n`, or `None` past the end of the timeline.
    pub fn snapshot(&self, n: usize) -> Option<Frame<'_>> {
        (n < self.electric.tmax()).then(|| Frame {
            index: n,
            electric: self.electric.column(n),
            magnetic: self.magnetic.column(n),
        })
    }

    /// Every `stride`-th snapshot starting at time 0.
    ///
    /// A stride of 0 is treated as 1.
    pub fn frames(&self, stride: usize) -> Frames<'_> {
        Frames {
            sim: self,
            next: 0,
            stride: stride.max(1),
        }
    }

    /// Largest absolute value across both buffers, or NaN if either holds one.
    pub fn peak_amplitude(&self) -> f64 {
        let (e, b) = (self.electric.peak(), self.magnetic.peak());
        if e.is_nan() || b.is_nan() {
            f64::NAN
        } else {
            e.max(b)
        }
    }

    /// FNV-1a fingerprint of both buffers, for determinism checks.
    pub fn fingerprint(&self) -> u64 {
        hash::fields_hash(&self.electric, &self.magnetic)
    }
}

/// Iterator over sampled [`Frame`]s. See [`Simulation::frames`].
#[derive(Clone, Debug)]
pub struct Frames<'a> {
    sim: &'a Simulation,
    next: usize,
    stride: usize,
}

impl<'a> Iterator for Frames<'a> {
    type Item = Frame<'a>;

    fn next(&mut self) -> Option<Frame<'a>> {
        let frame = self.sim.snapshot(self.next)?;
        self.next = self.next.saturating_add(self.stride);
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let tmax = self.sim.electric.tmax();
        let remaining = if self.next < tmax {
            (tmax - 1 - self.next) / self.stride + 1
        } else {
            0
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Frames<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldEvolution;
    use planewave_core::Mode;

    fn run(zmax: usize, tmax: usize) -> Simulation {
        let config = SimConfig::default().with_shape(zmax, tmax);
        FieldEvolution::new(config, &[Mode::new(1.0, 2)])
            .unwrap()
            .run()
    }

    #[test]
    fn snapshot_in_range() {
        let sim = run(11, 5);
        let frame = sim.snapshot(4).unwrap();
        assert_eq!(frame.index, 4);
        assert_eq!(frame.electric, sim.electric().column(4));
        assert_eq!(frame.magnetic, sim.magnetic().column(4));
        assert!(sim.snapshot(5).is_none());
    }

    #[test]
    fn frames_sample_every_stride() {
        let sim = run(5, 10);
        let indices: Vec<usize> = sim.frames(3).map(|f| f.index).collect();
        assert_eq!(indices, vec![0, 3, 6, 9]);
    }

    #[test]
    fn frames_zero_stride_is_every_step() {
        let sim = run(5, 4);
        assert_eq!(sim.frames(0).count(), 4);
    }

    #[test]
    fn frames_len_is_exact() {
        let sim = run(5, 10);
        for stride in 1..12 {
            let frames = sim.frames(stride);
            let expected = frames.len();
            assert_eq!(frames.count(), expected, "stride {stride}");
        }
    }

    #[test]
    fn into_parts_transfers_both_buffers() {
        let sim = run(7, 3);
        let electric = sim.electric().clone();
        let magnetic = sim.magnetic().clone();
        let (e, b) = sim.into_parts();
        assert_eq!(e, electric);
        assert_eq!(b, magnetic);
    }

    #[test]
    fn peak_amplitude_reports_nan_in_either_field() {
        let mut electric = FieldBuffer::zeros(5, 2);
        electric.seed(ndarray::arr1(&[0.0, f64::NAN, 0.0, 0.0, 0.0]).view(), 1.0);
        let magnetic = FieldBuffer::zeros(5, 2);
        let config = SimConfig::default().with_shape(5, 2);

        let sim = Simulation::new(config, electric.clone(), magnetic.clone());
        assert!(sim.peak_amplitude().is_nan());

        let swapped = Simulation::new(config, magnetic, electric);
        assert!(swapped.peak_amplitude().is_nan());
    }

    #[test]
    fn peak_amplitude_covers_both_fields() {
        let sim = run(11, 5);
        assert!(sim.peak_amplitude() >= sim.electric().peak());
        assert!(sim.peak_amplitude() >= sim.magnetic().peak());
    }
}
