//! Space × time field storage.
//!
//! A [`FieldBuffer`] holds one field component for a whole run: element
//! `(i, n)` is the magnitude at spatial index `i`, time index `n`. The
//! backing array is column-major, so each time column (one spatial
//! snapshot) is contiguous.

use std::ops::Index;

use ndarray::{Array2, ArrayView1, ArrayView2, ArrayViewMut1, Axis, ShapeBuilder};

/// Dense `(zmax, tmax)` buffer of one field component.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldBuffer {
    data: Array2<f64>,
}

impl FieldBuffer {
    /// Allocate a zero-filled buffer.
    pub fn zeros(zmax: usize, tmax: usize) -> Self {
        Self {
            data: Array2::zeros((zmax, tmax).f()),
        }
    }

    /// Number of spatial cells.
    pub fn zmax(&self) -> usize {
        self.data.nrows()
    }

    /// Number of time columns.
    pub fn tmax(&self) -> usize {
        self.data.ncols()
    }

    /// `(zmax, tmax)`.
    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Value at `(i, n)`, or `None` if out of range.
    pub fn get(&self, i: usize, n: usize) -> Option<f64> {
        self.data.get((i, n)).copied()
    }

    /// Spatial snapshot at time `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n >= tmax`.
    pub fn column(&self, n: usize) -> ArrayView1<'_, f64> {
        self.data.column(n)
    }

    /// Time series at spatial index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= zmax`.
    pub fn row(&self, i: usize) -> ArrayView1<'_, f64> {
        self.data.row(i)
    }

    /// Read-only view of the whole buffer.
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// Consume the buffer, returning the backing array.
    pub fn into_array(self) -> Array2<f64> {
        self.data
    }

    /// Largest absolute value in column `n`, or NaN if the column holds one.
    pub fn column_peak(&self, n: usize) -> f64 {
        peak(self.data.column(n).iter())
    }

    /// Largest absolute value anywhere in the buffer, or NaN if it holds one.
    pub fn peak(&self) -> f64 {
        peak(self.data.iter())
    }

    /// Write `profile * scale` into column 0.
    pub(crate) fn seed(&mut self, profile: ArrayView1<'_, f64>, scale: f64) {
        self.data
            .column_mut(0)
            .zip_mut_with(&profile, |dst, &src| *dst = src * scale);
    }

    /// Hand column `n` (read) and column `n + 1` (write) to `f`.
    pub(crate) fn step_with<F>(&mut self, n: usize, f: F)
    where
        F: FnOnce(ArrayView1<'_, f64>, ArrayViewMut1<'_, f64>),
    {
        let (prev, mut next) = self.data.view_mut().split_at(Axis(1), n + 1);
        f(prev.column(n), next.column_mut(0));
    }

    /// Copy column `n` unchanged into column `n + 1`.
    pub(crate) fn carry_forward(&mut self, n: usize) {
        self.step_with(n, |prev, mut next| next.assign(&prev));
    }
}

impl Index<(usize, usize)> for FieldBuffer {
    type Output = f64;

    fn index(&self, (i, n): (usize, usize)) -> &f64 {
        &self.data[(i, n)]
    }
}

// NaN is sticky: `f64::max` alone would discard it.
fn peak<'a>(values: impl Iterator<Item = &'a f64>) -> f64 {
    values.fold(0.0, |m: f64, v| {
        if m.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            m.max(v.abs())
        }
    })
}
