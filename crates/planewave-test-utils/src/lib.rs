//! Test fixtures and float helpers for planewave development.
//!
//! Provides hand-built initial profiles (impulses), reusable mode lists,
//! and tolerance-based comparisons for the field values the engine
//! produces.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use planewave_core::{Mode, ModeList};

/// A `len`-cell profile that is zero everywhere except `value` at `at`.
///
/// # Panics
///
/// Panics if `at >= len`.
pub fn impulse(len: usize, at: usize, value: f64) -> Vec<f64> {
    assert!(at < len, "impulse index {at} outside {len}-cell profile");
    let mut profile = vec![0.0; len];
    profile[at] = value;
    profile
}

/// The mode used when a front end is given no arguments.
pub fn single_mode() -> ModeList {
    ModeList::from_slice(&[Mode::new(1.0, 2)])
}

/// Two seamless modes with different amplitudes and signs.
pub fn mixed_modes() -> ModeList {
    ModeList::from_slice(&[Mode::new(1.0, 4), Mode::new(-0.5, 2)])
}

/// Largest absolute value in `values`, or NaN if any value is NaN.
pub fn max_abs<'a>(values: impl IntoIterator<Item = &'a f64>) -> f64 {
    values.into_iter().fold(0.0, |m: f64, v| {
        if m.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            m.max(v.abs())
        }
    })
}

/// Assert two sequences agree element-wise within `tol`.
#[track_caller]
pub fn assert_close<'a, 'b>(
    actual: impl IntoIterator<Item = &'a f64>,
    expected: impl IntoIterator<Item = &'b f64>,
    tol: f64,
) {
    let actual: Vec<f64> = actual.into_iter().copied().collect();
    let expected: Vec<f64> = expected.into_iter().copied().collect();
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch: {} vs {}",
        actual.len(),
        expected.len()
    );
    for (i, (a, e)) in actual.iter().zip(&expected).enumerate() {
        assert!(
            (a - e).abs() <= tol,
            "element {i}: {a} differs from {e} by more than {tol}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impulse_places_single_value() {
        assert_eq!(impulse(4, 2, 3.0), vec![0.0, 0.0, 3.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn impulse_out_of_range_panics() {
        impulse(3, 3, 1.0);
    }

    #[test]
    fn max_abs_ignores_sign() {
        assert_eq!(max_abs(&[1.0, -3.0, 2.0]), 3.0);
        assert_eq!(max_abs(&Vec::<f64>::new()), 0.0);
    }

    #[test]
    fn max_abs_keeps_nan() {
        assert!(max_abs(&[1.0, f64::NAN, 2.0]).is_nan());
    }

    #[test]
    fn fixtures_are_seamless() {
        assert!(single_mode().iter().all(Mode::is_seamless));
        assert!(mixed_modes().iter().all(Mode::is_seamless));
    }

    #[test]
    #[should_panic(expected = "element 1")]
    fn assert_close_reports_first_mismatch() {
        assert_close(&[1.0, 2.0], &[1.0, 2.5], 0.1);
    }
}
