//! Integration test: amplitude boundedness and the Courant limit.
//!
//! The leapfrog scheme is non-dissipative, so a stable run keeps its peak
//! amplitude near the initial one for as long as it runs. At the Courant
//! limit the fastest Fourier mode on a grid whose length is a multiple of
//! 4 grows without bound, and validation rejects that configuration.

use planewave_core::Mode;
use planewave_engine::{simulate, ConfigError, FieldEvolution, Medium, SimConfig, Simulation};
use planewave_test_utils::max_abs;

fn initial_peak(sim: &Simulation) -> f64 {
    let (e, b) = (sim.electric().column(0), sim.magnetic().column(0));
    max_abs(e.iter().chain(b.iter()))
}

/// Largest per-column peak over the last `window` columns.
fn tail_peak(sim: &Simulation, window: usize) -> f64 {
    let tmax = sim.electric().tmax();
    let peaks: Vec<f64> = (tmax.saturating_sub(window)..tmax)
        .flat_map(|n| [sim.electric().column_peak(n), sim.magnetic().column_peak(n)])
        .collect();
    max_abs(&peaks)
}

/// Peak of a whole run, asserted finite so a NaN blow-up cannot pass a bound.
#[track_caller]
fn finite_peak(sim: &Simulation) -> f64 {
    let peak = sim.peak_amplitude();
    assert!(peak.is_finite(), "run diverged: peak amplitude {peak}");
    peak
}

#[test]
fn reference_constants_stay_bounded() {
    let cfg = SimConfig::default().with_shape(SimConfig::REFERENCE_ZMAX, 4_001);
    let modes = [Mode::new(1.0, 2), Mode::new(0.5, 6)];
    let sim = simulate(cfg, &modes).unwrap();

    let start = initial_peak(&sim);
    assert!(start > 0.0);
    let peak = finite_peak(&sim);
    assert!(peak <= 1.5 * start, "peak {peak} grew past 1.5x initial {start}");
}

#[test]
fn near_limit_stays_bounded_on_quarter_wavelength_grid() {
    let base = SimConfig::default().with_shape(8, 4_001);
    let cfg = base.with_fact(0.9 * base.courant_limit());
    assert!(cfg.validate().is_ok());

    // Frequency 4 on 8 cells is the kΔz = π/2 mode, the fastest-growing one.
    let sim = simulate(cfg, &[Mode::new(1.0, 4), Mode::new(1.0, 2)]).unwrap();
    let start = initial_peak(&sim);
    let peak = finite_peak(&sim);
    assert!(peak < 10.0 * start, "peak {peak} exceeded 10x initial {start}");
    assert!(tail_peak(&sim, 100) < 10.0 * start);
}

#[test]
fn fact_at_limit_is_rejected() {
    let base = SimConfig::default().with_shape(8, 100);
    let limit = base.courant_limit();
    let err = FieldEvolution::new(base.with_fact(limit), &[Mode::new(1.0, 4)]).unwrap_err();
    assert_eq!(err, ConfigError::CourantViolation { fact: limit, limit });
}

#[test]
fn fact_above_limit_is_rejected_for_other_media() {
    let medium = Medium {
        mu: 2.0,
        epsil: 8.0,
    };
    let cfg = SimConfig::default()
        .with_shape(16, 10)
        .with_medium(medium)
        .with_fact(4.5);
    assert_eq!(cfg.courant_limit(), 4.0);
    match simulate(cfg, &[Mode::new(1.0, 2)]) {
        Err(ConfigError::CourantViolation { fact, limit }) => {
            assert_eq!(fact, 4.5);
            assert_eq!(limit, 4.0);
        }
        other => panic!("expected CourantViolation, got {other:?}"),
    }
}

#[test]
fn just_below_limit_is_accepted_for_other_media() {
    let medium = Medium {
        mu: 2.0,
        epsil: 8.0,
    };
    let cfg = SimConfig::default()
        .with_shape(16, 2_001)
        .with_medium(medium)
        .with_fact(3.6);
    let sim = simulate(cfg, &[Mode::new(1.0, 8), Mode::new(1.0, 2)]).unwrap();
    assert!(finite_peak(&sim) < 10.0 * initial_peak(&sim));
}
