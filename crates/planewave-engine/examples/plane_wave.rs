//! Command-line plane wave run.
//!
//! Usage: `cargo run --example plane_wave -- [amplitude,frequency ...]`
//!
//! Parses the mode list, runs a tenth of the reference timeline on the
//! reference grid, and prints every 1000th electric-field snapshot as a
//! one-line sparkline.

use std::process::ExitCode;

use planewave_core::{parse_mode_list, ModeError, USAGE};
use planewave_engine::{simulate, SimConfig};

const STRIDE: usize = 1_000;
const WIDTH: usize = 67;
const LEVELS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

fn main() -> ExitCode {
    let modes = match parse_mode_list(std::env::args().skip(1)) {
        Ok(modes) => modes,
        Err(ModeError::HelpRequested) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {e}\n");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    println!("=== Planewave FDTD ===\n");
    for mode in &modes {
        println!("  mode: {mode}");
    }

    let config = SimConfig::default()
        .with_shape(SimConfig::REFERENCE_ZMAX, SimConfig::REFERENCE_TMAX / 10);
    println!(
        "  grid: {} cells x {} steps, courant number {:.4}\n",
        config.zmax,
        config.tmax,
        config.courant_number()
    );

    let sim = match simulate(config, &modes) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let scale = sim.peak_amplitude();
    for frame in sim.frames(STRIDE) {
        let line = sparkline(&frame.electric.to_vec(), scale);
        println!(
            "  n={:>6}  |E|max={:>7.4}  |B|max={:>7.4}  {line}",
            frame.index,
            sim.electric().column_peak(frame.index),
            sim.magnetic().column_peak(frame.index),
        );
    }
    println!("\nfingerprint: {:016x}", sim.fingerprint());

    ExitCode::SUCCESS
}

/// Render samples in `[-scale, scale]` as at most `WIDTH` block characters.
fn sparkline(values: &[f64], scale: f64) -> String {
    let per_char = values.len().div_ceil(WIDTH).max(1);
    values
        .chunks(per_char)
        .map(|chunk| {
            let mean = chunk.iter().sum::<f64>() / chunk.len() as f64;
            let unit = if scale > 0.0 {
                (mean / scale + 1.0) / 2.0
            } else {
                0.5
            };
            let level = (unit.clamp(0.0, 1.0) * (LEVELS.len() - 1) as f64).round() as usize;
            LEVELS[level]
        })
        .collect()
}
