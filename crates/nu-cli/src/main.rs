// ─────────────────────────────────────────────────────────────────────
// SCPN Neutrino Osc — CLI
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Oscillation sweep harness.
//!
//! Run with: `cargo run --release -p nu-cli [config.json]`
//!
//! Without an argument the best-fit reactor scenario is used. The trace
//! is emitted as JSON on stdout so any external plotting tool can
//! consume it; the mixing matrix and parameters go to stderr.

use std::process::ExitCode;

use nu_core::{integrate, mixing_matrix};
use nu_math::Mat3;
use nu_types::config::SimulationConfig;
use nu_types::error::OscResult;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> OscResult<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => SimulationConfig::from_file(&path)?,
        None => SimulationConfig::default(),
    };
    config.validate()?;

    eprintln!("SCPN Neutrino Osc - Three-Flavor Oscillation Sweep");
    eprintln!("==================================================");
    eprintln!(
        "  Angles: θ12 = {}°, θ13 = {}°, θ23 = {}°",
        config.angles.theta12, config.angles.theta13, config.angles.theta23
    );
    eprintln!(
        "  Splittings: Δm²₁₃ = {} · 1e-4 eV², Δm²₂₃ = {} · 1e-4 eV²",
        config.splittings.dm2_13, config.splittings.dm2_23
    );
    eprintln!("  Energy: {} MeV", config.energy_mev);
    eprintln!(
        "  Range: [{}, {}] km, {} samples",
        config.l_range[0], config.l_range[1], config.samples
    );

    let u = mixing_matrix(&config.angles)?;
    eprintln!("\nMixing matrix U:");
    print_matrix(&u);

    let trace = integrate(&config)?;
    println!("{}", serde_json::to_string_pretty(&trace)?);
    Ok(())
}

/// Render U with 3-decimal rounding, flavor rows against mass columns.
fn print_matrix(u: &Mat3) {
    eprintln!("           ν1        ν2        ν3");
    let labels = ['e', 'μ', 'τ'];
    for (label, row) in labels.iter().zip(&u.0) {
        eprintln!(
            "  {} → {:>8.3}  {:>8.3}  {:>8.3}",
            label, row[0], row[1], row[2]
        );
    }
}
