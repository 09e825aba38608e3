// ─────────────────────────────────────────────────────────────────────
// SCPN Neutrino Osc — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{OscError, OscResult};

/// The three PMNS mixing angles, in degrees.
///
/// Each angle is expected in [0, 90]; degenerate values (0° or 90°)
/// are valid and produce degenerate but still orthogonal matrices.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MixingAngles {
    /// θ₁₂ (solar), degrees
    #[serde(default = "default_theta12")]
    pub theta12: f64,
    /// θ₁₃ (reactor), degrees
    #[serde(default = "default_theta13")]
    pub theta13: f64,
    /// θ₂₃ (atmospheric), degrees
    #[serde(default = "default_theta23")]
    pub theta23: f64,
}

fn default_theta12() -> f64 {
    constants::THETA12_DEG
}
fn default_theta13() -> f64 {
    constants::THETA13_DEG
}
fn default_theta23() -> f64 {
    constants::THETA23_DEG
}

impl Default for MixingAngles {
    fn default() -> Self {
        MixingAngles {
            theta12: default_theta12(),
            theta13: default_theta13(),
            theta23: default_theta23(),
        }
    }
}

/// The two squared-mass splittings, in units of 1e-4 eV².
///
/// The third mass eigenstate is the phase reference: its propagation
/// phase is held at zero, and the two splittings below set the phases
/// of eigenstates 1 and 2 relative to it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MassSplittings {
    /// Δm²₁₃ (1e-4 eV²)
    #[serde(default = "default_dm2_13")]
    pub dm2_13: f64,
    /// Δm²₂₃ (1e-4 eV²)
    #[serde(default = "default_dm2_23")]
    pub dm2_23: f64,
}

fn default_dm2_13() -> f64 {
    constants::DM2_13
}
fn default_dm2_23() -> f64 {
    constants::DM2_23
}

impl Default for MassSplittings {
    fn default() -> Self {
        MassSplittings {
            dm2_13: default_dm2_13(),
            dm2_23: default_dm2_23(),
        }
    }
}

/// Full parameter set for one oscillation sweep.
///
/// All fields default to the experimental best-fit reactor scenario:
/// 6 MeV electron antineutrinos over a 0–100 km baseline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default)]
    pub angles: MixingAngles,
    #[serde(default)]
    pub splittings: MassSplittings,
    /// Neutrino energy (MeV)
    #[serde(default = "default_energy_mev")]
    pub energy_mev: f64,
    /// Distance range [L_min, L_max] (km)
    #[serde(default = "default_l_range")]
    pub l_range: [f64; 2],
    /// Initial flavor weights (e, μ, τ); normalized before use
    #[serde(default = "default_initial_weights")]
    pub initial_weights: [f64; 3],
    /// Number of distance samples across the range
    #[serde(default = "default_samples")]
    pub samples: usize,
}

fn default_energy_mev() -> f64 {
    6.0
}
fn default_l_range() -> [f64; 2] {
    [0.0, 100.0]
}
fn default_initial_weights() -> [f64; 3] {
    [1.0, 0.0, 0.0]
}
fn default_samples() -> usize {
    constants::DEFAULT_SAMPLES
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            angles: MixingAngles::default(),
            splittings: MassSplittings::default(),
            energy_mev: default_energy_mev(),
            l_range: default_l_range(),
            initial_weights: default_initial_weights(),
            samples: default_samples(),
        }
    }
}

impl SimulationConfig {
    /// Load from a JSON file. Missing fields fall back to defaults.
    pub fn from_file(path: &str) -> OscResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Boundary validation: catches every malformed input up front so
    /// the engine never sees non-finite values.
    pub fn validate(&self) -> OscResult<()> {
        for (name, value) in [
            ("theta12", self.angles.theta12),
            ("theta13", self.angles.theta13),
            ("theta23", self.angles.theta23),
        ] {
            if !value.is_finite() {
                return Err(OscError::InvalidParameter(format!(
                    "mixing angle {name} is not finite: {value}"
                )));
            }
        }
        for (name, value) in [
            ("dm2_13", self.splittings.dm2_13),
            ("dm2_23", self.splittings.dm2_23),
        ] {
            if !value.is_finite() {
                return Err(OscError::InvalidParameter(format!(
                    "mass splitting {name} is not finite: {value}"
                )));
            }
        }
        if !self.energy_mev.is_finite() {
            return Err(OscError::InvalidParameter(format!(
                "energy is not finite: {}",
                self.energy_mev
            )));
        }
        if self.energy_mev <= 0.0 {
            return Err(OscError::InvalidEnergy {
                energy_mev: self.energy_mev,
            });
        }
        if !self.l_range[0].is_finite() || !self.l_range[1].is_finite() {
            return Err(OscError::InvalidParameter(format!(
                "distance range is not finite: [{}, {}]",
                self.l_range[0], self.l_range[1]
            )));
        }
        let mut total = 0.0;
        for (flavor, &w) in ["e", "mu", "tau"].iter().zip(&self.initial_weights) {
            if !w.is_finite() || w < 0.0 {
                return Err(OscError::InvalidParameter(format!(
                    "initial weight for {flavor} must be finite and non-negative, got {w}"
                )));
            }
            total += w;
        }
        if total == 0.0 {
            return Err(OscError::DegenerateInitialState);
        }
        Ok(())
    }
}
