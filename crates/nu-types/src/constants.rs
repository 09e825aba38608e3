// ─────────────────────────────────────────────────────────────────────
// SCPN Neutrino Osc — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Oscillation phase prefactor for Δm²[eV²] · L[km] / E[GeV].
///
/// Encodes the ħc natural-unit conversion of the standard vacuum
/// oscillation phase 1.27·Δm²·L/E, doubled because the phase is applied
/// to amplitudes rather than to sin² of the half-phase.
pub const PHASE_KM_EV2_PER_GEV: f64 = 2.54;

/// Mass splittings are supplied in units of 1e-4 eV².
pub const SPLITTING_UNIT_EV2: f64 = 1e-4;

/// Energies are supplied in MeV; the phase formula wants GeV.
pub const MEV_PER_GEV: f64 = 1000.0;

/// Solar mixing angle θ₁₂ best-fit value (degrees).
pub const THETA12_DEG: f64 = 33.44;

/// Reactor mixing angle θ₁₃ best-fit value (degrees).
pub const THETA13_DEG: f64 = 8.57;

/// Atmospheric mixing angle θ₂₃ best-fit value (degrees).
pub const THETA23_DEG: f64 = 49.0;

/// Δm²₁₃ best-fit value (1e-4 eV²).
pub const DM2_13: f64 = 25.1;

/// Δm²₂₃ best-fit value (1e-4 eV²).
pub const DM2_23: f64 = 24.4;

/// Default number of distance samples per sweep.
pub const DEFAULT_SAMPLES: usize = 1000;
