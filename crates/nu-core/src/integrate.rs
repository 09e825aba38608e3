// ─────────────────────────────────────────────────────────────────────
// SCPN Neutrino Osc — Integrate
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Distance-sweep oscillation integrator.

use nu_math::CVec3;
use nu_types::config::SimulationConfig;
use nu_types::error::{OscError, OscResult};
use nu_types::trace::ProbabilityTrace;

use crate::mixing::mixing_matrix;
use crate::propagator::propagator;

/// Normalize non-negative flavor weights to a unit-norm real 3-vector.
pub fn normalize_weights(weights: [f64; 3]) -> OscResult<[f64; 3]> {
    for (flavor, &w) in ["e", "mu", "tau"].iter().zip(&weights) {
        if !w.is_finite() || w < 0.0 {
            return Err(OscError::InvalidParameter(format!(
                "initial weight for {flavor} must be finite and non-negative, got {w}"
            )));
        }
    }
    let norm = (weights[0] * weights[0] + weights[1] * weights[1] + weights[2] * weights[2]).sqrt();
    if norm == 0.0 {
        return Err(OscError::DegenerateInitialState);
    }
    Ok([weights[0] / norm, weights[1] / norm, weights[2] / norm])
}

/// Run one oscillation sweep over the configured distance range.
///
/// The mixing matrix and the one-step propagator are each built once;
/// the same propagator is reapplied at every step (piecewise-constant
/// approximation with fixed dL, deliberate). The first sample sits at
/// `l_min + dL`, not at `l_min`. The state is never renormalized: the
/// propagator is exactly unitary, so Σp stays at 1 up to float drift.
///
/// An empty range (`l_max ≤ l_min`) or zero samples yields an empty
/// trace, not an error.
pub fn integrate(config: &SimulationConfig) -> OscResult<ProbabilityTrace> {
    let weights = normalize_weights(config.initial_weights)?;
    let u = mixing_matrix(&config.angles)?;

    let [l_min, l_max] = config.l_range;
    if !l_min.is_finite() || !l_max.is_finite() {
        return Err(OscError::InvalidParameter(format!(
            "distance range is not finite: [{l_min}, {l_max}]"
        )));
    }
    if l_max <= l_min || config.samples == 0 {
        return Ok(ProbabilityTrace::default());
    }

    let dl = (l_max - l_min) / config.samples as f64;
    let step = propagator(&u, &config.splittings, dl, config.energy_mev)?;

    let mut state = CVec3::from_real(weights);
    let mut trace = ProbabilityTrace::with_capacity(config.samples);

    for i in 0..config.samples {
        state = step.mul_vec(&state);
        let distance = l_min + dl * (i + 1) as f64;
        trace.push(distance, state.probabilities());
    }

    Ok(trace)
}
