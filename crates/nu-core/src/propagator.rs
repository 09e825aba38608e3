// ─────────────────────────────────────────────────────────────────────
// SCPN Neutrino Osc — Propagator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Flavor-basis one-step evolution operator.

use num_complex::Complex64;
use nu_math::{CMat3, Mat3};
use nu_types::config::MassSplittings;
use nu_types::constants::{MEV_PER_GEV, PHASE_KM_EV2_PER_GEV, SPLITTING_UNIT_EV2};
use nu_types::error::{OscError, OscResult};

/// Build the complex propagator P = U · diag(e^{iφ₁}, e^{iφ₂}, 1) · Uᵗ
/// for one distance increment `dl_km`.
///
/// φₖ = −Δm²ₖ[eV²] · 2.54 · dL[km] / E[GeV]. Mass eigenstate 3 is the
/// phase reference (held at zero); Δm²₁₃ drives slot 1 and Δm²₂₃ slot 2.
/// Conjugating a unit-modulus diagonal by a real orthogonal U keeps P
/// exactly unitary, so repeated application preserves total probability.
pub fn propagator(
    u: &Mat3,
    splittings: &MassSplittings,
    dl_km: f64,
    energy_mev: f64,
) -> OscResult<CMat3> {
    if !energy_mev.is_finite() {
        return Err(OscError::InvalidParameter(format!(
            "energy is not finite: {energy_mev}"
        )));
    }
    if energy_mev <= 0.0 {
        return Err(OscError::InvalidEnergy {
            energy_mev,
        });
    }
    for (name, value) in [
        ("dm2_13", splittings.dm2_13),
        ("dm2_23", splittings.dm2_23),
        ("dl", dl_km),
    ] {
        if !value.is_finite() {
            return Err(OscError::InvalidParameter(format!(
                "{name} is not finite: {value}"
            )));
        }
    }

    let energy_gev = energy_mev / MEV_PER_GEV;
    let dm2_13_ev2 = splittings.dm2_13 * SPLITTING_UNIT_EV2;
    let dm2_23_ev2 = splittings.dm2_23 * SPLITTING_UNIT_EV2;

    let phi1 = -dm2_13_ev2 * PHASE_KM_EV2_PER_GEV * dl_km / energy_gev;
    let phi2 = -dm2_23_ev2 * PHASE_KM_EV2_PER_GEV * dl_km / energy_gev;

    let diag = CMat3::from_diag([
        Complex64::from_polar(1.0, phi1),
        Complex64::from_polar(1.0, phi2),
        Complex64::new(1.0, 0.0),
    ]);

    let cu = CMat3::from_real(u);
    let cut = CMat3::from_real(&u.transpose());
    Ok(cu.mul(&diag).mul(&cut))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mixing::mixing_matrix;
    use nu_types::config::MixingAngles;

    fn best_fit_u() -> Mat3 {
        mixing_matrix(&MixingAngles::default()).unwrap()
    }

    fn cmat_max_diff(a: &CMat3, b: &CMat3) -> f64 {
        let mut max = 0.0_f64;
        for i in 0..3 {
            for j in 0..3 {
                max = max.max((a.0[i][j] - b.0[i][j]).norm());
            }
        }
        max
    }

    #[test]
    fn test_zero_splittings_give_identity() {
        let u = best_fit_u();
        let zero = MassSplittings {
            dm2_13: 0.0,
            dm2_23: 0.0,
        };
        let p = propagator(&u, &zero, 0.1, 6.0).unwrap();
        assert!(
            cmat_max_diff(&p, &CMat3::identity()) < 1e-12,
            "zero splittings must collapse to U·Uᵗ = I"
        );
    }

    #[test]
    fn test_zero_energy_rejected() {
        let u = best_fit_u();
        let result = propagator(&u, &MassSplittings::default(), 0.1, 0.0);
        assert!(matches!(result, Err(OscError::InvalidEnergy { .. })));
    }

    #[test]
    fn test_negative_energy_rejected() {
        let u = best_fit_u();
        let result = propagator(&u, &MassSplittings::default(), 0.1, -2.0);
        assert!(matches!(result, Err(OscError::InvalidEnergy { .. })));
    }

    #[test]
    fn test_nan_splitting_rejected() {
        let u = best_fit_u();
        let bad = MassSplittings {
            dm2_13: f64::NAN,
            dm2_23: 24.4,
        };
        let result = propagator(&u, &bad, 0.1, 6.0);
        assert!(matches!(result, Err(OscError::InvalidParameter(_))));
    }

    #[test]
    fn test_pure_function_identical_outputs() {
        let u = best_fit_u();
        let s = MassSplittings::default();
        let p1 = propagator(&u, &s, 0.1, 6.0).unwrap();
        let p2 = propagator(&u, &s, 0.1, 6.0).unwrap();
        assert_eq!(p1, p2, "same inputs must produce structurally identical matrices");
    }

    #[test]
    fn test_propagator_is_unitary() {
        // P·P† = I: conjugate-transpose product collapses to identity
        let u = best_fit_u();
        let p = propagator(&u, &MassSplittings::default(), 0.1, 6.0).unwrap();
        let mut p_dagger = [[Complex64::new(0.0, 0.0); 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                p_dagger[i][j] = p.0[j][i].conj();
            }
        }
        let prod = p.mul(&CMat3(p_dagger));
        assert!(cmat_max_diff(&prod, &CMat3::identity()) < 1e-12);
    }
}
