// ─────────────────────────────────────────────────────────────────────
// SCPN Neutrino Osc — Mixing
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! PMNS-style mixing matrix from three rotation angles.

use nu_math::{deg_to_rad, Mat3};
use nu_types::config::MixingAngles;
use nu_types::error::{OscError, OscResult};

/// Build the real orthogonal mixing matrix U from angles in degrees.
///
/// Rows are flavors (e, μ, τ), columns are mass eigenstates (1, 2, 3).
/// In this CP-conserving two-splitting model the matrix is the standard
/// PMNS product of three rotations with δ_CP = 0, so it stays real and
/// satisfies U·Uᵗ = I by construction. Degenerate angles (0°, 90°) are
/// valid inputs.
pub fn mixing_matrix(angles: &MixingAngles) -> OscResult<Mat3> {
    for (name, value) in [
        ("theta12", angles.theta12),
        ("theta13", angles.theta13),
        ("theta23", angles.theta23),
    ] {
        if !value.is_finite() {
            return Err(OscError::InvalidParameter(format!(
                "mixing angle {name} is not finite: {value}"
            )));
        }
    }

    let t12 = deg_to_rad(angles.theta12);
    let t13 = deg_to_rad(angles.theta13);
    let t23 = deg_to_rad(angles.theta23);

    let (s12, c12) = t12.sin_cos();
    let (s13, c13) = t13.sin_cos();
    let (s23, c23) = t23.sin_cos();

    Ok(Mat3([
        [c12 * c13, s12 * c13, s13],
        [
            -s12 * c23 - c12 * s23 * s13,
            c12 * c23 - s12 * s23 * s13,
            s23 * c13,
        ],
        [
            s12 * s23 - c12 * c23 * s13,
            -c12 * s23 - s12 * c23 * s13,
            c23 * c13,
        ],
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn angles(t12: f64, t13: f64, t23: f64) -> MixingAngles {
        MixingAngles {
            theta12: t12,
            theta13: t13,
            theta23: t23,
        }
    }

    #[test]
    fn test_zero_angles_give_identity() {
        let u = mixing_matrix(&angles(0.0, 0.0, 0.0)).unwrap();
        assert!(u.max_abs_diff(&Mat3::identity()) < EPSILON);
    }

    #[test]
    fn test_best_fit_orthogonality() {
        let u = mixing_matrix(&MixingAngles::default()).unwrap();
        let uut = u.mul(&u.transpose());
        assert!(
            uut.max_abs_diff(&Mat3::identity()) < EPSILON,
            "U·Uᵗ deviates from identity by {}",
            uut.max_abs_diff(&Mat3::identity())
        );
    }

    #[test]
    fn test_degenerate_right_angles_still_orthogonal() {
        let u = mixing_matrix(&angles(90.0, 90.0, 0.0)).unwrap();
        let uut = u.mul(&u.transpose());
        assert!(uut.max_abs_diff(&Mat3::identity()) < EPSILON);
    }

    #[test]
    fn test_known_entry() {
        // U[0][2] = sin θ13
        let u = mixing_matrix(&angles(33.44, 8.57, 49.0)).unwrap();
        let expected = deg_to_rad(8.57).sin();
        assert!((u.0[0][2] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_nan_angle_rejected() {
        let result = mixing_matrix(&angles(f64::NAN, 8.57, 49.0));
        assert!(matches!(result, Err(OscError::InvalidParameter(_))));
    }
}
