//! Fixed-size linear algebra for the oscillation engine.
//!
//! Everything here is 3×3 or 3×1: a real matrix for the mixing
//! construction, a complex matrix for the propagator, and a complex
//! vector for the flavor state. Implemented directly rather than
//! pulling in a general-purpose matrix library; the only dependency
//! is `num_complex` for the scalar type.

use num_complex::Complex64;

/// Degrees to radians.
pub fn deg_to_rad(deg: f64) -> f64 {
    deg / 180.0 * std::f64::consts::PI
}

/// Real 3×3 matrix, row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3(pub [[f64; 3]; 3]);

impl Mat3 {
    pub fn identity() -> Self {
        Mat3([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    pub fn transpose(&self) -> Self {
        let a = &self.0;
        Mat3([
            [a[0][0], a[1][0], a[2][0]],
            [a[0][1], a[1][1], a[2][1]],
            [a[0][2], a[1][2], a[2][2]],
        ])
    }

    pub fn mul(&self, other: &Mat3) -> Mat3 {
        let mut out = [[0.0; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += self.0[i][k] * other.0[k][j];
                }
                out[i][j] = sum;
            }
        }
        Mat3(out)
    }

    /// Largest absolute entry of (self − other).
    pub fn max_abs_diff(&self, other: &Mat3) -> f64 {
        let mut max = 0.0_f64;
        for i in 0..3 {
            for j in 0..3 {
                max = max.max((self.0[i][j] - other.0[i][j]).abs());
            }
        }
        max
    }
}

/// Complex 3×3 matrix, row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CMat3(pub [[Complex64; 3]; 3]);

impl CMat3 {
    pub fn identity() -> Self {
        let mut out = [[Complex64::new(0.0, 0.0); 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            row[i] = Complex64::new(1.0, 0.0);
        }
        CMat3(out)
    }

    /// Promote a real matrix (zero imaginary parts).
    pub fn from_real(m: &Mat3) -> Self {
        let mut out = [[Complex64::new(0.0, 0.0); 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                out[i][j] = Complex64::new(m.0[i][j], 0.0);
            }
        }
        CMat3(out)
    }

    /// Diagonal matrix from three complex entries.
    pub fn from_diag(d: [Complex64; 3]) -> Self {
        let mut out = [[Complex64::new(0.0, 0.0); 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            row[i] = d[i];
        }
        CMat3(out)
    }

    pub fn mul(&self, other: &CMat3) -> CMat3 {
        let mut out = [[Complex64::new(0.0, 0.0); 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                let mut sum = Complex64::new(0.0, 0.0);
                for k in 0..3 {
                    sum += self.0[i][k] * other.0[k][j];
                }
                out[i][j] = sum;
            }
        }
        CMat3(out)
    }

    /// Matrix-vector product.
    pub fn mul_vec(&self, v: &CVec3) -> CVec3 {
        let mut out = [Complex64::new(0.0, 0.0); 3];
        for (i, slot) in out.iter_mut().enumerate() {
            let mut sum = Complex64::new(0.0, 0.0);
            for k in 0..3 {
                sum += self.0[i][k] * v.0[k];
            }
            *slot = sum;
        }
        CVec3(out)
    }
}

/// Complex 3-vector: the flavor-basis amplitude state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CVec3(pub [Complex64; 3]);

impl CVec3 {
    /// Real vector with zero imaginary parts.
    pub fn from_real(v: [f64; 3]) -> Self {
        CVec3([
            Complex64::new(v[0], 0.0),
            Complex64::new(v[1], 0.0),
            Complex64::new(v[2], 0.0),
        ])
    }

    /// Per-component squared magnitude |aᵢ|², taken as the real part of
    /// the conjugate product so it is exact for any complex amplitude.
    pub fn probabilities(&self) -> [f64; 3] {
        let a = &self.0;
        [
            (a[0].conj() * a[0]).re,
            (a[1].conj() * a[1]).re,
            (a[2].conj() * a[2]).re,
        ]
    }

    /// Sum of squared magnitudes.
    pub fn norm_sq(&self) -> f64 {
        let p = self.probabilities();
        p[0] + p[1] + p[2]
    }
}
