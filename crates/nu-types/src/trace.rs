// ─────────────────────────────────────────────────────────────────────
// SCPN Neutrino Osc — Trace
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

/// Output of one oscillation sweep: per-flavor observation probabilities
/// aligned to a shared sequence of distance samples.
///
/// All four vectors have the same length. Probabilities are squared
/// amplitude magnitudes and stay in [0, 1] up to floating-point drift;
/// they are never renormalized after a step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProbabilityTrace {
    /// Distance sample points (km)
    pub distances: Vec<f64>,
    /// Electron flavor probability at each sample
    pub electron: Vec<f64>,
    /// Muon flavor probability at each sample
    pub muon: Vec<f64>,
    /// Tau flavor probability at each sample
    pub tau: Vec<f64>,
}

impl ProbabilityTrace {
    pub fn with_capacity(n: usize) -> Self {
        ProbabilityTrace {
            distances: Vec::with_capacity(n),
            electron: Vec::with_capacity(n),
            muon: Vec::with_capacity(n),
            tau: Vec::with_capacity(n),
        }
    }

    /// Append one sample: distance plus the (e, μ, τ) probabilities.
    pub fn push(&mut self, distance: f64, probs: [f64; 3]) {
        self.distances.push(distance);
        self.electron.push(probs[0]);
        self.muon.push(probs[1]);
        self.tau.push(probs[2]);
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}
