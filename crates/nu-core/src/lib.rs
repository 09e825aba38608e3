//! Three-flavor neutrino oscillation engine.
//!
//! Pure numeric core: mixing-matrix construction, one-step propagator,
//! and the distance-sweep integrator. No rendering, no persistence;
//! callers supply a [`nu_types::config::SimulationConfig`] and receive
//! a [`nu_types::trace::ProbabilityTrace`] back.

pub mod integrate;
pub mod mixing;
pub mod propagator;

pub use integrate::{integrate, normalize_weights};
pub use mixing::mixing_matrix;
pub use propagator::propagator;
