//! Pauli error injection on data qubits.
//!
//! The error model is per-data-qubit single-Pauli depolarization: each
//! data qubit independently suffers one of X, Y, Z with probability p/3
//! each. Sampling is separated from application so the same draw can be
//! replayed into the paired |0>-basis and |+>-basis runs.

use rand::Rng;

use statevector_sim::apply::apply_1q;
use statevector_sim::gates::{pauli_x, rz};
use statevector_sim::state::StateVector;

use crate::lattice::SurfaceCode;

/// A single-qubit Pauli error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pauli {
    X,
    Y,
    Z,
}

impl Pauli {
    /// Inject this error on `qubit`.
    ///
    /// Z is realized as Rz(π) and Y as X followed by Z; both equal the
    /// exact Pauli up to a global phase, which is unobservable.
    pub fn apply(self, psi: &mut StateVector, qubit: usize) {
        match self {
            Pauli::X => apply_1q(&pauli_x(), psi, qubit),
            Pauli::Z => apply_1q(&rz(std::f64::consts::PI), psi, qubit),
            Pauli::Y => {
                apply_1q(&pauli_x(), psi, qubit);
                apply_1q(&rz(std::f64::consts::PI), psi, qubit);
            }
        }
    }
}

/// Sample one round of depolarizing noise over the data qubits.
///
/// Each data qubit is hit with probability `p`; a hit picks X, Y or Z
/// uniformly. Returns the (qubit, error) list in data-qubit order.
pub fn sample_depolarizing<R: Rng>(
    sc: &SurfaceCode,
    p: f64,
    rng: &mut R,
) -> Vec<(usize, Pauli)> {
    let p = p.clamp(0.0, 1.0);
    let mut errors = Vec::new();
    for q in 0..sc.n_data() {
        if rng.gen::<f64>() < p {
            let pauli = match rng.gen_range(0..3) {
                0 => Pauli::X,
                1 => Pauli::Y,
                _ => Pauli::Z,
            };
            errors.push((q, pauli));
        }
    }
    errors
}

/// Replay a sampled error list into a state.
pub fn apply_errors(psi: &mut StateVector, errors: &[(usize, Pauli)]) {
    for &(qubit, pauli) in errors {
        pauli.apply(psi, qubit);
    }
}
