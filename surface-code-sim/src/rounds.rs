//! Stabilizer readout rounds built from the state-vector primitives.
//!
//! **Z round** (flags X errors): per check, reset the ancilla to |0>,
//! apply CNOT(data → ancilla) across the four supports, measure the
//! ancilla in Z.
//!
//! **X round** (flags Z errors): per check, reset the ancilla, rotate it
//! to |+> with H, apply CNOT(ancilla → data) across the supports, rotate
//! back with H, measure in Z.
//!
//! Both rounds visit checks and supports in the order stored on the
//! [`SurfaceCode`], so bit k of a syndrome always belongs to check k.
//! Measurement snapping keeps the bits deterministic whenever the data
//! qubits are in a stabilizer eigenstate.

use rand::Rng;

use statevector_sim::apply::{apply_1q, apply_controlled_1q};
use statevector_sim::gates::{hadamard, pauli_x};
use statevector_sim::measure::measure_qubit_z;
use statevector_sim::state::StateVector;

use crate::lattice::SurfaceCode;

/// Force `qubit` to |0>: measure in Z, flip with X when the outcome is 1.
pub fn reset_to_zero<R: Rng>(psi: &mut StateVector, qubit: usize, rng: &mut R) {
    if measure_qubit_z(psi, qubit, rng) == 1 {
        apply_1q(&pauli_x(), psi, qubit);
    }
}

/// Rotate every data qubit with H, taking |0>^n_data to |+>^n_data.
///
/// Purely unitary: assumes the data block currently holds |0>^n_data
/// (fresh from `StateVector::basis(sc.n_qubits(), 0)`) and leaves the
/// ancillas untouched.
pub fn prepare_all_plus_unitary(psi: &mut StateVector, sc: &SurfaceCode) {
    let h = hadamard();
    for q in 0..sc.n_data() {
        apply_1q(&h, psi, q);
    }
}

/// Rebuild |+>^n_data from scratch: reset each data qubit to |0>, then H.
///
/// Destroys any pre-existing data-qubit state, including injected errors;
/// use only at the start of an independent run.
pub fn prepare_all_plus_fresh<R: Rng>(psi: &mut StateVector, sc: &SurfaceCode, rng: &mut R) {
    let h = hadamard();
    for q in 0..sc.n_data() {
        reset_to_zero(psi, q, rng);
        apply_1q(&h, psi, q);
    }
}

/// One Z-stabilizer round. Returns one bit per Z check.
pub fn z_round<R: Rng>(psi: &mut StateVector, sc: &SurfaceCode, rng: &mut R) -> Vec<u8> {
    let x = pauli_x();
    let mut syndrome = Vec::with_capacity(sc.z_anc().len());
    for (check, &anc) in sc.z_checks().iter().zip(sc.z_anc()) {
        reset_to_zero(psi, anc, rng);
        for &data in check {
            apply_controlled_1q(&x, psi, data, anc);
        }
        syndrome.push(measure_qubit_z(psi, anc, rng));
    }
    syndrome
}

/// One X-stabilizer round. Returns one bit per X check.
pub fn x_round<R: Rng>(psi: &mut StateVector, sc: &SurfaceCode, rng: &mut R) -> Vec<u8> {
    let h = hadamard();
    let x = pauli_x();
    let mut syndrome = Vec::with_capacity(sc.x_anc().len());
    for (check, &anc) in sc.x_checks().iter().zip(sc.x_anc()) {
        reset_to_zero(psi, anc, rng);
        apply_1q(&h, psi, anc);
        for &data in check {
            apply_controlled_1q(&x, psi, anc, data);
        }
        apply_1q(&h, psi, anc);
        syndrome.push(measure_qubit_z(psi, anc, rng));
    }
    syndrome
}
