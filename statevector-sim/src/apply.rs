//! In-place gate kernels over the amplitude vector.
//!
//! A gate on qubit t touches amplitude pairs whose indices differ only in
//! bit t. With `step = 2^t` and `block = 2^(t+1)`, walking `base` over
//! block boundaries and `off` through `0..step` enumerates every such pair
//! exactly once, so the 2×2 matrix is applied without ever materializing
//! its 2^n × 2^n lift. The 2-qubit kernel extends the same idea to quads
//! of indices over two bit positions.

use crate::gates::{controlled, Matrix2, Matrix4};
use crate::state::StateVector;

/// Apply a 2×2 unitary to `target` in place.
pub fn apply_1q(u: &Matrix2, psi: &mut StateVector, target: usize) {
    let n = psi.num_amplitudes();
    let step = 1usize << target;
    assert!(step < n, "target qubit {} out of range for {} amplitudes", target, n);
    let block = step << 1;

    let amps = psi.amps_mut();
    for base in (0..n).step_by(block) {
        for off in 0..step {
            let i0 = base + off;
            let i1 = i0 + step;
            let a = amps[i0];
            let b = amps[i1];
            amps[i0] = u[0][0] * a + u[0][1] * b;
            amps[i1] = u[1][0] * a + u[1][1] * b;
        }
    }
}

/// Apply a 4×4 unitary to the qubit pair `(qa, qb)` in place.
///
/// The matrix is interpreted in (high, low) bit order (see
/// [`crate::gates`]) regardless of the order `qa`, `qb` are given in.
/// Callers who think in (control, target) terms should go through
/// [`apply_controlled_1q`] instead.
pub fn apply_2q(u4: &Matrix4, psi: &mut StateVector, qa: usize, qb: usize) {
    assert_ne!(qa, qb, "two-qubit gate needs two distinct qubits");
    let low = qa.min(qb);
    let high = qa.max(qb);
    let s_l = 1usize << low;
    let s_h = 1usize << high;
    let n = psi.num_amplitudes();
    assert!(s_h < n, "qubit {} out of range for {} amplitudes", high, n);

    let amps = psi.amps_mut();
    for base in (0..n).step_by(s_h << 1) {
        for mid in (0..s_h).step_by(s_l << 1) {
            for off in 0..s_l {
                let i00 = base + mid + off;
                let i01 = i00 + s_l;
                let i10 = i00 + s_h;
                let i11 = i10 + s_l;

                let v00 = amps[i00];
                let v01 = amps[i01];
                let v10 = amps[i10];
                let v11 = amps[i11];

                amps[i00] = u4[0][0] * v00 + u4[0][1] * v01 + u4[0][2] * v10 + u4[0][3] * v11;
                amps[i01] = u4[1][0] * v00 + u4[1][1] * v01 + u4[1][2] * v10 + u4[1][3] * v11;
                amps[i10] = u4[2][0] * v00 + u4[2][1] * v01 + u4[2][2] * v10 + u4[2][3] * v11;
                amps[i11] = u4[3][0] * v00 + u4[3][1] * v01 + u4[3][2] * v10 + u4[3][3] * v11;
            }
        }
    }
}

/// Apply a controlled 1-qubit gate: `u` acts on `target` wherever
/// `control` is 1.
///
/// This is the single place where the relative (control, target) ordering
/// is absorbed: the lifter builds the 4×4 matrix for whichever of the two
/// is the higher-indexed bit, then dispatches to [`apply_2q`].
pub fn apply_controlled_1q(u: &Matrix2, psi: &mut StateVector, control: usize, target: usize) {
    let u4 = controlled(u, control > target);
    apply_2q(&u4, psi, control, target);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::{cnot, hadamard, pauli_x, rz};
    use num_complex::Complex64;

    fn expect_state(psi: &StateVector, reference: &[(usize, Complex64)], tol: f64) {
        for i in 0..psi.num_amplitudes() {
            let expected = reference
                .iter()
                .find(|(idx, _)| *idx == i)
                .map(|(_, a)| *a)
                .unwrap_or_else(|| Complex64::new(0.0, 0.0));
            assert!(
                (psi.amp(i) - expected).norm() < tol,
                "amplitude {} is {}, expected {}",
                i,
                psi.amp(i),
                expected
            );
        }
    }

    #[test]
    fn x_flips_the_target_bit() {
        let mut psi = StateVector::basis(3, 0);
        apply_1q(&pauli_x(), &mut psi, 1);
        expect_state(&psi, &[(2, Complex64::new(1.0, 0.0))], 1e-12);
    }

    #[test]
    fn h_splits_into_equal_superposition() {
        let mut psi = StateVector::basis(1, 0);
        apply_1q(&hadamard(), &mut psi, 0);
        let s = 1.0 / 2.0_f64.sqrt();
        expect_state(
            &psi,
            &[(0, Complex64::new(s, 0.0)), (1, Complex64::new(s, 0.0))],
            1e-12,
        );
    }

    #[test]
    fn gates_preserve_the_norm() {
        let mut psi = StateVector::basis(4, 0);
        apply_1q(&hadamard(), &mut psi, 0);
        apply_1q(&hadamard(), &mut psi, 2);
        apply_1q(&rz(1.234), &mut psi, 2);
        apply_2q(&cnot(), &mut psi, 1, 3);
        assert!(
            (psi.norm_sqr() - 1.0).abs() < 1e-10,
            "norm drifted to {}",
            psi.norm_sqr()
        );
    }

    #[test]
    fn involutions_round_trip_on_basis_states() {
        for index in 0..8 {
            let mut psi = StateVector::basis(3, index);
            apply_1q(&pauli_x(), &mut psi, 1);
            apply_1q(&pauli_x(), &mut psi, 1);
            apply_1q(&hadamard(), &mut psi, 2);
            apply_1q(&hadamard(), &mut psi, 2);
            apply_1q(&rz(0.77), &mut psi, 0);
            apply_1q(&rz(-0.77), &mut psi, 0);
            let reference = StateVector::basis(3, index);
            for i in 0..8 {
                assert!(
                    (psi.amp(i) - reference.amp(i)).norm() < 1e-12,
                    "XX / HH / Rz·Rz⁻¹ should be the identity (index {}, amp {})",
                    index,
                    i
                );
            }
        }
    }

    #[test]
    fn cnot_truth_table_on_two_qubits() {
        // (input index, output index) with the high bit driving the flip
        let table = [(0b00, 0b00), (0b01, 0b01), (0b10, 0b11), (0b11, 0b10)];
        for (input, output) in table {
            let mut psi = StateVector::basis(2, input);
            apply_2q(&cnot(), &mut psi, 0, 1);
            expect_state(&psi, &[(output, Complex64::new(1.0, 0.0))], 1e-12);
        }
    }

    #[test]
    fn cnot_twice_is_identity() {
        for input in 0..4 {
            let mut psi = StateVector::basis(2, input);
            apply_2q(&cnot(), &mut psi, 0, 1);
            apply_2q(&cnot(), &mut psi, 0, 1);
            expect_state(&psi, &[(input, Complex64::new(1.0, 0.0))], 1e-12);
        }
    }

    #[test]
    fn bell_pair_ties_indices_0_and_3() {
        let mut psi = StateVector::basis(2, 0);
        apply_1q(&hadamard(), &mut psi, 1);
        apply_2q(&cnot(), &mut psi, 0, 1);
        let s = 1.0 / 2.0_f64.sqrt();
        expect_state(
            &psi,
            &[(0, Complex64::new(s, 0.0)), (3, Complex64::new(s, 0.0))],
            1e-12,
        );
    }

    #[test]
    fn controlled_x_high_control_acts_as_cnot() {
        let table = [(0b00, 0b00), (0b01, 0b01), (0b10, 0b11), (0b11, 0b10)];
        for (input, output) in table {
            let mut psi = StateVector::basis(2, input);
            apply_controlled_1q(&pauli_x(), &mut psi, 1, 0);
            expect_state(&psi, &[(output, Complex64::new(1.0, 0.0))], 1e-12);
        }
    }

    #[test]
    fn controlled_x_low_control_acts_as_cnot() {
        let table = [(0b00, 0b00), (0b01, 0b11), (0b10, 0b10), (0b11, 0b01)];
        for (input, output) in table {
            let mut psi = StateVector::basis(2, input);
            apply_controlled_1q(&pauli_x(), &mut psi, 0, 1);
            expect_state(&psi, &[(output, Complex64::new(1.0, 0.0))], 1e-12);
        }
    }

    #[test]
    fn controlled_x_across_a_spectator_qubit() {
        // |100> with control = qubit 2, target = qubit 0 flips to |101>
        let mut psi = StateVector::basis(3, 4);
        apply_controlled_1q(&pauli_x(), &mut psi, 2, 0);
        expect_state(&psi, &[(5, Complex64::new(1.0, 0.0))], 1e-12);
    }

    #[test]
    fn controlled_h_acts_only_when_control_is_one() {
        let s = 1.0 / 2.0_f64.sqrt();

        let mut psi = StateVector::basis(2, 0b10);
        apply_controlled_1q(&hadamard(), &mut psi, 1, 0);
        expect_state(
            &psi,
            &[(0b10, Complex64::new(s, 0.0)), (0b11, Complex64::new(s, 0.0))],
            1e-12,
        );

        let mut psi = StateVector::basis(2, 0b00);
        apply_controlled_1q(&hadamard(), &mut psi, 1, 0);
        expect_state(&psi, &[(0b00, Complex64::new(1.0, 0.0))], 1e-12);
    }

    #[test]
    fn lifter_and_kernel_agree_bit_for_bit() {
        for input in 0..8 {
            for (control, target) in [(0usize, 2usize), (2, 0), (1, 2), (2, 1)] {
                let mut via_controlled = StateVector::basis(3, input);
                apply_controlled_1q(&rz(0.9), &mut via_controlled, control, target);

                let mut via_kernel = StateVector::basis(3, input);
                let u4 = controlled(&rz(0.9), control > target);
                apply_2q(&u4, &mut via_kernel, control, target);

                assert_eq!(
                    via_controlled.amps(),
                    via_kernel.amps(),
                    "controlled dispatch must match the raw kernel (input {}, c {}, t {})",
                    input,
                    control,
                    target
                );
            }
        }
    }

    #[test]
    #[should_panic]
    fn two_qubit_gate_rejects_identical_qubits() {
        let mut psi = StateVector::basis(2, 0);
        apply_2q(&cnot(), &mut psi, 1, 1);
    }

    #[test]
    #[should_panic]
    fn one_qubit_gate_rejects_out_of_range_target() {
        let mut psi = StateVector::basis(2, 0);
        apply_1q(&pauli_x(), &mut psi, 2);
    }
}
